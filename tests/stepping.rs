//! Stepping behavior of the rotor stack, observed through `Machine::settings`.

use enigma::{Alphabet, Machine, Permutation, Rotor, RotorCatalog};

fn naval(rotors: [&str; 5], settings: &str) -> Machine {
    let mut m = Machine::new(Alphabet::default(), 5, 3, RotorCatalog::naval().unwrap()).unwrap();
    m.insert_rotors(&rotors).unwrap();
    m.set_rotors(settings).unwrap();
    m
}

fn step_trace(m: &mut Machine, keystrokes: usize) -> Vec<String> {
    (0..keystrokes)
        .map(|_| {
            m.convert(0).unwrap();
            m.settings()
        })
        .collect()
}

/// The rightmost rotor steps once per keystroke, whatever the notch state.
#[test]
fn rightmost_steps_once_per_keystroke() {
    let mut m = naval(["B", "BETA", "III", "IV", "I"], "AAAA");
    for k in 1..=60usize {
        m.convert(0).unwrap();
        assert_eq!(m.rotor(4).unwrap().setting(), k % 26);
    }
}

/// Rotor I at its notch Q carries rotor IV.
#[test]
fn notch_carries_left_neighbor() {
    let mut m = naval(["B", "BETA", "III", "IV", "I"], "AAAP");
    assert_eq!(step_trace(&mut m, 3), ["AAAQ", "AABR", "AABS"]);
}

/// The middle rotating rotor, one position before its notch, steps on two
/// consecutive keystrokes.
#[test]
fn double_step_anomaly() {
    let mut m = naval(["B", "BETA", "III", "IV", "I"], "AAIQ");
    let trace = step_trace(&mut m, 4);
    assert_eq!(trace, ["AAJR", "ABKS", "ABKT", "ABKU"]);

    let middle: Vec<char> = trace.iter().map(|s| s.chars().nth(2).unwrap()).collect();
    assert_eq!(middle, ['J', 'K', 'K', 'K']);
}

#[test]
fn double_step_with_rotors_one_two_three() {
    let mut m = naval(["B", "BETA", "I", "II", "III"], "AADU");
    assert_eq!(step_trace(&mut m, 3), ["AADV", "AAEW", "ABFX"]);
}

/// The leftmost rotating rotor at its notch pushes on the fixed rotor,
/// which does not move.
#[test]
fn fixed_rotor_never_steps() {
    let mut m = naval(["B", "GAMMA", "III", "IV", "I"], "CVJQ");
    for _ in 0..200 {
        m.convert(0).unwrap();
        assert_eq!(m.settings().chars().next(), Some('C'));
        assert_eq!(m.rotor(0).unwrap().setting(), 0);
    }
}

/// Stepping reads the settings from before the keystroke: rotor I at Q and
/// rotor IV at J both fire, and rotor III steps only once.
#[test]
fn flags_use_pre_step_snapshot() {
    let mut m = naval(["B", "BETA", "III", "IV", "I"], "AAJQ");
    assert_eq!(step_trace(&mut m, 1), ["ABKR"]);
}

/// A machine whose pawl count leaves a moving rotor out of the rightmost
/// slot still only steps the rightmost slot and notch-driven neighbors.
#[test]
fn single_pawl_machine() {
    let alpha = Alphabet::default();
    let mut catalog = RotorCatalog::new();
    catalog
        .add(
            Rotor::reflector(
                "R",
                Permutation::new("(AB) (CD) (EF) (GH) (IJ) (KL) (MN) (OP) (QR) (ST) (UV) (WX) (YZ)", &alpha)
                    .unwrap(),
            )
            .unwrap(),
        )
        .unwrap();
    catalog
        .add(Rotor::fixed("F", Permutation::new("(AZ)", &alpha).unwrap()))
        .unwrap();
    catalog
        .add(Rotor::moving("M", Permutation::new("(ABC)", &alpha).unwrap(), "C").unwrap())
        .unwrap();

    let mut m = Machine::new(alpha, 3, 1, catalog).unwrap();
    m.insert_rotors(&["R", "F", "M"]).unwrap();
    m.set_rotors("AA").unwrap();
    assert_eq!(step_trace(&mut m, 4), ["AB", "AC", "AD", "AE"]);
}
