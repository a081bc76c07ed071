//! RotorCatalog: arena of available rotors.
//!
//! Rotors are stored in a contiguous `Vec` and referenced by [`RotorId`].
//! A [`Machine`](crate::Machine) takes ownership of a catalog and binds its
//! slots to ids, so a rotor's setting is shared between the catalog entry
//! and the slot it occupies rather than copied into the machine.

use crate::alphabet::Alphabet;
use crate::error::{ConfigurationError, Result};
use crate::permutation::Permutation;
use crate::rotor::Rotor;

/// Rotor slots of the four-rotor naval machine (reflector included).
pub const NAVAL_SLOTS: usize = 5;

/// Pawls of the four-rotor naval machine.
pub const NAVAL_PAWLS: usize = 3;

/// Stepping rotors: name, wiring, notches.
const NAVAL_MOVING: [(&str, &str, &str); 5] = [
    ("I", "(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)", "Q"),
    ("II", "(FIXVYOMW) (CDKLHUP) (ESZ) (BJ) (GR) (NT) (A) (Q)", "E"),
    ("III", "(ABDHPEJT) (CFLVMZOYQIRWUKXSG) (N)", "V"),
    ("IV", "(AEPLIYWCOXMRFZBSTGJQNH) (DV) (KU)", "J"),
    ("V", "(AVOLDRWFIUQ)(BZKSMNHYC) (EGTJPX)", "Z"),
];

/// Thin non-stepping rotors.
const NAVAL_FIXED: [(&str, &str); 2] = [
    ("Beta", "(ALBEVFCYODJWUGNMQTZSKPR) (HIX)"),
    ("Gamma", "(AFNIRLBSQWVXGUZDKMTPCOYJHE)"),
];

/// Thin reflectors.
const NAVAL_REFLECTORS: [(&str, &str); 2] = [
    (
        "B",
        "(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)",
    ),
    (
        "C",
        "(AR) (BD) (CO) (EJ) (FN) (GT) (HK) (IV) (LM) (PW) (QZ) (SX) (UY)",
    ),
];

/// Unique identifier for a rotor within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RotorId(usize);

impl RotorId {
    /// Position of the rotor in catalog order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Ordered collection of rotors with unique, case-insensitive names.
#[derive(Debug, Clone, Default)]
pub struct RotorCatalog {
    rotors: Vec<Rotor>,
}

impl RotorCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        RotorCatalog { rotors: Vec::new() }
    }

    /// Creates an empty catalog with room for `capacity` rotors.
    pub fn with_capacity(capacity: usize) -> Self {
        RotorCatalog {
            rotors: Vec::with_capacity(capacity),
        }
    }

    /// Builds the nine rotors of the four-rotor naval machine over `'A'..='Z'`:
    /// moving rotors I–V, fixed rotors Beta and Gamma, reflectors B and C.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::RotorCatalog;
    ///
    /// let catalog = RotorCatalog::naval().unwrap();
    /// assert_eq!(catalog.len(), 9);
    /// assert!(catalog.find("beta").is_some());
    /// ```
    pub fn naval() -> Result<Self> {
        let alphabet = Alphabet::default();
        let mut catalog = Self::with_capacity(
            NAVAL_MOVING.len() + NAVAL_FIXED.len() + NAVAL_REFLECTORS.len(),
        );
        for (name, cycles, notches) in NAVAL_MOVING {
            let perm = Permutation::new(cycles, &alphabet)?;
            catalog.add(Rotor::moving(name, perm, notches)?)?;
        }
        for (name, cycles) in NAVAL_FIXED {
            let perm = Permutation::new(cycles, &alphabet)?;
            catalog.add(Rotor::fixed(name, perm))?;
        }
        for (name, cycles) in NAVAL_REFLECTORS {
            let perm = Permutation::new(cycles, &alphabet)?;
            catalog.add(Rotor::reflector(name, perm)?)?;
        }
        Ok(catalog)
    }

    /// Adds `rotor` and returns its id.
    ///
    /// # Errors
    /// [`ConfigurationError::DuplicateName`] if a rotor with the same name,
    /// compared case-insensitively, is already present.
    pub fn add(&mut self, rotor: Rotor) -> std::result::Result<RotorId, ConfigurationError> {
        if self.find(rotor.name()).is_some() {
            return Err(ConfigurationError::DuplicateName(rotor.name().to_string()));
        }
        let id = RotorId(self.rotors.len());
        self.rotors.push(rotor);
        Ok(id)
    }

    /// Looks up a rotor by case-insensitive exact name.
    pub fn find(&self, name: &str) -> Option<RotorId> {
        let wanted = name.to_uppercase();
        self.rotors
            .iter()
            .position(|r| r.name().to_uppercase() == wanted)
            .map(RotorId)
    }

    /// Returns the rotor with the given id, if it belongs to this catalog.
    pub fn get(&self, id: RotorId) -> Option<&Rotor> {
        self.rotors.get(id.0)
    }

    /// Returns the rotor with the given id mutably, if it belongs to this catalog.
    pub fn get_mut(&mut self, id: RotorId) -> Option<&mut Rotor> {
        self.rotors.get_mut(id.0)
    }

    /// Returns the number of rotors.
    pub fn len(&self) -> usize {
        self.rotors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rotors.is_empty()
    }

    /// Iterates over the rotors in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Rotor> {
        self.rotors.iter()
    }

    // Ids handed to the machine always come from `find` on this catalog.
    pub(crate) fn rotor(&self, id: RotorId) -> &Rotor {
        &self.rotors[id.0]
    }

    pub(crate) fn rotor_mut(&mut self, id: RotorId) -> &mut Rotor {
        &mut self.rotors[id.0]
    }
}
