//! Machine: rotor slots, stepping and the signal path.
//!
//! Slot 0 holds the reflector, slots `1..num_rotors` the remaining rotors,
//! and the rightmost `pawls` slots the rotors that step. Each keystroke
//! first steps the rotors, then routes the symbol through
//!
//! ```text
//! plugboard → slots N-1 … 1 → reflector (slot 0) → slots 1 … N-1 → plugboard⁻¹
//! ```
//!
//! Slots are [`RotorId`] handles into the catalog the machine owns. A
//! rotor's setting lives in its catalog entry: stepping a slot changes the
//! catalog rotor, and [`Machine::into_catalog`] hands those settings back.

use tracing::{debug, trace};

use crate::alphabet::Alphabet;
use crate::catalog::{RotorCatalog, RotorId};
use crate::error::{ConfigurationError, Result};
use crate::permutation::Permutation;
use crate::rotor::Rotor;

/// Rotor cipher machine.
#[derive(Debug, Clone)]
pub struct Machine {
    alphabet: Alphabet,
    num_rotors: usize,
    pawls: usize,
    catalog: RotorCatalog,
    slots: Vec<RotorId>,
    plugboard: Permutation,
}

impl Machine {
    /// Creates a machine with `num_rotors` slots, `pawls` of them stepping,
    /// drawing rotors from `catalog`.
    ///
    /// The plugboard starts as the identity.
    ///
    /// # Errors
    /// - [`ConfigurationError::InvalidRotorCount`] if `num_rotors == 0`.
    /// - [`ConfigurationError::InvalidPawlCount`] if `pawls >= num_rotors`.
    /// - [`ConfigurationError::AlphabetSize`] if a catalog rotor is built
    ///   over an alphabet of a different size.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Alphabet, Machine, RotorCatalog};
    ///
    /// let catalog = RotorCatalog::naval().unwrap();
    /// let machine = Machine::new(Alphabet::default(), 5, 3, catalog).unwrap();
    /// assert_eq!(machine.num_rotors(), 5);
    /// assert_eq!(machine.num_pawls(), 3);
    /// ```
    ///
    /// ```
    /// use enigma::{Alphabet, Machine, RotorCatalog};
    ///
    /// let catalog = RotorCatalog::naval().unwrap();
    /// assert!(Machine::new(Alphabet::default(), 5, 5, catalog).is_err());
    /// ```
    pub fn new(
        alphabet: Alphabet,
        num_rotors: usize,
        pawls: usize,
        catalog: RotorCatalog,
    ) -> Result<Self> {
        if num_rotors == 0 {
            return Err(ConfigurationError::InvalidRotorCount(num_rotors).into());
        }
        if pawls >= num_rotors {
            return Err(ConfigurationError::InvalidPawlCount { pawls, num_rotors }.into());
        }
        if let Some(rotor) = catalog.iter().find(|r| r.size() != alphabet.size()) {
            return Err(ConfigurationError::AlphabetSize {
                component: rotor.to_string(),
                expected: alphabet.size(),
                actual: rotor.size(),
            }
            .into());
        }

        debug!(
            num_rotors,
            pawls,
            catalog = catalog.len(),
            alphabet = %alphabet,
            "machine created"
        );

        let plugboard = Permutation::identity(&alphabet);
        Ok(Machine {
            alphabet,
            num_rotors,
            pawls,
            catalog,
            slots: Vec::with_capacity(num_rotors),
            plugboard,
        })
    }

    /// Returns the number of rotor slots, reflector included.
    pub fn num_rotors(&self) -> usize {
        self.num_rotors
    }

    /// Returns the number of pawls, which is the number of stepping slots.
    pub fn num_pawls(&self) -> usize {
        self.pawls
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn catalog(&self) -> &RotorCatalog {
        &self.catalog
    }

    pub fn plugboard(&self) -> &Permutation {
        &self.plugboard
    }

    /// Returns the rotor bound to `slot`, if rotors are inserted and the
    /// slot exists.
    pub fn rotor(&self, slot: usize) -> Option<&Rotor> {
        self.slots.get(slot).map(|&id| self.catalog.rotor(id))
    }

    /// Returns the current positions of slots `1..num_rotors` as symbols,
    /// leftmost first. Empty before rotors are inserted.
    pub fn settings(&self) -> String {
        self.slots
            .iter()
            .skip(1)
            .filter_map(|&id| {
                self.alphabet
                    .to_symbol(self.catalog.rotor(id).setting())
                    .ok()
            })
            .collect()
    }

    /// Ends the machine and returns its catalog, rotor settings included.
    pub fn into_catalog(self) -> RotorCatalog {
        self.catalog
    }

    /// Binds the catalog rotors named by `names` to the slots, in order.
    ///
    /// `names[0]` goes to the reflector slot. Names match case-insensitively.
    /// Every bound rotor is reset to setting 0. On error the previous
    /// bindings are kept.
    ///
    /// # Errors
    /// - [`ConfigurationError::RotorCount`] if `names.len() != num_rotors()`.
    /// - [`ConfigurationError::UnknownRotor`] if a name is not in the catalog.
    /// - [`ConfigurationError::DuplicateRotor`] if a rotor is named twice.
    /// - [`ConfigurationError::MissingReflector`] if slot 0 does not reflect.
    /// - [`ConfigurationError::MisplacedReflector`] if a reflector is named
    ///   for another slot.
    /// - [`ConfigurationError::NonRotatingPawlSlot`] /
    ///   [`ConfigurationError::RotatingFixedSlot`] if a rotor's ability to
    ///   rotate does not match whether its slot has a pawl.
    pub fn insert_rotors<S: AsRef<str>>(&mut self, names: &[S]) -> Result<()> {
        if names.len() != self.num_rotors {
            return Err(ConfigurationError::RotorCount {
                expected: self.num_rotors,
                actual: names.len(),
            }
            .into());
        }

        let first_pawl = self.num_rotors - self.pawls;
        let mut slots: Vec<RotorId> = Vec::with_capacity(self.num_rotors);
        for (slot, name) in names.iter().enumerate() {
            let name = name.as_ref();
            let id = self
                .catalog
                .find(name)
                .ok_or_else(|| ConfigurationError::UnknownRotor(name.to_string()))?;
            let rotor = self.catalog.rotor(id);
            if slots.contains(&id) {
                return Err(ConfigurationError::DuplicateRotor(rotor.name().to_string()).into());
            }
            if slot == 0 {
                if !rotor.reflects() {
                    return Err(
                        ConfigurationError::MissingReflector(rotor.name().to_string()).into(),
                    );
                }
            } else if rotor.reflects() {
                return Err(ConfigurationError::MisplacedReflector {
                    name: rotor.name().to_string(),
                    slot,
                }
                .into());
            } else if slot >= first_pawl && !rotor.rotates() {
                return Err(ConfigurationError::NonRotatingPawlSlot {
                    name: rotor.name().to_string(),
                    slot,
                }
                .into());
            } else if slot < first_pawl && rotor.rotates() {
                return Err(ConfigurationError::RotatingFixedSlot {
                    name: rotor.name().to_string(),
                    slot,
                }
                .into());
            }
            slots.push(id);
        }

        for &id in &slots {
            self.catalog.rotor_mut(id).set(0)?;
        }
        self.slots = slots;

        let bound: Vec<&str> = self
            .slots
            .iter()
            .map(|&id| self.catalog.rotor(id).name())
            .collect();
        debug!(rotors = ?bound, "rotors inserted");
        Ok(())
    }

    /// Sets the positions of slots `1..num_rotors` from `setting`, leftmost
    /// first. The reflector is never assigned. The whole string is checked
    /// before any rotor moves.
    ///
    /// # Errors
    /// - [`ConfigurationError::RotorsNotInserted`] before
    ///   [`insert_rotors`](Self::insert_rotors).
    /// - [`ConfigurationError::SettingLength`] if `setting` does not have
    ///   exactly `num_rotors() - 1` symbols.
    /// - [`AlphabetError::UnknownSymbol`](crate::AlphabetError::UnknownSymbol)
    ///   for a symbol outside the alphabet.
    pub fn set_rotors(&mut self, setting: &str) -> Result<()> {
        if self.slots.is_empty() {
            return Err(ConfigurationError::RotorsNotInserted.into());
        }
        let expected = self.num_rotors - 1;
        let actual = setting.chars().count();
        if actual != expected {
            return Err(ConfigurationError::SettingLength { expected, actual }.into());
        }

        let positions = setting
            .chars()
            .map(|c| self.alphabet.to_index(c))
            .collect::<std::result::Result<Vec<usize>, _>>()?;
        for (&id, posn) in self.slots.iter().skip(1).zip(positions) {
            self.catalog.rotor_mut(id).set(posn)?;
        }

        debug!(settings = %self.settings(), "rotor settings applied");
        Ok(())
    }

    /// Installs the plugboard used at the input and output of every symbol.
    ///
    /// # Errors
    /// [`ConfigurationError::AlphabetSize`] if `plugboard` is over an
    /// alphabet of a different size.
    pub fn set_plugboard(&mut self, plugboard: Permutation) -> Result<()> {
        if plugboard.size() != self.alphabet.size() {
            return Err(ConfigurationError::AlphabetSize {
                component: "plugboard".to_string(),
                expected: self.alphabet.size(),
                actual: plugboard.size(),
            }
            .into());
        }
        debug!(plugboard = %plugboard, "plugboard installed");
        self.plugboard = plugboard;
        Ok(())
    }

    /// Steps the rotors, then converts the symbol at `index`.
    ///
    /// `index` is wrapped modulo the alphabet size.
    ///
    /// # Errors
    /// [`ConfigurationError::RotorsNotInserted`] before
    /// [`insert_rotors`](Self::insert_rotors).
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Alphabet, Machine, Permutation, RotorCatalog};
    ///
    /// let alpha = Alphabet::default();
    /// let mut machine = Machine::new(alpha.clone(), 5, 3, RotorCatalog::naval().unwrap()).unwrap();
    /// machine.insert_rotors(&["B", "BETA", "III", "IV", "I"]).unwrap();
    /// machine.set_rotors("AXLE").unwrap();
    /// machine
    ///     .set_plugboard(Permutation::new("(HQ) (EX) (IP) (TR) (BY)", &alpha).unwrap())
    ///     .unwrap();
    /// assert_eq!(machine.convert(5).unwrap(), 16);
    /// ```
    pub fn convert(&mut self, index: usize) -> Result<usize> {
        if self.slots.is_empty() {
            return Err(ConfigurationError::RotorsNotInserted.into());
        }
        self.step();

        let mut signal = self.plugboard.permute(index);
        for &id in self.slots.iter().rev() {
            signal = self.catalog.rotor(id).convert_forward(signal);
        }
        for &id in self.slots.iter().skip(1) {
            signal = self.catalog.rotor(id).convert_backward(signal);
        }
        Ok(self.plugboard.invert(signal))
    }

    /// Converts a whole message, stepping the rotors once per symbol.
    ///
    /// The message is upper-cased and spaces are dropped. Every symbol is
    /// checked against the alphabet before the first rotor steps, so a
    /// failed call leaves the machine as it was.
    ///
    /// # Errors
    /// - [`AlphabetError::UnknownSymbol`](crate::AlphabetError::UnknownSymbol)
    ///   for any other character outside the alphabet.
    /// - [`ConfigurationError::RotorsNotInserted`] before
    ///   [`insert_rotors`](Self::insert_rotors).
    pub fn convert_message(&mut self, message: &str) -> Result<String> {
        if self.slots.is_empty() {
            return Err(ConfigurationError::RotorsNotInserted.into());
        }
        let indices = message
            .to_uppercase()
            .chars()
            .filter(|&c| c != ' ')
            .map(|c| self.alphabet.to_index(c))
            .collect::<std::result::Result<Vec<usize>, _>>()?;

        let mut converted = String::with_capacity(indices.len());
        for index in indices {
            let out = self.convert(index)?;
            converted.push(self.alphabet.to_symbol(out)?);
        }
        Ok(converted)
    }

    /// Advances the rotors for one keystroke.
    ///
    /// The rightmost slot always steps. A rotor at its notch steps itself and
    /// its left neighbor (double stepping). Flags come from the settings
    /// before this keystroke, and each flagged slot steps once. Slot 0 is
    /// never flagged.
    fn step(&mut self) {
        let n = self.slots.len();
        let mut flagged = vec![false; n];
        flagged[n - 1] = true;
        for (i, &id) in self.slots.iter().enumerate().skip(1) {
            if self.catalog.rotor(id).at_notch() {
                flagged[i] = true;
                flagged[i - 1] = true;
            }
        }
        flagged[0] = false;

        for (&id, &step) in self.slots.iter().zip(&flagged) {
            if step {
                self.catalog.rotor_mut(id).advance();
            }
        }
        trace!(settings = %self.settings(), "rotors stepped");
    }
}
