//! Rotor: wiring permutation plus a rotational offset.
//!
//! The three rotor variants differ only in capabilities, so they share one
//! struct and are distinguished by a closed [`RotorKind`] tag bound at
//! construction:
//!
//! | Kind        | rotates | reflects | notches | `advance()`             |
//! |-------------|---------|----------|---------|-------------------------|
//! | `Fixed`     | no      | no       | none    | no-op                   |
//! | `Moving`    | yes     | no       | yes     | `setting + 1 (mod size)`|
//! | `Reflector` | no      | yes      | none    | no-op                   |

use std::fmt;

use crate::alphabet::Alphabet;
use crate::error::{AlphabetError, ConfigurationError, EnigmaError};
use crate::permutation::Permutation;

/// Capability tag of a rotor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotorKind {
    /// Never moves. Used for the non-stepping wheels left of the pawls.
    Fixed,
    /// Stepped by a pawl. `notches` are sorted, deduplicated indices.
    Moving { notches: Vec<usize> },
    /// Turns the signal back through the stack. Always at setting 0.
    Reflector,
}

/// A rotor with its wiring at the reference position and its current offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    name: String,
    permutation: Permutation,
    setting: usize,
    kind: RotorKind,
}

impl Rotor {
    /// Creates a rotor that neither rotates nor reflects.
    pub fn fixed(name: impl Into<String>, permutation: Permutation) -> Self {
        Rotor {
            name: name.into(),
            permutation,
            setting: 0,
            kind: RotorKind::Fixed,
        }
    }

    /// Creates a rotating rotor with notches at the symbols of `notches`.
    ///
    /// Notch symbols are translated to indices once, here.
    ///
    /// # Parameters
    /// - `name`: Catalog name of the rotor.
    /// - `permutation`: Wiring at setting 0.
    /// - `notches`: Symbols at which the rotor engages its left neighbor.
    ///
    /// # Errors
    /// [`AlphabetError::UnknownSymbol`] if a notch symbol is not in the
    /// permutation's alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Alphabet, Permutation, Rotor};
    ///
    /// let perm = Permutation::new("(AB) (CDEFGHIJKLMNOPQRSTUVWXYZ)", &Alphabet::default()).unwrap();
    /// let mut rotor = Rotor::moving("forward one", perm, "B").unwrap();
    /// assert!(!rotor.at_notch());
    /// rotor.advance();
    /// assert!(rotor.at_notch());
    /// ```
    pub fn moving(
        name: impl Into<String>,
        permutation: Permutation,
        notches: &str,
    ) -> Result<Self, AlphabetError> {
        let alphabet = permutation.alphabet();
        let mut indices = notches
            .chars()
            .map(|c| alphabet.to_index(c))
            .collect::<Result<Vec<usize>, AlphabetError>>()?;
        indices.sort_unstable();
        indices.dedup();
        Ok(Rotor {
            name: name.into(),
            permutation,
            setting: 0,
            kind: RotorKind::Moving { notches: indices },
        })
    }

    /// Creates a reflector.
    ///
    /// # Errors
    /// [`ConfigurationError::NotAnInvolution`] if the wiring is not its own
    /// inverse.
    pub fn reflector(
        name: impl Into<String>,
        permutation: Permutation,
    ) -> Result<Self, ConfigurationError> {
        let name = name.into();
        if !permutation.is_involution() {
            return Err(ConfigurationError::NotAnInvolution(name));
        }
        Ok(Rotor {
            name,
            permutation,
            setting: 0,
            kind: RotorKind::Reflector,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &RotorKind {
        &self.kind
    }

    /// Returns the wiring at setting 0.
    pub fn permutation(&self) -> &Permutation {
        &self.permutation
    }

    pub fn alphabet(&self) -> &Alphabet {
        self.permutation.alphabet()
    }

    /// Returns the number of positions of the rotor.
    pub fn size(&self) -> usize {
        self.permutation.size()
    }

    /// Returns true if the rotor is stepped by a pawl.
    pub fn rotates(&self) -> bool {
        matches!(self.kind, RotorKind::Moving { .. })
    }

    /// Returns true if the rotor is a reflector.
    pub fn reflects(&self) -> bool {
        matches!(self.kind, RotorKind::Reflector)
    }

    /// Returns the notch indices. Empty for non-rotating rotors.
    pub fn notches(&self) -> &[usize] {
        match &self.kind {
            RotorKind::Moving { notches } => notches.as_slice(),
            RotorKind::Fixed | RotorKind::Reflector => &[],
        }
    }

    /// Returns the current offset.
    pub fn setting(&self) -> usize {
        self.setting
    }

    /// Sets the current offset, wrapped modulo [`size`](Self::size).
    ///
    /// # Errors
    /// [`ConfigurationError::ReflectorSetting`] if a reflector is asked for
    /// any position other than 0.
    pub fn set(&mut self, posn: usize) -> Result<(), ConfigurationError> {
        let posn = posn % self.size();
        if self.reflects() && posn != 0 {
            return Err(ConfigurationError::ReflectorSetting {
                name: self.name.clone(),
                setting: posn,
            });
        }
        self.setting = posn;
        Ok(())
    }

    /// Sets the current offset to the index of `symbol`.
    ///
    /// # Errors
    /// An [`AlphabetError`] for an unknown symbol, or the errors of
    /// [`set`](Self::set).
    pub fn set_symbol(&mut self, symbol: char) -> Result<(), EnigmaError> {
        let posn = self.alphabet().to_index(symbol)?;
        self.set(posn)?;
        Ok(())
    }

    /// Passes the signal at contact `p` right to left through the wiring.
    pub fn convert_forward(&self, p: usize) -> usize {
        let size = self.size();
        let shifted = (self.setting + p) % size;
        let wired = self.permutation.permute(shifted);
        (wired + size - self.setting) % size
    }

    /// Passes the signal at contact `c` left to right through the inverse wiring.
    pub fn convert_backward(&self, c: usize) -> usize {
        let size = self.size();
        let shifted = (self.setting + c) % size;
        let wired = self.permutation.invert(shifted);
        (wired + size - self.setting) % size
    }

    /// Returns true if the rotor sits at one of its notches.
    pub fn at_notch(&self) -> bool {
        match &self.kind {
            RotorKind::Moving { notches } => notches.binary_search(&self.setting).is_ok(),
            RotorKind::Fixed | RotorKind::Reflector => false,
        }
    }

    /// Advances one position if the rotor rotates; otherwise does nothing.
    pub fn advance(&mut self) {
        if let RotorKind::Moving { .. } = self.kind {
            self.setting = (self.setting + 1) % self.size();
        }
    }
}

impl fmt::Display for Rotor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rotor {}", self.name)
    }
}
