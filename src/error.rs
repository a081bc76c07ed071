//! Error types for the enigma library.
//!
//! Failures fall into three families, each with its own enum so callers can
//! match on the family they care about:
//! - [`AlphabetError`]: a symbol or index is not part of the alphabet
//! - [`ConfigurationError`]: the machine or a rotor is structurally misconfigured
//! - [`PermutationError`]: a cycle-notation string is malformed

use thiserror::Error;

/// Top-level error type for all operations in the library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// Symbol lookup failed.
    #[error("alphabet error: {0}")]
    Alphabet(#[from] AlphabetError),

    /// Structural misconfiguration of a rotor, catalog or machine.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Malformed cycle notation.
    #[error("permutation error: {0}")]
    Permutation(#[from] PermutationError),
}

/// Alphabet membership and construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    /// Symbol is not a member of the alphabet.
    #[error("symbol {0:?} is not in the alphabet")]
    UnknownSymbol(char),

    /// Index does not address a symbol.
    #[error("index {index} is out of range for an alphabet of {size} symbols")]
    IndexOutOfRange { index: usize, size: usize },

    /// Alphabet would contain no symbols.
    #[error("alphabet must contain at least one symbol")]
    Empty,

    /// Symbol listed more than once.
    #[error("symbol {0:?} appears more than once in the alphabet")]
    DuplicateSymbol(char),

    /// Parentheses and whitespace are reserved for cycle notation.
    #[error("symbol {0:?} is reserved and cannot be part of an alphabet")]
    ReservedSymbol(char),
}

/// Structural configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Machine needs at least one rotor slot.
    #[error("number of rotor slots must be positive, got {0}")]
    InvalidRotorCount(usize),

    /// Pawl count must leave slot 0 for the reflector.
    #[error("number of pawls must be below the {num_rotors} rotor slots, got {pawls}")]
    InvalidPawlCount { pawls: usize, num_rotors: usize },

    /// Wrong number of rotor names passed to `insert_rotors`.
    #[error("expected {expected} rotor names, got {actual}")]
    RotorCount { expected: usize, actual: usize },

    /// No catalog rotor matches the name.
    #[error("no rotor named {0:?} in the catalog")]
    UnknownRotor(String),

    /// The same rotor was named for two slots.
    #[error("rotor {0:?} is bound to more than one slot")]
    DuplicateRotor(String),

    /// Two catalog entries share a name.
    #[error("the catalog already holds a rotor named {0:?}")]
    DuplicateName(String),

    /// Slot 0 must hold a reflector.
    #[error("slot 0 needs a reflector, but rotor {0:?} does not reflect")]
    MissingReflector(String),

    /// A reflector was placed outside slot 0.
    #[error("reflector {name:?} cannot occupy slot {slot}")]
    MisplacedReflector { name: String, slot: usize },

    /// A pawl slot holds a rotor that cannot move.
    #[error("slot {slot} is driven by a pawl, but rotor {name:?} does not rotate")]
    NonRotatingPawlSlot { name: String, slot: usize },

    /// A rotating rotor sits left of the pawls.
    #[error("slot {slot} has no pawl, but rotor {name:?} rotates")]
    RotatingFixedSlot { name: String, slot: usize },

    /// Wrong length of the initial settings string.
    #[error("expected {expected} setting symbols, got {actual}")]
    SettingLength { expected: usize, actual: usize },

    /// Reflectors only have position 0.
    #[error("reflector {name:?} cannot be set to position {setting}")]
    ReflectorSetting { name: String, setting: usize },

    /// Reflector wiring is not its own inverse.
    #[error("reflector {0:?} wiring is not an involution")]
    NotAnInvolution(String),

    /// Component built over a different alphabet than the machine's.
    #[error("{component} has {actual} positions, but the machine alphabet has {expected}")]
    AlphabetSize {
        component: String,
        expected: usize,
        actual: usize,
    },

    /// Conversion attempted before rotors were inserted.
    #[error("rotors must be inserted before converting")]
    RotorsNotInserted,
}

/// Cycle-notation parse errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermutationError {
    /// `(` opened inside another cycle.
    #[error("nested '(' at position {0}")]
    NestedCycle(usize),

    /// `)` without a matching `(`.
    #[error("unmatched ')' at position {0}")]
    UnmatchedClose(usize),

    /// Input ended inside a cycle.
    #[error("cycle opened at position {0} is never closed")]
    UnclosedCycle(usize),

    /// `()` with no symbols.
    #[error("empty cycle at position {0}")]
    EmptyCycle(usize),

    /// Symbol written outside any parenthesized group.
    #[error("symbol {symbol:?} at position {position} is outside a cycle")]
    SymbolOutsideCycle { symbol: char, position: usize },

    /// Symbol is not part of the alphabet.
    #[error("symbol {symbol:?} at position {position} is not in the alphabet")]
    UnknownSymbol { symbol: char, position: usize },

    /// Symbol appears twice in the cycle string.
    #[error("symbol {symbol:?} at position {position} already appears in a cycle")]
    RepeatedSymbol { symbol: char, position: usize },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, EnigmaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unknown_symbol() {
        let err = AlphabetError::UnknownSymbol('!');
        assert_eq!(format!("{}", err), "symbol '!' is not in the alphabet");
    }

    #[test]
    fn test_display_rotor_count() {
        let err = ConfigurationError::RotorCount {
            expected: 5,
            actual: 4,
        };
        assert_eq!(format!("{}", err), "expected 5 rotor names, got 4");
    }

    #[test]
    fn test_display_unknown_rotor() {
        let err = ConfigurationError::UnknownRotor("IX".to_string());
        assert_eq!(format!("{}", err), "no rotor named \"IX\" in the catalog");
    }

    #[test]
    fn test_display_repeated_symbol() {
        let err = PermutationError::RepeatedSymbol {
            symbol: 'A',
            position: 6,
        };
        assert_eq!(
            format!("{}", err),
            "symbol 'A' at position 6 already appears in a cycle"
        );
    }

    #[test]
    fn test_wrapping_prefixes_family() {
        let err: EnigmaError = ConfigurationError::SettingLength {
            expected: 4,
            actual: 3,
        }
        .into();
        assert_eq!(
            format!("{}", err),
            "configuration error: expected 4 setting symbols, got 3"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            EnigmaError::from(AlphabetError::Empty),
            EnigmaError::Alphabet(AlphabetError::Empty)
        );
        assert_ne!(
            EnigmaError::from(AlphabetError::Empty),
            EnigmaError::from(ConfigurationError::RotorsNotInserted)
        );
    }
}
