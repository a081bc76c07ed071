//! Alphabet: ordered set of symbols with a dense index bijection.
//!
//! Every other component works on indices in `[0, size)`. The alphabet is
//! the only place symbols and indices are translated into each other.

use std::fmt;

use crate::error::AlphabetError;

/// First symbol of the default alphabet.
pub const DEFAULT_FIRST: char = 'A';

/// Last symbol of the default alphabet.
pub const DEFAULT_LAST: char = 'Z';

/// Ordered set of unique symbols.
///
/// `(`, `)` and whitespace are reserved because cycle notation uses them as
/// delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Default for Alphabet {
    /// The 26 upper-case Latin letters.
    fn default() -> Self {
        Alphabet {
            symbols: (DEFAULT_FIRST..=DEFAULT_LAST).collect(),
        }
    }
}

impl Alphabet {
    /// Creates an alphabet from the characters of `symbols`, in order.
    ///
    /// # Errors
    /// - [`AlphabetError::Empty`] if `symbols` is empty.
    /// - [`AlphabetError::ReservedSymbol`] for `(`, `)` or whitespace.
    /// - [`AlphabetError::DuplicateSymbol`] if a character repeats.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Alphabet;
    ///
    /// let alpha = Alphabet::new("ABCD").unwrap();
    /// assert_eq!(alpha.size(), 4);
    /// assert!(Alphabet::new("ABCA").is_err());
    /// ```
    pub fn new(symbols: &str) -> Result<Self, AlphabetError> {
        let mut chars: Vec<char> = Vec::with_capacity(symbols.len());
        for c in symbols.chars() {
            if c == '(' || c == ')' || c.is_whitespace() {
                return Err(AlphabetError::ReservedSymbol(c));
            }
            if chars.contains(&c) {
                return Err(AlphabetError::DuplicateSymbol(c));
            }
            chars.push(c);
        }
        if chars.is_empty() {
            return Err(AlphabetError::Empty);
        }
        Ok(Alphabet { symbols: chars })
    }

    /// Creates the contiguous range `first..=last`.
    ///
    /// # Errors
    /// [`AlphabetError::Empty`] if `last < first`, or the errors of
    /// [`new`](Self::new) if the range crosses a reserved character.
    pub fn range(first: char, last: char) -> Result<Self, AlphabetError> {
        let symbols: String = (first..=last).collect();
        Self::new(&symbols)
    }

    /// Returns the number of symbols.
    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if `symbol` is a member.
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Returns the index of `symbol`.
    ///
    /// # Errors
    /// [`AlphabetError::UnknownSymbol`] if `symbol` is not a member.
    pub fn to_index(&self, symbol: char) -> Result<usize, AlphabetError> {
        self.symbols
            .iter()
            .position(|&c| c == symbol)
            .ok_or(AlphabetError::UnknownSymbol(symbol))
    }

    /// Returns the symbol at `index`.
    ///
    /// # Errors
    /// [`AlphabetError::IndexOutOfRange`] if `index >= size()`.
    pub fn to_symbol(&self, index: usize) -> Result<char, AlphabetError> {
        self.symbols
            .get(index)
            .copied()
            .ok_or(AlphabetError::IndexOutOfRange {
                index,
                size: self.symbols.len(),
            })
    }

    /// Reduces `index` modulo the alphabet size.
    pub fn wrap(&self, index: usize) -> usize {
        index % self.symbols.len()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.symbols {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_upper_case_latin() {
        let alpha = Alphabet::default();
        assert_eq!(alpha.size(), 26);
        assert_eq!(alpha.to_index('A'), Ok(0));
        assert_eq!(alpha.to_index('Z'), Ok(25));
        assert_eq!(alpha.to_symbol(7), Ok('H'));
    }

    #[test]
    fn test_range_matches_default() {
        assert_eq!(Alphabet::range('A', 'Z').unwrap(), Alphabet::default());
    }

    #[test]
    fn test_membership() {
        let alpha = Alphabet::new("XYZ").unwrap();
        assert!(alpha.contains('Y'));
        assert!(!alpha.contains('A'));
        assert_eq!(alpha.to_index('A'), Err(AlphabetError::UnknownSymbol('A')));
    }

    #[test]
    fn test_to_symbol_out_of_range() {
        let alpha = Alphabet::new("XYZ").unwrap();
        assert_eq!(
            alpha.to_symbol(3),
            Err(AlphabetError::IndexOutOfRange { index: 3, size: 3 })
        );
    }

    #[test]
    fn test_rejects_bad_symbol_sets() {
        assert_eq!(Alphabet::new(""), Err(AlphabetError::Empty));
        assert_eq!(Alphabet::new("AB A"), Err(AlphabetError::ReservedSymbol(' ')));
        assert_eq!(Alphabet::new("A(B"), Err(AlphabetError::ReservedSymbol('(')));
        assert_eq!(Alphabet::new("ABB"), Err(AlphabetError::DuplicateSymbol('B')));
        assert_eq!(Alphabet::range('Z', 'A'), Err(AlphabetError::Empty));
    }

    #[test]
    fn test_wrap() {
        let alpha = Alphabet::default();
        assert_eq!(alpha.wrap(26), 0);
        assert_eq!(alpha.wrap(53), 1);
    }

    #[test]
    fn test_display() {
        let alpha = Alphabet::new("0123").unwrap();
        assert_eq!(format!("{}", alpha), "0123");
    }
}
