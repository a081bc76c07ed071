//! Permutation: bijective index mapping built from cycle notation.
//!
//! A cycle string such as `"(AELT) (BK) (S)"` maps every listed symbol to
//! the next symbol of its group, the last symbol of a group back to the
//! first. Symbols not listed are fixed points. The forward table and its
//! inverse are both computed once, so lookups in either direction are a
//! single array access.

use std::fmt;

use crate::alphabet::Alphabet;
use crate::error::{AlphabetError, PermutationError};

/// Bijection over `[0, size)` with precomputed inverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    alphabet: Alphabet,
    forward: Vec<usize>,
    backward: Vec<usize>,
}

impl Permutation {
    /// Parses `cycles` into a permutation over `alphabet`.
    ///
    /// Whitespace anywhere in `cycles` is ignored. A single-symbol group
    /// `(c)` is allowed and leaves `c` fixed.
    ///
    /// # Errors
    /// A [`PermutationError`] for nested, unmatched or unclosed
    /// parentheses, an empty group, a symbol outside any group, a symbol
    /// outside the alphabet, or a symbol listed twice. Positions are
    /// character offsets into `cycles`.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Alphabet, Permutation};
    ///
    /// let perm = Permutation::new("(ABC) (DE)", &Alphabet::default()).unwrap();
    /// assert_eq!(perm.permute(0), 1);
    /// assert_eq!(perm.permute(2), 0);
    /// assert_eq!(perm.invert(0), 2);
    /// assert_eq!(perm.permute(5), 5);
    /// ```
    pub fn new(cycles: &str, alphabet: &Alphabet) -> Result<Self, PermutationError> {
        let size = alphabet.size();
        let mut forward: Vec<usize> = (0..size).collect();
        let mut backward: Vec<usize> = (0..size).collect();
        let mut seen = vec![false; size];

        let mut open: Option<usize> = None;
        let mut cycle: Vec<usize> = Vec::new();

        for (position, c) in cycles.chars().enumerate() {
            if c.is_whitespace() {
                continue;
            }
            match c {
                '(' => {
                    if open.is_some() {
                        return Err(PermutationError::NestedCycle(position));
                    }
                    open = Some(position);
                    cycle.clear();
                }
                ')' => {
                    let start = open.ok_or(PermutationError::UnmatchedClose(position))?;
                    if cycle.is_empty() {
                        return Err(PermutationError::EmptyCycle(start));
                    }
                    for (i, &from) in cycle.iter().enumerate() {
                        let to = cycle[(i + 1) % cycle.len()];
                        forward[from] = to;
                        backward[to] = from;
                    }
                    open = None;
                }
                symbol => {
                    if open.is_none() {
                        return Err(PermutationError::SymbolOutsideCycle { symbol, position });
                    }
                    let index = alphabet
                        .to_index(symbol)
                        .map_err(|_| PermutationError::UnknownSymbol { symbol, position })?;
                    if seen[index] {
                        return Err(PermutationError::RepeatedSymbol { symbol, position });
                    }
                    seen[index] = true;
                    cycle.push(index);
                }
            }
        }

        if let Some(start) = open {
            return Err(PermutationError::UnclosedCycle(start));
        }

        Ok(Permutation {
            alphabet: alphabet.clone(),
            forward,
            backward,
        })
    }

    /// Returns the permutation that maps every symbol to itself.
    pub fn identity(alphabet: &Alphabet) -> Self {
        let size = alphabet.size();
        Permutation {
            alphabet: alphabet.clone(),
            forward: (0..size).collect(),
            backward: (0..size).collect(),
        }
    }

    /// Returns the alphabet this permutation is defined over.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the size of the alphabet.
    pub fn size(&self) -> usize {
        self.forward.len()
    }

    /// Applies the permutation to `index`, wrapped modulo [`size`](Self::size).
    pub fn permute(&self, index: usize) -> usize {
        self.forward[index % self.size()]
    }

    /// Applies the inverse permutation to `index`, wrapped modulo [`size`](Self::size).
    pub fn invert(&self, index: usize) -> usize {
        self.backward[index % self.size()]
    }

    /// Applies the permutation to a symbol.
    ///
    /// # Errors
    /// [`AlphabetError::UnknownSymbol`] if `symbol` is not in the alphabet.
    pub fn permute_symbol(&self, symbol: char) -> Result<char, AlphabetError> {
        let index = self.alphabet.to_index(symbol)?;
        self.alphabet.to_symbol(self.permute(index))
    }

    /// Applies the inverse permutation to a symbol.
    ///
    /// # Errors
    /// [`AlphabetError::UnknownSymbol`] if `symbol` is not in the alphabet.
    pub fn invert_symbol(&self, symbol: char) -> Result<char, AlphabetError> {
        let index = self.alphabet.to_index(symbol)?;
        self.alphabet.to_symbol(self.invert(index))
    }

    /// Returns true if applying the permutation twice is the identity.
    pub fn is_involution(&self) -> bool {
        (0..self.size()).all(|x| self.forward[self.forward[x]] == x)
    }

    /// Returns true if no symbol maps to itself.
    pub fn is_derangement(&self) -> bool {
        (0..self.size()).all(|x| self.forward[x] != x)
    }
}

impl fmt::Display for Permutation {
    /// Canonical cycle notation: each cycle starts at its lowest index,
    /// cycles ordered by that index, fixed points omitted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut visited = vec![false; self.size()];
        let mut first = true;
        for start in 0..self.size() {
            if visited[start] || self.forward[start] == start {
                continue;
            }
            if !first {
                write!(f, " ")?;
            }
            first = false;
            write!(f, "(")?;
            let mut x = start;
            while !visited[x] {
                visited[x] = true;
                let symbol = self.alphabet.to_symbol(x).map_err(|_| fmt::Error)?;
                write!(f, "{}", symbol)?;
                x = self.forward[x];
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}
