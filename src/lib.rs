//! Rotor cipher machine simulator.
//!
//! A message is enciphered one symbol at a time through a plugboard, a
//! stack of rotors and a reflector. The rotors step before every symbol,
//! so the substitution changes with each keystroke, and because the
//! reflector sends the signal back through the same stack the cipher is
//! reciprocal: the same machine configuration both encrypts and decrypts.
//!
//! # Architecture
//!
//! ```text
//! Permutation   (cycle-notation wiring with precomputed inverse)
//!     ↓ wrapped by
//! Rotor         (wiring + setting; Fixed / Moving / Reflector)
//!     ↓ stored in
//! RotorCatalog  (arena of available rotors, addressed by RotorId)
//!     ↓ owned by
//! Machine       (slots, pawls, plugboard, stepping and signal path)
//! ```
//!
//! # Examples
//!
//! Encrypt with the four-rotor naval configuration, then decrypt from the
//! same starting position:
//!
//! ```
//! use enigma::{Alphabet, Machine, Permutation, RotorCatalog};
//!
//! let alpha = Alphabet::default();
//! let configure = || {
//!     let mut machine = Machine::new(alpha.clone(), 5, 3, RotorCatalog::naval()?)?;
//!     machine.insert_rotors(&["B", "BETA", "III", "IV", "I"])?;
//!     machine.set_rotors("AXLE")?;
//!     machine.set_plugboard(Permutation::new("(HQ) (EX) (IP) (TR) (BY)", &alpha)?)?;
//!     Ok::<_, enigma::EnigmaError>(machine)
//! };
//!
//! let mut encoder = configure().unwrap();
//! let ciphertext = encoder.convert_message("From his shoulder Hiawatha").unwrap();
//!
//! let mut decoder = configure().unwrap();
//! assert_eq!(decoder.convert_message(&ciphertext).unwrap(), "FROMHISSHOULDERHIAWATHA");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod catalog;
pub mod error;
pub mod permutation;
pub mod rotor;

mod machine;

pub use alphabet::Alphabet;
pub use catalog::{RotorCatalog, RotorId, NAVAL_PAWLS, NAVAL_SLOTS};
pub use error::{AlphabetError, ConfigurationError, EnigmaError, PermutationError, Result};
pub use machine::Machine;
pub use permutation::Permutation;
pub use rotor::{Rotor, RotorKind};
