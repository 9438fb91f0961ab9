//! Error types for the zygalski library.

use std::fmt;

/// Errors produced by the zygalski library.
///
/// All variants are construction-time or input-validation failures.
/// Once a machine or search is built from validated inputs, the core
/// operations are total and cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZygalskiError {
    /// Wiring string is not a 26-letter permutation of A-Z.
    MalformedWiring,
    /// Rotor name does not exist in the historical wiring table.
    UnknownRotor(String),
    /// Reflector name does not exist in the historical wiring table.
    UnknownReflector(String),
    /// Plugboard pair contains a non-letter character.
    PlugboardInvalidChar(char),
    /// Letter appears in more than one plugboard pair.
    PlugboardLetterReused(char),
    /// Rotor position input contains something other than A-Z letters.
    InvalidPositions(String),
    /// Ring setting is not an A-Z letter.
    InvalidRingSetting(char),
    /// Female-type token is not one of "1-4", "2-5", "3-6".
    InvalidFemaleType(String),
}

impl fmt::Display for ZygalskiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZygalskiError::MalformedWiring => {
                write!(f, "Wiring must be a 26-letter permutation of A-Z")
            }
            ZygalskiError::UnknownRotor(name) => {
                write!(f, "Unknown rotor name: {}", name)
            }
            ZygalskiError::UnknownReflector(name) => {
                write!(f, "Unknown reflector name: {}", name)
            }
            ZygalskiError::PlugboardInvalidChar(c) => {
                write!(f, "Plugboard pair contains non-letter character: {:?}", c)
            }
            ZygalskiError::PlugboardLetterReused(c) => {
                write!(f, "Letter {} appears in more than one plugboard pair", c)
            }
            ZygalskiError::InvalidPositions(s) => {
                write!(f, "Rotor positions must be A-Z letters, got {:?}", s)
            }
            ZygalskiError::InvalidRingSetting(c) => {
                write!(f, "Ring setting must be an A-Z letter, got {:?}", c)
            }
            ZygalskiError::InvalidFemaleType(s) => {
                write!(
                    f,
                    "Female type must be one of \"1-4\", \"2-5\", \"3-6\", got {:?}",
                    s
                )
            }
        }
    }
}

impl std::error::Error for ZygalskiError {}
