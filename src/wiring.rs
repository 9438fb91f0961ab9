//! Historical wiring tables and the 26-letter permutation primitive.
//!
//! The rotor and reflector tables reproduce the Wehrmacht Enigma I values
//! exactly. They are process-wide immutable data: loaded once as statics
//! and passed by reference into machine constructors, never mutated.

use crate::error::ZygalskiError;

/// Number of contacts on a rotor (the A-Z alphabet).
pub const ALPHABET_LEN: usize = 26;

/// Converts an A-Z letter (case-insensitive) to its 0-25 index.
///
/// # Returns
/// The index, or `None` if the character is not an ASCII letter.
pub fn letter_to_index(c: char) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        Some((c.to_ascii_uppercase() as u8) - b'A')
    } else {
        None
    }
}

/// Converts a 0-25 index to its uppercase A-Z letter.
///
/// Indices are reduced mod 26, so any u8 is accepted.
pub fn index_to_letter(i: u8) -> char {
    ((i % 26) + b'A') as char
}

/// A bijection over the 26-letter alphabet.
///
/// Stored as paired forward/inverse index arrays so both signal
/// directions are a single array lookup. Invariant:
/// `forward[inverse[i]] == i` for all i.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation26 {
    forward: [u8; ALPHABET_LEN],
    inverse: [u8; ALPHABET_LEN],
}

impl Permutation26 {
    /// Builds a permutation from a 26-letter wiring string.
    ///
    /// Position i of the string names the letter that contact i maps to,
    /// the classical rotor wiring notation.
    ///
    /// # Errors
    /// Returns [`ZygalskiError::MalformedWiring`] if the string is not
    /// exactly 26 ASCII letters or maps two contacts to the same letter.
    pub fn from_wiring(wiring: &str) -> Result<Self, ZygalskiError> {
        let bytes = wiring.as_bytes();
        if bytes.len() != ALPHABET_LEN {
            return Err(ZygalskiError::MalformedWiring);
        }
        let mut forward = [0u8; ALPHABET_LEN];
        let mut inverse = [u8::MAX; ALPHABET_LEN];
        for (i, &b) in bytes.iter().enumerate() {
            if !b.is_ascii_alphabetic() {
                return Err(ZygalskiError::MalformedWiring);
            }
            let target = b.to_ascii_uppercase() - b'A';
            if inverse[target as usize] != u8::MAX {
                // Duplicate target letter: not a bijection.
                return Err(ZygalskiError::MalformedWiring);
            }
            forward[i] = target;
            inverse[target as usize] = i as u8;
        }
        Ok(Permutation26 { forward, inverse })
    }

    /// Returns the identity permutation (every letter maps to itself).
    pub fn identity() -> Self {
        let mut forward = [0u8; ALPHABET_LEN];
        for (i, slot) in forward.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Permutation26 {
            forward,
            inverse: forward,
        }
    }

    /// Applies the forward mapping to index `i` (0-25).
    #[inline(always)]
    pub fn apply(&self, i: u8) -> u8 {
        self.forward[i as usize]
    }

    /// Applies the inverse mapping to index `i` (0-25).
    #[inline(always)]
    pub fn apply_inverse(&self, i: u8) -> u8 {
        self.inverse[i as usize]
    }

    /// Swaps two letters in place, keeping forward and inverse paired.
    ///
    /// Only meaningful while building a self-inverse permutation from an
    /// identity start (plugboard, reflector pairs).
    pub(crate) fn swap_pair(&mut self, a: u8, b: u8) {
        self.forward.swap(a as usize, b as usize);
        self.inverse.swap(a as usize, b as usize);
    }
}

/// Static description of a historical rotor: wiring plus notch letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorSpec {
    pub name: &'static str,
    pub wiring: &'static str,
    pub notch: char,
}

/// Static description of a historical reflector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectorSpec {
    pub name: &'static str,
    pub wiring: &'static str,
}

/// The five Wehrmacht Enigma I rotors.
pub static ROTORS: [RotorSpec; 5] = [
    RotorSpec {
        name: "I",
        wiring: "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
        notch: 'Q',
    },
    RotorSpec {
        name: "II",
        wiring: "AJDKSIRUXBLHWTMCQGZNPYFVOE",
        notch: 'E',
    },
    RotorSpec {
        name: "III",
        wiring: "BDFHJLCPRTXVZNYEIWGAKMUSQO",
        notch: 'V',
    },
    RotorSpec {
        name: "IV",
        wiring: "ESOVPZJAYQUIRHXLNFTGKDCMWB",
        notch: 'J',
    },
    RotorSpec {
        name: "V",
        wiring: "VZBRGITYUPSDNHLXAWMJQOFECK",
        notch: 'Z',
    },
];

/// Reflectors A and B (Umkehrwalzen).
pub static REFLECTORS: [ReflectorSpec; 2] = [
    ReflectorSpec {
        name: "A",
        wiring: "EJMZALYXVBWFCNOQPUTSRIKHGD",
    },
    ReflectorSpec {
        name: "B",
        wiring: "YRUHQSLDPXNGOKMIEBFZCWVJAT",
    },
];

/// Looks up a rotor spec by its historical name ("I" through "V").
///
/// # Errors
/// Returns [`ZygalskiError::UnknownRotor`] for any other name.
pub fn rotor_spec(name: &str) -> Result<&'static RotorSpec, ZygalskiError> {
    ROTORS
        .iter()
        .find(|spec| spec.name == name)
        .ok_or_else(|| ZygalskiError::UnknownRotor(name.to_string()))
}

/// Looks up a reflector spec by name ("A" or "B").
///
/// # Errors
/// Returns [`ZygalskiError::UnknownReflector`] for any other name.
pub fn reflector_spec(name: &str) -> Result<&'static ReflectorSpec, ZygalskiError> {
    REFLECTORS
        .iter()
        .find(|spec| spec.name == name)
        .ok_or_else(|| ZygalskiError::UnknownReflector(name.to_string()))
}

/// Builds the permutation for a reflector by name.
///
/// # Errors
/// Returns [`ZygalskiError::UnknownReflector`] for an unknown name.
pub fn reflector_permutation(name: &str) -> Result<Permutation26, ZygalskiError> {
    Permutation26::from_wiring(reflector_spec(name)?.wiring)
}
