//! Plugboard: a user-configured self-inverse letter permutation.
//!
//! Applied before and after the rotor stack. Unconfigured letters map to
//! themselves; every configured pair maps both directions, so the board
//! is an involution by construction.

use crate::error::ZygalskiError;
use crate::wiring::{letter_to_index, Permutation26};

/// Self-inverse permutation built from steckered letter pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    mapping: Permutation26,
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::identity()
    }
}

impl Plugboard {
    /// Returns the identity board (no cables plugged).
    pub fn identity() -> Self {
        Plugboard {
            mapping: Permutation26::identity(),
        }
    }

    /// Builds a board from letter pairs, e.g. `&[('A', 'B'), ('C', 'D')]`.
    ///
    /// # Errors
    /// Returns [`ZygalskiError::PlugboardInvalidChar`] for a non-letter
    /// entry, or [`ZygalskiError::PlugboardLetterReused`] if a letter
    /// appears in more than one pair (including paired with itself).
    pub fn from_pairs(pairs: &[(char, char)]) -> Result<Self, ZygalskiError> {
        let mut used = [false; 26];
        let mut mapping = Permutation26::identity();
        for &(x, y) in pairs {
            let a = letter_to_index(x).ok_or(ZygalskiError::PlugboardInvalidChar(x))?;
            let b = letter_to_index(y).ok_or(ZygalskiError::PlugboardInvalidChar(y))?;
            if used[a as usize] || a == b {
                return Err(ZygalskiError::PlugboardLetterReused(x.to_ascii_uppercase()));
            }
            if used[b as usize] {
                return Err(ZygalskiError::PlugboardLetterReused(y.to_ascii_uppercase()));
            }
            used[a as usize] = true;
            used[b as usize] = true;
            mapping.swap_pair(a, b);
        }
        Ok(Plugboard { mapping })
    }

    /// Maps index `i` through the board.
    ///
    /// Forward and inverse are the same mapping since the board is an
    /// involution.
    #[inline(always)]
    pub fn apply(&self, i: u8) -> u8 {
        self.mapping.apply(i)
    }
}
