//! SheetGenerator: brute-force construction of Zygalski sheets.
//!
//! For a fixed left-rotor start letter and one female type, the generator
//! simulates the machine over all 676 (middle, right) start combinations
//! and marks the cells from which the observed coincidence pattern is
//! achievable for some three-letter key. This is the performance-critical
//! core: a full sheet is 676 independent existential searches over the
//! 17,576-key candidate space.

use rayon::prelude::*;
use tracing::debug;

use crate::error::ZygalskiError;
use crate::machine::CipherMachine;
use crate::plugboard::Plugboard;
use crate::rotor::RotorBank;
use crate::sheet::Sheet;
use crate::wiring::{index_to_letter, letter_to_index, Permutation26};

/// Which position pair of a doubled six-letter indicator must coincide.
///
/// The token names the 1-indexed ciphertext positions: `"1-4"` compares
/// positions 0 and 3 (0-indexed), and so on. Each type also fixes how
/// many keypresses elapsed before the repeated-key message begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FemaleType {
    /// Coincidence at ciphertext positions 1 and 4.
    OneFour,
    /// Coincidence at ciphertext positions 2 and 5.
    TwoFive,
    /// Coincidence at ciphertext positions 3 and 6.
    ThreeSix,
}

impl FemaleType {
    /// All three female types, in position order.
    pub const ALL: [FemaleType; 3] = [
        FemaleType::OneFour,
        FemaleType::TwoFive,
        FemaleType::ThreeSix,
    ];

    /// Parses a female-type token.
    ///
    /// # Errors
    /// Returns [`ZygalskiError::InvalidFemaleType`] for anything other
    /// than `"1-4"`, `"2-5"` or `"3-6"`.
    pub fn parse(token: &str) -> Result<Self, ZygalskiError> {
        match token {
            "1-4" => Ok(FemaleType::OneFour),
            "2-5" => Ok(FemaleType::TwoFive),
            "3-6" => Ok(FemaleType::ThreeSix),
            other => Err(ZygalskiError::InvalidFemaleType(other.to_string())),
        }
    }

    /// Returns the canonical token for this type.
    pub const fn token(self) -> &'static str {
        match self {
            FemaleType::OneFour => "1-4",
            FemaleType::TwoFive => "2-5",
            FemaleType::ThreeSix => "3-6",
        }
    }

    /// 1-indexed key slot holding the repeated letter.
    pub const fn repeat_pos(self) -> usize {
        match self {
            FemaleType::OneFour => 1,
            FemaleType::TwoFive => 2,
            FemaleType::ThreeSix => 3,
        }
    }

    /// Keypresses already elapsed before the repeated-key message begins
    /// (models the indicator-encoding procedure).
    pub const fn offset_steps(self) -> usize {
        self.repeat_pos() - 1
    }

    /// 0-indexed ciphertext index pair that must coincide.
    pub const fn test_indices(self) -> (usize, usize) {
        let first = self.repeat_pos() - 1;
        (first, first + 3)
    }
}

impl std::str::FromStr for FemaleType {
    type Err = ZygalskiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FemaleType::parse(s)
    }
}

impl std::fmt::Display for FemaleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// Arranges a three-letter key so the repeated letter `a` occupies slot
/// `repeat_pos` (1-indexed); `b` and `c` fill the remaining slots in
/// order.
pub fn key_with_repeat_moved(a: u8, b: u8, c: u8, repeat_pos: usize) -> [u8; 3] {
    debug_assert!((1..=3).contains(&repeat_pos));
    match repeat_pos {
        1 => [a, b, c],
        2 => [b, a, c],
        _ => [b, c, a],
    }
}

/// Sheet factory over a fixed rotor order and reflector.
///
/// Sheets are catalogued with an identity plugboard: the board applies
/// the same substitution at both tested positions, so a coincidence
/// survives any plugboard setting.
#[derive(Debug, Clone, Copy)]
pub struct SheetGenerator<'a> {
    bank: &'a RotorBank,
    reflector: &'a Permutation26,
}

impl<'a> SheetGenerator<'a> {
    /// Creates a generator for the given rotor bank and reflector.
    pub fn new(bank: &'a RotorBank, reflector: &'a Permutation26) -> Self {
        SheetGenerator { bank, reflector }
    }

    /// Generates the sheet for one left-rotor start letter and one female
    /// type.
    ///
    /// Each of the 676 (middle, right) cells is an independent pure
    /// computation; the 26 middle-rotor rows run in parallel and the
    /// result is bit-identical to a serial scan.
    ///
    /// # Errors
    /// Returns [`ZygalskiError::InvalidPositions`] if `left_start` is not
    /// an A-Z letter.
    pub fn generate(&self, left_start: char, female: FemaleType) -> Result<Sheet, ZygalskiError> {
        let left = letter_to_index(left_start)
            .ok_or_else(|| ZygalskiError::InvalidPositions(left_start.to_string()))?;
        Ok(self.generate_at(left, female))
    }

    /// Index-level variant of [`generate`](Self::generate); `left` is a
    /// pre-validated 0-25 index.
    pub fn generate_at(&self, left: u8, female: FemaleType) -> Sheet {
        debug_assert!(left < 26);
        let rows: Vec<[bool; 26]> = (0..26u8)
            .into_par_iter()
            .map(|mid| {
                let plugboard = Plugboard::identity();
                let mut machine = CipherMachine::new(self.bank, self.reflector, &plugboard);
                let mut row = [false; 26];
                for (right, cell) in row.iter_mut().enumerate() {
                    *cell = cell_has_female(&mut machine, [left, mid, right as u8], female);
                }
                row
            })
            .collect();

        let mut cells = [[false; 26]; 26];
        for (row, computed) in cells.iter_mut().zip(rows) {
            *row = computed;
        }
        let sheet = Sheet::from_rows(cells);
        debug!(
            left = %index_to_letter(left),
            female = %female,
            true_cells = sheet.count_true(),
            "generated sheet"
        );
        sheet
    }
}

/// Decides whether any three-letter key produces the female pattern from
/// the given start positions.
///
/// Rotor stepping never depends on the keyed letter, so the ciphertext at
/// the two tested positions is a function of the repeated-slot letter
/// alone; scanning its 26 values covers the full 17,576-key candidate
/// space. The scan short-circuits on the first hit: the sheet records
/// achievability, not which key achieved it.
fn cell_has_female(machine: &mut CipherMachine<'_>, start: [u8; 3], female: FemaleType) -> bool {
    let (first, second) = female.test_indices();
    let repeat_pos = female.repeat_pos();
    let offset = female.offset_steps();
    for a in 0..26u8 {
        let key = key_with_repeat_moved(a, 0, 0, repeat_pos);
        machine.set_position_indices(start);
        machine.advance(offset);
        let mut cipher = [0u8; 6];
        for (t, slot) in cipher.iter_mut().enumerate() {
            *slot = machine.encipher_index(key[t % 3]);
        }
        if cipher[first] == cipher[second] {
            return true;
        }
    }
    false
}
