//! Sheet stacking and rotor-position solution search.
//!
//! Stacking intersects the sheets of several independent intercepts for
//! the same left-rotor letter; the solution search repeats the stack
//! across all 26 left letters and collects every surviving triple.

use tracing::debug;

use crate::error::ZygalskiError;
use crate::generator::{FemaleType, SheetGenerator};
use crate::rotor::RotorBank;
use crate::sheet::Sheet;
use crate::wiring::{index_to_letter, letter_to_index, Permutation26};

/// A candidate (left, middle, right) rotor-position triple.
///
/// Ordered by left, then middle, then right letter. A solution set of
/// size 1 is a unique recovery; more means the intercepts were not yet
/// sufficient; zero means the observations contradict each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Solution {
    pub left: char,
    pub mid: char,
    pub right: char,
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.left, self.mid, self.right)
    }
}

/// Stacks the sheets of all requested female types for one left-rotor
/// letter.
///
/// Element-wise AND across the generated sheets; an empty type list
/// yields the all-true sheet (the identity for intersection).
///
/// # Errors
/// Returns [`ZygalskiError::InvalidPositions`] if `left_start` is not an
/// A-Z letter.
pub fn stack(
    bank: &RotorBank,
    reflector: &Permutation26,
    left_start: char,
    females: &[FemaleType],
) -> Result<Sheet, ZygalskiError> {
    let left = letter_to_index(left_start)
        .ok_or_else(|| ZygalskiError::InvalidPositions(left_start.to_string()))?;
    Ok(stack_at(bank, reflector, left, females))
}

/// Index-level variant of [`stack`]; `left` is a pre-validated 0-25 index.
pub fn stack_at(
    bank: &RotorBank,
    reflector: &Permutation26,
    left: u8,
    females: &[FemaleType],
) -> Sheet {
    let generator = SheetGenerator::new(bank, reflector);
    let mut stacked = Sheet::all_true();
    for &female in females {
        stacked = stacked.intersect(&generator.generate_at(left, female));
    }
    stacked
}

/// Collects every rotor-position triple consistent with all intercepted
/// female types, across all 26 left-rotor letters.
///
/// The result is deterministic and sorted ascending by (left, middle,
/// right); it is empty when no triple survives every intercept.
pub fn find_solutions(
    bank: &RotorBank,
    reflector: &Permutation26,
    females: &[FemaleType],
) -> Vec<Solution> {
    let mut solutions = Vec::new();
    for left in 0..26u8 {
        let stacked = stack_at(bank, reflector, left, females);
        debug!(
            left = %index_to_letter(left),
            surviving = stacked.count_true(),
            "stacked sheets for left letter"
        );
        for (mid, right) in stacked.true_cells() {
            solutions.push(Solution {
                left: index_to_letter(left),
                mid: index_to_letter(mid),
                right: index_to_letter(right),
            });
        }
    }
    // Left ascending, then mid, then right: already the iteration order.
    debug_assert!(solutions.windows(2).all(|w| w[0] < w[1]));
    solutions
}
