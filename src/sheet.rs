//! Sheet: a 26x26 boolean grid over (middle, right) start letters.
//!
//! A cell is true when a female pattern of the sheet's type is achievable
//! from that starting state for some three-letter key. Sheets are
//! immutable once produced; stacking builds new sheets.

/// 26x26 achievability grid, row = middle-rotor letter, column =
/// right-rotor letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    cells: [[bool; 26]; 26],
}

impl Sheet {
    /// Returns the all-true sheet, the identity for stacking.
    pub fn all_true() -> Self {
        Sheet {
            cells: [[true; 26]; 26],
        }
    }

    /// Builds a sheet from raw rows (row index = middle-rotor letter).
    pub(crate) fn from_rows(cells: [[bool; 26]; 26]) -> Self {
        Sheet { cells }
    }

    /// Returns the cell for (middle, right) start indices (0-25).
    #[inline(always)]
    pub fn get(&self, mid: u8, right: u8) -> bool {
        self.cells[mid as usize][right as usize]
    }

    /// Element-wise logical AND with another sheet.
    ///
    /// Associative, commutative and idempotent, like the intersection it
    /// models.
    pub fn intersect(&self, other: &Sheet) -> Sheet {
        let mut cells = self.cells;
        for (row, other_row) in cells.iter_mut().zip(other.cells.iter()) {
            for (cell, &other_cell) in row.iter_mut().zip(other_row.iter()) {
                *cell &= other_cell;
            }
        }
        Sheet { cells }
    }

    /// Number of true cells (out of 676).
    pub fn count_true(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&c| c).count())
            .sum()
    }

    /// Iterates over the true cells as (middle, right) index pairs, in
    /// row-major order.
    pub fn true_cells(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.cells.iter().enumerate().flat_map(|(mid, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, &cell)| cell)
                .map(move |(right, _)| (mid as u8, right as u8))
        })
    }
}
