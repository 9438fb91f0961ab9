//! Display adapter: human-readable rendering of sheets and solutions.
//!
//! Pure string producers; callers decide where the text goes. The core
//! performs no I/O.

use crate::sheet::Sheet;
use crate::search::Solution;
use crate::wiring::index_to_letter;

/// Glyph for an achievable (true) cell.
const TRUE_GLYPH: char = '#';
/// Glyph for an unachievable (false) cell.
const FALSE_GLYPH: char = '.';

/// Renders a sheet as a 26x26 grid with A-Z row and column headers.
///
/// Rows are middle-rotor letters, columns right-rotor letters.
pub fn render_sheet(sheet: &Sheet) -> String {
    let mut out = String::with_capacity(28 * 56);
    out.push_str("  ");
    for right in 0..26u8 {
        out.push(' ');
        out.push(index_to_letter(right));
    }
    out.push('\n');
    for mid in 0..26u8 {
        out.push(index_to_letter(mid));
        out.push(' ');
        for right in 0..26u8 {
            out.push(' ');
            out.push(if sheet.get(mid, right) {
                TRUE_GLYPH
            } else {
                FALSE_GLYPH
            });
        }
        out.push('\n');
    }
    out
}

/// Renders candidate triples one per line, or a fixed marker when the
/// candidate set is empty.
pub fn render_solutions(solutions: &[Solution]) -> String {
    if solutions.is_empty() {
        return "no consistent rotor positions\n".to_string();
    }
    let mut out = String::with_capacity(solutions.len() * 4);
    for solution in solutions {
        out.push_str(&solution.to_string());
        out.push('\n');
    }
    out
}
