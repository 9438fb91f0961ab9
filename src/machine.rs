//! CipherMachine: rotor bank + reflector + plugboard with rotating state.
//!
//! Composes three rotors, a reflector and a plugboard into one reciprocal
//! substitution cipher. The only mutable state is the positions triple,
//! advanced by the stepping rule before every signal pass. Rotor bank,
//! reflector and plugboard are borrowed, so thousands of trial machines
//! can share the same wiring data without copying it.
//!
//! Stepping semantics reproduce the Wehrmacht Enigma I exactly, including
//! the double-step anomaly of the middle rotor.

use crate::error::ZygalskiError;
use crate::plugboard::Plugboard;
use crate::rotor::RotorBank;
use crate::wiring::{index_to_letter, letter_to_index, Permutation26};

/// Enigma I machine state over borrowed wiring data.
///
/// The machine is deliberately **not idempotent**: every
/// [`encipher_one`](Self::encipher_one) call advances the rotor positions
/// first, so enciphering the same letter twice in a row generally yields
/// different outputs. The self-reciprocal property holds only when the
/// positions are restored between the two passes.
#[derive(Debug, Clone)]
pub struct CipherMachine<'a> {
    bank: &'a RotorBank,
    reflector: &'a Permutation26,
    plugboard: &'a Plugboard,
    positions: [u8; 3],
}

impl<'a> CipherMachine<'a> {
    /// Creates a machine at positions AAA.
    ///
    /// # Parameters
    /// - `bank`: (left, middle, right) rotor triple.
    /// - `reflector`: Reflector permutation (must be self-inverse; the
    ///   tabled reflectors are).
    /// - `plugboard`: Plugboard involution, identity when no cables are
    ///   plugged.
    pub fn new(bank: &'a RotorBank, reflector: &'a Permutation26, plugboard: &'a Plugboard) -> Self {
        CipherMachine {
            bank,
            reflector,
            plugboard,
            positions: [0, 0, 0],
        }
    }

    /// Overwrites the rotor positions from a three-letter string.
    ///
    /// No stepping is performed.
    ///
    /// # Errors
    /// Returns [`ZygalskiError::InvalidPositions`] unless `s` is exactly
    /// three A-Z letters (case-insensitive).
    pub fn set_positions(&mut self, s: &str) -> Result<(), ZygalskiError> {
        let mut chars = s.chars();
        let invalid = || ZygalskiError::InvalidPositions(s.to_string());
        let mut positions = [0u8; 3];
        for slot in positions.iter_mut() {
            let c = chars.next().ok_or_else(invalid)?;
            *slot = letter_to_index(c).ok_or_else(invalid)?;
        }
        if chars.next().is_some() {
            return Err(invalid());
        }
        self.positions = positions;
        Ok(())
    }

    /// Overwrites the rotor positions from pre-validated indices (0-25).
    ///
    /// Hot-path variant of [`set_positions`](Self::set_positions) used by
    /// the sheet search, which resets the same machine hundreds of
    /// thousands of times.
    #[inline(always)]
    pub fn set_position_indices(&mut self, positions: [u8; 3]) {
        debug_assert!(positions.iter().all(|&p| p < 26));
        self.positions = positions;
    }

    /// Returns the current (left, middle, right) position indices.
    #[inline(always)]
    pub fn positions(&self) -> [u8; 3] {
        self.positions
    }

    /// Returns the current positions as letters, left to right.
    pub fn position_letters(&self) -> [char; 3] {
        [
            index_to_letter(self.positions[0]),
            index_to_letter(self.positions[1]),
            index_to_letter(self.positions[2]),
        ]
    }

    /// Advances the rotors by one keypress.
    ///
    /// 1. The left rotor steps iff the middle rotor sits at its notch.
    /// 2. The middle rotor steps iff the right rotor sits at its notch,
    ///    or the middle rotor itself does (the double-step anomaly: a
    ///    middle rotor at its notch advances the left rotor and itself on
    ///    the same keypress).
    /// 3. The right rotor always steps.
    ///
    /// The notch comparison uses the raw position, with no ring-offset
    /// correction on the notch side. Some historical descriptions shift
    /// the notch indicator by the ring setting; this implementation
    /// preserves the source convention exactly and must not be "fixed"
    /// without a calibration fixture.
    #[inline(always)]
    pub fn step(&mut self) {
        let left_steps = self.positions[1] == self.bank.middle.notch();
        let mid_steps = self.positions[2] == self.bank.right.notch() || left_steps;
        self.positions[2] = (self.positions[2] + 1) % 26;
        if mid_steps {
            self.positions[1] = (self.positions[1] + 1) % 26;
        }
        if left_steps {
            self.positions[0] = (self.positions[0] + 1) % 26;
        }
    }

    /// Advances the rotors `n` keypresses without producing output.
    ///
    /// Models indicator-procedure keypresses that elapsed before the
    /// message of interest.
    pub fn advance(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Enciphers one letter index (0-25): step, then full signal pass.
    ///
    /// Signal path: plugboard, right/middle/left rotors forward,
    /// reflector, left/middle/right rotors backward, plugboard.
    /// Allocation-free; this is the innermost operation of the sheet
    /// search.
    #[inline(always)]
    pub fn encipher_index(&mut self, c: u8) -> u8 {
        self.step();
        let [pos_left, pos_mid, pos_right] = self.positions;
        let mut x = self.plugboard.apply(c);
        x = self.bank.right.encipher_forward(x, pos_right);
        x = self.bank.middle.encipher_forward(x, pos_mid);
        x = self.bank.left.encipher_forward(x, pos_left);
        x = self.reflector.apply(x);
        x = self.bank.left.encipher_backward(x, pos_left);
        x = self.bank.middle.encipher_backward(x, pos_mid);
        x = self.bank.right.encipher_backward(x, pos_right);
        self.plugboard.apply(x)
    }

    /// Enciphers one character, or returns `None` for a non-letter.
    ///
    /// Non-letters do not step the machine. The machine state advances on
    /// every enciphered letter, so repeated calls with the same input
    /// generally differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use zygalski::{CipherMachine, Plugboard, RotorBank};
    /// use zygalski::wiring;
    ///
    /// let bank = RotorBank::from_names(["I", "II", "III"]).unwrap();
    /// let reflector = wiring::reflector_permutation("B").unwrap();
    /// let plugboard = Plugboard::identity();
    /// let mut machine = CipherMachine::new(&bank, &reflector, &plugboard);
    ///
    /// let first = machine.encipher_one('A').unwrap();
    /// let second = machine.encipher_one('A').unwrap();
    /// assert_ne!(first, second);
    /// ```
    pub fn encipher_one(&mut self, c: char) -> Option<char> {
        let idx = letter_to_index(c)?;
        Some(index_to_letter(self.encipher_index(idx)))
    }

    /// Enciphers every alphabetic character of `text` in order.
    ///
    /// Input is normalized to uppercase; non-alphabetic characters are
    /// silently dropped from the output rather than passed through.
    ///
    /// # Examples
    ///
    /// ```
    /// use zygalski::{CipherMachine, Plugboard, RotorBank};
    /// use zygalski::wiring;
    ///
    /// let bank = RotorBank::from_names(["I", "II", "III"]).unwrap();
    /// let reflector = wiring::reflector_permutation("B").unwrap();
    /// let plugboard = Plugboard::identity();
    ///
    /// let mut machine = CipherMachine::new(&bank, &reflector, &plugboard);
    /// let ciphertext = machine.encipher_sequence("hello, world");
    /// assert_eq!(ciphertext.len(), 10);
    ///
    /// machine.set_positions("AAA").unwrap();
    /// assert_eq!(machine.encipher_sequence(&ciphertext), "HELLOWORLD");
    /// ```
    pub fn encipher_sequence(&mut self, text: &str) -> String {
        text.chars().filter_map(|c| self.encipher_one(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wiring;

    fn machine_parts() -> (RotorBank, Permutation26, Plugboard) {
        (
            RotorBank::from_names(["I", "II", "III"]).unwrap(),
            wiring::reflector_permutation("B").unwrap(),
            Plugboard::identity(),
        )
    }

    #[test]
    fn test_set_positions_valid() {
        let (bank, reflector, plugboard) = machine_parts();
        let mut m = CipherMachine::new(&bank, &reflector, &plugboard);
        m.set_positions("qex").unwrap();
        assert_eq!(m.positions(), [16, 4, 23]);
        assert_eq!(m.position_letters(), ['Q', 'E', 'X']);
    }

    #[test]
    fn test_set_positions_rejects_bad_input() {
        let (bank, reflector, plugboard) = machine_parts();
        let mut m = CipherMachine::new(&bank, &reflector, &plugboard);
        for bad in ["", "AB", "ABCD", "A1C", "A C"] {
            assert_eq!(
                m.set_positions(bad),
                Err(ZygalskiError::InvalidPositions(bad.to_string())),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_right_rotor_always_steps() {
        let (bank, reflector, plugboard) = machine_parts();
        let mut m = CipherMachine::new(&bank, &reflector, &plugboard);
        m.step();
        assert_eq!(m.position_letters(), ['A', 'A', 'B']);
    }

    #[test]
    fn test_middle_steps_when_right_at_notch() {
        let (bank, reflector, plugboard) = machine_parts();
        let mut m = CipherMachine::new(&bank, &reflector, &plugboard);
        // Rotor III notch is V: with the right rotor at V, the next
        // keypress carries the middle rotor.
        m.set_positions("AAV").unwrap();
        m.step();
        assert_eq!(m.position_letters(), ['A', 'B', 'W']);
    }

    #[test]
    fn test_self_reciprocity_single_letter() {
        let (bank, reflector, plugboard) = machine_parts();
        let mut m = CipherMachine::new(&bank, &reflector, &plugboard);
        for start in ["AAA", "QEV", "ZZZ", "KDO"] {
            for c in 0..26u8 {
                m.set_positions(start).unwrap();
                let out = m.encipher_index(c);
                m.set_positions(start).unwrap();
                assert_eq!(m.encipher_index(out), c, "start {} letter {}", start, c);
            }
        }
    }

    #[test]
    fn test_no_letter_enciphers_to_itself() {
        // Consequence of the reflector having no fixed points.
        let (bank, reflector, plugboard) = machine_parts();
        let mut m = CipherMachine::new(&bank, &reflector, &plugboard);
        for c in 0..26u8 {
            m.set_positions("AAA").unwrap();
            assert_ne!(m.encipher_index(c), c);
        }
    }

    #[test]
    fn test_plugboard_wraps_signal_path() {
        let (bank, reflector, _) = machine_parts();
        let identity = Plugboard::identity();
        let steckered = Plugboard::from_pairs(&[('A', 'B')]).unwrap();

        let mut plain = CipherMachine::new(&bank, &reflector, &identity);
        let mut swapped = CipherMachine::new(&bank, &reflector, &steckered);

        // Pressing A on the steckered machine equals pressing B on the
        // plain machine, with A and B swapped on the lamp side too.
        let out_plain = plain.encipher_index(1);
        let out_swapped = swapped.encipher_index(0);
        let expected = match out_plain {
            0 => 1,
            1 => 0,
            other => other,
        };
        assert_eq!(out_swapped, expected);
    }

    #[test]
    fn test_advance_matches_repeated_step() {
        let (bank, reflector, plugboard) = machine_parts();
        let mut a = CipherMachine::new(&bank, &reflector, &plugboard);
        let mut b = CipherMachine::new(&bank, &reflector, &plugboard);
        a.set_positions("ADT").unwrap();
        b.set_positions("ADT").unwrap();
        a.advance(5);
        for _ in 0..5 {
            b.step();
        }
        assert_eq!(a.positions(), b.positions());
    }

    #[test]
    fn test_sequence_drops_non_alphabetic() {
        let (bank, reflector, plugboard) = machine_parts();
        let mut m = CipherMachine::new(&bank, &reflector, &plugboard);
        let with_noise = m.encipher_sequence("AB 12 C!");
        m.set_positions("AAA").unwrap();
        let clean = m.encipher_sequence("ABC");
        assert_eq!(with_noise, clean);
    }

    #[test]
    fn test_sequence_case_insensitive() {
        let (bank, reflector, plugboard) = machine_parts();
        let mut m = CipherMachine::new(&bank, &reflector, &plugboard);
        let lower = m.encipher_sequence("attackatdawn");
        m.set_positions("AAA").unwrap();
        let upper = m.encipher_sequence("ATTACKATDAWN");
        assert_eq!(lower, upper);
    }
}
