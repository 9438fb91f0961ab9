//! Cyclometer: cycle structure of the indicator permutation.
//!
//! Rejewski's cyclometer characterizes a day key by the cycle structure
//! of the permutation linking the first and fourth letters of a doubled
//! indicator. The cycle lengths are plugboard-independent, which is what
//! made the card catalog possible.

use crate::machine::CipherMachine;
use crate::plugboard::Plugboard;
use crate::rotor::RotorBank;
use crate::wiring::{index_to_letter, Permutation26};

/// Builds the permutation mapping keypress-1 ciphertext letters to
/// keypress-4 ciphertext letters for the same underlying key letter.
///
/// For each key letter k the machine is reset to `start`, k is pressed
/// (first indicator letter), two dummy presses replicate the stepping of
/// the second and third letters, then k is pressed again (fourth
/// indicator letter). Both outputs are recorded and the map sends the
/// first onto the fourth, so the result is the composite of the two
/// per-keypress involutions — the permutation an observer of real
/// doubled indicators can reconstruct. (Following only the keypress-4
/// output instead would trace a single involution and every cycle would
/// collapse to length two.)
pub fn indicator_permutation(
    bank: &RotorBank,
    reflector: &Permutation26,
    start: [u8; 3],
) -> [u8; 26] {
    let plugboard = Plugboard::identity();
    let mut machine = CipherMachine::new(bank, reflector, &plugboard);
    let mut perm = [0u8; 26];
    for k in 0..26u8 {
        machine.set_position_indices(start);
        let first = machine.encipher_index(k);
        machine.advance(2);
        let fourth = machine.encipher_index(k);
        perm[first as usize] = fourth;
    }
    perm
}

/// Decomposes the indicator permutation into cycles.
///
/// Each cycle is rotated to begin at its smallest letter and the cycles
/// are sorted by first letter; lengths always sum to 26. Both keypress
/// permutations are fixed-point-free involutions, so cycles of each
/// length occur in pairs (Rejewski's theorem).
pub fn cycle_structure(
    bank: &RotorBank,
    reflector: &Permutation26,
    start: [u8; 3],
) -> Vec<Vec<char>> {
    let perm = indicator_permutation(bank, reflector, start);
    let mut seen = [false; 26];
    let mut cycles = Vec::new();
    for start_letter in 0..26u8 {
        if seen[start_letter as usize] {
            continue;
        }
        let mut cycle = Vec::new();
        let mut current = start_letter;
        loop {
            seen[current as usize] = true;
            cycle.push(index_to_letter(current));
            current = perm[current as usize];
            if current == start_letter {
                break;
            }
        }
        cycles.push(cycle);
    }
    // Scanning letters in order already yields cycles sorted by their
    // smallest member.
    cycles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wiring;

    fn parts() -> (RotorBank, Permutation26) {
        (
            RotorBank::from_names(["I", "II", "III"]).unwrap(),
            wiring::reflector_permutation("B").unwrap(),
        )
    }

    #[test]
    fn test_indicator_map_is_permutation() {
        let (bank, reflector) = parts();
        let perm = indicator_permutation(&bank, &reflector, [0, 0, 0]);
        let mut seen = [false; 26];
        for &target in perm.iter() {
            assert!(!seen[target as usize], "duplicate target {}", target);
            seen[target as usize] = true;
        }
    }

    #[test]
    fn test_cycle_lengths_sum_to_26() {
        let (bank, reflector) = parts();
        for start in [[0, 0, 0], [16, 4, 21], [25, 25, 25]] {
            let cycles = cycle_structure(&bank, &reflector, start);
            let total: usize = cycles.iter().map(|c| c.len()).sum();
            assert_eq!(total, 26, "start {:?}", start);
        }
    }

    #[test]
    fn test_cycle_lengths_pair_up() {
        // Product of two fixed-point-free involutions: each cycle length
        // occurs an even number of times.
        let (bank, reflector) = parts();
        for start in [[0, 0, 0], [3, 11, 19]] {
            let cycles = cycle_structure(&bank, &reflector, start);
            let mut counts = [0usize; 27];
            for cycle in &cycles {
                counts[cycle.len()] += 1;
            }
            for (len, &count) in counts.iter().enumerate() {
                assert_eq!(count % 2, 0, "length {} occurs {} times", len, count);
            }
        }
    }

    #[test]
    fn test_cycles_sorted_and_canonical() {
        let (bank, reflector) = parts();
        let cycles = cycle_structure(&bank, &reflector, [7, 2, 12]);
        for cycle in &cycles {
            assert_eq!(cycle[0], *cycle.iter().min().unwrap());
        }
        for pair in cycles.windows(2) {
            assert!(pair[0][0] < pair[1][0]);
        }
    }

    #[test]
    fn test_deterministic_across_calls() {
        let (bank, reflector) = parts();
        let a = cycle_structure(&bank, &reflector, [1, 2, 3]);
        let b = cycle_structure(&bank, &reflector, [1, 2, 3]);
        assert_eq!(a, b);
    }
}
