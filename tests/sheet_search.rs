//! End-to-end tests for sheet generation, stacking and solution search.
//!
//! The literal 17,576-key scan below re-derives sheet cells straight from
//! the public machine API; the generator's collapsed scan must agree with
//! it cell for cell.

use zygalski::wiring;
use zygalski::{
    find_solutions, key_with_repeat_moved, stack, CipherMachine, FemaleType, Plugboard, RotorBank,
    Sheet, SheetGenerator,
};

fn parts() -> (RotorBank, wiring::Permutation26) {
    (
        RotorBank::from_names(["I", "II", "III"]).unwrap(),
        wiring::reflector_permutation("B").unwrap(),
    )
}

/// Literal exhaustive scan: every one of the 17,576 keys, full doubled
/// encipherment, short-circuit on the first coincidence.
fn full_scan_cell(
    bank: &RotorBank,
    reflector: &wiring::Permutation26,
    start: [u8; 3],
    female: FemaleType,
) -> bool {
    let plugboard = Plugboard::identity();
    let mut machine = CipherMachine::new(bank, reflector, &plugboard);
    let (first, second) = female.test_indices();
    for a in 0..26u8 {
        for b in 0..26u8 {
            for c in 0..26u8 {
                let key = key_with_repeat_moved(a, b, c, female.repeat_pos());
                machine.set_position_indices(start);
                machine.advance(female.offset_steps());
                let mut cipher = [0u8; 6];
                for (t, slot) in cipher.iter_mut().enumerate() {
                    *slot = machine.encipher_index(key[t % 3]);
                }
                if cipher[first] == cipher[second] {
                    return true;
                }
            }
        }
    }
    false
}

// ═══════════════════════════════════════════════════════════════════════
// Generator correctness
// ═══════════════════════════════════════════════════════════════════════

/// The generated sheet agrees with the literal 17,576-key scan on a
/// spread of cells, for every female type.
#[test]
fn generator_matches_full_key_scan() {
    let (bank, reflector) = parts();
    let generator = SheetGenerator::new(&bank, &reflector);
    let probes: [(u8, u8); 3] = [(0, 0), (5, 12), (19, 3)];
    for female in FemaleType::ALL {
        let sheet = generator.generate('A', female).unwrap();
        for (mid, right) in probes {
            let expected = full_scan_cell(&bank, &reflector, [0, mid, right], female);
            assert_eq!(
                sheet.get(mid, right),
                expected,
                "female {} cell ({}, {})",
                female,
                mid,
                right
            );
        }
    }
}

/// Bit-identical output across repeated calls (the parallel row split
/// must not introduce nondeterminism).
#[test]
fn generator_is_deterministic() {
    let (bank, reflector) = parts();
    let generator = SheetGenerator::new(&bank, &reflector);
    let first = generator.generate('G', FemaleType::TwoFive).unwrap();
    let second = generator.generate('G', FemaleType::TwoFive).unwrap();
    assert_eq!(first, second);
}

/// Frozen true-cell counts for left letter A, one per female type.
///
/// Captured from a reference run over the historical wiring tables; the
/// ~39% density matches the documented behavior of the real perforated
/// sheets. Any change is a regression in the cipher or the search.
#[test]
fn sheet_density_snapshots() {
    let (bank, reflector) = parts();
    let generator = SheetGenerator::new(&bank, &reflector);
    let expected = [
        (FemaleType::OneFour, 264),
        (FemaleType::TwoFive, 263),
        (FemaleType::ThreeSix, 262),
    ];
    for (female, count) in expected {
        let sheet = generator.generate('A', female).unwrap();
        assert_eq!(sheet.count_true(), count, "female {}", female);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Stacking
// ═══════════════════════════════════════════════════════════════════════

/// A stacked cell is true only where every individual sheet is true.
#[test]
fn stack_is_monotone_intersection() {
    let (bank, reflector) = parts();
    let generator = SheetGenerator::new(&bank, &reflector);
    let females = [FemaleType::OneFour, FemaleType::TwoFive, FemaleType::ThreeSix];
    let singles: Vec<Sheet> = females
        .iter()
        .map(|&f| generator.generate('A', f).unwrap())
        .collect();
    let stacked = stack(&bank, &reflector, 'A', &females).unwrap();

    for mid in 0..26u8 {
        for right in 0..26u8 {
            let expected = singles.iter().all(|s| s.get(mid, right));
            assert_eq!(stacked.get(mid, right), expected);
        }
    }
    assert!(stacked.count_true() <= singles.iter().map(Sheet::count_true).min().unwrap());
}

/// Stacking no sheets yields the all-true identity.
#[test]
fn empty_stack_is_identity() {
    let (bank, reflector) = parts();
    let stacked = stack(&bank, &reflector, 'M', &[]).unwrap();
    assert_eq!(stacked.count_true(), 676);
}

// ═══════════════════════════════════════════════════════════════════════
// End-to-end solution search
// ═══════════════════════════════════════════════════════════════════════

/// Frozen candidate count per left-rotor letter for the three-intercept
/// scenario, captured from a reference run (A through Z, 989 in total).
const CANDIDATES_PER_LEFT: [usize; 26] = [
    40, 30, 20, 43, 66, 37, 25, 47, 43, 44, 30, 27, 24, 47, 39, 40, 46, 45, 44, 33, 39, 43, 44,
    30, 33, 30,
];

/// The fixed three-intercept scenario: rotor order I/II/III with all
/// three female types observed. The candidate set is a pure function of
/// the historical wiring tables; the frozen values below were captured
/// from a reference run and any deviation is a regression.
#[test]
fn find_solutions_three_intercepts() {
    let (bank, reflector) = parts();
    let females = [FemaleType::OneFour, FemaleType::TwoFive, FemaleType::ThreeSix];

    let first = find_solutions(&bank, &reflector, &females);
    assert_eq!(first.len(), 989, "candidate count drifted from reference run");
    assert!(
        first.windows(2).all(|w| w[0] < w[1]),
        "candidates not strictly sorted by (left, mid, right)"
    );

    // Frozen spot values across the candidate list.
    let spots = [
        (0, "AAD"),
        (1, "AAI"),
        (247, "GKF"),
        (494, "NLX"),
        (741, "TFS"),
        (987, "ZXM"),
        (988, "ZZU"),
    ];
    for (index, expected) in spots {
        assert_eq!(format!("{}", first[index]), expected, "index {}", index);
    }

    // Frozen per-left-letter distribution.
    for (left, &expected) in CANDIDATES_PER_LEFT.iter().enumerate() {
        let letter = (left as u8 + b'A') as char;
        let count = first.iter().filter(|s| s.left == letter).count();
        assert_eq!(count, expected, "left letter {}", letter);
    }

    let second = find_solutions(&bank, &reflector, &females);
    assert_eq!(first, second, "solution search is not reproducible");

    // Every candidate must survive each individual sheet.
    let generator = SheetGenerator::new(&bank, &reflector);
    let probe = first[0];
    for female in females {
        let sheet = generator.generate(probe.left, female).unwrap();
        let mid = probe.mid as u8 - b'A';
        let right = probe.right as u8 - b'A';
        assert!(sheet.get(mid, right), "candidate {} fails {}", probe, female);
    }
}

/// With no intercepts every triple survives: 26^3 candidates.
#[test]
fn find_solutions_without_intercepts_keeps_everything() {
    let (bank, reflector) = parts();
    let all = find_solutions(&bank, &reflector, &[]);
    assert_eq!(all.len(), 17_576);
    assert_eq!(format!("{}", all[0]), "AAA");
    assert_eq!(format!("{}", all[17_575]), "ZZZ");
}

/// Each additional intercept narrows (never widens) the candidate set.
#[test]
fn more_intercepts_never_widen() {
    let (bank, reflector) = parts();
    let one = find_solutions(&bank, &reflector, &[FemaleType::OneFour]);
    let two = find_solutions(
        &bank,
        &reflector,
        &[FemaleType::OneFour, FemaleType::TwoFive],
    );
    assert!(two.len() <= one.len());
    for candidate in &two {
        assert!(one.contains(candidate));
    }
}
