//! Enigma I rotor-cipher engine and Zygalski-sheet key recovery.
//!
//! This crate models the Wehrmacht Enigma I exactly (wiring, plugboard,
//! reflector, and the stepping rule including the double-step anomaly)
//! and builds the classical sheet-based cryptanalysis on top of it:
//! repeated-key indicators leak coincidences ("females"), and
//! intersecting the achievability grids of several independent females
//! recovers the unknown rotor positions.
//!
//! # Architecture
//!
//! ```text
//! Rotor          (fixed permutation + notch + ring offset)
//!     ↕ three in a bank, signal enters from the right
//! CipherMachine  (plugboard → rotors → reflector → rotors → plugboard,
//!                 positions advanced before every keypress)
//!     ↕ driven exhaustively by
//! SheetGenerator (26×26 grid: can this start state produce the female?)
//!     ↕ intersected per left-rotor letter
//! stack / find_solutions (candidate (left, mid, right) triples)
//! ```
//!
//! # Examples
//!
//! Recover candidate rotor positions from three intercepted female types:
//!
//! ```no_run
//! use zygalski::{find_solutions, FemaleType, RotorBank};
//! use zygalski::wiring;
//!
//! let bank = RotorBank::from_names(["I", "II", "III"]).unwrap();
//! let reflector = wiring::reflector_permutation("B").unwrap();
//!
//! let intercepts = [FemaleType::OneFour, FemaleType::TwoFive, FemaleType::ThreeSix];
//! let candidates = find_solutions(&bank, &reflector, &intercepts);
//! assert!(!candidates.is_empty());
//! ```
//!
//! Encipher a message and read it back:
//!
//! ```
//! use zygalski::{CipherMachine, Plugboard, RotorBank};
//! use zygalski::wiring;
//!
//! let bank = RotorBank::from_names(["I", "II", "III"]).unwrap();
//! let reflector = wiring::reflector_permutation("B").unwrap();
//! let plugboard = Plugboard::from_pairs(&[('A', 'M'), ('F', 'I')]).unwrap();
//!
//! let mut machine = CipherMachine::new(&bank, &reflector, &plugboard);
//! machine.set_positions("QEV").unwrap();
//! let ciphertext = machine.encipher_sequence("WETTERBERICHT");
//!
//! machine.set_positions("QEV").unwrap();
//! assert_eq!(machine.encipher_sequence(&ciphertext), "WETTERBERICHT");
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod wiring;

mod cyclometer;
mod display;
mod generator;
mod machine;
mod plugboard;
mod rotor;
mod search;
mod sheet;

pub use cyclometer::{cycle_structure, indicator_permutation};
pub use display::{render_sheet, render_solutions};
pub use error::ZygalskiError;
pub use generator::{key_with_repeat_moved, FemaleType, SheetGenerator};
pub use machine::CipherMachine;
pub use plugboard::Plugboard;
pub use rotor::{Rotor, RotorBank};
pub use search::{find_solutions, stack, stack_at, Solution};
pub use sheet::Sheet;
