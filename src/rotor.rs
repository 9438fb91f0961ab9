//! Rotor: a fixed substitution wheel with notch and ring setting.
//!
//! A rotor is immutable once constructed. Its rotational position is not
//! stored here: both transform functions take the current position as a
//! parameter, so one rotor value can serve any number of simulated
//! machines concurrently.

use crate::error::ZygalskiError;
use crate::wiring::{self, Permutation26, RotorSpec};

/// A single Enigma rotor: wiring permutation, notch index, ring offset.
///
/// The ring offset (Ringstellung) shifts which wiring entry aligns with
/// a given external contact; offset 0 is ring setting 'A'.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    wiring: Permutation26,
    notch: u8,
    ring_offset: u8,
}

impl Rotor {
    /// Builds a rotor from a static spec with ring setting 'A'.
    ///
    /// # Errors
    /// Returns [`ZygalskiError::MalformedWiring`] if the spec's wiring
    /// string is not a valid permutation.
    pub fn from_spec(spec: &RotorSpec) -> Result<Self, ZygalskiError> {
        Self::from_spec_with_ring(spec, 'A')
    }

    /// Builds a rotor from a static spec with an explicit ring setting.
    ///
    /// # Parameters
    /// - `spec`: Historical rotor description.
    /// - `ring`: Ring setting letter; 'A' means no offset.
    ///
    /// # Errors
    /// Returns [`ZygalskiError::InvalidRingSetting`] for a non-letter
    /// ring, or [`ZygalskiError::MalformedWiring`] for a bad wiring
    /// string.
    pub fn from_spec_with_ring(spec: &RotorSpec, ring: char) -> Result<Self, ZygalskiError> {
        let ring_offset =
            wiring::letter_to_index(ring).ok_or(ZygalskiError::InvalidRingSetting(ring))?;
        let notch = wiring::letter_to_index(spec.notch).ok_or(ZygalskiError::MalformedWiring)?;
        Ok(Rotor {
            wiring: Permutation26::from_wiring(spec.wiring)?,
            notch,
            ring_offset,
        })
    }

    /// Builds a rotor by historical name ("I" through "V"), ring 'A'.
    ///
    /// # Errors
    /// Returns [`ZygalskiError::UnknownRotor`] for an unknown name.
    pub fn from_name(name: &str) -> Result<Self, ZygalskiError> {
        Self::from_spec(wiring::rotor_spec(name)?)
    }

    /// Returns the notch index (0-25).
    ///
    /// The stepping rule compares this against the raw rotor position,
    /// without ring-offset correction (see [`crate::machine::CipherMachine::step`]).
    #[inline(always)]
    pub fn notch(&self) -> u8 {
        self.notch
    }

    /// Effective wiring shift for the given rotational position.
    #[inline(always)]
    fn shift(&self, pos: u8) -> u8 {
        (pos + 26 - self.ring_offset) % 26
    }

    /// Forward (right-to-left) pass through the rotor at position `pos`.
    ///
    /// Shifts the contact index into the wiring frame, applies the
    /// forward permutation, shifts back out.
    #[inline(always)]
    pub fn encipher_forward(&self, c: u8, pos: u8) -> u8 {
        let shift = self.shift(pos);
        (self.wiring.apply((c + shift) % 26) + 26 - shift) % 26
    }

    /// Backward (left-to-right) pass through the rotor at position `pos`.
    ///
    /// Same shift math as the forward pass, inverse permutation.
    #[inline(always)]
    pub fn encipher_backward(&self, c: u8, pos: u8) -> u8 {
        let shift = self.shift(pos);
        (self.wiring.apply_inverse((c + shift) % 26) + 26 - shift) % 26
    }
}

/// Ordered (left, middle, right) rotor triple.
///
/// Left-to-right is the physical stack order from the operator's
/// perspective; the electrical signal enters from the right rotor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorBank {
    pub left: Rotor,
    pub middle: Rotor,
    pub right: Rotor,
}

impl RotorBank {
    /// Builds a bank from three historical rotor names, ring settings 'A'.
    ///
    /// # Parameters
    /// - `names`: Rotor names in physical order, e.g. `["I", "II", "III"]`.
    ///
    /// # Errors
    /// Returns [`ZygalskiError::UnknownRotor`] if any name is unknown.
    pub fn from_names(names: [&str; 3]) -> Result<Self, ZygalskiError> {
        Ok(RotorBank {
            left: Rotor::from_name(names[0])?,
            middle: Rotor::from_name(names[1])?,
            right: Rotor::from_name(names[2])?,
        })
    }

    /// Builds a bank from three rotor names with explicit ring settings.
    ///
    /// # Errors
    /// Returns [`ZygalskiError::UnknownRotor`] or
    /// [`ZygalskiError::InvalidRingSetting`].
    pub fn from_names_with_rings(
        names: [&str; 3],
        rings: [char; 3],
    ) -> Result<Self, ZygalskiError> {
        Ok(RotorBank {
            left: Rotor::from_spec_with_ring(wiring::rotor_spec(names[0])?, rings[0])?,
            middle: Rotor::from_spec_with_ring(wiring::rotor_spec(names[1])?, rings[1])?,
            right: Rotor::from_spec_with_ring(wiring::rotor_spec(names[2])?, rings[2])?,
        })
    }
}
