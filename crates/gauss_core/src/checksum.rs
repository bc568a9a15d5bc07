//! 128-bit FNV-1a style fingerprints.
//!
//! Values are folded in whole (one `u128` per update) rather than byte by
//! byte, so fingerprints are cheap to recompute on any platform and stable
//! across languages that agree on wrapping 128-bit multiplication.

/// FNV-1a 128-bit offset basis.
pub const FNV_OFFSET: u128 = 0x6C62_272E_07BB_0142_62B8_2175_6295_C58D;

/// FNV-1a 128-bit prime.
pub const FNV_PRIME: u128 = 0x0000_0000_0100_0000_0000_0000_0000_013B;

/// Running fingerprint.
///
/// # Example
///
/// ```
/// use gauss_core::checksum::{Fnv128, FNV_OFFSET};
///
/// let mut fnv = Fnv128::new();
/// assert_eq!(fnv.finish(), FNV_OFFSET);
/// fnv.update(42);
/// assert_ne!(fnv.finish(), FNV_OFFSET);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fnv128 {
    state: u128,
}

impl Fnv128 {
    /// Start from the offset basis.
    pub const fn new() -> Self {
        Self { state: FNV_OFFSET }
    }

    /// Fold one value: `state = (state ^ value) * FNV_PRIME mod 2^128`.
    #[inline]
    pub fn update(&mut self, value: u128) {
        self.state = (self.state ^ value).wrapping_mul(FNV_PRIME);
    }

    /// Fold a magnitude followed by its sign flag.
    #[inline]
    pub fn update_signed(&mut self, magnitude: u128, negative: bool) {
        self.update(magnitude);
        self.update(u128::from(negative));
    }

    /// Fold a length.
    #[inline]
    pub fn update_len(&mut self, len: usize) {
        self.update(len as u128);
    }

    /// Current fingerprint.
    pub const fn finish(&self) -> u128 {
        self.state
    }
}

impl Default for Fnv128 {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a fingerprint as `0x`-prefixed lowercase hex.
pub fn to_hex(value: u128) -> String {
    format!("{:#034x}", value)
}
