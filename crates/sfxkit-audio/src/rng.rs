//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! All noise flows through this module. Each noise segment of a recipe gets
//! its own stream derived from the run seed and the segment index, so adding
//! or removing a segment never shifts the noise of the others.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives a seed for one segment from the base seed.
///
/// Hashes the base seed concatenated with the segment index (both little
/// endian) and keeps the first four bytes of the digest.
pub fn derive_segment_seed(base_seed: u32, segment_index: u32) -> u32 {
    let mut input = Vec::with_capacity(8);
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(&segment_index.to_le_bytes());

    let hash = blake3::hash(&input);

    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&hash.as_bytes()[0..4]);
    u32::from_le_bytes(bytes)
}

/// Creates the RNG for one segment.
pub fn create_segment_rng(base_seed: u32, segment_index: u32) -> Pcg32 {
    create_rng(derive_segment_seed(base_seed, segment_index))
}

/// Picks a fresh seed from the thread RNG for runs without an explicit seed.
pub fn random_seed() -> u32 {
    rand::random()
}
