//! Seeded randomness for disease contraction.
//!
//! Rolls are pure functions of a seed so a decay application can be replayed
//! exactly in tests and audits.

/// Seed-driven random source.
pub trait RngOracle: Send + Sync {
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform roll in `[0, 1)`.
    fn roll_unit(&self, seed: u64) -> f64 {
        self.next_u32(seed) as f64 / (u32::MAX as f64 + 1.0)
    }

    /// Index in `0..len`. `len` must be non-zero.
    fn pick(&self, seed: u64, len: usize) -> usize {
        (self.next_u32(seed) as usize) % len
    }
}

/// PCG-XSH-RR: 64-bit LCG state, 32-bit permuted output.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Roll contexts so independent rolls within one decay never share a seed.
pub mod roll {
    pub const CONTRACTION: u32 = 0;
    pub const DISEASE_PICK: u32 = 1;
}

/// Mixes the session seed, the record version and the character into one roll seed.
pub fn compute_seed(base_seed: u64, nonce: u64, character: u32, context: u32) -> u64 {
    let mut hash = base_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (character as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}
