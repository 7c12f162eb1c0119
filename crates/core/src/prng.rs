//! Deterministic PRNG based on the Xorshift64 algorithm.
//!
//! `Color::random` draws from the thread-local entropy source. When a
//! reproducible sequence of colors is wanted (the CLI `--seed` flag, tests),
//! pass an [`Xorshift64`] to `Color::random_with` instead: it implements
//! [`rand::RngCore`], so every `rand::Rng` helper works on it.

use rand::RngCore;

/// Xorshift64 deterministic PRNG. Same seed always produces the same sequence.
///
/// Uses the shift triple (13, 7, 17). Seed 0 is replaced with a non-zero
/// fallback because zero is a fixed point of the algorithm.
#[derive(Debug, Clone)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new PRNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    fn step(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}

impl RngCore for Xorshift64 {
    fn next_u32(&mut self) -> u32 {
        // high bits have the better statistical quality
        (self.step() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
