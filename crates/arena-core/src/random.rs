//! Randomness sources for the Random strategy
//!
//! The Random strategy never owns its randomness: the engine hands it a
//! `RandomSource`. Browser and interactive runs use the thread-local
//! entropy generator, tests and replays use a `SeededRng`.

use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;

/// A fair coin, the only capability the Random strategy needs.
pub trait RandomSource {
    /// Returns `true` with probability 1/2, independently of earlier calls.
    fn coin_flip(&mut self) -> bool;
}

impl RandomSource for ThreadRng {
    fn coin_flip(&mut self) -> bool {
        self.gen_bool(0.5)
    }
}

impl RandomSource for StdRng {
    fn coin_flip(&mut self) -> bool {
        self.gen_bool(0.5)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn coin_flip(&mut self) -> bool {
        (**self).coin_flip()
    }
}

/// Seeded random number generator
///
/// Deterministic: same seed = same sequence
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a new RNG from a 64-bit seed
    pub fn new(seed: u64) -> Self {
        // xorshift has a fixed point at zero
        let state = (seed ^ 0x517cc1b727220a95) | 1;

        let mut rng = Self { state };
        for _ in 0..8 {
            rng.next_u64();
        }
        rng
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64*
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }

    /// Generate next u32
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }
}

impl RandomSource for SeededRng {
    fn coin_flip(&mut self) -> bool {
        // High bit: the low bits of xorshift* are the weakest
        self.next_u32() >> 31 == 1
    }
}
