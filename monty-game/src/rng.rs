//! Randomness seam for the game.
//!
//! Every random decision in a game goes through [`RandomSource`], so tests can
//! script exact draws and runs can be replayed from a user seed.
use hmac::{Hmac, Mac};
use rand::rngs::SmallRng;
use rand::seq::index;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sha2::Sha256;
use std::collections::VecDeque;

use crate::constants::STREAM_DOMAIN;

/// Provider of the two uniform draws the game needs.
pub trait RandomSource {
    /// Pick an index uniformly from `0..len`.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Pick `amount` distinct indices uniformly from `0..len`, in draw order.
    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize>;
}

/// Counting adapter exposing any [`RngCore`] as a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
    draws: u64,
}

/// Reproducible source used for seeded runs.
pub type SeededSource = RngSource<ChaCha20Rng>;

impl<R> RngSource<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng, draws: 0 }
    }

    /// Number of draw calls performed against this source.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }

    #[must_use]
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<ChaCha20Rng> {
    /// Construct the source from a user-visible seed.
    #[must_use]
    pub fn from_user_seed(seed: u64) -> Self {
        Self::new(ChaCha20Rng::seed_from_u64(derive_stream_seed(
            seed,
            STREAM_DOMAIN,
        )))
    }

    /// Construct an unseeded source from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(ChaCha20Rng::from_entropy())
    }
}

impl RngSource<SmallRng> {
    /// Fast non-portable stream, handy for large statistical sweeps.
    #[must_use]
    pub fn small(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.draws = self.draws.saturating_add(1);
        self.rng.gen_range(0..len)
    }

    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        self.draws = self.draws.saturating_add(1);
        index::sample(&mut self.rng, len, amount.min(len)).into_vec()
    }
}

/// Source that replays a fixed script of draws, wrapping each into range.
///
/// Once the script runs out every draw is `0`. Sampling without replacement
/// consumes one scripted draw per sampled index.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: VecDeque<usize>,
}

impl ScriptedSource {
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    fn next_draw(&mut self) -> usize {
        self.script.pop_front().unwrap_or(0)
    }
}

impl RandomSource for ScriptedSource {
    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.next_draw() % len
    }

    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        let mut pool: Vec<usize> = (0..len).collect();
        let mut picked = Vec::with_capacity(amount.min(len));
        while picked.len() < amount && !pool.is_empty() {
            let slot = self.next_draw() % pool.len();
            picked.push(pool.remove(slot));
        }
        picked
    }
}

fn derive_stream_seed(user_seed: u64, domain_tag: &[u8]) -> u64 {
    let Ok(mut mac) = Hmac::<Sha256>::new_from_slice(&user_seed.to_le_bytes()) else {
        return user_seed;
    };
    mac.update(domain_tag);
    let digest = mac.finalize().into_bytes();
    let mut seed_bytes = [0u8; 8];
    seed_bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(seed_bytes)
}
