//! Deterministic RNG hierarchy.
//!
//! A master seed generates one sub-seed per round. Sub-seeds are derived via
//! BLAKE3 hashing rather than by drawing from a shared stream, so round `n`
//! always gets the same series for a given master seed no matter how the
//! earlier rounds went.

use rand::rngs::StdRng;
use rand::SeedableRng;

const DOMAIN_TAG: &[u8] = b"chartguessr/round";

#[derive(Debug, Clone)]
pub struct RngHierarchy {
    master_seed: u64,
}

impl RngHierarchy {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    /// Pick a master seed from the thread RNG (seeded by the OS).
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Derive the sub-seed for a round.
    pub fn round_seed(&self, round: u64) -> u64 {
        let mut hasher = blake3::Hasher::new();
        hasher.update(DOMAIN_TAG);
        hasher.update(&self.master_seed.to_le_bytes());
        hasher.update(&round.to_le_bytes());
        let hash = hasher.finalize();
        let mut head = [0u8; 8];
        head.copy_from_slice(&hash.as_bytes()[..8]);
        u64::from_le_bytes(head)
    }

    /// Create a seeded StdRng for a round.
    pub fn rng_for_round(&self, round: u64) -> StdRng {
        StdRng::seed_from_u64(self.round_seed(round))
    }
}
