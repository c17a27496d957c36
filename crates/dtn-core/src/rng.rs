//! Deterministic per-host RNG.
//!
//! # Determinism strategy
//!
//! Each host gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (host_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive host IDs uniformly across the seed space.
//! This means:
//!
//! - Hosts never share RNG state, so one host's movement never perturbs
//!   another's trajectory.
//! - Replaying a run with the same global seed reproduces every host's
//!   entire waypoint sequence exactly.
//! - `fork()` derives a fresh independent stream from an existing one —
//!   this is how model replication hands each new instance its own source
//!   without aliasing the prototype's.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::HostId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-host deterministic RNG.
///
/// Every movement-model instance owns exactly one `HostRng`.  The type is
/// `!Sync` to prevent accidental sharing across threads — hosts simulated in
/// parallel must each hold their own.
pub struct HostRng(SmallRng);

impl HostRng {
    /// Seed deterministically from the run's global seed and a host ID.
    pub fn new(global_seed: u64, host: HostId) -> Self {
        let seed = global_seed ^ (host.0 as u64).wrapping_mul(MIXING_CONSTANT);
        HostRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed directly, bypassing the host-ID mixing.
    pub fn from_seed(seed: u64) -> Self {
        HostRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive an independent child RNG.
    ///
    /// Consumes one draw from `self`, so successive forks yield distinct,
    /// decorrelated streams.  The child shares no state with its parent.
    pub fn fork(&mut self) -> HostRng {
        let seed: u64 = self.0.r#gen::<u64>() ^ MIXING_CONSTANT;
        HostRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types
    /// (`rng.inner().sample(...)`, `rng.inner().gen_range(...)`, etc.)
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
