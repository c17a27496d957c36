//! Exponentially distributed interval sampling.

use dtn_core::HostRng;

/// Draws exponentially distributed durations with a fixed rate parameter.
///
/// Each draw is `-ln(1 - U) / rate` for one uniform `U ∈ [0, 1)` from the
/// caller's RNG — memoryless, and a pure function of that single draw.  The
/// epoch-based movement model uses this for epoch lengths; the expected
/// duration is `1 / rate`.
#[derive(Copy, Clone, Debug)]
pub struct IntervalSampler {
    rate: f64,
}

impl IntervalSampler {
    /// Create a sampler with the given rate parameter.
    ///
    /// # Panics
    ///
    /// Panics if `rate` is not strictly positive — a non-positive rate is a
    /// programming error, not a recoverable condition.
    pub fn new(rate: f64) -> Self {
        assert!(rate > 0.0, "interval sampler rate must be > 0, got {rate}");
        Self { rate }
    }

    /// The configured rate parameter.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Draw the next interval; always `>= 0`.
    #[inline]
    pub fn next_interval(&self, rng: &mut HostRng) -> f64 {
        -(1.0 - rng.random::<f64>()).ln() / self.rate
    }
}
