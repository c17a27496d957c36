//! Static model configuration shared by all mobility variants.

use dtn_core::{HostRng, Position};

use crate::{ModelError, ModelResult};

// ── WorldBounds ───────────────────────────────────────────────────────────────

/// The simulation area `[0, max_x] × [0, max_y]`.
///
/// Every generated position must stay within these bounds; each model
/// enforces that with explicit bounding or rejection sampling.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WorldBounds {
    pub max_x: f64,
    pub max_y: f64,
}

impl WorldBounds {
    #[inline]
    pub fn new(max_x: f64, max_y: f64) -> Self {
        Self { max_x, max_y }
    }

    /// Draw a uniformly distributed point on the map.
    pub fn sample(&self, rng: &mut HostRng) -> Position {
        Position {
            x: rng.random::<f64>() * self.max_x,
            y: rng.random::<f64>() * self.max_y,
        }
    }

    /// `true` if `p` lies strictly inside the area (edges excluded).
    #[inline]
    pub fn interior_contains(&self, p: Position) -> bool {
        p.x > 0.0 && p.x < self.max_x && p.y > 0.0 && p.y < self.max_y
    }
}

// ── SpeedRange ────────────────────────────────────────────────────────────────

/// Travel-speed range `[min, max)` shared by all mobility variants.
///
/// A fresh speed is drawn per path, so consecutive legs of the same host
/// travel at different speeds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpeedRange {
    pub min: f64,
    pub max: f64,
}

impl SpeedRange {
    #[inline]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Draw a speed uniformly from the range.
    pub fn draw(&self, rng: &mut HostRng) -> f64 {
        self.min + rng.random::<f64>() * (self.max - self.min)
    }

    /// Arithmetic mean of the range.
    #[inline]
    pub fn mean(&self) -> f64 {
        0.5 * (self.min + self.max)
    }
}

// ── ModelConfig ───────────────────────────────────────────────────────────────

/// The static configuration every model copies verbatim on `replicate()`.
///
/// Per-host randomized parameters (e.g. the community model's transition
/// probabilities) are *not* part of this struct — those are drawn per
/// instance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ModelConfig {
    pub world: WorldBounds,
    pub speed: SpeedRange,
}

impl ModelConfig {
    pub fn new(world: WorldBounds, speed: SpeedRange) -> Self {
        Self { world, speed }
    }

    /// Reject configurations no model can run on.
    ///
    /// Called by every model constructor so invalid bounds surface at
    /// construction rather than as a hung rejection-sampling loop.
    pub fn validate(&self) -> ModelResult<()> {
        if !(self.world.max_x > 0.0) || !(self.world.max_y > 0.0) {
            return Err(ModelError::InvalidWorld {
                max_x: self.world.max_x,
                max_y: self.world.max_y,
            });
        }
        if !(self.speed.min >= 0.0) || !(self.speed.max >= self.speed.min) {
            return Err(ModelError::InvalidSpeedRange {
                min: self.speed.min,
                max: self.speed.max,
            });
        }
        Ok(())
    }
}
