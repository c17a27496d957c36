//! Random direction movement with exponentially distributed epoch lengths.

use std::f64::consts::PI;

use dtn_core::{HostRng, Path, Position};

use crate::{IntervalSampler, ModelConfig, ModelError, ModelResult, MovementModel};

/// Default expected epoch length, in simulated time units.
pub const DEFAULT_EPOCH_LENGTH: f64 = 100.0;

/// Random direction movement in exponential epochs.
///
/// Each path is one **epoch**: the host picks a uniform direction and
/// travels in a straight line for an exponentially distributed duration.
/// The epoch rate is `mean_speed / expected_epoch_length`, so the expected
/// travelled distance per epoch is `expected_epoch_length` regardless of the
/// configured speed range.
///
/// An epoch whose endpoint would leave the map is discarded wholesale —
/// speed, direction, and duration are all redrawn — which keeps accepted
/// endpoints uniform over the admissible set rather than piling up against
/// the border.
pub struct RandomDirectionEpoch {
    config: ModelConfig,
    sampler: IntervalSampler,
    rng: HostRng,
    last_waypoint: Option<Position>,
}

impl RandomDirectionEpoch {
    /// Create a prototype with the given expected epoch length.
    ///
    /// Fails on an invalid configuration, a non-positive epoch length, or a
    /// zero mean speed (the epoch rate would be zero and no epoch would ever
    /// end).
    pub fn new(
        config: ModelConfig,
        expected_epoch_length: f64,
        rng: HostRng,
    ) -> ModelResult<Self> {
        config.validate()?;
        if !(expected_epoch_length > 0.0) {
            return Err(ModelError::InvalidEpochLength(expected_epoch_length));
        }
        let lambda = config.speed.mean() / expected_epoch_length;
        if !(lambda > 0.0) {
            return Err(ModelError::ZeroEpochRate);
        }

        Ok(Self {
            config,
            sampler: IntervalSampler::new(lambda),
            rng,
            last_waypoint: None,
        })
    }

    /// Like [`new`][Self::new] with [`DEFAULT_EPOCH_LENGTH`].
    pub fn with_default_epoch(config: ModelConfig, rng: HostRng) -> ModelResult<Self> {
        Self::new(config, DEFAULT_EPOCH_LENGTH, rng)
    }

    /// The epoch rate `lambda = mean_speed / expected_epoch_length`.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.sampler.rate()
    }

    /// Independent replica: same configuration and rate, forked RNG, no
    /// position yet.
    pub fn replicate(&mut self) -> RandomDirectionEpoch {
        Self {
            config: self.config,
            sampler: self.sampler,
            rng: self.rng.fork(),
            last_waypoint: None,
        }
    }
}

impl MovementModel for RandomDirectionEpoch {
    fn initial_location(&mut self) -> Position {
        let c = self.config.world.sample(&mut self.rng);
        self.last_waypoint = Some(c);
        c
    }

    fn next_path(&mut self) -> Path {
        let last = self
            .last_waypoint
            .expect("next_path() called before initial_location()");

        // Redraw speed, direction, and duration together until the epoch
        // endpoint lands strictly inside the map.
        let (c, speed) = loop {
            let speed = self.config.speed.draw(&mut self.rng);
            let angle = self.rng.random::<f64>() * 2.0 * PI;
            let duration = self.sampler.next_interval(&mut self.rng);
            let distance = duration * speed;

            let c = Position::new(
                last.x + distance * angle.cos(),
                last.y + distance * angle.sin(),
            );
            if self.config.world.interior_contains(c) {
                break (c, speed);
            }
        };

        let mut p = Path::new(speed);
        p.add_waypoint(last);
        p.add_waypoint(c);

        self.last_waypoint = Some(c);
        p
    }

    fn replicate(&mut self) -> Box<dyn MovementModel> {
        Box::new(RandomDirectionEpoch::replicate(self))
    }
}
