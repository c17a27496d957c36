//! Random waypoint movement confined to a sub-rectangle of the map.

use dtn_core::{HostRng, Path, Position, Rect};

use crate::{ModelConfig, ModelError, ModelResult, MovementModel};

/// Random waypoint movement within a **confined** area.
///
/// Creates zig-zag paths: each leg goes from the current position to a
/// fresh uniformly distributed point inside the configured rectangle,
/// independent of where the host currently is.  The area is fixed at
/// construction and shared by all replicas — confinement itself is static
/// configuration, not a per-host draw.
pub struct ConfinedRandomWaypoint {
    config: ModelConfig,
    area: Rect,
    rng: HostRng,
    last_waypoint: Option<Position>,
}

impl ConfinedRandomWaypoint {
    /// Create a prototype confined to `area`.
    ///
    /// Fails if the configuration is invalid or `area` extends outside the
    /// world bounds.
    pub fn new(config: ModelConfig, area: Rect, rng: HostRng) -> ModelResult<Self> {
        config.validate()?;
        let inside = area.min_x >= 0.0
            && area.min_y >= 0.0
            && area.max_x <= config.world.max_x
            && area.max_y <= config.world.max_y
            && area.width() >= 0.0
            && area.height() >= 0.0;
        if !inside {
            return Err(ModelError::AreaOutOfBounds { area });
        }
        Ok(Self { config, area, rng, last_waypoint: None })
    }

    /// The confinement rectangle.
    #[inline]
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Independent replica: same area and configuration, forked RNG, no
    /// position yet.
    pub fn replicate(&mut self) -> ConfinedRandomWaypoint {
        Self {
            config: self.config,
            area: self.area,
            rng: self.rng.fork(),
            last_waypoint: None,
        }
    }

    fn random_coord(&mut self) -> Position {
        self.area.sample(&mut self.rng)
    }
}

impl MovementModel for ConfinedRandomWaypoint {
    fn initial_location(&mut self) -> Position {
        let c = self.random_coord();
        self.last_waypoint = Some(c);
        c
    }

    fn next_path(&mut self) -> Path {
        let last = self
            .last_waypoint
            .expect("next_path() called before initial_location()");

        let mut p = Path::new(self.config.speed.draw(&mut self.rng));
        p.add_waypoint(last);

        let c = self.random_coord();
        p.add_waypoint(c);

        self.last_waypoint = Some(c);
        p
    }

    fn replicate(&mut self) -> Box<dyn MovementModel> {
        Box::new(ConfinedRandomWaypoint::replicate(self))
    }
}
