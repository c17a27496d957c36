//! Two-state community mobility: random waypoint inside a home rectangle,
//! interleaved with roaming excursions over the rest of the map.

use dtn_core::{HostRng, Path, Position, Rect};

use crate::{ModelConfig, ModelError, ModelResult, MovementModel};

/// Community-based movement.
///
/// Each host owns a fixed `size × size` **community rectangle** chosen at
/// [`initial_location`][MovementModel::initial_location] and performs random
/// waypoint movement in one of two states:
///
/// - **local** — waypoints are uniform inside the community rectangle;
/// - **roaming** — waypoints are uniform over the map, rejection-sampled
///   until they fall outside the rectangle.
///
/// State switches form a two-state Markov chain: from local, the host
/// roams with probability `p_home_to_out` per step; from roaming, it
/// returns home with probability `p_out_to_home` per step.  Both scalars
/// are drawn per instance from configured ranges, so hosts replicated from
/// one prototype are heterogeneous: some barely leave home, some barely
/// return.
pub struct CommunityMovement {
    config: ModelConfig,
    size: f64,
    p_home_to_out_range: (f64, f64),
    p_out_to_home_range: (f64, f64),

    /// Per-instance draws from the ranges above.
    p_home_to_out: f64,
    p_out_to_home: f64,

    /// Fixed once `initial_location` has chosen the community center.
    community: Option<Rect>,
    inside_local: bool,

    rng: HostRng,
    last_waypoint: Option<Position>,
}

impl CommunityMovement {
    /// Create a prototype with community side length `size` and the two
    /// per-host probability ranges `(lo, hi)`.
    ///
    /// The prototype draws its own transition probabilities immediately;
    /// every replica re-draws with its forked RNG.  Fails if `size` cannot
    /// fit inside the world (the community-center search would never
    /// terminate) or a probability range leaves `[0, 1]`.
    pub fn new(
        config: ModelConfig,
        size: f64,
        p_home_to_out: (f64, f64),
        p_out_to_home: (f64, f64),
        mut rng: HostRng,
    ) -> ModelResult<Self> {
        config.validate()?;
        if !(size > 0.0) || size >= config.world.max_x || size >= config.world.max_y {
            return Err(ModelError::InvalidCommunitySize {
                size,
                max_x: config.world.max_x,
                max_y: config.world.max_y,
            });
        }
        for &(lo, hi) in &[p_home_to_out, p_out_to_home] {
            if !(0.0 <= lo && lo <= hi && hi <= 1.0) {
                return Err(ModelError::InvalidProbabilityRange { lo, hi });
            }
        }

        let p_home = draw_in(p_home_to_out, &mut rng);
        let p_out = draw_in(p_out_to_home, &mut rng);

        Ok(Self {
            config,
            size,
            p_home_to_out_range: p_home_to_out,
            p_out_to_home_range: p_out_to_home,
            p_home_to_out: p_home,
            p_out_to_home: p_out,
            community: None,
            inside_local: false,
            rng,
            last_waypoint: None,
        })
    }

    /// This instance's drawn local→roaming switch probability.
    #[inline]
    pub fn p_home_to_out(&self) -> f64 {
        self.p_home_to_out
    }

    /// This instance's drawn roaming→local switch probability.
    #[inline]
    pub fn p_out_to_home(&self) -> f64 {
        self.p_out_to_home
    }

    /// The community rectangle, once `initial_location` has fixed it.
    #[inline]
    pub fn community(&self) -> Option<Rect> {
        self.community
    }

    /// `true` while the host is in its local state.
    #[inline]
    pub fn inside_local(&self) -> bool {
        self.inside_local
    }

    /// Independent replica: same configuration, forked RNG, freshly drawn
    /// transition probabilities, community not yet placed.
    pub fn replicate(&mut self) -> CommunityMovement {
        let mut rng = self.rng.fork();
        let p_home_to_out = draw_in(self.p_home_to_out_range, &mut rng);
        let p_out_to_home = draw_in(self.p_out_to_home_range, &mut rng);

        Self {
            config: self.config,
            size: self.size,
            p_home_to_out_range: self.p_home_to_out_range,
            p_out_to_home_range: self.p_out_to_home_range,
            p_home_to_out,
            p_out_to_home,
            community: None,
            inside_local: false,
            rng,
            last_waypoint: None,
        }
    }

    /// Choose the community center so the `size × size` rectangle lies
    /// entirely on the map.  Each axis is redrawn independently until it
    /// clears the border; construction guarantees this terminates.
    fn init_community(&mut self) -> Position {
        let world = self.config.world;
        let half = 0.5 * self.size;

        let mut x = self.rng.random::<f64>() * world.max_x;
        while x - half < 0.0 || x + half > world.max_x {
            x = self.rng.random::<f64>() * world.max_x;
        }

        let mut y = self.rng.random::<f64>() * world.max_y;
        while y - half < 0.0 || y + half > world.max_y {
            y = self.rng.random::<f64>() * world.max_y;
        }

        let center = Position::new(x, y);
        self.community = Some(Rect::centered(center, self.size));
        center
    }

    /// Uniform point inside the community rectangle; enters the local state.
    fn next_local_coord(&mut self) -> Position {
        let community = self.community.expect("community not initialized");
        self.inside_local = true;
        community.sample(&mut self.rng)
    }

    /// Uniform point over the map outside the community rectangle; enters
    /// the roaming state.  Candidates falling inside the rectangle are
    /// redrawn.
    fn next_roaming_coord(&mut self) -> Position {
        let community = self.community.expect("community not initialized");
        loop {
            let c = self.config.world.sample(&mut self.rng);
            if !community.interior_contains(c) {
                self.inside_local = false;
                return c;
            }
        }
    }

    /// One step of the two-state Markov chain.
    fn random_coord(&mut self) -> Position {
        let stateprob = self.rng.random::<f64>();
        if self.inside_local {
            if stateprob > self.p_home_to_out {
                self.next_local_coord() // stay inside the community
            } else {
                self.next_roaming_coord() // switch to roaming
            }
        } else if stateprob > self.p_out_to_home {
            self.next_roaming_coord() // keep roaming
        } else {
            self.next_local_coord() // return home
        }
    }
}

impl MovementModel for CommunityMovement {
    /// Fixes the community rectangle for this instance's lifetime and
    /// starts the host at its center, in the local state.
    fn initial_location(&mut self) -> Position {
        let c = self.init_community();
        self.inside_local = true;
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
        Box::new(CommunityMovement::replicate(self))
    }
}

fn draw_in((lo, hi): (f64, f64), rng: &mut HostRng) -> f64 {
    lo + rng.random::<f64>() * (hi - lo)
}
