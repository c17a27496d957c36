//! Planar position, rectangle, and travel-path types.
//!
//! The simulation world is an abstract 2-D plane `[0, max_x] × [0, max_y]`;
//! `f64` keeps the arithmetic exact enough that repeated offset/normalize
//! operations on trace data introduce no visible drift.

use crate::HostRng;

// ── Position ─────────────────────────────────────────────────────────────────

/// A 2-D point on the simulation plane.
///
/// `Copy`, so handing a position across an ownership boundary (into a
/// [`Path`], out of a decoder batch) always duplicates it — no aliasing.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ── Rect ─────────────────────────────────────────────────────────────────────

/// An axis-aligned rectangle on the simulation plane.
///
/// Used for confined movement areas and community home regions.  `contains`
/// is inclusive of the edges; `interior_contains` is the strict predicate
/// rejection-sampling loops test against.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Rect {
    #[inline]
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self { min_x, max_x, min_y, max_y }
    }

    /// A `side × side` square centered on `center`.
    pub fn centered(center: Position, side: f64) -> Self {
        let half = 0.5 * side;
        Self {
            min_x: center.x - half,
            max_x: center.x + half,
            min_y: center.y - half,
            max_y: center.y + half,
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// `true` if `p` lies within the rectangle, edges included.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// `true` if `p` lies strictly inside the rectangle (edges excluded).
    #[inline]
    pub fn interior_contains(&self, p: Position) -> bool {
        p.x > self.min_x && p.x < self.max_x && p.y > self.min_y && p.y < self.max_y
    }

    /// Draw a uniformly distributed point within the rectangle.
    pub fn sample(&self, rng: &mut HostRng) -> Position {
        Position {
            x: self.min_x + rng.random::<f64>() * self.width(),
            y: self.min_y + rng.random::<f64>() * self.height(),
        }
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{:.2}, {:.2}] x [{:.2}, {:.2}]",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}

// ── Path ─────────────────────────────────────────────────────────────────────

/// One leg of travel: an ordered waypoint sequence plus a single speed.
///
/// A movement model produces a `Path`, the simulation engine consumes it by
/// walking the host through the waypoints at `speed`.  Paths are built once
/// and never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    /// Travel speed for every segment of this leg.
    pub speed: f64,

    /// Waypoints in travel order.  The first is the host's position when the
    /// path begins.
    pub waypoints: Vec<Position>,
}

impl Path {
    /// Create an empty path travelled at `speed`.
    pub fn new(speed: f64) -> Self {
        Self { speed, waypoints: Vec::new() }
    }

    /// Append `pos` to the waypoint sequence.
    #[inline]
    pub fn add_waypoint(&mut self, pos: Position) {
        self.waypoints.push(pos);
    }

    /// The waypoint the host ends this leg at, or `None` for an empty path.
    #[inline]
    pub fn last_waypoint(&self) -> Option<Position> {
        self.waypoints.last().copied()
    }

    /// Total Euclidean length of the leg.
    pub fn length(&self) -> f64 {
        self.waypoints
            .windows(2)
            .map(|w| w[0].distance(w[1]))
            .sum()
    }
}
