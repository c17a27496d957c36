//! The `MovementModel` trait — the contract every mobility variant implements.

use dtn_core::{Path, Position};

/// Pluggable host mobility.
///
/// The simulation engine owns one model instance per host and interacts with
/// it only through this trait.  A model is a self-contained stochastic
/// process: it holds the host's last position, an independent RNG, and any
/// model-specific discrete state.  Nothing is shared between instances, so
/// hosts can be stepped in any order (or in parallel) without interference.
///
/// # Call contract
///
/// 1. [`initial_location`][Self::initial_location] is called exactly once
///    per host lifetime, before any `next_path` call.
/// 2. [`next_path`][Self::next_path] is called whenever the host finishes
///    its current path; the returned leg starts at the host's last known
///    position.
/// 3. [`replicate`][Self::replicate] turns a prototype into one fresh
///    instance per additional host.
///
/// Calling `next_path` before `initial_location` is a contract violation
/// and panics.
pub trait MovementModel {
    /// A random starting position for the host.
    ///
    /// Also initializes the instance's internal "last position" (and any
    /// discrete state, e.g. the community model fixes its home rectangle
    /// here).
    fn initial_location(&mut self) -> Position;

    /// The next travel leg, starting at the host's last known position.
    ///
    /// Advances the instance's internal last position to the leg's final
    /// waypoint as a side effect.
    ///
    /// # Panics
    ///
    /// Panics if called before [`initial_location`][Self::initial_location].
    fn next_path(&mut self) -> Path;

    /// Create an independent new instance from this prototype.
    ///
    /// Static configuration is copied, the RNG is forked (never aliased),
    /// per-host randomized parameters are re-drawn, and mutable state is
    /// reset to unset — the replica behaves like a freshly constructed
    /// model for a new host.
    fn replicate(&mut self) -> Box<dyn MovementModel>;
}
