//! `dtn-movement` — stochastic host mobility for the `rust_dtn` simulator.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`model`]     | `MovementModel` — the trait every mobility variant implements   |
//! | [`config`]    | `WorldBounds`, `SpeedRange`, `ModelConfig`                      |
//! | [`interval`]  | `IntervalSampler` — exponentially distributed durations         |
//! | [`waypoint`]  | `ConfinedRandomWaypoint` — zig-zag paths in a sub-rectangle     |
//! | [`community`] | `CommunityMovement` — two-state home/roaming Markov model       |
//! | [`direction`] | `RandomDirectionEpoch` — straight epochs of exponential length  |
//! | [`error`]     | `ModelError`, `ModelResult<T>`                                  |
//!
//! # Usage pattern
//!
//! The simulation engine builds one **prototype** per configured model, then
//! calls [`MovementModel::replicate`] once per host.  Each replica owns an
//! independent forked RNG and re-draws any per-host randomized parameters,
//! so a shared configuration still produces heterogeneous hosts.  Per host,
//! the engine calls [`MovementModel::initial_location`] exactly once at
//! startup and [`MovementModel::next_path`] whenever the host finishes its
//! current path.

pub mod community;
pub mod config;
pub mod direction;
pub mod error;
pub mod interval;
pub mod model;
pub mod waypoint;


pub use community::CommunityMovement;
pub use config::{ModelConfig, SpeedRange, WorldBounds};
pub use direction::RandomDirectionEpoch;
pub use error::{ModelError, ModelResult};
pub use interval::IntervalSampler;
pub use model::MovementModel;
pub use waypoint::ConfinedRandomWaypoint;
