//! `dtn-core` — foundational types for the `rust_dtn` opportunistic-network
//! simulator.
//!
//! This crate is a dependency of every other `dtn-*` crate.  It intentionally
//! has no `dtn-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `HostId`                                              |
//! | [`pos`]     | `Position`, `Rect`, `Path`                            |
//! | [`rng`]     | `HostRng` (per-host deterministic RNG)                |
//! | [`error`]   | `DtnError`, `DtnResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod pos;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{DtnError, DtnResult};
pub use ids::HostId;
pub use pos::{Path, Position, Rect};
pub use rng::HostRng;
