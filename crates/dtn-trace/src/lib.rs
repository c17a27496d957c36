//! `dtn-trace` — trace replay for the `rust_dtn` simulator.
//!
//! Instead of generating trajectories stochastically, a simulation can
//! replay pre-recorded movement from a plain-text trace file.  This crate
//! holds the streaming decoder that reconstructs synchronized movement
//! batches from such a file; applying the batches to hosts is the engine's
//! job.
//!
//! # Crate layout
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`reader`] | `TraceReader`, `TraceRecord`, `MovementBatch`         |
//! | [`error`]  | `TraceError`, `TraceResult<T>`                        |

pub mod error;
pub mod reader;

#[cfg(test)]
mod tests;

pub use error::{TraceError, TraceResult};
pub use reader::{MovementBatch, TraceReader, TraceRecord};
