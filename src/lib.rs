//! # linear_drive_model
//!
//! Linear (trapezoidal or triangular) motion profiles for stepper drives.
//!
//! This library provides the following modules:
//! - `drive_model` for computing ramp times, step counts and top speed of a move.
//! - `limits` for validated drive limits and the fast rotation defaults.
//! - `rotation` for turning a rotation in millidegrees into motor steps.
//! - `motion_segment` for describing one constant-acceleration piece of a move.
//! - `segment_queue` for a fixed-capacity FIFO of segments.
//! - `segment_executor` for sampling segments in discrete ticks.

pub mod drive_model;
pub mod limits;
pub mod motion_segment;
pub mod rotation;
mod segment_queue;
pub mod segment_executor;

#[cfg(kani)]
mod kani_proofs;

// Re-export main items for convenience:
pub use drive_model::*;
pub use limits::*;
pub use motion_segment::*;
pub use rotation::*;
pub use segment_executor::*;
