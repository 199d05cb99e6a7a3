//! Version-control gutter markers.
//!
//! [`gutter::compute_placements`] turns the inserted, modified and deleted
//! line sets of a diff into marker positions. [`host::GutterCommand`] wraps it
//! in the clear-diff-draw cycle a host editor runs on each trigger.

pub mod config;
pub mod error;
pub mod gutter;
pub mod host;
pub mod logging;
pub mod stdio;

pub use config::{GutterConfig, MarkerStyle};
pub use error::{GutterError, Result};
pub use gutter::{compute_placements, MarkerKind, MarkerPosition, Placements};
pub use host::{GutterCommand, Refresh};
