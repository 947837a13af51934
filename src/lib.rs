//! pyship: build, check, and publish Python distributions with optional git tagging.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{ReleaseOptions, release, release_at};
pub use domain::{AppError, CheckOutcome, ReleaseConfig, ReleaseOutcome};
