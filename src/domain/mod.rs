pub mod artifacts;
pub mod build_backend;
pub mod command;
pub mod config;
pub mod confirmation;
pub mod error;
pub mod index;
pub mod manifest;
pub mod outcome;

pub use artifacts::{Artifact, ArtifactSet};
pub use build_backend::BuildBackend;
pub use command::{CommandOutput, CommandSpec};
pub use config::{CONFIG_FILE, ProductionConfig, ReleaseConfig, StagingConfig};
pub use confirmation::Confirmation;
pub use error::AppError;
pub use index::PackageIndex;
pub use manifest::ProjectManifest;
pub use outcome::{CheckOutcome, ReleaseOutcome};
