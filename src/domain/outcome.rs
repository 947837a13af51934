//! Typed results of the release steps.
//!
//! Fatal failures travel as `Err(AppError)`. The only recoverable case is a
//! failing artifact check, which is a [`CheckOutcome::Warning`].

use crate::domain::BuildBackend;

/// Result of `twine check`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Passed,
    /// The checker reported problems; the release continues.
    Warning { details: String },
}

impl CheckOutcome {
    pub fn is_warning(&self) -> bool {
        matches!(self, CheckOutcome::Warning { .. })
    }
}

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseOutcome {
    pub version: String,
    pub backend: BuildBackend,
    pub artifacts: Vec<String>,
    pub check: CheckOutcome,
    pub staged: bool,
    pub published: bool,
    /// Tag that was created and pushed, if any.
    pub tag: Option<String>,
}

impl ReleaseOutcome {
    /// Production upload was declined.
    pub fn cancelled(&self) -> bool {
        !self.published
    }
}
