//! Per-reference resolution outcome

use dsc_core::SecretReference;

/// Result of one resolution attempt for one `latest` reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// Pinned to a concrete version
    Resolved(SecretReference),
    /// By-id lookup failed; the id may be a secret name, retry in the folder
    Fallback(SecretReference),
    /// Terminal failure for this reference
    Failed(String),
}

impl ResolutionOutcome {
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, ResolutionOutcome::Fallback(_))
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, ResolutionOutcome::Failed(_))
    }
}
