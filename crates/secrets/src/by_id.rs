//! First phase: concurrent lookup of `latest` references by secret id

use crate::lookup::SecretLookup;
use crate::outcome::ResolutionOutcome;
use dsc_core::SecretReference;
use futures::stream::{self, StreamExt};

/// Look up every reference by id with at most `max_concurrent` calls in flight.
///
/// Output index `i` always belongs to input index `i`. A failed lookup never
/// cancels its siblings: it becomes [`ResolutionOutcome::Fallback`] so the id
/// can be retried as a name.
pub async fn resolve_by_id(
    lookup: &dyn SecretLookup,
    references: &[SecretReference],
    max_concurrent: usize,
) -> Vec<ResolutionOutcome> {
    stream::iter(references)
        .map(|reference| resolve_one(lookup, reference))
        .buffered(max_concurrent.max(1))
        .collect()
        .await
}

async fn resolve_one(lookup: &dyn SecretLookup, reference: &SecretReference) -> ResolutionOutcome {
    match lookup.get_secret(&reference.id).await {
        Ok(secret) => match secret.current_version_id() {
            Some(version_id) => {
                tracing::debug!(
                    secret_id = %reference.id,
                    env = %reference.environment_variable,
                    version_id = %version_id,
                    "Resolved latest secret version"
                );
                ResolutionOutcome::Resolved(reference.with_version(version_id))
            }
            None => ResolutionOutcome::Failed(format!(
                "secret {} has no current version",
                reference.id
            )),
        },
        Err(e) => {
            // Not-found and transient failures are treated alike: the id may be a name.
            if e.is_not_found() {
                tracing::debug!(
                    secret_id = %reference.id,
                    env = %reference.environment_variable,
                    "No secret with this id, will search the folder by name"
                );
            } else {
                tracing::warn!(
                    secret_id = %reference.id,
                    env = %reference.environment_variable,
                    error = %e,
                    "Lookup by id failed, will search the folder by name"
                );
            }
            ResolutionOutcome::Fallback(reference.clone())
        }
    }
}
