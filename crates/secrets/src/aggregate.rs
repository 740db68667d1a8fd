//! Merge phase outcomes back into the full reference list

use crate::outcome::ResolutionOutcome;
use dsc_core::{Error, Result, SecretReference};

/// Rebuild the full list from the outcomes of its `latest` subset.
///
/// `outcomes[i]` belongs to the `i`-th `latest` reference of `references`.
/// Pinned references keep their position, everything else passes through
/// unchanged. Any failure (including a leftover fallback) fails the whole
/// list with every message collected, in input order.
pub fn aggregate_outcomes(
    references: Vec<SecretReference>,
    outcomes: Vec<ResolutionOutcome>,
) -> Result<Vec<SecretReference>> {
    let latest_count = references.iter().filter(|r| r.is_latest()).count();
    if latest_count != outcomes.len() {
        return Err(Error::configuration(format!(
            "expected {latest_count} resolution outcomes, got {}",
            outcomes.len()
        )));
    }

    let mut outcomes = outcomes.into_iter();
    let mut failures = Vec::new();
    let mut resolved = Vec::with_capacity(references.len());

    for reference in references {
        if !reference.is_latest() {
            resolved.push(reference);
            continue;
        }

        match outcomes.next() {
            Some(ResolutionOutcome::Resolved(pinned)) => resolved.push(pinned),
            Some(ResolutionOutcome::Failed(message)) => failures.push(message),
            Some(ResolutionOutcome::Fallback(original)) => {
                failures.push(format!("failed to resolve secret: {}", original.id))
            }
            None => failures.push(format!("failed to resolve secret: {}", reference.id)),
        }
    }

    if failures.is_empty() {
        Ok(resolved)
    } else {
        Err(Error::secret_resolution(failures))
    }
}
