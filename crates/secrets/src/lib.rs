//! Secret reference parsing and `latest` version resolution
//!
//! References come from `ENV=ID/VERSION/KEY` lines. Every reference whose
//! version is `latest` is pinned to the secret's current version before the
//! revision is deployed:
//!
//! 1. each `latest` reference is looked up by id, with a bounded fan-out;
//! 2. references whose lookup failed are retried once by *name* against an
//!    index of the whole folder, built from a single paginated scan;
//! 3. outcomes are merged back positionally, and any terminal failure fails
//!    the whole resolution with one aggregated error.

mod aggregate;
mod by_id;
mod folder_scan;
mod lookup;
mod outcome;
mod parser;
mod resolver;

#[cfg(test)]
mod tests;

pub use aggregate::aggregate_outcomes;
pub use by_id::resolve_by_id;
pub use folder_scan::{resolve_fallbacks, FolderSecretIndex};
pub use lookup::SecretLookup;
pub use outcome::ResolutionOutcome;
pub use parser::{parse_secret_line, parse_secret_references};
pub use resolver::{LatestVersionResolver, ResolverConfig};
