//! Fan-out orchestration and per-venue result accumulation.

use std::collections::BTreeMap;
use std::sync::Mutex;

use futures::stream::{self, StreamExt};
use pawport_core::{
    AppConfig, CredentialStore, MemberRecord, VenueCode, VenueCredential, VenueMetadata,
};

use crate::error::ScrapeError;
use crate::venues;

/// Outcome of one venue's extraction within an aggregate call.
#[derive(Debug)]
pub enum ExtractionResult {
    Success(MemberRecord),
    Failure {
        venue: VenueCode,
        error: ScrapeError,
    },
}

impl ExtractionResult {
    #[must_use]
    pub fn venue(&self) -> VenueCode {
        match self {
            ExtractionResult::Success(record) => record.venue,
            ExtractionResult::Failure { venue, .. } => *venue,
        }
    }

    /// The scraped record, when this venue succeeded.
    #[must_use]
    pub fn into_member_record(self) -> Option<MemberRecord> {
        match self {
            ExtractionResult::Success(record) => Some(record),
            ExtractionResult::Failure { .. } => None,
        }
    }
}

/// Per-request accumulator of venue outcomes.
///
/// Each venue writes exactly once under its own key, so contention is
/// write-disjoint and a plain mutex suffices. `drain` consumes the set
/// after all adapters have joined and returns outcomes in venue-code
/// order, making aggregate responses reproducible.
///
/// An instance never outlives one aggregate call; nothing is shared
/// across requests.
#[derive(Debug, Default)]
pub struct ResultSet {
    results: Mutex<BTreeMap<VenueCode, ExtractionResult>>,
}

impl ResultSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, venue: VenueCode, result: ExtractionResult) {
        self.results
            .lock()
            .expect("result set lock poisoned")
            .insert(venue, result);
    }

    #[must_use]
    pub fn drain(self) -> Vec<ExtractionResult> {
        self.results
            .into_inner()
            .expect("result set lock poisoned")
            .into_values()
            .collect()
    }
}

/// Scrapes every venue the user has configured credentials for.
///
/// Venues registered without stored credentials are skipped — "not yet
/// configured" is not a failure on the aggregate path. Each remaining
/// venue's adapter runs as an independent concurrent task; one venue's
/// failure never aborts its siblings, it is recorded as a
/// [`ExtractionResult::Failure`] entry so callers can tell "failed to
/// fetch" from "not registered". Results come back sorted by venue code.
///
/// Dropping the returned future (e.g. the hosting layer's request timeout)
/// drops all in-flight adapter futures and their sessions.
///
/// # Errors
///
/// - [`ScrapeError::Store`] if the credential store itself fails.
/// - [`ScrapeError::VenueUnknown`] if a registered venue has no metadata
///   row — a configuration error, failed fast rather than skipped.
pub async fn extract_member_info<S: CredentialStore>(
    store: &S,
    config: &AppConfig,
    user_id: &str,
) -> Result<Vec<ExtractionResult>, ScrapeError> {
    let registrations = store.registered_venues(user_id).await?;
    tracing::debug!(user_id, venues = registrations.len(), "aggregate extraction requested");

    let mut jobs: Vec<(VenueCredential, VenueMetadata)> = Vec::new();
    for registration in registrations {
        let venue = registration.venue;
        if !registration.has_credentials {
            tracing::debug!(user_id, venue = %venue, "skipping venue without stored credentials");
            continue;
        }
        let Some(credential) = store.credential(user_id, venue).await? else {
            // Listing and credential row disagree; treat as not configured.
            tracing::warn!(user_id, venue = %venue, "registration listed but credential row missing");
            continue;
        };
        if !credential.is_configured() {
            tracing::debug!(user_id, venue = %venue, "skipping venue without stored credentials");
            continue;
        }
        let metadata = store
            .venue_metadata(venue)
            .await?
            .ok_or(ScrapeError::VenueUnknown { venue })?;
        jobs.push((credential, metadata));
    }

    let results = ResultSet::new();
    let max_concurrent = config.max_concurrent_venues.max(1);
    stream::iter(jobs)
        .for_each_concurrent(max_concurrent, |(credential, metadata)| {
            let results = &results;
            async move {
                let venue = metadata.venue;
                match venues::extract(&credential, &metadata, config).await {
                    Ok(record) => {
                        tracing::debug!(venue = %venue, dogs = record.dogs.len(), "venue extraction succeeded");
                        results.put(venue, ExtractionResult::Success(record));
                    }
                    Err(error) => {
                        tracing::warn!(venue = %venue, error = %error, "venue extraction failed");
                        results.put(venue, ExtractionResult::Failure { venue, error });
                    }
                }
            }
        })
        .await;

    Ok(results.drain())
}

/// Scrapes one venue directly, without the fan-out.
///
/// Unlike the aggregate path, an unconfigured credential row is a
/// reportable error here: the caller asked for this venue specifically.
///
/// # Errors
///
/// - [`ScrapeError::NotRegistered`] if the user has no credential row for
///   the venue.
/// - [`ScrapeError::CredentialsNotConfigured`] if the row exists but has
///   no login id/password.
/// - [`ScrapeError::VenueUnknown`] if the venue has no metadata row.
/// - Any adapter failure, unchanged.
pub async fn extract_single_venue<S: CredentialStore>(
    store: &S,
    config: &AppConfig,
    user_id: &str,
    venue: VenueCode,
) -> Result<MemberRecord, ScrapeError> {
    let Some(credential) = store.credential(user_id, venue).await? else {
        return Err(ScrapeError::NotRegistered {
            user_id: user_id.to_string(),
            venue,
        });
    };
    if !credential.is_configured() {
        return Err(ScrapeError::CredentialsNotConfigured {
            user_id: user_id.to_string(),
            venue,
        });
    }
    let metadata = store
        .venue_metadata(venue)
        .await?
        .ok_or(ScrapeError::VenueUnknown { venue })?;

    venues::extract(&credential, &metadata, config).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(venue: VenueCode) -> MemberRecord {
        MemberRecord {
            venue,
            icon: String::new(),
            description: String::new(),
            handler_member_id: "1".to_string(),
            handler_name: "Jane".to_string(),
            phone: String::new(),
            email: String::new(),
            address: String::new(),
            dogs: vec![],
        }
    }

    #[test]
    fn drain_is_sorted_by_venue_code() {
        let set = ResultSet::new();
        set.put(VenueCode::Cpe, ExtractionResult::Success(record(VenueCode::Cpe)));
        set.put(VenueCode::Bha, ExtractionResult::Success(record(VenueCode::Bha)));

        let drained = set.drain();
        let order: Vec<VenueCode> = drained.iter().map(ExtractionResult::venue).collect();
        assert_eq!(order, vec![VenueCode::Bha, VenueCode::Cpe]);
    }

    #[test]
    fn put_is_keyed_by_venue() {
        let set = ResultSet::new();
        set.put(
            VenueCode::Cpe,
            ExtractionResult::Failure {
                venue: VenueCode::Cpe,
                error: ScrapeError::VenueUnknown {
                    venue: VenueCode::Cpe,
                },
            },
        );
        set.put(VenueCode::Cpe, ExtractionResult::Success(record(VenueCode::Cpe)));

        let drained = set.drain();
        assert_eq!(drained.len(), 1);
        assert!(matches!(drained[0], ExtractionResult::Success(_)));
    }

    #[test]
    fn into_member_record_discards_failures() {
        let success = ExtractionResult::Success(record(VenueCode::Bha));
        assert!(success.into_member_record().is_some());

        let failure = ExtractionResult::Failure {
            venue: VenueCode::Bha,
            error: ScrapeError::VenueUnknown {
                venue: VenueCode::Bha,
            },
        };
        assert!(failure.into_member_record().is_none());
    }
}
