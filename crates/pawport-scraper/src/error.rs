use pawport_core::{StoreError, VenueCode};
use thiserror::Error;

/// Errors raised while scraping a venue or assembling an aggregate
/// response.
///
/// Per-venue failures (`Http`, `UnexpectedStatus`, `AuthTimeout`, `Parse`)
/// are recorded against their venue during aggregate calls and never abort
/// sibling venues. `NotRegistered`, `CredentialsNotConfigured`,
/// `VenueUnknown`, and `Store` are request-level conditions.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP error talking to {venue}: {source}")]
    Http {
        venue: VenueCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected HTTP status {status} from {venue} at {url}")]
    UnexpectedStatus {
        venue: VenueCode,
        status: u16,
        url: String,
    },

    #[error("{venue} login did not reach the post-login page within {wait_secs}s")]
    AuthTimeout { venue: VenueCode, wait_secs: u64 },

    #[error("{venue} page did not match the expected layout: {context}")]
    Parse { venue: VenueCode, context: String },

    #[error("user {user_id} is not registered for venue {venue}")]
    NotRegistered { user_id: String, venue: VenueCode },

    #[error("user {user_id} has no stored credentials for venue {venue}")]
    CredentialsNotConfigured { user_id: String, venue: VenueCode },

    #[error("no metadata for venue {venue}; the venues table is incomplete")]
    VenueUnknown { venue: VenueCode },

    #[error("credential store error: {0}")]
    Store(#[from] StoreError),
}

impl ScrapeError {
    /// The venue this failure is attributed to, when it has one.
    #[must_use]
    pub fn venue(&self) -> Option<VenueCode> {
        match self {
            ScrapeError::Http { venue, .. }
            | ScrapeError::UnexpectedStatus { venue, .. }
            | ScrapeError::AuthTimeout { venue, .. }
            | ScrapeError::Parse { venue, .. }
            | ScrapeError::NotRegistered { venue, .. }
            | ScrapeError::CredentialsNotConfigured { venue, .. }
            | ScrapeError::VenueUnknown { venue } => Some(*venue),
            ScrapeError::Store(_) => None,
        }
    }
}
