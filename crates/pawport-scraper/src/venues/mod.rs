//! Venue adapters.
//!
//! One module per venue. Each adapter owns its venue's login flow, page
//! layout knowledge, and field labels, so a third-party site changing its
//! markup breaks exactly one module. Dispatch is a closed match on
//! [`VenueCode`]; adding a venue means adding a module and an arm here.

mod bha;
mod cpe;

use pawport_core::{AppConfig, MemberRecord, VenueCredential, VenueMetadata, VenueCode};

use crate::error::ScrapeError;

/// Runs the adapter for `metadata.venue` and returns the scraped record.
///
/// The adapter drives one scoped session: navigate to the venue's login
/// page, authenticate with the credential, visit whatever pages hold the
/// profile and roster, and assemble a [`MemberRecord`]. The session is
/// torn down on every exit path.
///
/// # Errors
///
/// - [`ScrapeError::CredentialsNotConfigured`] if the credential row has
///   no login id/password.
/// - [`ScrapeError::AuthTimeout`] if the venue's post-login signal is
///   never observed within the configured bound.
/// - [`ScrapeError::Parse`] if an expected page region is absent or
///   malformed; no partially populated record is ever returned.
/// - [`ScrapeError::Http`] / [`ScrapeError::UnexpectedStatus`] on
///   transport failures.
pub async fn extract(
    credential: &VenueCredential,
    metadata: &VenueMetadata,
    config: &AppConfig,
) -> Result<MemberRecord, ScrapeError> {
    let (login_id, password) =
        credential
            .login_pair()
            .ok_or_else(|| ScrapeError::CredentialsNotConfigured {
                user_id: credential.user_id.clone(),
                venue: metadata.venue,
            })?;

    match metadata.venue {
        VenueCode::Bha => bha::extract(login_id, password, metadata, config).await,
        VenueCode::Cpe => cpe::extract(login_id, password, metadata, config).await,
    }
}
