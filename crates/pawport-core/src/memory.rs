//! In-memory [`CredentialStore`] for tests and local development.

use crate::store::{
    CredentialStore, StoreError, VenueCredential, VenueMetadata, VenueRegistration,
};
use crate::venue::VenueCode;

/// A [`CredentialStore`] backed by plain vectors.
///
/// Inserts replace any existing row for the same key, mirroring the
/// upsert semantics a relational backend would have.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    credentials: Vec<VenueCredential>,
    venues: Vec<VenueMetadata>,
}

impl MemoryCredentialStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_venue(&mut self, metadata: VenueMetadata) {
        self.venues.retain(|v| v.venue != metadata.venue);
        self.venues.push(metadata);
    }

    pub fn insert_credential(&mut self, credential: VenueCredential) {
        self.credentials.retain(|c| {
            !(c.user_id == credential.user_id && c.venue == credential.venue)
        });
        self.credentials.push(credential);
    }
}

impl CredentialStore for MemoryCredentialStore {
    async fn registered_venues(
        &self,
        user_id: &str,
    ) -> Result<Vec<VenueRegistration>, StoreError> {
        let mut registrations: Vec<VenueRegistration> = self
            .credentials
            .iter()
            .filter(|c| c.user_id == user_id)
            .map(|c| VenueRegistration {
                venue: c.venue,
                has_credentials: c.is_configured(),
            })
            .collect();
        registrations.sort_by_key(|r| r.venue);
        Ok(registrations)
    }

    async fn credential(
        &self,
        user_id: &str,
        venue: VenueCode,
    ) -> Result<Option<VenueCredential>, StoreError> {
        Ok(self
            .credentials
            .iter()
            .find(|c| c.user_id == user_id && c.venue == venue)
            .cloned())
    }

    async fn venue_metadata(
        &self,
        venue: VenueCode,
    ) -> Result<Option<VenueMetadata>, StoreError> {
        Ok(self.venues.iter().find(|v| v.venue == venue).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential(user: &str, venue: VenueCode, configured: bool) -> VenueCredential {
        VenueCredential {
            user_id: user.to_string(),
            venue,
            venue_login_id: configured.then(|| "login".to_string()),
            venue_password: configured.then(|| "secret".to_string()),
        }
    }

    #[tokio::test]
    async fn lists_registrations_with_credential_flag() {
        let mut store = MemoryCredentialStore::new();
        store.insert_credential(credential("alice", VenueCode::Cpe, true));
        store.insert_credential(credential("alice", VenueCode::Bha, false));
        store.insert_credential(credential("bob", VenueCode::Cpe, true));

        let registrations = store.registered_venues("alice").await.unwrap();
        assert_eq!(
            registrations,
            vec![
                VenueRegistration {
                    venue: VenueCode::Bha,
                    has_credentials: false,
                },
                VenueRegistration {
                    venue: VenueCode::Cpe,
                    has_credentials: true,
                },
            ]
        );
    }

    #[tokio::test]
    async fn missing_rows_are_none_not_errors() {
        let store = MemoryCredentialStore::new();
        assert!(store
            .credential("nobody", VenueCode::Cpe)
            .await
            .unwrap()
            .is_none());
        assert!(store.venue_metadata(VenueCode::Bha).await.unwrap().is_none());
        assert!(store.registered_venues("nobody").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn insert_replaces_existing_row() {
        let mut store = MemoryCredentialStore::new();
        store.insert_credential(credential("alice", VenueCode::Cpe, false));
        store.insert_credential(credential("alice", VenueCode::Cpe, true));

        let row = store
            .credential("alice", VenueCode::Cpe)
            .await
            .unwrap()
            .unwrap();
        assert!(row.is_configured());
        assert_eq!(store.registered_venues("alice").await.unwrap().len(), 1);
    }
}
