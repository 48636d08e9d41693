//! Shared model and interfaces for the pawport membership aggregator.
//!
//! Holds the venue enumeration, the normalized records produced by the
//! scraper, the credential-store interface the hosting service implements,
//! and environment-driven configuration. No I/O beyond env-var reads lives
//! here.

pub mod app_config;
pub mod config;
pub mod memory;
pub mod record;
pub mod store;
pub mod venue;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use memory::MemoryCredentialStore;
pub use record::{DogRecord, MemberRecord, JUMP_HEIGHT_UNMEASURED};
pub use store::{
    CredentialStore, StoreError, VenueCredential, VenueMetadata, VenueRegistration,
};
pub use venue::{UnknownVenue, VenueCode};

use thiserror::Error;

/// Errors raised while loading [`AppConfig`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
