//! Runtime configuration shared by the scraper and the hosting service.

/// Application configuration, loaded from environment variables by
/// [`crate::config::load_app_config`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Log filter directive for the hosting service's tracing subscriber.
    pub log_level: String,
    /// Per-request timeout for any single venue page fetch.
    pub request_timeout_secs: u64,
    /// Bound on the whole login exchange, form submit through post-login
    /// marker. Expiry is reported as an auth timeout for that venue.
    pub login_wait_secs: u64,
    /// `User-Agent` sent to venue sites.
    pub user_agent: String,
    /// Upper bound on venue adapters running concurrently within one
    /// aggregate call.
    pub max_concurrent_venues: usize,
}
