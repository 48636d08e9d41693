//! Per-venue scrape sessions.

use std::time::Duration;

use pawport_core::{AppConfig, VenueCode};

use crate::error::ScrapeError;

/// One scrape session against a single venue site.
///
/// Wraps a cookie-holding HTTP client scoped to one adapter invocation.
/// Each invocation builds its own session; cookies are never shared across
/// venues or requests, and dropping the session — on success, failure, or
/// cancellation — discards the cookie jar and closes connections.
pub(crate) struct VenueSession {
    venue: VenueCode,
    client: reqwest::Client,
    login_wait_secs: u64,
}

impl VenueSession {
    pub(crate) fn new(venue: VenueCode, config: &AppConfig) -> Result<Self, ScrapeError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .cookie_store(true)
            .build()
            .map_err(|source| ScrapeError::Http { venue, source })?;
        Ok(Self {
            venue,
            client,
            login_wait_secs: config.login_wait_secs,
        })
    }

    /// Submits the venue's login form and waits for its post-login signal.
    ///
    /// The exchange is: GET `login_url` to prime session cookies, POST
    /// `form` back to it, then GET `landing_url` and require `marker` in
    /// the body. Returns the landing page body so adapters whose data lives
    /// on the landing page need no extra fetch.
    ///
    /// The whole exchange is bounded by the configured login wait; an
    /// expired bound or an unreached marker is [`ScrapeError::AuthTimeout`]
    /// (the venue rejected the login or never navigated to the
    /// authenticated page).
    pub(crate) async fn login(
        &self,
        login_url: &str,
        form: &[(&str, &str)],
        landing_url: &str,
        marker: &str,
    ) -> Result<String, ScrapeError> {
        let venue = self.venue;
        let wait_secs = self.login_wait_secs;

        let attempt = async {
            tracing::debug!(venue = %venue, login_url, "navigating to login page");
            self.client
                .get(login_url)
                .send()
                .await
                .map_err(|source| ScrapeError::Http { venue, source })?;

            let response = self
                .client
                .post(login_url)
                .form(form)
                .send()
                .await
                .map_err(|source| ScrapeError::Http { venue, source })?;
            tracing::debug!(
                venue = %venue,
                status = response.status().as_u16(),
                "login form submitted"
            );

            let landing = self
                .client
                .get(landing_url)
                .send()
                .await
                .map_err(|source| ScrapeError::Http { venue, source })?;
            if !landing.status().is_success() {
                return Err(ScrapeError::AuthTimeout { venue, wait_secs });
            }
            let body = landing
                .text()
                .await
                .map_err(|source| ScrapeError::Http { venue, source })?;
            if body.contains(marker) {
                Ok(body)
            } else {
                Err(ScrapeError::AuthTimeout { venue, wait_secs })
            }
        };

        match tokio::time::timeout(Duration::from_secs(wait_secs), attempt).await {
            Ok(result) => result,
            Err(_) => Err(ScrapeError::AuthTimeout { venue, wait_secs }),
        }
    }

    /// Fetches one authenticated page and returns its body.
    pub(crate) async fn fetch_page(&self, url: &str) -> Result<String, ScrapeError> {
        let venue = self.venue;
        tracing::debug!(venue = %venue, url, "fetching page");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ScrapeError::Http { venue, source })?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::UnexpectedStatus {
                venue,
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        response
            .text()
            .await
            .map_err(|source| ScrapeError::Http { venue, source })
    }
}
