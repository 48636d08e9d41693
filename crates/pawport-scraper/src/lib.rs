//! Multi-venue membership extraction.
//!
//! Logs into each third-party venue site a user has configured credentials
//! for, scrapes the member profile and dog roster from rendered HTML, and
//! merges the per-venue results into one deterministic response. Venue
//! knowledge (login flow, page layout, field labels) lives entirely inside
//! [`venues`]; the orchestration in [`aggregate`] never inspects HTML.

pub mod aggregate;
pub mod error;
mod parse;
mod parse_helpers;
mod session;
pub mod venues;

pub use aggregate::{extract_member_info, extract_single_venue, ExtractionResult, ResultSet};
pub use error::ScrapeError;
