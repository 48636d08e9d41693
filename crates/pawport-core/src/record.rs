//! Normalized records produced by the extraction pipeline.
//!
//! Built fresh per request by the venue adapters, handed to the hosting
//! HTTP layer for serialization, and discarded — nothing here persists or
//! is cached across requests.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::venue::VenueCode;

/// Sentinel jump height meaning the venue reports the dog as not yet
/// measured.
pub const JUMP_HEIGHT_UNMEASURED: i32 = -1;

/// One registered dog as reported by a venue's roster table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DogRecord {
    /// The venue's own identifier for the dog.
    pub venue_member_id: String,
    pub call_name: String,
    pub breed: String,
    /// Inches; [`JUMP_HEIGHT_UNMEASURED`] when the venue has no measurement.
    /// Always non-negative otherwise.
    pub jump_height: i32,
    pub date_of_birth: NaiveDate,
}

/// Normalized per-venue profile and roster for one user.
///
/// One of these per successfully scraped venue. `dogs` may be empty but is
/// never absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    pub venue: VenueCode,
    /// Display icon from the venue metadata, passed through untouched.
    pub icon: String,
    pub description: String,
    pub handler_member_id: String,
    pub handler_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub dogs: Vec<DogRecord>,
}
