//! The closed set of supported venues.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A supported third-party venue.
///
/// Adding a venue means adding a variant here plus one adapter module in
/// `pawport-scraper`; dispatch is a closed match, never string-keyed.
///
/// Variants are declared alphabetically so the derived `Ord` matches
/// lexical venue-code order, which is the order aggregate responses are
/// returned in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum VenueCode {
    /// Barn Hunt Association.
    #[serde(rename = "BHA")]
    Bha,
    /// Canine Performance Events.
    #[serde(rename = "CPE")]
    Cpe,
}

impl VenueCode {
    /// Every supported venue, in venue-code order.
    pub const ALL: [VenueCode; 2] = [VenueCode::Bha, VenueCode::Cpe];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            VenueCode::Bha => "BHA",
            VenueCode::Cpe => "CPE",
        }
    }
}

impl std::fmt::Display for VenueCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A venue code string with no matching [`VenueCode`] variant.
///
/// This is the boundary error for caller-supplied codes; inside the
/// pipeline venues are always the enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown venue code: {0}")]
pub struct UnknownVenue(pub String);

impl std::str::FromStr for VenueCode {
    type Err = UnknownVenue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BHA" => Ok(VenueCode::Bha),
            "CPE" => Ok(VenueCode::Cpe),
            _ => Err(UnknownVenue(s.to_string())),
        }
    }
}
