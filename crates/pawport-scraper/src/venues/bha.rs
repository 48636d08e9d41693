//! BHA adapter.
//!
//! BHA splits member data across two authenticated pages: the profile page
//! carries the handler block, a separate dogs page carries the roster.
//! Login lives under `/register/login.php` off the venue's base URL.

use pawport_core::{AppConfig, MemberRecord, VenueCode, VenueMetadata};

use crate::error::ScrapeError;
use crate::parse::{parse_dog_table, parse_labeled_block, DogTableLayout};
use crate::parse_helpers::{element_inner_html, inner_text, table_rows};
use crate::session::VenueSession;

const VENUE: VenueCode = VenueCode::Bha;

const LOGIN_PATH: &str = "/register/login.php";
const PROFILE_PATH: &str = "/register/profile.php";
const DOGS_PATH: &str = "/register/mydogs.php";
/// Heading rendered only on the authenticated profile page.
const LOGIN_MARKER: &str = "Member Profile";

const PROFILE_LABELS: [&str; 5] = ["Member #:", "Name:", "Phone:", "Email:", "Address:"];

const DOG_TABLE: DogTableLayout = DogTableLayout {
    member_id: "Reg #",
    call_name: "Call Name",
    breed: "Breed",
    jump_height: "Height",
    date_of_birth: "DOB",
};

pub(super) async fn extract(
    login_id: &str,
    password: &str,
    metadata: &VenueMetadata,
    config: &AppConfig,
) -> Result<MemberRecord, ScrapeError> {
    let session = VenueSession::new(VENUE, config)?;

    let base = metadata.login_url.trim_end_matches('/');
    let profile_body = session
        .login(
            &format!("{base}{LOGIN_PATH}"),
            &[("username", login_id), ("password", password)],
            &format!("{base}{PROFILE_PATH}"),
            LOGIN_MARKER,
        )
        .await?;
    tracing::debug!(venue = %VENUE, "authenticated; parsing profile page");

    let profile_html = element_inner_html(&profile_body, "div", "id", "MemberProfile")
        .ok_or_else(|| parse_error("MemberProfile region not found"))?;
    let [handler_member_id, handler_name, phone, email, address] =
        parse_labeled_block(&inner_text(profile_html), &PROFILE_LABELS)
            .ok_or_else(|| parse_error("profile block did not match expected labels"))?;

    let dogs_body = session.fetch_page(&format!("{base}{DOGS_PATH}")).await?;
    let dog_table_html = element_inner_html(&dogs_body, "table", "id", "DogTable")
        .ok_or_else(|| parse_error("DogTable region not found"))?;
    let dogs = parse_dog_table(&table_rows(dog_table_html), &DOG_TABLE)
        .map_err(|e| parse_error(&e.to_string()))?;

    Ok(MemberRecord {
        venue: VENUE,
        icon: metadata.icon.clone(),
        description: metadata.description.clone(),
        handler_member_id,
        handler_name,
        phone,
        email,
        address,
        dogs,
    })
}

fn parse_error(context: &str) -> ScrapeError {
    ScrapeError::Parse {
        venue: VENUE,
        context: context.to_string(),
    }
}
