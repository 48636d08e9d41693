//! CPE adapter.
//!
//! CPE puts everything on the member-records landing page reached straight
//! after login: an address block and a contact block inside
//! `#MemberInformation`, and the active-dog roster in `#DogList`.

use pawport_core::{AppConfig, MemberRecord, VenueCode, VenueMetadata};

use crate::error::ScrapeError;
use crate::parse::{parse_dog_table, parse_labeled_block, DogTableLayout};
use crate::parse_helpers::{element_inner_html, inner_text, table_rows};
use crate::session::VenueSession;

const VENUE: VenueCode = VenueCode::Cpe;

/// Post-login landing, relative to the venue's login URL.
const RECORDS_PATH: &str = "/Member/Records?isViewingActiveDogs=True";
/// Only present once authenticated; the login page never renders it.
const LOGIN_MARKER: &str = "MemberInformation";

const ADDRESS_LABELS: [&str; 4] = ["Member ID:", "Primary:", "Secondary:", "Address:"];
const CONTACT_LABELS: [&str; 4] = ["Dues Paid Through:", "Phone #1:", "Phone #2:", "Email:"];

const DOG_TABLE: DogTableLayout = DogTableLayout {
    member_id: "Dog ID",
    call_name: "Call Name",
    breed: "Breed",
    jump_height: "Jump Height",
    date_of_birth: "Date of Birth",
};

pub(super) async fn extract(
    login_id: &str,
    password: &str,
    metadata: &VenueMetadata,
    config: &AppConfig,
) -> Result<MemberRecord, ScrapeError> {
    let session = VenueSession::new(VENUE, config)?;

    let base = metadata.login_url.trim_end_matches('/');
    let records_url = format!("{base}{RECORDS_PATH}");
    let body = session
        .login(
            &metadata.login_url,
            &[
                ("MemberIdOrEmailInput", login_id),
                ("PasswordInput", password),
            ],
            &records_url,
            LOGIN_MARKER,
        )
        .await?;
    tracing::debug!(venue = %VENUE, "authenticated; parsing member records page");

    let member_info = element_inner_html(&body, "div", "id", "MemberInformation")
        .ok_or_else(|| parse_error("MemberInformation region not found"))?;

    let address_html = element_inner_html(member_info, "div", "class", "address")
        .ok_or_else(|| parse_error("address block not found"))?;
    let [handler_member_id, handler_name, _secondary, address] =
        parse_labeled_block(&inner_text(address_html), &ADDRESS_LABELS)
            .ok_or_else(|| parse_error("address block did not match expected labels"))?;

    let contact_html = element_inner_html(member_info, "div", "class", "contact-information")
        .ok_or_else(|| parse_error("contact-information block not found"))?;
    let [_dues_paid_through, phone, _phone2, email] =
        parse_labeled_block(&inner_text(contact_html), &CONTACT_LABELS)
            .ok_or_else(|| parse_error("contact block did not match expected labels"))?;

    let dog_list = element_inner_html(&body, "div", "id", "DogList")
        .ok_or_else(|| parse_error("DogList region not found"))?;
    let dogs = parse_dog_table(&table_rows(dog_list), &DOG_TABLE)
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
