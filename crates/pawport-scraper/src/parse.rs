//! Field parsers: raw scraped text to typed record fields.
//!
//! Everything here is pure and I/O-free so each venue's parsing rules can
//! be exercised against captured fixture text without a live session.

use chrono::NaiveDate;
use pawport_core::{DogRecord, JUMP_HEIGHT_UNMEASURED};
use regex::Regex;
use thiserror::Error;

/// Extracts `label value` fields from a free-text block.
///
/// `labels` is the ordered list of anchors the venue renders, e.g.
/// `["Member ID:", "Primary:", "Secondary:", "Address:"]`. Each field's
/// value runs from the end of its label to the start of the next label;
/// the last field takes the rest of the block (addresses span lines).
///
/// A label whose value is absent yields an empty string — field absence
/// alone is not fatal. Returns `None` only when the anchors do not all
/// appear in order, i.e. the block as a whole is not the expected region;
/// adapters map that to a parse failure rather than emitting a partially
/// populated record.
pub(crate) fn parse_labeled_block<const N: usize>(
    block: &str,
    labels: &[&str; N],
) -> Option<[String; N]> {
    let mut pattern = String::from("(?s)");
    for (i, label) in labels.iter().enumerate() {
        pattern.push_str(&regex::escape(label));
        if i + 1 < labels.len() {
            pattern.push_str(r"(.*?)");
        } else {
            pattern.push_str(r"(.*)");
        }
    }
    let re = Regex::new(&pattern).expect("valid regex");
    let caps = re.captures(block)?;

    Some(std::array::from_fn(|i| {
        caps.get(i + 1)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default()
    }))
}

/// Header-label to dog-field mapping for one venue's roster table.
///
/// Columns are resolved by header label, not position, so a venue
/// reordering or inserting columns does not break the mapping.
pub(crate) struct DogTableLayout {
    pub member_id: &'static str,
    pub call_name: &'static str,
    pub breed: &'static str,
    pub jump_height: &'static str,
    pub date_of_birth: &'static str,
}

/// A roster table that does not match its declared layout.
#[derive(Debug, Error)]
pub(crate) enum TableError {
    #[error("table has no header row")]
    Empty,

    #[error("header row is missing column {0:?}")]
    MissingColumn(&'static str),

    #[error("row {row} column {column:?} has unparseable date {value:?}")]
    BadDate {
        row: usize,
        column: &'static str,
        value: String,
    },
}

/// Builds one [`DogRecord`] per data row of a roster table.
///
/// The first row is the header; remaining rows are data. Rows with fewer
/// cells than the highest mapped column are skipped as spacer rows. A
/// malformed date fails the whole table — silently guessing at dates would
/// mask venue layout drift.
pub(crate) fn parse_dog_table(
    rows: &[Vec<String>],
    layout: &DogTableLayout,
) -> Result<Vec<DogRecord>, TableError> {
    let (header, data) = rows.split_first().ok_or(TableError::Empty)?;

    let column = |label: &'static str| -> Result<usize, TableError> {
        header
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(label))
            .ok_or(TableError::MissingColumn(label))
    };

    let member_id = column(layout.member_id)?;
    let call_name = column(layout.call_name)?;
    let breed = column(layout.breed)?;
    let jump_height = column(layout.jump_height)?;
    let date_of_birth = column(layout.date_of_birth)?;
    let width = [member_id, call_name, breed, jump_height, date_of_birth]
        .into_iter()
        .max()
        .unwrap_or(0);

    let mut dogs = Vec::with_capacity(data.len());
    for (i, row) in data.iter().enumerate() {
        if row.len() <= width {
            continue;
        }
        let dob_raw = row[date_of_birth].trim();
        let dob = parse_dog_dob(dob_raw).ok_or_else(|| TableError::BadDate {
            row: i + 1,
            column: layout.date_of_birth,
            value: dob_raw.to_string(),
        })?;
        dogs.push(DogRecord {
            venue_member_id: row[member_id].trim().to_string(),
            call_name: row[call_name].trim().to_string(),
            breed: row[breed].trim().to_string(),
            jump_height: parse_jump_height(&row[jump_height]),
            date_of_birth: dob,
        });
    }
    Ok(dogs)
}

/// Coerces a jump-height cell to inches.
///
/// Venues render unmeasured dogs as `"Needs Measurement"`; that, an empty
/// cell, or anything else non-numeric coerces to
/// [`JUMP_HEIGHT_UNMEASURED`] rather than failing — height is advisory,
/// unlike dates.
pub(crate) fn parse_jump_height(cell: &str) -> i32 {
    match cell.trim().parse::<i32>() {
        Ok(height) if height >= 0 => height,
        _ => JUMP_HEIGHT_UNMEASURED,
    }
}

/// Parses a venue date cell in the fixed `month/day/year` format.
pub(crate) fn parse_dog_dob(cell: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(cell.trim(), "%m/%d/%Y").ok()
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
