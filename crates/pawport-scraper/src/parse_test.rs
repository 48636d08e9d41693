use super::*;

// ---------------------------------------------------------------------------
// parse_labeled_block
// ---------------------------------------------------------------------------

const CPE_ADDRESS_LABELS: [&str; 4] = ["Member ID:", "Primary:", "Secondary:", "Address:"];

#[test]
fn labeled_block_extracts_fields_in_order() {
    let block = "Member ID:40221\nPrimary:Jane Handler\nSecondary:\nAddress:\n12 Kennel Row\nDogtown, MI 48000";
    let [member_id, primary, secondary, address] =
        parse_labeled_block(block, &CPE_ADDRESS_LABELS).unwrap();
    assert_eq!(member_id, "40221");
    assert_eq!(primary, "Jane Handler");
    assert_eq!(secondary, "");
    assert_eq!(address, "12 Kennel Row\nDogtown, MI 48000");
}

#[test]
fn labeled_block_missing_field_value_is_empty_string() {
    let block = "Member ID:\nPrimary:Jane\nSecondary:Jim\nAddress:\n1 Way";
    let [member_id, ..] = parse_labeled_block(block, &CPE_ADDRESS_LABELS).unwrap();
    assert_eq!(member_id, "");
}

#[test]
fn labeled_block_missing_terminal_anchor_fails() {
    // No "Address:" anchor at all: the region is not the expected block,
    // so the parse must fail rather than return a partial record.
    let block = "Member ID:40221\nPrimary:Jane\nSecondary:";
    assert!(parse_labeled_block(block, &CPE_ADDRESS_LABELS).is_none());
}

#[test]
fn labeled_block_out_of_order_anchors_fail() {
    let block = "Primary:Jane\nMember ID:40221\nSecondary:\nAddress:\n1 Way";
    assert!(parse_labeled_block(block, &CPE_ADDRESS_LABELS).is_none());
}

#[test]
fn labeled_block_is_idempotent() {
    let block = "Member ID:40221\nPrimary:Jane\nSecondary:\nAddress:\n1 Way";
    let first = parse_labeled_block(block, &CPE_ADDRESS_LABELS).unwrap();
    let second = parse_labeled_block(block, &CPE_ADDRESS_LABELS).unwrap();
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// parse_jump_height
// ---------------------------------------------------------------------------

#[test]
fn jump_height_parses_plain_integer() {
    assert_eq!(parse_jump_height("24"), 24);
    assert_eq!(parse_jump_height(" 16 "), 16);
    assert_eq!(parse_jump_height("0"), 0);
}

#[test]
fn jump_height_needs_measurement_is_sentinel() {
    assert_eq!(parse_jump_height("Needs Measurement"), JUMP_HEIGHT_UNMEASURED);
}

#[test]
fn jump_height_non_numeric_coerces_to_sentinel() {
    assert_eq!(parse_jump_height(""), JUMP_HEIGHT_UNMEASURED);
    assert_eq!(parse_jump_height("tall"), JUMP_HEIGHT_UNMEASURED);
    assert_eq!(parse_jump_height("20in"), JUMP_HEIGHT_UNMEASURED);
    assert_eq!(parse_jump_height("-5"), JUMP_HEIGHT_UNMEASURED);
}

// ---------------------------------------------------------------------------
// parse_dog_table
// ---------------------------------------------------------------------------

const LAYOUT: DogTableLayout = DogTableLayout {
    member_id: "Dog ID",
    call_name: "Call Name",
    breed: "Breed",
    jump_height: "Jump Height",
    date_of_birth: "Date of Birth",
};

fn rows(raw: &[&[&str]]) -> Vec<Vec<String>> {
    raw.iter()
        .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
        .collect()
}

#[test]
fn dog_table_maps_columns_by_header_label() {
    let table = rows(&[
        &["Dog ID", "Call Name", "Breed", "Jump Height", "Date of Birth"],
        &["40221-01", "Biscuit", "Border Collie", "20", "04/02/2019"],
    ]);
    let dogs = parse_dog_table(&table, &LAYOUT).unwrap();
    assert_eq!(dogs.len(), 1);
    assert_eq!(dogs[0].venue_member_id, "40221-01");
    assert_eq!(dogs[0].call_name, "Biscuit");
    assert_eq!(dogs[0].jump_height, 20);
    assert_eq!(
        dogs[0].date_of_birth,
        chrono::NaiveDate::from_ymd_opt(2019, 4, 2).unwrap()
    );
}

#[test]
fn dog_table_is_column_order_independent() {
    // Same data, shuffled columns plus an inserted one the layout ignores.
    let table = rows(&[
        &["Breed", "Date of Birth", "Titles", "Dog ID", "Jump Height", "Call Name"],
        &["Border Collie", "04/02/2019", "CL3", "40221-01", "20", "Biscuit"],
    ]);
    let dogs = parse_dog_table(&table, &LAYOUT).unwrap();
    assert_eq!(dogs.len(), 1);
    assert_eq!(dogs[0].venue_member_id, "40221-01");
    assert_eq!(dogs[0].call_name, "Biscuit");
    assert_eq!(dogs[0].breed, "Border Collie");
    assert_eq!(dogs[0].jump_height, 20);
}

#[test]
fn dog_table_header_labels_match_case_insensitively() {
    let table = rows(&[
        &["DOG ID", "call name", "Breed", "jump height", "date of birth"],
        &["1", "Rex", "Mix", "12", "01/01/2020"],
    ]);
    assert_eq!(parse_dog_table(&table, &LAYOUT).unwrap().len(), 1);
}

#[test]
fn dog_table_missing_column_is_an_error() {
    let table = rows(&[
        &["Dog ID", "Call Name", "Breed", "Date of Birth"],
        &["1", "Rex", "Mix", "01/01/2020"],
    ]);
    let err = parse_dog_table(&table, &LAYOUT).unwrap_err();
    assert!(
        matches!(err, TableError::MissingColumn("Jump Height")),
        "got: {err:?}"
    );
}

#[test]
fn dog_table_short_rows_are_skipped() {
    let table = rows(&[
        &["Dog ID", "Call Name", "Breed", "Jump Height", "Date of Birth"],
        &["No active dogs"],
        &["1", "Rex", "Mix", "12", "01/01/2020"],
    ]);
    assert_eq!(parse_dog_table(&table, &LAYOUT).unwrap().len(), 1);
}

#[test]
fn dog_table_bad_date_fails_the_table() {
    let table = rows(&[
        &["Dog ID", "Call Name", "Breed", "Jump Height", "Date of Birth"],
        &["1", "Rex", "Mix", "12", "April 2nd"],
    ]);
    let err = parse_dog_table(&table, &LAYOUT).unwrap_err();
    assert!(matches!(err, TableError::BadDate { row: 1, .. }), "got: {err:?}");
}

#[test]
fn dog_table_empty_input_is_an_error() {
    assert!(matches!(
        parse_dog_table(&[], &LAYOUT).unwrap_err(),
        TableError::Empty
    ));
}

#[test]
fn dog_table_header_only_yields_no_dogs() {
    let table = rows(&[&[
        "Dog ID",
        "Call Name",
        "Breed",
        "Jump Height",
        "Date of Birth",
    ]]);
    assert!(parse_dog_table(&table, &LAYOUT).unwrap().is_empty());
}

#[test]
fn needs_measurement_row_coerces_within_table() {
    let table = rows(&[
        &["Dog ID", "Call Name", "Breed", "Jump Height", "Date of Birth"],
        &["1", "Rex", "Mix", "Needs Measurement", "01/01/2020"],
        &["2", "Fly", "Kelpie", "16", "06/15/2021"],
    ]);
    let dogs = parse_dog_table(&table, &LAYOUT).unwrap();
    assert_eq!(dogs[0].jump_height, JUMP_HEIGHT_UNMEASURED);
    assert_eq!(dogs[1].jump_height, 16);
}

// ---------------------------------------------------------------------------
// parse_dog_dob
// ---------------------------------------------------------------------------

#[test]
fn dob_requires_month_day_year() {
    assert!(parse_dog_dob("04/02/2019").is_some());
    assert!(parse_dog_dob("2019-04-02").is_none());
    assert!(parse_dog_dob("13/40/2019").is_none());
}
