use super::*;

fn lead(name: &str, rating: Option<f64>) -> LeadRecord {
    LeadRecord {
        name: name.to_string(),
        address: "1 Main St".to_string(),
        phone: "555-0100".to_string(),
        website: "https://example.com".to_string(),
        email: "a@example.com;b@example.com".to_string(),
        rating,
    }
}

#[test]
fn writes_header_and_rows_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leads.csv");

    let leads = vec![lead("Zeta Bakery", Some(4.5)), lead("Alpha Cafe", Some(5.0))];
    let written = write_csv(&leads, &path).unwrap();
    assert_eq!(written, path);

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "name,address,phone,website,email,rating\n\
         Zeta Bakery,1 Main St,555-0100,https://example.com,a@example.com;b@example.com,4.5\n\
         Alpha Cafe,1 Main St,555-0100,https://example.com,a@example.com;b@example.com,5\n"
    );
}

#[test]
fn absent_rating_renders_as_empty_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leads.csv");

    write_csv(&[lead("Unrated", None)], &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let row = content.lines().nth(1).unwrap();
    assert!(row.ends_with(','), "rating field should be empty, got: {row}");
}

#[test]
fn empty_collection_still_writes_the_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leads.csv");

    write_csv(&[], &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "name,address,phone,website,email,rating\n");
}

#[test]
fn fields_with_commas_are_quoted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leads.csv");

    let mut record = lead("Comma, Inc.", Some(3.0));
    record.address = "5 High St, Springfield".to_string();
    write_csv(&[record], &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"Comma, Inc.\""));
    assert!(content.contains("\"5 High St, Springfield\""));
}
