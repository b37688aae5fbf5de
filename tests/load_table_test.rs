mod common;

use camino::Utf8Path;
use common::{raw_g, SYNTHETIC_TABLE, SYNTHETIC_TABLE_PATH};
use igrf::{
    coefficient_table::{file_source::CoefficientFilePath, CoefficientBuffer},
    igrf::Igrf,
    igrf_errors::IgrfError,
};

/// Apply `edit` to the first data line for which it returns `Some`.
fn edit_first_row(edit: impl Fn(&str) -> Option<String>) -> String {
    let mut done = false;
    SYNTHETIC_TABLE
        .lines()
        .map(|line| {
            if !done && (line.starts_with("g ") || line.starts_with("h ")) {
                if let Some(new_line) = edit(line) {
                    done = true;
                    return new_line;
                }
            }
            line.to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_read_synthetic_table() {
    let buffer = CoefficientBuffer::read_coefficient_file(Utf8Path::new(SYNTHETIC_TABLE_PATH))
        .unwrap();

    assert_eq!(buffer.len(), 19 * 120 + 7 * 195 + 195 + 1);
    assert_eq!(buffer.main_field_epochs(), 7);
    assert_eq!(buffer.latest_epoch_year(), 2025.0);
    assert_eq!(buffer.as_slice()[0], raw_g(1, 0, 0));
    assert_eq!(*buffer.as_slice().last().unwrap(), 0.0);
}

#[test]
fn test_all_sources_agree() {
    let from_file =
        CoefficientBuffer::read_coefficient_file(Utf8Path::new(SYNTHETIC_TABLE_PATH)).unwrap();
    let from_text = CoefficientBuffer::parse(&SYNTHETIC_TABLE).unwrap();
    let from_reader = CoefficientBuffer::load(SYNTHETIC_TABLE.as_bytes()).unwrap();

    assert_eq!(from_file, from_text);
    assert_eq!(from_file, from_reader);
}

#[test]
fn test_resolve_coefficient_file() {
    let path = CoefficientFilePath::resolve(Some(SYNTHETIC_TABLE_PATH)).unwrap();
    assert_eq!(path.as_str(), SYNTHETIC_TABLE_PATH);

    let igrf = Igrf::from_path(Some(SYNTHETIC_TABLE_PATH)).unwrap();
    assert_eq!(igrf.latest_epoch_year(), 2025.0);
}

#[test]
fn test_ragged_table() {
    // drop the SV rate of the first row
    let text = edit_first_row(|line| {
        let mut tokens: Vec<&str> = line.split_whitespace().collect();
        tokens.pop();
        Some(tokens.join(" "))
    });

    assert_eq!(
        CoefficientBuffer::parse(&text),
        Err(IgrfError::MalformedTable(
            "ragged table: rows carry 26 and 27 epoch columns".into()
        ))
    );
    assert!(Igrf::from_text(&text).is_err());
}

#[test]
fn test_unparsable_value() {
    let text = edit_first_row(|line| Some(line.replacen("-994.4", "-994,4", 1)));
    let err = CoefficientBuffer::parse(&text).unwrap_err();
    assert!(matches!(err, IgrfError::MalformedTable(msg) if msg.starts_with("line 5:")));
}

#[test]
fn test_missing_row() {
    // remove g 13 13 (second to last line) and its h partner
    let text: String = SYNTHETIC_TABLE
        .lines()
        .filter(|line| !line.starts_with("g 13 13") && !line.starts_with("h 13 13"))
        .collect::<Vec<_>>()
        .join("\n");

    assert!(matches!(
        CoefficientBuffer::parse(&text),
        Err(IgrfError::MalformedTable(_))
    ));
}

#[test]
fn test_out_of_order_rows() {
    let mut lines: Vec<&str> = SYNTHETIC_TABLE.lines().collect();
    // swap g 1 1 and h 1 1
    lines.swap(5, 6);
    let text = lines.join("\n");

    assert_eq!(
        CoefficientBuffer::parse(&text),
        Err(IgrfError::MalformedTable(
            "line 6: found h 1 1, expected g 1 1".into()
        ))
    );
}

#[test]
fn test_no_rows() {
    let header_only: String = SYNTHETIC_TABLE.lines().take(4).collect::<Vec<_>>().join("\n");
    assert_eq!(
        CoefficientBuffer::parse(&header_only),
        Err(IgrfError::MalformedTable(
            "no g/h coefficient rows found".into()
        ))
    );
}
