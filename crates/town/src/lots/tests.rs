use super::*;
use crate::grid::{GridCoordinate, WorldLayout};

const EPS: f32 = 1e-2;

fn layout() -> WorldLayout {
    WorldLayout::new(1200.0)
}

#[test]
fn test_single_house_lot() {
    let records = parse_lots(r#"{"(1, 1)": ["House", "None", "vacant"]}"#, &layout()).unwrap();
    assert_eq!(records.len(), 1);
    let lot = &records[0];
    assert_eq!(lot.kind, LotKind::House);
    assert!((lot.position.x - 46.15).abs() < EPS, "x = {}", lot.position.x);
    assert!((lot.position.y - 46.15).abs() < EPS, "y = {}", lot.position.y);
    assert_eq!(lot.primary_label.as_deref(), Some("None"));
    assert_eq!(lot.secondary_label.as_deref(), Some("vacant"));
    assert!(lot.anchor.is_default());
}

#[test]
fn test_kind_tokens() {
    let json = r#"{
        "(1, 1)": ["House", "None", "a"],
        "(2, 1)": ["NoneType", "None", "b"],
        "(3, 1)": ["Bakery", "Bakery", "c"]
    }"#;
    let records = parse_lots(json, &layout()).unwrap();
    let kinds: Vec<LotKind> = records.iter().map(|r| r.kind).collect();
    assert_eq!(kinds, vec![LotKind::House, LotKind::Empty, LotKind::Business]);
}

#[test]
fn test_blank_kind_falls_back_to_business() {
    assert!(matches!(
        LotKind::classify("  "),
        Err(crate::error::LayoutError::UnknownBuildingKind(_))
    ));
    assert_eq!(LotKind::from_token(""), LotKind::Business);
}

#[test]
fn test_insertion_order_is_preserved() {
    let json = r#"{
        "(5, 5)": ["House", "None", "first"],
        "(1, 1)": ["House", "None", "second"],
        "(3, 2)": ["House", "None", "third"]
    }"#;
    let records = parse_lots(json, &layout()).unwrap();
    let labels: Vec<&str> = records
        .iter()
        .filter_map(|r| r.secondary_label.as_deref())
        .collect();
    assert_eq!(labels, vec!["first", "second", "third"]);
}

#[test]
fn test_quarter_positions_get_anchor_adjustment() {
    let json = r#"{
        "(2.25, 3)": ["House", "None", "a"],
        "(2.75, 3.75)": ["House", "None", "b"]
    }"#;
    let records = parse_lots(json, &layout()).unwrap();
    assert_eq!(records[0].anchor.x, -0.1);
    assert_eq!(records[0].anchor.y, 0.0);
    assert_eq!(records[1].anchor.x, 0.3);
    assert_eq!(records[1].anchor.y, 0.3);
}

#[test]
fn test_decode_key_variants() {
    assert_eq!(
        decode_coordinate_key("(1, 2)").unwrap(),
        GridCoordinate::new(1.0, 2.0)
    );
    assert_eq!(
        decode_coordinate_key("\"(3.25, 4)\"").unwrap(),
        GridCoordinate::new(3.25, 4.0)
    );
    assert_eq!(
        decode_coordinate_key("(7,8)").unwrap(),
        GridCoordinate::new(7.0, 8.0)
    );
}

#[test]
fn test_decode_key_rejects_malformed() {
    for key in ["(1)", "(1, 2, 3)", "(a, b)", "", "()", "(nan, 1)"] {
        let err = decode_coordinate_key(key).unwrap_err();
        assert!(
            matches!(err, crate::error::LayoutError::MalformedCoordinateKey(_)),
            "{key:?} gave {err:?}"
        );
    }
}

#[test]
fn test_malformed_key_rejects_whole_document() {
    let json = r#"{
        "(1, 1)": ["House", "None", "ok"],
        "(oops)": ["House", "None", "bad"]
    }"#;
    assert!(parse_lots(json, &layout()).is_err());
}

#[test]
fn test_malformed_value_is_reported() {
    let json = r#"{"(1, 1)": ["House", "None"]}"#;
    let err = parse_lots(json, &layout()).unwrap_err();
    assert!(
        matches!(err, crate::error::LayoutError::MalformedLotValue { ref key, .. } if key == "(1, 1)"),
        "got {err:?}"
    );
}

#[test]
fn test_null_labels_are_accepted() {
    let json = r#"{"(1, 1)": ["House", null, "fallback"]}"#;
    let records = parse_lots(json, &layout()).unwrap();
    assert_eq!(records[0].primary_label, None);
    assert_eq!(records[0].designation(), Some("fallback"));
}

#[test]
fn test_non_object_document_is_rejected() {
    let err = parse_lots(r#"["(1, 1)"]"#, &layout()).unwrap_err();
    assert!(matches!(err, crate::error::LayoutError::Json(_)));
}

#[test]
fn test_designation_prefers_primary() {
    let lot = LotRecord::new(
        &layout(),
        GridCoordinate::new(1.0, 1.0),
        LotKind::Business,
        Some("Residential".to_string()),
        Some("ignored".to_string()),
    );
    assert_eq!(lot.designation(), Some("Residential"));

    let lot = LotRecord::new(
        &layout(),
        GridCoordinate::new(1.0, 1.0),
        LotKind::House,
        Some("None".to_string()),
        Some("The Smiths".to_string()),
    );
    assert_eq!(lot.designation(), Some("The Smiths"));
}

#[test]
fn test_placement_top_left_applies_anchor() {
    let lot = LotRecord::new(
        &layout(),
        GridCoordinate::new(2.25, 2.75),
        LotKind::House,
        None,
        None,
    );
    let placement = lot.placement(&layout());
    let size = 1200.0 / 26.0;
    assert!((placement.size - size).abs() < EPS);
    let tl = placement.top_left();
    assert!((tl.x - (lot.position.x + 0.1 * size)).abs() < EPS);
    assert!((tl.y - (lot.position.y - 0.3 * size)).abs() < EPS);
}
