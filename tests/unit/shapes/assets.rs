use super::*;

const TABLE: &str = r#"{
    "heart": {"d": "M12 21 L3 12 A5 5 0 0 1 12 5 A5 5 0 0 1 21 12 Z", "viewBox": [0, 0, 24, 24]},
    "flowchart/decision": {"d": "M50 0 L100 50 L50 100 L0 50 Z", "viewBox": [0, 0, 100, 100]}
}"#;

#[test]
fn table_loads_and_resolves_keys() {
    let table = AssetPathTable::from_json_str(TABLE).unwrap();
    assert_eq!(table.len(), 2);
    assert!(table.path_data("heart").is_some());
    assert!(table.path_data("cloud").is_none());
}

#[test]
fn missing_keys_lists_uncovered_asset_shapes() {
    let table = AssetPathTable::from_json_str(TABLE).unwrap();
    let missing = table.missing_keys();
    assert!(missing.contains(&"cloud"));
    assert!(missing.contains(&"flowchart/process"));
    assert!(!missing.contains(&"heart"));
    assert!(!missing.contains(&"flowchart/decision"));
    assert!(!missing.contains(&"star"));
}

#[test]
fn invalid_path_data_is_rejected() {
    let err = AssetPathTable::from_json_str(r#"{"heart": {"d": "M 1 Q", "viewBox": [0,0,1,1]}}"#)
        .unwrap_err();
    assert!(matches!(err, FramewrightError::Validation(_)));
}

#[test]
fn empty_view_box_is_rejected() {
    let err = AssetPathTable::from_json_str(r#"{"heart": {"d": "M0 0 L1 1", "viewBox": [0,0,0,1]}}"#)
        .unwrap_err();
    assert!(err.to_string().contains("view box"));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = AssetPathTable::from_json_str("[1,2]").unwrap_err();
    assert!(matches!(err, FramewrightError::Serde(_)));
}

#[test]
fn fit_maps_view_box_corners() {
    let path = AssetPath {
        d: "M0 0 L100 100".to_string(),
        view_box: [0.0, 0.0, 100.0, 100.0],
    };
    let fitted = path.fit(50.0, 10.0).unwrap();
    let pts: Vec<_> = fitted
        .elements()
        .iter()
        .filter_map(|el| match el {
            kurbo::PathEl::MoveTo(p) | kurbo::PathEl::LineTo(p) => Some(*p),
            _ => None,
        })
        .collect();
    assert_eq!(pts, vec![kurbo::Point::new(0.0, 0.0), kurbo::Point::new(50.0, 10.0)]);
}

#[test]
fn from_path_reports_io_context() {
    let err = AssetPathTable::from_path(Path::new("definitely/missing/table.json")).unwrap_err();
    assert!(matches!(err, FramewrightError::Other(_)));
}
