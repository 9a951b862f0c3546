use citypath::{CityPathApp, LoadError, parse_points};
use citypath_core::GraphConfig;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_data(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_parse_numbers_and_numeric_strings() {
    let file = write_data(
        r#"[
            {"city": "Kuala Lumpur", "lat": 3.139, "lng": 101.6869},
            {"city": "Ipoh", "lat": "4.5975", "lng": " 101.0901 "},
            {"city": "Malacca", "lat": 2.1896, "lng": "102.2501", "admin_name": "Melaka"}
        ]"#,
    );

    let points = parse_points(file.path()).unwrap();

    assert_eq!(points.len(), 3);
    assert_eq!(points[0].name(), "Kuala Lumpur");
    assert_eq!(points[1].lat(), 4.5975);
    assert_eq!(points[1].lng(), 101.0901);
    assert_eq!(points[2].lng(), 102.2501);
}

#[test]
fn test_parse_rejects_missing_field_with_position() {
    let file = write_data(
        r#"[
            {"city": "Ipoh", "lat": 4.5975, "lng": 101.0901},
            {"city": "Kuantan", "lat": 3.8077}
        ]"#,
    );

    match parse_points(file.path()) {
        Err(LoadError::InvalidRecord { position, .. }) => assert_eq!(position, 2),
        other => panic!("expected InvalidRecord, got {other:?}"),
    }
}

#[test]
fn test_parse_rejects_unparsable_coordinate() {
    let file = write_data(r#"[{"city": "Ipoh", "lat": "north", "lng": 101.0}]"#);

    match parse_points(file.path()) {
        Err(LoadError::InvalidRecord { position, reason }) => {
            assert_eq!(position, 1);
            assert!(reason.contains("latitude"));
        }
        other => panic!("expected InvalidRecord, got {other:?}"),
    }
}

#[test]
fn test_parse_rejects_out_of_range_coordinate() {
    let file = write_data(
        r#"[
            {"city": "Ipoh", "lat": 4.5975, "lng": 101.0901},
            {"city": "Nowhere", "lat": 91.0, "lng": 0.0}
        ]"#,
    );

    assert!(matches!(
        parse_points(file.path()),
        Err(LoadError::InvalidRecord { position: 2, .. })
    ));
}

#[test]
fn test_parse_rejects_duplicate_city() {
    let file = write_data(
        r#"[
            {"city": "Ipoh", "lat": 4.5975, "lng": 101.0901},
            {"city": "Kuantan", "lat": 3.8077, "lng": 103.326},
            {"city": "Ipoh ", "lat": 4.6, "lng": 101.1}
        ]"#,
    );

    match parse_points(file.path()) {
        Err(LoadError::InvalidRecord { position, reason }) => {
            assert_eq!(position, 3);
            assert!(reason.contains("duplicate"));
        }
        other => panic!("expected InvalidRecord, got {other:?}"),
    }
}

#[test]
fn test_parse_rejects_non_array() {
    let file = write_data(r#"{"city": "Ipoh"}"#);

    assert!(matches!(parse_points(file.path()), Err(LoadError::Json { .. })));
}

#[test]
fn test_app_reports_missing_file() {
    let result = CityPathApp::new(Some("/definitely/not/here/cities.json".to_string()));

    assert!(matches!(result, Err(LoadError::MissingFile { .. })));
}

#[test]
fn test_app_loads_graph_and_lookup() {
    let file = write_data(
        r#"[
            {"city": "Kuala Lumpur", "lat": 3.139, "lng": 101.6869},
            {"city": "Ipoh", "lat": 4.5975, "lng": 101.0901},
            {"city": "Malacca", "lat": 2.1896, "lng": 102.2501},
            {"city": "Kuantan", "lat": 3.8077, "lng": 103.326}
        ]"#,
    );
    let path = file.path().to_string_lossy().to_string();

    let app = CityPathApp::new(Some(path)).unwrap();
    let (graph, name_lookup) = app.load_data(&GraphConfig::default()).unwrap();

    assert_eq!(graph.node_count(), 4);
    assert_eq!(name_lookup.len(), 4);
    assert!(name_lookup.contains_key("kuala lumpur"));
}

#[test]
fn test_app_surfaces_build_errors() {
    let file = write_data("[]");
    let path = file.path().to_string_lossy().to_string();

    let app = CityPathApp::new(Some(path)).unwrap();

    assert!(app.load_data(&GraphConfig::default()).is_err());
}
