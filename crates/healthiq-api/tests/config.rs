use healthiq_api::config::parse_catalog;
use healthiq_benchmark::catalog::default_categories;

#[test]
fn bare_array_catalog_is_migrated() {
    let json = r#"[{
        "id": "custom",
        "name": "Custom",
        "metrics": [{
            "metricId": "bed-occupancy",
            "metricName": "Bed Occupancy",
            "targetValue": 85,
            "source": "regional"
        }]
    }]"#;
    let categories = parse_catalog(json).unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].metrics[0].target_value, 85.0);
}

#[test]
fn current_version_catalog_loads() {
    let file = serde_json::json!({
        "catalog_version": 1,
        "categories": default_categories(),
    });
    let categories = parse_catalog(&file.to_string()).unwrap();
    assert_eq!(categories.len(), 3);
    assert_eq!(categories[1].metrics.len(), 3);
}

#[test]
fn unversioned_object_is_migrated() {
    let json = r#"{"categories": []}"#;
    assert!(parse_catalog(json).unwrap().is_empty());
}

#[test]
fn newer_catalog_version_is_rejected() {
    let json = r#"{"catalog_version": 7, "categories": []}"#;
    let err = parse_catalog(json).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn non_json_catalog_is_rejected() {
    assert!(parse_catalog("not json").is_err());
    assert!(parse_catalog("42").is_err());
}

#[test]
fn oversized_catalog_version_is_rejected() {
    for version in ["4294967297", "-1", "\"1\""] {
        let json = format!(r#"{{"catalog_version": {version}, "categories": []}}"#);
        let err = parse_catalog(&json).unwrap_err();
        assert!(err.to_string().contains("is not a valid version number"));
    }
}
