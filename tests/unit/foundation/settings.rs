use super::*;

#[test]
fn defaults_are_valid() {
    let s = ExplainerSettings::default();
    s.validate().unwrap();
    assert_eq!(s.typewriter_interval_ms, 50);
}

#[test]
fn partial_json_keeps_defaults() {
    let s = ExplainerSettings::from_json(r#"{ "typewriter_interval_ms": 20 }"#).unwrap();
    assert_eq!(s.typewriter_interval_ms, 20);
    assert_eq!(s.canvas, ExplainerSettings::default().canvas);
}

#[test]
fn zero_interval_and_unknown_fields_are_rejected() {
    let err = ExplainerSettings::from_json(r#"{ "typewriter_interval_ms": 0 }"#).unwrap_err();
    assert!(matches!(err, ExplainerError::Validation(_)));

    let err = ExplainerSettings::from_json(r#"{ "speed": 2 }"#).unwrap_err();
    assert!(matches!(err, ExplainerError::Serde(_)));
}

#[test]
fn missing_file_yields_defaults() {
    let path = std::path::PathBuf::from("target").join("no_such_settings.json");
    let s = ExplainerSettings::load(&path).unwrap();
    assert_eq!(s, ExplainerSettings::default());
}

#[test]
fn font_path_is_optional() {
    assert_eq!(ExplainerSettings::default().font_path, None);
    let s = ExplainerSettings::from_json(r#"{ "font_path": "fonts/NotoSansSC.ttf" }"#).unwrap();
    assert_eq!(s.font_path, Some(PathBuf::from("fonts/NotoSansSC.ttf")));
}
