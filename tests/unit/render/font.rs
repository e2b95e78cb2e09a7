use super::*;

#[test]
fn configured_font_must_exist() {
    let err = locate_font(Some(Path::new("target/no_such_font.ttf"))).unwrap_err();
    assert!(matches!(err, ExplainerError::Validation(_)));
}

#[test]
fn lookup_only_returns_existing_candidates() {
    if let Some(path) = locate_font(None).unwrap() {
        assert!(path.is_file());
        assert!(SYSTEM_FONT_CANDIDATES.iter().any(|c| Path::new(c) == path));
    }
}

#[test]
fn garbage_bytes_register_no_family() {
    let err = TextLayoutEngine::from_bytes(b"not a font".to_vec()).unwrap_err();
    assert!(matches!(err, ExplainerError::Validation(_)));
}

#[test]
fn text_layout_with_local_font_if_present() {
    let Ok(Some(path)) = locate_font(None) else {
        return;
    };
    let mut engine = TextLayoutEngine::from_file(&path).unwrap();
    assert!(!engine.family().is_empty());

    let brush = TextBrushRgba8 {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };
    let short = engine.layout("LLM", 12.0, brush).unwrap();
    let long = engine.layout("LLM Embedding", 12.0, brush).unwrap();
    assert!(short.width() > 0.0);
    assert!(long.width() > short.width());
    assert!(engine.layout("LLM", 0.0, brush).is_err());
}
