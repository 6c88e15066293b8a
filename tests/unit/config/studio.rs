use super::*;

#[test]
fn minimal_json_fills_defaults() {
    let cfg = StudioConfig::from_json_str(r#"{ "sources_cam": "1:1" }"#).unwrap();
    assert_eq!(cfg.name, "studio0");
    assert_eq!(cfg.sources_cam, "1:1");
    assert_eq!(cfg.canvas, Canvas::default());
    assert_eq!(cfg.switcher.default_live_source(), SwitcherInput(5));
}

#[test]
fn zero_canvas_is_rejected() {
    let err = StudioConfig::from_json_str(r#"{ "canvas": { "width": 0, "height": 720 } }"#)
        .unwrap_err();
    assert!(matches!(err, SegmixError::Config(_)));
}

#[test]
fn server_on_unresolved_marker_is_rejected() {
    let cfg = StudioConfig {
        switcher: SwitcherSources {
            clip_server: SwitcherInput::UNRESOLVED,
            graphics_server: SwitcherInput(6),
        },
        ..StudioConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = StudioConfig::from_json_str("{").unwrap_err();
    assert!(matches!(err, SegmixError::Serde(_)));
}

#[test]
fn missing_file_is_reported_with_path() {
    let err = StudioConfig::from_path("does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}
