use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SegmixError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(SegmixError::config("x").to_string().contains("config error:"));
    assert!(
        SegmixError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(
        SegmixError::UnsupportedSplitCount(5)
            .to_string()
            .contains("unsupported split count 5")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SegmixError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let err: SegmixError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, SegmixError::Serde(_)));
}
