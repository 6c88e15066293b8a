use super::*;

fn raw(json: serde_json::Value) -> RawPiece {
    serde_json::from_value(json).unwrap()
}

#[test]
fn object_type_parse_is_case_insensitive() {
    assert_eq!(ObjectType::parse("Camera"), Some(ObjectType::Camera));
    assert_eq!(ObjectType::parse(" PIP "), Some(ObjectType::Pip));
    assert_eq!(ObjectType::parse("hologram"), None);
    for t in ObjectType::ALL {
        assert_eq!(ObjectType::parse(t.as_str()), Some(t));
    }
}

#[test]
fn camera_requires_name_attribute() {
    let ok = Piece::from_raw(&raw(serde_json::json!({
        "id": "p1", "objectType": "camera", "attributes": { "name": "K1" }
    })))
    .unwrap();
    assert_eq!(
        ok.kind,
        PieceKind::Camera {
            camera: "K1".to_string()
        }
    );

    let err = Piece::from_raw(&raw(serde_json::json!({
        "id": "p2", "objectType": "camera"
    })))
    .unwrap_err();
    assert_eq!(err.to_string(), "Missing camera for camera: p2");
}

#[test]
fn clip_types_require_clip_name() {
    for ty in ["video", "graphic", "overlay"] {
        let err = Piece::from_raw(&raw(serde_json::json!({ "id": "x", "objectType": ty })))
            .unwrap_err();
        assert_eq!(err.to_string(), format!("Missing clip for {ty}: x"));
    }
    let p = Piece::from_raw(&raw(serde_json::json!({
        "id": "v", "objectType": "video", "clipName": "intro.mp4"
    })))
    .unwrap();
    assert_eq!(p.label(), "intro.mp4");
}

#[test]
fn unknown_object_type_names_the_piece() {
    let err = Piece::from_raw(&raw(serde_json::json!({
        "id": "z", "objectType": "hologram", "clipName": "ghost"
    })))
    .unwrap_err();
    assert_eq!(err.to_string(), "Unknown objectType 'hologram' for piece: 'ghost'");
}

#[test]
fn transition_style_falls_back_to_type_attribute() {
    let p = Piece::from_raw(&raw(serde_json::json!({
        "id": "t", "objectType": "transition", "attributes": { "type": "fade" }
    })))
    .unwrap();
    assert_eq!(
        p.kind,
        PieceKind::Transition {
            style: Some("fade".to_string())
        }
    );
}

#[test]
fn split_sources_accepts_numbers_and_strings() {
    let a = Piece::from_raw(&raw(serde_json::json!({
        "id": "s", "objectType": "split", "attributes": { "sources": 3 }
    })))
    .unwrap();
    let b = Piece::from_raw(&raw(serde_json::json!({
        "id": "s", "objectType": "split", "attributes": { "sources": "4" }
    })))
    .unwrap();
    assert_eq!(a.kind, PieceKind::Split { sources: Some(3) });
    assert_eq!(b.kind, PieceKind::Split { sources: Some(4) });
}

#[test]
fn numeric_camera_name_is_accepted() {
    let p = Piece::from_raw(&raw(serde_json::json!({
        "id": "c", "objectType": "camera", "attributes": { "name": 2 }
    })))
    .unwrap();
    assert_eq!(
        p.kind,
        PieceKind::Camera {
            camera: "2".to_string()
        }
    );
}

#[test]
fn ad_lib_position_is_detected() {
    let mut r = raw(serde_json::json!({ "id": "c", "objectType": "script" }));
    r.position = "AdLib".to_string();
    assert!(Piece::from_raw(&r).unwrap().is_ad_lib_position());
}

#[test]
fn part_payload_reads_type_and_float() {
    let part: IngestPart = serde_json::from_value(serde_json::json!({
        "externalId": "e1",
        "payload": { "type": "  ", "float": true }
    }))
    .unwrap();
    let payload = part.payload.as_ref().unwrap();
    assert!(payload.float);
    assert_eq!(payload.declared_type(), None);
    assert_eq!(part.display_name(), "e1");
}
