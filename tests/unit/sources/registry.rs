use super::*;
use crate::foundation::notes::NoteCollector;

fn studio(cam: &str, rm: &str) -> StudioConfig {
    StudioConfig {
        sources_cam: cam.to_string(),
        sources_rm: rm.to_string(),
        ..StudioConfig::default()
    }
}

#[test]
fn parse_map_reads_numeric_pairs() {
    let notes = NoteCollector::new();
    let map = parse_map_str(Some(&notes), " 1:10,2:11,", false);
    assert_eq!(
        map,
        vec![
            MapEntry {
                id: 1,
                value: MapValue::Number(10)
            },
            MapEntry {
                id: 2,
                value: MapValue::Number(11)
            },
        ]
    );
    assert!(notes.is_empty());
}

#[test]
fn bad_chunks_are_reported_and_skipped() {
    let notes = NoteCollector::new();
    let map = parse_map_str(Some(&notes), "1:1,x:2,3:y,4:5:6,5:5", false);
    assert_eq!(map.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 5]);
    assert_eq!(
        notes.notes(),
        vec![
            "Invalid input map chunk: x:2",
            "Invalid input map chunk: 3:y",
            "Invalid input map chunk: 4:5:6",
        ]
    );
}

#[test]
fn string_values_only_when_allowed() {
    let map = parse_map_str(None, "1:ptz-a,2:", true);
    assert_eq!(
        map,
        vec![MapEntry {
            id: 1,
            value: MapValue::Text("ptz-a".to_string())
        }]
    );
    assert!(parse_map_str(None, "1:ptz-a", false).is_empty());
}

#[test]
fn leading_int_parsing_ignores_trailing_text() {
    assert_eq!(parse_leading_int("7a"), Some(7));
    assert_eq!(parse_leading_int("  -3"), Some(-3));
    assert_eq!(parse_leading_int("a7"), None);
    assert_eq!(parse_leading_int(""), None);
}

#[test]
fn camera_and_remote_id_spaces_are_independent() {
    let notes = NoteCollector::new();
    let reg = SourceRegistry::from_config(&notes, &studio("1:1,2:2", "1:11"));
    assert_eq!(reg.len(), 3);
    assert_eq!(reg.find(SourceKind::Camera, 1).unwrap().port, SwitcherInput(1));
    assert_eq!(reg.find(SourceKind::Remote, 1).unwrap().port, SwitcherInput(11));
    assert!(reg.find(SourceKind::Remote, 2).is_none());
    assert!(notes.is_empty());
}

#[test]
fn duplicate_ids_keep_the_first_entry() {
    let notes = NoteCollector::new();
    let reg = SourceRegistry::from_config(&notes, &studio("1:1,1:9", ""));
    assert_eq!(reg.len(), 1);
    assert_eq!(reg.find(SourceKind::Camera, 1).unwrap().port, SwitcherInput(1));
    assert_eq!(notes.notes(), vec!["Duplicate camera source id 1"]);
}

#[test]
fn ptz_devices_attach_to_cameras() {
    let notes = NoteCollector::new();
    let cfg = StudioConfig {
        sources_ptz: "1:ptz1,7:ptz7".to_string(),
        ..studio("1:1", "")
    };
    let reg = SourceRegistry::from_config(&notes, &cfg);
    assert_eq!(
        reg.find(SourceKind::Camera, 1).unwrap().ptz_device.as_deref(),
        Some("ptz1")
    );
    assert_eq!(notes.len(), 1);
    assert!(notes.notes()[0].contains("unknown camera 7"));
}

#[test]
fn label_normalization_strips_non_digits() {
    assert_eq!(normalize_source_id("cam12"), 12);
    assert_eq!(normalize_source_id("k1b2"), 12);
    assert_eq!(normalize_source_id("cam"), 1);
    assert_eq!(normalize_source_id("cam0"), 1);
}

#[test]
fn find_by_name_dispatches_on_first_letter() {
    let notes = NoteCollector::new();
    let reg = SourceRegistry::from_config(&notes, &studio("1:1,2:2", "1:11"));
    assert_eq!(reg.find_by_name(&notes, "K2").unwrap().port, SwitcherInput(2));
    assert_eq!(reg.find_by_name(&notes, "cam1").unwrap().port, SwitcherInput(1));
    assert_eq!(reg.find_by_name(&notes, "RM1").unwrap().port, SwitcherInput(11));
    assert!(notes.is_empty());

    assert!(reg.find_by_name(&notes, "studio").is_none());
    assert_eq!(notes.notes(), vec!["Invalid source name \"studio\""]);
}

#[test]
fn unresolvable_name_yields_marker_and_one_warning() {
    let notes = NoteCollector::new();
    let reg = SourceRegistry::from_config(&notes, &studio("1:1", ""));
    assert_eq!(reg.resolve_input(&notes, "cam9"), SwitcherInput::UNRESOLVED);
    assert_eq!(notes.notes(), vec!["Invalid source \"cam9\" of type \"camera\""]);

    let notes = NoteCollector::new();
    assert_eq!(reg.resolve_input(&notes, "xyz"), SwitcherInput::UNRESOLVED);
    assert_eq!(notes.len(), 1);
}

#[test]
fn resolve_input_is_idempotent() {
    let notes = NoteCollector::new();
    let reg = SourceRegistry::from_config(&notes, &studio("1:4,2:5", ""));
    let first = reg.resolve_input(&notes, "cam2");
    for _ in 0..3 {
        assert_eq!(reg.resolve_input(&notes, "cam2"), first);
    }
    assert_eq!(first, SwitcherInput(5));
}

#[test]
fn input_for_piece_routes_clips_and_graphics_to_their_servers() {
    let notes = NoteCollector::new();
    let cfg = studio("1:1", "");
    let reg = SourceRegistry::from_config(&notes, &cfg);
    let piece = Piece {
        id: "v".to_string(),
        kind: PieceKind::Video {
            clip: "a.mp4".to_string(),
        },
        object_time: 0.0,
        duration: 0.0,
        position: String::new(),
        script: None,
        transition: None,
    };
    assert_eq!(
        reg.input_for_piece(&notes, &cfg.switcher, &piece),
        cfg.switcher.clip_server
    );

    let graphic = Piece {
        kind: PieceKind::Graphic {
            clip: "map.png".to_string(),
        },
        ..piece.clone()
    };
    assert_eq!(
        reg.input_for_piece(&notes, &cfg.switcher, &graphic),
        cfg.switcher.graphics_server
    );

    let lights = Piece {
        kind: PieceKind::Lights,
        ..piece
    };
    assert_eq!(
        reg.input_for_piece(&notes, &cfg.switcher, &lights),
        SwitcherInput::UNRESOLVED
    );
    assert_eq!(notes.len(), 1);
}
