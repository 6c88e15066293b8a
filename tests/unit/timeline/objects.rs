use super::*;
use crate::ingest::model::PieceKind;

fn piece(object_time: f64, duration: f64) -> Piece {
    Piece {
        id: "p".to_string(),
        kind: PieceKind::Script,
        object_time,
        duration,
        position: String::new(),
        script: None,
        transition: None,
    }
}

#[test]
fn enable_from_piece_omits_zero_duration() {
    assert_eq!(Enable::for_piece(&piece(0.0, 0.0)), Enable::at(0.0));
    assert_eq!(
        Enable::for_piece(&piece(2.5, 4.0)),
        Enable {
            start: 2.5,
            duration: Some(4.0)
        }
    );
}

#[test]
fn transitions_outrank_steady_state() {
    let t = program_transition(Enable::at(0.0), SwitcherInput(3), TransitionStyle::Fade);
    let a = audio_automix(Enable::at(0.0));
    assert!(t.priority > a.priority);
    assert_eq!(t.layer, DeviceLayer::SwitcherProgram);
    assert_eq!(t.content.device(), DeviceKind::VisionMixer);
    assert_eq!(a.content.device(), DeviceKind::AudioMixer);
}

#[test]
fn super_source_lists_boxes_in_order() {
    let o = super_source_override(Enable::at(0.0), &[SwitcherInput(1), SwitcherInput(2)]);
    let DeviceCommand::SwitcherSuperSource { boxes } = &o.content else {
        panic!("expected super source command");
    };
    assert_eq!(
        boxes.iter().map(|b| b.source).collect::<Vec<_>>(),
        vec![SwitcherInput(1), SwitcherInput(2)]
    );
    assert!(boxes.iter().all(|b| b.enabled));
}

#[test]
fn clip_fader_uses_fixed_level() {
    let o = clip_fader(Enable::at(1.0));
    assert_eq!(o.layer, DeviceLayer::AudioClipFader);
    assert_eq!(
        o.content,
        DeviceCommand::AudioFader {
            value_db: CLIP_FADER_DB,
            transition_duration: CLIP_FADER_TRANSITION
        }
    );
}

#[test]
fn commands_serialize_with_type_tag() {
    let o = media_clip(Enable::at(0.0), DeviceLayer::ClipPlayer, "a.mp4");
    let v = serde_json::to_value(&o).unwrap();
    assert_eq!(v["content"]["type"], "media_clip");
    assert_eq!(v["content"]["file"], "a.mp4");
    assert_eq!(v["layer"], "clip_player");
    assert!(v["enable"].get("duration").is_none());
}
