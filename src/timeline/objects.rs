//! Device timeline objects and their constructors.
//!
//! Constructors are pure: an enable window plus device parameters in, one object out.
//! Object ids are left empty for the host to assign.

use crate::effects::transitions::TransitionStyle;
use crate::foundation::core::SwitcherInput;
use crate::ingest::model::Piece;

/// Priority of program transitions; outranks steady-state commands on the same layer.
pub const PRIORITY_TRANSITION: u32 = 5;
/// Priority of steady-state levels, overrides and media loads.
pub const PRIORITY_STEADY: u32 = 1;

/// Clip fader level applied while a clip plays, in dB.
pub const CLIP_FADER_DB: f64 = 0.0;
/// Fade time for the clip fader, in frames.
pub const CLIP_FADER_TRANSITION: u32 = 10;
/// Fade time for automix sources, in frames.
pub const AUTOMIX_TRANSITION: u32 = 1;

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// When a timeline object is active, relative to its part.
pub struct Enable {
    pub start: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl Enable {
    pub fn at(start: f64) -> Self {
        Self {
            start,
            duration: None,
        }
    }

    /// Window from a piece's offset and duration; a zero duration is open-ended.
    pub fn for_piece(piece: &Piece) -> Self {
        Self {
            start: piece.object_time.max(0.0),
            duration: (piece.duration > 0.0).then_some(piece.duration),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Logical device layer a command targets.
pub enum DeviceLayer {
    SwitcherProgram,
    SwitcherSuperSourceOverride,
    ClipPlayer,
    GraphicsFullscreen,
    GraphicsOverlay,
    AudioAutomix,
    AudioClipFader,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    VisionMixer,
    MediaPlayer,
    AudioMixer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SuperSourceBox {
    pub enabled: bool,
    pub source: SwitcherInput,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
/// Device-specific payload of a timeline object.
pub enum DeviceCommand {
    /// Take `input` to program with `transition`.
    SwitcherProgram {
        input: SwitcherInput,
        transition: TransitionStyle,
    },
    /// Route sources into the composite boxes, in box order.
    SwitcherSuperSource { boxes: Vec<SuperSourceBox> },
    /// Load and play a file.
    MediaClip { file: String },
    /// Hold a fader at a fixed level.
    AudioFader {
        value_db: f64,
        transition_duration: u32,
    },
}

impl DeviceCommand {
    pub fn device(&self) -> DeviceKind {
        match self {
            DeviceCommand::SwitcherProgram { .. } | DeviceCommand::SwitcherSuperSource { .. } => {
                DeviceKind::VisionMixer
            }
            DeviceCommand::MediaClip { .. } => DeviceKind::MediaPlayer,
            DeviceCommand::AudioFader { .. } => DeviceKind::AudioMixer,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A timed command for one device layer.
pub struct TimelineObject {
    pub id: String,
    pub enable: Enable,
    /// Tie-break between simultaneous objects on one layer; higher wins.
    pub priority: u32,
    pub layer: DeviceLayer,
    pub content: DeviceCommand,
}

impl TimelineObject {
    fn new(enable: Enable, priority: u32, layer: DeviceLayer, content: DeviceCommand) -> Self {
        Self {
            id: String::new(),
            enable,
            priority,
            layer,
            content,
        }
    }
}

pub fn program_transition(
    enable: Enable,
    input: SwitcherInput,
    transition: TransitionStyle,
) -> TimelineObject {
    TimelineObject::new(
        enable,
        PRIORITY_TRANSITION,
        DeviceLayer::SwitcherProgram,
        DeviceCommand::SwitcherProgram { input, transition },
    )
}

pub fn super_source_override(enable: Enable, sources: &[SwitcherInput]) -> TimelineObject {
    let boxes = sources
        .iter()
        .map(|&source| SuperSourceBox {
            enabled: true,
            source,
        })
        .collect();
    TimelineObject::new(
        enable,
        PRIORITY_STEADY,
        DeviceLayer::SwitcherSuperSourceOverride,
        DeviceCommand::SwitcherSuperSource { boxes },
    )
}

pub fn audio_automix(enable: Enable) -> TimelineObject {
    fader_level(
        enable,
        DeviceLayer::AudioAutomix,
        CLIP_FADER_DB,
        AUTOMIX_TRANSITION,
    )
}

pub fn clip_fader(enable: Enable) -> TimelineObject {
    fader_level(
        enable,
        DeviceLayer::AudioClipFader,
        CLIP_FADER_DB,
        CLIP_FADER_TRANSITION,
    )
}

pub fn fader_level(
    enable: Enable,
    layer: DeviceLayer,
    value_db: f64,
    transition_duration: u32,
) -> TimelineObject {
    TimelineObject::new(
        enable,
        PRIORITY_STEADY,
        layer,
        DeviceCommand::AudioFader {
            value_db,
            transition_duration,
        },
    )
}

pub fn media_clip(enable: Enable, layer: DeviceLayer, file: impl Into<String>) -> TimelineObject {
    TimelineObject::new(
        enable,
        PRIORITY_STEADY,
        layer,
        DeviceCommand::MediaClip { file: file.into() },
    )
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/objects.rs"]
mod tests;
