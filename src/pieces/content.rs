use crate::foundation::core::SwitcherInput;
use crate::layout::boxes::BoxProps;
use crate::timeline::objects::TimelineObject;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Kind of source feeding a piece or composite box.
pub enum SourceLayerType {
    Vt,
    Camera,
    Remote,
    Graphics,
    Splits,
    Script,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
/// Typed editorial content of an output piece.
pub enum PieceContent {
    Vt(VtContent),
    Camera(LiveContent),
    Remote(LiveContent),
    Graphics(GraphicsContent),
    Split(SplitContent),
    Script(ScriptContent),
}

impl PieceContent {
    pub fn timeline_objects(&self) -> &[TimelineObject] {
        match self {
            PieceContent::Vt(c) => &c.timeline_objects,
            PieceContent::Camera(c) | PieceContent::Remote(c) => &c.timeline_objects,
            PieceContent::Graphics(c) => &c.timeline_objects,
            PieceContent::Split(c) => &c.timeline_objects,
            PieceContent::Script(_) => &[],
        }
    }

    pub fn layer_type(&self) -> SourceLayerType {
        match self {
            PieceContent::Vt(_) => SourceLayerType::Vt,
            PieceContent::Camera(_) => SourceLayerType::Camera,
            PieceContent::Remote(_) => SourceLayerType::Remote,
            PieceContent::Graphics(_) => SourceLayerType::Graphics,
            PieceContent::Split(_) => SourceLayerType::Splits,
            PieceContent::Script(_) => SourceLayerType::Script,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VtContent {
    pub file_name: String,
    /// File as the clip player loads it.
    pub path: String,
    pub timeline_objects: Vec<TimelineObject>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Camera or remote feed.
pub struct LiveContent {
    pub studio_label: String,
    pub switcher_input: SwitcherInput,
    pub timeline_objects: Vec<TimelineObject>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GraphicsContent {
    pub file_name: String,
    pub timeline_objects: Vec<TimelineObject>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScriptContent {
    pub first_words: String,
    pub last_words: String,
    pub full_script: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One composite box's resolved content.
pub struct CompositeSourceConfiguration {
    pub kind: SourceLayerType,
    pub studio_label: String,
    pub switcher_input: SwitcherInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Objects that bring this source live.
    pub timeline_objects: Vec<TimelineObject>,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Box geometry with the switcher input routed into it.
pub struct CompositeBox {
    #[serde(flatten)]
    pub geometry: BoxProps,
    pub source: SwitcherInput,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Split-screen or picture-in-picture composite.
pub struct SplitContent {
    pub boxes: Vec<CompositeBox>,
    /// Parallel to `boxes`; `None` where the box's source type is not composable.
    pub box_source_configuration: Vec<Option<CompositeSourceConfiguration>>,
    pub timeline_objects: Vec<TimelineObject>,
}

/// Number of words kept at each end of a script preview.
const SCRIPT_PREVIEW_WORDS: usize = 5;

impl ScriptContent {
    /// `None` for blank text.
    pub fn from_text(text: &str) -> Option<Self> {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            return None;
        }
        let head = words.len().min(SCRIPT_PREVIEW_WORDS);
        let tail = words.len().saturating_sub(SCRIPT_PREVIEW_WORDS);
        Some(Self {
            first_words: words[..head].join(" "),
            last_words: words[tail..].join(" "),
            full_script: text.to_string(),
        })
    }
}
