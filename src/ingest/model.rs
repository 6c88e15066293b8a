use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::SegmixResult;

/// Attribute keys carried in the free-form ingest attribute map.
pub mod attributes {
    pub const CAMERA: &str = "name";
    pub const REMOTE: &str = "source";
    pub const TRANSITION: &str = "type";
    pub const SPLIT_SOURCES: &str = "sources";
}

/// Position tag that turns a piece into an operator-triggered ad-lib.
pub const AD_LIB_POSITION: &str = "adlib";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Declared on-air object type of an ingest piece.
pub enum ObjectType {
    Graphic,
    Video,
    Camera,
    Split,
    Overlay,
    Lights,
    Transition,
    Remote,
    Pip,
    Voiceover,
    Script,
}

impl ObjectType {
    pub const ALL: [ObjectType; 11] = [
        ObjectType::Graphic,
        ObjectType::Video,
        ObjectType::Camera,
        ObjectType::Split,
        ObjectType::Overlay,
        ObjectType::Lights,
        ObjectType::Transition,
        ObjectType::Remote,
        ObjectType::Pip,
        ObjectType::Voiceover,
        ObjectType::Script,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ObjectType::Graphic => "graphic",
            ObjectType::Video => "video",
            ObjectType::Camera => "camera",
            ObjectType::Split => "split",
            ObjectType::Overlay => "overlay",
            ObjectType::Lights => "lights",
            ObjectType::Transition => "transition",
            ObjectType::Remote => "remote",
            ObjectType::Pip => "pip",
            ObjectType::Voiceover => "voiceover",
            ObjectType::Script => "script",
        }
    }

    /// Case-insensitive parse of the ingest spelling.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
    }

    /// Whether a piece of this type can fill a composite box.
    pub fn is_composable(self) -> bool {
        matches!(
            self,
            ObjectType::Graphic | ObjectType::Video | ObjectType::Camera | ObjectType::Remote
        )
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One ingest segment as handed over by the host.
pub struct IngestSegment {
    pub external_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub parts: Vec<IngestPart>,
}

impl IngestSegment {
    pub fn from_json_str(s: &str) -> SegmixResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> SegmixResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read ingest segment '{}'", path.display()))?;
        Self::from_json_str(&s)
    }
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestPart {
    pub external_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<PartPayload>,
}

impl IngestPart {
    /// Name used in diagnostics and as the output title.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.external_id
        } else {
            &self.name
        }
    }
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct PartPayload {
    /// Declared part type, e.g. `cam`, `dve`, `breaker`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub part_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pieces: Option<Vec<RawPiece>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    /// Floated parts are parked and never reach air.
    #[serde(default)]
    pub float: bool,
}

impl PartPayload {
    pub fn declared_type(&self) -> Option<&str> {
        self.part_type
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Piece exactly as it arrives from ingest, attributes untyped.
pub struct RawPiece {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub object_type: String,
    #[serde(default)]
    pub object_time: f64,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub clip_name: String,
    #[serde(default)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<String>,
}

impl RawPiece {
    /// Clip name if set, else the id.
    pub fn label(&self) -> &str {
        if self.clip_name.is_empty() {
            &self.id
        } else {
            &self.clip_name
        }
    }

    fn attribute_str(&self, key: &str) -> Option<String> {
        match self.attributes.get(key)? {
            serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    fn attribute_count(&self, key: &str) -> Option<usize> {
        match self.attributes.get(key)? {
            serde_json::Value::Number(n) => n.as_u64().and_then(|v| usize::try_from(v).ok()),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    fn clip(&self) -> Option<String> {
        (!self.clip_name.is_empty()).then(|| self.clip_name.clone())
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Required attributes per object type, checked once at ingest.
pub enum PieceKind {
    Graphic { clip: String },
    Video { clip: String },
    Camera { camera: String },
    Split { sources: Option<usize> },
    Overlay { clip: String },
    Lights,
    Transition { style: Option<String> },
    Remote { source: String },
    Pip,
    Voiceover,
    Script,
}

impl PieceKind {
    pub fn object_type(&self) -> ObjectType {
        match self {
            PieceKind::Graphic { .. } => ObjectType::Graphic,
            PieceKind::Video { .. } => ObjectType::Video,
            PieceKind::Camera { .. } => ObjectType::Camera,
            PieceKind::Split { .. } => ObjectType::Split,
            PieceKind::Overlay { .. } => ObjectType::Overlay,
            PieceKind::Lights => ObjectType::Lights,
            PieceKind::Transition { .. } => ObjectType::Transition,
            PieceKind::Remote { .. } => ObjectType::Remote,
            PieceKind::Pip => ObjectType::Pip,
            PieceKind::Voiceover => ObjectType::Voiceover,
            PieceKind::Script => ObjectType::Script,
        }
    }
}

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum PieceError {
    #[error("Missing {attribute} for {object_type}: {id}")]
    MissingAttribute {
        object_type: ObjectType,
        attribute: &'static str,
        id: String,
    },

    #[error("Unknown objectType '{object_type}' for piece: '{label}'")]
    UnknownObjectType { object_type: String, label: String },
}

#[derive(Clone, Debug, PartialEq)]
/// One on-air element with its attributes resolved into a [`PieceKind`].
pub struct Piece {
    pub id: String,
    pub kind: PieceKind,
    pub object_time: f64,
    pub duration: f64,
    pub position: String,
    pub script: Option<String>,
    pub transition: Option<String>,
}

impl Piece {
    pub fn from_raw(raw: &RawPiece) -> Result<Self, PieceError> {
        let object_type =
            ObjectType::parse(&raw.object_type).ok_or_else(|| PieceError::UnknownObjectType {
                object_type: raw.object_type.clone(),
                label: raw.label().to_string(),
            })?;
        let missing = |attribute: &'static str| PieceError::MissingAttribute {
            object_type,
            attribute,
            id: raw.id.clone(),
        };

        let kind = match object_type {
            ObjectType::Graphic => PieceKind::Graphic {
                clip: raw.clip().ok_or_else(|| missing("clip"))?,
            },
            ObjectType::Video => PieceKind::Video {
                clip: raw.clip().ok_or_else(|| missing("clip"))?,
            },
            ObjectType::Overlay => PieceKind::Overlay {
                clip: raw.clip().ok_or_else(|| missing("clip"))?,
            },
            ObjectType::Camera => PieceKind::Camera {
                camera: raw
                    .attribute_str(attributes::CAMERA)
                    .ok_or_else(|| missing("camera"))?,
            },
            ObjectType::Remote => PieceKind::Remote {
                source: raw
                    .attribute_str(attributes::REMOTE)
                    .ok_or_else(|| missing("source"))?,
            },
            ObjectType::Split => PieceKind::Split {
                sources: raw.attribute_count(attributes::SPLIT_SOURCES),
            },
            ObjectType::Transition => PieceKind::Transition {
                style: raw
                    .transition
                    .clone()
                    .filter(|t| !t.is_empty())
                    .or_else(|| raw.attribute_str(attributes::TRANSITION)),
            },
            ObjectType::Pip => PieceKind::Pip,
            ObjectType::Lights => PieceKind::Lights,
            ObjectType::Voiceover => PieceKind::Voiceover,
            ObjectType::Script => PieceKind::Script,
        };

        Ok(Self {
            id: raw.id.clone(),
            kind,
            object_time: raw.object_time,
            duration: raw.duration,
            position: raw.position.clone(),
            script: raw.script.clone(),
            transition: raw.transition.clone().filter(|t| !t.is_empty()),
        })
    }

    pub fn object_type(&self) -> ObjectType {
        self.kind.object_type()
    }

    /// Clip name if the kind carries one, else the id.
    pub fn label(&self) -> &str {
        match &self.kind {
            PieceKind::Graphic { clip } | PieceKind::Video { clip } | PieceKind::Overlay { clip } => {
                clip
            }
            _ => &self.id,
        }
    }

    pub fn is_ad_lib_position(&self) -> bool {
        self.position.trim().eq_ignore_ascii_case(AD_LIB_POSITION)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ingest/model.rs"]
mod tests;
