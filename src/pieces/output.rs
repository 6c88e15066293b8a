use crate::pieces::content::PieceContent;
use crate::timeline::objects::Enable;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Output source layer a piece is shown on.
pub enum SourceLayer {
    PgmCam,
    PgmRemote,
    PgmVt,
    PgmGraphics,
    PgmSplit,
    PgmScript,
    GfxOverlay,
}

#[derive(Clone, Debug, PartialEq)]
/// Builder output before it is sorted into regular or ad-lib.
pub struct GeneratedPiece {
    pub external_id: String,
    pub name: String,
    pub source_layer: SourceLayer,
    pub enable: Enable,
    /// Set for operator-triggered pieces.
    pub rank: Option<u32>,
    pub content: Option<PieceContent>,
}

impl GeneratedPiece {
    pub fn is_ad_lib(&self) -> bool {
        self.rank.is_some()
    }

    /// `None` when there is no content to put on air.
    pub fn classify(self) -> Option<ClassifiedPiece> {
        let content = self.content?;
        Some(match self.rank {
            Some(rank) => ClassifiedPiece::AdLib(AdLibPiece {
                external_id: self.external_id,
                name: self.name,
                rank,
                source_layer: self.source_layer,
                expected_duration: self.enable.duration,
                content,
            }),
            None => ClassifiedPiece::Regular(BlueprintPiece {
                external_id: self.external_id,
                name: self.name,
                enable: self.enable,
                source_layer: self.source_layer,
                content,
            }),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ClassifiedPiece {
    Regular(BlueprintPiece),
    AdLib(AdLibPiece),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Piece placed on air automatically.
pub struct BlueprintPiece {
    pub external_id: String,
    pub name: String,
    pub enable: Enable,
    pub source_layer: SourceLayer,
    pub content: PieceContent,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Alternative an operator can take manually.
pub struct AdLibPiece {
    pub external_id: String,
    pub name: String,
    pub rank: u32,
    pub source_layer: SourceLayer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_duration: Option<f64>,
    pub content: PieceContent,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// One output part with its regular and ad-lib pieces.
pub struct OutputPart {
    pub external_id: String,
    pub title: String,
    /// Declared part type, or `generic`.
    pub type_variant: String,
    pub pieces: Vec<BlueprintPiece>,
    pub ad_lib_pieces: Vec<AdLibPiece>,
}

/// Type variant of parts emitted without pieces.
pub const GENERIC_PART_TYPE: &str = "generic";

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OutputSegment {
    pub external_id: String,
    pub name: String,
    pub parts: Vec<OutputPart>,
}
