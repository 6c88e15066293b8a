//! Multi-source composites: split screens and picture-in-picture.
//!
//! The first piece handed to [`create_dve`] designates the layout; the pieces after it
//! fill the boxes in order. All failures are reported as diagnostics and the composite
//! is omitted.

use crate::config::segment::SegmentConfig;
use crate::effects::transitions::TransitionStyle;
use crate::foundation::core::{Canvas, SwitcherInput};
use crate::ingest::model::{Piece, PieceKind};
use crate::layout::boxes::{BoxProps, pip_boxes, split_boxes};
use crate::pieces::builders::media_path;
use crate::pieces::content::{
    CompositeBox, CompositeSourceConfiguration, PieceContent, SourceLayerType, SplitContent,
};
use crate::pieces::output::{GeneratedPiece, SourceLayer};
use crate::timeline::objects::{
    DeviceLayer, Enable, audio_automix, clip_fader, media_clip, program_transition,
    super_source_override,
};

/// Sources a picture-in-picture takes.
pub const PIP_SOURCES: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DveLayout {
    Split,
    Pip,
}

impl DveLayout {
    pub fn of(piece: &Piece) -> Option<Self> {
        match piece.kind {
            PieceKind::Split { .. } => Some(DveLayout::Split),
            PieceKind::Pip => Some(DveLayout::Pip),
            _ => None,
        }
    }

    /// Split and PIP disagree on where a box without a source configuration is routed.
    /// The difference is kept as-is until the studio defines split routing.
    pub fn box_input_policy(self) -> BoxInputPolicy {
        match self {
            DveLayout::Split => BoxInputPolicy::Placeholder,
            DveLayout::Pip => BoxInputPolicy::DefaultLiveSource,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Input for a box whose source has no configuration.
pub enum BoxInputPolicy {
    /// [`SwitcherInput::UNRESOLVED`].
    Placeholder,
    /// The studio's default live source.
    DefaultLiveSource,
}

/// Build one composite piece from `pieces[0]` (SPLIT or PIP) and the sources after it.
///
/// `sources` is the split count and is ignored for PIP, which always needs exactly
/// [`PIP_SOURCES`] contained pieces.
#[tracing::instrument(skip_all, fields(pieces = pieces.len(), sources = sources))]
pub fn create_dve(
    config: &SegmentConfig<'_>,
    pieces: &[Piece],
    sources: usize,
    canvas: Canvas,
) -> Option<GeneratedPiece> {
    let Some((dve_piece, contained)) = pieces.split_first() else {
        config.warning("DVE needs a split or pip piece followed by its sources");
        return None;
    };

    match DveLayout::of(dve_piece) {
        Some(DveLayout::Split) => create_split(config, dve_piece, contained, sources, canvas),
        Some(DveLayout::Pip) => create_pip(config, dve_piece, contained, canvas),
        None => {
            config.warning(format!(
                "DVE must start with a split or pip piece, got '{}' for piece: '{}'",
                dve_piece.object_type(),
                dve_piece.label()
            ));
            None
        }
    }
}

fn create_pip(
    config: &SegmentConfig<'_>,
    dve_piece: &Piece,
    contained: &[Piece],
    canvas: Canvas,
) -> Option<GeneratedPiece> {
    if contained.len() != PIP_SOURCES {
        config.warning(format!(
            "Wrong number of sources in DVE for PIP. Need exactly two sources, got {}.",
            contained.len()
        ));
        return None;
    }
    let boxes = pip_boxes(canvas);
    Some(compose(
        config,
        dve_piece,
        contained,
        &boxes,
        DveLayout::Pip.box_input_policy(),
        "PIP".to_string(),
    ))
}

fn create_split(
    config: &SegmentConfig<'_>,
    dve_piece: &Piece,
    contained: &[Piece],
    sources: usize,
    canvas: Canvas,
) -> Option<GeneratedPiece> {
    let boxes = match split_boxes(sources, canvas) {
        Ok(boxes) => boxes,
        Err(err) => {
            config.warning(format!("DVE split '{}': {err}", dve_piece.label()));
            return None;
        }
    };
    if contained.len() < sources {
        config.warning(format!(
            "Wrong number of sources in DVE split. Need {sources} sources, got {}.",
            contained.len()
        ));
        return None;
    }
    Some(compose(
        config,
        dve_piece,
        &contained[..sources],
        &boxes,
        DveLayout::Split.box_input_policy(),
        format!("DVE: {sources} split"),
    ))
}

fn compose(
    config: &SegmentConfig<'_>,
    dve_piece: &Piece,
    contained: &[Piece],
    geometry: &[BoxProps],
    policy: BoxInputPolicy,
    name: String,
) -> GeneratedPiece {
    let configurations: Vec<Option<CompositeSourceConfiguration>> = contained
        .iter()
        .map(|piece| source_configuration(config, piece))
        .collect();

    let boxes: Vec<CompositeBox> = geometry
        .iter()
        .zip(&configurations)
        .map(|(&geometry, configuration)| CompositeBox {
            geometry,
            source: match (configuration, policy) {
                (Some(c), _) => c.switcher_input,
                (None, BoxInputPolicy::Placeholder) => SwitcherInput::UNRESOLVED,
                (None, BoxInputPolicy::DefaultLiveSource) => {
                    config.studio.switcher.default_live_source()
                }
            },
        })
        .collect();

    let inputs: Vec<SwitcherInput> = boxes.iter().map(|b| b.source).collect();
    let timeline_objects = vec![
        super_source_override(Enable::at(0.0), &inputs),
        program_transition(
            Enable::at(0.0),
            SwitcherInput::SUPER_SOURCE,
            TransitionStyle::Cut,
        ),
    ];
    tracing::debug!(%name, ?inputs, "composite built");

    GeneratedPiece {
        external_id: dve_piece.id.clone(),
        name,
        source_layer: SourceLayer::PgmSplit,
        enable: Enable::for_piece(dve_piece),
        rank: dve_piece.is_ad_lib_position().then_some(0),
        content: Some(PieceContent::Split(SplitContent {
            boxes,
            box_source_configuration: configurations,
            timeline_objects,
        })),
    }
}

/// What brings one contained piece live inside a box, or `None` for types a box
/// cannot show.
pub fn source_configuration(
    config: &SegmentConfig<'_>,
    piece: &Piece,
) -> Option<CompositeSourceConfiguration> {
    let studio_label = config.studio_label().to_string();
    let enable = Enable::for_piece(piece);

    let configuration = match &piece.kind {
        PieceKind::Graphic { clip } => CompositeSourceConfiguration {
            kind: SourceLayerType::Graphics,
            studio_label,
            switcher_input: config.input_for_piece(piece),
            file_name: Some(clip.clone()),
            timeline_objects: vec![media_clip(enable, DeviceLayer::GraphicsFullscreen, clip)],
        },
        PieceKind::Video { clip } => CompositeSourceConfiguration {
            kind: SourceLayerType::Vt,
            studio_label,
            switcher_input: config.input_for_piece(piece),
            file_name: Some(clip.clone()),
            timeline_objects: vec![
                media_clip(
                    enable,
                    DeviceLayer::ClipPlayer,
                    media_path(&config.studio.media_directory, clip),
                ),
                clip_fader(Enable::at(0.0)),
            ],
        },
        PieceKind::Camera { .. } => CompositeSourceConfiguration {
            kind: SourceLayerType::Camera,
            studio_label,
            switcher_input: config.input_for_piece(piece),
            file_name: None,
            timeline_objects: vec![audio_automix(Enable::at(0.0))],
        },
        PieceKind::Remote { .. } => CompositeSourceConfiguration {
            kind: SourceLayerType::Remote,
            studio_label,
            switcher_input: config.input_for_piece(piece),
            file_name: None,
            timeline_objects: vec![audio_automix(Enable::at(0.0))],
        },
        _ => {
            config.warning(format!(
                "DVE does not support objectType '{}' for piece: '{}'",
                piece.object_type(),
                piece.label()
            ));
            return None;
        }
    };
    Some(configuration)
}

#[cfg(test)]
#[path = "../../tests/unit/composition/dve.rs"]
mod tests;
