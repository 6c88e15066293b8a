//! One constructor per standalone object type.
//!
//! Required attributes were checked when the ingest piece became a [`Piece`], so the
//! builders here cannot fail; an unresolvable source still yields a piece routed to
//! [`SwitcherInput::UNRESOLVED`].

use std::path::Path;

use crate::config::segment::SegmentConfig;
use crate::effects::transitions::{TransitionStyle, resolve_transition};
use crate::foundation::core::SwitcherInput;
use crate::ingest::model::{Piece, PieceKind};
use crate::pieces::content::{
    GraphicsContent, LiveContent, PieceContent, ScriptContent, VtContent,
};
use crate::pieces::output::{GeneratedPiece, SourceLayer};
use crate::timeline::objects::{
    DeviceLayer, Enable, audio_automix, clip_fader, media_clip, program_transition,
};

/// Build the output for a standalone piece, or `None` for types that produce nothing
/// on their own.
pub fn build_piece(
    config: &SegmentConfig<'_>,
    piece: &Piece,
    part_transition: TransitionStyle,
) -> Option<GeneratedPiece> {
    let transition = resolve_transition(piece.transition.as_deref(), part_transition);
    tracing::debug!(piece = %piece.id, object_type = %piece.object_type(), ?transition, "build piece");

    match &piece.kind {
        PieceKind::Video { clip } => Some(create_piece_video(config, piece, clip, transition)),
        PieceKind::Camera { camera } => {
            Some(create_piece_camera(config, piece, camera, transition))
        }
        PieceKind::Remote { source } => {
            Some(create_piece_remote(config, piece, source, transition))
        }
        PieceKind::Graphic { clip } => {
            Some(create_piece_graphic(config, piece, clip, transition))
        }
        PieceKind::Overlay { clip } => Some(create_piece_overlay(piece, clip)),
        // Inline script is gathered per part; transitions set the part default.
        PieceKind::Script | PieceKind::Transition { .. } => None,
        PieceKind::Split { .. } | PieceKind::Pip | PieceKind::Lights | PieceKind::Voiceover => {
            config.warning(format!(
                "objectType '{}' is not supported as a standalone piece: '{}'",
                piece.object_type(),
                piece.label()
            ));
            None
        }
    }
}

fn generated(
    piece: &Piece,
    name: impl Into<String>,
    source_layer: SourceLayer,
    content: PieceContent,
) -> GeneratedPiece {
    GeneratedPiece {
        external_id: piece.id.clone(),
        name: name.into(),
        source_layer,
        enable: Enable::for_piece(piece),
        rank: piece.is_ad_lib_position().then_some(0),
        content: Some(content),
    }
}

/// File path the clip player loads for `clip`.
pub fn media_path(media_directory: &str, clip: &str) -> String {
    if media_directory.is_empty() {
        return clip.to_string();
    }
    Path::new(media_directory)
        .join(clip)
        .to_string_lossy()
        .into_owned()
}

pub fn create_piece_video(
    config: &SegmentConfig<'_>,
    piece: &Piece,
    clip: &str,
    transition: TransitionStyle,
) -> GeneratedPiece {
    let enable = Enable::for_piece(piece);
    let path = media_path(&config.studio.media_directory, clip);
    let content = VtContent {
        file_name: clip.to_string(),
        path: path.clone(),
        timeline_objects: vec![
            media_clip(enable, DeviceLayer::ClipPlayer, path),
            program_transition(enable, config.input_for_piece(piece), transition),
            clip_fader(enable),
        ],
    };
    generated(piece, clip, SourceLayer::PgmVt, PieceContent::Vt(content))
}

fn live_content(
    config: &SegmentConfig<'_>,
    enable: Enable,
    input: SwitcherInput,
    transition: TransitionStyle,
) -> LiveContent {
    LiveContent {
        studio_label: config.studio_label().to_string(),
        switcher_input: input,
        timeline_objects: vec![
            program_transition(enable, input, transition),
            audio_automix(enable),
        ],
    }
}

pub fn create_piece_camera(
    config: &SegmentConfig<'_>,
    piece: &Piece,
    camera: &str,
    transition: TransitionStyle,
) -> GeneratedPiece {
    let input = config.input_for_piece(piece);
    let content = live_content(config, Enable::for_piece(piece), input, transition);
    generated(
        piece,
        camera.to_uppercase(),
        SourceLayer::PgmCam,
        PieceContent::Camera(content),
    )
}

pub fn create_piece_remote(
    config: &SegmentConfig<'_>,
    piece: &Piece,
    source: &str,
    transition: TransitionStyle,
) -> GeneratedPiece {
    let input = config.input_for_piece(piece);
    let content = live_content(config, Enable::for_piece(piece), input, transition);
    generated(
        piece,
        source.to_uppercase(),
        SourceLayer::PgmRemote,
        PieceContent::Remote(content),
    )
}

/// Fullscreen graphic: played out and taken to program.
pub fn create_piece_graphic(
    config: &SegmentConfig<'_>,
    piece: &Piece,
    clip: &str,
    transition: TransitionStyle,
) -> GeneratedPiece {
    let enable = Enable::for_piece(piece);
    let content = GraphicsContent {
        file_name: clip.to_string(),
        timeline_objects: vec![
            media_clip(enable, DeviceLayer::GraphicsFullscreen, clip),
            program_transition(enable, config.input_for_piece(piece), transition),
        ],
    };
    generated(
        piece,
        clip,
        SourceLayer::PgmGraphics,
        PieceContent::Graphics(content),
    )
}

/// Overlay graphic: keyed over program, no switcher take.
pub fn create_piece_overlay(piece: &Piece, clip: &str) -> GeneratedPiece {
    let content = GraphicsContent {
        file_name: clip.to_string(),
        timeline_objects: vec![media_clip(
            Enable::for_piece(piece),
            DeviceLayer::GraphicsOverlay,
            clip,
        )],
    };
    generated(
        piece,
        clip,
        SourceLayer::GfxOverlay,
        PieceContent::Graphics(content),
    )
}

/// Script piece for a part; content is empty when the text is blank.
pub fn create_piece_script(external_id: &str, text: &str) -> GeneratedPiece {
    let content = ScriptContent::from_text(text);
    GeneratedPiece {
        external_id: format!("{external_id}_script"),
        name: content
            .as_ref()
            .map(|c| c.first_words.clone())
            .unwrap_or_default(),
        source_layer: SourceLayer::PgmScript,
        enable: Enable::at(0.0),
        rank: None,
        content: content.map(PieceContent::Script),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pieces/builders.rs"]
mod tests;
