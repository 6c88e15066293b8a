use crate::composition::dve::{DveLayout, PIP_SOURCES, create_dve};
use crate::config::segment::SegmentConfig;
use crate::config::studio::StudioConfig;
use crate::effects::transitions::{TransitionStyle, transition_from_str};
use crate::foundation::notes::{NotesSink, warn};
use crate::ingest::model::{IngestPart, IngestSegment, Piece, PieceKind, RawPiece};
use crate::pieces::builders::{build_piece, create_piece_script};
use crate::pieces::output::{
    ClassifiedPiece, GENERIC_PART_TYPE, GeneratedPiece, OutputPart, OutputSegment,
};

/// Part types handled by another workflow and left out of this one.
const SKIPPED_PART_TYPES: [&str; 2] = ["dve", "breaker"];

/// Transform one ingest segment into ordered output parts.
///
/// Never fails: malformed parts and pieces are reported through `notes` and skipped.
/// Floated parts and parts whose type names a DVE or breaker are left out; every other
/// part yields exactly one output part.
#[tracing::instrument(skip_all, fields(segment = %segment.external_id, parts = segment.parts.len()))]
pub fn transform_segment(
    notes: &dyn NotesSink,
    studio: &StudioConfig,
    segment: &IngestSegment,
) -> OutputSegment {
    let mut out = OutputSegment {
        external_id: segment.external_id.clone(),
        name: segment.name.clone(),
        parts: Vec::with_capacity(segment.parts.len()),
    };

    // Clips then load by bare file name.
    if studio.media_directory.trim().is_empty() {
        warn(
            notes,
            "The studio setting 'media_directory' must be set for clip playout",
        );
    }

    let config = SegmentConfig::new(notes, studio);
    out.parts
        .extend(segment.parts.iter().filter_map(|part| transform_part(&config, part)));
    out
}

/// `None` when the part is left out of the segment.
pub fn transform_part(config: &SegmentConfig<'_>, part: &IngestPart) -> Option<OutputPart> {
    let Some(payload) = &part.payload else {
        config.warning(format!(
            "Missing payload for part: '{}'",
            part.display_name()
        ));
        return Some(generic_part(part));
    };
    if payload.float {
        return None;
    }
    let Some(part_type) = payload.declared_type() else {
        config.warning(format!("Missing type for part: '{}'", part.display_name()));
        return Some(generic_part(part));
    };
    if is_skipped_type(part_type) {
        tracing::debug!(part = %part.external_id, part_type, "part left to another workflow");
        return None;
    }

    let raw_pieces = payload.pieces.as_deref().unwrap_or_default();
    let script = assemble_script(payload.script.as_deref(), raw_pieces);
    let pieces: Vec<Piece> = raw_pieces
        .iter()
        .filter_map(|raw| match Piece::from_raw(raw) {
            Ok(piece) => Some(piece),
            Err(err) => {
                config.warning(err.to_string());
                None
            }
        })
        .collect();

    let part_transition = part_transition(&pieces);
    let generated = build_part_pieces(config, part, &pieces, &script, part_transition);

    let mut out = OutputPart {
        external_id: part.external_id.clone(),
        title: part.display_name().to_string(),
        type_variant: part_type.to_string(),
        pieces: Vec::new(),
        ad_lib_pieces: Vec::new(),
    };
    for piece in generated {
        match piece.classify() {
            Some(ClassifiedPiece::Regular(p)) => out.pieces.push(p),
            Some(ClassifiedPiece::AdLib(mut p)) => {
                p.rank = out.ad_lib_pieces.len() as u32;
                out.ad_lib_pieces.push(p);
            }
            None => {}
        }
    }
    Some(out)
}

fn build_part_pieces(
    config: &SegmentConfig<'_>,
    part: &IngestPart,
    pieces: &[Piece],
    script: &str,
    part_transition: TransitionStyle,
) -> Vec<GeneratedPiece> {
    let mut out = Vec::with_capacity(pieces.len() + 1);
    let mut script_piece =
        (!script.is_empty()).then(|| create_piece_script(&part.external_id, script));

    let mut i = 0;
    while i < pieces.len() {
        let piece = &pieces[i];
        match DveLayout::of(piece) {
            Some(layout) => {
                let (end, sources) = composite_extent(pieces, i, layout);
                out.extend(create_dve(config, &pieces[i..end], sources, config.canvas));
                i = end;
            }
            None => {
                out.extend(build_piece(config, piece, part_transition));
                i += 1;
            }
        }
        // The script follows the part's first built piece.
        if !out.is_empty() {
            out.extend(script_piece.take());
        }
    }
    out.extend(script_piece);
    out
}

/// End of the pieces a composite at `start` consumes, and the source count it asks for.
///
/// A composite takes the contiguous run of composable pieces after it. A PIP takes at
/// most two and a split with an explicit `sources` attribute at most that many; the rest
/// build standalone.
fn composite_extent(pieces: &[Piece], start: usize, layout: DveLayout) -> (usize, usize) {
    let run = pieces[start + 1..]
        .iter()
        .take_while(|p| p.object_type().is_composable())
        .count();
    match (layout, &pieces[start].kind) {
        (DveLayout::Split, PieceKind::Split { sources: Some(n) }) => {
            (start + 1 + run.min(*n), *n)
        }
        (DveLayout::Split, _) => (start + 1 + run, run),
        (DveLayout::Pip, _) => (start + 1 + run.min(PIP_SOURCES), PIP_SOURCES),
    }
}

/// Style named by the part's TRANSITION pieces (the last one wins), else a cut.
fn part_transition(pieces: &[Piece]) -> TransitionStyle {
    pieces
        .iter()
        .filter_map(|p| match &p.kind {
            PieceKind::Transition { style } => style.as_deref(),
            _ => None,
        })
        .fold(TransitionStyle::Cut, |_, style| {
            transition_from_str(style, TransitionStyle::Cut)
        })
}

/// Part script first, then each piece's inline script, newline-joined.
pub fn assemble_script(part_script: Option<&str>, pieces: &[RawPiece]) -> String {
    part_script
        .into_iter()
        .chain(pieces.iter().filter_map(|p| p.script.as_deref()))
        .filter(|s| !s.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_skipped_type(part_type: &str) -> bool {
    let t = part_type.to_ascii_lowercase();
    SKIPPED_PART_TYPES.iter().any(|skip| t.contains(skip))
}

fn generic_part(part: &IngestPart) -> OutputPart {
    OutputPart {
        external_id: part.external_id.clone(),
        title: part.display_name().to_string(),
        type_variant: GENERIC_PART_TYPE.to_string(),
        pieces: Vec::new(),
        ad_lib_pieces: Vec::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/segment/transformer.rs"]
mod tests;
