//! Rundown segment transformer.
//!
//! Turns an ingest segment (parts carrying typed pieces) into output parts: on-air
//! pieces, ad-lib pieces and the device timeline objects that drive the vision mixer,
//! clip player, graphics and audio. Source labels resolve to switcher inputs through the
//! studio's source maps; split and picture-in-picture composites are laid out on the
//! program canvas.
//!
//! Transformation never fails. Problems are reported to a [`NotesSink`] and the offending
//! part or piece is skipped.
#![forbid(unsafe_code)]

mod composition;
mod config;
mod effects;
mod foundation;
mod ingest;
mod layout;
mod pieces;
mod segment;
mod sources;
mod timeline;

pub use composition::dve::{BoxInputPolicy, DveLayout, PIP_SOURCES, create_dve, source_configuration};
pub use config::segment::SegmentConfig;
pub use config::studio::{StudioConfig, SwitcherSources};
pub use effects::transitions::{TransitionStyle, resolve_transition, transition_from_str};
pub use foundation::core::{Canvas, Fps, SwitcherInput};
pub use foundation::error::{SegmixError, SegmixResult};
pub use foundation::notes::{NoteCollector, NotesSink};
pub use ingest::model::{
    AD_LIB_POSITION, IngestPart, IngestSegment, ObjectType, PartPayload, Piece, PieceError,
    PieceKind, RawPiece, attributes,
};
pub use layout::boxes::{BoxProps, SPLIT_COUNTS, pip_boxes, split_boxes};
pub use pieces::builders::{
    build_piece, create_piece_camera, create_piece_graphic, create_piece_overlay,
    create_piece_remote, create_piece_script, create_piece_video, media_path,
};
pub use pieces::content::{
    CompositeBox, CompositeSourceConfiguration, GraphicsContent, LiveContent, PieceContent,
    ScriptContent, SourceLayerType, SplitContent, VtContent,
};
pub use pieces::output::{
    AdLibPiece, BlueprintPiece, ClassifiedPiece, GENERIC_PART_TYPE, GeneratedPiece, OutputPart,
    OutputSegment, SourceLayer,
};
pub use segment::transformer::{assemble_script, transform_part, transform_segment};
pub use sources::registry::{
    MapEntry, MapValue, SourceInfo, SourceKind, SourceRegistry, normalize_source_id,
    parse_map_str,
};
pub use timeline::objects::{
    AUTOMIX_TRANSITION, CLIP_FADER_DB, CLIP_FADER_TRANSITION, DeviceCommand, DeviceKind,
    DeviceLayer, Enable, PRIORITY_STEADY, PRIORITY_TRANSITION, SuperSourceBox, TimelineObject,
    audio_automix, clip_fader, fader_level, media_clip, program_transition,
    super_source_override,
};
