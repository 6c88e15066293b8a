use crate::config::studio::StudioConfig;
use crate::foundation::core::{Canvas, SwitcherInput};
use crate::foundation::notes::{NotesSink, warn};
use crate::ingest::model::Piece;
use crate::sources::registry::SourceRegistry;

/// Per-segment context shared by every builder; never mutated after construction.
pub struct SegmentConfig<'a> {
    /// Host diagnostic sink for this segment build.
    pub notes: &'a dyn NotesSink,
    pub studio: &'a StudioConfig,
    /// Resolved from `studio` for this segment only.
    pub sources: SourceRegistry,
    pub canvas: Canvas,
}

impl<'a> SegmentConfig<'a> {
    pub fn new(notes: &'a dyn NotesSink, studio: &'a StudioConfig) -> Self {
        Self {
            notes,
            studio,
            sources: SourceRegistry::from_config(notes, studio),
            canvas: studio.canvas,
        }
    }

    pub fn warning(&self, message: impl AsRef<str>) {
        warn(self.notes, message);
    }

    pub fn input_for_piece(&self, piece: &Piece) -> SwitcherInput {
        self.sources
            .input_for_piece(self.notes, &self.studio.switcher, piece)
    }

    pub fn studio_label(&self) -> &str {
        &self.studio.name
    }
}
