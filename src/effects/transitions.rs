#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
/// Program transition styles understood by the vision mixer.
pub enum TransitionStyle {
    /// Hard cut.
    #[default]
    Cut,
    Fade,
    Zoom,
    Wipe,
    Slide,
    Fly,
    CrossZoom,
    FlyRotate,
    Cube,
    CubeZoom,
    VerticalWipe,
    VerticalSlide,
    Merge,
    WipeReverse,
    SlideReverse,
    VerticalWipeReverse,
    VerticalSlideReverse,
}

/// Lookup order for free-text matching. A name always precedes any shorter name it
/// contains, so e.g. `verticalwipereverse` is tested before `wipereverse` and `wipe`.
const TRANSITION_TABLE: [(&str, TransitionStyle); 17] = [
    ("crosszoom", TransitionStyle::CrossZoom),
    ("cubezoom", TransitionStyle::CubeZoom),
    ("cube", TransitionStyle::Cube),
    ("cut", TransitionStyle::Cut),
    ("fade", TransitionStyle::Fade),
    ("flyrotate", TransitionStyle::FlyRotate),
    ("fly", TransitionStyle::Fly),
    ("merge", TransitionStyle::Merge),
    ("verticalslidereverse", TransitionStyle::VerticalSlideReverse),
    ("verticalslide", TransitionStyle::VerticalSlide),
    ("slidereverse", TransitionStyle::SlideReverse),
    ("slide", TransitionStyle::Slide),
    ("verticalwipereverse", TransitionStyle::VerticalWipeReverse),
    ("verticalwipe", TransitionStyle::VerticalWipe),
    ("wipereverse", TransitionStyle::WipeReverse),
    ("wipe", TransitionStyle::Wipe),
    ("zoom", TransitionStyle::Zoom),
];

/// Match free text such as `"Fade 1s"` against the known styles, case-insensitively.
/// The first table entry contained in the text wins; no match returns `default`.
pub fn transition_from_str(s: &str, default: TransitionStyle) -> TransitionStyle {
    let s = s.to_ascii_lowercase();
    TRANSITION_TABLE
        .iter()
        .find(|(name, _)| s.contains(name))
        .map(|&(_, style)| style)
        .unwrap_or(default)
}

/// Piece-level style if it names one, else the part default.
pub fn resolve_transition(piece_style: Option<&str>, part_default: TransitionStyle) -> TransitionStyle {
    match piece_style {
        Some(s) => transition_from_str(s, part_default),
        None => part_default,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/transitions.rs"]
mod tests;
