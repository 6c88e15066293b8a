use crate::config::studio::{StudioConfig, SwitcherSources};
use crate::foundation::core::SwitcherInput;
use crate::foundation::notes::{NotesSink, warn};
use crate::ingest::model::{Piece, PieceKind};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum MapValue {
    Number(i64),
    Text(String),
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// One `index:value` chunk of a serialized source map.
pub struct MapEntry {
    pub id: i64,
    pub value: MapValue,
}

/// Parse a comma separated `index:value` map.
///
/// Each malformed chunk is reported (when a sink is given) and skipped; the rest of the
/// map is still parsed. Indices and numeric values use leading-integer parsing, so
/// `"2:7a"` reads as `2 -> 7`.
pub fn parse_map_str(
    notes: Option<&dyn NotesSink>,
    raw: &str,
    allow_strings: bool,
) -> Vec<MapEntry> {
    let mut out = Vec::new();
    for chunk in raw.trim().split(',') {
        if chunk.is_empty() {
            continue;
        }
        match parse_chunk(chunk, allow_strings) {
            Some(entry) => out.push(entry),
            None => {
                if let Some(notes) = notes {
                    warn(notes, format!("Invalid input map chunk: {chunk}"));
                }
            }
        }
    }
    out
}

fn parse_chunk(chunk: &str, allow_strings: bool) -> Option<MapEntry> {
    let (index, value) = chunk.split_once(':')?;
    if value.contains(':') {
        return None;
    }
    let id = parse_leading_int(index)?;
    let value = if allow_strings {
        if value.is_empty() {
            return None;
        }
        MapValue::Text(value.to_string())
    } else {
        MapValue::Number(parse_leading_int(value)?)
    };
    Some(MapEntry { id, value })
}

/// Optional sign followed by at least one digit, after leading whitespace.
/// Anything after the digit run is ignored.
pub(crate) fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (neg, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let v: i64 = rest[..end].parse().ok()?;
    Some(if neg { -v } else { v })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Camera,
    Remote,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            SourceKind::Camera => "camera",
            SourceKind::Remote => "remote",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// One physical source wired to the switcher.
pub struct SourceInfo {
    pub kind: SourceKind,
    pub id: u32,
    pub port: SwitcherInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ptz_device: Option<String>,
}

/// Strip everything but digits and parse; empty, zero or overflowing ids become `1`.
pub fn normalize_source_id(label: &str) -> u32 {
    let digits: String = label.chars().filter(char::is_ascii_digit).collect();
    match digits.parse::<u32>() {
        Ok(0) | Err(_) => 1,
        Ok(v) => v,
    }
}

#[derive(Clone, Debug, Default)]
/// Typed view of the studio's camera and remote inputs.
///
/// Rebuilt from the configuration snapshot for every segment; `(kind, id)` is unique.
pub struct SourceRegistry {
    sources: Vec<SourceInfo>,
}

impl SourceRegistry {
    #[tracing::instrument(skip_all)]
    pub fn from_config(notes: &dyn NotesSink, studio: &StudioConfig) -> Self {
        let mut registry = Self::default();

        let cams = parse_map_str(Some(notes), &studio.sources_cam, false);
        registry.extend(notes, SourceKind::Camera, &cams);
        let remotes = parse_map_str(Some(notes), &studio.sources_rm, false);
        registry.extend(notes, SourceKind::Remote, &remotes);

        for entry in parse_map_str(Some(notes), &studio.sources_ptz, true) {
            let MapValue::Text(device) = entry.value else {
                continue;
            };
            let camera = u32::try_from(entry.id).ok().and_then(|id| {
                registry
                    .sources
                    .iter_mut()
                    .find(|s| s.kind == SourceKind::Camera && s.id == id)
            });
            match camera {
                Some(camera) => camera.ptz_device = Some(device),
                None => warn(
                    notes,
                    format!(
                        "PTZ device \"{device}\" refers to unknown camera {}",
                        entry.id
                    ),
                ),
            }
        }

        tracing::debug!(sources = registry.sources.len(), "source registry built");
        registry
    }

    fn extend(&mut self, notes: &dyn NotesSink, kind: SourceKind, entries: &[MapEntry]) {
        for entry in entries {
            let MapValue::Number(port) = entry.value else {
                continue;
            };
            let (Ok(id), Ok(port)) = (u32::try_from(entry.id), u32::try_from(port)) else {
                warn(
                    notes,
                    format!("Invalid {kind} source {}:{port}", entry.id),
                );
                continue;
            };
            if self.find(kind, id).is_some() {
                warn(notes, format!("Duplicate {kind} source id {id}"));
                continue;
            }
            self.sources.push(SourceInfo {
                kind,
                id,
                port: SwitcherInput(port),
                ptz_device: None,
            });
        }
    }

    pub fn sources(&self) -> &[SourceInfo] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn find(&self, kind: SourceKind, id: u32) -> Option<&SourceInfo> {
        self.sources.iter().find(|s| s.kind == kind && s.id == id)
    }

    /// Lookup by a free-text id such as `"cam2"`; see [`normalize_source_id`].
    pub fn find_by_label(&self, kind: SourceKind, label: &str) -> Option<&SourceInfo> {
        self.find(kind, normalize_source_id(label))
    }

    pub fn find_strict(
        &self,
        notes: &dyn NotesSink,
        kind: SourceKind,
        label: &str,
    ) -> Option<&SourceInfo> {
        let source = self.find_by_label(kind, label);
        if source.is_none() {
            warn(notes, format!("Invalid source \"{label}\" of type \"{kind}\""));
        }
        source
    }

    /// Resolve a short name: leading `k`/`c` is a camera, `r` a remote.
    pub fn find_by_name(&self, notes: &dyn NotesSink, name: &str) -> Option<&SourceInfo> {
        let name = name.to_lowercase();
        match name.chars().next() {
            Some('k' | 'c') => self.find_strict(notes, SourceKind::Camera, &name),
            Some('r') => self.find_strict(notes, SourceKind::Remote, &name),
            _ => {
                warn(notes, format!("Invalid source name \"{name}\""));
                None
            }
        }
    }

    /// Switcher input for a short name, or [`SwitcherInput::UNRESOLVED`].
    pub fn resolve_input(&self, notes: &dyn NotesSink, name: &str) -> SwitcherInput {
        self.find_by_name(notes, name)
            .map(|s| s.port)
            .unwrap_or(SwitcherInput::UNRESOLVED)
    }

    /// Switcher input a piece goes to air on: clips on the clip server, graphics on the
    /// graphics server, live sources through their short name.
    pub fn input_for_piece(
        &self,
        notes: &dyn NotesSink,
        switcher: &SwitcherSources,
        piece: &Piece,
    ) -> SwitcherInput {
        match &piece.kind {
            PieceKind::Video { .. } => switcher.clip_server,
            PieceKind::Graphic { .. } => switcher.graphics_server,
            PieceKind::Camera { camera } => self.resolve_input(notes, camera),
            PieceKind::Remote { source } => self.resolve_input(notes, source),
            other => {
                warn(
                    notes,
                    format!(
                        "No switcher input for objectType '{}' on piece: '{}'",
                        other.object_type(),
                        piece.label()
                    ),
                );
                SwitcherInput::UNRESOLVED
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sources/registry.rs"]
mod tests;
