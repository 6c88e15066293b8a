use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::{Canvas, Fps, SwitcherInput};
use crate::foundation::error::{SegmixError, SegmixResult};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Studio and show configuration snapshot for one segment build.
///
/// Source maps are kept in their serialized `index:value,index:value` form and parsed
/// by [`crate::SourceRegistry::from_config`] for every segment.
pub struct StudioConfig {
    /// Studio label stamped on composite source configurations.
    #[serde(default = "default_studio_name")]
    pub name: String,
    /// Camera id to switcher input map, e.g. `1:1,2:2`.
    #[serde(default)]
    pub sources_cam: String,
    /// Remote id to switcher input map.
    #[serde(default)]
    pub sources_rm: String,
    /// Camera id to PTZ device name map.
    #[serde(default)]
    pub sources_ptz: String,
    /// Fixed switcher inputs for playout servers.
    #[serde(default)]
    pub switcher: SwitcherSources,
    /// Directory the clip player loads video files from.
    #[serde(default)]
    pub media_directory: String,
    /// Program frame geometry.
    #[serde(default)]
    pub canvas: Canvas,
    /// Program frame rate.
    #[serde(default)]
    pub fps: Fps,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Switcher inputs wired to the playout servers.
pub struct SwitcherSources {
    /// Clip player; also the default live source for composite boxes.
    pub clip_server: SwitcherInput,
    /// Fullscreen graphics player.
    pub graphics_server: SwitcherInput,
}

impl Default for SwitcherSources {
    fn default() -> Self {
        Self {
            clip_server: SwitcherInput(5),
            graphics_server: SwitcherInput(6),
        }
    }
}

impl SwitcherSources {
    pub fn default_live_source(&self) -> SwitcherInput {
        self.clip_server
    }
}

fn default_studio_name() -> String {
    "studio0".to_string()
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            name: default_studio_name(),
            sources_cam: String::new(),
            sources_rm: String::new(),
            sources_ptz: String::new(),
            switcher: SwitcherSources::default(),
            media_directory: String::new(),
            canvas: Canvas::default(),
            fps: Fps::default(),
        }
    }
}

impl StudioConfig {
    pub fn validate(&self) -> SegmixResult<()> {
        self.canvas.validate()?;
        self.fps.validate()?;
        if self.name.trim().is_empty() {
            return Err(SegmixError::config("studio name must be non-empty"));
        }
        if !self.switcher.clip_server.is_resolved()
            || !self.switcher.graphics_server.is_resolved()
        {
            return Err(SegmixError::config(format!(
                "switcher server inputs must not use the unresolved marker {}",
                SwitcherInput::UNRESOLVED
            )));
        }
        Ok(())
    }

    pub fn from_json_str(s: &str) -> SegmixResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> SegmixResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read studio config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/studio.rs"]
mod tests;
