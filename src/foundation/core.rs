use crate::foundation::error::{SegmixError, SegmixResult};

/// Physical input number a vision mixer uses to select a source.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct SwitcherInput(pub u32);

impl SwitcherInput {
    /// Marker meaning no concrete source was resolved.
    pub const UNRESOLVED: SwitcherInput = SwitcherInput(1000);
    /// The mixer's composite (super source) bus.
    pub const SUPER_SOURCE: SwitcherInput = SwitcherInput(6000);

    pub fn is_resolved(self) -> bool {
        self != Self::UNRESOLVED
    }
}

impl std::fmt::Display for SwitcherInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Output frame dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> SegmixResult<Self> {
        let canvas = Self { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    pub fn validate(self) -> SegmixResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SegmixError::config("canvas width/height must be > 0"));
        }
        Ok(())
    }

    pub fn width_f64(self) -> f64 {
        f64::from(self.width)
    }

    pub fn height_f64(self) -> f64 {
        f64::from(self.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 25, den: 1 }
    }
}

impl Fps {
    pub fn new(num: u32, den: u32) -> SegmixResult<Self> {
        let fps = Self { num, den };
        fps.validate()?;
        Ok(fps)
    }

    pub fn validate(self) -> SegmixResult<()> {
        if self.den == 0 {
            return Err(SegmixError::config("fps den must be > 0"));
        }
        if self.num == 0 {
            return Err(SegmixError::config("fps num must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
