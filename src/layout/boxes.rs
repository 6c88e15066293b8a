use crate::foundation::core::Canvas;
use crate::foundation::error::{SegmixError, SegmixResult};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One composite rectangle; `x`/`y` are offsets from frame center.
pub struct BoxProps {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl BoxProps {
    fn new(x: f64, y: f64, size: f64) -> Self {
        Self { x, y, size }
    }
}

/// Source counts with a split layout.
pub const SPLIT_COUNTS: [usize; 3] = [2, 3, 4];

/// Fixed split layouts over half-frame cells.
///
/// - 2: left and right halves
/// - 3: one centered half-width box on top, two quarter boxes below
/// - 4: quarter boxes in a 2x2 grid
pub fn split_boxes(count: usize, canvas: Canvas) -> SegmixResult<Vec<BoxProps>> {
    let bw = canvas.width_f64() / 2.0;
    let bh = canvas.height_f64() / 2.0;

    let boxes = match count {
        2 => vec![BoxProps::new(-bw, bh, bw), BoxProps::new(0.0, bh, bw)],
        3 => vec![
            BoxProps::new(-(bw / 2.0), bh, bw),
            BoxProps::new(-bw, 0.0, bw),
            BoxProps::new(0.0, 0.0, bw),
        ],
        4 => vec![
            BoxProps::new(-bw, bh, bw),
            BoxProps::new(0.0, bh, bw),
            BoxProps::new(-bw, 0.0, bw),
            BoxProps::new(0.0, 0.0, bw),
        ],
        other => return Err(SegmixError::UnsupportedSplitCount(other)),
    };
    Ok(boxes)
}

/// Full-frame background plus a 1/5-scale inset.
pub fn pip_boxes(canvas: Canvas) -> [BoxProps; 2] {
    let w = canvas.width_f64();
    let h = canvas.height_f64();
    [BoxProps::new(w, h, w), BoxProps::new(w / 5.0, h / 5.0, w / 5.0)]
}

#[cfg(test)]
#[path = "../../tests/unit/layout/boxes.rs"]
mod tests;
