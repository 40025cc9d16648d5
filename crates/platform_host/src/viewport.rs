//! Viewport size model and the host source that reports it.

use serde::{Deserialize, Serialize};

/// Inner size of the browser window in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in CSS pixels.
    pub width: i32,
    /// Height in CSS pixels.
    pub height: i32,
}

impl Viewport {
    /// Builds a viewport, flooring negative dimensions at zero.
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width: if width < 0 { 0 } else { width },
            height: if height < 0 { 0 } else { height },
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280, 800)
    }
}

/// Reads the current viewport size.
pub trait ViewportSource {
    /// Returns the viewport as of this call.
    fn viewport(&self) -> Viewport;
}

#[derive(Debug, Clone, Copy, Default)]
/// Source that always reports the same size. Used off-browser and in tests.
pub struct FixedViewportSource(pub Viewport);

impl ViewportSource for FixedViewportSource {
    fn viewport(&self) -> Viewport {
        self.0
    }
}
