//! Screen metrics
//!
//! Logical screen dimensions used to derive size defaults. Hosts should
//! construct this from their windowing layer; the default matches a common
//! phone-class viewport.

/// Logical screen dimensions and scale factor
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenMetrics {
    /// Logical width in points
    pub width: f32,
    /// Logical height in points
    pub height: f32,
    /// Device pixel ratio
    pub scale: f32,
}

impl ScreenMetrics {
    pub const fn new(width: f32, height: f32, scale: f32) -> Self {
        Self {
            width,
            height,
            scale,
        }
    }

    /// Logical width in points
    pub fn logical_width(&self) -> f32 {
        self.width
    }

    /// Width in physical pixels
    pub fn physical_width(&self) -> f32 {
        self.width * self.scale
    }

    /// Default crop radius for pane elements: 5% of the logical width
    pub fn default_crop_radius(&self) -> f32 {
        self.width * 0.05
    }
}

impl Default for ScreenMetrics {
    fn default() -> Self {
        Self::new(390.0, 844.0, 3.0)
    }
}
