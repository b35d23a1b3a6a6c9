//! Crop-shape path construction
//!
//! Builds the closed outline of a rounded panel whose top-center edge is
//! cropped by a notch. Two treatments are supported:
//!
//! ```text
//!   ╭──╮  ⌣  ╭──╮      circular: a shallow arc dips below the top edge
//!   │        ╰──│
//!
//!   ╭──╮  ⌄  ╭──╮      triangular: two shoulders meet at an apex
//!   │        ╰──│
//! ```
//!
//! Both variants share the same skeleton: rounded top-right corner, straight
//! right/bottom/left edges, rounded top-left corner, closed back to the
//! start. Only the top-center treatment differs, so the segment list is a
//! fixed function of the variant.
//!
//! Radii are taken as-is. A crop or corner radius larger than the rectangle
//! produces a self-intersecting but still well-formed closed path; clamping
//! is the caller's call, not ours.

use std::f32::consts::PI;

use notchpane_core::{LineCap, Path, Rect, Stroke};

// =============================================================================
// Crop Configuration
// =============================================================================

/// Anchor positions for the crop notch
///
/// Reserved. Only [`CropAnchor::CenterTop`] is implemented; path
/// construction currently ignores the anchor and always crops the
/// top-center edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CropAnchor {
    TopLeft,
    #[default]
    CenterTop,
    TopRight,
    CenterRight,
    BottomRight,
    CenterBottom,
    BottomLeft,
    CenterLeft,
}

/// Geometry snapshot for one path build
///
/// Captured once per draw cycle; the build never observes mutation
/// mid-flight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropShape {
    /// Radius used to round the top-left and top-right corners
    pub corner_radius: f32,
    /// Radius of the top-center notch
    pub crop_radius: f32,
    /// Outline width; also insets the path from the rectangle edges
    pub line_width: f32,
    /// true = circular-arc notch, false = triangular notch
    pub circular_crop: bool,
    /// Round line caps instead of butt caps
    pub round_cap: bool,
    /// Dash the outline with an even on/off pattern
    pub dashed: bool,
}

impl Default for CropShape {
    fn default() -> Self {
        Self {
            corner_radius: 5.0,
            crop_radius: 0.0,
            line_width: 0.0,
            circular_crop: true,
            round_cap: false,
            dashed: false,
        }
    }
}

impl CropShape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the corner radius
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Set the notch radius
    pub fn crop_radius(mut self, radius: f32) -> Self {
        self.crop_radius = radius;
        self
    }

    /// Set the outline width
    pub fn line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }

    /// Select the circular (true) or triangular (false) notch
    pub fn circular(mut self, circular: bool) -> Self {
        self.circular_crop = circular;
        self
    }

    /// Use round line caps
    pub fn round_cap(mut self, round: bool) -> Self {
        self.round_cap = round;
        self
    }

    /// Dash the outline
    pub fn dashed(mut self, dashed: bool) -> Self {
        self.dashed = dashed;
        self
    }
}

// =============================================================================
// Path Building
// =============================================================================

/// Fraction of π trimmed from each end of the notch arc sweep
const NOTCH_SWEEP_TRIM: f32 = 0.07;

/// Vertical bias of the notch arc center, per unit crop radius
const NOTCH_CENTER_BIAS: f32 = 0.64;

/// Horizontal shoulder spread of the triangular notch, per unit crop radius
const APEX_SPREAD: f32 = 0.6;

/// Apex drop of the triangular notch, per unit crop radius
const APEX_DEPTH: f32 = 0.4;

/// Build the closed crop outline for `bounds`
///
/// The path walks clockwise from left of the notch: notch treatment, top
/// edge, rounded top-right corner, right edge, bottom edge, left edge,
/// rounded top-left corner, close.
///
/// Segment list (circular): move, arc, line, arc, line, line, line, arc,
/// close. The triangular variant swaps the notch arc for two lines.
pub fn build_crop_path(bounds: Rect, shape: &CropShape) -> Path {
    let lw = shape.line_width;
    let crop = shape.crop_radius;
    let corner = shape.corner_radius;

    let path = if shape.circular_crop {
        Path::new()
            .move_to(bounds.mid_x() - lw - crop, bounds.min_y())
            .arc(
                bounds.mid_x(),
                bounds.min_y() + lw + crop * NOTCH_CENTER_BIAS - crop,
                crop + lw,
                PI - PI * NOTCH_SWEEP_TRIM,
                PI * NOTCH_SWEEP_TRIM,
                false,
            )
    } else {
        Path::new()
            .move_to(bounds.mid_x() - lw - crop * APEX_SPREAD, bounds.min_y())
            .line_to(bounds.mid_x(), bounds.min_y() + crop * APEX_DEPTH)
            .line_to(bounds.mid_x() + lw + crop * APEX_SPREAD, bounds.min_y())
    };

    path.line_to(bounds.max_x() - lw - corner, bounds.min_y())
        .arc(
            bounds.max_x() - lw - corner,
            bounds.min_y() + corner,
            corner,
            3.0 * PI / 2.0,
            0.0,
            true,
        )
        .line_to(bounds.max_x() - lw, bounds.max_y())
        .line_to(bounds.min_x() + lw, bounds.max_y())
        .line_to(bounds.min_x() + lw, bounds.min_y() + lw + corner)
        .arc(
            bounds.min_x() + lw + corner,
            bounds.min_y() + corner,
            corner,
            PI,
            PI + PI / 2.0,
            true,
        )
        .close()
}

/// Stroke decoration for the crop outline
///
/// Dashing uses an even `[line_width, line_width]` on/off pattern with zero
/// phase; caps are round when `round_cap` is set, butt otherwise.
pub fn stroke_style(shape: &CropShape) -> Stroke {
    let mut stroke = Stroke::new(shape.line_width).with_cap(if shape.round_cap {
        LineCap::Round
    } else {
        LineCap::Butt
    });
    if shape.dashed {
        stroke = stroke.with_dash(vec![shape.line_width, shape.line_width], 0.0);
    }
    stroke
}

// =============================================================================
// Tests
// =============================================================================
