//! The NotchPane element
//!
//! A decorative panel outline: a rounded rectangle whose top-center edge is
//! cropped by a circular or triangular notch. The pane owns no geometry
//! between draws; it is a bag of visual properties that renders a fresh
//! [`Path`] into the host's [`DrawContext`] each cycle.
//!
//! Property mutation raises a needs-redraw flag that the host polls —
//! the pane never reaches into the host's layout or invalidation machinery.
//!
//! # Example
//!
//! ```
//! use notchpane_core::{Rect, RecordingContext, Size};
//! use notchpane_view::prelude::*;
//!
//! let pane = notch_pane()
//!     .crop_radius(24.0)
//!     .corner_radius(12.0)
//!     .line_width(2.0)
//!     .dashed(true);
//!
//! let mut ctx = RecordingContext::new(Size::new(320.0, 180.0));
//! pane.render(&mut ctx, Rect::new(0.0, 0.0, 320.0, 180.0));
//! assert!(!ctx.commands().is_empty());
//! ```

use tracing::trace;

use notchpane_core::{Brush, ClipShape, DrawContext, Rect};
use notchpane_theme::{tokens, ScreenMetrics};

use crate::shape::{build_crop_path, stroke_style, CropAnchor, CropShape};

// =============================================================================
// NotchPane Element
// =============================================================================

/// A rounded panel outline with a center-crop notch
pub struct NotchPane {
    /// Brush for the outline fill and stroke
    pub(crate) line_color: Brush,
    /// Outline width; 0 fills only
    pub(crate) line_width: f32,
    /// Reserved; the geometry does not consult it
    pub(crate) clockwise: bool,
    /// true = circular-arc notch, false = triangular notch
    pub(crate) circular_crop: bool,
    /// Round line caps on the stroked outline
    pub(crate) round_cap: bool,
    /// Dash the stroked outline
    pub(crate) dashed: bool,
    /// Radius of the top-center notch
    pub(crate) crop_radius: f32,
    /// Radius rounding the top corners and the host-side clip
    pub(crate) corner_radius: f32,
    /// Reserved; only the center-top anchor is implemented
    pub(crate) anchor: CropAnchor,

    needs_redraw: bool,
}

impl Default for NotchPane {
    fn default() -> Self {
        Self::with_metrics(ScreenMetrics::default())
    }
}

impl NotchPane {
    /// Create a pane with default styling
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pane whose crop radius defaults from the given screen
    pub fn with_metrics(metrics: ScreenMetrics) -> Self {
        Self {
            line_color: tokens().font_white.into(),
            line_width: 0.0,
            clockwise: true,
            circular_crop: true,
            round_cap: false,
            dashed: false,
            crop_radius: metrics.default_crop_radius(),
            corner_radius: 5.0,
            anchor: CropAnchor::default(),
            needs_redraw: true,
        }
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Set the outline brush
    pub fn line_color(mut self, brush: impl Into<Brush>) -> Self {
        self.line_color = brush.into();
        self
    }

    /// Set the outline width
    pub fn line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }

    /// Set the reserved winding hint
    pub fn clockwise(mut self, clockwise: bool) -> Self {
        self.clockwise = clockwise;
        self
    }

    /// Select the circular (true) or triangular (false) notch
    pub fn circular_crop(mut self, circular: bool) -> Self {
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

    /// Set the notch radius
    pub fn crop_radius(mut self, radius: f32) -> Self {
        self.crop_radius = radius;
        self
    }

    /// Set the corner radius
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Set the reserved crop anchor
    pub fn anchor(mut self, anchor: CropAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    // =========================================================================
    // Mutators
    // =========================================================================
    // Each mutation raises the needs-redraw flag; the host polls it and
    // schedules its own redraw.

    /// Change the outline brush
    pub fn set_line_color(&mut self, brush: impl Into<Brush>) {
        self.line_color = brush.into();
        self.needs_redraw = true;
    }

    /// Change the outline width
    pub fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
        self.needs_redraw = true;
    }

    /// Switch between circular and triangular notch
    pub fn set_circular_crop(&mut self, circular: bool) {
        self.circular_crop = circular;
        self.needs_redraw = true;
    }

    /// Change the round-cap setting
    pub fn set_round_cap(&mut self, round: bool) {
        self.round_cap = round;
        self.needs_redraw = true;
    }

    /// Change the dash setting
    pub fn set_dashed(&mut self, dashed: bool) {
        self.dashed = dashed;
        self.needs_redraw = true;
    }

    /// Change the notch radius
    pub fn set_crop_radius(&mut self, radius: f32) {
        self.crop_radius = radius;
        self.needs_redraw = true;
    }

    /// Change the corner radius
    pub fn set_corner_radius(&mut self, radius: f32) {
        self.corner_radius = radius;
        self.needs_redraw = true;
    }

    /// Whether a property changed since the last draw
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Read and clear the needs-redraw flag
    pub fn take_needs_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Snapshot the geometry configuration for one path build
    pub fn shape(&self) -> CropShape {
        CropShape {
            corner_radius: self.corner_radius,
            crop_radius: self.crop_radius,
            line_width: self.line_width,
            circular_crop: self.circular_crop,
            round_cap: self.round_cap,
            dashed: self.dashed,
        }
    }

    /// Draw the pane into `bounds`
    ///
    /// Clips to the rounded bounds, fills the crop outline with the line
    /// brush, and strokes it when the line width is positive. Pure with
    /// respect to the pane's configuration: identical (configuration,
    /// bounds) pairs record identical command sequences.
    pub fn render(&self, ctx: &mut dyn DrawContext, bounds: Rect) {
        trace!(
            circular = self.circular_crop,
            crop_radius = self.crop_radius,
            "building crop path"
        );

        ctx.push_clip(ClipShape::rounded_rect(bounds, self.corner_radius));

        let shape = self.shape();
        let path = build_crop_path(bounds, &shape);
        ctx.fill_path(&path, self.line_color.clone());
        if self.line_width > 0.0 {
            ctx.stroke_path(&path, &stroke_style(&shape), self.line_color.clone());
        }

        ctx.pop_clip();
    }
}

// =============================================================================
// Factory Function
// =============================================================================

/// Create a notch pane with default styling
///
/// # Example
///
/// ```
/// use notchpane_view::prelude::*;
///
/// let pane = notch_pane()
///     .circular_crop(false)
///     .crop_radius(18.0)
///     .corner_radius(10.0);
/// assert!(pane.needs_redraw());
/// ```
pub fn notch_pane() -> NotchPane {
    NotchPane::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use notchpane_core::{Color, CornerRadius, DrawCommand, RecordingContext};

    fn record(pane: &NotchPane, bounds: Rect) -> Vec<DrawCommand> {
        let mut ctx = RecordingContext::new(bounds.size);
        pane.render(&mut ctx, bounds);
        ctx.take_commands()
    }

    #[test]
    fn test_defaults() {
        let pane = notch_pane();
        assert_eq!(pane.line_color, Brush::Solid(tokens().font_white));
        assert_eq!(pane.line_width, 0.0);
        assert!(pane.clockwise);
        assert!(pane.circular_crop);
        assert!(!pane.round_cap);
        assert!(!pane.dashed);
        assert_eq!(
            pane.crop_radius,
            ScreenMetrics::default().default_crop_radius()
        );
        assert_eq!(pane.corner_radius, 5.0);
        assert_eq!(pane.anchor, CropAnchor::CenterTop);
    }

    #[test]
    fn test_metrics_default_radius() {
        let pane = NotchPane::with_metrics(ScreenMetrics::new(400.0, 800.0, 2.0));
        assert_eq!(pane.crop_radius, 20.0);
    }

    #[test]
    fn test_builder_chain() {
        let pane = notch_pane()
            .line_color(Color::BLUE)
            .line_width(2.0)
            .circular_crop(false)
            .round_cap(true)
            .dashed(true)
            .crop_radius(12.0)
            .corner_radius(8.0);

        assert_eq!(pane.line_color, Brush::Solid(Color::BLUE));
        assert!(!pane.circular_crop);
        assert!(pane.round_cap);
        assert!(pane.dashed);
        assert_eq!(pane.crop_radius, 12.0);
        assert_eq!(pane.corner_radius, 8.0);
    }

    #[test]
    fn test_mutation_raises_redraw_flag() {
        let mut pane = notch_pane();
        assert!(pane.take_needs_redraw()); // initial draw pending
        assert!(!pane.needs_redraw());

        pane.set_crop_radius(30.0);
        assert!(pane.needs_redraw());
        assert!(pane.take_needs_redraw());
        assert!(!pane.take_needs_redraw());

        pane.set_dashed(true);
        assert!(pane.needs_redraw());
    }

    #[test]
    fn test_render_fill_only() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        let cmds = record(&notch_pane().crop_radius(5.0), bounds);

        assert_eq!(cmds.len(), 3); // clip, fill, unclip
        assert_eq!(
            cmds[0],
            DrawCommand::PushClip(ClipShape::RoundedRect {
                rect: bounds,
                corner_radius: CornerRadius::uniform(5.0),
            })
        );
        assert!(matches!(cmds[1], DrawCommand::FillPath { .. }));
        assert_eq!(cmds[2], DrawCommand::PopClip);
    }

    #[test]
    fn test_render_strokes_when_line_width_positive() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        let pane = notch_pane().crop_radius(5.0).line_width(2.0).dashed(true);
        let cmds = record(&pane, bounds);

        assert_eq!(cmds.len(), 4); // clip, fill, stroke, unclip
        match &cmds[2] {
            DrawCommand::StrokePath { stroke, .. } => {
                assert_eq!(stroke.width, 2.0);
                assert_eq!(stroke.dash, vec![2.0, 2.0]);
            }
            other => panic!("expected stroke, got {other:?}"),
        }
    }

    #[test]
    fn test_render_fills_crop_path() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        let pane = notch_pane().crop_radius(5.0);
        let cmds = record(&pane, bounds);

        match &cmds[1] {
            DrawCommand::FillPath { path, brush } => {
                assert_eq!(*path, build_crop_path(bounds, &pane.shape()));
                assert_eq!(*brush, pane.line_color);
            }
            other => panic!("expected fill, got {other:?}"),
        }
    }

    #[test]
    fn test_render_is_repeatable() {
        let bounds = Rect::new(0.0, 0.0, 320.0, 180.0);
        let pane = notch_pane().crop_radius(24.0).line_width(1.5);
        assert_eq!(record(&pane, bounds), record(&pane, bounds));
    }

    #[test]
    fn test_reserved_properties_do_not_affect_geometry() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        let a = record(&notch_pane().clockwise(true), bounds);
        let b = record(&notch_pane().clockwise(false), bounds);
        assert_eq!(a, b);

        let c = record(&notch_pane().anchor(CropAnchor::BottomLeft), bounds);
        assert_eq!(a, c);
    }
}
