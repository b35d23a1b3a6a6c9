//! Paths, strokes, and the draw context
//!
//! A [`Path`] is an ordered sequence of move/line/arc/close commands. Arcs
//! are center-parameterized (center, radius, start/end angle, direction),
//! matching how the crop shapes are specified. Paths are cheap to build and
//! are rebuilt fresh on every draw cycle; the consuming backend owns
//! flattening and tessellation.
//!
//! The [`DrawContext`] trait is the boundary to that backend. The bundled
//! [`RecordingContext`] records commands for deferred execution, which is
//! also how the tests observe what an element drew.

use tracing::warn;

use crate::color::Brush;
use crate::geometry::{CornerRadius, Point, Rect, Size};

// ─────────────────────────────────────────────────────────────────────────────
// Path Types
// ─────────────────────────────────────────────────────────────────────────────

/// Path command for building vector paths
#[derive(Clone, Debug, PartialEq)]
pub enum PathCommand {
    /// Move to a point, starting a new subpath
    MoveTo(Point),
    /// Line to a point
    LineTo(Point),
    /// Circular arc around a center
    Arc {
        center: Point,
        radius: f32,
        /// Start angle in radians
        start_angle: f32,
        /// End angle in radians
        end_angle: f32,
        /// If true, sweep clockwise from start to end
        clockwise: bool,
    },
    /// Close the current subpath
    Close,
}

/// A vector path
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create a new empty path
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Create a path from a vector of commands
    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    /// Move to a point
    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    /// Line to a point
    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    /// Circular arc around a center
    ///
    /// - `cx`, `cy`: Arc center
    /// - `radius`: Arc radius
    /// - `start_angle`, `end_angle`: Angles in radians (0 points along +x)
    /// - `clockwise`: Sweep direction from start to end
    pub fn arc(
        mut self,
        cx: f32,
        cy: f32,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        clockwise: bool,
    ) -> Self {
        self.commands.push(PathCommand::Arc {
            center: Point::new(cx, cy),
            radius,
            start_angle,
            end_angle,
            clockwise,
        });
        self
    }

    /// Close the path
    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Create a rectangle path
    pub fn rect(rect: Rect) -> Self {
        Self::new()
            .move_to(rect.min_x(), rect.min_y())
            .line_to(rect.max_x(), rect.min_y())
            .line_to(rect.max_x(), rect.max_y())
            .line_to(rect.min_x(), rect.max_y())
            .close()
    }

    /// Get the path commands
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Check if the path ends with a Close command
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// The first on-curve point of the path, if any
    pub fn first_point(&self) -> Option<Point> {
        self.commands.first().map(|cmd| match cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => *p,
            PathCommand::Arc {
                center,
                radius,
                start_angle,
                ..
            } => arc_point(*center, *radius, *start_angle),
            PathCommand::Close => Point::ZERO,
        })
    }

    /// The point the pen rests on after the last command
    ///
    /// A Close returns the pen to the start of the current subpath, so a
    /// closed path's last point coincides with its first.
    pub fn last_point(&self) -> Option<Point> {
        let mut current: Option<Point> = None;
        let mut subpath_start: Option<Point> = None;
        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) => {
                    current = Some(*p);
                    subpath_start = Some(*p);
                }
                PathCommand::LineTo(p) => current = Some(*p),
                PathCommand::Arc {
                    center,
                    radius,
                    end_angle,
                    ..
                } => current = Some(arc_point(*center, *radius, *end_angle)),
                PathCommand::Close => current = subpath_start,
            }
        }
        current
    }

    /// Conservative bounding rectangle of this path
    ///
    /// Arcs contribute their full center ± radius box rather than the swept
    /// extremes, so the result may be larger than the tight bounds.
    pub fn bounds(&self) -> Rect {
        if self.commands.is_empty() {
            return Rect::ZERO;
        }

        let mut min_x = f32::INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut max_y = f32::NEG_INFINITY;

        let mut include = |x: f32, y: f32| {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        };

        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => include(p.x, p.y),
                PathCommand::Arc { center, radius, .. } => {
                    include(center.x - radius, center.y - radius);
                    include(center.x + radius, center.y + radius);
                }
                PathCommand::Close => {}
            }
        }

        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}

fn arc_point(center: Point, radius: f32, angle: f32) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Stroke Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Line cap style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    /// Flat cap at the endpoint
    #[default]
    Butt,
    /// Rounded cap extending past the endpoint
    Round,
    /// Square cap extending past the endpoint
    Square,
}

/// Line join style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineJoin {
    /// Miter join (sharp corner)
    #[default]
    Miter,
    /// Round join
    Round,
    /// Bevel join (flat corner)
    Bevel,
}

/// Stroke style configuration
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    /// Line width
    pub width: f32,
    /// Line cap style
    pub cap: LineCap,
    /// Line join style
    pub join: LineJoin,
    /// Miter limit (for Miter joins)
    pub miter_limit: f32,
    /// Dash pattern (empty for solid line)
    pub dash: Vec<f32>,
    /// Dash offset
    pub dash_offset: f32,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            width: 1.0,
            cap: LineCap::Butt,
            join: LineJoin::Miter,
            miter_limit: 4.0,
            dash: Vec::new(),
            dash_offset: 0.0,
        }
    }
}

impl Stroke {
    /// Create a new stroke with the given width
    pub fn new(width: f32) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    /// Set line cap style
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    /// Set line join style
    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }

    /// Set dash pattern
    pub fn with_dash(mut self, pattern: Vec<f32>, offset: f32) -> Self {
        self.dash = pattern;
        self.dash_offset = offset;
        self
    }

    /// Whether a dash pattern is set
    pub fn is_dashed(&self) -> bool {
        !self.dash.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Clip Shapes
// ─────────────────────────────────────────────────────────────────────────────

/// Shape used for clipping subsequent drawing
#[derive(Clone, Debug, PartialEq)]
pub enum ClipShape {
    /// Axis-aligned rectangle clip
    Rect(Rect),
    /// Rounded rectangle clip
    RoundedRect {
        rect: Rect,
        corner_radius: CornerRadius,
    },
}

impl ClipShape {
    /// Create a rectangular clip
    pub fn rect(rect: Rect) -> Self {
        ClipShape::Rect(rect)
    }

    /// Create a rounded rectangle clip
    pub fn rounded_rect(rect: Rect, corner_radius: impl Into<CornerRadius>) -> Self {
        ClipShape::RoundedRect {
            rect,
            corner_radius: corner_radius.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Draw Context
// ─────────────────────────────────────────────────────────────────────────────

/// Unified interface for 2D drawing operations
///
/// Elements describe what to draw through this trait; the backend decides
/// how. Clip pushes and pops must be balanced by the caller.
pub trait DrawContext {
    /// Push a clip shape onto the stack
    fn push_clip(&mut self, shape: ClipShape);

    /// Pop the top clip from the stack
    fn pop_clip(&mut self);

    /// Fill a path with a brush
    fn fill_path(&mut self, path: &Path, brush: Brush);

    /// Stroke a path
    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, brush: Brush);

    /// Fill a rectangle (convenience method)
    fn fill_rect(&mut self, rect: Rect, corner_radius: CornerRadius, brush: Brush);
}

/// A recorded drawing operation
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    PushClip(ClipShape),
    PopClip,
    FillPath {
        path: Path,
        brush: Brush,
    },
    StrokePath {
        path: Path,
        stroke: Stroke,
        brush: Brush,
    },
    FillRect {
        rect: Rect,
        corner_radius: CornerRadius,
        brush: Brush,
    },
}

/// A draw context that records commands for later execution
#[derive(Debug, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    clip_depth: usize,
    viewport: Size,
}

impl RecordingContext {
    /// Create a new recording context
    pub fn new(viewport: Size) -> Self {
        Self {
            commands: Vec::new(),
            clip_depth: 0,
            viewport,
        }
    }

    /// Get the recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        self.clip_depth = 0;
        std::mem::take(&mut self.commands)
    }

    /// Clear all recorded commands
    pub fn clear(&mut self) {
        self.commands.clear();
        self.clip_depth = 0;
    }

    /// The viewport size this context was created with
    pub fn viewport(&self) -> Size {
        self.viewport
    }
}

impl DrawContext for RecordingContext {
    fn push_clip(&mut self, shape: ClipShape) {
        self.commands.push(DrawCommand::PushClip(shape));
        self.clip_depth += 1;
    }

    fn pop_clip(&mut self) {
        if self.clip_depth == 0 {
            warn!("pop_clip with no matching push_clip");
            return;
        }
        self.commands.push(DrawCommand::PopClip);
        self.clip_depth -= 1;
    }

    fn fill_path(&mut self, path: &Path, brush: Brush) {
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            brush,
        });
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, brush: Brush) {
        self.commands.push(DrawCommand::StrokePath {
            path: path.clone(),
            stroke: stroke.clone(),
            brush,
        });
    }

    fn fill_rect(&mut self, rect: Rect, corner_radius: CornerRadius, brush: Brush) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            corner_radius,
            brush,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use std::f32::consts::PI;

    #[test]
    fn test_path_builder() {
        let path = Path::new()
            .move_to(0.0, 0.0)
            .line_to(100.0, 0.0)
            .line_to(100.0, 100.0)
            .line_to(0.0, 100.0)
            .close();

        assert_eq!(path.commands().len(), 5);
        assert!(path.is_closed());
    }

    #[test]
    fn test_path_rect_shortcut() {
        let rect = Path::rect(Rect::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(rect.commands().len(), 5); // move + 3 lines + close
        assert_eq!(rect.first_point(), Some(Point::ZERO));
    }

    #[test]
    fn test_close_returns_to_subpath_start() {
        let path = Path::new()
            .move_to(10.0, 20.0)
            .line_to(50.0, 20.0)
            .line_to(50.0, 60.0)
            .close();
        assert_eq!(path.last_point(), path.first_point());
    }

    #[test]
    fn test_arc_endpoint() {
        // Quarter arc from 3π/2 to 0 around (0, 0): ends at (radius, 0)
        let path = Path::new().arc(0.0, 0.0, 5.0, 3.0 * PI / 2.0, 0.0, true);
        let end = path.last_point().unwrap();
        assert!((end.x - 5.0).abs() < 1e-5);
        assert!(end.y.abs() < 1e-5);
    }

    #[test]
    fn test_path_bounds() {
        let path = Path::new().move_to(10.0, 10.0).line_to(30.0, 40.0);
        let b = path.bounds();
        assert_eq!(b, Rect::new(10.0, 10.0, 20.0, 30.0));

        // Arcs contribute their full box
        let arc = Path::new().arc(0.0, 0.0, 5.0, 0.0, PI, false);
        let ab = arc.bounds();
        assert_eq!(ab, Rect::new(-5.0, -5.0, 10.0, 10.0));
    }

    #[test]
    fn test_empty_path() {
        let path = Path::new();
        assert!(path.is_empty());
        assert!(!path.is_closed());
        assert_eq!(path.first_point(), None);
        assert_eq!(path.last_point(), None);
        assert_eq!(path.bounds(), Rect::ZERO);
    }

    #[test]
    fn test_stroke_configuration() {
        let stroke = Stroke::new(2.0)
            .with_cap(LineCap::Round)
            .with_join(LineJoin::Bevel)
            .with_dash(vec![5.0, 3.0], 0.0);

        assert_eq!(stroke.width, 2.0);
        assert_eq!(stroke.cap, LineCap::Round);
        assert_eq!(stroke.join, LineJoin::Bevel);
        assert!(stroke.is_dashed());
        assert!(!Stroke::new(1.0).is_dashed());
    }

    #[test]
    fn test_recording_context() {
        let mut ctx = RecordingContext::new(Size::new(800.0, 600.0));

        ctx.fill_rect(
            Rect::new(0.0, 0.0, 800.0, 600.0),
            CornerRadius::ZERO,
            Color::GRAY.into(),
        );
        ctx.push_clip(ClipShape::rounded_rect(
            Rect::new(0.0, 0.0, 100.0, 50.0),
            8.0,
        ));
        ctx.fill_path(&Path::rect(Rect::new(0.0, 0.0, 100.0, 50.0)), Color::BLUE.into());
        ctx.stroke_path(
            &Path::rect(Rect::new(0.0, 0.0, 100.0, 50.0)),
            &Stroke::new(1.0),
            Color::WHITE.into(),
        );
        ctx.pop_clip();

        assert_eq!(ctx.commands().len(), 5);

        let taken = ctx.take_commands();
        assert_eq!(taken.len(), 5);
        assert!(ctx.commands().is_empty());
    }

    #[test]
    fn test_unbalanced_pop_is_ignored() {
        let mut ctx = RecordingContext::new(Size::new(100.0, 100.0));
        // Should not panic, and should not record a dangling PopClip
        ctx.pop_clip();
        assert!(ctx.commands().is_empty());
    }
}
