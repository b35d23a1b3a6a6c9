//! Notchpane Core
//!
//! Foundational types for the notchpane element:
//!
//! - **Geometry**: points, sizes, rectangles, and corner radii
//! - **Color & Brushes**: linear RGBA colors, gradients, and fill brushes
//! - **Paths**: ordered move/line/arc/close command sequences
//! - **Draw Context**: the boundary between shape construction and the
//!   backend that fills or strokes the result
//!
//! The crate is deliberately renderer-agnostic. Shapes are described as
//! [`Path`] values and handed to a [`DrawContext`]; the bundled
//! [`RecordingContext`] records the resulting commands for deferred
//! execution or inspection in tests.
//!
//! # Example
//!
//! ```
//! use notchpane_core::{Color, DrawContext, Path, RecordingContext, Size};
//!
//! let mut ctx = RecordingContext::new(Size::new(320.0, 180.0));
//! let path = Path::new()
//!     .move_to(0.0, 0.0)
//!     .line_to(100.0, 0.0)
//!     .line_to(100.0, 50.0)
//!     .close();
//! ctx.fill_path(&path, Color::WHITE.into());
//! assert_eq!(ctx.commands().len(), 1);
//! ```

pub mod color;
pub mod draw;
pub mod geometry;

pub use color::{Brush, Color, Gradient, GradientStop};
pub use draw::{
    ClipShape, DrawCommand, DrawContext, LineCap, LineJoin, Path, PathCommand, RecordingContext,
    Stroke,
};
pub use geometry::{CornerRadius, Point, Rect, Size};
