//! Notchpane View
//!
//! The NotchPane element: a decorative rounded panel outline with a
//! circular or triangular notch cropped into its top-center edge, drawn
//! from vector path primitives.
//!
//! The element is a plain property bag with a builder API. Each draw cycle
//! the host hands it a [`DrawContext`](notchpane_core::DrawContext) and
//! bounds; the pane builds the crop path fresh, fills it, and optionally
//! strokes it. Property mutation raises a needs-redraw flag for the host
//! to poll.
//!
//! # Example
//!
//! ```
//! use notchpane_core::{Rect, RecordingContext, Size};
//! use notchpane_view::prelude::*;
//!
//! // A dashed, triangular-notch pane
//! let pane = notch_pane()
//!     .circular_crop(false)
//!     .crop_radius(18.0)
//!     .corner_radius(10.0)
//!     .line_width(1.5)
//!     .dashed(true);
//!
//! let mut ctx = RecordingContext::new(Size::new(320.0, 180.0));
//! pane.render(&mut ctx, Rect::new(0.0, 0.0, 320.0, 180.0));
//! ```

pub mod pane;
pub mod shape;

pub use pane::{notch_pane, NotchPane};
pub use shape::{build_crop_path, stroke_style, CropAnchor, CropShape};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::pane::{notch_pane, NotchPane};
    pub use crate::shape::{build_crop_path, stroke_style, CropAnchor, CropShape};
}
