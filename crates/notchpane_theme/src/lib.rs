//! Notchpane Theme
//!
//! Named color tokens, hex string conversion, and screen metrics. These are
//! the collaborators the pane element pulls its defaults from: the outline
//! color comes from the token palette and the default crop radius is derived
//! from the screen's logical width.
//!
//! # Example
//!
//! ```
//! use notchpane_theme::{parse_hex, tokens, ScreenMetrics};
//!
//! let palette = tokens();
//! assert_eq!(palette.font_white, parse_hex("#FFFFFF").unwrap());
//!
//! let metrics = ScreenMetrics::default();
//! assert_eq!(metrics.default_crop_radius(), metrics.logical_width() * 0.05);
//! ```

pub mod metrics;
pub mod tokens;

pub use metrics::ScreenMetrics;
pub use tokens::{parse_hex, tokens, ColorTokens, ThemeError};
