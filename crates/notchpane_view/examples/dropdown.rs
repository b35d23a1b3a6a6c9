//! Headless demo: render two notched panes into a recording context and
//! log the command stream a backend would consume.
//!
//! Run with `cargo run -p notchpane_view --example dropdown`.

use notchpane_core::{Color, DrawCommand, DrawContext, Gradient, Point, Rect, RecordingContext};
use notchpane_theme::tokens;
use notchpane_view::prelude::*;

fn main() {
    tracing_subscriber::fmt().init();

    let viewport = Rect::new(0.0, 0.0, 320.0, 400.0);
    let bounds = Rect::new(0.0, 0.0, 320.0, 180.0);
    let mut ctx = RecordingContext::new(viewport.size);

    // Backdrop
    ctx.fill_rect(viewport, 0.0.into(), tokens().surface.into());

    // Circular notch, dashed outline
    let dropdown = notch_pane()
        .crop_radius(24.0)
        .corner_radius(12.0)
        .line_width(2.0)
        .dashed(true);
    dropdown.render(&mut ctx, bounds);

    // Triangular notch with a gradient brush
    let banner = notch_pane()
        .circular_crop(false)
        .crop_radius(18.0)
        .corner_radius(8.0)
        .line_color(Gradient::linear(
            Point::new(0.0, 200.0),
            Point::new(0.0, 380.0),
            Color::from_hex(0x007AFF),
            Color::from_hex(0x5AC8FA),
        ));
    banner.render(&mut ctx, Rect::new(0.0, 200.0, 320.0, 180.0));

    tracing::info!(viewport = ?ctx.viewport(), commands = ctx.commands().len(), "recorded");
    for cmd in ctx.commands() {
        match cmd {
            DrawCommand::PushClip(shape) => tracing::info!(?shape, "push clip"),
            DrawCommand::PopClip => tracing::info!("pop clip"),
            DrawCommand::FillPath { path, .. } => {
                tracing::info!(segments = path.commands().len(), "fill path")
            }
            DrawCommand::StrokePath { stroke, .. } => {
                tracing::info!(width = stroke.width, dashed = stroke.is_dashed(), "stroke path")
            }
            DrawCommand::FillRect { rect, .. } => tracing::info!(?rect, "fill rect"),
        }
    }
}
