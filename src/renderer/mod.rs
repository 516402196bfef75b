//! Diagram renderer — converts a fingering `Pattern` into SVG output.
//!
//! The renderer computes its own board geometry from the surface size and
//! produces a self-contained SVG string that can be displayed in any
//! SVG-capable view.

mod board;
mod constants;
mod layout;
mod markers;
mod svg_builder;

use crate::model::{Pattern, Viewport};
use crate::viewport::select_viewport;

use board::{render_fret_label, render_fret_lines, render_strings};
use constants::*;
use layout::compute_layout;
use markers::render_markers;
use svg_builder::SvgBuilder;

/// Render a pattern into a complete SVG string, selecting the display
/// window automatically.
///
/// `width`/`height` set the logical surface size in user units; pass
/// `None` (or 0.0 from FFI) to use the defaults. `pixel_ratio` scales the
/// output dimensions for high-density displays; pass `None` for 1.0.
pub fn render_pattern_to_svg(
    pattern: &Pattern,
    width: Option<f64>,
    height: Option<f64>,
    pixel_ratio: Option<f64>,
) -> String {
    let viewport = select_viewport(pattern);
    render_diagram(pattern, &viewport, width, height, pixel_ratio)
}

/// Render a pattern into SVG with an explicit viewport.
///
/// Pure with respect to its inputs: the same arguments always produce the
/// same string, so re-rendering on resize or re-submission simply replaces
/// the previous surface.
pub fn render_diagram(
    pattern: &Pattern,
    viewport: &Viewport,
    width: Option<f64>,
    height: Option<f64>,
    pixel_ratio: Option<f64>,
) -> String {
    let width = match width {
        Some(w) if w > 0.0 => w,
        _ => DEFAULT_SURFACE_WIDTH,
    };
    let height = match height {
        Some(h) if h > 0.0 => h,
        _ => DEFAULT_SURFACE_HEIGHT,
    };
    let pixel_ratio = match pixel_ratio {
        Some(r) if r > 0.0 => r,
        _ => 1.0,
    };

    let layout = compute_layout(width, height);
    let mut svg = SvgBuilder::new(width, height, pixel_ratio);

    // Background
    svg.rect(0.0, 0.0, width, height, BACKGROUND_COLOR);

    render_strings(&mut svg, &layout);
    render_fret_lines(&mut svg, &layout, viewport);
    render_fret_label(&mut svg, &layout, viewport);
    render_markers(&mut svg, &layout, pattern, viewport);

    svg.build()
}
