//! Per-string markers — muted crosses, open circles, fretted points.

use crate::model::{Fingering, Pattern, Viewport};

use super::constants::*;
use super::layout::BoardLayout;
use super::svg_builder::SvgBuilder;

pub(super) fn render_markers(
    svg: &mut SvgBuilder,
    layout: &BoardLayout,
    pattern: &Pattern,
    viewport: &Viewport,
) {
    for (string_index, fingering) in pattern.fingerings().iter().enumerate() {
        let x = layout.string_x(string_index);
        match *fingering {
            Fingering::Muted => {
                svg.cross(x, MARKER_ROW_Y, MUTED_MARK_SIZE, INK_COLOR, LINE_WIDTH);
            }
            Fingering::Open => {
                svg.circle_outline(x, MARKER_ROW_Y, layout.mark_radius, INK_COLOR, LINE_WIDTH);
            }
            Fingering::Fretted(fret) => {
                // Frets outside the window are silently omitted; viewport
                // selection keeps at least the highest one visible.
                if viewport.contains(fret) {
                    let y = layout.fret_center_y(viewport, fret);
                    svg.circle(x, y, layout.point_radius, INK_COLOR);
                }
            }
        }
    }
}
