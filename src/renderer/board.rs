//! Board rendering — string lines, fret lines, nut, and the fret label.

use crate::model::{Viewport, FRETS_VISIBLE, STRING_COUNT};

use super::constants::*;
use super::layout::BoardLayout;
use super::svg_builder::SvgBuilder;

pub(super) fn render_strings(svg: &mut SvgBuilder, layout: &BoardLayout) {
    for string_index in 0..STRING_COUNT {
        let x = layout.string_x(string_index);
        svg.line(
            x,
            layout.board_top,
            x,
            layout.board_bottom_y(),
            INK_COLOR,
            LINE_WIDTH,
        );
    }
}

pub(super) fn render_fret_lines(svg: &mut SvgBuilder, layout: &BoardLayout, viewport: &Viewport) {
    for line in 0..=FRETS_VISIBLE {
        let y = layout.fret_line_y(line);
        // The top line doubles as the nut when the window starts at fret 1.
        let width = if line == 0 && viewport.shows_nut() {
            NUT_WIDTH
        } else {
            LINE_WIDTH
        };
        svg.line(layout.board_left, y, layout.board_right_x(), y, INK_COLOR, width);
    }
}

/// Label the starting fret ("3fr") left of the top line when the window
/// does not begin at the nut.
pub(super) fn render_fret_label(svg: &mut SvgBuilder, layout: &BoardLayout, viewport: &Viewport) {
    if viewport.shows_nut() {
        return;
    }
    let label = format!("{}fr", viewport.start_fret);
    let x = layout.board_left - FRET_LABEL_OFFSET_X;
    let y = layout.board_top + layout.fret_spacing * FRET_LABEL_DEPTH;
    svg.text(x, y, &label, FRET_LABEL_SIZE, "700", FRET_LABEL_COLOR, "start");
}
