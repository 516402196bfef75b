//! Board geometry — maps logical string/fret positions to surface
//! coordinates.

use crate::model::{Viewport, FRETS_VISIBLE, STRING_COUNT};

use super::constants::*;

/// Computed geometry for one render pass.
#[derive(Debug, Clone)]
pub(super) struct BoardLayout {
    pub(super) board_left: f64,
    pub(super) board_top: f64,
    pub(super) board_width: f64,
    pub(super) board_height: f64,
    pub(super) string_spacing: f64,
    pub(super) fret_spacing: f64,
    /// Radius of a filled fretted-note point.
    pub(super) point_radius: f64,
    /// Radius of the hollow open-string mark.
    pub(super) mark_radius: f64,
}

/// Derive the board geometry from the logical surface size.
///
/// Marker radii scale with string spacing but are clamped so they stay
/// legible at any surface size.
pub(super) fn compute_layout(width: f64, height: f64) -> BoardLayout {
    let board_width = width - BOARD_MARGIN_LEFT - BOARD_MARGIN_RIGHT;
    let board_height = height - BOARD_TOP - BOARD_MARGIN_BOTTOM;
    let string_spacing = board_width / (STRING_COUNT as f64 - 1.0);
    let fret_spacing = board_height / f64::from(FRETS_VISIBLE);
    let point_radius = POINT_RADIUS_MAX.min(string_spacing * POINT_RADIUS_FACTOR);
    let mark_radius = MARK_RADIUS_MIN.max(point_radius * MARK_RADIUS_FACTOR);

    BoardLayout {
        board_left: BOARD_MARGIN_LEFT,
        board_top: BOARD_TOP,
        board_width,
        board_height,
        string_spacing,
        fret_spacing,
        point_radius,
        mark_radius,
    }
}

impl BoardLayout {
    /// X coordinate of a string line (index 0 = string 6, leftmost).
    pub(super) fn string_x(&self, string_index: usize) -> f64 {
        self.board_left + string_index as f64 * self.string_spacing
    }

    /// Y coordinate of a horizontal fret line (0 = top line).
    pub(super) fn fret_line_y(&self, line: u32) -> f64 {
        self.board_top + f64::from(line) * self.fret_spacing
    }

    /// Y coordinate of a marker centered inside a visible fret cell.
    pub(super) fn fret_center_y(&self, viewport: &Viewport, fret: u32) -> f64 {
        let cell = f64::from(fret - viewport.start_fret);
        self.board_top + (cell + 0.5) * self.fret_spacing
    }

    pub(super) fn board_right_x(&self) -> f64 {
        self.board_left + self.board_width
    }

    pub(super) fn board_bottom_y(&self) -> f64 {
        self.board_top + self.board_height
    }
}
