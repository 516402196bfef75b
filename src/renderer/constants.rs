//! Shared constants for the diagram renderer (all in SVG user units).

// ── Surface & margins ───────────────────────────────────────────────
pub(super) const DEFAULT_SURFACE_WIDTH: f64 = 420.0;
pub(super) const DEFAULT_SURFACE_HEIGHT: f64 = 520.0;
pub(super) const BOARD_MARGIN_LEFT: f64 = 62.0; // leaves room for the "Nfr" label
pub(super) const BOARD_MARGIN_RIGHT: f64 = 32.0;
pub(super) const BOARD_TOP: f64 = 78.0;
pub(super) const BOARD_MARGIN_BOTTOM: f64 = 30.0;
pub(super) const MARKER_ROW_Y: f64 = 40.0; // open/muted marks above the board

// ── Lines ───────────────────────────────────────────────────────────
pub(super) const LINE_WIDTH: f64 = 4.0;
pub(super) const NUT_WIDTH: f64 = 12.0;

// ── Markers ─────────────────────────────────────────────────────────
pub(super) const POINT_RADIUS_MAX: f64 = 18.0;
pub(super) const POINT_RADIUS_FACTOR: f64 = 0.31; // of string spacing
pub(super) const MARK_RADIUS_MIN: f64 = 9.0;
pub(super) const MARK_RADIUS_FACTOR: f64 = 0.58; // of point radius
pub(super) const MUTED_MARK_SIZE: f64 = 16.0;

// ── Fret label ──────────────────────────────────────────────────────
pub(super) const FRET_LABEL_SIZE: f64 = 24.0;
pub(super) const FRET_LABEL_OFFSET_X: f64 = 54.0; // left of the board edge
pub(super) const FRET_LABEL_DEPTH: f64 = 0.45; // of fret spacing, below the top line

// ── Colors ──────────────────────────────────────────────────────────
pub(super) const BACKGROUND_COLOR: &str = "#fcf7ee";
pub(super) const INK_COLOR: &str = "#14110e";
pub(super) const FRET_LABEL_COLOR: &str = "#9a5732";
