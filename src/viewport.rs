//! Viewport selection — picks which 5-fret slice of the neck to display.

use crate::model::{Pattern, Viewport, FRETS_VISIBLE};

/// Select the display window for a pattern.
///
/// The window always covers the highest fretted note. When the fretted
/// notes span more than the window height, the window shifts up and the
/// lowest ones fall outside; the renderer omits their markers.
pub fn select_viewport(pattern: &Pattern) -> Viewport {
    let mut frets = pattern.fretted_frets();
    let first = match frets.next() {
        Some(fret) => fret,
        None => {
            // Nothing fretted: show the nut position.
            return Viewport {
                start_fret: 1,
                end_fret: FRETS_VISIBLE,
            };
        }
    };
    let (min_fret, max_fret) = frets.fold((first, first), |(lo, hi), f| (lo.min(f), hi.max(f)));

    let mut start_fret = if min_fret <= 1 { 1 } else { min_fret };
    if max_fret > start_fret.saturating_add(FRETS_VISIBLE - 1) {
        start_fret = max_fret - (FRETS_VISIBLE - 1);
    }

    Viewport {
        start_fret,
        end_fret: start_fret.saturating_add(FRETS_VISIBLE - 1),
    }
}
