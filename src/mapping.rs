//! Human-readable mapping list — one description line per string.

use crate::labels::{fret_label, string_label};
use crate::model::{Fingering, Pattern};

/// Describe a pattern as display text, one line per string, string 6 first.
pub fn describe_pattern(pattern: &Pattern) -> Vec<String> {
    pattern
        .strings()
        .map(|(string_number, fingering)| {
            let cuerda = string_label(string_number);
            match fingering {
                Fingering::Muted => format!("{cuerda} cuerda: no se toca (x)."),
                Fingering::Open => format!("{cuerda} cuerda: al aire (0)."),
                Fingering::Fretted(fret) => {
                    format!("{} traste de la {cuerda} cuerda.", fret_label(fret))
                }
            }
        })
        .collect()
}
