//! Preset chord patterns for host applications to bind to quick buttons.

/// A named pattern literal.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    /// Chord name shown on the button.
    pub name: &'static str,
    /// Pattern text, string 6 to string 1.
    pub pattern: &'static str,
}

/// Common open and barre chords. Every entry parses with
/// [`parse_pattern`](crate::parse_pattern).
pub const PRESETS: &[Preset] = &[
    Preset { name: "Mi mayor", pattern: "022100" },
    Preset { name: "Mi menor", pattern: "022000" },
    Preset { name: "La mayor", pattern: "x02220" },
    Preset { name: "La menor", pattern: "x02210" },
    Preset { name: "Re mayor", pattern: "xx0232" },
    Preset { name: "Sol mayor", pattern: "320003" },
    Preset { name: "Do mayor", pattern: "x32010" },
    Preset { name: "Fa mayor", pattern: "133211" },
    Preset { name: "Si7", pattern: "x21202" },
];
