//! Spanish ordinal labels for fret and string numbers.
//!
//! Explicit matches over the ranges a diagram actually shows; numbers
//! outside them fall back to a generic ordinal suffix.

/// Ordinal label for a fret number ("1er", "2do", ... "12vo").
///
/// Frets beyond 12 use the generic "{n}º" form.
pub fn fret_label(fret: u32) -> String {
    let label = match fret {
        1 => "1er",
        2 => "2do",
        3 => "3er",
        4 => "4to",
        5 => "5to",
        6 => "6to",
        7 => "7mo",
        8 => "8vo",
        9 => "9no",
        10 => "10mo",
        11 => "11vo",
        12 => "12vo",
        n => return format!("{n}º"),
    };
    label.to_string()
}

/// Ordinal label for a string number ("1ra" ... "6ta").
///
/// The instrument has six strings; larger numbers use the generic
/// "{n}ta" form.
pub fn string_label(string: u32) -> String {
    let label = match string {
        1 => "1ra",
        2 => "2da",
        3 => "3ra",
        4 => "4ta",
        5 => "5ta",
        6 => "6ta",
        n => return format!("{n}ta"),
    };
    label.to_string()
}
