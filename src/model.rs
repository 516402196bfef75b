//! Data model for chord fingering patterns and the fretboard viewport.
//!
//! These structures capture the information needed to lay out and render
//! a chord diagram: what each string plays, and which slice of the neck
//! the diagram currently shows.

use serde::{Deserialize, Serialize};

/// Number of strings on the instrument.
pub const STRING_COUNT: usize = 6;

/// Height of the display window, in frets.
pub const FRETS_VISIBLE: u32 = 5;

/// What a single string plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fingering {
    /// The string is not played at all.
    Muted,
    /// The string is played without pressing any fret.
    Open,
    /// The string is pressed at the given fret (1-based).
    Fretted(u32),
}

impl Fingering {
    /// The fret number if this string is fretted.
    pub fn fret(&self) -> Option<u32> {
        match self {
            Fingering::Fretted(n) => Some(*n),
            _ => None,
        }
    }
}

/// A complete fingering pattern: one value per string, ordered from
/// string 6 (lowest pitch) to string 1 (highest pitch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    fingerings: [Fingering; STRING_COUNT],
}

impl Pattern {
    /// Build a pattern from per-string fingerings in string 6 → 1 order.
    pub fn new(fingerings: [Fingering; STRING_COUNT]) -> Self {
        Self { fingerings }
    }

    /// Fingerings in string 6 → string 1 order.
    pub fn fingerings(&self) -> &[Fingering; STRING_COUNT] {
        &self.fingerings
    }

    /// Iterate as (string number, fingering), string 6 first.
    pub fn strings(&self) -> impl Iterator<Item = (u32, Fingering)> + '_ {
        self.fingerings
            .iter()
            .enumerate()
            .map(|(i, f)| (STRING_COUNT as u32 - i as u32, *f))
    }

    /// All fretted fret numbers in the pattern (Open and Muted excluded).
    pub fn fretted_frets(&self) -> impl Iterator<Item = u32> + '_ {
        self.fingerings.iter().filter_map(Fingering::fret)
    }
}

/// The contiguous slice of the neck a diagram displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    /// First visible fret (1-based, inclusive).
    pub start_fret: u32,
    /// Last visible fret (inclusive). `start_fret + FRETS_VISIBLE - 1`
    /// for every window a pattern can produce.
    pub end_fret: u32,
}

impl Viewport {
    /// Whether a fret falls inside the window.
    pub fn contains(&self, fret: u32) -> bool {
        fret >= self.start_fret && fret <= self.end_fret
    }

    /// Whether the nut (the fret-0 boundary) is visible.
    pub fn shows_nut(&self) -> bool {
        self.start_fret == 1
    }
}
