//! Pattern parser — converts raw pattern text into a fingering `Pattern`.
//!
//! Two input shapes are accepted: a compact per-character string of digits
//! and `x` ("2212xx"), or free-form tokens separated by whitespace, commas,
//! slashes, or hyphens ("x, 3, 2, 0, 1, 0"). Multi-digit fret numbers need
//! the free form.

use crate::model::{Fingering, Pattern, STRING_COUNT};

/// Parse pattern text into a `Pattern`.
///
/// Errors carry the user-facing message shown by the host application.
pub fn parse_pattern(raw: &str) -> Result<Pattern, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Ingresa un patrón de 6 valores, por ejemplo: 2212xx".to_string());
    }

    // Input without any separator is the compact form: one value per
    // character. Everything else splits on separator runs.
    let tokens: Vec<&str> = if raw.contains(is_separator) {
        raw.split(is_separator).filter(|t| !t.is_empty()).collect()
    } else {
        raw.char_indices()
            .map(|(i, c)| &raw[i..i + c.len_utf8()])
            .collect()
    };

    if tokens.len() != STRING_COUNT {
        return Err(
            "El patrón debe tener exactamente 6 valores (de cuerda 6 a cuerda 1).".to_string(),
        );
    }

    let mut fingerings = [Fingering::Muted; STRING_COUNT];
    for (slot, token) in fingerings.iter_mut().zip(&tokens) {
        *slot = parse_token(token)?;
    }

    Ok(Pattern::new(fingerings))
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | '/' | '-')
}

fn parse_token(token: &str) -> Result<Fingering, String> {
    if token.eq_ignore_ascii_case("x") {
        return Ok(Fingering::Muted);
    }
    if !token.chars().all(|c| c.is_ascii_digit()) {
        return Err("Solo se permiten números o x.".to_string());
    }

    // No musical upper bound on fret numbers; digit runs past the u32
    // range saturate, which keeps them far beyond any window.
    let fret = token.parse::<u32>().unwrap_or(u32::MAX);
    Ok(match fret {
        0 => Fingering::Open,
        n => Fingering::Fretted(n),
    })
}
