//! chordlib — chord pattern parser and fretboard diagram rendering library
//! for Acordes.
//!
//! Takes a compact textual pattern ("x32010", "x 3 2 0 1 0") describing
//! what each of the six strings plays, and renders a fretboard diagram as
//! a self-contained SVG string.
//!
//! # Example
//! ```
//! use chordlib::{describe_pattern, parse_pattern, render_pattern_to_svg};
//!
//! let pattern = parse_pattern("x32010").unwrap();
//! let svg = render_pattern_to_svg(&pattern, None, None, None);
//! assert!(svg.starts_with("<svg"));
//! for line in describe_pattern(&pattern) {
//!     println!("{line}");
//! }
//! ```

pub mod labels;
pub mod mapping;
pub mod model;
pub mod parser;
pub mod presets;
pub mod renderer;
pub mod viewport;

#[cfg(target_os = "android")]
pub mod android;

pub use mapping::describe_pattern;
pub use model::*;
pub use parser::parse_pattern;
pub use presets::{Preset, PRESETS};
pub use renderer::{render_diagram, render_pattern_to_svg};
pub use viewport::select_viewport;

/// Parse pattern text and render it directly to SVG.
///
/// Convenience function combining the full parse → viewport → render pass
/// that a host runs on every submit, preset press, or surface resize.
pub fn render_text_to_svg(
    raw: &str,
    width: Option<f64>,
    height: Option<f64>,
    pixel_ratio: Option<f64>,
) -> Result<String, String> {
    let pattern = parse_pattern(raw)?;
    Ok(render_pattern_to_svg(&pattern, width, height, pixel_ratio))
}

/// Convert a pattern to a JSON string.
/// Useful for passing data across FFI boundaries.
pub fn pattern_to_json(pattern: &Pattern) -> Result<String, String> {
    serde_json::to_string_pretty(pattern).map_err(|e| format!("JSON serialization error: {e}"))
}

/// Parse pattern text and describe it as a JSON array of display lines.
pub fn describe_text_to_json(raw: &str) -> Result<String, String> {
    let pattern = parse_pattern(raw)?;
    serde_json::to_string(&describe_pattern(&pattern))
        .map_err(|e| format!("JSON serialization error: {e}"))
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Parse pattern text and return the rendered SVG as a C string.
/// The caller must free the returned string with `chordlib_free_string`.
///
/// `width`/`height` set the logical surface size; `pixel_ratio` scales the
/// output dimensions. Pass 0.0 to use the defaults.
///
/// # Safety
/// `pattern` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn chordlib_render_pattern(
    pattern: *const c_char,
    width: f64,
    height: f64,
    pixel_ratio: f64,
) -> *mut c_char {
    if pattern.is_null() {
        return std::ptr::null_mut();
    }
    let c_str = unsafe { CStr::from_ptr(pattern) };
    let raw = match c_str.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    let w = if width > 0.0 { Some(width) } else { None };
    let h = if height > 0.0 { Some(height) } else { None };
    let r = if pixel_ratio > 0.0 { Some(pixel_ratio) } else { None };

    match render_text_to_svg(raw, w, h, r) {
        Ok(svg) => CString::new(svg).unwrap_or_default().into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Parse pattern text and return the description lines as a JSON array
/// C string. The caller must free the result with `chordlib_free_string`.
///
/// # Safety
/// `pattern` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn chordlib_describe_pattern(pattern: *const c_char) -> *mut c_char {
    if pattern.is_null() {
        return std::ptr::null_mut();
    }
    let c_str = unsafe { CStr::from_ptr(pattern) };
    let raw = match c_str.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    match describe_text_to_json(raw) {
        Ok(json) => CString::new(json).unwrap_or_default().into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Validate pattern text. Returns null when the pattern is valid, or the
/// user-facing error message otherwise (free it with
/// `chordlib_free_string`). A null `pattern` is treated as empty input.
///
/// # Safety
/// `pattern`, when non-null, must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn chordlib_validate_pattern(pattern: *const c_char) -> *mut c_char {
    let raw = if pattern.is_null() {
        ""
    } else {
        match unsafe { CStr::from_ptr(pattern) }.to_str() {
            Ok(s) => s,
            Err(_) => return std::ptr::null_mut(),
        }
    };

    match parse_pattern(raw) {
        Ok(_) => std::ptr::null_mut(),
        Err(message) => CString::new(message).unwrap_or_default().into_raw(),
    }
}

/// Free a string previously returned by chordlib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a chordlib function, or null.
#[no_mangle]
pub unsafe extern "C" fn chordlib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
