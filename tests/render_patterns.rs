//! Rendering tests — render patterns to SVG and check diagram structure.

use chordlib::{parse_pattern, render_diagram, render_pattern_to_svg, render_text_to_svg, select_viewport};
use std::path::PathBuf;

fn output_dir() -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_output");
    std::fs::create_dir_all(&dir).ok();
    dir
}

/// Filled fretted-note points are the only elements ending this way.
fn filled_point_count(svg: &str) -> usize {
    svg.matches(r##"fill="#14110e"/>"##).count()
}

fn open_mark_count(svg: &str) -> usize {
    svg.matches(r#"<circle"#)
        .count()
        .saturating_sub(filled_point_count(svg))
}

#[test]
fn render_open_chord_svg() {
    let svg = render_text_to_svg("x32010", None, None, None).expect("Failed to render x32010");

    // Basic SVG structure checks
    assert!(svg.starts_with("<svg"), "Output should be SVG");
    assert!(svg.contains("</svg>"), "SVG should be closed");
    assert!(svg.contains("viewBox="), "SVG should have viewBox");
    assert!(svg.contains("<line"), "SVG should contain lines (strings and frets)");

    // x32010: three fretted points, two open marks, one muted cross
    assert_eq!(filled_point_count(&svg), 3);
    assert_eq!(open_mark_count(&svg), 2);
    // 6 strings + 6 fret lines + 2 strokes of the muted cross
    assert_eq!(svg.matches("<line").count(), 14);

    // The window starts at the nut: thick top line, no fret label
    assert!(svg.contains(r#"stroke-width="12.0""#), "Nut should be drawn thick");
    assert!(!svg.contains("<text"), "No fret label at the nut");

    let out = output_dir().join("do-mayor.svg");
    std::fs::write(&out, &svg).expect("Failed to write SVG");
    println!("✓ Rendered do-mayor.svg ({} bytes)", svg.len());
    println!("  Output: {}", out.display());
}

#[test]
fn render_high_position_chord_has_fret_label() {
    // {5, 7}: window [5, 9], away from the nut
    let svg = render_text_to_svg("x x 5 7 7 5", None, None, None).expect("Failed to render");

    assert!(svg.contains(">5fr<"), "Should label the starting fret");
    assert!(
        !svg.contains(r#"stroke-width="12.0""#),
        "No nut away from fret 1"
    );

    let out = output_dir().join("posicion-alta.svg");
    std::fs::write(&out, &svg).expect("Failed to write SVG");
    println!("✓ Rendered posicion-alta.svg ({} bytes)", svg.len());
}

#[test]
fn off_window_frets_are_omitted() {
    // {2, 9} spans more than the window: [5, 9] keeps only the fret-9 point
    let pattern = parse_pattern("x x 2 9 x x").unwrap();
    let viewport = select_viewport(&pattern);
    assert_eq!((viewport.start_fret, viewport.end_fret), (5, 9));

    let svg = render_pattern_to_svg(&pattern, None, None, None);
    assert_eq!(
        filled_point_count(&svg),
        1,
        "Only the fret inside the window gets a point"
    );
}

#[test]
fn rendering_is_idempotent() {
    let pattern = parse_pattern("022100").unwrap();
    let first = render_pattern_to_svg(&pattern, None, None, None);
    let second = render_pattern_to_svg(&pattern, None, None, None);
    assert_eq!(first, second);

    // The convenience text entry point goes through the same pass
    let third = render_text_to_svg("022100", None, None, None).unwrap();
    assert_eq!(first, third);
}

#[test]
fn explicit_viewport_matches_selected_one() {
    let pattern = parse_pattern("320003").unwrap();
    let viewport = select_viewport(&pattern);
    let direct = render_diagram(&pattern, &viewport, None, None, None);
    let automatic = render_pattern_to_svg(&pattern, None, None, None);
    assert_eq!(direct, automatic);
}

#[test]
fn pixel_ratio_scales_output_dimensions() {
    let svg = render_text_to_svg("x02210", Some(300.0), Some(400.0), Some(2.0)).unwrap();

    // Logical coordinates stay in the viewBox; the output size doubles
    assert!(svg.contains(r#"viewBox="0 0 300 400""#), "viewBox in logical units");
    assert!(svg.contains(r#"width="600""#), "width scaled by pixel ratio");
    assert!(svg.contains(r#"height="800""#), "height scaled by pixel ratio");
}

#[test]
fn default_dimensions_apply_when_unset() {
    let pattern = parse_pattern("xxxxxx").unwrap();
    let svg = render_pattern_to_svg(&pattern, None, None, None);
    assert!(svg.contains(r#"viewBox="0 0 420 520""#));

    // 0.0 from FFI means "use the default" as well
    let from_zero = render_pattern_to_svg(&pattern, Some(0.0), Some(0.0), Some(0.0));
    assert_eq!(svg, from_zero);
}
