//! SVG builder — accumulates SVG elements and produces the final string.

pub(super) struct SvgBuilder {
    elements: Vec<String>,
    view_width: f64,
    view_height: f64,
    pixel_ratio: f64,
}

impl SvgBuilder {
    pub(super) fn new(view_width: f64, view_height: f64, pixel_ratio: f64) -> Self {
        Self {
            elements: Vec::new(),
            view_width,
            view_height,
            pixel_ratio,
        }
    }

    pub(super) fn build(self) -> String {
        // width/height carry the device-pixel size; the viewBox keeps all
        // drawing coordinates in logical units, so strokes stay crisp on
        // high-density displays.
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{:.0}" height="{:.0}" style="font-family: 'Bricolage Grotesque', sans-serif;">"#,
            self.view_width,
            self.view_height,
            self.view_width * self.pixel_ratio,
            self.view_height * self.pixel_ratio
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    pub(super) fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64) {
        self.elements.push(format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{:.1}" stroke-linecap="round"/>"#,
            x1, y1, x2, y2, color, width
        ));
    }

    pub(super) fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str) {
        self.elements.push(format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
            x, y, w, h, fill
        ));
    }

    pub(super) fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str) {
        self.elements.push(format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"#,
            cx, cy, r, fill
        ));
    }

    pub(super) fn circle_outline(&mut self, cx: f64, cy: f64, r: f64, stroke: &str, width: f64) {
        self.elements.push(format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="none" stroke="{}" stroke-width="{:.1}" stroke-linecap="round"/>"#,
            cx, cy, r, stroke, width
        ));
    }

    /// Two crossing diagonal strokes, for muted-string marks.
    pub(super) fn cross(&mut self, cx: f64, cy: f64, size: f64, color: &str, width: f64) {
        self.line(cx - size, cy - size, cx + size, cy + size, color, width);
        self.line(cx + size, cy - size, cx - size, cy + size, color, width);
    }

    pub(super) fn text(
        &mut self,
        x: f64,
        y: f64,
        content: &str,
        size: f64,
        weight: &str,
        fill: &str,
        anchor: &str,
    ) {
        let escaped = content
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;");
        self.elements.push(format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="{:.0}" font-weight="{}" fill="{}" text-anchor="{}">{}</text>"#,
            x, y, size, weight, fill, anchor, escaped
        ));
    }
}
