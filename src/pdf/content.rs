// Content stream building: drawing operators for the single-page layout.
// Colors arrive as "#RRGGBB" hex strings; text is escaped for the PDF
// literal-string syntax before it is shown.

/// Convert a `#RRGGBB` hex color to a normalized RGB triple in `[0, 1]`.
/// Malformed input falls back to black.
pub fn hex_to_rgb(hex: &str) -> (f64, f64, f64) {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return (0.0, 0.0, 0.0);
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map(|v| f64::from(v) / 255.0);
    match (channel(0), channel(2), channel(4)) {
        (Ok(r), Ok(g), Ok(b)) => (r, g, b),
        _ => (0.0, 0.0, 0.0),
    }
}

/// Escape a string for embedding in a `( ... )` literal string.
/// Backslashes must be escaped first so the escapes themselves survive.
pub fn escape_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('(', "\\(")
        .replace(')', "\\)")
}

/// Accumulates page drawing operators in emission order.
#[derive(Default)]
pub struct ContentStream {
    ops: String,
}

impl ContentStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill a `width` x `height` rectangle anchored at the page origin.
    pub fn fill_rect(&mut self, width: f64, height: f64, color: &str) {
        let (r, g, b) = hex_to_rgb(color);
        self.ops.push_str(&format!(
            "q\n{r:.4} {g:.4} {b:.4} rg\n0 0 {width} {height} re\nf\nQ\n"
        ));
    }

    /// Show a text run at `(x, y)` in the page font at the given size.
    pub fn show_text(&mut self, text: &str, x: f64, y: f64, size: f64, color: &str) {
        let (r, g, b) = hex_to_rgb(color);
        self.ops.push_str(&format!(
            "BT\n/F1 {size} Tf\n{r:.4} {g:.4} {b:.4} rg\n1 0 0 1 {x} {y} Tm\n({}) Tj\nET\n",
            escape_text(text)
        ));
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.ops.into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Minimal literal-string reader: undoes the escapes a conformant
    // parser would resolve.
    fn unescape(escaped: &str) -> String {
        let mut out = String::new();
        let mut chars = escaped.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn hex_white_and_black() {
        assert_eq!(hex_to_rgb("#FFFFFF"), (1.0, 1.0, 1.0));
        assert_eq!(hex_to_rgb("#000000"), (0.0, 0.0, 0.0));
    }

    #[test]
    fn hex_channels_normalized() {
        let (r, g, b) = hex_to_rgb("#FF7BA9");
        assert!((r - 1.0).abs() < 1e-9);
        assert!((g - 123.0 / 255.0).abs() < 1e-9);
        assert!((b - 169.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn hex_malformed_is_black() {
        assert_eq!(hex_to_rgb("nope"), (0.0, 0.0, 0.0));
        assert_eq!(hex_to_rgb("#12345"), (0.0, 0.0, 0.0));
        assert_eq!(hex_to_rgb("#GGGGGG"), (0.0, 0.0, 0.0));
        assert_eq!(hex_to_rgb(""), (0.0, 0.0, 0.0));
    }

    #[test]
    fn escape_order_backslash_first() {
        assert_eq!(escape_text(r"a\b"), r"a\\b");
        assert_eq!(escape_text("f(x)"), r"f\(x\)");
        // A backslash followed by a paren must not collapse into one escape.
        assert_eq!(escape_text(r"\("), r"\\\(");
    }

    #[test]
    fn escape_roundtrip_mixed() {
        let original = r"수료증 (2024) \ end";
        assert_eq!(unescape(&escape_text(original)), original);
    }

    proptest! {
        #[test]
        fn escape_roundtrips(s in r#"[\\() a-z가-힣]{0,40}"#) {
            prop_assert_eq!(unescape(&escape_text(&s)), s);
        }
    }

    #[test]
    fn stream_operator_order() {
        let mut cs = ContentStream::new();
        cs.fill_rect(1080.0, 1080.0, "#FFFFFF");
        cs.show_text("hello", 100.0, 200.0, 24.0, "#000000");
        let ops = String::from_utf8(cs.into_bytes()).unwrap();

        let rect = ops.find("re\nf\nQ\n").expect("background fill");
        let text = ops.find("BT\n").expect("text block");
        assert!(rect < text, "background drawn before text");
        assert!(ops.starts_with("q\n"));
        assert!(ops.contains("/F1 24 Tf"));
        assert!(ops.contains("1 0 0 1 100 200 Tm"));
        assert!(ops.contains("(hello) Tj"));
        assert!(ops.trim_end().ends_with("ET"));
    }

    #[test]
    fn text_payload_escaped_in_stream() {
        let mut cs = ContentStream::new();
        cs.show_text("a(b)c", 0.0, 0.0, 12.0, "#000000");
        let ops = String::from_utf8(cs.into_bytes()).unwrap();
        assert!(ops.contains(r"(a\(b\)c) Tj"));
    }
}
