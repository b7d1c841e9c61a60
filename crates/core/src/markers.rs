//! Spotlight marker detection and stripping.
//!
//! Markers are plain line comments written inside a code fence:
//!
//! ```text
//! fn setup() {}
//! // spotlight-start
//! fn interesting() {}
//! // spotlight-end
//! ```
//!
//! Both literals are matched exactly and case-sensitively.

use std::ops::Range;

/// Opens a spotlight region.
pub const SPOTLIGHT_START: &str = "// spotlight-start";
/// Closes a spotlight region.
pub const SPOTLIGHT_END: &str = "// spotlight-end";

/// One of the two recognized markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `// spotlight-start`
    Start,
    /// `// spotlight-end`
    End,
}

impl Marker {
    /// Both markers, start first.
    pub const ALL: [Marker; 2] = [Marker::Start, Marker::End];

    /// The literal marker text.
    pub const fn as_str(self) -> &'static str {
        match self {
            Marker::Start => SPOTLIGHT_START,
            Marker::End => SPOTLIGHT_END,
        }
    }

    /// Spotlighting state after this marker has been seen.
    pub const fn spotlighting(self) -> bool {
        matches!(self, Marker::Start)
    }
}

/// How a single line relates to the markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// No marker on the line.
    Plain,
    /// The trimmed line is exactly one marker.
    MarkerOnly(Marker),
    /// A marker shares the line with code; holds the last marker on the line.
    Inline(Marker),
}

/// Returns true if `text` contains either marker.
pub fn contains_marker(text: &str) -> bool {
    Marker::ALL.iter().any(|m| text.contains(m.as_str()))
}

/// Classifies a line by its full text content.
pub fn classify_line(text: &str) -> LineKind {
    let trimmed = text.trim();
    if let Some(marker) = Marker::ALL.into_iter().find(|m| trimmed == m.as_str()) {
        return LineKind::MarkerOnly(marker);
    }

    Marker::ALL
        .into_iter()
        .filter_map(|m| text.rfind(m.as_str()).map(|pos| (pos, m)))
        .max_by_key(|(pos, _)| *pos)
        .map_or(LineKind::Plain, |(_, marker)| LineKind::Inline(marker))
}

/// Removes every marker from `text`, together with the whitespace that
/// follows it. When a marker ends the text, the whitespace before it goes
/// too, so `const x = 1; // spotlight-start` becomes `const x = 1;`.
///
/// Returns `None` when `text` holds no marker.
pub fn strip_markers(text: &str) -> Option<String> {
    let mut span = marker_span(text)?;
    let mut out = text.to_string();
    loop {
        out.replace_range(span, "");
        match marker_span(&out) {
            Some(next) => span = next,
            None => return Some(out),
        }
    }
}

/// Byte range of the first marker in `text`, widened over the whitespace
/// after it, and over the whitespace before it when nothing else follows.
pub fn marker_span(text: &str) -> Option<Range<usize>> {
    let (pos, marker) = Marker::ALL
        .into_iter()
        .filter_map(|m| text.find(m.as_str()).map(|pos| (pos, m)))
        .min_by_key(|(pos, _)| *pos)?;
    let after = pos + marker.as_str().len();
    let end = text.len() - text[after..].trim_start().len();
    let start = if end == text.len() {
        text[..pos].trim_end().len()
    } else {
        pos
    };
    Some(start..end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_markers_anywhere() {
        assert!(contains_marker("// spotlight-start"));
        assert!(contains_marker("let a = 1; // spotlight-end"));
        assert!(!contains_marker("// Spotlight-Start"));
        assert!(!contains_marker("# spotlight-start"));
        assert!(!contains_marker("//spotlight-start"));
    }

    #[test]
    fn classifies_marker_only_lines_with_surrounding_whitespace() {
        assert_eq!(
            classify_line("  // spotlight-start\t"),
            LineKind::MarkerOnly(Marker::Start)
        );
        assert_eq!(
            classify_line("// spotlight-end"),
            LineKind::MarkerOnly(Marker::End)
        );
    }

    #[test]
    fn classifies_inline_markers() {
        assert_eq!(
            classify_line("const x = 1; // spotlight-start"),
            LineKind::Inline(Marker::Start)
        );
        assert_eq!(
            classify_line("call(); // spotlight-end"),
            LineKind::Inline(Marker::End)
        );
    }

    #[test]
    fn inline_line_with_both_markers_follows_the_last_one() {
        assert_eq!(
            classify_line("a // spotlight-start b // spotlight-end"),
            LineKind::Inline(Marker::End)
        );
        assert_eq!(
            classify_line("a // spotlight-end b // spotlight-start"),
            LineKind::Inline(Marker::Start)
        );
    }

    #[test]
    fn plain_lines_stay_plain() {
        assert_eq!(classify_line("fn main() {}"), LineKind::Plain);
        assert_eq!(classify_line(""), LineKind::Plain);
    }

    #[test]
    fn strips_trailing_marker_and_the_space_before_it() {
        assert_eq!(
            strip_markers("const x = 1; // spotlight-start").as_deref(),
            Some("const x = 1;")
        );
    }

    #[test]
    fn strips_marker_and_following_whitespace_mid_text() {
        assert_eq!(
            strip_markers("foo(); // spotlight-end   bar();").as_deref(),
            Some("foo(); bar();")
        );
    }

    #[test]
    fn strips_every_marker_occurrence() {
        assert_eq!(
            strip_markers("a // spotlight-start // spotlight-end").as_deref(),
            Some("a")
        );
        assert_eq!(strip_markers(" // spotlight-start ").as_deref(), Some(""));
    }

    #[test]
    fn marker_span_covers_surrounding_whitespace() {
        assert_eq!(marker_span("a // spotlight-end  b"), Some(2..20));
        assert_eq!(marker_span("a  // spotlight-start "), Some(1..22));
        assert_eq!(marker_span("nothing here"), None);
    }

    #[test]
    fn leaves_marker_free_text_alone() {
        assert_eq!(strip_markers("let y = 2;"), None);
    }
}
