//! Line classifier: turns sitemap text into `(label, depth)` entries.
//!
//! Two line shapes are recognized:
//! - headings `== Title ==`, depth = length of the `=` run (1-6)
//! - bullets `*** Item`, depth = `MAX_HEADING_DEPTH` + length of the `*` run
//!
//! Every other line is skipped.

/// Deepest heading level; bullet depths start right after it.
pub const MAX_HEADING_DEPTH: usize = 6;

/// Character repeated on both sides of a heading.
pub const HEADING_MARKER: char = '=';

/// Character prefixing a bullet item.
pub const BULLET_MARKER: char = '*';

/// Characters that end a line.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// One recognized sitemap line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    /// Trimmed label text, still unparsed
    pub label: String,
    /// Structural depth: 1-6 for headings, >6 for bullets
    pub depth: usize,
}

impl SitemapEntry {
    pub fn new(label: impl Into<String>, depth: usize) -> Self {
        Self {
            label: label.into(),
            depth,
        }
    }
}

/// Lazy scan over the lines of a sitemap.
///
/// Finite: yields at most one entry per input line. Stateless apart from the
/// position, so calling [`classify_lines`] again re-scans from the start.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    inner: SourceLines<'a>,
}

impl Iterator for Lines<'_> {
    type Item = SitemapEntry;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find_map(classify_line)
    }
}

/// Scan `text` and yield an entry for every heading or bullet line, in source order.
pub fn classify_lines(text: &str) -> Lines<'_> {
    Lines {
        inner: split_lines(text),
    }
}

/// Split `text` into lines without their terminators.
///
/// Besides `\n` and `\r\n`, a lone `\r`, the vertical tab, form feed, the
/// file/group/record separators, NEL and the Unicode line and paragraph
/// separators each end a line. A terminator at the very end does not start
/// another line.
pub fn split_lines(text: &str) -> SourceLines<'_> {
    SourceLines { rest: text }
}

/// Iterator returned by [`split_lines`].
#[derive(Debug, Clone)]
pub struct SourceLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for SourceLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let (line, rest) = match self.rest.find(LINE_BREAKS) {
            Some(end) => {
                let tail = &self.rest[end..];
                let width = if tail.starts_with("\r\n") {
                    2
                } else {
                    tail.chars().next().map_or(0, char::len_utf8)
                };
                (&self.rest[..end], &tail[width..])
            }
            None => (self.rest, ""),
        };
        self.rest = rest;
        Some(line)
    }
}

/// Classify a single line. Headings take priority over bullets.
pub fn classify_line(line: &str) -> Option<SitemapEntry> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    match_heading(line).or_else(|| match_bullet(line))
}

/// Match `(={1,6})(.*)\1` at line start.
///
/// The longest marker run is tried first; the content extends to the last
/// occurrence of the same run, so anything after the closing run is dropped.
fn match_heading(line: &str) -> Option<SitemapEntry> {
    let run = leading_run(line, HEADING_MARKER);
    (1..=run.min(MAX_HEADING_DEPTH)).rev().find_map(|depth| {
        let marker = &line[..depth];
        let rest = &line[depth..];
        rest.rfind(marker)
            .map(|end| SitemapEntry::new(rest[..end].trim(), depth))
    })
}

/// Match `([*]+)(.*)` at line start.
fn match_bullet(line: &str) -> Option<SitemapEntry> {
    let run = leading_run(line, BULLET_MARKER);
    if run == 0 {
        return None;
    }
    Some(SitemapEntry::new(line[run..].trim(), MAX_HEADING_DEPTH + run))
}

/// Byte length of the run of `marker` at the start of `line` (markers are ASCII).
fn leading_run(line: &str, marker: char) -> usize {
    line.chars().take_while(|&c| c == marker).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("= A =", "A", 1)]
    #[case("== A ==", "A", 2)]
    #[case("=== A ===", "A", 3)]
    #[case("====A====", "A", 4)]
    #[case("===== A =====", "A", 5)]
    #[case("====== A ======", "A", 6)]
    fn given_heading_line_when_classifying_then_depth_is_marker_count(
        #[case] line: &str,
        #[case] label: &str,
        #[case] depth: usize,
    ) {
        assert_eq!(classify_line(line), Some(SitemapEntry::new(label, depth)));
    }

    #[rstest]
    #[case("* A", "A", 7)]
    #[case("** A", "A", 8)]
    #[case("*** A", "A", 9)]
    #[case("********** A", "A", 16)]
    fn given_bullet_line_when_classifying_then_depth_is_offset_past_headings(
        #[case] line: &str,
        #[case] label: &str,
        #[case] depth: usize,
    ) {
        let entry = classify_line(line).unwrap();
        assert_eq!(entry, SitemapEntry::new(label, depth));
        assert!(entry.depth > MAX_HEADING_DEPTH);
    }

    #[test]
    fn given_more_than_six_markers_when_classifying_then_caps_at_max_depth() {
        // the 7th '=' becomes part of the content
        let entry = classify_line("======= A =======").unwrap();
        assert_eq!(entry.depth, 6);
        assert_eq!(entry.label, "= A =");
    }

    #[test]
    fn given_unbalanced_heading_when_classifying_then_falls_back_to_shorter_run() {
        let entry = classify_line("=== A ==").unwrap();
        assert_eq!(entry, SitemapEntry::new("= A", 2));
    }

    #[test]
    fn given_trailing_text_after_heading_when_classifying_then_ignores_it() {
        let entry = classify_line("== A == B ==  tail").unwrap();
        assert_eq!(entry, SitemapEntry::new("A == B", 2));
    }

    #[test]
    fn given_bare_markers_when_classifying_then_yields_empty_label() {
        assert_eq!(classify_line("=="), Some(SitemapEntry::new("", 1)));
        assert_eq!(classify_line("*"), Some(SitemapEntry::new("", 7)));
    }

    #[rstest]
    #[case("")]
    #[case("plain text")]
    #[case("=")]
    #[case(" == indented ==")]
    #[case(" * indented")]
    #[case("# markdown")]
    fn given_other_line_when_classifying_then_skips_it(#[case] line: &str) {
        assert_eq!(classify_line(line), None);
    }

    #[test]
    fn given_crlf_text_when_classifying_then_strips_carriage_returns() {
        let entries: Vec<_> = classify_lines("== A ==\r\n* B\r\n").collect();
        assert_eq!(
            entries,
            vec![SitemapEntry::new("A", 2), SitemapEntry::new("B", 7)]
        );
    }

    #[rstest]
    #[case("== A ==\r* B")]
    #[case("== A ==\u{2028}* B")]
    #[case("== A ==\x0c* B")]
    #[case("== A ==\x0b* B")]
    #[case("== A ==\x1e* B")]
    #[case("== A ==\u{85}* B")]
    #[case("== A ==\u{2029}* B\n")]
    fn given_other_line_terminators_when_classifying_then_breaks_lines(#[case] text: &str) {
        let entries: Vec<_> = classify_lines(text).collect();
        assert_eq!(
            entries,
            vec![SitemapEntry::new("A", 2), SitemapEntry::new("B", 7)]
        );
    }

    #[test]
    fn given_mixed_terminators_when_splitting_then_crlf_is_one_break() {
        let lines: Vec<_> = split_lines("a\r\nb\rc\n\nd\r").collect();
        assert_eq!(lines, vec!["a", "b", "c", "", "d"]);
    }

    #[test]
    fn given_empty_text_when_splitting_then_no_lines() {
        assert_eq!(split_lines("").count(), 0);
        assert_eq!(split_lines("\n").collect::<Vec<_>>(), vec![""]);
    }

    #[test]
    fn given_text_when_scanning_twice_then_yields_same_entries() {
        let text = "== A ==\nnoise\n* B\n** C";
        let first: Vec<_> = classify_lines(text).collect();
        let second: Vec<_> = classify_lines(text).collect();
        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
    }

    #[test]
    fn given_non_ascii_label_when_classifying_then_keeps_text() {
        let entry = classify_line("== Grundlagen der Mathematik für Nicht-Freaks ==").unwrap();
        assert_eq!(entry.label, "Grundlagen der Mathematik für Nicht-Freaks");
    }
}
