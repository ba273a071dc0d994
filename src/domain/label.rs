//! Label parser: extracts display name and link target from a raw label.

use std::sync::LazyLock;

use regex::Regex;

/// Link targets outside this namespace are dropped.
pub const LINK_NAMESPACE: &str = "Mathe für Nicht-Freaks";

/// Trailing progress marker such as `{{Symbol|50%}}`; group 1 is the text before it.
static SYMBOL_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*)\{\{Symbol\|\d+%\}\}").unwrap());

/// Internal wiki link `[[target|name]]` at the start of the label.
static INTERNAL_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[\[([^|\]]+)\|([^|\]]+)\]\]").unwrap());

/// Display name and optional link target of one sitemap node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedLabel {
    pub name: String,
    pub link: Option<String>,
}

impl ParsedLabel {
    pub fn new(name: impl Into<String>, link: Option<String>) -> Self {
        Self {
            name: name.into(),
            link,
        }
    }

    /// Label without a link target.
    pub fn plain(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }
}

/// Parse a raw label.
///
/// Never fails: text that does not match the link syntax becomes the name.
pub fn parse_label(raw: &str) -> ParsedLabel {
    let label = strip_symbol_suffix(raw.trim());

    match INTERNAL_LINK_RE.captures(label) {
        Some(caps) => {
            let target = &caps[1];
            let link = target
                .starts_with(LINK_NAMESPACE)
                .then(|| target.to_string());
            ParsedLabel::new(&caps[2], link)
        }
        None => ParsedLabel::plain(label),
    }
}

fn strip_symbol_suffix(label: &str) -> &str {
    SYMBOL_SUFFIX_RE
        .captures(label)
        .and_then(|caps| caps.get(1))
        .map_or(label, |prefix| prefix.as_str().trim())
}
