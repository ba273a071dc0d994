//! Convert the wiki sitemap of "Mathe für Nicht-Freaks" into a tree.
//!
//! The sitemap is an outline of `== headings ==` and `* bullet` lines. The
//! [`domain`] layer turns it into a [`SitemapNode`] tree whose nodes carry a
//! display name and, for internal links into the project namespace, a link
//! target:
//!
//! ```
//! let root = mfnf_sitemap::parse_sitemap("= Analysis =\n* [[Mathe für Nicht-Freaks: Folge|Folgen]]");
//! let folgen = &root.children[0].children[0];
//! assert_eq!(folgen.label.as_ref().unwrap().name, "Folgen");
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{parse_sitemap, ParsedLabel, SitemapNode};
