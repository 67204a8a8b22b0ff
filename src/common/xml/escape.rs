use std::borrow::Cow;

use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;

const SPECIAL: [&str; 5] = ["&", "<", ">", "\"", "'"];
const ENTITIES: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"];

static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(SPECIAL)
        .expect("static escape patterns are valid")
});

// LeftmostLongest so "&amp;lt;" decodes to "&lt;" rather than "<".
static XML_UNESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(ENTITIES)
        .expect("static entity patterns are valid")
});

/// Escape the five XML special characters.
///
/// Text without special characters is returned borrowed, which is the common
/// case for cell content and sheet names.
///
/// ```
/// use tpe_schema_sheet::common::xml::escape_xml;
/// assert_eq!(escape_xml("Schema & Matching"), "Schema &amp; Matching");
/// assert_eq!(escape_xml("plain"), "plain");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> Cow<'_, str> {
    if XML_ESCAPER.is_match(s) {
        Cow::Owned(XML_ESCAPER.replace_all(s, &ENTITIES))
    } else {
        Cow::Borrowed(s)
    }
}

/// Reverse [`escape_xml`]. Unknown entities are left untouched.
#[inline]
pub fn unescape_xml(s: &str) -> Cow<'_, str> {
    if XML_UNESCAPER.is_match(s) {
        Cow::Owned(XML_UNESCAPER.replace_all(s, &SPECIAL))
    } else {
        Cow::Borrowed(s)
    }
}
