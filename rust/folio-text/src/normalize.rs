//! Project Gutenberg boilerplate stripping.
//!
//! Gutenberg texts wrap the literary content in a licensing header and
//! footer. Stripping searches an ordered table of known start markers and,
//! independently, an ordered table of known end markers. Absent markers
//! degrade gracefully to "use the whole text", and the operation is
//! idempotent: once the boilerplate is gone, a second pass is a no-op.

/// Start-of-content markers, checked in order; the first one present wins.
const START_MARKERS: &[&str] = &[
    "*** START OF THE PROJECT GUTENBERG",
    "*** START OF THIS PROJECT GUTENBERG",
];

/// End-of-content markers, checked in order; the first one present wins.
/// The last entry is the legacy footer used by older Gutenberg editions.
const END_MARKERS: &[&str] = &[
    "*** END OF THE PROJECT GUTENBERG",
    "*** END OF THIS PROJECT GUTENBERG",
    "End of Project Gutenberg's",
];

/// Strip Gutenberg header/footer boilerplate from `raw`.
///
/// Content begins at the first line break after the first start marker
/// found (or at offset 0 if none is present) and ends immediately before
/// the first end marker found (or at end of input). The result is trimmed.
///
/// ```
/// use folio_text::normalize;
///
/// let raw = "junk\n*** START OF THE PROJECT GUTENBERG EBOOK HAMLET ***\nACT I\n*** END OF THE PROJECT GUTENBERG EBOOK HAMLET ***";
/// assert_eq!(normalize(raw), "ACT I");
/// assert_eq!(normalize(normalize(raw)), normalize(raw));
/// ```
pub fn normalize(raw: &str) -> &str {
    let start = START_MARKERS
        .iter()
        .find_map(|marker| raw.find(marker))
        .map(|pos| match raw[pos..].find('\n') {
            Some(nl) => pos + nl + 1,
            None => raw.len(),
        })
        .unwrap_or(0);

    let end = END_MARKERS
        .iter()
        .find_map(|marker| raw.find(marker))
        .unwrap_or(raw.len());

    // A footer-only text can place the computed start past the end;
    // that means there is no content between the markers.
    if start >= end {
        return "";
    }

    raw[start..end].trim()
}
