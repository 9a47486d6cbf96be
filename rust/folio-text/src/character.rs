//! Speaker-cue recognition and per-character dialogue slicing.
//!
//! A speaker cue is an all-caps label at line start, terminated by a
//! period: at least two leading capitals, then any run of capitals and
//! spaces, then `.` — `HAMLET.`, `FIRST LORD.`, `QUEEN GERTRUDE.`.
//! Capitalized-only words (`Exeunt.`) do not qualify.
//!
//! There is no explicit roster: any line matching the cue shape implies a
//! character. The dramatis-personae roster in [`crate::dramatis`] is an
//! optional supplement, not the source of truth.

use std::collections::BTreeSet;

/// Extract the speaker label from a line, if the line opens with a cue.
///
/// The label excludes the terminating period; inner whitespace runs are
/// collapsed to single spaces.
///
/// ```
/// use folio_text::speaker_cue;
///
/// assert_eq!(speaker_cue("HAMLET. To be or not to be."), Some("HAMLET".into()));
/// assert_eq!(speaker_cue("FIRST LORD. My lord."), Some("FIRST LORD".into()));
/// assert_eq!(speaker_cue("Exeunt."), None);
/// ```
pub fn speaker_cue(line: &str) -> Option<String> {
    let dot = line.find('.')?;
    let head = &line[..dot];

    let mut chars = head.chars();
    let (first, second) = (chars.next()?, chars.next()?);
    if !first.is_ascii_uppercase() || !second.is_ascii_uppercase() {
        return None;
    }
    if !head
        .chars()
        .all(|c| c.is_ascii_uppercase() || c == ' ' || c == '\t')
    {
        return None;
    }

    Some(head.split_whitespace().collect::<Vec<_>>().join(" "))
}

/// The set of distinct speaker labels cueing dialogue in `scene`.
///
/// Order-independent; duplicates collapse.
pub fn extract_characters(scene: &str) -> BTreeSet<String> {
    scene.lines().filter_map(speaker_cue).collect()
}

/// All dialogue spans attributed to `character` in `scene`, in order.
///
/// A span starts at a line opening with the literal cue `<character>.` and
/// runs up to (not including) the next line carrying any speaker cue, or
/// end of input. Each span is newline-joined and trimmed; a cue followed
/// immediately by another cue yields an empty span.
///
/// The character name is matched literally, never interpreted as a
/// pattern.
pub fn character_lines(scene: &str, character: &str) -> Vec<String> {
    let cue = format!("{character}.");
    let mut spans: Vec<String> = Vec::new();
    let mut current: Option<Vec<&str>> = None;

    for line in scene.lines() {
        if let Some(rest) = line.strip_prefix(&cue) {
            if let Some(span) = current.take() {
                spans.push(close_span(span));
            }
            current = Some(vec![rest]);
        } else if speaker_cue(line).is_some() {
            if let Some(span) = current.take() {
                spans.push(close_span(span));
            }
        } else if let Some(span) = current.as_mut() {
            span.push(line);
        }
    }
    if let Some(span) = current {
        spans.push(close_span(span));
    }

    spans
}

fn close_span(lines: Vec<&str>) -> String {
    lines.join("\n").trim().to_owned()
}
