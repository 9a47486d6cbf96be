//! Per-scene speaking order.
//!
//! The interaction graph is inferred from who speaks near whom, so this
//! module reduces a play to the ordered sequence of speaker labels per
//! scene. Sequences never span scene boundaries; the prelude before the
//! first scene heading (title, dramatis personae) is excluded; scenes in
//! which nobody speaks are dropped.

use tracing::debug;

use crate::character::speaker_cue;
use crate::structure::is_scene_heading;

/// The ordered speaker labels of one scene, duplicates preserved.
pub type SceneSequence = Vec<String>;

/// Split `text` at scene headings and collect each scene's speaking order.
///
/// ```
/// use folio_text::scene_sequences;
///
/// let text = "SCENE I.\nAA. One.\nBB. Two.\nAA. Three.\nSCENE II.\nCC. Four.\n";
/// assert_eq!(
///     scene_sequences(text),
///     vec![vec!["AA".to_string(), "BB".into(), "AA".into()], vec!["CC".into()]]
/// );
/// ```
pub fn scene_sequences(text: &str) -> Vec<SceneSequence> {
    let mut sequences: Vec<SceneSequence> = Vec::new();
    let mut current: Option<SceneSequence> = None;

    for line in text.lines() {
        let line = line.trim();
        if is_scene_heading(line) {
            if let Some(seq) = current.take()
                && !seq.is_empty()
            {
                sequences.push(seq);
            }
            current = Some(Vec::new());
            continue;
        }
        if let Some(seq) = current.as_mut()
            && let Some(cue) = speaker_cue(line)
        {
            seq.push(cue);
        }
    }
    if let Some(seq) = current
        && !seq.is_empty()
    {
        sequences.push(seq);
    }

    debug!(
        scenes = sequences.len(),
        turns = sequences.iter().map(Vec::len).sum::<usize>(),
        "sequenced speaking turns"
    );

    sequences
}
