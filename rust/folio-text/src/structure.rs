//! Act/scene structure parsing.
//!
//! Scans a normalized play line by line and partitions it into a nested
//! act → scene → content mapping plus an ordered table of contents. The
//! scanner is a small state machine:
//!
//! ```text
//! Frontmatter --ACT heading--> InAct --SCENE heading--> InScene
//!      │                         ▲  │                     │
//!      └── body lines dropped ───┘  └─── body lines accumulate
//! ```
//!
//! Flush semantics are load-bearing: a scene's buffered body is written to
//! [`ActsScenes`] only when non-empty. A scene heading immediately followed
//! by another heading is therefore listed in the [`TableOfContents`] but has
//! no entry in [`ActsScenes`] — callers that need the distinction get a
//! typed lookup error from [`Play::scene_text`](crate::play::Play::scene_text).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::roman;

/// One act in document order, with its scene labels in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActEntry {
    /// The full heading line, e.g. `ACT I`.
    pub act: String,
    /// Full scene heading lines, e.g. `SCENE II. A hall in the Castle.`
    pub scenes: Vec<String>,
}

/// Ordered table of contents; insertion order is document order.
pub type TableOfContents = Vec<ActEntry>;

/// Act label → scene label → the scene's accumulated body text.
///
/// Key order mirrors the table of contents; scenes that never accumulated
/// a body line are absent.
pub type ActsScenes = IndexMap<String, IndexMap<String, String>>;

/// Whether a trimmed line is an act heading: `ACT` followed by at least
/// one Roman numeral character.
pub fn is_act_heading(line: &str) -> bool {
    line.strip_prefix("ACT ")
        .is_some_and(|rest| roman::numeral_prefix_len(rest) > 0)
}

/// Whether a trimmed line is a scene heading: `SCENE`, Roman numerals,
/// then a period (`SCENE I.` with an optional trailing description).
pub fn is_scene_heading(line: &str) -> bool {
    line.strip_prefix("SCENE ").is_some_and(|rest| {
        let n = roman::numeral_prefix_len(rest);
        n > 0 && rest[n..].starts_with('.')
    })
}

/// Parse a normalized play into its table of contents and scene bodies.
///
/// Front matter before the first `Dramatis Personæ` occurrence is
/// discarded (falling back to the ASCII spelling, then to the whole text
/// when neither appears). A text with no recognizable headings parses to
/// empty structures — never an error.
pub fn parse_structure(text: &str) -> (TableOfContents, ActsScenes) {
    let body = dramatis_onwards(text);

    let mut toc: TableOfContents = Vec::new();
    let mut acts: ActsScenes = IndexMap::new();
    let mut current_act: Option<String> = None;
    let mut current_scene: Option<String> = None;
    let mut buffer: Vec<&str> = Vec::new();

    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if is_act_heading(line) {
            flush(&mut acts, &current_act, &current_scene, &mut buffer);
            current_act = Some(line.to_owned());
            current_scene = None;
            toc.push(ActEntry {
                act: line.to_owned(),
                scenes: Vec::new(),
            });
            continue;
        }

        if is_scene_heading(line) {
            flush(&mut acts, &current_act, &current_scene, &mut buffer);
            // A scene heading outside any act is noise; there is no act
            // entry to attach it to.
            if let Some(entry) = toc.last_mut() {
                current_scene = Some(line.to_owned());
                entry.scenes.push(line.to_owned());
            }
            continue;
        }

        if current_act.is_some() && current_scene.is_some() {
            buffer.push(line);
        }
    }

    flush(&mut acts, &current_act, &current_scene, &mut buffer);

    debug!(
        acts = toc.len(),
        scenes = toc.iter().map(|a| a.scenes.len()).sum::<usize>(),
        bodies = acts.values().map(IndexMap::len).sum::<usize>(),
        "parsed play structure"
    );

    (toc, acts)
}

/// Write the buffered scene body, if an act and scene are open and the
/// buffer holds at least one line. Empty buffers are dropped: the scene
/// stays in the table of contents but gets no body entry.
fn flush(
    acts: &mut ActsScenes,
    current_act: &Option<String>,
    current_scene: &Option<String>,
    buffer: &mut Vec<&str>,
) {
    if let (Some(act), Some(scene)) = (current_act, current_scene)
        && !buffer.is_empty()
    {
        acts.entry(act.clone())
            .or_default()
            .insert(scene.clone(), buffer.join("\n"));
    }
    buffer.clear();
}

/// The text from the first dramatis-personae marker onward.
fn dramatis_onwards(text: &str) -> &str {
    for marker in ["Dramatis Personæ", "Dramatis Personae"] {
        if let Some(pos) = text.find(marker) {
            return &text[pos..];
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MINIATURE: &str = "\
Dramatis Personæ

HAMLET, Prince of Denmark.
HORATIO, friend to Hamlet.

ACT I

SCENE I. Elsinore. A platform before the Castle.

 Enter Francisco and Bernardo.

BERNARDO. Who's there?
FRANCISCO. Nay, answer me.

SCENE II. A room of state in the Castle.

HAMLET. O that this too solid flesh would melt.

ACT II

SCENE I. A room in Polonius's house.

POLONIUS. Give him this money.
";

    #[test]
    fn builds_toc_in_document_order() {
        let (toc, _) = parse_structure(MINIATURE);
        assert_eq!(toc.len(), 2);
        assert_eq!(toc[0].act, "ACT I");
        assert_eq!(
            toc[0].scenes,
            vec![
                "SCENE I. Elsinore. A platform before the Castle.",
                "SCENE II. A room of state in the Castle.",
            ]
        );
        assert_eq!(toc[1].act, "ACT II");
        assert_eq!(toc[1].scenes, vec!["SCENE I. A room in Polonius's house."]);
    }

    #[test]
    fn scene_bodies_hold_trimmed_lines() {
        let (_, acts) = parse_structure(MINIATURE);
        let body = &acts["ACT I"]["SCENE I. Elsinore. A platform before the Castle."];
        assert_eq!(
            body,
            "Enter Francisco and Bernardo.\nBERNARDO. Who's there?\nFRANCISCO. Nay, answer me."
        );
    }

    #[test]
    fn acts_scenes_key_order_matches_toc() {
        let (toc, acts) = parse_structure(MINIATURE);
        let act_keys: Vec<&String> = acts.keys().collect();
        let toc_acts: Vec<&String> = toc.iter().map(|e| &e.act).collect();
        assert_eq!(act_keys, toc_acts);
        for entry in &toc {
            let scene_keys: Vec<&String> = acts[&entry.act].keys().collect();
            let toc_scenes: Vec<&String> = entry.scenes.iter().collect();
            assert_eq!(scene_keys, toc_scenes);
        }
    }

    #[test]
    fn empty_scene_listed_in_toc_but_not_stored() {
        let (toc, acts) = parse_structure("ACT I\nSCENE I.\nSCENE II.\nHELLO. Hi there.\n");
        assert_eq!(toc.len(), 1);
        assert_eq!(toc[0].scenes, vec!["SCENE I.", "SCENE II."]);

        let act = &acts["ACT I"];
        assert!(!act.contains_key("SCENE I."));
        assert_eq!(act["SCENE II."], "HELLO. Hi there.");
    }

    #[test]
    fn no_headings_parse_to_empty() {
        let (toc, acts) = parse_structure("just some prose\nwith no structure at all\n");
        assert!(toc.is_empty());
        assert!(acts.is_empty());
    }

    #[test]
    fn front_matter_before_dramatis_is_discarded() {
        // The fake heading in the front matter must not open an act.
        let text = "ACT I\nnot real\nDramatis Personæ\nACT II\nSCENE I.\nHAMLET. Words.\n";
        let (toc, acts) = parse_structure(text);
        assert_eq!(toc.len(), 1);
        assert_eq!(toc[0].act, "ACT II");
        assert_eq!(acts["ACT II"]["SCENE I."], "HAMLET. Words.");
    }

    #[test]
    fn scene_heading_without_act_is_ignored() {
        let (toc, acts) = parse_structure("SCENE I.\nHAMLET. Lost words.\n");
        assert!(toc.is_empty());
        assert!(acts.is_empty());
    }

    #[test]
    fn act_heading_closes_the_previous_scene() {
        // Body lines between an act heading and its first scene belong to
        // no scene and are dropped.
        let text = "ACT I\nSCENE I.\nHAMLET. Words.\nACT II\nstray prologue line\nSCENE I.\nHORATIO. More.\n";
        let (_, acts) = parse_structure(text);
        assert_eq!(acts["ACT I"]["SCENE I."], "HAMLET. Words.");
        assert_eq!(acts["ACT II"]["SCENE I."], "HORATIO. More.");
        assert_eq!(acts["ACT II"].len(), 1);
    }

    #[test]
    fn heading_recognition() {
        assert!(is_act_heading("ACT IV"));
        assert!(is_act_heading("ACT III"));
        assert!(!is_act_heading("ACT ONE"));
        assert!(!is_act_heading("ACTI"));
        assert!(is_scene_heading("SCENE I."));
        assert!(is_scene_heading("SCENE XIV. A field."));
        assert!(!is_scene_heading("SCENE I"));
        assert!(!is_scene_heading("SCENE 1."));
    }

    #[test]
    fn toc_serializes_for_the_presentation_contract() {
        let (toc, _) = parse_structure(MINIATURE);
        let json = serde_json::to_string(&toc).unwrap();
        let back: TableOfContents = serde_json::from_str(&json).unwrap();
        assert_eq!(back, toc);
    }
}
