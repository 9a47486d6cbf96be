//! The parsed play snapshot and its read-only query surface.
//!
//! A [`Play`] is produced once per raw text and never mutated; every
//! accessor borrows from the snapshot. The raw text is supplied by an
//! external loader — this crate performs no I/O.

use std::collections::{BTreeMap, BTreeSet};

use crate::character::{character_lines, extract_characters};
use crate::dramatis::dramatis_personae;
use crate::error::StructureError;
use crate::normalize::normalize;
use crate::sequence::{SceneSequence, scene_sequences};
use crate::structure::{ActsScenes, TableOfContents, parse_structure};

/// An immutable, queryable play: normalized text plus the derived
/// act/scene structure.
#[derive(Debug, Clone)]
pub struct Play {
    text: String,
    toc: TableOfContents,
    acts_scenes: ActsScenes,
}

impl Play {
    /// Normalize `raw` and parse its structure.
    ///
    /// Never fails: a text with no recognizable structure yields a play
    /// whose table of contents is empty, which callers should surface as
    /// "could not parse" rather than an error.
    pub fn parse(raw: &str) -> Self {
        let text = normalize(raw).to_owned();
        let (toc, acts_scenes) = parse_structure(&text);
        Play {
            text,
            toc,
            acts_scenes,
        }
    }

    /// The normalized full text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The ordered table of contents.
    pub fn table_of_contents(&self) -> &TableOfContents {
        &self.toc
    }

    /// Act labels in document order.
    pub fn acts(&self) -> impl Iterator<Item = &str> {
        self.toc.iter().map(|entry| entry.act.as_str())
    }

    /// Scene labels of `act` in document order.
    pub fn scenes(&self, act: &str) -> Result<&[String], StructureError> {
        self.toc
            .iter()
            .find(|entry| entry.act == act)
            .map(|entry| entry.scenes.as_slice())
            .ok_or_else(|| StructureError::ActNotFound {
                act: act.to_owned(),
            })
    }

    /// The body text of one scene.
    ///
    /// Distinguishes lookups of scenes that never accumulated a body
    /// (listed in the table of contents but absent here) from acts or
    /// scenes that do not exist at all — both are [`StructureError`]s,
    /// never panics.
    pub fn scene_text(&self, act: &str, scene: &str) -> Result<&str, StructureError> {
        let scenes = self
            .acts_scenes
            .get(act)
            .ok_or_else(|| StructureError::ActNotFound {
                act: act.to_owned(),
            })?;
        scenes
            .get(scene)
            .map(String::as_str)
            .ok_or_else(|| StructureError::SceneNotFound {
                act: act.to_owned(),
                scene: scene.to_owned(),
            })
    }

    /// Distinct speaker labels appearing in one scene.
    pub fn characters_in_scene(
        &self,
        act: &str,
        scene: &str,
    ) -> Result<BTreeSet<String>, StructureError> {
        Ok(extract_characters(self.scene_text(act, scene)?))
    }

    /// Dialogue spans for `character` within one scene, in order.
    pub fn character_lines(
        &self,
        act: &str,
        scene: &str,
        character: &str,
    ) -> Result<Vec<String>, StructureError> {
        Ok(character_lines(self.scene_text(act, scene)?, character))
    }

    /// The dramatis-personae roster (`name → role description`), empty
    /// when the text carries no such block.
    pub fn roster(&self) -> BTreeMap<String, String> {
        dramatis_personae(&self.text)
    }

    /// Per-scene speaking order over the whole play.
    pub fn scene_sequences(&self) -> Vec<SceneSequence> {
        scene_sequences(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RAW: &str = "\
*** START OF THE PROJECT GUTENBERG EBOOK A MINIATURE TRAGEDY ***

Dramatis Personæ

ALPHA, a restless prince.
BETA, a loyal friend.

ACT I

SCENE I. A platform.

ALPHA. Who goes there?
BETA. A friend to this ground.
ALPHA. Well met.

SCENE II. A hall.

BETA. [Aside.] He speaks in riddles.

*** END OF THE PROJECT GUTENBERG EBOOK A MINIATURE TRAGEDY ***
";

    #[test]
    fn parses_and_lists_structure() {
        let play = Play::parse(RAW);
        assert_eq!(play.acts().collect::<Vec<_>>(), vec!["ACT I"]);
        assert_eq!(
            play.scenes("ACT I").unwrap(),
            &["SCENE I. A platform.", "SCENE II. A hall."]
        );
    }

    #[test]
    fn scene_text_round_trips_content() {
        let play = Play::parse(RAW);
        let text = play.scene_text("ACT I", "SCENE I. A platform.").unwrap();
        assert!(text.starts_with("ALPHA. Who goes there?"));
        assert!(text.ends_with("ALPHA. Well met."));
    }

    #[test]
    fn missing_lookups_are_typed_errors() {
        let play = Play::parse(RAW);
        assert_eq!(
            play.scene_text("ACT V", "SCENE I."),
            Err(StructureError::ActNotFound {
                act: "ACT V".to_owned()
            })
        );
        assert_eq!(
            play.scene_text("ACT I", "SCENE IX."),
            Err(StructureError::SceneNotFound {
                act: "ACT I".to_owned(),
                scene: "SCENE IX.".to_owned()
            })
        );
    }

    #[test]
    fn scene_characters_and_lines() {
        let play = Play::parse(RAW);
        let characters = play
            .characters_in_scene("ACT I", "SCENE I. A platform.")
            .unwrap();
        assert_eq!(
            characters.into_iter().collect::<Vec<_>>(),
            vec!["ALPHA", "BETA"]
        );
        assert_eq!(
            play.character_lines("ACT I", "SCENE I. A platform.", "ALPHA")
                .unwrap(),
            vec!["Who goes there?", "Well met."]
        );
    }

    #[test]
    fn roster_and_sequences() {
        let play = Play::parse(RAW);
        assert_eq!(play.roster()["ALPHA"], "a restless prince.");
        assert_eq!(
            play.scene_sequences(),
            vec![
                vec!["ALPHA".to_owned(), "BETA".to_owned(), "ALPHA".to_owned()],
                vec!["BETA".to_owned()],
            ]
        );
    }

    #[test]
    fn unparseable_text_is_an_empty_play() {
        let play = Play::parse("no structure at all");
        assert!(play.table_of_contents().is_empty());
        assert_eq!(play.acts().count(), 0);
    }
}
