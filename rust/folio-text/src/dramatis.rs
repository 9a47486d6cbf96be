//! Dramatis personae roster extraction.
//!
//! The traditional front-matter block lists each character with a short
//! role description:
//!
//! ```text
//! Dramatis Personæ
//!
//! CLAUDIUS, King of Denmark.
//! HAMLET, Prince of Denmark, son to the former, and nephew to the present king.
//! ```
//!
//! The roster is a supplement: dialogue parsing infers characters from
//! speaker cues regardless. Graph construction can seed roster characters
//! as nodes so that listed-but-silent characters still appear.

use std::collections::BTreeMap;

/// Extract `name → role description` from the dramatis-personae block.
///
/// The block runs from the first `Dramatis Personæ` marker (ASCII spelling
/// accepted) to the first `SCENE` occurrence after it. A line contributes
/// when it contains a comma and the part before the comma is entirely
/// uppercase. An absent block yields an empty roster, never an error.
pub fn dramatis_personae(text: &str) -> BTreeMap<String, String> {
    let mut roster = BTreeMap::new();

    let Some(start) = ["Dramatis Personæ", "Dramatis Personae"]
        .iter()
        .find_map(|marker| text.find(marker))
    else {
        return roster;
    };
    let section = &text[start..];
    let section = &section[..section.find("SCENE").unwrap_or(section.len())];

    for line in section.lines() {
        let Some((name, description)) = line.split_once(',') else {
            continue;
        };
        let name = name.trim();
        if is_all_uppercase(name) {
            roster.insert(name.to_owned(), description.trim().to_owned());
        }
    }

    roster
}

/// No lowercase letters and at least one uppercase letter.
fn is_all_uppercase(s: &str) -> bool {
    !s.is_empty() && s.chars().any(|c| c.is_uppercase()) && !s.chars().any(|c| c.is_lowercase())
}
