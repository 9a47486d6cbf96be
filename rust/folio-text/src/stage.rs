//! Stage-direction extraction.
//!
//! Directions appear bracketed `[Aside.]` or parenthesized `(within)`.
//! Spans never cross line boundaries; an unclosed bracket is not a
//! direction.

/// Bracketed and parenthesized spans in `scene`, in order of appearance.
pub fn stage_directions(scene: &str) -> Vec<String> {
    let mut directions = Vec::new();
    for line in scene.lines() {
        collect_line(line, &mut directions);
    }
    directions
}

fn collect_line(line: &str, out: &mut Vec<String>) {
    let mut rest = line;
    while let Some(open) = rest.find(['[', '(']) {
        let close = match rest[open..].chars().next() {
            Some('[') => ']',
            _ => ')',
        };
        let after_open = &rest[open + 1..];
        let Some(end) = after_open.find(close) else {
            return;
        };
        let inner = &after_open[..end];
        if !inner.is_empty() {
            out.push(inner.to_owned());
        }
        rest = &after_open[end + 1..];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn collects_both_bracket_styles_in_order() {
        let scene = "HAMLET. [Aside.] A little more than kin.\n\
                     KING. (within) Follow her close.\n";
        assert_eq!(stage_directions(scene), vec!["Aside.", "within"]);
    }

    #[test]
    fn multiple_directions_on_one_line() {
        assert_eq!(
            stage_directions("[Exit Ghost.] text [Exeunt.]"),
            vec!["Exit Ghost.", "Exeunt."]
        );
    }

    #[test]
    fn unclosed_and_empty_spans_are_skipped() {
        assert!(stage_directions("[never closed\n").is_empty());
        assert!(stage_directions("empty [] span\n").is_empty());
    }

    #[test]
    fn spans_do_not_cross_lines() {
        assert!(stage_directions("[Exit\nGhost.]\n").is_empty());
    }
}
