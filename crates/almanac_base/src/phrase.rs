//! Line-wrap-safe rendering of activity phrases.
//!
//! Each multi-character phrase has U+2060 WORD JOINER inserted between its
//! characters so a text layout engine never breaks inside it. Phrases stay
//! separated by ASCII spaces, which remain the only break opportunities.
//! Rendering is applied once, to raw table text.

use crate::activities::NOTHING_ADVISED;

/// U+2060 WORD JOINER.
pub const WORD_JOINER: char = '\u{2060}';

/// Join the characters of one phrase with [`WORD_JOINER`].
pub fn join_phrase(phrase: &str) -> String {
    let mut out = String::with_capacity(phrase.len() * 2);
    for (i, c) in phrase.chars().enumerate() {
        if i > 0 {
            out.push(WORD_JOINER);
        }
        out.push(c);
    }
    out
}

/// Render a space-separated phrase list.
///
/// Empty tokens from repeated spaces are dropped.
pub fn render_phrases(text: &str) -> String {
    text.split(' ')
        .filter(|t| !t.is_empty())
        .map(join_phrase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render at most `limit` phrases; no phrases renders the
/// [`NOTHING_ADVISED`] marker.
pub fn render_tokens(tokens: &[&str], limit: usize) -> String {
    let shown: Vec<String> = tokens
        .iter()
        .filter(|t| !t.is_empty())
        .take(limit)
        .map(|t| join_phrase(t))
        .collect();
    if shown.is_empty() {
        join_phrase(NOTHING_ADVISED)
    } else {
        shown.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_characters() {
        assert_eq!(render_phrases("出行"), "出\u{2060}行");
        assert_eq!(render_phrases("祭祀 祈福"), "祭\u{2060}祀 祈\u{2060}福");
    }

    #[test]
    fn single_char_unchanged() {
        assert_eq!(render_phrases("吉"), "吉");
    }

    #[test]
    fn preserves_token_boundaries() {
        let raw = "平治道涂 祭祀 开市";
        let rendered = render_phrases(raw);
        let stripped: Vec<String> = rendered
            .split(' ')
            .map(|t| t.chars().filter(|&c| c != WORD_JOINER).collect())
            .collect();
        assert_eq!(stripped, raw.split(' ').collect::<Vec<_>>());
    }

    #[test]
    fn extra_spaces_dropped() {
        assert_eq!(render_phrases("  出行   求医 "), "出\u{2060}行 求\u{2060}医");
        assert_eq!(render_phrases(""), "");
    }

    #[test]
    fn tokens_capped() {
        let tokens = ["甲", "乙", "丙", "丁"];
        assert_eq!(render_tokens(&tokens, 2), "甲 乙");
        assert_eq!(render_tokens(&tokens, 10), "甲 乙 丙 丁");
    }

    #[test]
    fn empty_tokens_render_marker() {
        let marker = render_tokens(&[], 15);
        assert_eq!(marker.chars().filter(|&c| c != WORD_JOINER).collect::<String>(), NOTHING_ADVISED);
        assert_eq!(render_tokens(&["出行"], 0), marker);
    }
}
