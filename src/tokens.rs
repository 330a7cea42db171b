//! Whitespace tokenizer with byte spans.
//!
//! Tokens are produced over an already lowercased string so that spans index
//! straight into the text the leftover is rebuilt from.

use crate::Span;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    pub text: String,
    pub span: Span,
}

const EDGE_PUNCT: &[char] = &[',', ';', ':', '!', '?', '"', '(', ')', '[', ']', '{', '}'];

/// Split `text` into tokens.
///
/// Inner hyphens separate tokens ("10-seconds"); edge punctuation and trailing
/// periods are left out of the span.
pub(crate) fn tokenize(text: &str) -> Vec<Token> {
    let mut out = Vec::new();
    for m in regex!(r"\S+").find_iter(text) {
        let mut piece_start = m.start();
        for (offset, ch) in m.as_str().char_indices() {
            let at = m.start() + offset;
            if ch == '-' && at > m.start() {
                push_trimmed(&mut out, text, piece_start, at);
                piece_start = at + 1;
            }
        }
        push_trimmed(&mut out, text, piece_start, m.end());
    }
    out
}

fn push_trimmed(out: &mut Vec<Token>, text: &str, start: usize, end: usize) {
    if start >= end {
        return;
    }
    let raw = &text[start..end];
    let lead = raw.len() - raw.trim_start_matches(EDGE_PUNCT).len();
    let body = raw.trim_start_matches(EDGE_PUNCT).trim_end_matches(EDGE_PUNCT).trim_end_matches('.');
    if body.is_empty() || body == "-" {
        return;
    }
    let s = start + lead;
    out.push(Token { text: body.to_string(), span: Span { start: s, end: s + body.len() } });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(s: &str) -> Vec<String> {
        tokenize(s).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn splits_on_whitespace_and_hyphens() {
        assert_eq!(texts("10-seconds  and  5-minutes"), vec!["10", "seconds", "and", "5", "minutes"]);
        assert_eq!(texts("minus -2"), vec!["minus", "-2"]);
    }

    #[test]
    fn spans_exclude_edge_punctuation() {
        let toks = tokenize("one hour, fifty seven.");
        assert_eq!(toks[1].text, "hour");
        assert_eq!(toks[1].span, Span { start: 4, end: 8 });
        assert_eq!(toks[3].text, "seven");
        assert_eq!(toks[3].span, Span { start: 16, end: 21 });
    }

    #[test]
    fn keeps_numeric_punctuation() {
        assert_eq!(texts("91.6 100% 3/4 8:30 100,000"), vec!["91.6", "100%", "3/4", "8:30", "100,000"]);
        assert_eq!(texts("it costs 5."), vec!["it", "costs", "5"]);
    }
}
