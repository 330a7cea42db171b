//! Spoken and written numbers.
//!
//! The [`Scanner`] reads one numeral from a window of words; this module walks
//! a whole utterance with it and reports every numeral it finds, in order.

#[path = "numeral/scanner.rs"]
mod scanner;

#[cfg(test)]
#[path = "numeral/tests.rs"]
mod tests;

pub(crate) use scanner::{Scanner, parse_literal};

use crate::Span;
use crate::lexicon::{Lexicon, Locale};
use crate::tokens::tokenize;

/// Knobs for number extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberOptions {
    /// Read "third" as 3 rather than 1/3.
    pub ordinals: bool,
    /// Short scale ("billion" = 10^9) when true, long scale (10^12) otherwise.
    pub short_scale: bool,
    pub locale: Locale,
}

impl Default for NumberOptions {
    fn default() -> Self {
        NumberOptions { ordinals: false, short_scale: true, locale: Locale::En }
    }
}

/// One numeral found in an utterance.
///
/// `span` indexes the lowercased input; for ASCII text that is the same as
/// indexing the original.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberMatch {
    pub value: f64,
    pub span: Span,
    pub text: String,
}

/// Every numeral in `text`, left to right, without overlaps.
pub(crate) fn find_all(text: &str, options: &NumberOptions) -> Vec<NumberMatch> {
    let lowered = text.to_lowercase();
    let tokens = tokenize(&lowered);
    let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    let lexicon = Lexicon::for_locale(options.locale);
    let scanner = Scanner::new(&words, lexicon).ordinals(options.ordinals).short_scale(options.short_scale);

    let mut found = Vec::new();
    let mut i = 0;
    while i < words.len() {
        let Some(mut reading) = scanner.read_at(i) else {
            i += 1;
            continue;
        };
        if let Some((extra, len)) = trailing_fraction(&scanner, i + reading.len, reading.value) {
            reading.value += extra;
            reading.len += len;
        }
        let span = Span { start: tokens[i].span.start, end: tokens[i + reading.len - 1].span.end };
        tracing::debug!(value = reading.value, start = span.start, end = span.end, "numeral");
        found.push(NumberMatch { value: reading.value, span, text: lowered[span.start..span.end].to_string() });
        i += reading.len;
    }
    found
}

/// "1 cup and a half": a whole number, one noun, then "and a/an/one <fraction>".
fn trailing_fraction(scanner: &Scanner<'_, &str>, at: usize, value: f64) -> Option<(f64, usize)> {
    if value.fract() != 0.0 || scanner.is_numeric(at) {
        return None;
    }
    scanner.word(at)?;
    if scanner.word(at + 1)? != "and" || !matches!(scanner.word(at + 2)?, "a" | "an" | "one") {
        return None;
    }
    let den = scanner.denominator(at + 3)?;
    Some((1.0 / den, 4))
}
