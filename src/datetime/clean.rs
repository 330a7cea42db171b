use crate::lexicon::Lexicon;

/// Cleaned words of an utterance plus a mask of the ones a phase has claimed.
///
/// The word list never changes after construction; phases only flip bits in
/// the mask. A claimed word reads as `""` through [`Sentence::word`] and
/// [`Sentence::near`], so later phases cannot anchor on it.
#[derive(Debug, Clone)]
pub(crate) struct Sentence {
    words: Vec<String>,
    consumed: Vec<bool>,
}

impl Sentence {
    pub fn new(text: &str, lexicon: &Lexicon) -> Self {
        let words = clean(text, lexicon);
        let consumed = vec![false; words.len()];
        Sentence { words, consumed }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The word at `i` whether or not it has been claimed.
    pub fn raw(&self, i: usize) -> &str {
        self.words.get(i).map_or("", String::as_str)
    }

    /// The word at `i`, or `""` when it is claimed or out of range.
    pub fn word(&self, i: usize) -> &str {
        if self.is_consumed(i) { "" } else { self.raw(i) }
    }

    /// The live word `offset` positions away from `i`.
    pub fn near(&self, i: usize, offset: isize) -> &str {
        i.checked_add_signed(offset).map_or("", |j| self.word(j))
    }

    pub fn is_consumed(&self, i: usize) -> bool {
        self.consumed.get(i).copied().unwrap_or(false)
    }

    pub fn consume(&mut self, i: usize) {
        if let Some(slot) = self.consumed.get_mut(i) {
            *slot = true;
        }
    }

    pub fn consume_all(&mut self, indices: &[usize]) {
        for &i in indices {
            self.consume(i);
        }
    }

    pub fn consumed_words(&self) -> Vec<&str> {
        self.words.iter().zip(&self.consumed).filter(|(_, c)| **c).map(|(w, _)| w.as_str()).collect()
    }

    /// Live words joined by single spaces. An "and" whose two neighbours were
    /// both claimed goes with them.
    pub fn leftover(&self) -> String {
        let mut live = Vec::new();
        for (i, w) in self.words.iter().enumerate() {
            if self.consumed[i] {
                continue;
            }
            let bridged = w == "and" && i > 0 && self.is_consumed(i - 1) && self.is_consumed(i + 1);
            if !bridged {
                live.push(w.as_str());
            }
        }
        live.join(" ")
    }
}

/// Lowercase, strip sentence punctuation and split the utterance into words.
///
/// "a.m." becomes "am", "o clock" becomes "o'clock", possessive "'s" and
/// ordinal suffixes on digits are dropped, glued forms like "5minutes" or
/// "8:30pm" are split, and articles after the first word are removed.
fn clean(text: &str, lexicon: &Lexicon) -> Vec<String> {
    let lowered = text.to_lowercase();
    let chars: Vec<char> = lowered.chars().collect();
    let mut stripped = String::with_capacity(lowered.len());
    for (i, &c) in chars.iter().enumerate() {
        let decimal_point = c == '.'
            && i > 0
            && chars[i - 1].is_ascii_digit()
            && chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());
        if matches!(c, '?' | ',' | '!') || (c == '.' && !decimal_point) {
            continue;
        }
        stripped.push(c);
    }
    let stripped = regex!(r"\bo(?:'\s*|\s+)?clock\b").replace_all(&stripped, "o'clock");

    let mut words: Vec<String> = Vec::new();
    for raw in stripped.split_whitespace() {
        let word = raw.strip_suffix("'s").unwrap_or(raw);
        if word.is_empty() {
            continue;
        }
        if let Some(caps) = regex!(r"^(\d+)(?:st|nd|rd|th)$").captures(word) {
            words.push(caps[1].to_string());
        } else if let Some(caps) = regex!(r"^(\d+(?::\d+)?)([a-z]+)$").captures(word) {
            words.push(caps[1].to_string());
            words.push(caps[2].to_string());
        } else {
            words.push(word.to_string());
        }
    }

    let mut kept = Vec::with_capacity(words.len());
    for (i, w) in words.into_iter().enumerate() {
        if i > 0 && lexicon.is_article(&w) {
            continue;
        }
        kept.push(w);
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Locale;

    fn words(text: &str) -> Vec<String> {
        clean(text, Lexicon::for_locale(Locale::En))
    }

    #[test]
    fn cleaning_normalizes_surface_forms() {
        assert_eq!(words("Lets meet at 8 a.m."), vec!["lets", "meet", "at", "8", "am"]);
        assert_eq!(words("what is tomorrow's weather?"), vec!["what", "is", "tomorrow", "weather"]);
        assert_eq!(words("on the 4th of July"), vec!["on", "4", "of", "july"]);
        assert_eq!(words("in 5minutes"), vec!["in", "5", "minutes"]);
        assert_eq!(words("for 8:30pm tonight"), vec!["for", "8:30", "pm", "tonight"]);
        assert_eq!(words("at 7 o clock"), vec!["at", "7", "o'clock"]);
        assert_eq!(words("at 7 oclock"), vec!["at", "7", "o'clock"]);
        assert_eq!(words("the hour in 7.5 hours"), vec!["the", "hour", "in", "7.5", "hours"]);
    }

    #[test]
    fn masked_words_read_empty() {
        let mut s = Sentence::new("set an alarm at 9 for tonight", Lexicon::for_locale(Locale::En));
        assert_eq!(s.words(), ["set", "alarm", "at", "9", "for", "tonight"]);
        s.consume(3);
        assert_eq!(s.word(3), "");
        assert_eq!(s.raw(3), "9");
        assert_eq!(s.near(4, -1), "");
        assert_eq!(s.near(0, -1), "");
        assert_eq!(s.near(2, 3), "tonight");
        assert_eq!(s.leftover(), "set alarm at for tonight");
    }

    #[test]
    fn leftover_drops_bridging_and() {
        let mut s = Sentence::new("in 8 weeks and 2 days please", Lexicon::for_locale(Locale::En));
        s.consume_all(&[0, 1, 2, 4, 5]);
        assert_eq!(s.leftover(), "please");
        assert_eq!(s.consumed_words(), vec!["in", "8", "weeks", "2", "days"]);
    }
}
