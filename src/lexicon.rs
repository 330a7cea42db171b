//! Locale-scoped word tables.
//!
//! A [`Lexicon`] is pure data: word to value maps and keyword sets that the
//! otherwise language-agnostic scanners consult. One static table exists per
//! supported [`Locale`]; it is built lazily on first use and shared for the
//! lifetime of the process.

#[path = "lexicon/en.rs"]
mod en;

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use chrono::Weekday;

use crate::error::Error;

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
}

impl Locale {
    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en-us",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" | "en-gb" | "en-au" => Ok(Locale::En),
            other => Err(Error::UnsupportedLocale(other.to_string())),
        }
    }
}

/// Calendar/clock units a duration phrase can name, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum DurationUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
    Decade,
    Century,
    Millennium,
}

/// Half of the day a qualifier word points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Meridiem {
    Am,
    Pm,
}

/// Grammatical gender of a noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

/// Lexical class of a single lowercase word, as far as numerals are concerned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum NumberWord {
    /// zero..nine
    Ones(f64),
    /// ten..nineteen
    Teen(f64),
    /// twenty..ninety
    Tens(f64),
    Hundred,
    Scale(f64),
    /// `unit` is set for first..ninth, which combine after a tens word.
    Ordinal { rank: f64, unit: bool },
    /// half, quarter(s) and plural ordinals; the value is the denominator.
    Fraction(f64),
    Couple,
    Dozen,
    Article,
    And,
    Point,
    Minus,
}

struct ScaleEntry {
    short: f64,
    long: f64,
}

pub(crate) struct Lexicon {
    numbers: HashMap<&'static str, NumberWord>,
    scales: HashMap<&'static str, ScaleEntry>,
    scale_ordinals: HashMap<&'static str, &'static str>,
    units: HashMap<&'static str, DurationUnit>,
    weekdays: HashMap<&'static str, Weekday>,
    months: HashMap<&'static str, u32>,
    qualifiers: HashMap<&'static str, Meridiem>,
    markers: HashSet<&'static str>,
    recurrence: HashSet<&'static str>,
    articles: HashSet<&'static str>,
    contractions: HashMap<&'static str, &'static str>,
    small_numbers: HashMap<&'static str, u32>,
    genders: HashMap<&'static str, Gender>,
}

impl Lexicon {
    pub fn for_locale(locale: Locale) -> &'static Lexicon {
        match locale {
            Locale::En => &en::LEXICON,
        }
    }

    /// Classify `word` for the numeral scanner; scale-dependent values follow `short_scale`.
    pub fn number_word(&self, word: &str, short_scale: bool) -> Option<NumberWord> {
        if let Some(entry) = self.scales.get(word) {
            return Some(NumberWord::Scale(if short_scale { entry.short } else { entry.long }));
        }
        if let Some(base) = self.scale_ordinals.get(word) {
            let entry = self.scales.get(base)?;
            let rank = if short_scale { entry.short } else { entry.long };
            return Some(NumberWord::Ordinal { rank, unit: false });
        }
        self.numbers.get(word).copied()
    }

    pub fn unit(&self, word: &str) -> Option<DurationUnit> {
        self.units.get(word).copied()
    }

    /// Weekday named by `word`, plural forms ("mondays") included.
    pub fn weekday(&self, word: &str) -> Option<Weekday> {
        self.weekdays.get(word).or_else(|| self.weekdays.get(word.strip_suffix('s')?)).copied()
    }

    pub fn month(&self, word: &str) -> Option<u32> {
        self.months.get(word).copied()
    }

    pub fn qualifier(&self, word: &str) -> Option<Meridiem> {
        self.qualifiers.get(word).copied()
    }

    pub fn is_marker(&self, word: &str) -> bool {
        self.markers.contains(word)
    }

    pub fn is_recurrence(&self, word: &str) -> bool {
        self.recurrence.contains(word) || self.weekday(word).is_some()
    }

    pub fn is_article(&self, word: &str) -> bool {
        self.articles.contains(word)
    }

    pub fn contraction(&self, word: &str) -> Option<&'static str> {
        self.contractions.get(word).copied()
    }

    pub fn small_number(&self, word: &str) -> Option<u32> {
        self.small_numbers.get(word).copied()
    }

    /// English nouns carry no gender, so its table is empty.
    pub fn gender(&self, word: &str) -> Option<Gender> {
        self.genders.get(word).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_tags_parse() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("EN_us".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("fr-fr".parse::<Locale>(), Err(Error::UnsupportedLocale("fr-fr".to_string())));
    }

    #[test]
    fn scale_words_follow_scale_convention() {
        let lex = Lexicon::for_locale(Locale::En);
        assert_eq!(lex.number_word("billion", true), Some(NumberWord::Scale(1e9)));
        assert_eq!(lex.number_word("billion", false), Some(NumberWord::Scale(1e12)));
        assert_eq!(lex.number_word("trillions", false), Some(NumberWord::Scale(1e18)));
        assert_eq!(lex.number_word("billionth", true), Some(NumberWord::Ordinal { rank: 1e9, unit: false }));
        assert_eq!(lex.number_word("billionth", false), Some(NumberWord::Ordinal { rank: 1e12, unit: false }));
    }

    #[test]
    fn temporal_keywords() {
        let lex = Lexicon::for_locale(Locale::En);
        assert_eq!(lex.weekday("thursday"), Some(Weekday::Thu));
        assert_eq!(lex.weekday("mondays"), Some(Weekday::Mon));
        assert_eq!(lex.weekday("weekday"), None);
        assert_eq!(lex.month("sept"), Some(9));
        assert_eq!(lex.unit("millennia"), Some(DurationUnit::Millennium));
        assert_eq!(lex.qualifier("tonight"), Some(Meridiem::Pm));
        assert!(lex.is_recurrence("weekdays"));
        assert!(lex.is_marker("within"));
    }
}
