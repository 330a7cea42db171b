use crate::datetime::{self, DateTimeDetails};
use crate::duration::{self, DurationValue, Resolution};
use crate::error::Result;
use crate::fuzzy;
use crate::lexicon::{Gender, Lexicon, Locale};
use crate::numeral::{self, NumberMatch, NumberOptions};
use chrono::{Local, NaiveDate, NaiveDateTime};

/// Extraction context.
///
/// Holds what relative expressions ("tomorrow", "in 5 minutes") are resolved against.
#[derive(Debug, Clone)]
pub struct Context {
    /// Reference moment for relative expressions.
    pub reference_time: NaiveDateTime,
    pub locale: Locale,
}

impl Context {
    pub fn new(reference_time: NaiveDateTime) -> Self {
        Self { reference_time, locale: Locale::default() }
    }
}

impl Default for Context {
    /// The local clock, read once here; under `cfg(test)` a fixed Tuesday, 2017-06-27 13:04.
    fn default() -> Self {
        let pinned = NaiveDate::from_ymd_opt(2017, 6, 27).and_then(|d| d.and_hms_opt(13, 4, 0));
        let reference_time = match pinned {
            Some(t) if cfg!(test) => t,
            _ => Local::now().naive_local(),
        };
        Self::new(reference_time)
    }
}

/// First number in `text`, or `None` when there is none.
///
/// # Example
/// ```
/// use voxtract::{NumberOptions, extract_number};
///
/// assert_eq!(extract_number("twenty two apples", &NumberOptions::default()), Some(22.0));
/// assert_eq!(extract_number("fraggle", &NumberOptions::default()), None);
/// assert_eq!(extract_number("fraggle zero", &NumberOptions::default()), Some(0.0));
/// ```
pub fn extract_number(text: &str, options: &NumberOptions) -> Option<f64> {
    numeral::find_all(text, options).first().map(|m| m.value)
}

/// Every number in `text`, left to right.
pub fn extract_numbers(text: &str, options: &NumberOptions) -> Vec<f64> {
    numeral::find_all(text, options).into_iter().map(|m| m.value).collect()
}

/// Like [`extract_numbers`], with the byte span each value was read from.
///
/// Spans index the lowercased text and never overlap.
pub fn extract_number_spans(text: &str, options: &NumberOptions) -> Vec<NumberMatch> {
    numeral::find_all(text, options)
}

/// Sum of every duration phrase in `text`, shaped by `resolution`, and the text
/// with those phrases cut out.
///
/// No phrase is not an error: the value is zero and the text comes back whole.
/// [`Resolution::Fixed`] fails with [`crate::Error::DurationOverflow`] past the range of
/// [`chrono::TimeDelta`]; the other resolutions always succeed.
///
/// # Example
/// ```
/// use chrono::TimeDelta;
/// use voxtract::{DurationValue, Resolution, extract_duration};
///
/// let (value, rest) = extract_duration("set a timer for 7.5 minutes", Resolution::Fixed)?;
/// assert_eq!(value, DurationValue::Fixed(TimeDelta::seconds(450)));
/// assert_eq!(rest, "set a timer for");
/// # Ok::<(), voxtract::Error>(())
/// ```
pub fn extract_duration(text: &str, resolution: Resolution) -> Result<(DurationValue, String)> {
    duration::extract(text, resolution, Locale::default())
}

/// Moment named by `text` relative to `context`, and the words left over.
///
/// Expects text that went through [`normalize`] for contractions and number words.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use voxtract::{Context, extract_datetime};
///
/// let reference = NaiveDate::from_ymd_opt(2017, 6, 27).unwrap().and_hms_opt(13, 4, 0).unwrap();
/// let (moment, rest) = extract_datetime("remind me to call mom in 8 weeks and 2 days", &Context::new(reference)).unwrap();
/// assert_eq!(moment.to_string(), "2017-08-24 00:00:00");
/// assert_eq!(rest, "remind me to call mom");
/// ```
pub fn extract_datetime(text: &str, context: &Context) -> Option<(NaiveDateTime, String)> {
    datetime::extract(text, context.reference_time, context.locale)
}

/// [`extract_datetime`] plus the words, the phases that fired and the time taken.
pub fn extract_datetime_verbose(text: &str, context: &Context) -> DateTimeDetails {
    datetime::extract_verbose(text, context.reference_time, context.locale)
}

/// Expand contractions, write "zero".."twenty" as digits and collapse whitespace;
/// with `remove_articles` drop "a", "an" and "the".
pub fn normalize(text: &str, remove_articles: bool) -> String {
    crate::normalize::normalize(text, remove_articles, Locale::default())
}

/// Similarity of two strings in `[0, 1]`.
pub fn fuzzy_match(a: &str, b: &str) -> f64 {
    fuzzy::ratio(a, b)
}

/// The choice closest to `query` with its score; the first one wins ties.
pub fn match_one<'c, C: AsRef<str>>(query: &str, choices: &'c [C]) -> Option<(&'c C, f64)> {
    fuzzy::best(query, choices, |c| c.as_ref())
}

/// [`match_one`] over keyed choices: keys are scored, the value is returned.
pub fn match_one_keyed<'c, K: AsRef<str>, V>(query: &str, choices: &'c [(K, V)]) -> Option<(&'c V, f64)> {
    fuzzy::best(query, choices, |(k, _)| k.as_ref()).map(|((_, v), score)| (v, score))
}

/// Grammatical gender of `word`; English nouns have none.
pub fn get_gender(word: &str, locale: Locale) -> Option<Gender> {
    Lexicon::for_locale(locale).gender(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn default_context_is_pinned_under_test() {
        let ctx = Context::default();
        assert_eq!(ctx.reference_time.to_string(), "2017-06-27 13:04:00");
        assert_eq!(ctx.locale, Locale::En);
    }

    #[test]
    fn datetime_through_context() {
        let ctx = Context::default();
        let (moment, rest) = extract_datetime(&normalize("what's the weather next Friday?", true), &ctx).unwrap();
        assert_eq!(moment.to_string(), "2017-06-30 00:00:00");
        assert_eq!(rest, "what weather");
        assert_eq!(extract_datetime("week", &ctx), None);

        let details = extract_datetime_verbose("in a minute", &ctx);
        assert_eq!(details.text, "in a minute");
        assert_eq!(details.value.map(|(m, _)| m.to_string()), Some("2017-06-27 13:05:00".to_string()));
    }

    #[test]
    fn numbers_and_absence() {
        let plain = NumberOptions::default();
        assert_eq!(extract_number("fraggle", &plain), None);
        assert_eq!(extract_number("fraggle zero", &plain), Some(0.0));
        assert_eq!(extract_numbers("two pigs and six trillion bacteria", &plain), vec![2.0, 6e12]);
        let long = NumberOptions { short_scale: false, ..plain };
        assert_eq!(extract_numbers("two pigs and six trillion bacteria", &long), vec![2.0, 6e18]);

        let spans = extract_number_spans("one hundred and five", &plain);
        assert_eq!(spans.len(), 1);
        assert_eq!((spans[0].span.start, spans[0].span.end), (0, 20));
    }

    #[test]
    fn duration_defaults_to_fixed() {
        let (value, rest) = extract_duration("10-seconds", Resolution::default()).unwrap();
        assert_eq!(value, DurationValue::Fixed(TimeDelta::seconds(10)));
        assert_eq!(rest, "");
    }

    #[test]
    fn fuzzy_helpers() {
        let names = ["frank", "kate", "harry", "henry"];
        assert_eq!(match_one("fran", &names).map(|(c, _)| *c), Some("frank"));

        let keyed = [("frank", 1), ("kate", 2), ("harry", 3), ("henry", 4)];
        assert_eq!(match_one_keyed("frank", &keyed).map(|(v, _)| *v), Some(1));
        assert_eq!(match_one_keyed("enry", &keyed).map(|(v, _)| *v), Some(4));
        assert!(fuzzy_match("You", "you") > 0.5);
    }

    #[test]
    fn no_gender_in_english() {
        assert_eq!(get_gender("person", Locale::En), None);
    }
}
