//! Date/time extraction.
//!
//! The cleaned words of an utterance live in a [`Sentence`]; each phase looks
//! for its own phrase class and claims the words it reads. Exactly one date
//! phase may fire per call (the first that does), then the clock scan runs over
//! whatever is left and the two are composed against the reference moment.

#[path = "datetime/clean.rs"]
mod clean;
#[path = "datetime/clock.rs"]
mod clock;
#[path = "datetime/compose.rs"]
mod compose;
#[path = "datetime/days.rs"]
mod days;
#[path = "datetime/offset.rs"]
mod offset;


use std::time::{Duration, Instant};

use bitflags::bitflags;
use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::duration::UnitAmounts;
use crate::lexicon::{Lexicon, Locale};
use clean::Sentence;

bitflags! {
    /// Phases that fired while reading one utterance.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Phases: u16 {
        const NOW = 1 << 0;
        const OFFSET = 1 << 1;
        const WEEKDAY = 1 << 2;
        const NAMED_DAY = 1 << 3;
        const CALENDAR = 1 << 4;
        const CLOCK = 1 << 5;
        /// The offset was counted from an anchor day ("from tomorrow").
        const ANCHOR = 1 << 6;
        /// The day is fixed even if the clock has already passed ("this morning").
        const PINNED = 1 << 7;
    }
}

/// Everything a phase may read besides the words.
#[derive(Clone, Copy)]
pub(crate) struct Scene {
    pub reference: NaiveDateTime,
    pub lexicon: &'static Lexicon,
}

/// A date the calendar cannot hold; ends the whole call with no match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct InvalidDate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum DatePart {
    /// Relative to the reference moment.
    Shift(UnitAmounts),
    /// Whole days from the reference date.
    Days(i64),
    Date(NaiveDate),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DateMatch {
    pub part: DatePart,
    pub taken: Vec<usize>,
    pub phase: Phases,
}

type DatePhase = fn(&Sentence, &Scene) -> Result<Option<DateMatch>, InvalidDate>;

const DATE_PHASES: &[(&str, DatePhase)] = &[
    ("offset", offset::offset),
    ("weekday", days::weekday),
    ("named_day", days::named_day),
    ("calendar", days::calendar),
];

/// Trace of one [`crate::extract_datetime_verbose`] call.
#[derive(Debug, Clone)]
pub struct DateTimeDetails {
    pub text: String,
    /// Words after cleaning, in order.
    pub words: Vec<String>,
    /// Words claimed by a phase.
    pub consumed: Vec<String>,
    pub phases: Phases,
    pub value: Option<(NaiveDateTime, String)>,
    pub elapsed: Duration,
}

struct Outcome {
    sentence: Sentence,
    phases: Phases,
    value: Option<(NaiveDateTime, String)>,
}

fn run(text: &str, reference: NaiveDateTime, locale: Locale) -> Outcome {
    let scene = Scene { reference, lexicon: Lexicon::for_locale(locale) };
    let mut s = Sentence::new(text, scene.lexicon);
    let mut phases = Phases::empty();
    if s.is_empty() {
        return Outcome { sentence: s, phases, value: None };
    }
    let reference = scene.reference.with_nanosecond(0).unwrap_or(scene.reference);

    if let Some(i) = (0..s.len()).find(|&i| s.raw(i) == "now" && !matches!(s.near(i, -1), "from" | "after")) {
        s.consume(i);
        phases |= Phases::NOW;
        tracing::debug!(index = i, "now");
        let leftover = s.leftover();
        return Outcome { sentence: s, phases, value: Some((reference, leftover)) };
    }

    let mut date = None;
    for &(name, phase) in DATE_PHASES {
        match phase(&s, &scene) {
            Ok(None) => continue,
            Ok(Some(m)) => {
                tracing::debug!(phase = name, taken = ?m.taken, "date phase");
                date = Some(m);
                break;
            }
            Err(InvalidDate) => {
                tracing::debug!(phase = name, "impossible date");
                return Outcome { sentence: s, phases, value: None };
            }
        }
    }

    if let Some(m) = &date {
        s.consume_all(&m.taken);
        phases |= m.phase;
        if let Some(&first) = m.taken.iter().min() {
            let mut at = first;
            if s.near(at, -1) == "this" {
                at -= 1;
                s.consume(at);
            }
            if scene.lexicon.is_marker(s.near(at, -1)) {
                s.consume(at - 1);
            }
        }
    }

    let scan = clock::scan(&mut s, &scene);
    if scan.clock.is_some() {
        phases |= Phases::CLOCK;
    }
    if scan.pinned {
        phases |= Phases::PINNED;
    }
    if date.is_none() && scan.clock.is_none() {
        return Outcome { sentence: s, phases, value: None };
    }

    let moment = compose::compose(reference, date.as_ref().map(|m| m.part), &scan);
    tracing::debug!(?phases, ?moment, "datetime");
    let value = moment.map(|m| (m, s.leftover()));
    Outcome { sentence: s, phases, value }
}

pub(crate) fn extract(text: &str, reference: NaiveDateTime, locale: Locale) -> Option<(NaiveDateTime, String)> {
    run(text, reference, locale).value
}

pub(crate) fn extract_verbose(text: &str, reference: NaiveDateTime, locale: Locale) -> DateTimeDetails {
    let started = Instant::now();
    let outcome = run(text, reference, locale);
    DateTimeDetails {
        text: text.to_string(),
        words: outcome.sentence.words().to_vec(),
        consumed: outcome.sentence.consumed_words().into_iter().map(str::to_string).collect(),
        phases: outcome.phases,
        value: outcome.value,
        elapsed: started.elapsed(),
    }
}
