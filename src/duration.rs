//! Duration phrases: "<magnitude> [of] [a|an] <unit>".
//!
//! Every phrase in an utterance is summed per unit into [`UnitAmounts`], which
//! is then shaped by the caller's [`Resolution`]. Datetime extraction reuses
//! [`phrase_at`] and [`UnitAmounts`] for its relative offsets.

#[path = "duration/shift.rs"]
pub(crate) mod shift;


use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, TimeDelta};

use crate::Span;
use crate::error::{Error, Result};
use crate::lexicon::{DurationUnit, Lexicon, Locale};
use crate::numeral::Scanner;
use crate::tokens::tokenize;

pub const DAYS_IN_1_MONTH: f64 = 30.42;
pub const DAYS_IN_1_YEAR: f64 = 365.25;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Unit a scalar total is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    fn seconds(self) -> f64 {
        match self {
            TimeUnit::Seconds => 1.0,
            TimeUnit::Minutes => 60.0,
            TimeUnit::Hours => 3600.0,
            TimeUnit::Days => SECONDS_PER_DAY,
        }
    }
}

/// Output shape of [`crate::extract_duration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resolution {
    /// Every unit flattened into a fixed-length [`TimeDelta`].
    #[default]
    Fixed,
    /// Years and months kept apart from the fixed-length units.
    Calendar,
    /// A single number in the given unit.
    Total(TimeUnit),
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resolution::Fixed => "fixed",
            Resolution::Calendar => "calendar",
            Resolution::Total(TimeUnit::Seconds) => "seconds",
            Resolution::Total(TimeUnit::Minutes) => "minutes",
            Resolution::Total(TimeUnit::Hours) => "hours",
            Resolution::Total(TimeUnit::Days) => "days",
        };
        f.write_str(name)
    }
}

impl FromStr for Resolution {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" | "timedelta" => Ok(Resolution::Fixed),
            "calendar" | "relativedelta" => Ok(Resolution::Calendar),
            "seconds" | "total_seconds" => Ok(Resolution::Total(TimeUnit::Seconds)),
            "minutes" | "total_minutes" => Ok(Resolution::Total(TimeUnit::Minutes)),
            "hours" | "total_hours" => Ok(Resolution::Total(TimeUnit::Hours)),
            "days" | "total_days" => Ok(Resolution::Total(TimeUnit::Days)),
            other => Err(Error::InvalidResolution(other.to_string())),
        }
    }
}

/// A calendar-aware offset: months and years stay symbolic until applied to a date.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CalendarDelta {
    pub years: f64,
    pub months: f64,
    pub days: f64,
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl CalendarDelta {
    /// Add this delta to `dt`.
    ///
    /// Whole months move the calendar (clamping the day); any fractional month
    /// or year is converted with [`DAYS_IN_1_MONTH`].
    pub fn apply(&self, dt: NaiveDateTime) -> Option<NaiveDateTime> {
        let months = self.years * 12.0 + self.months;
        let whole = months.trunc();
        let shifted = if whole != 0.0 { shift::add_months(dt, whole as i64)? } else { dt };
        let seconds = (months - whole) * DAYS_IN_1_MONTH * SECONDS_PER_DAY
            + self.days * SECONDS_PER_DAY
            + self.hours * 3600.0
            + self.minutes * 60.0
            + self.seconds;
        shifted.checked_add_signed(to_delta(seconds)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DurationValue {
    Fixed(TimeDelta),
    Calendar(CalendarDelta),
    Total(f64),
}

impl fmt::Display for DurationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationValue::Fixed(delta) => write!(f, "{delta}"),
            DurationValue::Calendar(c) => write!(
                f,
                "{}y {}mo {}d {}h {}m {}s",
                c.years, c.months, c.days, c.hours, c.minutes, c.seconds
            ),
            DurationValue::Total(v) => write!(f, "{v}"),
        }
    }
}

/// Per-unit magnitudes collected from one or more duration phrases.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct UnitAmounts {
    pub seconds: f64,
    pub minutes: f64,
    pub hours: f64,
    pub days: f64,
    pub weeks: f64,
    pub months: f64,
    pub years: f64,
}

impl UnitAmounts {
    pub fn add(&mut self, unit: DurationUnit, amount: f64) {
        match unit {
            DurationUnit::Second => self.seconds += amount,
            DurationUnit::Minute => self.minutes += amount,
            DurationUnit::Hour => self.hours += amount,
            DurationUnit::Day => self.days += amount,
            DurationUnit::Week => self.weeks += amount,
            DurationUnit::Month => self.months += amount,
            DurationUnit::Year => self.years += amount,
            DurationUnit::Decade => self.years += amount * 10.0,
            DurationUnit::Century => self.years += amount * 100.0,
            DurationUnit::Millennium => self.years += amount * 1000.0,
        }
    }

    pub fn add_all(&mut self, other: &UnitAmounts) {
        self.seconds += other.seconds;
        self.minutes += other.minutes;
        self.hours += other.hours;
        self.days += other.days;
        self.weeks += other.weeks;
        self.months += other.months;
        self.years += other.years;
    }

    pub fn negated(self) -> Self {
        UnitAmounts {
            seconds: -self.seconds,
            minutes: -self.minutes,
            hours: -self.hours,
            days: -self.days,
            weeks: -self.weeks,
            months: -self.months,
            years: -self.years,
        }
    }

    pub fn has_sub_day(&self) -> bool {
        self.hours != 0.0 || self.minutes != 0.0 || self.seconds != 0.0
    }

    /// Days plus weeks, the part of the offset a "next <weekday>" anchor looks at.
    pub fn day_count(&self) -> f64 {
        self.days + self.weeks * 7.0
    }

    pub fn total_seconds(&self) -> f64 {
        self.seconds
            + self.minutes * 60.0
            + self.hours * 3600.0
            + self.day_count() * SECONDS_PER_DAY
            + self.months * DAYS_IN_1_MONTH * SECONDS_PER_DAY
            + self.years * DAYS_IN_1_YEAR * SECONDS_PER_DAY
    }

    pub fn calendar(&self) -> CalendarDelta {
        CalendarDelta {
            years: self.years,
            months: self.months,
            days: self.day_count(),
            hours: self.hours,
            minutes: self.minutes,
            seconds: self.seconds,
        }
    }

    /// Only the whole-day-and-larger units.
    pub fn date_part(&self) -> CalendarDelta {
        CalendarDelta { hours: 0.0, minutes: 0.0, seconds: 0.0, ..self.calendar() }
    }

    pub fn clock_part(&self) -> Option<TimeDelta> {
        to_delta(self.hours * 3600.0 + self.minutes * 60.0 + self.seconds)
    }

    /// Fails only for a fixed delta beyond what [`TimeDelta`] can hold.
    pub fn resolve(&self, resolution: Resolution) -> Result<DurationValue> {
        let value = match resolution {
            Resolution::Fixed => {
                let seconds = self.total_seconds();
                DurationValue::Fixed(to_delta(seconds).ok_or_else(|| Error::DurationOverflow(seconds.to_string()))?)
            }
            Resolution::Calendar => DurationValue::Calendar(self.calendar()),
            Resolution::Total(unit) => DurationValue::Total(self.total_seconds() / unit.seconds()),
        };
        Ok(value)
    }
}

/// `seconds` as a delta rounded to the microsecond, or `None` outside the range of [`TimeDelta`].
fn to_delta(seconds: f64) -> Option<TimeDelta> {
    if !seconds.is_finite() {
        return None;
    }
    let mut whole = seconds.floor();
    let mut micros = ((seconds - whole) * 1e6).round();
    if micros >= 1e6 {
        whole += 1.0;
        micros = 0.0;
    }
    if whole.abs() >= i64::MAX as f64 {
        return None;
    }
    TimeDelta::new(whole as i64, micros as u32 * 1000)
}

/// One duration phrase read from a word window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Phrase {
    pub unit: DurationUnit,
    pub amount: f64,
    pub len: usize,
}

/// Read a duration phrase starting exactly at word `i`.
pub(crate) fn phrase_at<S: AsRef<str>>(words: &[S], i: usize, lexicon: &'static Lexicon) -> Option<Phrase> {
    let word = |k: usize| words.get(k).map(|w| w.as_ref());

    if matches!(word(i)?, "a" | "an") {
        if let Some(unit) = word(i + 1).and_then(|w| lexicon.unit(w)) {
            return Some(Phrase { unit, amount: 1.0, len: 2 });
        }
    }

    let reading = Scanner::new(words, lexicon).read_at(i)?;
    let mut j = i + reading.len;
    if word(j) == Some("of") {
        j += 1;
    }
    if matches!(word(j), Some("a" | "an")) {
        j += 1;
    }
    let unit = lexicon.unit(word(j)?)?;
    Some(Phrase { unit, amount: reading.value, len: j + 1 - i })
}

pub(crate) fn extract(text: &str, resolution: Resolution, locale: Locale) -> Result<(DurationValue, String)> {
    let lowered = text.to_lowercase();
    let tokens = tokenize(&lowered);
    let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    let lexicon = Lexicon::for_locale(locale);

    let mut amounts = UnitAmounts::default();
    let mut cuts: Vec<Span> = Vec::new();
    let mut i = 0;
    while i < words.len() {
        let Some(phrase) = phrase_at(&words, i, lexicon) else {
            i += 1;
            continue;
        };
        let cut = Span { start: tokens[i].span.start, end: tokens[i + phrase.len - 1].span.end };
        tracing::debug!(unit = ?phrase.unit, amount = phrase.amount, start = cut.start, end = cut.end, "duration phrase");
        amounts.add(phrase.unit, phrase.amount);
        cuts.push(cut);
        i += phrase.len;
    }

    if cuts.is_empty() {
        return Ok((UnitAmounts::default().resolve(resolution)?, text.to_string()));
    }

    let mut leftover = String::with_capacity(lowered.len());
    let mut at = 0;
    for cut in &cuts {
        leftover.push_str(&lowered[at..cut.start]);
        at = cut.end;
    }
    leftover.push_str(&lowered[at..]);
    Ok((amounts.resolve(resolution)?, leftover.trim().to_string()))
}
