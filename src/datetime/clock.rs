use super::Scene;
use super::clean::Sentence;
use crate::lexicon::{Lexicon, Meridiem};

/// Where a time of day came from; only bare spoken hours are ambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ClockSource {
    /// noon, midnight
    Named,
    /// morning, afternoon, evening, night, tonight
    Period,
    Digits { meridiem: bool, military: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Clock {
    pub hour: u32,
    pub minute: u32,
    pub source: ClockSource,
}

impl Clock {
    fn new(hour: u32, minute: u32, source: ClockSource) -> Self {
        Clock { hour, minute, source }
    }

    pub fn is_ambiguous(&self) -> bool {
        self.source == ClockSource::Digits { meridiem: false, military: false }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ClockScan {
    pub clock: Option<Clock>,
    /// "this morning": the day is fixed even when the clock is already past.
    pub pinned: bool,
    /// "early"/"late" nudge, in hours.
    pub hour_shift: i64,
}

/// A time of day read at one position, before post-processing.
struct Reading {
    hour: u32,
    minute: u32,
    meridiem: Option<Meridiem>,
    military: bool,
    taken: Vec<usize>,
    pinned: bool,
}

impl Reading {
    fn plain(hour: u32, minute: u32, taken: Vec<usize>) -> Self {
        Reading { hour, minute, meridiem: None, military: false, taken, pinned: false }
    }

    fn military(hour: u32, minute: u32, taken: Vec<usize>) -> Self {
        Reading { hour, minute, meridiem: None, military: true, taken, pinned: false }
    }
}

fn default_hour(period: &str) -> Option<u32> {
    match period {
        "morning" => Some(8),
        "afternoon" => Some(15),
        "evening" => Some(19),
        "night" | "tonight" => Some(22),
        _ => None,
    }
}

fn am_pm(word: &str) -> Option<Meridiem> {
    match word {
        "am" => Some(Meridiem::Am),
        "pm" => Some(Meridiem::Pm),
        _ => None,
    }
}

/// Scan the live words for a time of day, claiming what it reads.
pub(crate) fn scan(s: &mut Sentence, scene: &Scene) -> ClockScan {
    let lex = scene.lexicon;
    let qualifier = (0..s.len()).rev().find_map(|i| lex.qualifier(s.raw(i)));
    let mut out = ClockScan::default();

    for i in 0..s.len() {
        if s.is_consumed(i) {
            continue;
        }
        let prev = s.near(i, -1).to_string();
        let prevprev = s.near(i, -2).to_string();
        let word = s.raw(i).to_string();

        match word.as_str() {
            "noon" | "midnight" => {
                let hour = if word == "noon" { 12 } else { 0 };
                out.clock = Some(Clock::new(hour, 0, ClockSource::Named));
                s.consume(i);
            }
            "morning" | "afternoon" | "evening" => {
                if out.clock.is_none() {
                    let hour = default_hour(&word).unwrap_or(0);
                    out.clock = Some(Clock::new(hour, 0, ClockSource::Period));
                }
                s.consume(i);
            }
            "night" | "tonight" => {
                if out.clock.is_none() {
                    out.clock = Some(Clock::new(22, 0, ClockSource::Period));
                }
                continue;
            }
            _ => {
                let Some(reading) = read_digits(s, i, qualifier, lex) else {
                    continue;
                };
                let Some(clock) = finish(&reading) else {
                    tracing::debug!(word = %word, "rejected clock reading");
                    continue;
                };
                s.consume_all(&reading.taken);
                out.pinned |= reading.pinned;
                out.clock = Some(clock);
            }
        }

        match prev.as_str() {
            "o" | "oh" => s.consume(i - 1),
            "early" => {
                out.hour_shift -= 1;
                s.consume(i - 1);
            }
            "late" => {
                out.hour_shift += 1;
                s.consume(i - 1);
            }
            _ => {}
        }
        if lex.is_marker(&prev) {
            s.consume(i - 1);
            out.pinned |= prev == "this";
        }
        if lex.is_marker(&prevprev) {
            s.consume(i - 2);
            out.pinned |= prevprev == "this";
        }
    }
    out
}

/// Apply the meridiem and validate the clock.
fn finish(reading: &Reading) -> Option<Clock> {
    let hour = match reading.meridiem {
        Some(Meridiem::Pm) if reading.hour < 12 => reading.hour + 12,
        Some(Meridiem::Am) if reading.hour == 12 => 0,
        _ => reading.hour,
    };
    if hour > 23 || reading.minute > 59 {
        return None;
    }
    let source = ClockSource::Digits { meridiem: reading.meridiem.is_some(), military: reading.military };
    Some(Clock::new(hour, reading.minute, source))
}

/// Indices claimed by a "tonight" within two words before or three after `i`,
/// together with everything between it and `i`.
fn tonight_cue(s: &Sentence, i: usize) -> Option<Vec<usize>> {
    let lo = i.saturating_sub(2);
    let j = (lo..=i + 3).find(|&j| j != i && s.word(j) == "tonight")?;
    Some(if j < i { (j..i).collect() } else { (i + 1..=j).collect() })
}

/// "in [the] morning", "this evening": the meridiem named by a period word at `i`.
fn period_after(s: &Sentence, i: usize, lex: &Lexicon) -> Option<Meridiem> {
    default_hour(s.word(i))?;
    lex.qualifier(s.word(i))
}

fn read_digits(s: &Sentence, i: usize, qualifier: Option<Meridiem>, lex: &Lexicon) -> Option<Reading> {
    let word = s.word(i);
    if let Some(caps) = regex!(r"^(\d{1,2}):(\d{2})$").captures(word) {
        let hour = caps[1].parse().ok()?;
        let minute = caps[2].parse().ok()?;
        return read_colon(s, i, hour, minute, qualifier, lex);
    }
    if word.is_empty() || !word.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: u32 = word.parse().ok()?;
    let hhmm = |v: u32| if word.len() >= 3 { (v / 100, v % 100) } else { (v, 0) };
    let next = s.near(i, 1);
    let prev = s.near(i, -1);

    let mut reading = if let Some(m) = am_pm(next) {
        let (hour, minute) = hhmm(value);
        Reading { meridiem: Some(m), ..Reading::plain(hour, minute, vec![i, i + 1]) }
    } else if matches!(prev, "o" | "oh") || (3..=4).contains(&word.len()) {
        let (hour, minute) = hhmm(value);
        let mut taken = vec![i];
        if matches!(next, "hours" | "hour") {
            taken.push(i + 1);
        }
        return Some(Reading::military(hour, minute, taken));
    } else if word.len() <= 2 && next.len() <= 2 && !next.is_empty() && next.bytes().all(|b| b.is_ascii_digit()) {
        let minute = next.parse().ok()?;
        let mut taken = vec![i, i + 1];
        if matches!(s.near(i, 2), "hours" | "hour") {
            taken.push(i + 2);
        }
        return Some(Reading::military(value, minute, taken));
    } else if next == "o'clock" {
        let mut reading = Reading::plain(value, 0, vec![i, i + 1]);
        if let Some(m) = (s.near(i, 2) == "in").then(|| period_after(s, i + 3, lex)).flatten() {
            reading.meridiem = Some(m);
            reading.taken.extend([i + 2, i + 3]);
        } else if let Some(cue) = tonight_cue(s, i) {
            reading.meridiem = Some(Meridiem::Pm);
            reading.taken.extend(cue);
        }
        reading
    } else if let Some(m) = (next == "in").then(|| period_after(s, i + 2, lex)).flatten() {
        Reading { meridiem: Some(m), ..Reading::plain(value, 0, vec![i, i + 1, i + 2]) }
    } else if let Some(cue) = tonight_cue(s, i) {
        let mut reading = Reading { meridiem: Some(Meridiem::Pm), ..Reading::plain(value, 0, vec![i]) };
        reading.taken.extend(cue);
        reading
    } else if lex.is_recurrence(next) {
        Reading::plain(value, 0, vec![i])
    } else if lex.is_recurrence(s.near(i, 2)) && !next.is_empty() {
        Reading::plain(value, 0, vec![i, i + 1])
    } else if next.is_empty() && prev == "at" {
        Reading::plain(value, 0, vec![i])
    } else {
        return None;
    };

    if reading.meridiem.is_none() {
        reading.meridiem = qualifier;
    }
    Some(reading)
}

fn read_colon(
    s: &Sentence,
    i: usize,
    hour: u32,
    minute: u32,
    qualifier: Option<Meridiem>,
    lex: &Lexicon,
) -> Option<Reading> {
    let next = s.near(i, 1);
    let mut reading = Reading::plain(hour, minute, vec![i]);

    if let Some(m) = am_pm(next) {
        reading.meridiem = Some(m);
        reading.taken.push(i + 1);
    } else if let Some(m) = (next == "in").then(|| period_after(s, i + 2, lex)).flatten() {
        reading.meridiem = Some(m);
        reading.taken.extend([i + 1, i + 2]);
    } else if let Some(m) = (next == "this").then(|| period_after(s, i + 2, lex)).flatten() {
        reading.meridiem = Some(m);
        reading.taken.extend([i + 1, i + 2]);
        reading.pinned = true;
    } else if next == "at" && s.near(i, 2) == "night" {
        reading.meridiem = Some(if hour > 5 { Meridiem::Pm } else { Meridiem::Am });
        reading.taken.extend([i + 1, i + 2]);
    }

    if let Some(cue) = tonight_cue(s, i) {
        reading.taken.extend(cue);
        reading.meridiem.get_or_insert(Meridiem::Pm);
    } else if reading.meridiem.is_none() {
        match qualifier {
            // The period word's own default wins over a colon time it cannot place.
            Some(Meridiem::Pm) if hour <= 12 => return None,
            Some(Meridiem::Am) => reading.meridiem = Some(Meridiem::Am),
            _ => {}
        }
    }
    Some(reading)
}
