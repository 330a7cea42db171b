use chrono::{Datelike, NaiveDate};

use super::clean::Sentence;
use super::offset::days_until;
use super::{DateMatch, DatePart, InvalidDate, Phases, Scene};

/// "friday", "next thursday", "last monday", "this wednesday".
pub(crate) fn weekday(s: &Sentence, scene: &Scene) -> Result<Option<DateMatch>, InvalidDate> {
    let lex = scene.lexicon;
    let Some((i, target)) = (0..s.len()).find_map(|i| lex.weekday(s.raw(i)).map(|w| (i, w))) else {
        return Ok(None);
    };
    let mut days = days_until(scene, target);
    let mut taken = vec![i];
    match s.near(i, -1) {
        "next" => {
            if days <= 2 {
                days += 7;
            }
            taken.push(i - 1);
        }
        "last" => {
            days -= 7;
            taken.push(i - 1);
        }
        _ => {}
    }
    Ok(Some(DateMatch { part: DatePart::Days(days), taken, phase: Phases::WEEKDAY }))
}

/// today, tomorrow, yesterday, "day after tomorrow", "day before yesterday".
pub(crate) fn named_day(s: &Sentence, _scene: &Scene) -> Result<Option<DateMatch>, InvalidDate> {
    for i in 0..s.len() {
        let days = match s.raw(i) {
            "today" => 0,
            "tomorrow" => 1,
            "yesterday" => -1,
            _ => continue,
        };
        let compound = match (s.near(i, -2), s.near(i, -1), days) {
            ("day", "after", 1) => Some(2),
            ("day", "before", -1) => Some(-2),
            _ => None,
        };
        let (days, taken) = match compound {
            Some(days) => (days, vec![i - 2, i - 1, i]),
            None => (days, vec![i]),
        };
        return Ok(Some(DateMatch { part: DatePart::Days(days), taken, phase: Phases::NAMED_DAY }));
    }
    Ok(None)
}

/// "<month> <day> [<year>]", "<day> <month> [<year>]", "<day> of <month> [<year>]".
///
/// A day the calendar cannot hold is an error, not a miss.
pub(crate) fn calendar(s: &Sentence, scene: &Scene) -> Result<Option<DateMatch>, InvalidDate> {
    let lex = scene.lexicon;
    for i in 0..s.len() {
        let Some(month) = lex.month(s.raw(i)) else {
            continue;
        };
        let before = day_number(s.near(i, -1));
        let of_day = if s.near(i, -1) == "of" { day_number(s.near(i, -2)) } else { None };
        let (day, mut taken, mut after) = match (before, of_day, day_number(s.near(i, 1))) {
            (Some(day), _, _) => (day, vec![i - 1, i], i + 1),
            (None, Some(day), _) => (day, vec![i - 2, i - 1, i], i + 1),
            (None, None, Some(day)) => (day, vec![i, i + 1], i + 2),
            (None, None, None) => continue,
        };

        let year = year_number(s.word(after));
        if year.is_some() {
            taken.push(after);
            after += 1;
        }
        tracing::trace!(month, day, ?year, end = after, "calendar date");

        let reference = scene.reference.date();
        let date = match year {
            Some(year) => NaiveDate::from_ymd_opt(year, month, day).ok_or(InvalidDate)?,
            None => {
                match NaiveDate::from_ymd_opt(reference.year(), month, day) {
                    Some(date) if date >= reference => date,
                    _ => NaiveDate::from_ymd_opt(reference.year() + 1, month, day).ok_or(InvalidDate)?,
                }
            }
        };
        return Ok(Some(DateMatch { part: DatePart::Date(date), taken, phase: Phases::CALENDAR }));
    }
    Ok(None)
}

fn day_number(word: &str) -> Option<u32> {
    if word.is_empty() || word.len() > 2 || !word.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    word.parse().ok()
}

fn year_number(word: &str) -> Option<i32> {
    if word.len() != 4 || !word.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    word.parse().ok()
}
