use chrono::{Datelike, Weekday};

use super::clean::Sentence;
use super::{DateMatch, DatePart, InvalidDate, Phases, Scene};
use crate::duration::{UnitAmounts, phrase_at};
use crate::lexicon::DurationUnit;
use crate::numeral::parse_literal;

/// Days from the reference date to the next `target` (0 when it is today).
pub(crate) fn days_until(scene: &Scene, target: Weekday) -> i64 {
    let from = i64::from(scene.reference.weekday().num_days_from_monday());
    (i64::from(target.num_days_from_monday()) - from).rem_euclid(7)
}

/// Relative offsets: "in 5 minutes", "2 weeks and 6 days from saturday",
/// "3 days ago", "next week", "within the hour".
///
/// Every phrase in the sentence accumulates into one shift.
pub(crate) fn offset(s: &Sentence, scene: &Scene) -> Result<Option<DateMatch>, InvalidDate> {
    let lex = scene.lexicon;
    let words = s.words();
    let mut total = UnitAmounts::default();
    let mut taken = Vec::new();
    let mut phase = Phases::OFFSET;

    let mut i = 0;
    while i < words.len() {
        if let Some(p) = phrase_at(words, i, lex).filter(|p| !military(s, i, p.len, p.unit)) {
            let mut amounts = UnitAmounts::default();
            amounts.add(p.unit, p.amount);
            taken.extend(i..i + p.len);
            let mut j = i + p.len;

            if s.raw(j) == "ago" {
                total.add_all(&amounts);
                total = total.negated();
                taken.push(j);
                i = j + 1;
                continue;
            }
            if let Some(anchor) = anchor(s, scene, j, total.day_count() + amounts.day_count()) {
                if anchor.before {
                    amounts = amounts.negated();
                }
                amounts.days += anchor.days as f64;
                taken.extend(j..j + anchor.len);
                j += anchor.len;
                phase |= Phases::ANCHOR;
            }
            total.add_all(&amounts);
            i = j;
            continue;
        }

        let next_unit = lex.unit(s.raw(i + 1));
        match (s.raw(i), next_unit) {
            ("next" | "last", Some(unit)) if unit >= DurationUnit::Week => {
                total.add(unit, if s.raw(i) == "next" { 1.0 } else { -1.0 });
                taken.extend([i, i + 1]);
                i += 2;
            }
            ("in" | "within", Some(unit)) => {
                total.add(unit, 1.0);
                taken.extend([i, i + 1]);
                i += 2;
            }
            _ => i += 1,
        }
    }

    if taken.is_empty() {
        return Ok(None);
    }
    Ok(Some(DateMatch { part: DatePart::Shift(total), taken, phase }))
}

/// A number in front of "hours" that reads as a clock: "0700 hours",
/// "o 800 hours", "06 30 hours".
fn military(s: &Sentence, i: usize, len: usize, unit: DurationUnit) -> bool {
    if unit != DurationUnit::Hour || len != 2 {
        return false;
    }
    let word = s.raw(i);
    let Some(lit) = parse_literal(word) else {
        return false;
    };
    let prev = if i > 0 { s.raw(i - 1) } else { "" };
    (word.len() > 1 && word.starts_with('0'))
        || (lit.integer && (100.0..=2400.0).contains(&lit.value))
        || parse_literal(prev).is_some_and(|p| p.integer)
        || matches!(prev, "o" | "oh")
}

struct Anchor {
    days: i64,
    len: usize,
    before: bool,
}

/// "from|after|before <today|now|tomorrow|yesterday|[this|next|last] <weekday>>".
fn anchor(s: &Sentence, scene: &Scene, j: usize, accumulated_days: f64) -> Option<Anchor> {
    let before = match s.raw(j) {
        "from" | "after" => false,
        "before" => true,
        _ => return None,
    };
    let lex = scene.lexicon;
    let (days, len) = match s.raw(j + 1) {
        "today" | "now" => (0, 2),
        "tomorrow" => (1, 2),
        "yesterday" => (-1, 2),
        word @ ("this" | "next" | "last") => {
            let base = days_until(scene, lex.weekday(s.raw(j + 2))?);
            let days = match word {
                "next" if accumulated_days <= 2.0 => base + 7,
                "last" => base - 7,
                _ => base,
            };
            (days, 3)
        }
        word => (days_until(scene, lex.weekday(word)?), 2),
    };
    Some(Anchor { days, len, before })
}
