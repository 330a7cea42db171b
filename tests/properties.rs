//! Property-based tests over the public extraction API.

use chrono::NaiveDate;
use proptest::prelude::*;
use voxtract::{
    Context, DurationValue, NumberOptions, Resolution, TimeUnit, extract_datetime, extract_duration, extract_number,
    extract_number_spans,
};

const ONES: &[(&str, f64)] =
    &[("one", 1.0), ("two", 2.0), ("three", 3.0), ("four", 4.0), ("five", 5.0), ("six", 6.0), ("seven", 7.0), ("eight", 8.0), ("nine", 9.0)];

/// (word, short scale, long scale)
const SCALES: &[(&str, f64, f64)] = &[("million", 1e6, 1e6), ("billion", 1e9, 1e12), ("trillion", 1e12, 1e18)];

const VOCABULARY: &[&str] = &[
    "one", "two", "twenty", "hundred", "thousand", "and", "a", "half", "third", "point", "five", "cups", "of", "the",
    "minus", "7", "3/4", "12.5", "dozen", "couple", "apples", "-", "at", "tomorrow",
];

fn reference() -> Context {
    Context::new(NaiveDate::from_ymd_opt(2017, 6, 27).unwrap().and_hms_opt(13, 4, 0).unwrap())
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= b.abs() * 1e-9
}

proptest! {
    #[test]
    fn scale_words_follow_the_convention(ones in 0..ONES.len(), scale in 0..SCALES.len()) {
        let (word, n) = ONES[ones];
        let (name, short, long) = SCALES[scale];
        let text = format!("{word} {name}");

        let short_value = extract_number(&text, &NumberOptions::default());
        let long_value = extract_number(&text, &NumberOptions { short_scale: false, ..NumberOptions::default() });
        prop_assert!(short_value.is_some_and(|v| close(v, n * short)), "{text}: {short_value:?}");
        prop_assert!(long_value.is_some_and(|v| close(v, n * long)), "{text}: {long_value:?}");
    }

    #[test]
    fn zero_is_not_absence(word in "[bcdfghjklmnpqrstvwxz]{1,8}") {
        prop_assert_eq!(extract_number(&word, &NumberOptions::default()), None);
        prop_assert_eq!(extract_number(&format!("{word} zero"), &NumberOptions::default()), Some(0.0));
    }

    #[test]
    fn number_spans_never_overlap(words in prop::collection::vec(prop::sample::select(VOCABULARY), 0..16)) {
        let text = words.join(" ");
        let matches = extract_number_spans(&text, &NumberOptions::default());
        for m in &matches {
            prop_assert!(m.span.start < m.span.end && m.span.end <= text.len(), "{text:?}: {m:?}");
        }
        for pair in matches.windows(2) {
            prop_assert!(pair[0].span.end <= pair[1].span.start, "{text:?}: {pair:?}");
        }
    }

    #[test]
    fn leftover_holds_no_second_match(n in 1u32..100, unit in prop::sample::select(vec!["minutes", "hours", "days", "weeks"])) {
        let text = format!("remind me to call mom in {n} {unit}");

        let (moment, rest) = extract_datetime(&text, &reference()).unwrap();
        prop_assert!(moment > reference().reference_time);
        prop_assert_eq!(&rest, "remind me to call mom");
        prop_assert_eq!(extract_datetime(&rest, &reference()), None);

        let (_, rest) = extract_duration(&text, Resolution::Fixed).unwrap();
        prop_assert_eq!(&rest, "remind me to call mom in");
        let (again, _) = extract_duration(&rest, Resolution::Total(TimeUnit::Seconds)).unwrap();
        prop_assert_eq!(again, DurationValue::Total(0.0));
    }

    #[test]
    fn duration_resolutions_agree(n in 1u32..1000) {
        let text = format!("{n} days");
        let days = f64::from(n);
        let total = |unit| match extract_duration(&text, Resolution::Total(unit)).unwrap().0 {
            DurationValue::Total(v) => v,
            other => panic!("unexpected {other:?}"),
        };
        prop_assert!(close(total(TimeUnit::Days), days));
        prop_assert!(close(total(TimeUnit::Hours), days * 24.0));
        prop_assert!(close(total(TimeUnit::Seconds), days * 86_400.0));
        match extract_duration(&text, Resolution::Fixed).unwrap().0 {
            DurationValue::Fixed(delta) => prop_assert_eq!(delta.num_seconds(), i64::from(n) * 86_400),
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }

    #[test]
    fn datetime_never_panics(text in "\\PC{0,60}") {
        let _ = extract_datetime(&text, &reference());
    }

    #[test]
    fn datetime_never_panics_on_temporal_words(
        words in prop::collection::vec(prop::sample::select(vec![
            "at", "in", "on", "this", "next", "last", "the", "day", "after", "before", "tomorrow", "yesterday",
            "ago", "from", "friday", "may", "june", "31", "0", "12", "99", "2400", "o", "o'clock", "pm", "am",
            "tonight", "morning", "night", "hours", "weeks", "and", "early", "late", "7:30", "25:99",
        ]), 0..12)
    ) {
        let _ = extract_datetime(&words.join(" "), &reference());
    }
}
