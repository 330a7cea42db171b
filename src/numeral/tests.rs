use super::{NumberOptions, find_all};
use crate::Span;
use crate::lexicon::{Lexicon, Locale};

fn first(text: &str, options: NumberOptions) -> Option<f64> {
    find_all(text, &options).first().map(|m| m.value)
}

fn all(text: &str, options: NumberOptions) -> Vec<f64> {
    find_all(text, &options).into_iter().map(|m| m.value).collect()
}

const PLAIN: NumberOptions = NumberOptions { ordinals: false, short_scale: true, locale: Locale::En };
const ORDINALS: NumberOptions = NumberOptions { ordinals: true, short_scale: true, locale: Locale::En };
const LONG: NumberOptions = NumberOptions { ordinals: false, short_scale: false, locale: Locale::En };
const LONG_ORDINALS: NumberOptions = NumberOptions { ordinals: true, short_scale: false, locale: Locale::En };

#[test]
fn numeral_examples_matching() {
    // Array of (expected_value, input_string)
    let cases: Vec<(f64, &str)> = vec![
        (2.0, "this is 2 test"),
        (1.0 / 3.0, "this is the third test"),
        (4.0, "this is test number 4"),
        (1.0 / 3.0, "one third of a cup"),
        (3.0, "three cups"),
        (1.0 / 3.0, "1/3 cups"),
        (0.25, "quarter cup"),
        (0.25, "1/4 cup"),
        (0.25, "one fourth cup"),
        (2.0 / 3.0, "2/3 cups"),
        (0.75, "3/4 cups"),
        (1.75, "1 and 3/4 cups"),
        (1.5, "1 cup and a half"),
        (1.5, "one cup and a half"),
        (1.5, "one and a half cups"),
        (1.5, "one and one half cups"),
        (0.75, "three quarter cups"),
        (0.75, "three quarters cups"),
        (22.0, "twenty two"),
        (22.0, "Twenty two with a leading capital letter"),
        (22.0, "twenty Two with Two capital letters"),
        (22.6, "Twenty two and Three Fifths"),
        (200.0, "two hundred"),
        (9000.0, "nine thousand"),
        (666.0, "six hundred sixty six"),
        (2_000_000.0, "two million"),
        (2_500_000.0, "two million five hundred thousand tons of spinning metal"),
        (6e12, "six trillion"),
        (1.5, "one point five"),
        (3.14, "three dot fourteen"),
        (0.2, "zero point two"),
        (1e9, "billions of years older"),
        (100_000.0, "one hundred thousand"),
        (-2.0, "minus 2"),
        (-70.0, "negative seventy"),
        (1e9, "thousand million"),
        (1.0 / 6.0 / 3.0, "sixth third"),
        (30.0, "thirty second"),
        (1e-9, "this is the billionth test"),
        (20_000.0, "twenty thousand"),
        (50_000_000.0, "fifty million"),
        (20_300_950_675.8, "twenty billion three hundred million nine hundred fifty thousand six hundred seventy five point eight"),
        (999_999_999.9, "nine hundred ninety nine million nine hundred ninety nine thousand nine hundred ninety nine point nine"),
        (800_000_000_000_257.0, "eight hundred trillion two hundred fifty seven"),
        (0.0, "fraggle zero"),
        (0.0, "grobo 0"),
        (2.0, "a couple of beers"),
        (200.0, "a couple hundred beers"),
        (2000.0, "a couple thousand beers"),
        (7.0, "this is the 7th test"),
        (1.0, "this is the 1st test"),
        (31.0, "this is the 31st test"),
        (34.0, "this is the 34th test"),
        (1.0, "you are the second one"),
        (8.0, "you are the 8th one"),
        (100.0, "totally 100%"),
        (391.6, "three hundred 91.6"),
        (12.0, "a dozen eggs"),
        (105.0, "one hundred and five"),
    ];

    for (expected, input) in cases {
        assert_eq!(first(input, PLAIN), Some(expected), "input '{input}'");
    }
}

#[test]
fn ordinal_readings() {
    let cases: Vec<(f64, &str)> = vec![
        (1.0, "this is the first test"),
        (2.0, "this is second test"),
        (3.0, "this is the third test"),
        (4.0, "the fourth one"),
        (36.0, "the thirty sixth one"),
        (3.0, "sixth third"),
        (32.0, "thirty second"),
        (1e9, "this is the billionth test"),
        (7.0, "this is the 7th test"),
        (2.0, "you are the second one"),
        (200.0, "two hundredth"),
    ];

    for (expected, input) in cases {
        assert_eq!(first(input, ORDINALS), Some(expected), "input '{input}'");
    }
}

#[test]
fn long_scale() {
    assert_eq!(first("six trillion", LONG), Some(6e18));
    assert_eq!(first("billions of years older", LONG), Some(1e12));
    assert_eq!(first("this is the billionth test", LONG), Some(1e-12));
    assert_eq!(first("this is the billionth test", LONG_ORDINALS), Some(1e12));
}

#[test]
fn no_number_found() {
    for input in ["The tennis player is fast", "fraggle", "this is the nth test", "", "and a the"] {
        assert_eq!(first(input, PLAIN), None, "input '{input}'");
    }
}

#[test]
fn multiple_numbers() {
    let cases: Vec<(Vec<f64>, &str)> = vec![
        (vec![1.0, 2.0, 3.0], "this is a one two three  test"),
        (vec![4.0, 5.0, 6.0], "it's  a four five six  test"),
        (vec![10.0, 11.0, 12.0], "this is a ten eleven twelve  test"),
        (vec![1.0, 21.0], "this is a one twenty one  test"),
        (vec![1.0, 7.0, 3.0, 5.0], "1 dog, seven pigs, macdonald had a farm, 3 times 5 macarena"),
        (vec![2.0, 2.0], "two beers for two bears"),
        (vec![20.0, 20.0, 20.0], "twenty 20 twenty"),
        (vec![20.0, 20.0, 22.0], "twenty 20 22"),
        (vec![20.0, 22.0, 20.0], "twenty twenty two twenty"),
        (vec![22.0], "twenty 2"),
        (vec![20.0, 20.0, 22.0], "twenty 20 twenty 2"),
        (vec![1.0 / 3.0, 1.0], "third one"),
        (vec![6e12], "six trillion"),
        (vec![2.0, 6e12], "two pigs and six trillion bacteria"),
        (vec![7.0, 8.0, 9.5], "this is a seven eight nine and a half test"),
    ];

    for (expected, input) in cases {
        assert_eq!(all(input, PLAIN), expected, "input '{input}'");
    }

    assert_eq!(all("third one", ORDINALS), vec![3.0]);
    assert_eq!(all("thirty second or first", ORDINALS), vec![32.0, 1.0]);
    assert_eq!(all("two pigs and six trillion bacteria", LONG), vec![2.0, 6e18]);
}

#[test]
fn matches_carry_spans() {
    let found = find_all("I want twenty two apples and 3 pears", &PLAIN);
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].span, Span { start: 7, end: 17 });
    assert_eq!(found[0].text, "twenty two");
    assert_eq!(found[1].span, Span { start: 29, end: 30 });

    let found = find_all("1 cup and a half", &PLAIN);
    assert_eq!(found[0].span, Span { start: 0, end: 16 });
}

#[test]
fn scanner_reports_consumed_words() {
    let lexicon = Lexicon::for_locale(Locale::En);
    let words = ["a", "quarter", "of", "an", "hour"];
    let scanner = super::Scanner::new(&words, lexicon);
    let reading = scanner.read_at(0).expect("reading");
    assert_eq!(reading.value, 0.25);
    assert_eq!(reading.len, 2);
    assert!(scanner.read_at(3).is_none());
}

#[test]
fn digit_literals() {
    let lit = super::parse_literal("100,000").expect("literal");
    assert_eq!(lit.value, 100_000.0);
    assert!(lit.integer);
    assert!(super::parse_literal(".77").is_some());
    assert!(super::parse_literal("1,00").is_none());
    assert!(super::parse_literal("nth").is_none());
    assert_eq!(super::parse_literal("-2").map(|l| l.value), Some(-2.0));
    assert_eq!(super::parse_literal("-.5").map(|l| l.value), Some(-0.5));
}

#[test]
fn negative_literals() {
    assert_eq!(first("it is -2 outside", PLAIN), Some(-2.0));
    assert_eq!(first("-2", PLAIN), first("minus 2", PLAIN));
    assert_eq!(all("three hundred -5", PLAIN), vec![300.0, -5.0]);
}

#[test]
fn decimal_tails() {
    let cases: Vec<(f64, &str)> = vec![
        (1.25, "one point twenty five"),
        (3.14, "three dot fourteen"),
        (6.666, "six dot six six six"),
        (3.14, "three point one four"),
        (2.3, "two point thirty"),
        (0.75, "point 75"),
    ];
    for (expected, input) in cases {
        assert_eq!(first(input, PLAIN), Some(expected), "input '{input}'");
    }
    assert_eq!(all("one point twenty five and six", PLAIN), vec![1.25, 6.0]);
}
