use std::collections::{HashMap, HashSet};

use chrono::Weekday;
use once_cell::sync::Lazy;

use super::{DurationUnit, Lexicon, Meridiem, NumberWord, ScaleEntry};

pub(super) static LEXICON: Lazy<Lexicon> = Lazy::new(|| Lexicon {
    numbers: number_words(),
    scales: HashMap::from([
        ("thousand", ScaleEntry { short: 1e3, long: 1e3 }),
        ("million", ScaleEntry { short: 1e6, long: 1e6 }),
        ("billion", ScaleEntry { short: 1e9, long: 1e12 }),
        ("trillion", ScaleEntry { short: 1e12, long: 1e18 }),
        ("quadrillion", ScaleEntry { short: 1e15, long: 1e24 }),
        ("quintillion", ScaleEntry { short: 1e18, long: 1e30 }),
        ("thousands", ScaleEntry { short: 1e3, long: 1e3 }),
        ("millions", ScaleEntry { short: 1e6, long: 1e6 }),
        ("billions", ScaleEntry { short: 1e9, long: 1e12 }),
        ("trillions", ScaleEntry { short: 1e12, long: 1e18 }),
        ("quadrillions", ScaleEntry { short: 1e15, long: 1e24 }),
        ("quintillions", ScaleEntry { short: 1e18, long: 1e30 }),
    ]),
    scale_ordinals: HashMap::from([
        ("thousandth", "thousand"),
        ("millionth", "million"),
        ("billionth", "billion"),
        ("trillionth", "trillion"),
        ("quadrillionth", "quadrillion"),
        ("quintillionth", "quintillion"),
    ]),
    units: HashMap::from([
        ("second", DurationUnit::Second),
        ("seconds", DurationUnit::Second),
        ("sec", DurationUnit::Second),
        ("secs", DurationUnit::Second),
        ("minute", DurationUnit::Minute),
        ("minutes", DurationUnit::Minute),
        ("min", DurationUnit::Minute),
        ("mins", DurationUnit::Minute),
        ("hour", DurationUnit::Hour),
        ("hours", DurationUnit::Hour),
        ("hr", DurationUnit::Hour),
        ("hrs", DurationUnit::Hour),
        ("day", DurationUnit::Day),
        ("days", DurationUnit::Day),
        ("week", DurationUnit::Week),
        ("weeks", DurationUnit::Week),
        ("month", DurationUnit::Month),
        ("months", DurationUnit::Month),
        ("year", DurationUnit::Year),
        ("years", DurationUnit::Year),
        ("decade", DurationUnit::Decade),
        ("decades", DurationUnit::Decade),
        ("century", DurationUnit::Century),
        ("centuries", DurationUnit::Century),
        ("millennium", DurationUnit::Millennium),
        ("millenniums", DurationUnit::Millennium),
        ("millennia", DurationUnit::Millennium),
    ]),
    weekdays: HashMap::from([
        ("monday", Weekday::Mon),
        ("tuesday", Weekday::Tue),
        ("wednesday", Weekday::Wed),
        ("thursday", Weekday::Thu),
        ("friday", Weekday::Fri),
        ("saturday", Weekday::Sat),
        ("sunday", Weekday::Sun),
    ]),
    months: HashMap::from([
        ("january", 1),
        ("february", 2),
        ("march", 3),
        ("april", 4),
        ("may", 5),
        ("june", 6),
        ("july", 7),
        ("august", 8),
        ("september", 9),
        ("october", 10),
        ("november", 11),
        ("december", 12),
        ("jan", 1),
        ("feb", 2),
        ("mar", 3),
        ("apr", 4),
        ("jun", 6),
        ("jul", 7),
        ("aug", 8),
        ("sep", 9),
        ("sept", 9),
        ("oct", 10),
        ("nov", 11),
        ("dec", 12),
    ]),
    qualifiers: HashMap::from([
        ("morning", Meridiem::Am),
        ("afternoon", Meridiem::Pm),
        ("evening", Meridiem::Pm),
        ("night", Meridiem::Pm),
        ("tonight", Meridiem::Pm),
    ]),
    markers: HashSet::from(["at", "in", "on", "by", "this", "around", "for", "of", "within"]),
    recurrence: HashSet::from(["weekend", "weekends", "weekday", "weekdays"]),
    articles: HashSet::from(["a", "an", "the"]),
    contractions: contractions(),
    small_numbers: HashMap::from([
        ("zero", 0),
        ("one", 1),
        ("two", 2),
        ("three", 3),
        ("four", 4),
        ("five", 5),
        ("six", 6),
        ("seven", 7),
        ("eight", 8),
        ("nine", 9),
        ("ten", 10),
        ("eleven", 11),
        ("twelve", 12),
        ("thirteen", 13),
        ("fourteen", 14),
        ("fifteen", 15),
        ("sixteen", 16),
        ("seventeen", 17),
        ("eighteen", 18),
        ("nineteen", 19),
        ("twenty", 20),
    ]),
    genders: HashMap::new(),
});

fn number_words() -> HashMap<&'static str, NumberWord> {
    use NumberWord::*;

    let mut map = HashMap::new();
    let ones = ["zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine"];
    for (v, w) in ones.into_iter().enumerate() {
        map.insert(w, Ones(v as f64));
    }
    let teens = [
        "ten",
        "eleven",
        "twelve",
        "thirteen",
        "fourteen",
        "fifteen",
        "sixteen",
        "seventeen",
        "eighteen",
        "nineteen",
    ];
    for (v, w) in teens.into_iter().enumerate() {
        map.insert(w, Teen((v + 10) as f64));
    }
    let tens = ["twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety"];
    for (v, w) in tens.into_iter().enumerate() {
        map.insert(w, Tens(((v + 2) * 10) as f64));
    }

    let unit_ordinals = ["first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth"];
    for (v, w) in unit_ordinals.into_iter().enumerate() {
        map.insert(w, Ordinal { rank: (v + 1) as f64, unit: true });
    }
    let other_ordinals = [
        ("tenth", 10.0),
        ("eleventh", 11.0),
        ("twelfth", 12.0),
        ("thirteenth", 13.0),
        ("fourteenth", 14.0),
        ("fifteenth", 15.0),
        ("sixteenth", 16.0),
        ("seventeenth", 17.0),
        ("eighteenth", 18.0),
        ("nineteenth", 19.0),
        ("twentieth", 20.0),
        ("thirtieth", 30.0),
        ("fortieth", 40.0),
        ("fiftieth", 50.0),
        ("sixtieth", 60.0),
        ("seventieth", 70.0),
        ("eightieth", 80.0),
        ("ninetieth", 90.0),
        ("hundredth", 100.0),
    ];
    for (w, rank) in other_ordinals {
        map.insert(w, Ordinal { rank, unit: false });
    }

    let fractions = [
        ("half", 2.0),
        ("halves", 2.0),
        ("quarter", 4.0),
        ("quarters", 4.0),
        ("thirds", 3.0),
        ("fourths", 4.0),
        ("fifths", 5.0),
        ("sixths", 6.0),
        ("sevenths", 7.0),
        ("eighths", 8.0),
        ("ninths", 9.0),
        ("tenths", 10.0),
        ("twelfths", 12.0),
        ("twentieths", 20.0),
        ("hundredths", 100.0),
        ("thousandths", 1000.0),
    ];
    for (w, den) in fractions {
        map.insert(w, Fraction(den));
    }

    map.insert("hundred", Hundred);
    map.insert("hundreds", Hundred);
    map.insert("couple", Couple);
    map.insert("pair", Couple);
    map.insert("dozen", Dozen);
    map.insert("dozens", Dozen);
    map.insert("a", Article);
    map.insert("an", Article);
    map.insert("and", And);
    map.insert("point", Point);
    map.insert("dot", Point);
    map.insert("minus", Minus);
    map.insert("negative", Minus);
    map
}

fn contractions() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("ain't", "is not"),
        ("aren't", "are not"),
        ("can't", "can not"),
        ("could've", "could have"),
        ("couldn't", "could not"),
        ("didn't", "did not"),
        ("doesn't", "does not"),
        ("don't", "do not"),
        ("gonna", "going to"),
        ("gotta", "got to"),
        ("hadn't", "had not"),
        ("hasn't", "has not"),
        ("haven't", "have not"),
        ("he'd", "he would"),
        ("he'll", "he will"),
        ("he's", "he is"),
        ("how'd", "how did"),
        ("how'll", "how will"),
        ("how's", "how is"),
        ("I'd", "I would"),
        ("I'll", "I will"),
        ("I'm", "I am"),
        ("I've", "I have"),
        ("isn't", "is not"),
        ("it'd", "it would"),
        ("it'll", "it will"),
        ("it's", "it is"),
        ("mightn't", "might not"),
        ("might've", "might have"),
        ("mustn't", "must not"),
        ("must've", "must have"),
        ("needn't", "need not"),
        ("oughtn't", "ought not"),
        ("shan't", "shall not"),
        ("she'd", "she would"),
        ("she'll", "she will"),
        ("she's", "she is"),
        ("should've", "should have"),
        ("shouldn't", "should not"),
        ("somebody's", "somebody is"),
        ("someone'd", "someone would"),
        ("someone'll", "someone will"),
        ("someone's", "someone is"),
        ("that'll", "that will"),
        ("that's", "that is"),
        ("that'd", "that would"),
        ("there'd", "there would"),
        ("there're", "there are"),
        ("there's", "there is"),
        ("they'd", "they would"),
        ("they'll", "they will"),
        ("they're", "they are"),
        ("they've", "they have"),
        ("wasn't", "was not"),
        ("we'd", "we would"),
        ("we'll", "we will"),
        ("we're", "we are"),
        ("we've", "we have"),
        ("weren't", "were not"),
        ("what'd", "what did"),
        ("what'll", "what will"),
        ("what're", "what are"),
        ("whats", "what is"),
        ("what's", "what is"),
        ("what've", "what have"),
        ("when's", "when is"),
        ("where'd", "where did"),
        ("where's", "where is"),
        ("where've", "where have"),
        ("who'd", "who would"),
        ("who'd've", "who would have"),
        ("who'll", "who will"),
        ("who're", "who are"),
        ("who's", "who is"),
        ("who've", "who have"),
        ("why'd", "why did"),
        ("why're", "why are"),
        ("why's", "why is"),
        ("won't", "will not"),
        ("won't've", "will not have"),
        ("would've", "would have"),
        ("wouldn't", "would not"),
        ("wouldn't've", "would not have"),
        ("ya'll", "you all"),
        ("y'all", "you all"),
        ("y'ain't", "you are not"),
        ("you'd", "you would"),
        ("you'd've", "you would have"),
        ("you'll", "you will"),
        ("you're", "you are"),
        ("you've", "you have"),
    ])
}
