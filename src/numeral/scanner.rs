use crate::lexicon::{Lexicon, NumberWord};

/// A numeral read from a token window: its value and how many tokens it spans.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Reading {
    pub value: f64,
    pub len: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Suffix {
    None,
    Percent,
    Ordinal,
}

/// A digit literal such as `7`, `91.6`, `100,000`, `.77`, `100%` or `31st`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Literal {
    pub value: f64,
    pub integer: bool,
    pub suffix: Suffix,
}

pub(crate) fn parse_literal(word: &str) -> Option<Literal> {
    let caps = regex!(r"^(-?(?:\d+(?:,\d{3})*(?:\.\d+)?|\.\d+))(%|st|nd|rd|th)?$").captures(word)?;
    let digits = caps.get(1)?.as_str().replace(',', "");
    let value = digits.parse::<f64>().ok()?;
    let suffix = match caps.get(2).map(|m| m.as_str()) {
        None => Suffix::None,
        Some("%") => Suffix::Percent,
        Some(_) => Suffix::Ordinal,
    };
    Some(Literal { value, integer: !digits.contains('.'), suffix })
}

/// `a/b` written with digits.
pub(crate) fn parse_ratio(word: &str) -> Option<f64> {
    let caps = regex!(r"^(\d+)/(\d+)$").captures(word)?;
    let num = caps.get(1)?.as_str().parse::<f64>().ok()?;
    let den = caps.get(2)?.as_str().parse::<f64>().ok()?;
    (den != 0.0).then(|| num / den)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Class {
    Word(NumberWord),
    Literal(Literal),
    Ratio(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Last {
    Start,
    Ones,
    Teen,
    Tens,
    Hundred,
    Scale,
    Literal,
    Informal,
    Ordinal,
    Fraction,
}

enum Step {
    Take(usize),
    Finish(usize),
    Stop,
}

#[derive(Debug)]
struct Acc {
    total: f64,
    group: f64,
    fixed: Option<f64>,
    integral: bool,
    last: Last,
}

impl Acc {
    fn cardinal(&self) -> bool {
        matches!(
            self.last,
            Last::Ones | Last::Teen | Last::Tens | Last::Hundred | Last::Scale | Last::Literal | Last::Informal
        )
    }

    fn value(&self) -> f64 {
        self.fixed.unwrap_or(self.total + self.group)
    }
}

/// Greedy longest-match numeral reader over a window of lowercase words.
///
/// The scanner never looks at raw text: callers hand it the words they
/// tokenized, and get back a value plus the number of words it consumed.
pub(crate) struct Scanner<'a, S> {
    words: &'a [S],
    lexicon: &'static Lexicon,
    ordinals: bool,
    short_scale: bool,
}

impl<'a, S: AsRef<str>> Scanner<'a, S> {
    pub fn new(words: &'a [S], lexicon: &'static Lexicon) -> Self {
        Scanner { words, lexicon, ordinals: false, short_scale: true }
    }

    pub fn ordinals(mut self, ordinals: bool) -> Self {
        self.ordinals = ordinals;
        self
    }

    pub fn short_scale(mut self, short_scale: bool) -> Self {
        self.short_scale = short_scale;
        self
    }

    pub fn word(&self, i: usize) -> Option<&str> {
        self.words.get(i).map(|w| w.as_ref())
    }

    fn class(&self, i: usize) -> Option<Class> {
        let word = self.word(i)?;
        if let Some(word) = self.lexicon.number_word(word, self.short_scale) {
            return Some(Class::Word(word));
        }
        if let Some(lit) = parse_literal(word) {
            return Some(Class::Literal(lit));
        }
        parse_ratio(word).map(Class::Ratio)
    }

    /// True when the word at `i` could start or continue a numeral.
    pub fn is_numeric(&self, i: usize) -> bool {
        self.class(i).is_some()
    }

    /// Read the longest numeral starting exactly at `start`.
    pub fn read_at(&self, start: usize) -> Option<Reading> {
        if let Some(Class::Word(NumberWord::Minus)) = self.class(start) {
            let inner = self.read_unsigned(start + 1)?;
            return Some(Reading { value: -inner.value, len: inner.len + 1 });
        }
        self.read_unsigned(start)
    }

    fn read_unsigned(&self, start: usize) -> Option<Reading> {
        let mut acc = Acc { total: 0.0, group: 0.0, fixed: None, integral: true, last: Last::Start };
        let mut i = start;
        while let Some(class) = self.class(i) {
            match self.step(&mut acc, i, class) {
                Step::Take(n) => i += n,
                Step::Finish(n) => {
                    i += n;
                    break;
                }
                Step::Stop => break,
            }
        }
        if acc.last == Last::Start {
            return None;
        }
        tracing::trace!(start, len = i - start, value = acc.value(), "numeral reading");
        Some(Reading { value: acc.value(), len: i - start })
    }

    fn step(&self, acc: &mut Acc, i: usize, class: Class) -> Step {
        use NumberWord::*;

        match class {
            Class::Ratio(r) if acc.last == Last::Start => {
                acc.fixed = Some(r);
                acc.last = Last::Fraction;
                Step::Take(1)
            }
            Class::Ratio(_) => Step::Stop,
            Class::Literal(lit) => self.literal_step(acc, lit),
            Class::Word(Ones(v)) if v == 1.0 && acc.last == Last::Ordinal => Step::Finish(1),
            Class::Word(Ones(v)) => match acc.last {
                Last::Start | Last::Tens | Last::Hundred | Last::Scale => {
                    acc.group += v;
                    acc.last = Last::Ones;
                    Step::Take(1)
                }
                _ => Step::Stop,
            },
            Class::Word(Teen(v)) | Class::Word(Tens(v)) => match acc.last {
                Last::Start | Last::Hundred | Last::Scale => {
                    acc.group += v;
                    acc.last = if matches!(class, Class::Word(Teen(_))) { Last::Teen } else { Last::Tens };
                    Step::Take(1)
                }
                _ => Step::Stop,
            },
            Class::Word(Hundred) => match acc.last {
                Last::Start => {
                    acc.group = 100.0;
                    acc.last = Last::Hundred;
                    Step::Take(1)
                }
                Last::Ones | Last::Teen | Last::Tens | Last::Informal | Last::Literal
                    if acc.group > 0.0 && acc.integral =>
                {
                    acc.group *= 100.0;
                    acc.last = Last::Hundred;
                    Step::Take(1)
                }
                _ => Step::Stop,
            },
            Class::Word(Scale(s)) => {
                match acc.last {
                    Last::Start => acc.total = s,
                    _ if acc.cardinal() && acc.group > 0.0 => {
                        acc.total += acc.group * s;
                        acc.group = 0.0;
                    }
                    Last::Scale => acc.total *= s,
                    _ => return Step::Stop,
                }
                acc.last = Last::Scale;
                Step::Take(1)
            }
            Class::Word(Ordinal { rank, unit }) => self.ordinal_step(acc, rank, unit),
            Class::Word(Fraction(den)) => match acc.last {
                Last::Start => {
                    acc.fixed = Some(1.0 / den);
                    acc.last = Last::Fraction;
                    Step::Take(1)
                }
                _ if acc.cardinal() || matches!(acc.last, Last::Fraction | Last::Ordinal) => {
                    acc.fixed = Some(acc.value() / den);
                    acc.last = Last::Fraction;
                    Step::Take(1)
                }
                _ => Step::Stop,
            },
            Class::Word(Couple) if acc.last == Last::Start => {
                acc.group = 2.0;
                acc.last = Last::Informal;
                Step::Take(1)
            }
            Class::Word(Dozen) => match acc.last {
                Last::Start => {
                    acc.group = 12.0;
                    acc.last = Last::Informal;
                    Step::Take(1)
                }
                Last::Ones | Last::Teen | Last::Tens | Last::Literal | Last::Informal if acc.group > 0.0 => {
                    acc.group *= 12.0;
                    acc.last = Last::Informal;
                    Step::Take(1)
                }
                _ => Step::Stop,
            },
            Class::Word(Article) if acc.last == Last::Start => self.article_step(acc, i),
            Class::Word(And) if acc.cardinal() => {
                if let Some((fraction, len)) = self.mixed_fraction(i + 1) {
                    acc.fixed = Some(acc.total + acc.group + fraction);
                    acc.last = Last::Fraction;
                    return Step::Finish(1 + len);
                }
                let continues = matches!(self.class(i + 1), Some(Class::Word(Ones(_) | Teen(_) | Tens(_))));
                if matches!(acc.last, Last::Hundred | Last::Scale) && continues {
                    return Step::Take(1);
                }
                Step::Stop
            }
            Class::Word(Point) => self.point_step(acc, i),
            _ => Step::Stop,
        }
    }

    fn literal_step(&self, acc: &mut Acc, lit: Literal) -> Step {
        if lit.suffix != Suffix::None {
            if acc.last != Last::Start {
                return Step::Stop;
            }
            acc.fixed = Some(lit.value);
            acc.last = Last::Literal;
            return Step::Finish(1);
        }
        if lit.value < 0.0 && acc.last != Last::Start {
            return Step::Stop;
        }
        match acc.last {
            Last::Start => acc.group = lit.value,
            Last::Tens if lit.integer && (1.0..=9.0).contains(&lit.value) => acc.group += lit.value,
            Last::Hundred if lit.value < 100.0 => acc.group += lit.value,
            Last::Scale if lit.value < 1000.0 => acc.group = lit.value,
            _ => return Step::Stop,
        }
        acc.integral &= lit.integer;
        acc.last = Last::Literal;
        Step::Take(1)
    }

    fn ordinal_step(&self, acc: &mut Acc, rank: f64, unit: bool) -> Step {
        let multiplier = !unit && rank >= 100.0;
        if self.ordinals {
            let value = match acc.last {
                Last::Start | Last::Ordinal => rank,
                Last::Tens if unit => acc.total + acc.group + rank,
                Last::Hundred | Last::Scale if !multiplier => acc.total + acc.group + rank,
                _ if multiplier && acc.cardinal() => acc.value() * rank,
                _ => return Step::Stop,
            };
            acc.fixed = Some(value);
            acc.last = Last::Ordinal;
            return Step::Take(1);
        }

        // Without ordinals "first" and "second" are not numbers; the rest read as denominators.
        if rank <= 2.0 {
            return Step::Stop;
        }
        let value = match acc.last {
            Last::Start => 1.0 / rank,
            _ if acc.cardinal() || matches!(acc.last, Last::Fraction | Last::Ordinal) => acc.value() / rank,
            _ => return Step::Stop,
        };
        acc.fixed = Some(value);
        acc.last = Last::Fraction;
        Step::Take(1)
    }

    fn article_step(&self, acc: &mut Acc, i: usize) -> Step {
        use NumberWord::*;

        match self.class(i + 1) {
            Some(Class::Word(Couple)) => {
                acc.group = 2.0;
                acc.last = Last::Informal;
            }
            Some(Class::Word(Dozen)) => {
                acc.group = 12.0;
                acc.last = Last::Informal;
            }
            Some(Class::Word(Hundred)) => {
                acc.group = 100.0;
                acc.last = Last::Hundred;
            }
            Some(Class::Word(Scale(s))) => {
                acc.total = s;
                acc.last = Last::Scale;
            }
            _ => match self.denominator(i + 1) {
                Some(den) => {
                    acc.fixed = Some(1.0 / den);
                    acc.last = Last::Fraction;
                }
                None => return Step::Stop,
            },
        }
        Step::Take(2)
    }

    fn point_step(&self, acc: &mut Acc, i: usize) -> Step {
        let allowed = acc.last == Last::Start || (acc.cardinal() && acc.integral);
        if !allowed || acc.fixed.is_some() {
            return Step::Stop;
        }
        let Some((digits, n)) = self.decimal_tail(i + 1) else {
            return Step::Stop;
        };
        let Ok(value) = format!("{:.0}.{}", acc.total + acc.group, digits).parse::<f64>() else {
            return Step::Stop;
        };
        acc.fixed = Some(value);
        acc.last = Last::Fraction;
        Step::Finish(1 + n)
    }

    /// Digit text after "point" and how many words it took.
    ///
    /// A run of ones words is spelled digit by digit ("six six six" = 666);
    /// a tens, teen or digit literal is read as one whole number ("twenty five" = 25).
    fn decimal_tail(&self, start: usize) -> Option<(String, usize)> {
        use NumberWord::*;

        match self.class(start)? {
            Class::Word(Ones(_)) => {
                let mut digits = String::new();
                let mut n = 0;
                while let Some(Class::Word(Ones(v))) = self.class(start + n) {
                    digits.push_str(&format!("{v:.0}"));
                    n += 1;
                }
                Some((digits, n))
            }
            Class::Word(Teen(v)) => Some((format!("{v:.0}"), 1)),
            Class::Word(Tens(v)) => match self.class(start + 1) {
                Some(Class::Word(Ones(o))) if o > 0.0 => Some((format!("{:.0}", v + o), 2)),
                _ => Some((format!("{v:.0}"), 1)),
            },
            Class::Literal(Literal { value, integer: true, suffix: Suffix::None }) if value >= 0.0 => {
                self.word(start).map(|w| (w.replace(',', ""), 1))
            }
            _ => None,
        }
    }

    /// Denominator named by a fraction word, or by an ordinal from "third" on.
    pub fn denominator(&self, i: usize) -> Option<f64> {
        match self.class(i)? {
            Class::Word(NumberWord::Fraction(den)) => Some(den),
            Class::Word(NumberWord::Ordinal { rank, .. }) if rank >= 3.0 => Some(rank),
            _ => None,
        }
    }

    /// The fraction following "and" in a mixed number: "a half", "one half",
    /// "3/4", "three fifths" or a bare "half".
    fn mixed_fraction(&self, j: usize) -> Option<(f64, usize)> {
        use NumberWord::*;

        match self.class(j)? {
            Class::Ratio(r) => Some((r, 1)),
            Class::Word(Fraction(den)) => Some((1.0 / den, 1)),
            Class::Word(Article) => Some((1.0 / self.denominator(j + 1)?, 2)),
            Class::Word(Ones(n) | Teen(n)) if n > 0.0 => Some((n / self.denominator(j + 1)?, 2)),
            Class::Literal(Literal { value, integer: true, suffix: Suffix::None }) if value > 0.0 => {
                Some((value / self.denominator(j + 1)?, 2))
            }
            _ => None,
        }
    }
}
