//! Rule-based extraction of numbers, durations and date/times from short
//! English utterances.
//!
//! Every extractor is a pure function of its input and the caller-supplied
//! [`Context`]/options; nothing reads the clock except [`Context::default`].
//! "Nothing found" is an explicit `None` (or an empty `Vec`), never a zero.

#[macro_use]
mod macros;
mod api;
mod datetime;
mod duration;
mod error;
mod fuzzy;
mod lexicon;
mod normalize;
mod numeral;
mod tokens;

pub use api::{
    Context, extract_datetime, extract_datetime_verbose, extract_duration, extract_number, extract_number_spans,
    extract_numbers, fuzzy_match, get_gender, match_one, match_one_keyed, normalize,
};
pub use datetime::{DateTimeDetails, Phases};
pub use duration::{CalendarDelta, DAYS_IN_1_MONTH, DAYS_IN_1_YEAR, DurationValue, Resolution, TimeUnit};
pub use error::{Error, Result};
pub use lexicon::{Gender, Locale};
pub use numeral::{NumberMatch, NumberOptions};

/// Byte range into the (lowercased) input; `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}
