use chrono::{NaiveDateTime, NaiveTime, TimeDelta, Timelike};

use super::DatePart;
use super::clock::ClockScan;

/// Place the date part and the clock against `reference` (already truncated to the second).
pub(crate) fn compose(reference: NaiveDateTime, date: Option<DatePart>, scan: &ClockScan) -> Option<NaiveDateTime> {
    let midnight = reference.date().and_time(NaiveTime::MIN);
    let (moment, clock_shift) = match date {
        None => (reference, TimeDelta::zero()),
        Some(DatePart::Shift(amounts)) => {
            let start = if amounts.has_sub_day() { reference } else { midnight };
            (amounts.date_part().apply(start)?, amounts.clock_part()?)
        }
        Some(DatePart::Days(days)) => (midnight.checked_add_signed(TimeDelta::try_days(days)?)?, TimeDelta::zero()),
        Some(DatePart::Date(day)) => (day.and_time(NaiveTime::MIN), TimeDelta::zero()),
    };

    let Some(clock) = scan.clock else {
        return moment.checked_add_signed(clock_shift);
    };

    let mut hour = clock.hour;
    let day = moment.date();
    if clock.is_ambiguous() && hour < 12 && (date.is_none() || day == reference.date()) {
        let now_h = reference.hour();
        // From noon on the bare hour is read as PM; in the morning only once it has passed.
        let passed = now_h > hour || (now_h == hour && reference.minute() >= clock.minute);
        if now_h >= 12 || passed {
            hour += 12;
        }
    }

    let mut moment = day.and_hms_opt(hour, clock.minute, 0)?.checked_add_signed(clock_shift)?;
    if date.is_none() && !scan.pinned && moment < reference {
        moment = moment.checked_add_signed(TimeDelta::days(1))?;
    }
    moment.checked_add_signed(TimeDelta::try_hours(scan.hour_shift)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datetime::clock::{Clock, ClockSource};
    use crate::duration::UnitAmounts;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d).unwrap().and_hms_opt(h, mi, s).unwrap()
    }

    fn bare(hour: u32) -> ClockScan {
        let source = ClockSource::Digits { meridiem: false, military: false };
        ClockScan { clock: Some(Clock { hour, minute: 0, source }), ..ClockScan::default() }
    }

    #[test]
    fn bare_hour_follows_reference_clock() {
        let cases = vec![((8, 1), 10), ((12, 1), 22), ((20, 1), 22), ((10, 0), 22), ((9, 59), 10)];
        for ((h, m), expected) in cases {
            let reference = at(2019, 7, 4, h, m, 2);
            let got = compose(reference, None, &bare(10)).unwrap();
            assert_eq!(got, at(2019, 7, 4, expected, 0, 0), "reference {h}:{m}");
        }
    }

    #[test]
    fn evening_reference_reads_bare_hour_as_pm() {
        let reference = at(2017, 6, 27, 20, 1, 2);
        assert_eq!(compose(reference, None, &bare(5)).unwrap(), at(2017, 6, 28, 17, 0, 0));
        assert_eq!(compose(reference, None, &bare(10)).unwrap(), at(2017, 6, 27, 22, 0, 0));

        let late = at(2019, 7, 4, 23, 0, 0);
        assert_eq!(compose(late, None, &bare(10)).unwrap(), at(2019, 7, 5, 22, 0, 0));
    }

    #[test]
    fn pm_reading_on_the_reference_day_stays_put() {
        let reference = at(2017, 6, 27, 20, 1, 2);
        let got = compose(reference, Some(DatePart::Days(0)), &bare(5)).unwrap();
        assert_eq!(got, at(2017, 6, 27, 17, 0, 0));
    }

    #[test]
    fn day_shift_starts_at_midnight_sub_day_shift_at_reference() {
        let reference = at(2017, 6, 27, 13, 4, 0);
        let mut days = UnitAmounts::default();
        days.days = 3.0;
        assert_eq!(compose(reference, Some(DatePart::Shift(days)), &ClockScan::default()).unwrap(), at(2017, 6, 30, 0, 0, 0));

        let mut minutes = UnitAmounts::default();
        minutes.minutes = 5.0;
        let got = compose(reference, Some(DatePart::Shift(minutes)), &ClockScan::default()).unwrap();
        assert_eq!(got, at(2017, 6, 27, 13, 9, 0));
    }

    #[test]
    fn explicit_clock_on_other_day_is_kept() {
        let reference = at(2017, 6, 27, 13, 4, 0);
        let scan = bare(10);
        let got = compose(reference, Some(DatePart::Days(1)), &scan).unwrap();
        assert_eq!(got, at(2017, 6, 28, 10, 0, 0));
    }
}
