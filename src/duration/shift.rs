use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Move `dt` by whole calendar months, clamping the day to the target month's length.
pub(crate) fn add_months(dt: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let date = dt.date();
    let zero_based = i64::from(date.month0()) + months;
    let year = i32::try_from(i64::from(date.year()) + zero_based.div_euclid(12)).ok()?;
    let month = zero_based.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month)?);
    Some(NaiveDate::from_ymd_opt(year, month, day)?.and_time(dt.time()))
}

pub(crate) fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    Some(first_next.pred_opt()?.day())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn month_shift_clamps_day() {
        assert_eq!(add_months(at(2024, 1, 31, 8), 1), Some(at(2024, 2, 29, 8)));
        assert_eq!(add_months(at(2023, 1, 31, 8), 1), Some(at(2023, 2, 28, 8)));
    }

    #[test]
    fn month_shift_crosses_years() {
        assert_eq!(add_months(at(2023, 11, 15, 0), 3), Some(at(2024, 2, 15, 0)));
        assert_eq!(add_months(at(2017, 6, 27, 0), 24), Some(at(2019, 6, 27, 0)));
        assert_eq!(add_months(at(2017, 1, 10, 0), -2), Some(at(2016, 11, 10, 0)));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2100, 2), Some(28));
        assert_eq!(days_in_month(2017, 12), Some(31));
    }
}
