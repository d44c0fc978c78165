//! Per-week tooltip text - the week's start date and a human-readable age.

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use crate::timeline::{add_weeks, weeks_between};

/// Shown instead of an age for week dates before birth.
const NOT_BORN_YET: &str = "Not born yet";

/// The two tooltip lines for one week block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekLabel {
    pub date_text: String,
    pub age_text: String,
}

/// Build the tooltip text for `week_index` weeks after `birth_date`.
pub fn week_label(week_index: i64, birth_date: NaiveDate) -> WeekLabel {
    WeekLabel {
        date_text: date_text(week_index, birth_date),
        age_text: age_text(week_index, birth_date),
    }
}

fn date_text(week_index: i64, birth_date: NaiveDate) -> String {
    match add_weeks(birth_date, week_index) {
        Some(week_date) => format!("Week of {}", week_date.format("%b %-d, %Y")),
        None => format!("Week {}", week_index),
    }
}

/// Age at the given week, as the most specific of weeks-only, months+weeks,
/// or years(+months). Unit words pluralize per value and a zero months
/// component inside a year is suppressed entirely.
fn age_text(week_index: i64, birth_date: NaiveDate) -> String {
    if week_index < 0 {
        return NOT_BORN_YET.to_string();
    }

    let week_date = match add_weeks(birth_date, week_index) {
        Some(date) => date,
        None => return format!("Week {}", week_index),
    };
    if week_date < birth_date {
        return NOT_BORN_YET.to_string();
    }

    let months_since_birth = whole_months_between(birth_date, week_date);
    let years = months_since_birth / 12;
    let months = months_since_birth % 12;

    // Whole weeks past the most recent monthly birthday.
    let weeks = match birth_date.checked_add_months(Months::new(months_since_birth as u32)) {
        Some(month_anchor) => weeks_between(month_anchor, week_date).max(0),
        None => 0,
    };

    let year_unit = if years == 1 { "year" } else { "years" };
    let month_unit = if months == 1 { "month" } else { "months" };
    let week_unit = if weeks == 1 { "week" } else { "weeks" };

    if years == 0 && months == 0 {
        format!("{} {} old", weeks, week_unit)
    } else if years == 0 {
        format!("{} {}, {} {} old", months, month_unit, weeks, week_unit)
    } else if months == 0 {
        format!("{} {} old", years, year_unit)
    } else {
        format!("{} {}, {} {} old", years, year_unit, months, month_unit)
    }
}

/// Whole calendar months from `start` to `end` (`end >= start`), honoring
/// the clamped-day rule for month-end birthdays.
fn whole_months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let mut months = i64::from(end.year() - start.year()) * 12
        + (i64::from(end.month()) - i64::from(start.month()));

    // The raw year/month delta overshoots when the day-of-month has not
    // come around yet.
    if months > 0 {
        if let Some(anchor) = start.checked_add_months(Months::new(months as u32)) {
            if anchor > end {
                months -= 1;
            }
        }
    }

    months.max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_zero_is_zero_weeks_old() {
        let label = week_label(0, date(1995, 1, 1));
        assert_eq!(label.date_text, "Week of Jan 1, 1995");
        assert_eq!(label.age_text, "0 weeks old");
    }

    #[test]
    fn test_negative_week_is_not_born_yet() {
        let label = week_label(-1, date(1995, 1, 1));
        assert_eq!(label.age_text, "Not born yet");
    }

    #[test]
    fn test_singular_week() {
        let label = week_label(1, date(1995, 1, 1));
        assert_eq!(label.date_text, "Week of Jan 8, 1995");
        assert_eq!(label.age_text, "1 week old");
    }

    #[test]
    fn test_months_and_weeks_within_first_year() {
        // 6 weeks = 1990-02-12: one month plus one week past 1990-02-01
        let label = week_label(6, date(1990, 1, 1));
        assert_eq!(label.age_text, "1 month, 1 week old");

        // 52 weeks = 1990-12-31: still short of the first birthday
        let label = week_label(52, date(1990, 1, 1));
        assert_eq!(label.age_text, "11 months, 4 weeks old");
    }

    #[test]
    fn test_exact_year_suppresses_months() {
        // 53 weeks = 1991-01-07, one year and 6 days
        let label = week_label(53, date(1990, 1, 1));
        assert_eq!(label.age_text, "1 year old");
    }

    #[test]
    fn test_years_and_months() {
        // 60 weeks = 1991-02-25: 1 year, 1 month
        let label = week_label(60, date(1990, 1, 1));
        assert_eq!(label.age_text, "1 year, 1 month old");

        // 320 weeks = 1996-02-19: 6 years, 1 month
        let label = week_label(320, date(1990, 1, 1));
        assert_eq!(label.age_text, "6 years, 1 month old");
    }

    #[test]
    fn test_month_end_birthday_clamps() {
        // Born Jan 31; 1990-02-28 is the clamped one-month anniversary,
        // so four weeks later (Feb 28) reads as a full month
        let label = week_label(4, date(1990, 1, 31));
        assert_eq!(label.age_text, "1 month, 0 weeks old");
    }
}
