//! Month page enumeration for locating a day's week row.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

const DAYS_PER_WEEK: usize = 7;

/// Returns the whole weeks covering the month of `date`.
///
/// The page starts on the `first_day` on or before the 1st of the month and
/// ends on the last weekday of the week containing the month's final day, so
/// its length is always a multiple of seven.
#[must_use]
pub fn month_page(date: NaiveDate, first_day: Weekday) -> Vec<NaiveDate> {
    let Some(first) = date.with_day(1) else {
        return Vec::new();
    };
    let Some(last) = first
        .checked_add_months(Months::new(1))
        .and_then(|next_month| next_month.pred_opt())
    else {
        return Vec::new();
    };

    let lead = days_into_week(first.weekday(), first_day);
    let trail = 6 - days_into_week(last.weekday(), first_day);
    let (Some(start), Some(end)) = (
        first.checked_sub_days(Days::new(u64::from(lead))),
        last.checked_add_days(Days::new(u64::from(trail))),
    ) else {
        return Vec::new();
    };

    let count = usize::try_from((end - start).num_days() + 1).unwrap_or(0);
    start.iter_days().take(count).collect()
}

/// Returns the 0-based week row of `target` within `page`.
///
/// Days missing from the page resolve to the first week.
#[must_use]
pub fn week_index(page: &[NaiveDate], target: NaiveDate) -> usize {
    page.chunks(DAYS_PER_WEEK)
        .position(|week| week.contains(&target))
        .unwrap_or(0)
}

/// Number of days `day` sits after `first_day` within a week.
const fn days_into_week(day: Weekday, first_day: Weekday) -> u32 {
    (day.num_days_from_sunday() + 7 - first_day.num_days_from_sunday()) % 7
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Weekday};
    use rstest::rstest;

    use super::{days_into_week, month_page, week_index};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn page_starts_on_first_day_and_spans_whole_weeks() {
        // March 2024 starts on a Friday and ends on a Sunday.
        let page = month_page(date(2024, 3, 15), Weekday::Sun);

        assert_eq!(page.first(), Some(&date(2024, 2, 25)));
        assert_eq!(page.last(), Some(&date(2024, 4, 6)));
        assert_eq!(page.len(), 42);
    }

    #[test]
    fn page_respects_monday_start() {
        let page = month_page(date(2024, 3, 15), Weekday::Mon);

        assert_eq!(page.first(), Some(&date(2024, 2, 26)));
        assert_eq!(page.last(), Some(&date(2024, 3, 31)));
        assert_eq!(page.len(), 35);
    }

    #[test]
    fn page_without_padding_when_month_aligns() {
        // February 2015 starts on a Sunday and ends on a Saturday.
        let page = month_page(date(2015, 2, 1), Weekday::Sun);

        assert_eq!(page.len(), 28);
        assert_eq!(page.first(), Some(&date(2015, 2, 1)));
    }

    #[rstest]
    #[case::first_week(date(2024, 3, 1), 0)]
    #[case::second_week(date(2024, 3, 3), 1)]
    #[case::last_week(date(2024, 3, 31), 5)]
    fn week_index_finds_row(#[case] target: NaiveDate, #[case] expected: usize) {
        let page = month_page(target, Weekday::Sun);
        assert_eq!(week_index(&page, target), expected);
    }

    #[test]
    fn days_into_week_wraps_around_first_day() {
        const MONDAY_AFTER_SUNDAY: u32 = days_into_week(Weekday::Mon, Weekday::Sun);
        const SUNDAY_AFTER_MONDAY: u32 = days_into_week(Weekday::Sun, Weekday::Mon);

        assert_eq!(MONDAY_AFTER_SUNDAY, 1);
        assert_eq!(SUNDAY_AFTER_MONDAY, 6);
    }

    #[rstest]
    #[case::leading_padding(date(2024, 2, 26), 0)]
    #[case::trailing_padding(date(2024, 4, 6), 5)]
    fn week_index_matches_padding_days_exactly(
        #[case] target: NaiveDate,
        #[case] expected: usize,
    ) {
        let page = month_page(date(2024, 3, 15), Weekday::Sun);
        assert_eq!(week_index(&page, target), expected);
    }

    #[test]
    fn week_index_defaults_to_zero_when_absent() {
        let page = month_page(date(2024, 3, 1), Weekday::Sun);
        assert_eq!(week_index(&page, date(2030, 1, 1)), 0);
    }
}
