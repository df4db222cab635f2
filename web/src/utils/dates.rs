use chrono::{Datelike, Local, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Move a (year, month) pair by a number of months, carrying across years.
pub fn shift_month(year: i32, month: u32, offset: i32) -> (i32, u32) {
    let total = year * 12 + month as i32 - 1 + offset;
    (total.div_euclid(12), (total.rem_euclid(12) + 1) as u32)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = shift_month(year, month, 1);
    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(next)) => next.signed_duration_since(first).num_days() as u32,
        _ => 30,
    }
}

/// Weekday of the first of the month, 0 = Sunday.
pub fn first_weekday(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|date| date.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// The cells of a Sun-Sat calendar grid: leading `None` padding, then one
/// entry per day of the month.
pub fn calendar_days(year: i32, month: u32) -> Vec<Option<NaiveDate>> {
    let mut days = Vec::new();

    for _ in 0..first_weekday(year, month) {
        days.push(None);
    }
    for day in 1..=days_in_month(year, month) {
        days.push(NaiveDate::from_ymd_opt(year, month, day));
    }

    days
}

pub fn month_title(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|date| date.format("%B %Y").to_string())
        .unwrap_or_default()
}

/// "Mon Mar 18 2024", the style the confirmation dialog uses.
pub fn format_long(date: NaiveDate) -> String {
    date.format("%a %b %-d %Y").to_string()
}

/// "Mar 18, 2024", the style the blog cards use.
pub fn format_post_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_month_carries_across_years() {
        assert_eq!(shift_month(2024, 11, 0), (2024, 11));
        assert_eq!(shift_month(2024, 11, 2), (2025, 1));
        assert_eq!(shift_month(2024, 12, 1), (2025, 1));
        assert_eq!(shift_month(2024, 1, -1), (2023, 12));
        assert_eq!(shift_month(2024, 3, 14), (2025, 5));
    }

    #[test]
    fn month_lengths_including_leap_years() {
        assert_eq!(days_in_month(2024, 1), 31);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2100, 2), 28);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn first_weekday_is_sunday_based() {
        // 2024-03-01 was a Friday, 2024-09-01 a Sunday.
        assert_eq!(first_weekday(2024, 3), 5);
        assert_eq!(first_weekday(2024, 9), 0);
    }

    #[test]
    fn calendar_grid_pads_then_lists_every_day() {
        let days = calendar_days(2024, 3);

        assert_eq!(days.len(), 5 + 31);
        assert!(days[..5].iter().all(Option::is_none));
        assert_eq!(days[5], NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(days[35], NaiveDate::from_ymd_opt(2024, 3, 31));
    }

    #[test]
    fn display_formats() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();

        assert_eq!(month_title(2024, 3), "March 2024");
        assert_eq!(format_long(date), "Tue Mar 5 2024");
        assert_eq!(format_post_date(date), "Mar 5, 2024");
    }
}
