// ABOUTME: Date line formatter for the charging screen.
// ABOUTME: Localizes weekday and month names but always renders the day with ASCII digits.

use chrono::Datelike;

use crate::i18n::{month_short_name, weekday_name, Language};

/// Formats `"<Weekday>, <Mon> <day>"`, e.g. `"Monday, Jul 22"`.
pub fn format_date<D: Datelike>(date: &D, lang: Language) -> String {
    let weekday = weekday_name(date.weekday(), lang);
    let month = month_short_name(date.month0(), lang);
    format!("{weekday}, {month} {}", date.day())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn monday_july_22() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 22).unwrap()
    }

    #[test]
    fn formats_english() {
        assert_eq!(format_date(&monday_july_22(), Language::En), "Monday, Jul 22");
    }

    #[test]
    fn formats_arabic_with_latin_day() {
        let s = format_date(&monday_july_22(), Language::Ar);
        assert_eq!(s, "الاثنين, يوليو 22");
        assert!(s.ends_with("22"));
    }

    #[test]
    fn single_digit_day_has_no_padding() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(format_date(&date, Language::En), "Monday, Jan 5");
    }

    #[test]
    fn accepts_datetimes() {
        let dt = monday_july_22().and_hms_opt(23, 59, 59).unwrap();
        assert_eq!(format_date(&dt, Language::En), "Monday, Jul 22");
    }
}
