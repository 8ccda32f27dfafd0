use crate::date_key::DateKey;
use crate::models::{CalendarDay, CalendarResponse, UserProgress};
use chrono::{Datelike, NaiveDate};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Month grid for the month containing `today`, weeks starting on Sunday.
pub fn build_calendar_at(today: DateKey, progress: &UserProgress) -> CalendarResponse {
    let date = today.date();
    let first = date.with_day(1).unwrap_or(date);
    let total_days = days_in_month(first);

    let days = (1..=total_days)
        .filter_map(|day| first.with_day(day))
        .map(DateKey::new)
        .map(|key| CalendarDay {
            date: key.format(),
            day: key.date().day(),
            selectable: key <= today,
            is_today: key == today,
            status: progress.records.status(key),
        })
        .collect();

    CalendarResponse {
        year: first.year(),
        month: first.month(),
        month_name: first.format("%B").to_string(),
        weekdays: WEEKDAYS.to_vec(),
        leading_blanks: first.weekday().num_days_from_sunday(),
        days,
    }
}

fn days_in_month(first: NaiveDate) -> u32 {
    let (year, month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}
