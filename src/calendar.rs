use crate::models::{DayCell, Habit, HabitResponse};
use chrono::{Datelike, Local, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(0)
}

// Monday-first week: the 1st on a Sunday leaves six leading blanks.
pub fn leading_blanks(year: i32, month: u32) -> u8 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first| first.weekday().num_days_from_monday() as u8)
        .unwrap_or(0)
}

pub fn can_toggle(today: NaiveDate, date: NaiveDate) -> bool {
    date.year() == today.year() && date.month() == today.month() && date <= today
}

pub fn habit_month(habit: &Habit) -> HabitResponse {
    habit_month_at(today(), habit)
}

pub fn habit_month_at(today: NaiveDate, habit: &Habit) -> HabitResponse {
    let year = today.year();
    let month = today.month();

    let mut days = Vec::new();
    for day in 1..=days_in_month(year, month) {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            let key = date_key(date);
            days.push(DayCell {
                completed: habit.completed_days.contains(&key),
                today: date == today,
                clickable: date <= today,
                day,
                date: key,
            });
        }
    }

    HabitResponse {
        id: habit.id.clone(),
        name: habit.name.clone(),
        year,
        month,
        leading_blanks: leading_blanks(year, month),
        days,
    }
}
