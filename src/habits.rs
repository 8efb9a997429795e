use crate::calendar;
use crate::models::Habit;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HabitError {
    EmptyName,
    UnknownHabit,
    BadDate,
    DateNotAllowed,
}

pub fn add_habit(habits: &mut Vec<Habit>, name: &str) -> Result<Habit, HabitError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(HabitError::EmptyName);
    }
    let habit = Habit {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        completed_days: BTreeSet::new(),
    };
    habits.push(habit.clone());
    Ok(habit)
}

pub fn rename_habit(habits: &mut [Habit], id: &str, name: &str) -> Result<Habit, HabitError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(HabitError::EmptyName);
    }
    let habit = habit_mut(habits, id)?;
    habit.name = name.to_string();
    Ok(habit.clone())
}

pub fn delete_habit(habits: &mut Vec<Habit>, id: &str) -> Result<Habit, HabitError> {
    let index = habits
        .iter()
        .position(|habit| habit.id == id)
        .ok_or(HabitError::UnknownHabit)?;
    Ok(habits.remove(index))
}

pub fn toggle_day(habits: &mut [Habit], id: &str, date: &str) -> Result<Habit, HabitError> {
    toggle_day_at(calendar::today(), habits, id, date)
}

pub fn toggle_day_at(
    today: NaiveDate,
    habits: &mut [Habit],
    id: &str,
    date: &str,
) -> Result<Habit, HabitError> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| HabitError::BadDate)?;
    if !calendar::can_toggle(today, date) {
        return Err(HabitError::DateNotAllowed);
    }
    let habit = habit_mut(habits, id)?;
    let key = calendar::date_key(date);
    if !habit.completed_days.remove(&key) {
        habit.completed_days.insert(key);
    }
    Ok(habit.clone())
}

fn habit_mut<'a>(habits: &'a mut [Habit], id: &str) -> Result<&'a mut Habit, HabitError> {
    habits
        .iter_mut()
        .find(|habit| habit.id == id)
        .ok_or(HabitError::UnknownHabit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn add_rename_delete_lifecycle() {
        let mut habits = Vec::new();
        let habit = add_habit(&mut habits, "  Meditate ").unwrap();
        assert_eq!(habit.name, "Meditate");
        assert!(habit.completed_days.is_empty());

        let renamed = rename_habit(&mut habits, &habit.id, "Meditate daily").unwrap();
        assert_eq!(renamed.name, "Meditate daily");

        delete_habit(&mut habits, &habit.id).unwrap();
        assert!(habits.is_empty());
        assert_eq!(
            delete_habit(&mut habits, &habit.id),
            Err(HabitError::UnknownHabit)
        );
    }

    #[test]
    fn blank_names_are_rejected() {
        let mut habits = Vec::new();
        assert_eq!(add_habit(&mut habits, "   "), Err(HabitError::EmptyName));
        let id = add_habit(&mut habits, "Walk").unwrap().id;
        assert_eq!(
            rename_habit(&mut habits, &id, ""),
            Err(HabitError::EmptyName)
        );
    }

    #[test]
    fn toggle_twice_restores_the_original_set() {
        let mut habits = Vec::new();
        let id = add_habit(&mut habits, "Walk").unwrap().id;
        let today = day(2024, 2, 15);

        let on = toggle_day_at(today, &mut habits, &id, "2024-02-10").unwrap();
        assert!(on.completed_days.contains("2024-02-10"));

        let off = toggle_day_at(today, &mut habits, &id, "2024-02-10").unwrap();
        assert!(off.completed_days.is_empty());
    }

    #[test]
    fn future_and_out_of_month_dates_are_inert() {
        let mut habits = Vec::new();
        let id = add_habit(&mut habits, "Walk").unwrap().id;
        let today = day(2024, 2, 15);

        assert_eq!(
            toggle_day_at(today, &mut habits, &id, "2024-02-16"),
            Err(HabitError::DateNotAllowed)
        );
        assert_eq!(
            toggle_day_at(today, &mut habits, &id, "2024-01-31"),
            Err(HabitError::DateNotAllowed)
        );
        assert_eq!(
            toggle_day_at(today, &mut habits, &id, "not-a-date"),
            Err(HabitError::BadDate)
        );
        assert!(habits[0].completed_days.is_empty());
    }

    #[test]
    fn today_itself_can_be_toggled() {
        let mut habits = Vec::new();
        let id = add_habit(&mut habits, "Walk").unwrap().id;
        let today = day(2024, 2, 15);

        let habit = toggle_day_at(today, &mut habits, &id, "2024-02-15").unwrap();
        assert!(habit.completed_days.contains("2024-02-15"));
    }

    #[test]
    fn unknown_habit_is_reported() {
        let mut habits = Vec::new();
        assert_eq!(
            toggle_day_at(day(2024, 2, 15), &mut habits, "missing", "2024-02-10"),
            Err(HabitError::UnknownHabit)
        );
    }
}
