use crate::models::{AppData, Area, Goal};
use uuid::Uuid;

pub const MAX_AREAS: usize = 20;

pub const PALETTE: [&str; 8] = [
    "#6fd47e", "#4a90e2", "#3cb371", "#ff6666", "#ffb347", "#ffd700", "#87ceeb", "#ff69b4",
];

pub const DEFAULT_AREA_NAME: &str = "New Area";
pub const DEFAULT_AREA_VALUE: u8 = 5;

const SEED_AREAS: [&str; 8] = [
    "Health & Energy",
    "Work & Business",
    "Finances",
    "Family & Relationships",
    "Creativity",
    "Personal Growth",
    "Leisure & Recreation",
    "Friends & Community",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    AreaLimit,
    EmptyName,
    EmptyText,
    BadValue,
    UnknownArea,
    UnknownGoal,
}

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn seed() -> AppData {
    let areas = SEED_AREAS
        .iter()
        .enumerate()
        .map(|(index, name)| Area {
            id: new_id(),
            name: (*name).to_string(),
            value: DEFAULT_AREA_VALUE,
            color: PALETTE[index % PALETTE.len()].to_string(),
            goals: Vec::new(),
        })
        .collect();

    AppData {
        areas,
        habits: Vec::new(),
    }
}

// First palette color nobody uses yet; cycle once all eight are taken.
pub fn next_color(areas: &[Area]) -> &'static str {
    PALETTE
        .iter()
        .find(|color| !areas.iter().any(|area| area.color == **color))
        .copied()
        .unwrap_or(PALETTE[areas.len() % PALETTE.len()])
}

pub fn area_index(areas: &[Area], id: &str) -> Option<usize> {
    areas.iter().position(|area| area.id == id)
}

pub fn add_area(areas: &mut Vec<Area>) -> Result<Area, RegistryError> {
    if areas.len() >= MAX_AREAS {
        return Err(RegistryError::AreaLimit);
    }
    let area = Area {
        id: new_id(),
        name: DEFAULT_AREA_NAME.to_string(),
        value: DEFAULT_AREA_VALUE,
        color: next_color(areas).to_string(),
        goals: Vec::new(),
    };
    areas.push(area.clone());
    Ok(area)
}

pub fn rename_area(areas: &mut [Area], id: &str, name: &str) -> Result<Area, RegistryError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RegistryError::EmptyName);
    }
    let area = area_mut(areas, id)?;
    area.name = name.to_string();
    Ok(area.clone())
}

pub fn set_value(areas: &mut [Area], id: &str, value: u8) -> Result<Area, RegistryError> {
    if !(1..=10).contains(&value) {
        return Err(RegistryError::BadValue);
    }
    let area = area_mut(areas, id)?;
    area.value = value;
    Ok(area.clone())
}

// Remaining areas shift down one slot; their angles follow from position.
pub fn delete_area(areas: &mut Vec<Area>, id: &str) -> Result<Area, RegistryError> {
    let index = area_index(areas, id).ok_or(RegistryError::UnknownArea)?;
    Ok(areas.remove(index))
}

pub fn add_goal(areas: &mut [Area], area_id: &str, text: &str) -> Result<Goal, RegistryError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(RegistryError::EmptyText);
    }
    let area = area_mut(areas, area_id)?;
    let goal = Goal {
        id: new_id(),
        text: text.to_string(),
        completed: false,
    };
    area.goals.push(goal.clone());
    Ok(goal)
}

pub fn edit_goal(
    areas: &mut [Area],
    area_id: &str,
    goal_id: &str,
    text: &str,
) -> Result<Goal, RegistryError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(RegistryError::EmptyText);
    }
    let goal = goal_mut(area_mut(areas, area_id)?, goal_id)?;
    goal.text = text.to_string();
    Ok(goal.clone())
}

pub fn toggle_goal(areas: &mut [Area], area_id: &str, goal_id: &str) -> Result<Goal, RegistryError> {
    let goal = goal_mut(area_mut(areas, area_id)?, goal_id)?;
    goal.completed = !goal.completed;
    Ok(goal.clone())
}

pub fn delete_goal(areas: &mut [Area], area_id: &str, goal_id: &str) -> Result<Area, RegistryError> {
    let area = area_mut(areas, area_id)?;
    let index = area
        .goals
        .iter()
        .position(|goal| goal.id == goal_id)
        .ok_or(RegistryError::UnknownGoal)?;
    area.goals.remove(index);
    Ok(area.clone())
}

fn area_mut<'a>(areas: &'a mut [Area], id: &str) -> Result<&'a mut Area, RegistryError> {
    areas
        .iter_mut()
        .find(|area| area.id == id)
        .ok_or(RegistryError::UnknownArea)
}

fn goal_mut<'a>(area: &'a mut Area, goal_id: &str) -> Result<&'a mut Goal, RegistryError> {
    area.goals
        .iter_mut()
        .find(|goal| goal.id == goal_id)
        .ok_or(RegistryError::UnknownGoal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_eight_areas_in_palette_order() {
        let data = seed();
        assert_eq!(data.areas.len(), 8);
        assert!(data.habits.is_empty());
        for (index, area) in data.areas.iter().enumerate() {
            assert_eq!(area.value, DEFAULT_AREA_VALUE);
            assert_eq!(area.color, PALETTE[index]);
            assert!(area.goals.is_empty());
            assert!(!area.id.is_empty());
        }
        assert_eq!(data.areas[0].name, "Health & Energy");
    }

    #[test]
    fn add_area_appends_defaults_and_fresh_id() {
        let mut areas = Vec::new();
        let first = add_area(&mut areas).unwrap();
        let second = add_area(&mut areas).unwrap();

        assert_eq!(areas.len(), 2);
        assert_eq!(first.name, DEFAULT_AREA_NAME);
        assert_eq!(first.value, 5);
        assert_ne!(first.id, second.id);
        assert_eq!(first.color, PALETTE[0]);
        assert_eq!(second.color, PALETTE[1]);
    }

    #[test]
    fn add_area_rejects_beyond_the_limit() {
        let mut areas = Vec::new();
        for _ in 0..MAX_AREAS {
            add_area(&mut areas).unwrap();
        }
        assert_eq!(add_area(&mut areas), Err(RegistryError::AreaLimit));
        assert_eq!(areas.len(), MAX_AREAS);
    }

    #[test]
    fn next_color_reuses_a_freed_palette_slot() {
        let mut areas = Vec::new();
        for _ in 0..3 {
            add_area(&mut areas).unwrap();
        }
        let freed = areas[1].color.clone();
        let id = areas[1].id.clone();
        delete_area(&mut areas, &id).unwrap();
        assert_eq!(next_color(&areas), freed.as_str());
    }

    #[test]
    fn delete_shifts_later_areas_down_by_one() {
        let mut areas = Vec::new();
        for _ in 0..4 {
            add_area(&mut areas).unwrap();
        }
        let ids: Vec<String> = areas.iter().map(|area| area.id.clone()).collect();

        delete_area(&mut areas, &ids[1]).unwrap();

        assert_eq!(areas.len(), 3);
        assert_eq!(area_index(&areas, &ids[0]), Some(0));
        assert_eq!(area_index(&areas, &ids[2]), Some(1));
        assert_eq!(area_index(&areas, &ids[3]), Some(2));
        assert_eq!(area_index(&areas, &ids[1]), None);
        assert_eq!(
            delete_area(&mut areas, &ids[1]),
            Err(RegistryError::UnknownArea)
        );
    }

    #[test]
    fn rename_trims_and_rejects_empty() {
        let mut areas = Vec::new();
        let id = add_area(&mut areas).unwrap().id;

        let renamed = rename_area(&mut areas, &id, "  Deep Work  ").unwrap();
        assert_eq!(renamed.name, "Deep Work");
        assert_eq!(
            rename_area(&mut areas, &id, "   "),
            Err(RegistryError::EmptyName)
        );
        assert_eq!(areas[0].name, "Deep Work");
    }

    #[test]
    fn set_value_enforces_the_slider_range() {
        let mut areas = Vec::new();
        let id = add_area(&mut areas).unwrap().id;

        assert_eq!(set_value(&mut areas, &id, 10).unwrap().value, 10);
        assert_eq!(set_value(&mut areas, &id, 0), Err(RegistryError::BadValue));
        assert_eq!(set_value(&mut areas, &id, 11), Err(RegistryError::BadValue));
        assert_eq!(areas[0].value, 10);
        assert_eq!(
            set_value(&mut areas, "missing", 5),
            Err(RegistryError::UnknownArea)
        );
    }

    #[test]
    fn goal_toggle_twice_restores_the_stored_state() {
        let mut areas = Vec::new();
        let area_id = add_area(&mut areas).unwrap().id;
        let goal = add_goal(&mut areas, &area_id, "Read a book").unwrap();
        assert!(!goal.completed);

        let before = areas.clone();
        let on = toggle_goal(&mut areas, &area_id, &goal.id).unwrap();
        assert!(on.completed);
        let off = toggle_goal(&mut areas, &area_id, &goal.id).unwrap();
        assert!(!off.completed);
        assert_eq!(areas, before);
    }

    #[test]
    fn goal_edit_and_delete() {
        let mut areas = Vec::new();
        let area_id = add_area(&mut areas).unwrap().id;
        let goal = add_goal(&mut areas, &area_id, "draft").unwrap();

        let edited = edit_goal(&mut areas, &area_id, &goal.id, " final ").unwrap();
        assert_eq!(edited.text, "final");

        let area = delete_goal(&mut areas, &area_id, &goal.id).unwrap();
        assert!(area.goals.is_empty());
        assert_eq!(
            delete_goal(&mut areas, &area_id, &goal.id),
            Err(RegistryError::UnknownGoal)
        );
    }

    #[test]
    fn goal_operations_reject_blank_text() {
        let mut areas = Vec::new();
        let area_id = add_area(&mut areas).unwrap().id;
        assert_eq!(
            add_goal(&mut areas, &area_id, "  "),
            Err(RegistryError::EmptyText)
        );
        assert_eq!(
            add_goal(&mut areas, "missing", "x"),
            Err(RegistryError::UnknownArea)
        );
    }
}
