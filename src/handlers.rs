use crate::calendar;
use crate::errors::AppError;
use crate::habits::{self, HabitError};
use crate::models::{
    Area, AreaResponse, DayRequest, HabitResponse, NameRequest, Sector, StateResponse, TextRequest,
    ValueRequest, WheelResponse,
};
use crate::registry::{self, RegistryError};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::{render_habits_page, render_wheel_page};
use crate::wheel::{sector_layout, wheel_layout};
use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    Html(render_wheel_page(&state.wheel, &data.areas))
}

pub async fn habits_page(State(state): State<AppState>) -> Html<String> {
    let today = calendar::today();
    let data = state.data.lock().await;
    let months: Vec<_> = data
        .habits
        .iter()
        .map(|habit| calendar::habit_month_at(today, habit))
        .collect();
    Html(render_habits_page(today, &months))
}

pub async fn get_state(State(state): State<AppState>) -> Result<Json<StateResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(StateResponse {
        areas: data
            .areas
            .iter()
            .enumerate()
            .map(|(index, area)| area_response(index, area))
            .collect(),
        habits: data.habits.clone(),
    }))
}

pub async fn get_wheel(State(state): State<AppState>) -> Result<Json<WheelResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(wheel_layout(&state.wheel, &data.areas)))
}

pub async fn add_area(State(state): State<AppState>) -> Result<Json<WheelResponse>, AppError> {
    let mut data = state.data.lock().await;
    registry::add_area(&mut data.areas).map_err(registry_error)?;

    persist_data(&state.data_path, &data).await?;

    Ok(Json(wheel_layout(&state.wheel, &data.areas)))
}

pub async fn rename_area(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<NameRequest>,
) -> Result<Json<AreaResponse>, AppError> {
    let mut data = state.data.lock().await;
    let index = area_slot(&data.areas, &id)?;
    let area = registry::rename_area(&mut data.areas, &id, &payload.name).map_err(registry_error)?;

    persist_data(&state.data_path, &data).await?;

    Ok(Json(area_response(index, &area)))
}

pub async fn set_area_value(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ValueRequest>,
) -> Result<Json<Sector>, AppError> {
    let mut data = state.data.lock().await;
    let index = area_slot(&data.areas, &id)?;
    let area = registry::set_value(&mut data.areas, &id, payload.value).map_err(registry_error)?;

    persist_data(&state.data_path, &data).await?;

    Ok(Json(sector_layout(&state.wheel, index, data.areas.len(), &area)))
}

pub async fn delete_area(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WheelResponse>, AppError> {
    let mut data = state.data.lock().await;
    registry::delete_area(&mut data.areas, &id).map_err(registry_error)?;

    persist_data(&state.data_path, &data).await?;

    // The rebuilt layout carries every shift in index, span, and angle.
    Ok(Json(wheel_layout(&state.wheel, &data.areas)))
}

pub async fn add_goal(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<TextRequest>,
) -> Result<Json<AreaResponse>, AppError> {
    let mut data = state.data.lock().await;
    let index = area_slot(&data.areas, &id)?;
    registry::add_goal(&mut data.areas, &id, &payload.text).map_err(registry_error)?;

    persist_data(&state.data_path, &data).await?;

    Ok(Json(area_response(index, &data.areas[index])))
}

pub async fn edit_goal(
    State(state): State<AppState>,
    Path((id, goal_id)): Path<(String, String)>,
    Json(payload): Json<TextRequest>,
) -> Result<Json<AreaResponse>, AppError> {
    let mut data = state.data.lock().await;
    let index = area_slot(&data.areas, &id)?;
    registry::edit_goal(&mut data.areas, &id, &goal_id, &payload.text).map_err(registry_error)?;

    persist_data(&state.data_path, &data).await?;

    Ok(Json(area_response(index, &data.areas[index])))
}

pub async fn toggle_goal(
    State(state): State<AppState>,
    Path((id, goal_id)): Path<(String, String)>,
) -> Result<Json<AreaResponse>, AppError> {
    let mut data = state.data.lock().await;
    let index = area_slot(&data.areas, &id)?;
    registry::toggle_goal(&mut data.areas, &id, &goal_id).map_err(registry_error)?;

    persist_data(&state.data_path, &data).await?;

    Ok(Json(area_response(index, &data.areas[index])))
}

pub async fn delete_goal(
    State(state): State<AppState>,
    Path((id, goal_id)): Path<(String, String)>,
) -> Result<Json<AreaResponse>, AppError> {
    let mut data = state.data.lock().await;
    let index = area_slot(&data.areas, &id)?;
    registry::delete_goal(&mut data.areas, &id, &goal_id).map_err(registry_error)?;

    persist_data(&state.data_path, &data).await?;

    Ok(Json(area_response(index, &data.areas[index])))
}

pub async fn get_habits(
    State(state): State<AppState>,
) -> Result<Json<Vec<HabitResponse>>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(data.habits.iter().map(calendar::habit_month).collect()))
}

pub async fn add_habit(
    State(state): State<AppState>,
    Json(payload): Json<NameRequest>,
) -> Result<Json<HabitResponse>, AppError> {
    let mut data = state.data.lock().await;
    let habit = habits::add_habit(&mut data.habits, &payload.name).map_err(habit_error)?;

    persist_data(&state.data_path, &data).await?;

    Ok(Json(calendar::habit_month(&habit)))
}

pub async fn rename_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<NameRequest>,
) -> Result<Json<HabitResponse>, AppError> {
    let mut data = state.data.lock().await;
    let habit = habits::rename_habit(&mut data.habits, &id, &payload.name).map_err(habit_error)?;

    persist_data(&state.data_path, &data).await?;

    Ok(Json(calendar::habit_month(&habit)))
}

pub async fn toggle_habit_day(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<DayRequest>,
) -> Result<Json<HabitResponse>, AppError> {
    let mut data = state.data.lock().await;
    let habit = habits::toggle_day(&mut data.habits, &id, &payload.date).map_err(habit_error)?;

    persist_data(&state.data_path, &data).await?;

    Ok(Json(calendar::habit_month(&habit)))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<HabitResponse>>, AppError> {
    let mut data = state.data.lock().await;
    habits::delete_habit(&mut data.habits, &id).map_err(habit_error)?;

    persist_data(&state.data_path, &data).await?;

    Ok(Json(data.habits.iter().map(calendar::habit_month).collect()))
}

fn area_slot(areas: &[Area], id: &str) -> Result<usize, AppError> {
    registry::area_index(areas, id).ok_or_else(|| AppError::not_found("no such area"))
}

fn area_response(index: usize, area: &Area) -> AreaResponse {
    AreaResponse {
        id: area.id.clone(),
        index,
        name: area.name.clone(),
        value: area.value,
        color: area.color.clone(),
        goals: area.goals.clone(),
    }
}

fn registry_error(err: RegistryError) -> AppError {
    match err {
        RegistryError::AreaLimit => AppError::bad_request("area limit reached"),
        RegistryError::EmptyName => AppError::bad_request("name must not be empty"),
        RegistryError::EmptyText => AppError::bad_request("goal text must not be empty"),
        RegistryError::BadValue => AppError::bad_request("value must be between 1 and 10"),
        RegistryError::UnknownArea => AppError::not_found("no such area"),
        RegistryError::UnknownGoal => AppError::not_found("no such goal"),
    }
}

fn habit_error(err: HabitError) -> AppError {
    match err {
        HabitError::EmptyName => AppError::bad_request("name must not be empty"),
        HabitError::UnknownHabit => AppError::not_found("no such habit"),
        HabitError::BadDate => AppError::bad_request("date must be YYYY-MM-DD"),
        HabitError::DateNotAllowed => AppError::bad_request("day is outside the toggleable range"),
    }
}
