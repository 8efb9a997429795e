use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/habits", get(handlers::habits_page))
        .route("/api/state", get(handlers::get_state))
        .route("/api/wheel", get(handlers::get_wheel))
        .route("/api/areas", post(handlers::add_area))
        .route("/api/areas/:id", delete(handlers::delete_area))
        .route("/api/areas/:id/name", post(handlers::rename_area))
        .route("/api/areas/:id/value", post(handlers::set_area_value))
        .route("/api/areas/:id/goals", post(handlers::add_goal))
        .route("/api/areas/:id/goals/:goal_id/text", post(handlers::edit_goal))
        .route("/api/areas/:id/goals/:goal_id/toggle", post(handlers::toggle_goal))
        .route("/api/areas/:id/goals/:goal_id", delete(handlers::delete_goal))
        .route("/api/habits", get(handlers::get_habits).post(handlers::add_habit))
        .route("/api/habits/:id", delete(handlers::delete_habit))
        .route("/api/habits/:id/name", post(handlers::rename_habit))
        .route("/api/habits/:id/days", post(handlers::toggle_habit_day))
        .with_state(state)
}
