use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/today/mark", post(handlers::mark_today_form))
        .route("/streak/reset", post(handlers::reset_streak_form))
        .route("/api/progress", get(handlers::get_progress))
        .route("/api/calendar", get(handlers::get_calendar))
        .route("/api/days/toggle", post(handlers::toggle_day))
        .route("/api/today/mark", post(handlers::mark_today))
        .route("/api/streak/reset", post(handlers::reset_streak))
        .route("/api/check-day", post(handlers::check_day))
        .with_state(state)
}
