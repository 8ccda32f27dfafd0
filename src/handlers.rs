use crate::calendar::build_calendar_at;
use crate::controller::{DayStatusController, RolloverOutcome};
use crate::date_key::DateKey;
use crate::errors::AppError;
use crate::models::{
    CalendarResponse, CheckDayResponse, ProgressResponse, ToggleRequest, ToggleResponse,
};
use crate::state::AppState;
use crate::storage::persist_progress;
use crate::ui::render_index;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Json,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let today = DateKey::today();
    let controller = state.controller.lock().await;
    Html(render_index(&to_response(&controller, today)))
}

pub async fn get_progress(State(state): State<AppState>) -> Result<Json<ProgressResponse>, AppError> {
    let today = DateKey::today();
    let controller = state.controller.lock().await;
    Ok(Json(to_response(&controller, today)))
}

pub async fn get_calendar(State(state): State<AppState>) -> Result<Json<CalendarResponse>, AppError> {
    let today = DateKey::today();
    let controller = state.controller.lock().await;
    Ok(Json(build_calendar_at(today, controller.progress())))
}

pub async fn toggle_day(
    State(state): State<AppState>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<ToggleResponse>, AppError> {
    let day = payload
        .date
        .parse::<DateKey>()
        .map_err(|err| AppError::bad_request(err.to_string()))?;
    let today = DateKey::today();

    let mut controller = state.controller.lock().await;
    let outcome = controller.toggle_day(day, today)?;
    persist_progress(&state.data_path, controller.progress()).await?;

    Ok(Json(ToggleResponse {
        date: outcome.day.format(),
        status: outcome.status,
        warning: outcome.notice.map(|notice| notice.message),
        progress: to_response(&controller, today),
    }))
}

pub async fn mark_today(State(state): State<AppState>) -> Result<Json<ProgressResponse>, AppError> {
    Ok(Json(apply_mark_today(&state).await?))
}

pub async fn mark_today_form(State(state): State<AppState>) -> Result<Redirect, AppError> {
    apply_mark_today(&state).await?;
    Ok(Redirect::to("/"))
}

pub async fn reset_streak(State(state): State<AppState>) -> Result<Json<ProgressResponse>, AppError> {
    Ok(Json(apply_reset(&state).await?))
}

pub async fn reset_streak_form(State(state): State<AppState>) -> Result<Redirect, AppError> {
    apply_reset(&state).await?;
    Ok(Redirect::to("/"))
}

pub async fn check_day(State(state): State<AppState>) -> Result<Json<CheckDayResponse>, AppError> {
    let today = DateKey::today();
    let mut controller = state.controller.lock().await;
    let outcome = controller.check_day_change(today);
    if outcome.needs_save() {
        persist_progress(&state.data_path, controller.progress()).await?;
    }

    Ok(Json(CheckDayResponse {
        recalculated: outcome == RolloverOutcome::Recalculated,
        progress: to_response(&controller, today),
    }))
}

async fn apply_mark_today(state: &AppState) -> Result<ProgressResponse, AppError> {
    let today = DateKey::today();
    let mut controller = state.controller.lock().await;
    controller.mark_today(today)?;
    persist_progress(&state.data_path, controller.progress()).await?;
    Ok(to_response(&controller, today))
}

async fn apply_reset(state: &AppState) -> Result<ProgressResponse, AppError> {
    let today = DateKey::today();
    let mut controller = state.controller.lock().await;
    controller.reset_current_streak(today)?;
    persist_progress(&state.data_path, controller.progress()).await?;
    Ok(to_response(&controller, today))
}

fn to_response(controller: &DayStatusController, today: DateKey) -> ProgressResponse {
    let progress = controller.progress();
    ProgressResponse {
        date: today.format(),
        mode: controller.mode(),
        current_streak: progress.current_streak,
        best_streak: progress.best_streak,
        last_updated: progress.last_updated.map(|day| day.format()),
    }
}
