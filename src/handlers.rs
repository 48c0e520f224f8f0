use crate::errors::AppError;
use crate::models::{LogRequest, StatsQuery, StatsResponse, StudyRecord, TodayResponse};
use crate::quotes::{pick_quote, QUOTES};
use crate::state::AppState;
use crate::stats::{build_stats, today_summary};
use crate::storage::persist_log;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Form, Json,
};
use chrono::Local;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let quote = pick_quote(&mut rand::thread_rng(), &QUOTES).unwrap_or_default();
    let log = state.log.lock().await;
    let today = today_summary(&log);
    Html(render_index(&today, quote))
}

pub async fn get_today(State(state): State<AppState>) -> Result<Json<TodayResponse>, AppError> {
    let log = state.log.lock().await;
    Ok(Json(today_summary(&log)))
}

pub async fn get_stats(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<StatsResponse>, AppError> {
    let log = state.log.lock().await;
    Ok(Json(build_stats(&log, query.window)))
}

pub async fn log_entry(
    State(state): State<AppState>,
    Json(payload): Json<LogRequest>,
) -> Result<Json<TodayResponse>, AppError> {
    let response = apply_entry(&state, payload).await?;
    Ok(Json(response))
}

pub async fn log_form(
    State(state): State<AppState>,
    Form(payload): Form<LogRequest>,
) -> Result<Redirect, AppError> {
    apply_entry(&state, payload).await?;
    Ok(Redirect::to("/"))
}

async fn apply_entry(state: &AppState, payload: LogRequest) -> Result<TodayResponse, AppError> {
    let subject = payload.subject.trim();
    if subject.is_empty() {
        return Err(AppError::bad_request("subject must not be empty"));
    }
    if payload.hours < 0.5 {
        return Err(AppError::bad_request("hours must be at least 0.5"));
    }
    if (payload.hours * 2.0).fract() != 0.0 {
        return Err(AppError::bad_request("hours must be in 0.5 increments"));
    }

    let record = StudyRecord {
        date: Local::now().date_naive(),
        subject: subject.to_string(),
        hours: payload.hours,
        mood: payload.mood,
    };

    let mut log = state.log.lock().await;
    log.append(record);
    persist_log(&state.data_path, &log).await?;

    Ok(today_summary(&log))
}
