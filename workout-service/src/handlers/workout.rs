use axum::{
    extract::rejection::JsonRejection,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};

use crate::models::{WorkoutLog, XpResponse};
use crate::scoring;
use service_core::error::AppError;

/// `POST /log`: validate a workout set and return the XP it earns.
///
/// Error bodies are plain text with a fixed message per failure; decode
/// detail stays in the logs. The timestamp is captured when the response is
/// built, RFC3339 with second precision.
#[tracing::instrument(skip_all)]
pub async fn log_workout(
    payload: Result<Json<WorkoutLog>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(workout) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "failed to decode workout payload");
        AppError::InvalidJson
    })?;

    workout.validate()?;

    let xp_gained = scoring::compute_xp(workout.reps, workout.weight);

    let response = XpResponse {
        exercise: workout.exercise,
        reps: workout.reps,
        weight: workout.weight,
        xp_gained,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    };

    let body = serde_json::to_vec(&response).map_err(|e| {
        tracing::error!(error = %e, "failed to encode XP response");
        AppError::Internal(anyhow::Error::new(e))
    })?;

    tracing::info!(
        exercise = %response.exercise,
        reps = response.reps,
        weight = format!("{:.1}", response.weight),
        xp_gained,
        "workout logged"
    );

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

/// Fallback for `/log` when the method is not POST.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
