use serde::{Deserialize, Serialize};
use service_core::error::AppError;

/// A single workout set submitted by the client.
///
/// Missing fields decode to their zero values (empty string, 0, 0.0) and are
/// rejected by [`WorkoutLog::validate`] with the matching field message, so a
/// body like `{"reps": 10}` reports the absent exercise name rather than a
/// generic decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WorkoutLog {
    pub exercise: String,
    pub reps: i32,
    pub weight: f64,
}

impl WorkoutLog {
    /// Field checks in a fixed order; the first failure wins.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.exercise.is_empty() {
            return Err(AppError::Validation("Exercise name is required"));
        }
        if self.reps <= 0 {
            return Err(AppError::Validation("Reps must be greater than 0"));
        }
        if self.weight <= 0.0 {
            return Err(AppError::Validation("Weight must be greater than 0"));
        }
        Ok(())
    }
}

/// The scored workout returned to the client.
#[derive(Debug, Clone, Serialize)]
pub struct XpResponse {
    pub exercise: String,
    pub reps: i32,
    pub weight: f64,
    pub xp_gained: i64,
    pub timestamp: String,
}
