pub mod health;
pub mod workout;

pub use health::{health_check, readiness_check};
pub use workout::{log_workout, method_not_allowed};
