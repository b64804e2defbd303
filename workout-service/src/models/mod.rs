pub mod workout;

pub use workout::{WorkoutLog, XpResponse};
