//! XP scoring.
//!
//! XP is derived from total volume (reps times weight), adjusted by a
//! multiplier keyed on the rep band: low-rep strength sets earn a bonus,
//! high-rep endurance sets are discounted.

/// Multiplier for the rep band: 0.8 above 12 reps, 1.2 below 5, else 1.0.
pub fn volume_multiplier(reps: i32) -> f64 {
    if reps > 12 {
        0.8
    } else if reps < 5 {
        1.2
    } else {
        1.0
    }
}

/// Compute the XP gained for a set.
///
/// The result truncates toward zero; callers depend on this rather than
/// rounding, since the truncated value is part of the response contract.
pub fn compute_xp(reps: i32, weight: f64) -> i64 {
    let base_xp = reps as f64 * weight;
    (base_xp * volume_multiplier(reps) * 0.1) as i64
}
