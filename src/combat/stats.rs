//! Stat derivation: a movie's runtime and rating become its combat stats.
//!
//! Inputs are not validated. Zero or negative runtime/rating yield zero or
//! negative stats; we only log them. Float-to-int conversion and the health
//! multiply saturate at the `i32` bounds instead of wrapping.

use serde::Serialize;

/// Runtime minutes per point of attack.
pub const RUNTIME_PER_ATTACK: i32 = 2;
/// Rating is scaled by this before truncation to defense.
pub const RATING_TO_DEFENSE: f64 = 10.0;
/// Health is this multiple of defense.
pub const HEALTH_PER_DEFENSE: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CombatStats {
    pub health: i32,
    pub attack: i32,
    pub defense: i32,
}

/// Derive stats from runtime (minutes) and rating (usually 0-10).
///
/// attack = runtime / 2 (truncating), defense = trunc(rating * 10),
/// health = defense * 2.
pub fn derive_stats(runtime_minutes: i32, rating: f64) -> CombatStats {
    if runtime_minutes <= 0 || rating.is_nan() || rating <= 0.0 {
        tracing::warn!(
            runtime_minutes,
            rating,
            "non-positive runtime or rating; derived stats will be zero or negative"
        );
    }

    let attack = runtime_minutes / RUNTIME_PER_ATTACK;
    // `as` saturates at the i32 bounds and maps NaN to 0.
    let defense = (rating * RATING_TO_DEFENSE) as i32;
    let health = defense.saturating_mul(HEALTH_PER_DEFENSE);

    let stats = CombatStats {
        health,
        attack,
        defense,
    };
    tracing::debug!(?stats, runtime_minutes, rating, "derived combat stats");
    stats
}
