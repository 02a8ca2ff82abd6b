//! Single-exchange combat resolution.
//!
//! Integer division truncates toward zero. Damage subtraction saturates and
//! the health update wraps, so the only clamp in play is the damage floor.

use serde::Serialize;

use crate::combat::stats::CombatStats;
use crate::data::movie::Movie;
use crate::data::opponent::Opponent;

/// Every exchange deals at least this much damage.
pub const MIN_DAMAGE: i32 = 1;

/// Damage dealt by `attacker_attack` against a defender whose attack is
/// `defender_attack`: max(1, attacker - defender / 2).
pub fn resolve_damage(attacker_attack: i32, defender_attack: i32) -> i32 {
    let raw = attacker_attack.saturating_sub(defender_attack / 2);
    raw.max(MIN_DAMAGE)
}

/// The movie attacks once. Only `opponent.health` changes; it may go negative.
pub fn player_attack(movie: &Movie, opponent: &mut Opponent) -> i32 {
    let damage = resolve_damage(movie.stats().attack, opponent.attack);
    opponent.health = opponent.health.wrapping_sub(damage);
    tracing::debug!(
        movie = movie.title(),
        opponent = %opponent.name,
        damage,
        remaining = opponent.health,
        "resolved attack"
    );
    damage
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BattleReport {
    pub movie: String,
    pub movie_stats: CombatStats,
    pub opponent: String,
    pub enemy_start_health: i32,
    pub damage: i32,
    pub enemy_remaining_health: i32,
}

impl BattleReport {
    /// The three human-readable lines of a battle, without trailing newline.
    pub fn to_text(&self) -> String {
        format!(
            "Battle Start!\nEnemy HP: {}\nYou dealt {} damage.",
            self.enemy_start_health, self.damage
        )
    }
}

/// Run one exchange and summarize it.
pub fn run_battle(movie: &Movie, mut opponent: Opponent) -> BattleReport {
    let enemy_start_health = opponent.health;
    let damage = player_attack(movie, &mut opponent);
    BattleReport {
        movie: movie.title().to_string(),
        movie_stats: *movie.stats(),
        opponent: opponent.name,
        enemy_start_health,
        damage,
        enemy_remaining_health: opponent.health,
    }
}
