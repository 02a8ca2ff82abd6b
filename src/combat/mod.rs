pub mod engine;
pub mod stats;

pub use engine::{player_attack, resolve_damage, run_battle, BattleReport, MIN_DAMAGE};
pub use stats::{
    derive_stats, CombatStats, HEALTH_PER_DEFENSE, RATING_TO_DEFENSE, RUNTIME_PER_ATTACK,
};
