use serde::Serialize;

pub const DEFAULT_OPPONENT_NAME: &str = "Phone Scroller";
pub const DEFAULT_OPPONENT_HEALTH: i32 = 40;
pub const DEFAULT_OPPONENT_ATTACK: i32 = 6;

/// The defender. `health` is changed only by `combat::player_attack`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Opponent {
    pub name: String,
    pub health: i32,
    pub attack: i32,
}

impl Opponent {
    pub fn new(name: impl Into<String>, health: i32, attack: i32) -> Self {
        Self {
            name: name.into(),
            health,
            attack,
        }
    }
}

pub fn default_opponent() -> Opponent {
    Opponent::new(
        DEFAULT_OPPONENT_NAME,
        DEFAULT_OPPONENT_HEALTH,
        DEFAULT_OPPONENT_ATTACK,
    )
}
