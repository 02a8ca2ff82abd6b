use movie_battle::combat::{
    derive_stats, player_attack, resolve_damage, run_battle, CombatStats, MIN_DAMAGE,
};
use movie_battle::data::{default_movie, default_opponent, Movie, Opponent};
use proptest::prelude::*;

#[test]
fn inception_versus_phone_scroller_end_to_end() {
    let movie = Movie::new(
        "Inception",
        148,
        8.8,
        vec!["Action".to_string(), "Sci-Fi".to_string()],
    );
    assert_eq!(
        *movie.stats(),
        CombatStats {
            health: 176,
            attack: 74,
            defense: 88,
        }
    );

    let mut opponent = Opponent::new("Phone Scroller", 40, 6);
    let damage = player_attack(&movie, &mut opponent);

    assert_eq!(damage, 71);
    assert_eq!(opponent.health, -31);
}

#[test]
fn default_battle_report_matches_expected_output() {
    let report = run_battle(&default_movie(), default_opponent());

    assert_eq!(report.movie, "Inception");
    assert_eq!(report.opponent, "Phone Scroller");
    assert_eq!(report.enemy_start_health, 40);
    assert_eq!(report.damage, 71);
    assert_eq!(report.enemy_remaining_health, -31);
    assert_eq!(
        report.to_text(),
        "Battle Start!\nEnemy HP: 40\nYou dealt 71 damage."
    );
}

#[test]
fn boundary_minimal_attacker_against_harmless_defender() {
    assert_eq!(resolve_damage(1, 0), 1);
}

#[test]
fn boundary_floor_engages_for_zero_attack() {
    assert_eq!(resolve_damage(0, 100), MIN_DAMAGE);
}

#[test]
fn attack_mutates_only_opponent_health() {
    let movie = Movie::new("Short", 2, 0.1, vec![]);
    let movie_before = movie.clone();
    let mut opponent = Opponent::new("Wall", 5, 500);

    let damage = player_attack(&movie, &mut opponent);

    assert_eq!(damage, MIN_DAMAGE);
    assert_eq!(opponent, Opponent::new("Wall", 4, 500));
    assert_eq!(movie, movie_before);
}

#[test]
fn health_keeps_dropping_below_zero() {
    let movie = default_movie();
    let mut opponent = Opponent::new("Husk", -31, 6);
    player_attack(&movie, &mut opponent);
    assert_eq!(opponent.health, -102);
}

#[test]
fn battle_report_serializes_to_json() {
    let report = run_battle(&default_movie(), default_opponent());
    let payload = serde_json::to_value(&report).expect("report should serialize");

    assert_eq!(payload["damage"], 71);
    assert_eq!(payload["movie_stats"]["attack"], 74);
    assert_eq!(payload["movie_stats"]["health"], 176);
    assert_eq!(payload["enemy_remaining_health"], -31);
}

proptest! {
    #[test]
    fn derived_stats_follow_formula(runtime in -10_000i32..10_000, rating in -20.0f64..20.0) {
        let stats = derive_stats(runtime, rating);
        prop_assert_eq!(stats.attack, runtime / 2);
        prop_assert_eq!(stats.defense, (rating * 10.0) as i32);
        prop_assert_eq!(stats.health, 2 * stats.defense);
    }

    #[test]
    fn derivation_is_idempotent(runtime in any::<i32>(), rating in any::<f64>()) {
        prop_assert_eq!(derive_stats(runtime, rating), derive_stats(runtime, rating));
    }

    #[test]
    fn damage_is_floored_difference(attack in -100_000i32..100_000, defender in -100_000i32..100_000) {
        let damage = resolve_damage(attack, defender);
        prop_assert_eq!(damage, (attack - defender / 2).max(1));
        prop_assert!(damage >= MIN_DAMAGE);
    }

    #[test]
    fn damage_never_below_floor(attack in any::<i32>(), defender in any::<i32>()) {
        prop_assert!(resolve_damage(attack, defender) >= MIN_DAMAGE);
    }

    #[test]
    fn opponent_loses_exactly_returned_damage(
        runtime in 0i32..400,
        rating in 0.0f64..10.0,
        health in -1_000i32..1_000,
        attack in 0i32..1_000,
    ) {
        let movie = Movie::new("Any", runtime, rating, vec![]);
        let mut opponent = Opponent::new("Target", health, attack);
        let damage = player_attack(&movie, &mut opponent);
        prop_assert_eq!(opponent.health, health - damage);
        prop_assert_eq!(opponent.attack, attack);
        prop_assert_eq!(opponent.name.as_str(), "Target");
    }
}
