//! Tests for the rock-paper-scissors objective game.

use parlor_rps::{Objective, Outcome, ROUNDS_PER_GAME, RpsError, RpsGame, Throw};
use rand::SeedableRng;
use rand::rngs::StdRng;
use strum::IntoEnumIterator;

fn seeded_game(seed: u64) -> RpsGame<StdRng> {
    RpsGame::new(StdRng::seed_from_u64(seed))
}

/// The throw that succeeds at the game's current round.
fn successful_throw(game: &RpsGame<StdRng>) -> Throw {
    match game.objective() {
        Objective::Win => game.cpu_throw().winning_reply(),
        Objective::Lose => game.cpu_throw().losing_reply(),
    }
}

#[test]
fn test_beat_relation_is_a_proper_cycle() {
    for cpu in Throw::iter() {
        let winning = cpu.winning_reply();
        let losing = cpu.losing_reply();

        assert_ne!(winning, losing);
        assert_ne!(winning, cpu);
        assert_ne!(losing, cpu);
        // The relation is symmetric: what beats me is beaten by me from
        // the other side.
        assert_eq!(winning.losing_reply(), cpu);
        assert_eq!(losing.winning_reply(), cpu);
    }
}

#[test]
fn test_matching_throw_always_ties() {
    for seed in 0..20 {
        let mut game = seeded_game(seed);
        let report = game.choose(game.cpu_throw());
        assert_eq!(*report.outcome(), Outcome::Tie);
        assert!(!*report.success());
    }
}

#[test]
fn test_tie_satisfies_neither_objective() {
    assert!(!Outcome::Tie.satisfies(Objective::Win));
    assert!(!Outcome::Tie.satisfies(Objective::Lose));
    assert!(Outcome::Win.satisfies(Objective::Win));
    assert!(Outcome::Lose.satisfies(Objective::Lose));
    assert!(!Outcome::Win.satisfies(Objective::Lose));
    assert!(!Outcome::Lose.satisfies(Objective::Win));
}

#[test]
fn test_success_requires_meeting_the_objective() {
    let mut game = seeded_game(8);

    let hit = successful_throw(&game);
    let report = game.choose(hit);
    assert!(*report.success());
    assert_eq!(game.correct(), 1);

    // Achieving the opposite of the objective is still a failure.
    let miss = match game.objective() {
        Objective::Win => game.cpu_throw().losing_reply(),
        Objective::Lose => game.cpu_throw().winning_reply(),
    };
    let report = game.choose(miss);
    assert!(!*report.success());
    assert_eq!(game.correct(), 1);
    assert_eq!(game.rounds(), 2);
}

#[test]
fn test_every_choice_counts_one_round() {
    let mut game = seeded_game(21);
    for n in 1..=15u32 {
        game.choose(Throw::Rock);
        assert_eq!(game.rounds(), n);
        assert!(game.correct() <= game.rounds());
    }
}

#[test]
fn test_round_always_redraws_after_choice() {
    // With enough rounds, both objectives and every cpu throw appear.
    let mut game = seeded_game(500);
    let mut throws_seen = Vec::new();
    let mut objectives_seen = Vec::new();

    for _ in 0..200 {
        throws_seen.push(game.cpu_throw());
        objectives_seen.push(game.objective());
        game.choose(Throw::Paper);
    }

    for throw in Throw::iter() {
        assert!(throws_seen.contains(&throw));
    }
    assert!(objectives_seen.contains(&Objective::Win));
    assert!(objectives_seen.contains(&Objective::Lose));
}

#[test]
fn test_choose_index_maps_buttons_and_guards_range() {
    let mut game = seeded_game(4);
    let cpu = game.cpu_throw();

    // Button order matches Throw::ALL.
    let report = game.choose_index(0).expect("button 0 is rock");
    let expected = if Throw::Rock == cpu.winning_reply() {
        Outcome::Win
    } else if Throw::Rock == cpu.losing_reply() {
        Outcome::Lose
    } else {
        Outcome::Tie
    };
    assert_eq!(*report.outcome(), expected);

    assert_eq!(
        game.choose_index(3),
        Err(RpsError::ChoiceOutOfRange { choice: 3 })
    );
    // The rejected tap counts nothing.
    assert_eq!(game.rounds(), 1);
}

#[test]
fn test_accuracy_contract() {
    let mut game = seeded_game(64);
    assert_eq!(game.accuracy_percent(), 0.0);

    for round in 0..ROUNDS_PER_GAME {
        if round < 3 {
            game.choose(successful_throw(&game));
        } else {
            game.choose(game.cpu_throw());
        }
    }

    assert_eq!(game.correct(), 3);
    assert!(game.is_complete());
    assert_eq!(game.accuracy_percent(), 30.0);
    assert_eq!(game.accuracy_display(), "30.00%");
}

#[test]
fn test_reset_keeps_current_round() {
    let mut game = seeded_game(31);
    for _ in 0..5 {
        game.choose(successful_throw(&game));
    }
    let throw_before = game.cpu_throw();
    let objective_before = game.objective();

    game.reset();

    // Counters clear, but the showing round is deliberately kept.
    assert_eq!(game.rounds(), 0);
    assert_eq!(game.correct(), 0);
    assert_eq!(game.cpu_throw(), throw_before);
    assert_eq!(game.objective(), objective_before);
}

#[test]
fn test_completion_is_a_query_not_a_wall() {
    let mut game = seeded_game(12);
    for _ in 0..ROUNDS_PER_GAME {
        game.choose(Throw::Scissors);
    }
    assert!(game.is_complete());

    game.choose(Throw::Scissors);
    assert!(!game.is_complete());
}

#[test]
fn test_seeded_games_are_identical() {
    let mut a = seeded_game(99);
    let mut b = seeded_game(99);

    for _ in 0..30 {
        assert_eq!(a.cpu_throw(), b.cpu_throw());
        assert_eq!(a.objective(), b.objective());
        assert_eq!(a.choose(Throw::Rock), b.choose(Throw::Rock));
    }
    assert_eq!(a.correct(), b.correct());
}
