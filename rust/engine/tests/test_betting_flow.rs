use holdem_engine::errors::{ActionError, GameError};
use holdem_engine::game::{Game, Phase, Street};

fn heads_up() -> Game {
    let mut game = Game::with_seed(vec!["alice", "bob"], 10_000, 9).unwrap();
    game.initialize_round().unwrap();
    game
}

#[test]
fn check_facing_a_bet_is_rejected_without_side_effects() {
    let mut game = heads_up();
    // Dealer posted 50 and faces the 100 big blind.
    let err = game.check(0).unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidAction(ActionError::CheckFacingBet { current_bet: 100 })
    );
    let view = game.snapshot();
    assert_eq!(view.current_actor, Some(0), "the same player is still up");
    assert_eq!(view.pot, 150);
    assert_eq!(view.players[0].bet, 50);
}

#[test]
fn acting_out_of_turn_is_rejected() {
    let mut game = heads_up();
    let err = game.call(1).unwrap_err();
    assert_eq!(
        err,
        GameError::OutOfTurn {
            expected: Some(0),
            actual: 1
        }
    );
}

#[test]
fn unknown_player_is_rejected() {
    let mut game = heads_up();
    assert_eq!(game.check(42).unwrap_err(), GameError::UnknownPlayer(42));
}

#[test]
fn calling_with_nothing_to_call_is_rejected() {
    let mut game = heads_up();
    game.call(0).unwrap();
    let err = game.call(1).unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidAction(ActionError::NothingToCall { current_bet: 100 })
    );
}

#[test]
fn bet_below_the_doubling_minimum_is_rejected() {
    let mut game = heads_up();
    let err = game.bet(0, 150).unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidAction(ActionError::BetBelowMinimum {
            amount: 150,
            minimum: 200
        })
    );
}

#[test]
fn big_blind_keeps_the_option_after_a_flat_call() {
    let mut game = heads_up();
    game.call(0).unwrap();
    // Everyone matches 100, but the blind poster has not acted yet.
    assert_eq!(game.pending_actors(), vec![1]);
    assert!(!game.betting_round_complete());
    let err = game.next_betting_round().unwrap_err();
    assert!(matches!(err, GameError::LifecycleViolation { .. }));
    game.check(1).unwrap();
    assert!(game.betting_round_complete());
}

#[test]
fn raise_reopens_the_action() {
    let mut game = heads_up();
    game.bet(0, 200).unwrap();
    assert_eq!(game.current_bet(), 200);
    assert_eq!(game.snapshot().current_actor, Some(1));
    game.call(1).unwrap();
    assert!(game.betting_round_complete());
    assert_eq!(game.pot(), 400);
}

#[test]
fn board_grows_three_one_one_across_streets() {
    let mut game = heads_up();
    game.call(0).unwrap();
    game.check(1).unwrap();
    game.next_betting_round().unwrap();
    assert_eq!(game.phase(), Phase::Betting(Street::Flop));
    assert_eq!(game.board().len(), 3);
    assert_eq!(game.current_bet(), 0);
    // Post-flop the seat after the button opens.
    assert_eq!(game.snapshot().current_actor, Some(1));

    game.check(1).unwrap();
    game.check(0).unwrap();
    game.next_betting_round().unwrap();
    assert_eq!(game.phase(), Phase::Betting(Street::Turn));
    assert_eq!(game.board().len(), 4);

    game.check(1).unwrap();
    game.check(0).unwrap();
    game.next_betting_round().unwrap();
    assert_eq!(game.phase(), Phase::Betting(Street::River));
    assert_eq!(game.board().len(), 5);

    game.check(1).unwrap();
    game.check(0).unwrap();
    game.next_betting_round().unwrap();
    assert_eq!(game.phase(), Phase::Settled);
    assert_eq!(game.board().len(), 5);
    assert_eq!(game.pot(), 0);

    let paid: u32 = game.last_settlement().iter().map(|p| p.amount).sum();
    assert_eq!(paid, 200, "the whole pot is paid out");
    let chips: u32 = game.players().iter().map(|p| p.chips()).sum();
    assert_eq!(chips, 20_000);
}

#[test]
fn finish_round_before_the_river_is_rejected() {
    let mut game = heads_up();
    let err = game.finish_round().unwrap_err();
    assert!(matches!(
        err,
        GameError::LifecycleViolation {
            operation: "finish_round",
            ..
        }
    ));
}

#[test]
fn finish_round_settles_a_closed_river() {
    let mut game = heads_up();
    game.call(0).unwrap();
    game.check(1).unwrap();
    for _ in 0..2 {
        game.next_betting_round().unwrap();
        game.check(1).unwrap();
        game.check(0).unwrap();
    }
    game.next_betting_round().unwrap();
    game.check(1).unwrap();
    game.check(0).unwrap();
    game.finish_round().unwrap();
    assert_eq!(game.phase(), Phase::Settled);
}

#[test]
fn actions_are_rejected_once_the_hand_is_settled() {
    let mut game = heads_up();
    game.fold(0).unwrap();
    assert_eq!(game.phase(), Phase::Settled);
    assert!(matches!(
        game.check(1).unwrap_err(),
        GameError::LifecycleViolation { .. }
    ));
}

#[test]
fn folded_players_are_never_the_actor() {
    let mut game = Game::with_seed(vec!["a", "b", "c"], 10_000, 13).unwrap();
    game.initialize_round().unwrap();
    game.fold(0).unwrap();
    assert_eq!(game.snapshot().current_actor, Some(1));
    let err = game.check(0).unwrap_err();
    assert_eq!(
        err,
        GameError::OutOfTurn {
            expected: Some(1),
            actual: 0
        }
    );
}

#[test]
fn overbetting_the_stack_truncates_to_all_in() {
    let mut game = heads_up();
    game.bet(0, 20_000).unwrap();
    // The table bet is the chips actually in play, not the request.
    assert_eq!(game.current_bet(), 10_000);
    let view = game.snapshot();
    assert_eq!(view.players[0].bet, 10_000);
    assert_eq!(view.players[0].chips, 0);
}

#[test]
fn all_in_players_are_skipped_when_seating_the_next_actor() {
    let mut game = heads_up();
    game.bet(0, 20_000).unwrap();
    game.call(1).unwrap();
    assert!(game.betting_round_complete());
    game.next_betting_round().unwrap();
    assert_eq!(game.phase(), Phase::Betting(Street::Flop));
    assert_eq!(
        game.snapshot().current_actor,
        None,
        "nobody left with chips to act"
    );
}
