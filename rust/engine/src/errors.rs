use thiserror::Error;

/// A betting-action precondition that did not hold.
///
/// Wrapped by [`GameError::InvalidAction`]; carries enough detail for the
/// caller to tell the player exactly why the action was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ActionError {
    #[error("cannot check while facing a bet of {current_bet}")]
    CheckFacingBet { current_bet: u32 },
    #[error("nothing to call: your bet already matches {current_bet}")]
    NothingToCall { current_bet: u32 },
    #[error("bet of {amount} is below the minimum of {minimum}")]
    BetBelowMinimum { amount: u32, minimum: u32 },
}

/// Errors produced by the table engine.
///
/// Every variant is recoverable: a rejected call leaves the game state
/// untouched and the same player to act.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid action: {0}")]
    InvalidAction(#[from] ActionError),
    #[error("player {actual} acted out of turn (waiting on {expected:?})")]
    OutOfTurn {
        expected: Option<usize>,
        actual: usize,
    },
    #[error("deck exhausted: requested {requested} cards with {remaining} remaining")]
    DeckExhausted { requested: usize, remaining: usize },
    #[error("{operation} not allowed: {detail}")]
    LifecycleViolation {
        operation: &'static str,
        detail: &'static str,
    },
    #[error("a table seats 2 to 10 players, got {0}")]
    TableSize(usize),
    #[error("no player with id {0} at this table")]
    UnknownPlayer(usize),
}
