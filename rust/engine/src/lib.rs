//! # holdem-engine: Multi-player Texas Hold'em Table Engine
//!
//! The rules engine of a multi-player Texas Hold'em table: card
//! representation and dealing, best-five-of-seven hand evaluation, and a
//! betting-round state machine that tracks chips, pots, side pots, and
//! round settlement. The engine performs no I/O; a presentation layer
//! drives it through the action API and reads a snapshot after every
//! mutation.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Shuffled deck with draw-without-replacement, ChaCha20 RNG
//! - [`hand`] - Poker hand evaluation and strength comparison
//! - [`player`] - Per-seat state: stack, bets, hole cards, table flags
//! - [`pot`] - Side-pot layering and split arithmetic
//! - [`rules`] - Blind schedule and minimum-bet rules
//! - [`game`] - The table orchestrator: betting rounds and settlement
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::cards::{Card, Rank, Suit};
//! use holdem_engine::hand::{evaluate_hand, Category};
//!
//! // Evaluate the best 5-card hand out of 7 cards
//! let cards = [
//!     Card { suit: Suit::Hearts, rank: Rank::Ace },
//!     Card { suit: Suit::Hearts, rank: Rank::King },
//!     Card { suit: Suit::Hearts, rank: Rank::Queen },
//!     Card { suit: Suit::Hearts, rank: Rank::Jack },
//!     Card { suit: Suit::Hearts, rank: Rank::Ten },
//!     Card { suit: Suit::Clubs, rank: Rank::Two },
//!     Card { suit: Suit::Diamonds, rank: Rank::Three },
//! ];
//!
//! let strength = evaluate_hand(&cards).unwrap();
//! assert_eq!(strength.category, Category::RoyalFlush);
//! ```
//!
//! ## Driving a table
//!
//! ```rust
//! use holdem_engine::game::Game;
//!
//! let mut game = Game::with_seed(vec!["alice", "bob", "carol"], 10_000, 42).unwrap();
//! game.initialize_round().unwrap();
//!
//! // Blinds are posted: 50 small, 100 big for a 10_000-chip table.
//! let view = game.snapshot();
//! assert_eq!(view.pot, 150);
//! assert_eq!(view.current_bet, 100);
//! ```
//!
//! ## Deterministic Dealing
//!
//! All shuffles are reproducible from a seed:
//!
//! ```rust
//! use holdem_engine::deck::Deck;
//!
//! let mut deck1 = Deck::new_with_seed(42);
//! let mut deck2 = Deck::new_with_seed(42);
//! deck1.refill();
//! deck2.refill();
//! assert_eq!(deck1.draw(5).unwrap(), deck2.draw(5).unwrap());
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod player;
pub mod pot;
pub mod rules;
