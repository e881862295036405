use std::collections::HashMap;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::{ActionError, GameError};
use crate::hand::{evaluate_hand, Category, HandStrength};
use crate::player::Player;
use crate::pot::{self, Contribution};
use crate::rules::{self, Blinds};

/// Represents a betting street in Texas Hold'em poker.
/// Defines the four stages of a poker hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Street {
    /// Before flop (hole cards dealt)
    Preflop,
    /// After flop (3 community cards)
    Flop,
    /// After turn (4th community card)
    Turn,
    /// After river (5th community card)
    River,
}

/// Where a hand is in its lifecycle. The showdown itself runs synchronously
/// inside settlement, so there is no observable waiting state for it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// No hand dealt yet.
    PreDeal,
    /// A betting round is open on the given street.
    Betting(Street),
    /// The last hand has been settled; the payouts are readable until the
    /// next hand starts.
    Settled,
}

/// One settlement credit: a player won `amount` chips, with the winning
/// hand category when the pot went to showdown (`None` for an uncontested
/// win).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    pub player: usize,
    pub name: String,
    pub amount: u32,
    pub category: Option<Category>,
}

/// Read-only view of one seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    pub id: usize,
    pub name: String,
    pub chips: u32,
    pub bet: u32,
    pub folded: bool,
    pub dealer: bool,
}

/// Read-only snapshot of the table, taken after every mutation by the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    pub phase: Phase,
    pub board: Vec<Card>,
    pub pot: u32,
    pub current_bet: u32,
    pub current_actor: Option<usize>,
    pub players: Vec<SeatView>,
}

/// A single table playing successive hands until one player holds all the
/// chips.
///
/// The engine is synchronous and turn-based: exactly one player may act at
/// a time, the driving loop applies one action, reads a snapshot, and
/// repeats. Rejected actions mutate nothing and leave the same player to
/// act.
///
/// # Examples
///
/// ```
/// use holdem_engine::game::Game;
///
/// let mut game = Game::with_seed(vec!["alice", "bob"], 10_000, 7).unwrap();
/// game.initialize_round().unwrap();
///
/// // Heads-up: the dealer posted the small blind and opens the betting.
/// let dealer = game.snapshot().current_actor.unwrap();
/// game.call(dealer).unwrap();
/// ```
#[derive(Debug)]
pub struct Game {
    players: Vec<Player>,
    deck: Deck,
    board: Vec<Card>,
    blinds: Blinds,
    pot: u32,
    current_bet: u32,
    actor: Option<usize>,
    phase: Phase,
    settlement: Vec<Payout>,
}

impl Game {
    /// Seats `names` in order with `starting_chips` each. Seating order is
    /// turn order for the life of the table.
    pub fn new<S: Into<String>>(names: Vec<S>, starting_chips: u32) -> Result<Self, GameError> {
        Self::build(names, starting_chips, Deck::new())
    }

    /// Like [`Game::new`] with a pinned deck seed, for reproducible hands.
    pub fn with_seed<S: Into<String>>(
        names: Vec<S>,
        starting_chips: u32,
        seed: u64,
    ) -> Result<Self, GameError> {
        Self::build(names, starting_chips, Deck::new_with_seed(seed))
    }

    fn build<S: Into<String>>(
        names: Vec<S>,
        starting_chips: u32,
        deck: Deck,
    ) -> Result<Self, GameError> {
        if !(2..=10).contains(&names.len()) {
            return Err(GameError::TableSize(names.len()));
        }
        let players = names
            .into_iter()
            .enumerate()
            .map(|(id, name)| Player::new(id, name.into(), starting_chips))
            .collect();
        Ok(Self {
            players,
            deck,
            board: Vec::with_capacity(5),
            blinds: rules::blinds_for_stack(starting_chips),
            pot: 0,
            current_bet: 0,
            actor: None,
            phase: Phase::PreDeal,
            settlement: Vec::new(),
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn players_remaining(&self) -> usize {
        self.players.len()
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn blinds(&self) -> Blinds {
        self.blinds
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Id of the player to act, if anyone still can this round.
    pub fn current_actor(&self) -> Option<usize> {
        self.actor.map(|i| self.players[i].id())
    }

    /// The player's hole cards, for the renderer to show their owner only.
    pub fn hole_of(&self, player: usize) -> Option<[Card; 2]> {
        self.players
            .iter()
            .find(|p| p.id() == player)
            .and_then(|p| p.hole())
    }

    /// The last hand's payouts, cleared by the next
    /// [`initialize_round`](Game::initialize_round).
    pub fn last_settlement(&self) -> &[Payout] {
        &self.settlement
    }

    pub fn snapshot(&self) -> TableView {
        TableView {
            phase: self.phase,
            board: self.board.clone(),
            pot: self.pot,
            current_bet: self.current_bet,
            current_actor: self.current_actor(),
            players: self
                .players
                .iter()
                .map(|p| SeatView {
                    id: p.id(),
                    name: p.name().to_string(),
                    chips: p.chips(),
                    bet: p.bet(),
                    folded: p.folded(),
                    dealer: p.dealer(),
                })
                .collect(),
        }
    }

    /// Starts a new hand: fresh shuffled deck, two hole cards each, button
    /// rotated, blinds posted.
    ///
    /// Heads-up the dealer posts the small blind and acts first pre-flop;
    /// with three or more players the blinds sit left of the button and the
    /// seat after the big blind opens. Blind posters keep their option:
    /// they still owe an action even when nobody raises.
    pub fn initialize_round(&mut self) -> Result<(), GameError> {
        if matches!(self.phase, Phase::Betting(_)) {
            return Err(GameError::LifecycleViolation {
                operation: "initialize_round",
                detail: "a hand is already in progress",
            });
        }
        if self.players.len() < 2 {
            return Err(GameError::TableSize(self.players.len()));
        }
        self.settlement.clear();
        self.deck.refill();
        self.board.clear();
        self.pot = 0;
        self.current_bet = 0;
        for p in &mut self.players {
            p.reset_for_hand();
        }
        for i in 0..self.players.len() {
            let cards = self.deck.draw(2)?;
            self.players[i].give_hole([cards[0], cards[1]]);
        }

        let dealer = self.rotate_dealer();
        let n = self.players.len();
        let (sb, bb) = if n == 2 {
            (dealer, (dealer + 1) % n)
        } else {
            ((dealer + 1) % n, (dealer + 2) % n)
        };
        let blinds = self.blinds;
        self.post_blind(sb, blinds.small);
        self.post_blind(bb, blinds.big);
        self.players[sb].set_acted(false);
        self.players[bb].set_acted(false);

        let first = if n == 2 { dealer } else { (bb + 1) % n };
        self.actor = self.first_actor_from(first);
        self.phase = Phase::Betting(Street::Preflop);
        debug!(
            "hand started: dealer seat {}, blinds {}/{} posted by seats {}/{}",
            dealer, blinds.small, blinds.big, sb, bb
        );
        Ok(())
    }

    /// Passes with no chips. Only legal when the player already matches the
    /// current bet.
    pub fn check(&mut self, player: usize) -> Result<(), GameError> {
        let idx = self.acting_index("check", player)?;
        if self.players[idx].bet() != self.current_bet {
            return Err(ActionError::CheckFacingBet {
                current_bet: self.current_bet,
            }
            .into());
        }
        self.players[idx].set_acted(true);
        self.advance_actor(idx);
        Ok(())
    }

    /// Matches the current bet, going all-in for less when the stack is
    /// short.
    pub fn call(&mut self, player: usize) -> Result<(), GameError> {
        let idx = self.acting_index("call", player)?;
        if self.players[idx].bet() >= self.current_bet {
            return Err(ActionError::NothingToCall {
                current_bet: self.current_bet,
            }
            .into());
        }
        let delta = self.players[idx].commit(self.current_bet);
        self.pot += delta;
        self.players[idx].set_acted(true);
        self.advance_actor(idx);
        Ok(())
    }

    /// Bets or raises to `amount` total for this round. A raise must at
    /// least double the current bet; a stack too short for `amount` goes
    /// all-in instead, and a short all-in never lowers the current bet.
    pub fn bet(&mut self, player: usize, amount: u32) -> Result<(), GameError> {
        let idx = self.acting_index("bet", player)?;
        let minimum = rules::min_bet(self.current_bet);
        if amount < minimum {
            return Err(ActionError::BetBelowMinimum { amount, minimum }.into());
        }
        let delta = self.players[idx].commit(amount);
        self.pot += delta;
        if self.players[idx].bet() > self.current_bet {
            self.current_bet = self.players[idx].bet();
        }
        self.players[idx].set_acted(true);
        self.advance_actor(idx);
        Ok(())
    }

    /// Forfeits the hand. The player's contributions stay in the pots they
    /// funded. When only one player is left the hand settles immediately,
    /// no showdown.
    pub fn fold(&mut self, player: usize) -> Result<(), GameError> {
        let idx = self.acting_index("fold", player)?;
        self.players[idx].set_folded();
        self.players[idx].set_acted(true);
        if self.contenders().len() == 1 {
            self.actor = None;
            return self.settle();
        }
        self.advance_actor(idx);
        Ok(())
    }

    /// Players who still owe an action this round, recomputed from live
    /// state on every call. Empty exactly when the betting round is closed.
    pub fn pending_actors(&self) -> Vec<usize> {
        if !matches!(self.phase, Phase::Betting(_)) {
            return Vec::new();
        }
        self.players
            .iter()
            .filter(|p| {
                !p.folded() && p.chips() > 0 && (!p.acted() || p.bet() != self.current_bet)
            })
            .map(|p| p.id())
            .collect()
    }

    /// True when every live player has acted and either matches the current
    /// bet or is all-in.
    pub fn betting_round_complete(&self) -> bool {
        self.pending_actors().is_empty()
    }

    /// Closes the current betting round: reveals the flop, then the turn,
    /// then the river; the call after the river settles the hand instead.
    /// Fails if any player still owes an action.
    pub fn next_betting_round(&mut self) -> Result<(), GameError> {
        let street = match self.phase {
            Phase::Betting(s) => s,
            _ => {
                return Err(GameError::LifecycleViolation {
                    operation: "next_betting_round",
                    detail: "no hand in progress",
                })
            }
        };
        if !self.betting_round_complete() {
            return Err(GameError::LifecycleViolation {
                operation: "next_betting_round",
                detail: "the betting round is still open",
            });
        }
        let next = match street {
            Street::Preflop => {
                let flop = self.deck.draw(3)?;
                self.board.extend(flop);
                Street::Flop
            }
            Street::Flop => {
                let turn = self.deck.draw(1)?;
                self.board.extend(turn);
                Street::Turn
            }
            Street::Turn => {
                let river = self.deck.draw(1)?;
                self.board.extend(river);
                Street::River
            }
            Street::River => return self.settle(),
        };
        for p in &mut self.players {
            p.reset_for_street();
        }
        self.current_bet = 0;
        let start = (self.dealer_index() + 1) % self.players.len();
        self.actor = self.first_actor_from(start);
        self.phase = Phase::Betting(next);
        debug!("street {:?}: board {:?}", next, self.board);
        Ok(())
    }

    /// Runs the showdown and settlement. Callable once the river betting
    /// round is closed; folding down to one player settles on its own.
    pub fn finish_round(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Betting(Street::River) {
            return Err(GameError::LifecycleViolation {
                operation: "finish_round",
                detail: "the hand has not reached the river",
            });
        }
        if !self.betting_round_complete() {
            return Err(GameError::LifecycleViolation {
                operation: "finish_round",
                detail: "the betting round is still open",
            });
        }
        self.settle()
    }

    fn settle(&mut self) -> Result<(), GameError> {
        let contenders = self.contenders();
        let mut scores: HashMap<usize, HandStrength> = HashMap::new();
        if contenders.len() >= 2 {
            for &i in &contenders {
                let Some(hole) = self.players[i].hole() else {
                    continue;
                };
                let mut cards = self.board.clone();
                cards.extend(hole);
                if let Some(hs) = evaluate_hand(&cards) {
                    scores.insert(self.players[i].id(), hs);
                }
            }
        }

        let entries: Vec<Contribution> = self
            .players
            .iter()
            .map(|p| Contribution {
                player: p.id(),
                amount: p.total_bet(),
                folded: p.folded(),
            })
            .collect();
        let built = pot::side_pots(&entries);

        for refund in &built.refunds {
            let idx = self.index_of(refund.player)?;
            self.players[idx].award(refund.amount);
        }

        let seat_order = self.seat_order_after_dealer();
        let mut payouts: Vec<Payout> = Vec::new();
        for p in &built.pots {
            let mut winners: Vec<usize> = if scores.is_empty() {
                p.eligible.clone()
            } else {
                match p.eligible.iter().filter_map(|id| scores.get(id)).max() {
                    Some(best) => p
                        .eligible
                        .iter()
                        .copied()
                        .filter(|id| scores.get(id) == Some(best))
                        .collect(),
                    None => p.eligible.clone(),
                }
            };
            winners.sort_by_key(|id| seat_order.get(id).copied().unwrap_or(usize::MAX));
            let shares = pot::split_amounts(p.amount, winners.len());
            for (&winner, share) in winners.iter().zip(shares) {
                let idx = self.index_of(winner)?;
                self.players[idx].award(share);
                payouts.push(Payout {
                    player: winner,
                    name: self.players[idx].name().to_string(),
                    amount: share,
                    category: scores.get(&winner).map(|s| s.category),
                });
            }
        }
        self.pot = 0;

        for payout in &payouts {
            info!(
                "{} wins {} chips{}",
                payout.name,
                payout.amount,
                payout
                    .category
                    .map(|c| format!(" ({})", c))
                    .unwrap_or_default()
            );
        }

        // A busted dealer hands the button back one live seat, so the next
        // rotation lands on the seat that was due it.
        if let Some(d) = self.players.iter().position(|p| p.dealer()) {
            if self.players[d].chips() == 0 {
                self.players[d].set_dealer(false);
                let n = self.players.len();
                for off in 1..n {
                    let i = (d + n - off) % n;
                    if self.players[i].chips() > 0 {
                        self.players[i].set_dealer(true);
                        break;
                    }
                }
            }
        }
        self.players.retain(|p| p.chips() > 0);
        self.actor = None;
        self.settlement = payouts;
        self.phase = Phase::Settled;
        Ok(())
    }

    fn contenders(&self) -> Vec<usize> {
        (0..self.players.len())
            .filter(|&i| !self.players[i].folded())
            .collect()
    }

    fn index_of(&self, player: usize) -> Result<usize, GameError> {
        self.players
            .iter()
            .position(|p| p.id() == player)
            .ok_or(GameError::UnknownPlayer(player))
    }

    fn dealer_index(&self) -> usize {
        self.players.iter().position(|p| p.dealer()).unwrap_or(0)
    }

    fn rotate_dealer(&mut self) -> usize {
        let n = self.players.len();
        let next = match self.players.iter().position(|p| p.dealer()) {
            Some(cur) => {
                self.players[cur].set_dealer(false);
                (cur + 1) % n
            }
            None => 0,
        };
        self.players[next].set_dealer(true);
        next
    }

    fn post_blind(&mut self, idx: usize, amount: u32) {
        let delta = self.players[idx].commit(amount);
        self.pot += delta;
        if self.players[idx].bet() > self.current_bet {
            self.current_bet = self.players[idx].bet();
        }
    }

    // First seat from `start` (inclusive, wrapping) that can still act.
    // All-in seats are marked acted as the search passes them: they have no
    // decision left this hand.
    fn first_actor_from(&mut self, start: usize) -> Option<usize> {
        let n = self.players.len();
        for off in 0..n {
            let i = (start + off) % n;
            if self.players[i].folded() {
                continue;
            }
            if self.players[i].chips() == 0 {
                self.players[i].set_acted(true);
                continue;
            }
            return Some(i);
        }
        None
    }

    fn advance_actor(&mut self, from: usize) {
        let n = self.players.len();
        self.actor = self.first_actor_from((from + 1) % n);
    }

    fn acting_index(&self, operation: &'static str, player: usize) -> Result<usize, GameError> {
        if !matches!(self.phase, Phase::Betting(_)) {
            return Err(GameError::LifecycleViolation {
                operation,
                detail: "no betting round in progress",
            });
        }
        let idx = self.index_of(player)?;
        if self.actor != Some(idx) {
            return Err(GameError::OutOfTurn {
                expected: self.current_actor(),
                actual: player,
            });
        }
        Ok(idx)
    }

    fn seat_order_after_dealer(&self) -> HashMap<usize, usize> {
        let n = self.players.len();
        let dealer = self.dealer_index();
        let mut order = HashMap::new();
        for off in 0..n {
            let i = (dealer + 1 + off) % n;
            order.insert(self.players[i].id(), off);
        }
        order
    }
}
