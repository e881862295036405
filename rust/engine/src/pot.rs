//! Side-pot layering.
//!
//! At settlement the hand's cumulative contributions are cut into layers:
//! walking the distinct contribution levels from smallest to largest, each
//! layer holds the marginal amount above the previous level times the
//! number of players who funded at least this level. Folded players fund
//! layers but can never win them; a layer nobody left in the hand can win
//! is handed straight back to whoever funded it.

/// A player's stake in the hand, as the pot math sees it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Contribution {
    pub player: usize,
    pub amount: u32,
    pub folded: bool,
}

/// One pot with the players eligible to win it, in seat order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pot {
    pub amount: u32,
    pub eligible: Vec<usize>,
}

/// Chips returned without a showdown because no live player can win them.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Refund {
    pub player: usize,
    pub amount: u32,
}

/// The settlement breakdown of a hand's contributions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidePots {
    pub pots: Vec<Pot>,
    pub refunds: Vec<Refund>,
}

/// Cuts cumulative contributions into main and side pots.
///
/// Adjacent layers with the same eligible set collapse into one pot, so a
/// hand with no all-ins yields a single main pot.
pub fn side_pots(entries: &[Contribution]) -> SidePots {
    let mut levels: Vec<u32> = entries
        .iter()
        .map(|e| e.amount)
        .filter(|&a| a > 0)
        .collect();
    levels.sort_unstable();
    levels.dedup();

    let mut pots: Vec<Pot> = Vec::new();
    let mut refunds: Vec<Refund> = Vec::new();
    let mut prev = 0u32;
    for level in levels {
        let layer = level - prev;
        let contributors: Vec<&Contribution> =
            entries.iter().filter(|e| e.amount >= level).collect();
        let amount = layer * contributors.len() as u32;
        let eligible: Vec<usize> = contributors
            .iter()
            .filter(|e| !e.folded)
            .map(|e| e.player)
            .collect();
        if eligible.is_empty() {
            for e in &contributors {
                refunds.push(Refund {
                    player: e.player,
                    amount: layer,
                });
            }
        } else if let Some(last) = pots.last_mut().filter(|p| p.eligible == eligible) {
            last.amount += amount;
        } else {
            pots.push(Pot { amount, eligible });
        }
        prev = level;
    }
    SidePots { pots, refunds }
}

/// Splits `amount` as evenly as whole chips allow across `winners` shares.
/// The first share absorbs the remainder.
pub fn split_amounts(amount: u32, winners: usize) -> Vec<u32> {
    if winners == 0 {
        return Vec::new();
    }
    let share = amount / winners as u32;
    let remainder = amount % winners as u32;
    let mut shares = vec![share; winners];
    shares[0] += remainder;
    shares
}
