//! Table-stakes rules: blind sizing and minimum bets.

/// The forced bets for a table, fixed at construction.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Blinds {
    pub small: u32,
    pub big: u32,
}

/// Derives the blind schedule from the starting stack.
///
/// Small blind is 1/200 of the starting stack rounded to the nearest ten,
/// big blind twice that. A 10_000-chip table plays 50/100.
pub fn blinds_for_stack(starting_chips: u32) -> Blinds {
    let small = (starting_chips + 1_000) / 2_000 * 10;
    Blinds {
        small,
        big: small * 2,
    }
}

/// Minimum legal amount for a bet or raise.
///
/// A raise must at least double the current bet; the opening bet of a
/// round only has to put chips in play.
pub fn min_bet(current_bet: u32) -> u32 {
    if current_bet == 0 {
        1
    } else {
        current_bet * 2
    }
}
