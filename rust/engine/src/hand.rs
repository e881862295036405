use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// The ten standard hand categories, weakest to strongest.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A fully ordered hand score: category first, then the category's
/// tie-break ranks high to low, zero-padded.
///
/// The derived ordering is lexicographic over (category, kickers), which is
/// exactly the comparison the showdown needs.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct HandStrength {
    pub category: Category,
    // kickers: ordered high -> low for tiebreaks
    pub kickers: [u8; 5],
}

/// Best 5-card score over a 5..=7 card set.
///
/// Enumerates every 5-card combination (21 for a 7-card set), scores each
/// with [`score_five`], and keeps the maximum. Returns `None` for fewer
/// than 5 cards.
pub fn evaluate_hand(cards: &[Card]) -> Option<HandStrength> {
    let n = cards.len();
    if n < 5 {
        return None;
    }
    let mut best: Option<HandStrength> = None;
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    for e in d + 1..n {
                        let hs =
                            score_five([cards[a], cards[b], cards[c], cards[d], cards[e]]);
                        if best.as_ref().is_none_or(|cur| hs > *cur) {
                            best = Some(hs);
                        }
                    }
                }
            }
        }
    }
    best
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    a.cmp(b)
}

/// Scores exactly five cards.
pub fn score_five(cards: [Card; 5]) -> HandStrength {
    let mut counts = [0u8; 15]; // 2..14 used
    let mut ranks = [0u8; 5];
    for (i, c) in cards.iter().enumerate() {
        let r = rank_val(c.rank);
        counts[r as usize] += 1;
        ranks[i] = r;
    }
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = straight_high(&ranks);

    if let Some(high) = straight_high {
        if flush {
            return if high == 14 {
                HandStrength {
                    category: Category::RoyalFlush,
                    kickers: [14, 0, 0, 0, 0],
                }
            } else {
                HandStrength {
                    category: Category::StraightFlush,
                    kickers: [high, 0, 0, 0, 0],
                }
            };
        }
    }

    if let Some((quad, kicker)) = detect_quads(&counts) {
        return HandStrength {
            category: Category::FourOfAKind,
            kickers: [quad, kicker, 0, 0, 0],
        };
    }

    if let Some((trip, pair)) = detect_full_house(&counts) {
        return HandStrength {
            category: Category::FullHouse,
            kickers: [trip, pair, 0, 0, 0],
        };
    }

    if flush {
        return HandStrength {
            category: Category::Flush,
            kickers: ranks,
        };
    }

    if let Some(high) = straight_high {
        return HandStrength {
            category: Category::Straight,
            kickers: [high, 0, 0, 0, 0],
        };
    }

    let (trips, pairs, singles) = classify_multiples(&counts);
    if let Some(&t) = trips.first() {
        let mut k = [t, 0, 0, 0, 0];
        for (i, &s) in singles.iter().take(2).enumerate() {
            k[i + 1] = s;
        }
        return HandStrength {
            category: Category::ThreeOfAKind,
            kickers: k,
        };
    }
    if pairs.len() >= 2 {
        let mut k = [pairs[0], pairs[1], 0, 0, 0];
        if let Some(&s) = singles.first() {
            k[2] = s;
        }
        return HandStrength {
            category: Category::TwoPair,
            kickers: k,
        };
    }
    if let Some(&p) = pairs.first() {
        let mut k = [p, 0, 0, 0, 0];
        for (i, &s) in singles.iter().take(3).enumerate() {
            k[i + 1] = s;
        }
        return HandStrength {
            category: Category::OnePair,
            kickers: k,
        };
    }

    HandStrength {
        category: Category::HighCard,
        kickers: ranks,
    }
}

fn rank_val(r: Rank) -> u8 {
    r as u8
}

// Five distinct ranks forming a contiguous run. The wheel (A-2-3-4-5) plays
// as a 5-high straight: the Ace drops low even though it is encoded as 14.
fn straight_high(ranks_desc: &[u8; 5]) -> Option<u8> {
    for i in 1..5 {
        if ranks_desc[i] == ranks_desc[i - 1] {
            return None;
        }
    }
    if ranks_desc[0] - ranks_desc[4] == 4 {
        return Some(ranks_desc[0]);
    }
    if *ranks_desc == [14, 5, 4, 3, 2] {
        return Some(5);
    }
    None
}

fn detect_quads(counts: &[u8; 15]) -> Option<(u8, u8)> {
    let mut quad = 0u8;
    let mut kicker = 0u8;
    for r in (2..=14u8).rev() {
        match counts[r as usize] {
            4 => quad = r,
            0 => {}
            _ => {
                if kicker == 0 {
                    kicker = r;
                }
            }
        }
    }
    if quad == 0 {
        None
    } else {
        Some((quad, kicker))
    }
}

fn detect_full_house(counts: &[u8; 15]) -> Option<(u8, u8)> {
    let mut trip = 0u8;
    let mut pair = 0u8;
    for r in (2..=14u8).rev() {
        match counts[r as usize] {
            3 if trip == 0 => trip = r,
            3 | 2 if pair == 0 => pair = r,
            _ => {}
        }
    }
    if trip != 0 && pair != 0 {
        Some((trip, pair))
    } else {
        None
    }
}

// (trip ranks, pair ranks, single ranks), each high -> low.
fn classify_multiples(counts: &[u8; 15]) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
    let mut trips = vec![];
    let mut pairs = vec![];
    let mut singles = vec![];
    for r in (2..=14u8).rev() {
        match counts[r as usize] {
            3 => trips.push(r),
            2 => pairs.push(r),
            1 => singles.push(r),
            _ => {}
        }
    }
    (trips, pairs, singles)
}
