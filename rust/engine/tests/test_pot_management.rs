use holdem_engine::pot::{side_pots, split_amounts, Contribution, Pot, Refund};

fn stake(player: usize, amount: u32, folded: bool) -> Contribution {
    Contribution {
        player,
        amount,
        folded,
    }
}

#[test]
fn equal_stacks_make_a_single_pot() {
    let built = side_pots(&[stake(0, 1_000, false), stake(1, 1_000, false)]);
    assert_eq!(
        built.pots,
        vec![Pot {
            amount: 2_000,
            eligible: vec![0, 1]
        }]
    );
    assert!(built.refunds.is_empty());
}

#[test]
fn heads_up_allin_makes_one_side_pot() {
    let built = side_pots(&[stake(0, 500, false), stake(1, 1_000, false)]);
    assert_eq!(
        built.pots,
        vec![
            Pot {
                amount: 1_000,
                eligible: vec![0, 1]
            },
            Pot {
                amount: 500,
                eligible: vec![1]
            },
        ]
    );
}

#[test]
fn three_allins_layer_into_three_pots() {
    // 100/300/500 all-in: 300 main, 400 and 200 on the side.
    let built = side_pots(&[
        stake(0, 100, false),
        stake(1, 300, false),
        stake(2, 500, false),
    ]);
    assert_eq!(
        built.pots,
        vec![
            Pot {
                amount: 300,
                eligible: vec![0, 1, 2]
            },
            Pot {
                amount: 400,
                eligible: vec![1, 2]
            },
            Pot {
                amount: 200,
                eligible: vec![2]
            },
        ]
    );
}

#[test]
fn folded_money_stays_in_the_pots_it_funded() {
    // Player 0 folded after 100; their chips play but they cannot win.
    let built = side_pots(&[
        stake(0, 100, true),
        stake(1, 300, false),
        stake(2, 300, false),
    ]);
    // Both layers have the same eligible pair, so they collapse into one.
    assert_eq!(
        built.pots,
        vec![Pot {
            amount: 700,
            eligible: vec![1, 2]
        }]
    );
    assert!(built.refunds.is_empty());
}

#[test]
fn layer_nobody_can_win_is_refunded() {
    // The top 200 of player 0's stake has no live opponent behind it.
    let built = side_pots(&[stake(0, 500, true), stake(1, 300, false)]);
    assert_eq!(
        built.pots,
        vec![Pot {
            amount: 600,
            eligible: vec![1]
        }]
    );
    assert_eq!(
        built.refunds,
        vec![Refund {
            player: 0,
            amount: 200
        }]
    );
}

#[test]
fn zero_contributions_are_ignored() {
    let built = side_pots(&[
        stake(0, 0, false),
        stake(1, 100, false),
        stake(2, 100, false),
    ]);
    assert_eq!(
        built.pots,
        vec![Pot {
            amount: 200,
            eligible: vec![1, 2]
        }]
    );
}

#[test]
fn splits_are_even_with_the_remainder_up_front() {
    assert_eq!(split_amounts(701, 2), vec![351, 350]);
    assert_eq!(split_amounts(100, 3), vec![34, 33, 33]);
    assert_eq!(split_amounts(5, 1), vec![5]);
    assert!(split_amounts(5, 0).is_empty());
}
