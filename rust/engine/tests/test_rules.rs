use holdem_engine::rules::{blinds_for_stack, min_bet, Blinds};

#[test]
fn ten_thousand_chip_table_plays_50_100() {
    assert_eq!(
        blinds_for_stack(10_000),
        Blinds {
            small: 50,
            big: 100
        }
    );
}

#[test]
fn blinds_round_to_the_nearest_ten() {
    // 1_000 / 200 = 5, rounds to 10
    assert_eq!(blinds_for_stack(1_000).small, 10);
    // 2_500 / 200 = 12.5, rounds down to 10
    assert_eq!(blinds_for_stack(2_500).small, 10);
    // 3_000 / 200 = 15, rounds up to 20
    assert_eq!(blinds_for_stack(3_000).small, 20);
    assert_eq!(blinds_for_stack(20_000), Blinds { small: 100, big: 200 });
}

#[test]
fn big_blind_is_twice_small() {
    for stack in [1_000, 5_000, 10_000, 50_000] {
        let b = blinds_for_stack(stack);
        assert_eq!(b.big, b.small * 2);
    }
}

#[test]
fn raise_must_double_the_current_bet() {
    assert_eq!(min_bet(100), 200);
    assert_eq!(min_bet(350), 700);
}

#[test]
fn opening_bet_only_needs_chips_in_play() {
    assert_eq!(min_bet(0), 1);
}
