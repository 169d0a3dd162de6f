//! Table integration tests: hand evaluation, deal sequencing, actions,
//! undo, and shoe accounting.

#![allow(clippy::float_cmp)]

use croupier::{
    ActionError, DealError, DealTarget, DealerStyle, HandOutcome, PlayerAction, RANKS, Rank,
    RoundPhase, SeatStatus, Shoe, Table, TableOptions, UndoError, evaluate,
};

fn three_seat_table(style: DealerStyle) -> Table {
    let mut table = Table::new(
        TableOptions::default()
            .with_decks(6)
            .with_dealer_style(style),
    );
    table.set_seat_status(0, SeatStatus::Occupied);
    table.set_seat_status(2, SeatStatus::Occupied);
    table.set_seat_status(4, SeatStatus::Mine);
    table.start_new_round();
    table
}

/// Sum of bucket-level dealt counts: aces through nines plus the shared
/// ten-group bucket once.
fn dealt_sum(shoe: &Shoe) -> u32 {
    RANKS
        .iter()
        .filter(|rank| !rank.is_ten_group())
        .map(|&rank| shoe.dealt(rank))
        .sum::<u32>()
        + shoe.dealt(Rank::Ten)
}

#[test]
fn evaluator_handles_soft_aces() {
    let pair_of_aces = evaluate(&[Rank::Ace, Rank::Ace]);
    assert_eq!(pair_of_aces.total, 12);
    assert!(pair_of_aces.is_soft);
    assert!(pair_of_aces.is_pair);
    assert!(!pair_of_aces.is_blackjack);

    let forced_hard = evaluate(&[Rank::Ace, Rank::King, Rank::Five]);
    assert_eq!(forced_hard.total, 16);
    assert!(!forced_hard.is_soft);
    assert!(!forced_hard.is_bust);

    let bust = evaluate(&[Rank::King, Rank::Queen, Rank::Two]);
    assert_eq!(bust.total, 22);
    assert!(bust.is_bust);

    let natural = evaluate(&[Rank::Ace, Rank::King]);
    assert_eq!(natural.total, 21);
    assert!(natural.is_blackjack);
    assert!(natural.is_soft);
}

#[test]
fn evaluator_pairs_the_ten_group() {
    let king_queen = evaluate(&[Rank::King, Rank::Queen]);
    assert!(king_queen.is_pair);

    let ten_jack = evaluate(&[Rank::Ten, Rank::Jack]);
    assert!(ten_jack.is_pair);

    let nine_ten = evaluate(&[Rank::Nine, Rank::Ten]);
    assert!(!nine_ten.is_pair);
}

#[test]
fn evaluator_empty_hand_is_nothing() {
    let empty = evaluate(&[]);
    assert_eq!(empty.total, 0);
    assert!(!empty.is_bust);
    assert!(!empty.is_blackjack);
    assert!(!empty.is_soft);
    assert!(!empty.is_pair);
}

#[test]
fn american_deal_order_with_three_seats() {
    let mut table = three_seat_table(DealerStyle::American);

    let expected = [
        DealTarget::Seat(0),
        DealTarget::Seat(2),
        DealTarget::Seat(4),
        DealTarget::DealerHole,
        DealTarget::Seat(0),
        DealTarget::Seat(2),
        DealTarget::Seat(4),
        DealTarget::DealerUp,
    ];

    for (i, expected_target) in expected.iter().enumerate() {
        assert_eq!(table.phase(), RoundPhase::Dealing, "card {i}");
        assert_eq!(table.deal_target(), Some(*expected_target), "card {i}");
        let outcome = table.deal_card(Rank::Seven).unwrap();
        assert_eq!(outcome.target, *expected_target, "card {i}");
    }

    assert_eq!(table.cards_this_round(), 8);
    assert_eq!(table.phase(), RoundPhase::PlayerTurn);
    // Rightmost seat acts first.
    assert_eq!(table.current_seat(), Some(4));
    assert!(!table.dealer().is_hole_revealed());
    assert_eq!(table.dealer().hole(), Some(Rank::Seven));
    assert_eq!(table.dealer().visible_value().total, 7);
}

#[test]
fn european_deal_order_has_no_hole_card() {
    let mut table = three_seat_table(DealerStyle::European);

    let expected = [
        DealTarget::Seat(0),
        DealTarget::Seat(2),
        DealTarget::Seat(4),
        DealTarget::DealerUp,
        DealTarget::Seat(0),
        DealTarget::Seat(2),
        DealTarget::Seat(4),
    ];

    for expected_target in expected {
        let outcome = table.deal_card(Rank::Nine).unwrap();
        assert_eq!(outcome.target, expected_target);
    }

    assert_eq!(table.cards_this_round(), 7);
    assert_eq!(table.phase(), RoundPhase::PlayerTurn);
    assert_eq!(table.dealer().hole(), None);
    assert_eq!(table.dealer().len(), 1);
}

#[test]
fn player_turn_runs_right_to_left_with_actions() {
    let mut table = three_seat_table(DealerStyle::American);
    table.set_bet(4, 25);

    for rank in [
        Rank::Ten,   // seat 0
        Rank::King,  // seat 2
        Rank::Five,  // seat 4
        Rank::Six,   // dealer hole
        Rank::Nine,  // seat 0 -> 19
        Rank::Queen, // seat 2 -> 20
        Rank::Six,   // seat 4 -> 11
        Rank::Ten,   // dealer up
    ] {
        table.deal_card(rank).unwrap();
    }

    assert_eq!(table.current_seat(), Some(4));

    // Acting out of turn is rejected.
    assert_eq!(
        table.player_action(0, PlayerAction::Hit),
        Err(ActionError::NotSeatsTurn)
    );
    assert_eq!(
        table.player_action(9, PlayerAction::Hit),
        Err(ActionError::NoSuchSeat)
    );
    assert_eq!(
        table.player_action(4, PlayerAction::Split),
        Err(ActionError::SplitUnsupported)
    );

    // Seat 5 (index 4) doubles on 11; the double card ends the hand.
    table.player_action(4, PlayerAction::Double).unwrap();
    assert_eq!(table.seat(4).unwrap().bet, 50);
    let outcome = table.deal_card(Rank::Ten).unwrap();
    assert_eq!(outcome.hand.total, 21);
    assert!(table.seat(4).unwrap().is_standing);
    assert_eq!(table.current_seat(), Some(2));

    // Seat 3 (index 2) hits into a bust and play moves on.
    table.player_action(2, PlayerAction::Hit).unwrap();
    table.deal_card(Rank::King).unwrap();
    assert!(table.seat(2).unwrap().is_busted);
    assert_eq!(table.current_seat(), Some(0));

    // Seat 1 (index 0) hits to 21 and auto-stands.
    table.player_action(0, PlayerAction::Hit).unwrap();
    table.deal_card(Rank::Two).unwrap();
    assert!(table.seat(0).unwrap().is_standing);

    // All seats done: dealer's turn, hole revealed.
    assert_eq!(table.phase(), RoundPhase::DealerTurn);
    assert!(table.dealer().is_hole_revealed());
    assert_eq!(table.dealer().value().total, 16);

    // Dealer draws to 21, then the explicit done signal resolves.
    table.deal_card(Rank::Five).unwrap();
    assert_eq!(table.dealer().value().total, 21);
    assert!(table.dealer_done());
    assert_eq!(table.phase(), RoundPhase::Resolution);

    // Terminal until a new round: no more cards.
    assert_eq!(table.deal_card(Rank::Two), Err(DealError::RoundOver));

    let summary = table.round_summary();
    assert_eq!(summary.len(), 3);
    let by_seat = |n: usize| summary.iter().find(|r| r.seat == n).unwrap();
    assert_eq!(by_seat(1).outcome, HandOutcome::Push); // 21 vs 21
    assert_eq!(by_seat(3).outcome, HandOutcome::Lose); // busted
    assert_eq!(by_seat(5).outcome, HandOutcome::Push); // doubled to 21
    assert_eq!(by_seat(5).bet, 50);
}

#[test]
fn double_requires_two_cards() {
    let mut table = three_seat_table(DealerStyle::American);
    for _ in 0..8 {
        table.deal_card(Rank::Two).unwrap();
    }
    assert_eq!(table.current_seat(), Some(4));
    table.player_action(4, PlayerAction::Hit).unwrap();
    table.deal_card(Rank::Three).unwrap();
    assert_eq!(
        table.player_action(4, PlayerAction::Double),
        Err(ActionError::CannotDouble)
    );
}

#[test]
fn actions_rejected_outside_player_turn() {
    let mut table = three_seat_table(DealerStyle::American);
    assert_eq!(
        table.player_action(4, PlayerAction::Stand),
        Err(ActionError::InvalidPhase)
    );
    assert!(!table.dealer_done());
}

#[test]
fn standing_seats_are_skipped_on_the_way_back() {
    let mut table = three_seat_table(DealerStyle::American);
    for _ in 0..8 {
        table.deal_card(Rank::Seven).unwrap();
    }

    table.player_action(4, PlayerAction::Stand).unwrap();
    assert_eq!(table.current_seat(), Some(2));
    table.player_action(2, PlayerAction::Stand).unwrap();
    assert_eq!(table.current_seat(), Some(0));
    table.player_action(0, PlayerAction::Stand).unwrap();
    assert_eq!(table.phase(), RoundPhase::DealerTurn);
}

#[test]
fn deal_and_undo_round_trip_restores_everything() {
    let mut table = three_seat_table(DealerStyle::American);

    // Play into the player turn so undo has to cross phase boundaries.
    let script = [
        Rank::Ten,
        Rank::King,
        Rank::Five,
        Rank::Six,
        Rank::Nine,
        Rank::Queen,
        Rank::Six,
        Rank::Ten,
        Rank::King, // seat 4 hit -> 21, auto-stand
    ];

    let baseline = table.clone();
    for rank in script {
        table.deal_card(rank).unwrap();
    }
    assert_ne!(table, baseline);

    for _ in 0..script.len() {
        table.undo_last_card().unwrap();
    }
    assert_eq!(table, baseline);
    assert_eq!(table.undo_last_card(), Err(UndoError::EmptyHistory));
}

#[test]
fn undo_crossing_into_dealer_turn_unreveals_the_hole() {
    let mut table = three_seat_table(DealerStyle::American);
    for _ in 0..8 {
        table.deal_card(Rank::Ten).unwrap();
    }
    table.player_action(4, PlayerAction::Stand).unwrap();
    table.player_action(2, PlayerAction::Stand).unwrap();

    // Seat 0 hits and busts; the bust card tips the round into the
    // dealer's turn and reveals the hole.
    table.player_action(0, PlayerAction::Hit).unwrap();
    table.deal_card(Rank::Five).unwrap();
    assert_eq!(table.phase(), RoundPhase::DealerTurn);
    assert!(table.dealer().is_hole_revealed());

    table.undo_last_card().unwrap();
    assert_eq!(table.phase(), RoundPhase::PlayerTurn);
    assert!(!table.dealer().is_hole_revealed());
    assert!(!table.seat(0).unwrap().is_busted);
    assert_eq!(table.current_seat(), Some(0));
}

#[test]
fn new_round_preserves_count_new_shoe_resets_it() {
    let mut table = three_seat_table(DealerStyle::American);
    table.deal_card(Rank::Five).unwrap();
    table.deal_card(Rank::Six).unwrap();
    assert_eq!(table.shoe().running_count(), 2);

    table.start_new_round();
    assert_eq!(table.phase(), RoundPhase::Dealing);
    assert_eq!(table.cards_this_round(), 0);
    assert_eq!(table.shoe().running_count(), 2);
    assert_eq!(table.shoe().cards_dealt(), 2);
    assert!(table.seat(0).unwrap().hand.is_empty());

    table.start_new_shoe();
    assert_eq!(table.shoe().running_count(), 0);
    assert_eq!(table.shoe().cards_dealt(), 0);
}

#[test]
fn depleted_rank_is_rejected_without_side_effects() {
    // Single-deck shoe: only four aces exist.
    let mut table = Table::new(
        TableOptions::default()
            .with_decks(1)
            .with_dealer_style(DealerStyle::American),
    );
    table.set_seat_status(0, SeatStatus::Mine);
    table.start_new_round();

    for _ in 0..4 {
        table.deal_card(Rank::Ace).unwrap();
    }
    let before = table.clone();
    assert_eq!(
        table.deal_card(Rank::Ace),
        Err(DealError::DepletedRank(Rank::Ace))
    );
    assert_eq!(table, before);
}

#[test]
fn full_shoe_exhausts_every_bucket_exactly() {
    let decks = 2u8;
    let mut shoe = Shoe::new(decks);

    for rank in RANKS.iter().filter(|rank| !rank.is_ten_group()) {
        for _ in 0..(u32::from(decks) * 4) {
            shoe.deal(*rank).unwrap();
        }
    }
    for _ in 0..(u32::from(decks) * 16) {
        shoe.deal(Rank::Ten).unwrap();
    }

    assert_eq!(shoe.cards_dealt(), shoe.total_cards());
    assert_eq!(dealt_sum(&shoe), shoe.cards_dealt());
    for rank in RANKS {
        assert_eq!(shoe.remaining(rank), 0);
        assert_eq!(shoe.deal(rank), Err(DealError::DepletedRank(rank)));
    }
    assert_eq!(shoe.penetration(), 1.0);
    // A full shoe is balanced: Hi-Lo tags cancel out.
    assert_eq!(shoe.running_count(), 0);
}

#[test]
fn ten_group_shares_one_depletion_bucket() {
    let mut shoe = Shoe::new(1);
    for rank in [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King] {
        for _ in 0..4 {
            shoe.deal(rank).unwrap();
        }
    }
    // 16 ten-group cards are gone regardless of which labels were used.
    assert_eq!(shoe.remaining(Rank::Ten), 0);
    assert_eq!(shoe.deal(Rank::Jack), Err(DealError::DepletedRank(Rank::Jack)));
}

#[test]
fn true_count_floors_decks_remaining_at_half_a_deck() {
    let mut shoe = Shoe::new(1);
    // Deal everything except the four aces: +20 from the low cards,
    // -16 from the ten group.
    for rank in RANKS
        .iter()
        .filter(|rank| !rank.is_ten_group() && **rank != Rank::Ace)
    {
        for _ in 0..4 {
            shoe.deal(*rank).unwrap();
        }
    }
    for _ in 0..16 {
        shoe.deal(Rank::King).unwrap();
    }

    assert_eq!(shoe.running_count(), 4);
    assert!(shoe.decks_remaining() < 0.5);
    // 4 / max(0.077, 0.5) = 8, not ~52.
    assert_eq!(shoe.true_count(), 8.0);
}

#[test]
fn dealt_sum_matches_cards_dealt() {
    let mut shoe = Shoe::new(6);
    let script = [
        Rank::Ace,
        Rank::Ten,
        Rank::Ten,
        Rank::Five,
        Rank::Jack,
        Rank::Two,
        Rank::Nine,
        Rank::King,
        Rank::Five,
    ];
    for rank in script {
        shoe.deal(rank).unwrap();
    }
    assert_eq!(dealt_sum(&shoe), 9);

    shoe.undo(Rank::Five).unwrap();
    shoe.undo(Rank::King).unwrap();
    assert_eq!(dealt_sum(&shoe), 7);
    assert_eq!(shoe.cards_dealt(), 7);
}

#[test]
fn empty_table_round_skips_straight_to_the_dealer() {
    let mut table = Table::new(TableOptions::default());
    table.start_new_round();
    // No seats are occupied: the only initial card is the dealer's.
    assert_eq!(table.deal_target(), Some(DealTarget::DealerHole));
    table.deal_card(Rank::Nine).unwrap();
    table.deal_card(Rank::Nine).unwrap();
    assert_eq!(table.phase(), RoundPhase::DealerTurn);
}
