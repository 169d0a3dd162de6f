//! Property tests for the engine's reversal and conservation laws.

use proptest::prelude::*;

use croupier::roulette::{BetCategory, BetLedger, EUROPEAN_SEQUENCE, resolve};
use croupier::{DealerStyle, RANKS, Rank, SeatStatus, Shoe, Table, TableOptions};

fn prop_table(style: DealerStyle) -> Table {
    let mut table = Table::new(
        TableOptions::default()
            .with_decks(6)
            .with_dealer_style(style),
    );
    table.set_seat_status(1, SeatStatus::Occupied);
    table.set_seat_status(2, SeatStatus::Mine);
    table.set_seat_status(4, SeatStatus::Occupied);
    table.start_new_round();
    table
}

proptest! {
    /// Any sequence of deals followed by as many undos leaves the table
    /// exactly where it started, whatever phases were crossed.
    #[test]
    fn deals_then_undos_restore_the_table(
        rank_indices in prop::collection::vec(0usize..13, 1..48),
        american in any::<bool>(),
    ) {
        let style = if american {
            DealerStyle::American
        } else {
            DealerStyle::European
        };
        let mut table = prop_table(style);
        let baseline = table.clone();

        let mut dealt = 0usize;
        for index in rank_indices {
            // A depleted rank is rejected without side effects; only
            // accepted cards need undoing.
            if table.deal_card(RANKS[index]).is_ok() {
                dealt += 1;
            }
        }

        for _ in 0..dealt {
            table.undo_last_card().unwrap();
        }

        prop_assert_eq!(&table, &baseline);
    }

    /// Per-rank dealt counts always sum to the total cards dealt, and
    /// undo keeps the running count reconciled with the Hi-Lo tags of
    /// the cards still out.
    #[test]
    fn shoe_conservation_holds_under_deal_and_undo(
        rank_indices in prop::collection::vec(0usize..13, 0..200),
        undos in 0usize..100,
    ) {
        let mut shoe = Shoe::new(2);
        let mut out: Vec<Rank> = Vec::new();

        for index in rank_indices {
            let rank = RANKS[index];
            if shoe.deal(rank).is_ok() {
                out.push(rank);
            }
        }
        for _ in 0..undos.min(out.len()) {
            let rank = out.pop().unwrap();
            shoe.undo(rank).unwrap();
        }

        let bucket_sum: u32 = RANKS
            .iter()
            .filter(|rank| !rank.is_ten_group())
            .map(|&rank| shoe.dealt(rank))
            .sum::<u32>()
            + shoe.dealt(Rank::Ten);
        prop_assert_eq!(bucket_sum, shoe.cards_dealt());
        prop_assert_eq!(shoe.cards_dealt() as usize, out.len());

        let expected_running: i32 = out.iter().map(|rank| rank.hi_lo()).sum();
        prop_assert_eq!(shoe.running_count(), expected_running);
    }

    /// Placing stakes and then removing the identical stakes leaves an
    /// empty ledger, with the total correct in between.
    #[test]
    fn ledger_place_remove_round_trips(
        bets in prop::collection::vec(
            (0usize..BetCategory::ALL.len(), 0usize..4, 1usize..500),
            1..40,
        ),
    ) {
        const KEYS: [&str; 4] = ["17", "20-23", "1-2-3", "2"];
        let mut ledger = BetLedger::new();

        let mut total = 0usize;
        for &(category_index, key_index, amount) in &bets {
            let category = BetCategory::ALL[category_index];
            prop_assert!(ledger.place(category, Some(KEYS[key_index]), amount));
            total += amount;
            prop_assert_eq!(ledger.total_wagered(), total);
        }

        for &(category_index, key_index, amount) in bets.iter().rev() {
            let category = BetCategory::ALL[category_index];
            prop_assert!(ledger.remove(category, Some(KEYS[key_index]), amount));
            total -= amount;
            prop_assert_eq!(ledger.total_wagered(), total);
        }

        prop_assert!(!ledger.has_bets());
        prop_assert!(ledger.bet_counts().is_empty());
    }

    /// On any pocket of the European wheel, equal red and black stakes
    /// return exactly one even-money payout — except on zero, which
    /// pays neither.
    #[test]
    fn red_and_black_are_complementary_off_zero(index in 0usize..37) {
        let pocket = EUROPEAN_SEQUENCE[index];
        let mut ledger = BetLedger::new();
        ledger.place(BetCategory::Red, None, 10);
        ledger.place(BetCategory::Black, None, 10);

        let resolution = resolve(pocket, &ledger).unwrap();
        if pocket.is_zero() {
            prop_assert_eq!(resolution.total_winnings, 0);
            prop_assert_eq!(resolution.net_result, -20);
        } else {
            prop_assert_eq!(resolution.total_winnings, 20);
            prop_assert_eq!(resolution.net_result, 0);
        }
    }
}
