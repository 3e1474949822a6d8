//! Integration tests for the race engine.
//!
//! These tests drive full betting sessions through the state machine and
//! reconcile every balance movement against the emitted events.

#[cfg(test)]
mod tests {
    use crate::mocks::{create_seed, test_config};
    use crate::{payout_for, Engine};
    use zoomtrack_types::{
        race::{BetAmount, RACE_DURATION_MS, RESET_DELAY_MS},
        Action, Event,
    };

    /// Play `races` full cycles, rotating the backed animal, and return
    /// the emitted resolution events.
    fn play_session(engine: &mut Engine, races: u64, amount: BetAmount) -> Vec<Event> {
        let mut resolutions = Vec::new();
        let mut now = 0;
        let catalog_len = engine.catalog().len() as u64;

        for race in 0..races {
            let animal = ((race % catalog_len) + 1) as u8;
            engine.apply(Action::SetBet { amount }, now);
            engine.apply(Action::Select { animal }, now);
            let started = engine.apply(Action::Launch, now);
            assert_eq!(started.len(), 1, "launch should start race {}", race);

            now += RACE_DURATION_MS;
            let resolved = engine.tick(now);
            assert_eq!(resolved.len(), 1, "race {} should resolve", race);
            resolutions.extend(resolved);

            now += RESET_DELAY_MS;
            let cleared = engine.tick(now);
            assert_eq!(cleared.len(), 1, "race {} should clear", race);
            assert!(engine.phase().is_idle());
            assert!(engine.outcome().is_none());
            assert_eq!(engine.bet().selected, None);
        }

        resolutions
    }

    #[test]
    fn test_session_reconciles_balances() {
        let mut engine = Engine::new(test_config(), create_seed(3));
        let starting = engine.bet().balance;
        let races = 20;
        let stake = BetAmount::TwentyFive.chips();

        let resolutions = play_session(&mut engine, races, BetAmount::TwentyFive);

        let mut wins = 0u64;
        for event in &resolutions {
            let Event::RaceResolved {
                player_won, payout, ..
            } = event
            else {
                panic!("expected resolution event");
            };
            if *player_won {
                wins += 1;
                assert_eq!(*payout, payout_for(stake));
            } else {
                assert_eq!(*payout, 0);
            }
        }

        let expected =
            starting - races * stake + wins * payout_for(stake);
        assert_eq!(engine.bet().balance, expected);
        assert_eq!(engine.stats().races_completed, races);
        assert_eq!(engine.stats().total_payouts, wins * payout_for(stake));
    }

    #[test]
    fn test_stats_accumulate_monotonically() {
        let mut engine = Engine::new(test_config(), create_seed(9));

        let mut previous = engine.stats().clone();
        let mut now = 0;
        for _ in 0..10 {
            engine.apply(Action::Select { animal: 4 }, now);
            engine.apply(Action::Launch, now);
            now += RACE_DURATION_MS + RESET_DELAY_MS;
            engine.tick(now);

            let stats = engine.stats();
            assert_eq!(stats.races_completed, previous.races_completed + 1);
            assert!(stats.total_payouts >= previous.total_payouts);
            previous = stats.clone();
        }
    }

    #[test]
    fn test_drained_balance_blocks_launch() {
        let config = crate::EngineConfig {
            starting_balance: 100,
            ..test_config()
        };
        let mut engine = Engine::new(config, create_seed(11));

        // Bet the whole balance; keep playing until a dry spell empties it.
        let mut now = 0;
        engine.apply(
            Action::SetBet {
                amount: BetAmount::Hundred,
            },
            now,
        );
        for _ in 0..50 {
            engine.apply(Action::Select { animal: 1 }, now);
            let started = engine.apply(Action::Launch, now);
            if started.is_empty() {
                // Unaffordable: balance must be below the stake and intact
                assert!(engine.bet().balance < 100);
                assert!(engine.phase().is_idle());
                return;
            }
            now += RACE_DURATION_MS + RESET_DELAY_MS;
            engine.tick(now);
        }
        panic!("balance never drained; seed too lucky for this test");
    }

    #[test]
    fn test_worked_example() {
        // 8 animals, balance 1000, select id 1, bet 10: launch debits to
        // 990; resolution yields a winner in 1..=8; a win pays to 1015.
        let mut engine = Engine::new(test_config(), create_seed(0));
        assert_eq!(engine.catalog().len(), 8);
        assert_eq!(engine.bet().balance, 1_000);

        engine.apply(Action::Select { animal: 1 }, 0);
        engine.apply(Action::Launch, 0);
        assert_eq!(engine.bet().balance, 990);

        engine.tick(RACE_DURATION_MS);
        let outcome = engine.outcome().expect("race should be resolved");
        assert!((1..=8).contains(&outcome.winner));
        if outcome.winner == 1 {
            assert_eq!(engine.bet().balance, 1_015);
        } else {
            assert_eq!(engine.bet().balance, 990);
        }
    }
}
