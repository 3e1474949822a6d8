use super::*;
use crate::{Action, Event, Seed};
use commonware_codec::{Encode, ReadExt};

#[test]
fn test_default_catalog_shape() {
    let catalog = default_catalog();
    assert_eq!(catalog.len(), 8);

    // Ids are unique and resolvable
    for animal in &catalog {
        assert_eq!(find_animal(&catalog, animal.id), Some(animal));
    }
    assert!(find_animal(&catalog, 99).is_none());
}

#[test]
fn test_bet_amount_chips() {
    assert_eq!(BetAmount::Ten.chips(), 10);
    assert_eq!(BetAmount::TwentyFive.chips(), 25);
    assert_eq!(BetAmount::Fifty.chips(), 50);
    assert_eq!(BetAmount::Hundred.chips(), 100);

    for amount in BetAmount::ALL {
        assert_eq!(BetAmount::from_chips(amount.chips()), Some(amount));
    }
    assert_eq!(BetAmount::from_chips(0), None);
    assert_eq!(BetAmount::from_chips(75), None);
}

#[test]
fn test_animal_roundtrip() {
    let catalog = default_catalog();
    for animal in &catalog {
        let encoded = animal.encode();
        let decoded = Animal::read(&mut &encoded[..]).unwrap();
        assert_eq!(animal, &decoded);
    }

    // No quirk
    let plain = Animal {
        id: 9,
        name: "Gallop Goat".to_string(),
        glyph: "🐐".to_string(),
        speed: 64,
        wins: 3,
        quirk: None,
    };
    let decoded = Animal::read(&mut &plain.encode()[..]).unwrap();
    assert_eq!(plain, decoded);
}

#[test]
fn test_phase_roundtrip() {
    for phase in [
        RacePhase::Idle,
        RacePhase::Racing {
            resolve_at_ms: 12_345,
        },
        RacePhase::Resolved {
            outcome: RaceOutcome {
                winner: 5,
                player_won: true,
            },
            reset_at_ms: 67_890,
        },
    ] {
        let encoded = phase.encode();
        let decoded = RacePhase::read(&mut &encoded[..]).unwrap();
        assert_eq!(phase, decoded);
    }
}

#[test]
fn test_action_event_roundtrip() {
    let action = Action::SetBet {
        amount: BetAmount::Fifty,
    };
    let decoded = Action::read(&mut &action.encode()[..]).unwrap();
    assert_eq!(action, decoded);

    let event = Event::RaceResolved {
        winner: 2,
        winner_name: "Thunder Horse".to_string(),
        player_won: true,
        payout: 25,
        balance: 1_015,
    };
    let decoded = Event::read(&mut &event.encode()[..]).unwrap();
    assert_eq!(event, decoded);
}

#[test]
fn test_seed_roundtrip() {
    let seed = Seed([7u8; 32]);
    let decoded = Seed::read(&mut &seed.encode()[..]).unwrap();
    assert_eq!(seed, decoded);
}

#[test]
fn test_leaderboard_ranking() {
    let leaderboard = Leaderboard::rank(&default_catalog());
    assert_eq!(leaderboard.entries.len(), 8);

    // Sorted by wins descending
    for window in leaderboard.entries.windows(2) {
        assert!(window[0].wins >= window[1].wins);
    }

    // Ranks are 1..=N
    for (i, entry) in leaderboard.entries.iter().enumerate() {
        assert_eq!(entry.rank, (i + 1) as u32);
    }

    // Thunder Horse (31 wins) leads the built-in catalog
    assert_eq!(leaderboard.entries[0].name, "Thunder Horse");
}

#[test]
fn test_leaderboard_tie_break_keeps_catalog_order() {
    let mut catalog = default_catalog();
    for animal in &mut catalog {
        animal.wins = 10;
    }

    let leaderboard = Leaderboard::rank(&catalog);
    let ids: Vec<AnimalId> = leaderboard.entries.iter().map(|e| e.id).collect();
    let expected: Vec<AnimalId> = catalog.iter().map(|a| a.id).collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_session_stats_seeded() {
    let stats = SessionStats::seeded();
    assert_eq!(stats.races_completed, SEED_RACES_COMPLETED);
    assert_eq!(stats.total_payouts, SEED_TOTAL_PAYOUTS);
    assert_eq!(stats.last_winner, SEED_LAST_WINNER);

    let decoded = SessionStats::read(&mut &stats.encode()[..]).unwrap();
    assert_eq!(stats, decoded);
}
