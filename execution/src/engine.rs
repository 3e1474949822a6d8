//! The race engine state machine.
//!
//! Races move Idle -> Racing -> Resolved -> Idle. Both timed transitions
//! are deadline-based: the engine never reads a wall clock, callers pass
//! the current time into [`Engine::apply`] and [`Engine::tick`]. A driver
//! sleeps until [`Engine::next_deadline_ms`] and ticks; tests step time
//! explicitly.

use crate::rng::RaceRng;
use tracing::debug;
use zoomtrack_types::{
    race::{
        default_catalog, find_animal, Animal, AnimalId, BetAmount, BetState, Leaderboard,
        RaceOutcome, RacePhase, SessionStats, PAYOUT_DENOMINATOR, PAYOUT_NUMERATOR,
        RACE_DURATION_MS, RESET_DELAY_MS, STARTING_BALANCE,
    },
    Action, Event, Seed,
};

/// Payout for a winning stake (2.5x, rounded down to whole chips).
pub fn payout_for(stake: u64) -> u64 {
    stake.saturating_mul(PAYOUT_NUMERATOR) / PAYOUT_DENOMINATOR
}

/// Engine construction parameters.
///
/// Timing is configuration rather than hard-coded so drivers and tests can
/// pick their own delays.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub catalog: Vec<Animal>,
    pub starting_balance: u64,
    pub initial_stats: SessionStats,
    pub race_duration_ms: u64,
    pub reset_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            starting_balance: STARTING_BALANCE,
            initial_stats: SessionStats::seeded(),
            race_duration_ms: RACE_DURATION_MS,
            reset_delay_ms: RESET_DELAY_MS,
        }
    }
}

/// Read-only view of the engine consumed by a presentation layer.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub phase: RacePhase,
    pub bet: BetState,
    pub outcome: Option<RaceOutcome>,
    pub stats: SessionStats,
    pub catalog: Vec<Animal>,
    pub leaderboard: Leaderboard,
}

/// The race engine.
///
/// Sole writer of balance, phase, and session statistics. Invalid actions
/// (wrong phase, missing selection, unaffordable stake, unknown animal)
/// are silent no-ops that return no events.
pub struct Engine {
    catalog: Vec<Animal>,
    bet: BetState,
    stats: SessionStats,
    phase: RacePhase,
    seed: Seed,
    races_started: u64,
    race_duration_ms: u64,
    reset_delay_ms: u64,
}

impl Engine {
    pub fn new(config: EngineConfig, seed: Seed) -> Self {
        Self {
            catalog: config.catalog,
            bet: BetState::new(config.starting_balance),
            stats: config.initial_stats,
            phase: RacePhase::Idle,
            seed,
            races_started: 0,
            race_duration_ms: config.race_duration_ms,
            reset_delay_ms: config.reset_delay_ms,
        }
    }

    pub fn phase(&self) -> &RacePhase {
        &self.phase
    }

    pub fn bet(&self) -> &BetState {
        &self.bet
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn catalog(&self) -> &[Animal] {
        &self.catalog
    }

    /// The outcome of the most recent race, while the track shows it.
    pub fn outcome(&self) -> Option<&RaceOutcome> {
        self.phase.outcome()
    }

    /// Deadline of the pending timed transition, if one is scheduled.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        match self.phase {
            RacePhase::Idle => None,
            RacePhase::Racing { resolve_at_ms } => Some(resolve_at_ms),
            RacePhase::Resolved { reset_at_ms, .. } => Some(reset_at_ms),
        }
    }

    /// Apply a presentation-layer action at the given time.
    pub fn apply(&mut self, action: Action, now_ms: u64) -> Vec<Event> {
        match action {
            Action::Select { animal } => self.select(animal),
            Action::SetBet { amount } => self.set_bet(amount),
            Action::Launch => self.launch(now_ms),
        }
    }

    fn select(&mut self, animal: AnimalId) -> Vec<Event> {
        if !self.phase.is_idle() {
            debug!(animal, "ignoring selection while track is busy");
            return Vec::new();
        }
        if find_animal(&self.catalog, animal).is_none() {
            debug!(animal, "ignoring selection of unknown animal");
            return Vec::new();
        }
        self.bet.selected = Some(animal);
        vec![Event::AnimalSelected { animal }]
    }

    fn set_bet(&mut self, amount: BetAmount) -> Vec<Event> {
        if !self.phase.is_idle() {
            debug!(chips = amount.chips(), "ignoring bet change while track is busy");
            return Vec::new();
        }
        self.bet.amount = amount;
        vec![Event::BetChanged { amount }]
    }

    fn launch(&mut self, now_ms: u64) -> Vec<Event> {
        if !self.phase.is_idle() {
            debug!("ignoring launch while track is busy");
            return Vec::new();
        }
        let Some(animal) = self.bet.selected else {
            debug!("ignoring launch without a selection");
            return Vec::new();
        };
        let stake = self.bet.stake();
        if stake > self.bet.balance {
            debug!(
                stake,
                balance = self.bet.balance,
                "ignoring launch with unaffordable stake"
            );
            return Vec::new();
        }

        // Optimistic debit: the stake leaves the balance before the race runs
        self.bet.balance -= stake;
        self.races_started = self.races_started.saturating_add(1);
        self.phase = RacePhase::Racing {
            resolve_at_ms: now_ms.saturating_add(self.race_duration_ms),
        };

        vec![Event::RaceStarted {
            animal,
            stake,
            balance: self.bet.balance,
        }]
    }

    /// Advance past any elapsed deadlines.
    ///
    /// Cascades: a caller arriving after both deadlines sees the race
    /// resolve and the track clear in a single call. The reset deadline is
    /// measured from the scheduled resolution, not from tick arrival, so
    /// the two delays stay sequential.
    pub fn tick(&mut self, now_ms: u64) -> Vec<Event> {
        let mut events = Vec::new();
        while let Some(deadline) = self.next_deadline_ms() {
            if now_ms < deadline {
                break;
            }
            match self.phase {
                RacePhase::Racing { .. } => events.push(self.resolve(deadline)),
                RacePhase::Resolved { .. } => events.push(self.reset()),
                RacePhase::Idle => break,
            }
        }
        events
    }

    fn resolve(&mut self, at_ms: u64) -> Event {
        let mut rng = RaceRng::new(&self.seed, self.races_started);
        let lane = rng.draw_winner(self.catalog.len());
        let winner = self.catalog[lane].clone();

        let player_won = self.bet.selected == Some(winner.id);
        let mut payout = 0;
        if player_won {
            payout = payout_for(self.bet.stake());
            self.bet.balance = self.bet.balance.saturating_add(payout);
            self.stats.total_payouts = self.stats.total_payouts.saturating_add(payout);
            self.stats.last_winner = winner.name.clone();
        }
        self.stats.races_completed = self.stats.races_completed.saturating_add(1);

        self.phase = RacePhase::Resolved {
            outcome: RaceOutcome {
                winner: winner.id,
                player_won,
            },
            reset_at_ms: at_ms.saturating_add(self.reset_delay_ms),
        };

        Event::RaceResolved {
            winner: winner.id,
            winner_name: winner.name,
            player_won,
            payout,
            balance: self.bet.balance,
        }
    }

    fn reset(&mut self) -> Event {
        self.bet.selected = None;
        self.phase = RacePhase::Idle;
        Event::TrackCleared {
            balance: self.bet.balance,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            bet: self.bet.clone(),
            outcome: self.phase.outcome().copied(),
            stats: self.stats.clone(),
            catalog: self.catalog.clone(),
            leaderboard: Leaderboard::rank(&self.catalog),
        }
    }
}
