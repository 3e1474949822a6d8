//! Local session driver for the zoomtrack race engine.
//!
//! The simulator plays the presentation-layer role: it owns the engine,
//! feeds it actions, sleeps through the race and reset delays on an
//! injected clock, and renders events and standings as log lines. Under
//! the deterministic runtime the delays elapse instantly, so whole betting
//! sessions replay exactly in tests.

use commonware_runtime::Clock;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::time::{Duration, UNIX_EPOCH};
use thiserror::Error;
use tracing::{debug, info};
use zoomtrack_execution::{Engine, EngineConfig};
use zoomtrack_types::{
    race::{
        default_catalog, Animal, AnimalId, BetAmount, RacePhase, SessionStats, MAX_CATALOG_SIZE,
        MAX_GLYPH_LENGTH, MAX_NAME_LENGTH, MAX_QUIRK_LENGTH, RACE_DURATION_MS, RESET_DELAY_MS,
        STARTING_BALANCE,
    },
    Action, Event, Seed,
};

/// Errors surfaced while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("catalog has {0} entries, more than the supported maximum")]
    CatalogTooLarge(usize),
    #[error("duplicate animal id {0}")]
    DuplicateId(AnimalId),
    #[error("animal {id}: {field} exceeds {max} bytes")]
    FieldTooLong {
        id: AnimalId,
        field: &'static str,
        max: usize,
    },
}

/// Catalog entry as written in the configuration file.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AnimalConfig {
    pub id: AnimalId,
    pub name: String,
    pub glyph: String,
    pub speed: u8,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub quirk: Option<String>,
}

/// Seeded session statistics as written in the configuration file.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct StatsConfig {
    #[serde(default)]
    pub races_completed: u64,
    #[serde(default)]
    pub total_payouts: u64,
    #[serde(default)]
    pub last_winner: String,
}

fn default_starting_balance() -> u64 {
    STARTING_BALANCE
}

fn default_race_duration_ms() -> u64 {
    RACE_DURATION_MS
}

fn default_reset_delay_ms() -> u64 {
    RESET_DELAY_MS
}

/// Simulator configuration (YAML).
///
/// An empty catalog selects the built-in one; omitted stats select the
/// seeded "today at the track" totals.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SimulatorConfig {
    #[serde(default = "default_starting_balance")]
    pub starting_balance: u64,
    #[serde(default = "default_race_duration_ms")]
    pub race_duration_ms: u64,
    #[serde(default = "default_reset_delay_ms")]
    pub reset_delay_ms: u64,
    #[serde(default)]
    pub initial_stats: Option<StatsConfig>,
    #[serde(default)]
    pub catalog: Vec<AnimalConfig>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            starting_balance: STARTING_BALANCE,
            race_duration_ms: RACE_DURATION_MS,
            reset_delay_ms: RESET_DELAY_MS,
            initial_stats: None,
            catalog: Vec::new(),
        }
    }
}

impl SimulatorConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Validate and convert into an engine configuration.
    pub fn into_engine_config(self) -> Result<EngineConfig, ConfigError> {
        let catalog = if self.catalog.is_empty() {
            default_catalog()
        } else {
            if self.catalog.len() > MAX_CATALOG_SIZE {
                return Err(ConfigError::CatalogTooLarge(self.catalog.len()));
            }
            let mut seen = HashSet::new();
            let mut catalog = Vec::with_capacity(self.catalog.len());
            for entry in self.catalog {
                if !seen.insert(entry.id) {
                    return Err(ConfigError::DuplicateId(entry.id));
                }
                check_length(entry.id, "name", &entry.name, MAX_NAME_LENGTH)?;
                check_length(entry.id, "glyph", &entry.glyph, MAX_GLYPH_LENGTH)?;
                if let Some(quirk) = &entry.quirk {
                    check_length(entry.id, "quirk", quirk, MAX_QUIRK_LENGTH)?;
                }
                catalog.push(Animal {
                    id: entry.id,
                    name: entry.name,
                    glyph: entry.glyph,
                    speed: entry.speed,
                    wins: entry.wins,
                    quirk: entry.quirk,
                });
            }
            catalog
        };

        let initial_stats = match self.initial_stats {
            Some(stats) => SessionStats {
                races_completed: stats.races_completed,
                total_payouts: stats.total_payouts,
                last_winner: stats.last_winner,
            },
            None => SessionStats::seeded(),
        };

        Ok(EngineConfig {
            catalog,
            starting_balance: self.starting_balance,
            initial_stats,
            race_duration_ms: self.race_duration_ms,
            reset_delay_ms: self.reset_delay_ms,
        })
    }
}

fn check_length(
    id: AnimalId,
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ConfigError> {
    if value.len() > max {
        return Err(ConfigError::FieldTooLong { id, field, max });
    }
    Ok(())
}

/// How the autoplayer picks its animal each race.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Back the highest-speed animal every race.
    Favorite,
    /// Cycle through the catalog in order.
    Rotate,
    /// Pick uniformly at random (seeded, so sessions replay).
    Random,
}

impl Strategy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "favorite" => Some(Self::Favorite),
            "rotate" => Some(Self::Rotate),
            "random" => Some(Self::Random),
            _ => None,
        }
    }
}

/// Per-race record in the session report.
#[derive(Clone, Debug, Serialize)]
pub struct RaceRecord {
    pub race: u64,
    pub animal: AnimalId,
    pub stake: u64,
    pub winner: AnimalId,
    pub player_won: bool,
    pub payout: u64,
    pub balance: u64,
}

/// Summary of an autoplay session.
#[derive(Clone, Debug, Serialize)]
pub struct SessionReport {
    pub races_requested: u64,
    pub races_run: u64,
    pub starting_balance: u64,
    pub final_balance: u64,
    pub total_staked: u64,
    pub total_won: u64,
    pub races_completed: u64,
    pub total_payouts: u64,
    pub last_winner: String,
    pub records: Vec<RaceRecord>,
}

/// Drives the engine through full race cycles on the provided clock.
pub struct Simulator<E: Clock> {
    context: E,
    engine: Engine,
    picker: StdRng,
}

impl<E: Clock> Simulator<E> {
    pub fn new(context: E, config: EngineConfig, seed: Seed) -> Self {
        // The random pick strategy reuses the session seed so autoplay
        // sessions replay byte-for-byte.
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&seed.0[..8]);
        Self {
            context,
            engine: Engine::new(config, seed),
            picker: StdRng::seed_from_u64(u64::from_be_bytes(prefix)),
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    fn now_ms(&self) -> u64 {
        self.context
            .current()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0)
    }

    fn pick(&mut self, strategy: Strategy, fixed: Option<AnimalId>, race: u64) -> AnimalId {
        if let Some(id) = fixed {
            return id;
        }
        let catalog = self.engine.catalog();
        match strategy {
            Strategy::Favorite => catalog
                .iter()
                .max_by_key(|animal| animal.speed)
                .map(|animal| animal.id)
                .unwrap_or(0),
            Strategy::Rotate => catalog[(race as usize) % catalog.len()].id,
            Strategy::Random => {
                let lane = self.picker.gen_range(0..catalog.len());
                catalog[lane].id
            }
        }
    }

    /// Play up to `races` full cycles, stopping early once the balance can
    /// no longer cover the stake. Returns a settled-session report.
    pub async fn run(
        &mut self,
        races: u64,
        strategy: Strategy,
        fixed: Option<AnimalId>,
        amount: BetAmount,
    ) -> SessionReport {
        let starting_balance = self.engine.bet().balance;
        let mut report = SessionReport {
            races_requested: races,
            races_run: 0,
            starting_balance,
            final_balance: starting_balance,
            total_staked: 0,
            total_won: 0,
            races_completed: 0,
            total_payouts: 0,
            last_winner: String::new(),
            records: Vec::new(),
        };
        if self.engine.catalog().is_empty() {
            return report;
        }

        self.log_standings();

        for race in 0..races {
            let stake = amount.chips();
            if self.engine.bet().balance < stake {
                info!(
                    balance = self.engine.bet().balance,
                    stake, "balance exhausted, ending session early"
                );
                break;
            }

            let animal = self.pick(strategy, fixed, race);
            let now = self.now_ms();
            let mut events = self.engine.apply(Action::SetBet { amount }, now);
            events.extend(self.engine.apply(Action::Select { animal }, now));
            events.extend(self.engine.apply(Action::Launch, now));
            self.log_events(&events);
            if !matches!(self.engine.phase(), RacePhase::Racing { .. }) {
                debug!(animal, "launch rejected, ending session");
                break;
            }
            report.total_staked += stake;

            // Wait out the race, then the track reset
            while let Some(deadline) = self.engine.next_deadline_ms() {
                let wait = deadline.saturating_sub(self.now_ms());
                self.context.sleep(Duration::from_millis(wait)).await;
                let events = self.engine.tick(self.now_ms());
                self.log_events(&events);
                for event in &events {
                    if let Event::RaceResolved {
                        winner,
                        player_won,
                        payout,
                        balance,
                        ..
                    } = event
                    {
                        report.total_won += payout;
                        report.records.push(RaceRecord {
                            race,
                            animal,
                            stake,
                            winner: *winner,
                            player_won: *player_won,
                            payout: *payout,
                            balance: *balance,
                        });
                    }
                }
            }
        }

        let stats = self.engine.stats();
        report.races_run = report.records.len() as u64;
        report.final_balance = self.engine.bet().balance;
        report.races_completed = stats.races_completed;
        report.total_payouts = stats.total_payouts;
        report.last_winner = stats.last_winner.clone();
        self.log_standings();
        report
    }

    fn log_events(&self, events: &[Event]) {
        for event in events {
            match event {
                Event::AnimalSelected { animal } => debug!(animal = *animal, "animal selected"),
                Event::BetChanged { amount } => debug!(chips = amount.chips(), "bet changed"),
                Event::RaceStarted {
                    animal,
                    stake,
                    balance,
                } => info!(animal = *animal, stake = *stake, balance = *balance, "race started"),
                Event::RaceResolved {
                    winner_name,
                    player_won,
                    payout,
                    balance,
                    ..
                } => info!(
                    winner = %winner_name,
                    player_won = *player_won,
                    payout = *payout,
                    balance = *balance,
                    "race resolved"
                ),
                Event::TrackCleared { balance } => debug!(balance = *balance, "track cleared"),
            }
        }
    }

    /// Render the stats panel and champion leaderboard as log lines.
    fn log_standings(&self) {
        let snapshot = self.engine.snapshot();
        info!(
            balance = snapshot.bet.balance,
            races = snapshot.stats.races_completed,
            payouts = snapshot.stats.total_payouts,
            last_winner = %snapshot.stats.last_winner,
            "track stats"
        );
        for entry in &snapshot.leaderboard.entries {
            info!(
                rank = entry.rank,
                name = %entry.name,
                speed = entry.speed,
                wins = entry.wins,
                "leaderboard"
            );
        }
    }
}
