/// Maximum animal name length in bytes
pub const MAX_NAME_LENGTH: usize = 32;

/// Maximum animal glyph length in bytes
pub const MAX_GLYPH_LENGTH: usize = 8;

/// Maximum animal quirk length in bytes
pub const MAX_QUIRK_LENGTH: usize = 64;

/// Maximum catalog entries
pub const MAX_CATALOG_SIZE: usize = 32;

/// Starting balance for a fresh session
pub const STARTING_BALANCE: u64 = 1_000;

/// Winning payout numerator (payout = stake * 5 / 2, i.e. 2.5x).
/// Integer division rounds the odd denomination down (25 pays 62).
pub const PAYOUT_NUMERATOR: u64 = 5;

/// Winning payout denominator
pub const PAYOUT_DENOMINATOR: u64 = 2;

/// Simulated race duration in milliseconds
pub const RACE_DURATION_MS: u64 = 3_000;

/// Delay before the track clears after a race resolves, in milliseconds
pub const RESET_DELAY_MS: u64 = 3_000;

/// Seeded session statistics shown before any race has run
pub const SEED_RACES_COMPLETED: u64 = 47;
pub const SEED_TOTAL_PAYOUTS: u64 = 23_400;
pub const SEED_LAST_WINNER: &str = "Thunder Horse";
