mod animal;
mod bet;
mod codec;
mod constants;
mod leaderboard;
mod outcome;
mod stats;

pub use animal::*;
pub use bet::*;
pub use codec::{
    option_string_encode_size, read_option_string, read_string, string_encode_size,
    write_option_string, write_string,
};
pub use constants::*;
pub use leaderboard::*;
pub use outcome::*;
pub use stats::*;

#[cfg(test)]
mod tests;
