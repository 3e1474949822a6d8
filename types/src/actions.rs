use bytes::{Buf, BufMut};
use commonware_codec::{EncodeSize, Error, Read, ReadExt, Write};

use crate::race::{
    read_string, string_encode_size, write_string, AnimalId, BetAmount, MAX_NAME_LENGTH,
};

/// The mutating surface a presentation layer may invoke on the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Choose the animal to back in the next race.
    /// Binary: [0] [animal:u8]
    Select { animal: AnimalId },

    /// Choose the stake for the next race.
    /// Binary: [1] [amount:u8]
    SetBet { amount: BetAmount },

    /// Start the race with the current selection and stake.
    /// Binary: [2]
    Launch,
}

impl Write for Action {
    fn write(&self, writer: &mut impl BufMut) {
        match self {
            Self::Select { animal } => {
                0u8.write(writer);
                animal.write(writer);
            }
            Self::SetBet { amount } => {
                1u8.write(writer);
                amount.write(writer);
            }
            Self::Launch => 2u8.write(writer),
        }
    }
}

impl Read for Action {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let kind = u8::read(reader)?;
        match kind {
            0 => Ok(Self::Select {
                animal: AnimalId::read(reader)?,
            }),
            1 => Ok(Self::SetBet {
                amount: BetAmount::read(reader)?,
            }),
            2 => Ok(Self::Launch),
            i => Err(Error::InvalidEnum(i)),
        }
    }
}

impl EncodeSize for Action {
    fn encode_size(&self) -> usize {
        1 + match self {
            Self::Select { animal } => animal.encode_size(),
            Self::SetBet { amount } => amount.encode_size(),
            Self::Launch => 0,
        }
    }
}

/// What the engine reports back across the rendering boundary.
///
/// Invalid actions produce no event at all: the engine ignores them
/// silently, so an empty result means nothing changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// An animal was picked while the track was idle.
    AnimalSelected { animal: AnimalId },

    /// The stake changed while the track was idle.
    BetChanged { amount: BetAmount },

    /// A race started; `balance` reflects the immediate stake debit.
    RaceStarted {
        animal: AnimalId,
        stake: u64,
        balance: u64,
    },

    /// A race resolved. `payout` is zero on a loss; `balance` is the
    /// post-settlement figure.
    RaceResolved {
        winner: AnimalId,
        winner_name: String,
        player_won: bool,
        payout: u64,
        balance: u64,
    },

    /// The track cleared and the engine returned to idle.
    TrackCleared { balance: u64 },
}

impl Write for Event {
    fn write(&self, writer: &mut impl BufMut) {
        match self {
            Self::AnimalSelected { animal } => {
                0u8.write(writer);
                animal.write(writer);
            }
            Self::BetChanged { amount } => {
                1u8.write(writer);
                amount.write(writer);
            }
            Self::RaceStarted {
                animal,
                stake,
                balance,
            } => {
                2u8.write(writer);
                animal.write(writer);
                stake.write(writer);
                balance.write(writer);
            }
            Self::RaceResolved {
                winner,
                winner_name,
                player_won,
                payout,
                balance,
            } => {
                3u8.write(writer);
                winner.write(writer);
                write_string(winner_name, writer);
                player_won.write(writer);
                payout.write(writer);
                balance.write(writer);
            }
            Self::TrackCleared { balance } => {
                4u8.write(writer);
                balance.write(writer);
            }
        }
    }
}

impl Read for Event {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let kind = u8::read(reader)?;
        match kind {
            0 => Ok(Self::AnimalSelected {
                animal: AnimalId::read(reader)?,
            }),
            1 => Ok(Self::BetChanged {
                amount: BetAmount::read(reader)?,
            }),
            2 => Ok(Self::RaceStarted {
                animal: AnimalId::read(reader)?,
                stake: u64::read(reader)?,
                balance: u64::read(reader)?,
            }),
            3 => Ok(Self::RaceResolved {
                winner: AnimalId::read(reader)?,
                winner_name: read_string(reader, MAX_NAME_LENGTH)?,
                player_won: bool::read(reader)?,
                payout: u64::read(reader)?,
                balance: u64::read(reader)?,
            }),
            4 => Ok(Self::TrackCleared {
                balance: u64::read(reader)?,
            }),
            i => Err(Error::InvalidEnum(i)),
        }
    }
}

impl EncodeSize for Event {
    fn encode_size(&self) -> usize {
        1 + match self {
            Self::AnimalSelected { animal } => animal.encode_size(),
            Self::BetChanged { amount } => amount.encode_size(),
            Self::RaceStarted {
                animal,
                stake,
                balance,
            } => animal.encode_size() + stake.encode_size() + balance.encode_size(),
            Self::RaceResolved {
                winner,
                winner_name,
                player_won,
                payout,
                balance,
            } => {
                winner.encode_size()
                    + string_encode_size(winner_name)
                    + player_won.encode_size()
                    + payout.encode_size()
                    + balance.encode_size()
            }
            Self::TrackCleared { balance } => balance.encode_size(),
        }
    }
}
