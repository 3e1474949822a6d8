use bytes::{Buf, BufMut};
use commonware_codec::{EncodeSize, Error, FixedSize, Read, ReadExt, Write};

use super::AnimalId;

/// Result of a resolved race.
///
/// Exists only while the engine sits in [`RacePhase::Resolved`]; cleared
/// before the track returns to idle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RaceOutcome {
    pub winner: AnimalId,
    pub player_won: bool,
}

impl Write for RaceOutcome {
    fn write(&self, writer: &mut impl BufMut) {
        self.winner.write(writer);
        self.player_won.write(writer);
    }
}

impl Read for RaceOutcome {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        Ok(Self {
            winner: AnimalId::read(reader)?,
            player_won: bool::read(reader)?,
        })
    }
}

impl FixedSize for RaceOutcome {
    const SIZE: usize = 2;
}

/// Engine phase. Deadlines are unix-epoch milliseconds.
///
/// The only legal cycle is Idle -> Racing -> Resolved -> Idle; the two
/// timed hops fire once the caller's clock passes the recorded deadline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RacePhase {
    #[default]
    Idle,
    Racing {
        resolve_at_ms: u64,
    },
    Resolved {
        outcome: RaceOutcome,
        reset_at_ms: u64,
    },
}

impl RacePhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The outcome held while resolved, if any.
    pub fn outcome(&self) -> Option<&RaceOutcome> {
        match self {
            Self::Resolved { outcome, .. } => Some(outcome),
            _ => None,
        }
    }
}

impl Write for RacePhase {
    fn write(&self, writer: &mut impl BufMut) {
        match self {
            Self::Idle => 0u8.write(writer),
            Self::Racing { resolve_at_ms } => {
                1u8.write(writer);
                resolve_at_ms.write(writer);
            }
            Self::Resolved {
                outcome,
                reset_at_ms,
            } => {
                2u8.write(writer);
                outcome.write(writer);
                reset_at_ms.write(writer);
            }
        }
    }
}

impl Read for RacePhase {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let kind = u8::read(reader)?;
        match kind {
            0 => Ok(Self::Idle),
            1 => Ok(Self::Racing {
                resolve_at_ms: u64::read(reader)?,
            }),
            2 => Ok(Self::Resolved {
                outcome: RaceOutcome::read(reader)?,
                reset_at_ms: u64::read(reader)?,
            }),
            i => Err(Error::InvalidEnum(i)),
        }
    }
}

impl EncodeSize for RacePhase {
    fn encode_size(&self) -> usize {
        1 + match self {
            Self::Idle => 0,
            Self::Racing { resolve_at_ms } => resolve_at_ms.encode_size(),
            Self::Resolved {
                outcome,
                reset_at_ms,
            } => outcome.encode_size() + reset_at_ms.encode_size(),
        }
    }
}
