use bytes::{Buf, BufMut};
use commonware_codec::{EncodeSize, Error, Read, ReadExt, Write};

use super::{
    read_string, string_encode_size, write_string, MAX_NAME_LENGTH, SEED_LAST_WINNER,
    SEED_RACES_COMPLETED, SEED_TOTAL_PAYOUTS,
};

/// Running session totals.
///
/// Monotonically accumulating for the engine's lifetime. `last_winner`
/// records the most recent winner the player backed successfully; losses
/// leave it untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub races_completed: u64,
    pub total_payouts: u64,
    pub last_winner: String,
}

impl SessionStats {
    /// The seeded "today at the track" totals shown before any race runs.
    pub fn seeded() -> Self {
        Self {
            races_completed: SEED_RACES_COMPLETED,
            total_payouts: SEED_TOTAL_PAYOUTS,
            last_winner: SEED_LAST_WINNER.to_string(),
        }
    }
}

impl Write for SessionStats {
    fn write(&self, writer: &mut impl BufMut) {
        self.races_completed.write(writer);
        self.total_payouts.write(writer);
        write_string(&self.last_winner, writer);
    }
}

impl Read for SessionStats {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        Ok(Self {
            races_completed: u64::read(reader)?,
            total_payouts: u64::read(reader)?,
            last_winner: read_string(reader, MAX_NAME_LENGTH)?,
        })
    }
}

impl EncodeSize for SessionStats {
    fn encode_size(&self) -> usize {
        self.races_completed.encode_size()
            + self.total_payouts.encode_size()
            + string_encode_size(&self.last_winner)
    }
}
