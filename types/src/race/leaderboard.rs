use bytes::{Buf, BufMut};
use commonware_codec::{EncodeSize, Error, Read, ReadExt, ReadRangeExt, Write};

use super::{
    read_string, string_encode_size, write_string, Animal, AnimalId, MAX_CATALOG_SIZE,
    MAX_NAME_LENGTH,
};

/// Leaderboard row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub id: AnimalId,
    pub name: String,
    pub speed: u8,
    pub wins: u32,
}

impl Write for LeaderboardEntry {
    fn write(&self, writer: &mut impl BufMut) {
        self.rank.write(writer);
        self.id.write(writer);
        write_string(&self.name, writer);
        self.speed.write(writer);
        self.wins.write(writer);
    }
}

impl Read for LeaderboardEntry {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        Ok(Self {
            rank: u32::read(reader)?,
            id: AnimalId::read(reader)?,
            name: read_string(reader, MAX_NAME_LENGTH)?,
            speed: u8::read(reader)?,
            wins: u32::read(reader)?,
        })
    }
}

impl EncodeSize for LeaderboardEntry {
    fn encode_size(&self) -> usize {
        self.rank.encode_size()
            + self.id.encode_size()
            + string_encode_size(&self.name)
            + self.speed.encode_size()
            + self.wins.encode_size()
    }
}

/// Champion leaderboard
///
/// A pure projection of the catalog: ranked by career wins descending,
/// ties keeping catalog order. The catalog itself is never mutated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn rank(catalog: &[Animal]) -> Self {
        let mut entries: Vec<LeaderboardEntry> = catalog
            .iter()
            .map(|animal| LeaderboardEntry {
                rank: 0,
                id: animal.id,
                name: animal.name.clone(),
                speed: animal.speed,
                wins: animal.wins,
            })
            .collect();

        // sort_by is stable, so equal win counts keep catalog order
        entries.sort_by(|a, b| b.wins.cmp(&a.wins));
        for (i, entry) in entries.iter_mut().enumerate() {
            entry.rank = (i + 1) as u32;
        }

        Self { entries }
    }
}

impl Write for Leaderboard {
    fn write(&self, writer: &mut impl BufMut) {
        self.entries.write(writer);
    }
}

impl Read for Leaderboard {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        Ok(Self {
            entries: Vec::<LeaderboardEntry>::read_range(reader, 0..=MAX_CATALOG_SIZE)?,
        })
    }
}

impl EncodeSize for Leaderboard {
    fn encode_size(&self) -> usize {
        self.entries.encode_size()
    }
}
