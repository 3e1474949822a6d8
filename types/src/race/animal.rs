use bytes::{Buf, BufMut};
use commonware_codec::{EncodeSize, Error, Read, ReadExt, Write};

use super::{
    option_string_encode_size, read_option_string, read_string, string_encode_size,
    write_option_string, write_string, MAX_GLYPH_LENGTH, MAX_NAME_LENGTH, MAX_QUIRK_LENGTH,
};

/// Identifier of a catalog animal.
pub type AnimalId = u8;

/// A racing animal as listed in the catalog.
///
/// Catalog entries are immutable once the engine is constructed. `wins` is
/// a seeded career total used for leaderboard ranking; it is not updated by
/// live races.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Animal {
    pub id: AnimalId,
    pub name: String,
    pub glyph: String,
    pub speed: u8,
    pub wins: u32,
    pub quirk: Option<String>,
}

impl Write for Animal {
    fn write(&self, writer: &mut impl BufMut) {
        self.id.write(writer);
        write_string(&self.name, writer);
        write_string(&self.glyph, writer);
        self.speed.write(writer);
        self.wins.write(writer);
        write_option_string(&self.quirk, writer);
    }
}

impl Read for Animal {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        Ok(Self {
            id: AnimalId::read(reader)?,
            name: read_string(reader, MAX_NAME_LENGTH)?,
            glyph: read_string(reader, MAX_GLYPH_LENGTH)?,
            speed: u8::read(reader)?,
            wins: u32::read(reader)?,
            quirk: read_option_string(reader, MAX_QUIRK_LENGTH)?,
        })
    }
}

impl EncodeSize for Animal {
    fn encode_size(&self) -> usize {
        self.id.encode_size()
            + string_encode_size(&self.name)
            + string_encode_size(&self.glyph)
            + self.speed.encode_size()
            + self.wins.encode_size()
            + option_string_encode_size(&self.quirk)
    }
}

/// Find a catalog entry by id.
pub fn find_animal(catalog: &[Animal], id: AnimalId) -> Option<&Animal> {
    catalog.iter().find(|animal| animal.id == id)
}

/// The built-in eight-animal catalog.
pub fn default_catalog() -> Vec<Animal> {
    fn entry(id: AnimalId, name: &str, glyph: &str, speed: u8, wins: u32, quirk: &str) -> Animal {
        Animal {
            id,
            name: name.to_string(),
            glyph: glyph.to_string(),
            speed,
            wins,
            quirk: Some(quirk.to_string()),
        }
    }

    vec![
        entry(1, "Lightning Cheetah", "🐆", 85, 24, "Loves energy drinks!"),
        entry(2, "Thunder Horse", "🐎", 80, 31, "Gallops to disco music"),
        entry(3, "Swift Rabbit", "🐰", 75, 19, "Powered by carrots"),
        entry(4, "Turbo Turtle", "🐢", 60, 8, "Slow but unstoppable!"),
        entry(5, "Flash Falcon", "🦅", 90, 28, "Soars through clouds"),
        entry(6, "Dash Deer", "🦌", 70, 22, "Forest parkour expert"),
        entry(7, "Rocket Rhino", "🦏", 78, 15, "Breaks sound barriers"),
        entry(8, "Zoom Zebra", "🦓", 82, 26, "Striped speed demon"),
    ]
}
