use bytes::{Buf, BufMut};
use commonware_codec::{Error, FixedSize, Read, Write};

/// Seed for the race random number generator.
///
/// One seed plus a race index fully determines a race's winner, so a
/// session can be replayed exactly by reusing its seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Seed(pub [u8; 32]);

impl Write for Seed {
    fn write(&self, writer: &mut impl BufMut) {
        writer.put_slice(&self.0);
    }
}

impl Read for Seed {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        if reader.remaining() < 32 {
            return Err(Error::EndOfBuffer);
        }
        let mut bytes = [0u8; 32];
        reader.copy_to_slice(&mut bytes);
        Ok(Self(bytes))
    }
}

impl FixedSize for Seed {
    const SIZE: usize = 32;
}
