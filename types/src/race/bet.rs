use bytes::{Buf, BufMut};
use commonware_codec::{EncodeSize, Error, FixedSize, Read, ReadExt, Write};

use super::AnimalId;

/// Bet denominations offered by the betting panel.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BetAmount {
    #[default]
    Ten = 0,
    TwentyFive = 1,
    Fifty = 2,
    Hundred = 3,
}

impl BetAmount {
    /// Every denomination, cheapest first.
    pub const ALL: [BetAmount; 4] = [
        BetAmount::Ten,
        BetAmount::TwentyFive,
        BetAmount::Fifty,
        BetAmount::Hundred,
    ];

    /// The stake in chips.
    pub fn chips(&self) -> u64 {
        match self {
            BetAmount::Ten => 10,
            BetAmount::TwentyFive => 25,
            BetAmount::Fifty => 50,
            BetAmount::Hundred => 100,
        }
    }

    /// Map a chip value back to a denomination.
    pub fn from_chips(chips: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|amount| amount.chips() == chips)
    }
}

impl Write for BetAmount {
    fn write(&self, writer: &mut impl BufMut) {
        (*self as u8).write(writer);
    }
}

impl Read for BetAmount {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let value = u8::read(reader)?;
        match value {
            0 => Ok(Self::Ten),
            1 => Ok(Self::TwentyFive),
            2 => Ok(Self::Fifty),
            3 => Ok(Self::Hundred),
            i => Err(Error::InvalidEnum(i)),
        }
    }
}

impl FixedSize for BetAmount {
    const SIZE: usize = 1;
}

/// Betting panel state.
///
/// `balance` is mutated only by the engine: debited at race start, credited
/// at settlement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BetState {
    pub selected: Option<AnimalId>,
    pub amount: BetAmount,
    pub balance: u64,
}

impl BetState {
    pub fn new(balance: u64) -> Self {
        Self {
            selected: None,
            amount: BetAmount::default(),
            balance,
        }
    }

    /// The stake that a launch would put at risk.
    pub fn stake(&self) -> u64 {
        self.amount.chips()
    }
}

impl Write for BetState {
    fn write(&self, writer: &mut impl BufMut) {
        self.selected.write(writer);
        self.amount.write(writer);
        self.balance.write(writer);
    }
}

impl Read for BetState {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        Ok(Self {
            selected: Option::<AnimalId>::read(reader)?,
            amount: BetAmount::read(reader)?,
            balance: u64::read(reader)?,
        })
    }
}

impl EncodeSize for BetState {
    fn encode_size(&self) -> usize {
        self.selected.encode_size() + self.amount.encode_size() + self.balance.encode_size()
    }
}
