use crate::{
    error::{Error, Result},
    number::scan_integer,
};

pub const REGISTER_BITS: u32 = u32::BITS;

const SEPARATORS: [char; 2] = ['.', '\n'];

/// Inclusive range of bit positions inside the register, 0 being the least
/// significant bit. Always `first <= last < REGISTER_BITS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitRange {
    first: u32,
    last: u32,
}

fn bit_index(value: u64) -> Result<u32> {
    u32::try_from(value)
        .ok()
        .filter(|index| *index < REGISTER_BITS)
        .ok_or(Error::BitIndex(value))
}

impl BitRange {
    pub fn new(first: u64, last: u64) -> Result<Self> {
        let first_index = bit_index(first)?;
        let last_index = bit_index(last)?;
        if last_index < first_index {
            return Err(Error::Descending { first, last });
        }
        Ok(Self {
            first: first_index,
            last: last_index,
        })
    }

    pub fn single(bit: u64) -> Result<Self> {
        Self::new(bit, bit)
    }

    pub fn first(&self) -> u32 {
        self.first
    }

    pub fn last(&self) -> u32 {
        self.last
    }

    pub fn width(&self) -> u32 {
        self.last - self.first + 1
    }

    pub fn is_single(&self) -> bool {
        self.first == self.last
    }

    /// Mask selecting the range in place.
    pub fn mask(&self) -> u32 {
        (u32::MAX >> (REGISTER_BITS - self.width())) << self.first
    }

    /// Moves the bits of the range down to bit 0, clearing everything else.
    pub fn extract(&self, value: u32) -> u32 {
        let bits_from_top = REGISTER_BITS - (self.last + 1);
        (value << bits_from_top) >> (bits_from_top + self.first)
    }

    /// Reads the text following an `R` command: either a single bit index
    /// (`4`) or a dotted pair (`4.13`).
    ///
    /// A single index must be a complete numeral. Tokens of a dotted pair are
    /// read like `strtoul` does, so trailing garbage after the digits is
    /// ignored and a token with no digits counts as 0. Empty tokens are
    /// skipped and anything after the second token is ignored.
    ///
    /// Both forms accept a leading `+` or `-`. A negated index wraps to a huge
    /// value and fails validation, so `-1.5` is rejected while `+4.+13` reads
    /// as `4.13`.
    pub fn parse(text: &str) -> Result<Self> {
        let whole = scan_integer(text);
        if whole.is_complete() {
            if let Ok(range) = Self::single(whole.lenient()) {
                return Ok(range);
            }
        }

        let mut tokens = text.split(&SEPARATORS[..]).filter(|token| !token.is_empty());
        let first = tokens
            .next()
            .ok_or_else(|| Error::MalformedRange(text.to_string()))?;
        let first = scan_integer(first).lenient();
        let last = tokens
            .next()
            .ok_or_else(|| Error::MalformedRange(text.to_string()))?;
        let last = scan_integer(last).lenient();
        log::trace!("range tokens of '{text}': {first}, {last}");
        Self::new(first, last)
    }
}

/// Value of bits `first..=last` of `value`, shifted down to bit 0.
pub fn extract(value: u32, first: u32, last: u32) -> Result<u32> {
    Ok(BitRange::new(first.into(), last.into())?.extract(value))
}
