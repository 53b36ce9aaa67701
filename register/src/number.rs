//! C-style unsigned integer literals: decimal, `0x`/`0X` hexadecimal and
//! `0`-prefixed octal.

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Octal,
    Decimal,
    Hexadecimal,
}

impl Radix {
    pub fn base(self) -> u32 {
        match self {
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    /// Picks the base from the literal's prefix and returns it together with
    /// the text where the digits start. `0x` only counts as a prefix when a
    /// hex digit follows it, otherwise the leading `0` is read as octal.
    fn detect(text: &str) -> (Self, &str) {
        match text.as_bytes() {
            [b'0', b'x' | b'X', next, ..] if next.is_ascii_hexdigit() => {
                (Radix::Hexadecimal, &text[2..])
            }
            [b'0', ..] => (Radix::Octal, text),
            _ => (Radix::Decimal, text),
        }
    }
}

/// Outcome of reading the leading numeral of a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scan<'a> {
    pub radix: Radix,
    /// Sign written before the digits, if any.
    pub sign: Option<char>,
    /// Magnitude of the numeral; `None` when it does not fit in a `u64`.
    pub value: Option<u64>,
    pub digits: usize,
    pub rest: &'a str,
}

impl Scan<'_> {
    /// Value the way `strtoul` reports it: no digits read as 0, overflow
    /// saturates and a `-` negates with wrap-around, so `-1` is `u64::MAX`.
    pub fn lenient(&self) -> u64 {
        match (self.value, self.sign) {
            (None, _) => u64::MAX,
            (Some(value), Some('-')) => value.wrapping_neg(),
            (Some(value), _) => value,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.digits > 0 && self.rest.is_empty()
    }
}

/// Reads as many digits as possible from the start of `text`, skipping
/// leading ASCII whitespace and one optional `+`/`-`. Never fails; callers
/// decide what to do with the sign and the rest.
pub fn scan_integer(text: &str) -> Scan<'_> {
    let text = text.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let sign = text.chars().next().filter(|c| matches!(c, '+' | '-'));
    let unsigned = sign.map_or(text, |sign| &text[sign.len_utf8()..]);
    let (radix, digits) = Radix::detect(unsigned);
    let base = radix.base();
    let len = digits
        .chars()
        .take_while(|c| c.is_digit(base))
        .count();
    let value = digits[..len].chars().try_fold(0u64, |acc, c| {
        acc.checked_mul(u64::from(base))?
            .checked_add(u64::from(c.to_digit(base)?))
    });
    Scan {
        radix,
        sign,
        value,
        digits: len,
        rest: &digits[len..],
    }
}

/// Parses a complete literal. Any text after the numeral is an error, and so
/// is a value that does not fit in `T`.
pub fn parse_integer<T: TryFrom<u64>>(text: &str) -> Result<T> {
    if text.trim().is_empty() {
        return Err(Error::Empty);
    }
    let scan = scan_integer(text);
    if !scan.is_complete() || scan.sign.is_some() {
        return Err(Error::InvalidNumber(text.to_string()));
    }
    let too_wide = || Error::TooWide {
        literal: text.to_string(),
        bits: u8::BITS * std::mem::size_of::<T>() as u32,
    };
    let value = scan.value.ok_or_else(too_wide)?;
    T::try_from(value).map_err(|_| too_wide())
}
