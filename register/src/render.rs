use std::io::{self, Write};

use itertools::Itertools;

use crate::{
    range::{BitRange, REGISTER_BITS},
    style::{Palette, Style},
};

pub const LOW_HEADER: &str =
    " 31                23                15                 7             0";
pub const HIGH_HEADER: &str =
    " 63                55                47                39            32";

/// `0`/`1` for every bit, most significant first, with `- ` between octets.
pub fn bit_line(value: u32) -> String {
    let octets = (0..REGISTER_BITS).rev().map(|bit| (value >> bit) & 1).chunks(8);
    let body = octets
        .into_iter()
        .map(|octet| octet.map(|bit| format!("{bit} ")).collect::<String>())
        .join("- ");
    format!("  {body}")
}

/// The four bytes, most significant first, each under its octet.
pub fn hex_line(value: u32) -> String {
    let [b3, b2, b1, b0] = value.to_be_bytes();
    format!(
        "         {b3:02X}                {b2:02X}                {b1:02X}                {b0:02X}"
    )
}

pub fn range_line(value: u32, range: BitRange) -> String {
    let extracted = range.extract(value);
    if range.is_single() {
        format!("Bit [{:02}] = {extracted}", range.first())
    } else {
        format!(
            "Bits [{:02}:{:02}] = {extracted:04X}h (Dec. {extracted})",
            range.first(),
            range.last()
        )
    }
}

fn dump_with_header<W: Write>(
    out: &mut W,
    palette: &dyn Palette,
    value: u32,
    header: &str,
) -> io::Result<()> {
    writeln!(out, "{}", palette.paint(Style::Header, header))?;
    writeln!(out, "{}", palette.paint(Style::Value, &bit_line(value)))?;
    writeln!(out, "{}", palette.paint(Style::Hex, &hex_line(value)))
}

pub fn render_dump32<W: Write>(out: &mut W, palette: &dyn Palette, value: u32) -> io::Result<()> {
    dump_with_header(out, palette, value, LOW_HEADER)
}

/// High half first, then the low half, each once.
pub fn render_dump64<W: Write>(out: &mut W, palette: &dyn Palette, value: u64) -> io::Result<()> {
    let high = (value >> REGISTER_BITS) as u32;
    let low = value as u32;
    dump_with_header(out, palette, high, HIGH_HEADER)?;
    dump_with_header(out, palette, low, LOW_HEADER)
}

pub fn render_range_value<W: Write>(
    out: &mut W,
    palette: &dyn Palette,
    value: u32,
    range: BitRange,
) -> io::Result<()> {
    writeln!(out, "{}", palette.paint(Style::Range, &range_line(value, range)))
}
