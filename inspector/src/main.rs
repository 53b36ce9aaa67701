use std::io::{self, IsTerminal, Write};

use bitdump_register::{
    render::{render_dump32, render_dump64, render_range_value},
    style::{Ansi, Palette, Plain},
    BitRange, Session,
};
use gumdrop::Options;
use log::LevelFilter;
use simple_logger::SimpleLogger;

mod utils;

#[derive(Options)]
struct MyOptions {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "log level (off, error, warn, info, debug, trace)", default = "warn")]
    log_level: LevelFilter,

    #[options(help = "never color the output")]
    no_color: bool,

    #[options(help = "dump the given values as 64-bit numbers")]
    wide: bool,

    #[options(
        help = "also print bits range <X[.Y]> of the given values",
        parse(try_from_str = "utils::parse_range")
    )]
    range: Option<BitRange>,

    #[options(
        free,
        help = "values to dump instead of starting the prompt",
        parse(try_from_str = "utils::parse_value")
    )]
    values: Vec<u64>,
}

fn one_shot<W: Write>(
    out: &mut W,
    palette: &dyn Palette,
    values: &[u64],
    wide: bool,
    range: Option<BitRange>,
) -> io::Result<()> {
    for &value in values {
        match u32::try_from(value) {
            Ok(narrow) if !wide => render_dump32(out, palette, narrow)?,
            Ok(_) => render_dump64(out, palette, value)?,
            Err(_) => {
                if !wide {
                    log::warn!("{value:#X} does not fit in 32 bits, dumping as 64 bits");
                }
                render_dump64(out, palette, value)?;
            }
        }
        let Some(range) = range else {
            continue;
        };
        match u32::try_from(value) {
            Ok(narrow) => render_range_value(out, palette, narrow, range)?,
            Err(_) => log::warn!("{value:#X} is wider than 32 bits, no bits range shown"),
        }
    }
    Ok(())
}

fn interactive(palette: Box<dyn Palette>) -> io::Result<()> {
    let mut out = io::stdout().lock();
    utils::write_banner(&mut out)?;
    let mut session = Session::new(palette);
    session.run(io::stdin().lock(), &mut out)?;
    log::debug!("{} commands in history", session.history().len());
    Ok(())
}

fn main() {
    let MyOptions {
        log_level,
        no_color,
        wide,
        range,
        values,
        ..
    } = Options::parse_args_default_or_exit();

    SimpleLogger::new()
        .without_timestamps()
        .with_level(log_level)
        .init()
        .expect("logger is initialized once");

    let palette: Box<dyn Palette> = if no_color || !io::stdout().is_terminal() {
        Box::new(Plain)
    } else {
        Box::new(Ansi)
    };
    log::debug!("wide: {wide}, range: {range:?}, values: {values:X?}");

    let result = if values.is_empty() {
        interactive(palette)
    } else {
        one_shot(&mut io::stdout().lock(), palette.as_ref(), &values, wide, range)
    };
    if let Err(err) = result {
        log::error!("{err}");
    }
}

#[cfg(test)]
mod test {
    use bitdump_register::{
        render::{bit_line, hex_line, HIGH_HEADER, LOW_HEADER},
        style::Plain,
        BitRange,
    };
    use pretty_assertions::assert_eq;

    use super::one_shot;

    fn run(values: &[u64], wide: bool, range: Option<BitRange>) -> Vec<String> {
        let mut out = Vec::new();
        one_shot(&mut out, &Plain, values, wide, range).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn dumps_each_value() {
        let lines = run(&[1, 0xBC67_89FF], false, None);
        assert_eq!(
            lines,
            vec![
                LOW_HEADER.to_string(),
                bit_line(1),
                hex_line(1),
                LOW_HEADER.to_string(),
                bit_line(0xBC67_89FF),
                hex_line(0xBC67_89FF),
            ]
        );
    }

    #[test]
    fn wide_values_use_both_halves() {
        let lines = run(&[0x1_0000_0002], true, BitRange::parse("1").ok());
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], HIGH_HEADER);
        assert_eq!(lines[2], hex_line(1));
        assert_eq!(lines[5], hex_line(2));
    }

    #[test]
    fn too_wide_values_fall_back_to_64_bits() {
        let lines = run(&[0xAB_0000_00CD, 5], false, None);
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], HIGH_HEADER);
        assert_eq!(lines[2], hex_line(0xAB));
        assert_eq!(lines[3], LOW_HEADER);
        assert_eq!(lines[5], hex_line(0xCD));
        assert_eq!(lines[6], LOW_HEADER);
        assert_eq!(lines[8], hex_line(5));
    }

    #[test]
    fn range_follows_dump() {
        let lines = run(&[0xBC67_89FF], false, BitRange::parse("4.13").ok());
        assert_eq!(lines.last().unwrap(), "Bits [04:13] = 009Fh (Dec. 159)");
    }
}
