use std::io::{self, Write};

use bitdump_register::{number::parse_integer, BitRange};

pub fn parse_value(value: &str) -> Result<u64, String> {
    parse_integer(value).map_err(|e| e.to_string())
}

pub fn parse_range(range: &str) -> Result<BitRange, String> {
    BitRange::parse(range).map_err(|e| e.to_string())
}

pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )?;
    writeln!(out, "Please send bug report to {}", env!("CARGO_PKG_AUTHORS"))?;
    writeln!(out, "Use 'q' for quit and 'h' for help")
}

#[cfg(test)]
mod test {
    use bitdump_register::BitRange;
    use pretty_assertions::assert_eq;

    use super::{parse_range, parse_value, write_banner};

    #[test]
    fn option_values() {
        assert_eq!(parse_value("0x1_0000"), Err("invalid number '0x1_0000'".to_string()));
        assert_eq!(parse_value("0xFFFFFFFFFF"), Ok(0xFF_FFFF_FFFF));
        assert_eq!(parse_range("4.13"), Ok(BitRange::new(4, 13).unwrap()));
        assert!(parse_range("13.4").is_err());
    }

    #[test]
    fn banner() {
        let mut out = Vec::new();
        write_banner(&mut out).unwrap();
        let banner = String::from_utf8(out).unwrap();
        assert!(banner.starts_with(&format!("bitdump {}\n", env!("CARGO_PKG_VERSION"))));
        assert!(banner.ends_with("Use 'q' for quit and 'h' for help\n"));
    }
}
