use crate::{error::Result, number::parse_integer, range::BitRange};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    SetValue(u32),
    QueryRange(BitRange),
    Invalid(String),
}

impl Command {
    /// Classifies one input line. Only the first character decides between
    /// the letter commands, so `quit` and `q!` both quit.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match Self::classify(line) {
            Ok(command) => command,
            Err(err) => {
                log::debug!("rejected '{line}': {err}");
                Self::Invalid(line.to_string())
            }
        }
    }

    fn classify(line: &str) -> Result<Self> {
        let mut chars = line.chars();
        match chars.next() {
            Some('q' | 'Q') => Ok(Self::Quit),
            Some('h' | 'H') => Ok(Self::Help),
            Some('r' | 'R') => BitRange::parse(chars.as_str()).map(Self::QueryRange),
            _ => parse_integer(line).map(Self::SetValue),
        }
    }

    /// Whether the line that produced this command goes into the history.
    pub fn is_recorded(&self) -> bool {
        matches!(self, Self::SetValue(_) | Self::QueryRange(_))
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::Command;
    use crate::range::BitRange;

    #[test]
    fn letter_commands() {
        assert_eq!(Command::parse("Q"), Command::Quit);
        assert_eq!(Command::parse("q"), Command::Quit);
        assert_eq!(Command::parse("quit"), Command::Quit);
        assert_eq!(Command::parse("H"), Command::Help);
        assert_eq!(Command::parse("help"), Command::Help);
    }

    #[test]
    fn set_value() {
        assert_eq!(
            Command::parse("0xBC6789FF"),
            Command::SetValue(0xBC67_89FF)
        );
        assert_eq!(Command::parse("123"), Command::SetValue(123));
        assert_eq!(Command::parse("  010 \n"), Command::SetValue(8));
        assert_eq!(
            Command::parse("4294967296"),
            Command::Invalid("4294967296".to_string())
        );
    }

    #[test]
    fn query_range() {
        assert_eq!(
            Command::parse("R4.13"),
            Command::QueryRange(BitRange::new(4, 13).unwrap())
        );
        assert_eq!(
            Command::parse("r0"),
            Command::QueryRange(BitRange::single(0).unwrap())
        );
        assert_eq!(Command::parse("R13.4"), Command::Invalid("R13.4".to_string()));
        assert_eq!(Command::parse("R"), Command::Invalid("R".to_string()));
        assert_eq!(Command::parse("R-1.5"), Command::Invalid("R-1.5".to_string()));
        assert_eq!(
            Command::parse("R+4.+13"),
            Command::QueryRange(BitRange::new(4, 13).unwrap())
        );
    }

    #[test]
    fn invalid() {
        assert_eq!(Command::parse("xyz"), Command::Invalid("xyz".to_string()));
        assert_eq!(Command::parse("12ab"), Command::Invalid("12ab".to_string()));
        assert_eq!(Command::parse("-5"), Command::Invalid("-5".to_string()));
    }

    #[test]
    fn recorded_commands() {
        assert!(Command::SetValue(1).is_recorded());
        assert!(Command::QueryRange(BitRange::single(3).unwrap()).is_recorded());
        assert!(!Command::Help.is_recorded());
        assert!(!Command::Quit.is_recorded());
        assert!(!Command::Invalid("x".to_string()).is_recorded());
    }
}
