use colored::Colorize;

/// Semantic role of a piece of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Header,
    Value,
    Hex,
    Range,
    Help,
    Error,
}

pub trait Palette {
    fn paint(&self, style: Style, text: &str) -> String;
}

/// Leaves text untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct Plain;

impl Palette for Plain {
    fn paint(&self, _style: Style, text: &str) -> String {
        text.to_string()
    }
}

/// Terminal colours.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ansi;

impl Palette for Ansi {
    fn paint(&self, style: Style, text: &str) -> String {
        match style {
            Style::Header | Style::Range => text.red(),
            Style::Value => text.yellow(),
            Style::Hex => text.magenta(),
            Style::Help | Style::Error => text.cyan().bold(),
        }
        .to_string()
    }
}
