use std::io::{self, BufRead, Write};

use crate::{
    command::Command,
    render::{render_dump32, render_range_value},
    style::{Palette, Plain, Style},
};

pub const PROMPT: &str = "# : ";
pub const HELP: &str = include_str!("help.txt");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Terminated,
}

/// The register under inspection plus everything the loop needs to drive it.
pub struct Session {
    value: u32,
    history: Vec<String>,
    palette: Box<dyn Palette>,
    state: State,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Box::new(Plain))
    }
}

impl Session {
    #[must_use]
    pub fn new(palette: Box<dyn Palette>) -> Self {
        Self {
            value: 0,
            history: Vec::new(),
            palette,
            state: State::Running,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Lines of the accepted value and range commands, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Handles one input line. Blank lines are ignored.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<State> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(self.state);
        }
        let command = Command::parse(line);
        let palette = self.palette.as_ref();
        match &command {
            Command::Quit => self.state = State::Terminated,
            Command::Help => writeln!(out, "{}", palette.paint(Style::Help, HELP.trim_end()))?,
            Command::SetValue(value) => {
                log::debug!("register {:#010X} -> {value:#010X}", self.value);
                self.value = *value;
                render_dump32(out, palette, self.value)?;
            }
            Command::QueryRange(range) => {
                log::trace!("query {range:?} of {:#010X}", self.value);
                render_range_value(out, palette, self.value, *range)?;
            }
            Command::Invalid(text) => {
                let message = format!("ERROR: Invalid input: {text}. Enter 'h' for help");
                writeln!(out, "{}", palette.paint(Style::Error, &message))?;
            }
        }
        if command.is_recorded() {
            self.history.push(line.to_string());
        }
        Ok(self.state)
    }

    /// Prompts and executes lines until a quit command or the end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> io::Result<()> {
        let mut buffer = Vec::new();
        while self.state == State::Running {
            write!(out, "{PROMPT}")?;
            out.flush()?;
            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                log::debug!("end of input");
                self.state = State::Terminated;
                break;
            }
            let line = String::from_utf8_lossy(&buffer);
            self.execute(&line, out)?;
        }
        Ok(())
    }
}
