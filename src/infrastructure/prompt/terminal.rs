//! Terminal prompter
//!
//! Uses `dialoguer` when stdin is a terminal, and falls back to reading a
//! single line when input is piped (scripts, CI).

use std::cell::RefCell;
use std::io::{self, BufRead, Write};

use dialoguer::Input;
use is_terminal::IsTerminal;

use crate::domain::ports::Prompter;
use crate::error::{SamvarsError, SamvarsResult};

/// Prompter bound to the process's stdin/stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&self, message: &str) -> SamvarsResult<String> {
        if io::stdin().is_terminal() {
            return Input::<String>::new()
                .with_prompt(message)
                .allow_empty(true)
                .interact_text()
                .map_err(|e| SamvarsError::Prompt(e.to_string()));
        }

        let stdin = io::stdin();
        LinePrompter::new(stdin.lock(), io::stdout()).ask(message)
    }
}

/// Prints `message: ` and reads one line; EOF yields an empty answer.
pub struct LinePrompter<R, W> {
    io: RefCell<(R, W)>,
}

impl<R, W> LinePrompter<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            io: RefCell::new((reader, writer)),
        }
    }
}

impl<R, W> Prompter for LinePrompter<R, W>
where
    R: BufRead,
    W: Write,
{
    fn ask(&self, message: &str) -> SamvarsResult<String> {
        let mut io = self.io.borrow_mut();
        let (reader, writer) = &mut *io;

        write!(writer, "{}: ", message)?;
        writer.flush()?;

        let mut answer = String::new();
        reader.read_line(&mut answer)?;
        Ok(answer.trim_end_matches(['\r', '\n']).to_string())
    }
}
