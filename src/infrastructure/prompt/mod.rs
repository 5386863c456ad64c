//! Interactive prompt implementations

mod terminal;

pub use terminal::{LinePrompter, TerminalPrompter};
