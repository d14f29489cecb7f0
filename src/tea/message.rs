//! Messages for the TEA (The Elm Architecture) pattern.
//!
//! Messages are inputs to the update function. The banking card only
//! reacts to the terminal, so every message comes from crossterm.

use crossterm::event::KeyEvent;

/// Input messages to the update function.
#[derive(Debug)]
pub enum Message {
    Key(KeyEvent),
    Resize(u16, u16),
    /// Bracketed paste into the focused field
    Paste(String),
}
