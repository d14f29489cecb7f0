//! Commands for the TEA (The Elm Architecture) pattern.
//!
//! Commands are outputs from the update function - side effects for the
//! runtime to execute.

/// Output commands from the update function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Ring the terminal bell after a rejected operation
    Bell,

    // App lifecycle
    Quit,
}
