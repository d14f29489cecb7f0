//! The Elm Architecture (TEA) implementation for the banking card TUI.
//!
//! - `Model`: the banking card plus focus and UI toggles
//! - `Message`: terminal input
//! - `Command`: side effects requested by the update function
//! - `update`: pure function that transforms state

pub mod command;
pub mod message;
pub mod model;
pub mod update;

pub use command::Command;
pub use message::Message;
pub use model::{Field, Model};
pub use update::update;
