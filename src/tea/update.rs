//! Pure update function for the TEA (The Elm Architecture) pattern.
//!
//! The update function takes a model and a message, mutates the model,
//! and returns a list of commands to execute.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{blog_debug, blog_error, blog_warn};

use super::command::Command;
use super::message::Message;
use super::model::Model;

/// Characters accepted by the amount inputs (same set as a number input).
pub fn is_amount_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

/// Pure update function: Model + Message → Commands
pub fn update(model: &mut Model, msg: Message) -> Vec<Command> {
    let mut cmds = Vec::new();

    match msg {
        Message::Key(key) => {
            if key.kind != KeyEventKind::Press {
                return cmds;
            }
            model.card.notifier_mut().dismiss(); // Any key press dismisses the toast
            model.dirty = true;
            update_key(model, key, &mut cmds);
        }

        Message::Resize(_, _) => {
            model.dirty = true;
        }

        Message::Paste(text) => {
            let op = model.focus.operation();
            let accepted: String = text.chars().filter(|c| is_amount_char(*c)).collect();
            blog_debug!(
                "Message::Paste field={:?} accepted={:?}",
                model.focus,
                accepted
            );
            model.card.input_mut(op).push_str(&accepted);
            model.dirty = true;
        }
    }

    cmds
}

fn update_key(model: &mut Model, key: KeyEvent, cmds: &mut Vec<Command>) {
    let op = model.focus.operation();

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            cmds.push(Command::Quit);
        }

        KeyCode::Esc => {
            cmds.push(Command::Quit);
        }

        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            model.focus = model.focus.next();
        }

        KeyCode::Enter => {
            // Disabled button: nothing typed yet
            if !model.card.can_submit(op) {
                return;
            }
            blog_debug!("submit field={:?} input={:?}", model.focus, model.card.input(op));
            match model.card.submit(op) {
                Ok(_) => {}
                Err(e) if e.is_rejection() => {
                    blog_warn!("{} rejected: {}", op.label(), e);
                    cmds.push(Command::Bell);
                }
                Err(e) => blog_error!("{} failed: {}", op.label(), e),
            }
        }

        KeyCode::Backspace => {
            model.card.input_mut(op).pop();
        }

        KeyCode::Char('?') => {
            model.show_keymap = !model.show_keymap;
        }

        KeyCode::Char(c) if is_amount_char(c) => {
            model.card.input_mut(op).push(c);
        }

        _ => {}
    }
}
