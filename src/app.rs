use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use crossterm::event::{self, Event};

use crate::config::Config;
use crate::render::RenderState;
use crate::tea::{update, Command, Message, Model};
use crate::{blog, blog_debug, blog_trace, Result};

/// How long to wait for terminal input before re-checking shutdown.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct LogicThread;

impl LogicThread {
    /// Own the model and handle terminal events until quit or shutdown.
    ///
    /// Every event is applied to completion before the next one is read,
    /// so balance updates never interleave.
    ///
    /// `state_drain` is a clone of the render receiver, used to drop an
    /// unread snapshot so the newest one always gets through.
    pub fn run(
        config: Config,
        state_tx: Sender<RenderState>,
        state_drain: Receiver<RenderState>,
        shutdown: Arc<AtomicBool>,
    ) -> Result<()> {
        let mut model = Model::new(config);
        blog_debug!(
            "LogicThread::run currency={:?} rounding={:?}",
            model.config.currency,
            model.config.rounding
        );
        send_state(&state_tx, &state_drain, &mut model);

        while !shutdown.load(Ordering::Relaxed) {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }

            let msg = match event::read()? {
                Event::Key(key) => Message::Key(key),
                Event::Resize(w, h) => Message::Resize(w, h),
                Event::Paste(text) => Message::Paste(text),
                _ => continue,
            };

            let cmds = update(&mut model, msg);
            if execute_commands(&mut model, cmds) {
                blog!("Quit requested, balance={}", model.card.balance_display());
                shutdown.store(true, Ordering::Relaxed);
                break;
            }

            if model.dirty {
                send_state(&state_tx, &state_drain, &mut model);
            }
        }

        Ok(())
    }
}

/// Execute commands in order. Returns true when the app should quit.
pub fn execute_commands(model: &mut Model, cmds: Vec<Command>) -> bool {
    for cmd in cmds {
        match cmd {
            Command::Bell => {
                // The render thread owns stdout and rings when this counter moves
                blog_debug!("Command::Bell");
                model.bells += 1;
                model.dirty = true;
            }
            Command::Quit => {
                blog_debug!("Command::Quit");
                return true;
            }
        }
    }
    false
}

fn send_state(state_tx: &Sender<RenderState>, drain: &Receiver<RenderState>, model: &mut Model) {
    let snapshot = model.snapshot();
    blog_trace!("send_state version={}", snapshot.version);
    let _ = drain.try_recv();
    let _ = state_tx.try_send(snapshot);
    model.dirty = false;
}
