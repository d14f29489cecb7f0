use std::io::{self, stdout, Stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use crossbeam_channel::{Receiver, TryRecvError};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};

use bankcard::app::LogicThread;
use bankcard::config::Config;
use bankcard::core::RoundingPolicy;
use bankcard::render::RenderState;
use bankcard::{blog, ui, Result};

const FRAME_DURATION: Duration = Duration::from_micros(16_666); // 60fps

/// Bankcard - a deposit / withdraw banking card in your terminal
#[derive(Parser, Debug)]
#[command(name = "bankcard")]
#[command(version, about, long_about = None)]
#[command(
    after_help = "ENVIRONMENT:\n    BANKCARD_DEBUG=1     Enable debug logging (alternative to --debug)"
)]
pub struct Cli {
    /// Enable debug logging (writes to ~/.bankcard/bankcard.log)
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Currency symbol shown before amounts (overrides the config file)
    #[arg(long)]
    pub currency: Option<String>,

    /// Round amounts to whole cents before validating them
    #[arg(long)]
    pub round_cents: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the effective configuration as TOML
    Config {
        /// Also save it to ~/.bankcard/bankcard.toml
        #[arg(long)]
        write: bool,
    },
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    fn apply(&self, config: &mut Config) {
        if let Some(ref currency) = self.currency {
            config.currency = currency.clone();
        }
        if self.round_cents {
            config.rounding = RoundingPolicy::Cents;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load()?;
    cli.apply(&mut config);
    bankcard::log::init(config.log_level, cli.debug);

    if let Some(Command::Config { write }) = cli.command {
        return run_config(&config, write);
    }

    if bankcard::log::is_debug() {
        blog!("Bankcard starting (debug mode enabled)");
    } else {
        blog!("Bankcard starting");
    }

    let shutdown = Arc::new(AtomicBool::new(false));
    let (state_tx, state_rx) = crossbeam_channel::bounded::<RenderState>(1);

    let shutdown_clone = shutdown.clone();
    let state_drain = state_rx.clone();
    let logic_handle =
        thread::spawn(move || LogicThread::run(config, state_tx, state_drain, shutdown_clone));

    let mut terminal = setup_terminal()?;
    let result = render_loop(&mut terminal, state_rx, &shutdown);

    shutdown.store(true, Ordering::SeqCst);
    let logic_result = logic_handle.join();
    restore_terminal(&mut terminal)?;
    blog!("Bankcard stopped");

    result?;
    match logic_result {
        Ok(inner) => inner,
        Err(_) => Err(io::Error::other("logic thread panicked").into()),
    }
}

fn run_config(config: &Config, write: bool) -> Result<()> {
    print!("{}", config.to_toml()?);
    if write {
        let path = config.save()?;
        println!("\nSaved to {}", path.display());
    }
    Ok(())
}

fn render_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state_rx: Receiver<RenderState>,
    shutdown: &AtomicBool,
) -> Result<()> {
    let mut state = RenderState::default();
    let mut last_version: u64 = 0;
    let mut last_frame = Instant::now();
    let mut dirty = true;

    loop {
        if shutdown.load(Ordering::Relaxed) {
            break;
        }

        match state_rx.try_recv() {
            Ok(s) => {
                dirty = dirty || s.version != last_version;
                if s.bells > state.bells {
                    ring_bell(terminal)?;
                }
                state = s;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => break,
        }

        if last_frame.elapsed() < FRAME_DURATION {
            thread::sleep(Duration::from_micros(500));
            continue;
        }
        last_frame = Instant::now();

        if dirty {
            terminal.draw(|f| ui::draw(f, &state))?;
            last_version = state.version;
            dirty = false;
        }
    }
    Ok(())
}

fn ring_bell(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    let backend = terminal.backend_mut();
    backend.write_all(b"\x07")?;
    Ok(backend.flush()?)
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, EnableBracketedPaste)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    terminal.show_cursor()?;
    execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen)?;
    Ok(disable_raw_mode()?)
}
