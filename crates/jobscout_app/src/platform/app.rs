use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use jobscout_core::{update, AppState, AppViewModel, Msg};
use scout_logging::{scout_debug, scout_info};

use super::effects::EffectRunner;
use super::logging;
use super::ui::constants::{HELP_TEXT, PROMPT};
use super::ui::input::{parse_line, Command};
use super::ui::render::render;
use crate::config::Config;

/// Everything the main loop reacts to.
pub(crate) enum AppEvent {
    /// A message for `update`, e.g. a finished search.
    Dispatch(Msg),
    /// A parsed line from the terminal.
    Input(Command),
    /// Standard input reached end of file or failed.
    InputClosed,
}

pub fn run_app() -> anyhow::Result<()> {
    let config = Config::from_env().context("invalid configuration")?;
    logging::initialize(config.log_destination);
    scout_info!("jobscout starting with {:?}", config);

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(config.client_settings(), event_tx.clone())
        .context("failed to start the search client")?;
    spawn_input_reader(event_tx).context("failed to start the input reader")?;

    let mut session = Session::new(runner);
    session.show(&session.state.view())?;
    session.say("Type :help for commands.")?;

    while let Ok(event) = event_rx.recv() {
        match event {
            AppEvent::Dispatch(msg) => {
                session.apply(vec![msg])?;
            }
            AppEvent::Input(Command::Dispatch(msgs)) => {
                if !session.apply(msgs)? {
                    session.prompt()?;
                }
            }
            AppEvent::Input(Command::Help) => session.say(HELP_TEXT)?,
            AppEvent::Input(Command::Unknown(line)) => {
                session.say(&format!("Unknown command: {line} (try :help)"))?
            }
            AppEvent::Input(Command::Quit) | AppEvent::InputClosed => break,
        }
    }

    scout_info!("jobscout exiting");
    Ok(())
}

fn spawn_input_reader(event_tx: mpsc::Sender<AppEvent>) -> io::Result<()> {
    thread::Builder::new()
        .name("jobscout-input".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if event_tx.send(AppEvent::Input(parse_line(&line))).is_err() {
                    return;
                }
            }
            let _ = event_tx.send(AppEvent::InputClosed);
        })?;
    Ok(())
}

/// Owns the state; the only place `update` is applied.
struct Session {
    state: AppState,
    effects: EffectRunner,
}

impl Session {
    fn new(effects: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            effects,
        }
    }

    /// Runs `msgs` through `update` in order and redraws once if anything
    /// changed. Returns whether a redraw happened.
    fn apply(&mut self, msgs: Vec<Msg>) -> io::Result<bool> {
        let mut was_dirty = false;
        for msg in msgs {
            scout_debug!("dispatch {:?}", msg);
            let state = std::mem::take(&mut self.state);
            let (mut state, effects) = update(state, msg);
            was_dirty |= state.consume_dirty();
            self.state = state;
            self.effects.enqueue(effects);
        }

        if was_dirty {
            self.show(&self.state.view())?;
        }
        Ok(was_dirty)
    }

    fn show(&self, view: &AppViewModel) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out)?;
        for line in render(view) {
            writeln!(out, "{line}")?;
        }
        write!(out, "{PROMPT}")?;
        out.flush()
    }

    fn say(&self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{text}")?;
        write!(out, "{PROMPT}")?;
        out.flush()
    }

    fn prompt(&self) -> io::Result<()> {
        let mut out = io::stdout().lock();
        write!(out, "{PROMPT}")?;
        out.flush()
    }
}
