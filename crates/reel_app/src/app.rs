use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use engine_logging::{engine_info, engine_warn, set_dispatch};
use reel_core::{update, AppState, AppViewModel, CoreSettings, Msg};
use reel_engine::{ConfigError, EngineError, GatewayConfig};

use crate::commands::{self, Command, HELP};
use crate::effects::EffectRunner;
use crate::render;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("failed to start input reader: {0}")]
    Io(#[from] io::Error),
}

enum AppEvent {
    Msg(Msg),
    Line(String),
    InputClosed,
}

pub fn run_app() -> Result<(), AppError> {
    let config = GatewayConfig::from_env()?;
    engine_info!("starting against {}", config.base_url);

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();

    let engine_tx = event_tx.clone();
    let runner = EffectRunner::new(config, move |msg| {
        let _ = engine_tx.send(AppEvent::Msg(msg));
    })?;
    spawn_input_reader(event_tx)?;

    println!("{HELP}");
    let mut handler = AppEventHandler::new(runner, CoreSettings::default());
    handler.dispatch_msg(Msg::ListMounted);

    while let Ok(event) = event_rx.recv() {
        match event {
            AppEvent::Msg(msg) => handler.dispatch_msg(msg),
            AppEvent::Line(line) => {
                if !handler.handle_line(&line) {
                    break;
                }
            }
            AppEvent::InputClosed => break,
        }
    }

    handler.dispatch_msg(Msg::Teardown);
    engine_info!("session ended");
    Ok(())
}

fn spawn_input_reader(event_tx: mpsc::Sender<AppEvent>) -> io::Result<()> {
    thread::Builder::new()
        .name("reel-input".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if event_tx.send(AppEvent::Line(line)).is_err() {
                    return;
                }
            }
            let _ = event_tx.send(AppEvent::InputClosed);
        })?;
    Ok(())
}

struct AppEventHandler {
    state: AppState,
    runner: EffectRunner,
    dispatch: u64,
}

impl AppEventHandler {
    fn new(runner: EffectRunner, settings: CoreSettings) -> Self {
        Self {
            state: AppState::with_settings(settings),
            runner,
            dispatch: 0,
        }
    }

    /// Returns false once the user asked to quit.
    fn handle_line(&mut self, line: &str) -> bool {
        let command = match commands::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return true,
            Err(err) => {
                println!("{err}");
                return true;
            }
        };
        match command {
            Command::Quit => return false,
            Command::Help => println!("{HELP}"),
            command => match command.into_msgs(&self.view()) {
                Ok(msgs) => msgs.into_iter().for_each(|msg| self.dispatch_msg(msg)),
                Err(err) => println!("{err}"),
            },
        }
        true
    }

    fn view(&self) -> AppViewModel {
        self.state.view()
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        self.dispatch += 1;
        set_dispatch(self.dispatch);

        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.runner.enqueue(effects);

        if was_dirty {
            self.render();
        }
    }

    fn render(&self) {
        let mut stdout = io::stdout().lock();
        if let Err(err) = writeln!(stdout, "\n{}", render::render(&self.state.view())) {
            engine_warn!("failed to write screen: {}", err);
        }
    }
}
