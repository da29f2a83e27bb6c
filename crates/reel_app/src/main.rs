mod app;
mod commands;
mod effects;
mod logging;
mod render;

use std::process::ExitCode;

fn main() -> ExitCode {
    logging::initialize_from_env();

    match app::run_app() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("reel stopped: {err}");
            eprintln!("reel: {err}");
            ExitCode::FAILURE
        }
    }
}
