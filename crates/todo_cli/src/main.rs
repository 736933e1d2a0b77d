//! Interactive todo list entry point.
//!
//! # Responsibility
//! - Resolve configuration, start logging and seed sample data.
//! - Hand stdin/stdout to the menu loop.

mod config;
mod menu;
mod render;

use config::CliConfig;
use log::{error, info, warn};
use menu::Menu;
use std::io;
use std::process::ExitCode;
use todo_core::TodoService;

fn main() -> ExitCode {
    let config = CliConfig::from_env();

    if let Some(raw) = &config.unknown_level {
        eprintln!(
            "warning: unknown log level `{raw}`; using {}",
            config.logging.level
        );
    }
    // Logging failures only cost diagnostics; the session still runs.
    if let Err(err) = todo_core::init_logging(&config.logging) {
        eprintln!("warning: logging disabled: {err}");
    }

    let mut service = TodoService::new();
    if config.seed_samples {
        if let Err(err) = menu::seed_samples(&mut service) {
            warn!("event=seed_samples module=cli status=error error={err}");
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(service, stdin.lock(), stdout.lock());
    match menu.run() {
        Ok(()) => {
            let summary = menu.service().summary();
            info!(
                "event=session_end module=cli status=ok total={} complete={}",
                summary.total, summary.complete
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=menu_run module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
