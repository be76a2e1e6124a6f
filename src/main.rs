//! Cryoprison CLI entry point.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use console::style;
use cryoprison::cli::{Cli, CommandDispatcher};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("cryoprison=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cryoprison=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Cryoprison starting with args: {:?}", cli);

    let use_color = !cli.no_color && std::env::var_os("NO_COLOR").is_none();
    if !use_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let dispatcher = CommandDispatcher::new(cli.catalog.clone(), use_color);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let code = match dispatcher.dispatch(&cli, &mut out) {
        Ok(result) => result.exit_code as u8,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            1
        }
    };

    let _ = out.flush();
    ExitCode::from(code)
}
