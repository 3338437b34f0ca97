//! AutoCVar Shell
//!
//! A line-oriented console over the global CVar registry.
//!
//! ```text
//! cvar-shell [cvars.toml]
//! ```
//!
//! The optional file is applied after the shell's CVars are registered. Each
//! input line is a console command (`<name>` or `<name> <value>`); a line
//! starting with `?` lists the names matching the rest of the line. `quit`
//! or end of input exits.

mod cvars;

use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

use autocvar_core::{commands, config};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Logs go to stderr so replies on stdout stay clean
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .try_init();

    cvars::register_all();
    tracing::info!("{} CVars registered", autocvar_core::registry().len());

    if let Some(path) = std::env::args().nth(1) {
        if let Err(err) = config::load_file(&path) {
            tracing::error!("Failed to load {}: {}", path, err);
            return ExitCode::FAILURE;
        }
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("Console I/O failed: {}", err);
            ExitCode::FAILURE
        }
    }
}

/// Read commands from stdin until `quit` or end of input
fn run() -> io::Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = io::stdout().lock();
    let mut lines = stdin.lock().lines();

    loop {
        if interactive {
            write!(stdout, "] ")?;
            stdout.flush()?;
        }

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") {
            return Ok(());
        }

        if let Some(prefix) = line.strip_prefix('?') {
            for name in commands::complete(prefix.trim()) {
                writeln!(stdout, "  {}", name)?;
            }
            continue;
        }

        match commands::execute(line) {
            Ok(reply) => writeln!(stdout, "{}", reply)?,
            Err(err) => writeln!(stdout, "{}", err)?,
        }
    }
}
