//! cmdgram terminal host.
//!
//! Reads lines from stdin and feeds them to the dispatcher. Pass a config
//! file as the first argument or through `CMDGRAM_CONFIG`.

mod commands;
mod console;

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use cmdgram_terminal::CommandDispatcher;
use cmdgram_types::config::ShellConfig;

use console::ConsoleSink;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = load_config()?;
    let mut dispatcher =
        CommandDispatcher::new(config.prefix.clone(), ConsoleSink::from_config(&config));
    commands::register_commands(&mut dispatcher, &config)?;
    log::info!("Registered commands: {}", dispatcher.commands().join(", "));

    if let Some(cmd) = config.startup_command.as_deref().filter(|c| !c.is_empty()) {
        println!("{}{cmd}", config.prompt);
        dispatcher.dispatch(cmd);
    }

    let interactive = io::stdin().is_terminal();
    let mut stdout = io::stdout();
    let mut lines = io::stdin().lock().lines();
    loop {
        if interactive {
            write!(stdout, "{}", config.prompt)?;
            stdout.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("reading stdin")?;
        if !interactive {
            writeln!(stdout, "{}{line}", config.prompt)?;
        }
        dispatcher.dispatch(&line);
    }
    Ok(())
}

/// CLI argument, then `CMDGRAM_CONFIG`, then built-in defaults.
fn load_config() -> Result<ShellConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("CMDGRAM_CONFIG").ok())
        .map(PathBuf::from);
    match path {
        Some(path) => {
            let config = ShellConfig::load(&path)
                .with_context(|| format!("loading config {}", path.display()))?;
            log::info!("Loaded config: {}", path.display());
            Ok(config)
        },
        None => Ok(ShellConfig::default()),
    }
}
