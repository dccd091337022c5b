//! rejson CLI: redis-cli style shell for JSON documents.
//!
//! Three modes:
//! - **Shell mode**: `rejson [flags] COMMAND ARGS...`: single command, exit
//! - **REPL mode**: `rejson [flags]`: interactive prompt (if stdin is TTY)
//! - **Pipe mode**: `echo "JSON.GET doc ." | rejson`: line-by-line from stdin
//!
//! Commands run against the in-process reference store, so a session
//! starts empty. A config or flags naming any other target are refused.

mod commands;
mod format;
mod parse;
mod repl;
mod state;
mod value;

use std::io::IsTerminal;
use std::path::Path;
use std::process;

use rejson_executor::{ClientConfig, CONFIG_FILE_NAME};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::OutputMode;
use state::SessionState;

fn main() {
    let matches = build_cli().get_matches();

    init_logging(matches.get_count("verbose"));

    // Determine output mode
    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else if matches.get_flag("raw") {
        OutputMode::Raw
    } else {
        OutputMode::Human
    };

    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let mut state = match SessionState::new(config) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("{}", format::format_error(&e, output_mode));
            process::exit(1);
        }
    };
    info!(target: "rejson::cli", store = "memory", "Session started");

    // Dispatch mode
    if let Some(command) = matches.get_many::<String>("command") {
        // Shell mode: parse, execute, format, exit
        let tokens: Vec<String> = command.cloned().collect();
        let ok = repl::execute_tokens(&tokens, &mut state, output_mode);
        process::exit(if ok { 0 } else { 1 });
    } else if std::io::stdin().is_terminal() {
        // REPL mode
        repl::run_repl(&mut state, output_mode);
    } else {
        // Pipe mode
        let exit_code = repl::run_pipe(&mut state, output_mode);
        process::exit(exit_code);
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rejson={}", default_level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

/// Config from `--config`, else `rejson.toml` when present, else defaults;
/// then `--host/--port/--db` on top.
fn load_config(matches: &clap::ArgMatches) -> Result<ClientConfig, String> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => ClientConfig::load(Path::new(path)).map_err(|e| e.to_string())?,
        None if Path::new(CONFIG_FILE_NAME).exists() => {
            debug!(target: "rejson::cli", path = CONFIG_FILE_NAME, "Loading config");
            ClientConfig::load(Path::new(CONFIG_FILE_NAME)).map_err(|e| e.to_string())?
        }
        None => ClientConfig::default(),
    };

    if let Some(host) = matches.get_one::<String>("host") {
        config.host = host.clone();
    }
    if let Some(port) = matches.get_one::<u16>("port") {
        config.port = *port;
    }
    if let Some(db) = matches.get_one::<u32>("db") {
        config.db = *db;
    }
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}
