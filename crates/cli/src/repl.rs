//! REPL loop with rustyline.
//!
//! Interactive mode: prompt, meta-commands, history, TAB completion.
//! Pipe mode: read lines from stdin, execute each.

use std::io::{self, BufRead};

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, Editor, Helper};

use rejson_executor::{lookup_wire, OPERATIONS};
use tracing::debug;

use crate::format::{format_error, format_output, format_query_results, OutputMode};
use crate::parse::{check_meta_command, tokens_to_action, CliAction, MetaCommand, QUERY_COMMAND};
use crate::state::SessionState;

/// Run the interactive REPL.
pub fn run_repl(state: &mut SessionState, mode: OutputMode) {
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .build();

    let mut rl: Editor<ReJsonHelper, _> = match Editor::with_config(config) {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("(error) Failed to start line editor: {}", e);
            return;
        }
    };
    rl.set_helper(Some(ReJsonHelper));

    // Load history
    let history_path = history_file();
    if let Some(ref path) = history_path {
        if let Err(e) = rl.load_history(path) {
            debug!(target: "rejson::cli", path = %path, error = %e, "History not loaded");
        }
    }

    loop {
        let prompt = state.prompt();
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                if let Err(e) = rl.add_history_entry(trimmed) {
                    debug!(target: "rejson::cli", error = %e, "History entry not recorded");
                }

                // Check meta-commands first
                if let Some(meta) = check_meta_command(trimmed) {
                    match meta {
                        MetaCommand::Quit => break,
                        MetaCommand::Clear => {
                            // ANSI clear screen
                            print!("\x1B[2J\x1B[1;1H");
                        }
                        MetaCommand::Help { command } => print_help(command.as_deref()),
                    }
                    continue;
                }

                // Tokenize with shlex (respects quotes)
                let tokens = match shlex::split(trimmed) {
                    Some(t) => t,
                    None => {
                        eprintln!("(error) Invalid quoting");
                        continue;
                    }
                };

                if tokens.is_empty() {
                    continue;
                }

                execute_tokens(&tokens, state, mode);
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C: new prompt
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D: exit
                break;
            }
            Err(err) => {
                eprintln!("(error) {:?}", err);
                break;
            }
        }
    }

    // Save history
    if let Some(ref path) = history_path {
        if let Err(e) = rl.save_history(path) {
            debug!(target: "rejson::cli", path = %path, error = %e, "History not saved");
        }
    }
}

/// Run in pipe mode: read lines from stdin, execute each.
pub fn run_pipe(state: &mut SessionState, mode: OutputMode) -> i32 {
    let stdin = io::stdin();
    let mut exit_code = 0;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let tokens = match shlex::split(trimmed) {
            Some(t) => t,
            None => {
                eprintln!("(error) Invalid quoting: {}", trimmed);
                exit_code = 1;
                continue;
            }
        };

        if tokens.is_empty() {
            continue;
        }

        if !execute_tokens(&tokens, state, mode) {
            exit_code = 1;
        }
    }

    exit_code
}

/// Parse and execute one tokenized command. Returns true on success, false on error.
pub fn execute_tokens(tokens: &[String], state: &mut SessionState, mode: OutputMode) -> bool {
    match tokens_to_action(tokens) {
        Ok(CliAction::Execute(built)) => {
            debug!(target: "rejson::cli", command = %built.wire, "Running command");
            match state.execute(built) {
                Ok(output) => {
                    let formatted = format_output(&output, mode);
                    if !formatted.is_empty() {
                        println!("{}", formatted);
                    }
                    true
                }
                Err(e) => {
                    eprintln!("{}", format_error(&e, mode));
                    false
                }
            }
        }
        Ok(CliAction::Query { key, query }) => match state.apply_query(&key, query) {
            Ok(results) => {
                println!("{}", format_query_results(&results, mode));
                results.iter().all(|r| r.is_ok())
            }
            Err(e) => {
                eprintln!("{}", format_error(&e, mode));
                false
            }
        },
        Ok(CliAction::Meta(_)) => {
            // Meta-commands are handled before reaching here
            true
        }
        Err(e) => {
            eprintln!("(error) {}", e);
            false
        }
    }
}

fn history_file() -> Option<String> {
    std::env::var("HOME")
        .ok()
        .map(|h| format!("{}/.rejson_history", h))
}

fn print_help(command: Option<&str>) {
    if let Some(cmd) = command {
        if cmd.eq_ignore_ascii_case(QUERY_COMMAND) {
            println!("{} key '<json>'", QUERY_COMMAND);
            println!("  Apply nested field updates to one document atomically.");
            println!("  Leaves are set; {{\"$set\": V}} sets V as is; {{\"$del\": true}} deletes.");
            return;
        }
        match lookup_wire(cmd) {
            Some(d) => {
                let path = match d.path {
                    rejson_executor::catalog::PathPosition::AfterKey => "key [path]",
                    rejson_executor::catalog::PathPosition::Last => "key [key ...] path",
                };
                let mut args: Vec<String> =
                    d.args.iter().map(|rule| format!("<{:?}>", rule).to_lowercase()).collect();
                if let rejson_executor::catalog::Arity::Variadic { rule, .. } = d.arity {
                    if rule != rejson_executor::catalog::ArgRule::Key {
                        args.push(format!("<{:?}> ...", rule).to_lowercase());
                    }
                }
                let wire = match d.subcommand {
                    Some(sub) => format!("{} {}", d.wire, sub),
                    None => d.wire.to_string(),
                };
                println!("{} {} {}", wire, path, args.join(" "));
            }
            None => println!("(error) unknown command '{}'", cmd),
        }
    } else {
        println!("Available commands:");
        for d in OPERATIONS {
            println!("  {}", d.wire);
        }
        println!("  {}", QUERY_COMMAND);
        println!();
        println!("Meta-commands:");
        println!("  help [command]         Show help");
        println!("  quit / exit            Exit REPL");
        println!("  clear                  Clear screen");
    }
}

// =========================================================================
// TAB Completion
// =========================================================================

const META_COMMANDS: &[&str] = &["help", "quit", "exit", "clear"];

fn command_names() -> impl Iterator<Item = &'static str> {
    OPERATIONS
        .iter()
        .map(|d| d.wire)
        .chain(std::iter::once(QUERY_COMMAND))
        .chain(META_COMMANDS.iter().copied())
}

struct ReJsonHelper;

impl Helper for ReJsonHelper {}
impl Validator for ReJsonHelper {}
impl Highlighter for ReJsonHelper {}
impl Hinter for ReJsonHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Completer for ReJsonHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_to_pos = &line[..pos];
        if line_to_pos.contains(char::is_whitespace) {
            return Ok((pos, vec![]));
        }

        let prefix = line_to_pos.to_ascii_uppercase();
        let candidates: Vec<Pair> = command_names()
            .filter(|name| name.to_ascii_uppercase().starts_with(&prefix))
            .map(|name| Pair {
                display: name.to_string(),
                replacement: name.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}
