//! Token → command/query/meta-command conversion.
//!
//! A line is tokenized with shlex, then:
//! - REPL meta-commands → `CliAction::Meta`
//! - `QUERY key '<json>'` → `CliAction::Query`
//! - `JSON.*` wire commands → `CliAction::Execute(BuiltCommand)`, built
//!   through the catalog so arity and argument kinds are checked before
//!   anything runs

use rejson_executor::catalog::{ArgRule, Arity, PathPosition};
use rejson_executor::{build_with, lookup_wire, BuiltCommand, JsonPath, JsonValue, Param};

use crate::value::{parse_json_value, parse_value};

/// Name of the composite query command.
pub const QUERY_COMMAND: &str = "QUERY";

/// The result of parsing user input.
#[derive(Debug)]
pub enum CliAction {
    /// A built command to execute.
    Execute(BuiltCommand),
    /// A composite query on one document.
    Query { key: String, query: JsonValue },
    /// A REPL-only meta-command.
    Meta(MetaCommand),
}

/// REPL meta-commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaCommand {
    Help { command: Option<String> },
    Quit,
    Clear,
}

/// Check for REPL meta-commands.
///
/// Returns `Some(MetaCommand)` if the line is a meta-command, `None` otherwise.
pub fn check_meta_command(line: &str) -> Option<MetaCommand> {
    let trimmed = line.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next()?;

    match cmd.to_ascii_lowercase().as_str() {
        "quit" | "exit" => Some(MetaCommand::Quit),
        "clear" => Some(MetaCommand::Clear),
        "help" => {
            let command = parts
                .next()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty());
            Some(MetaCommand::Help { command })
        }
        _ => None,
    }
}

/// Convert a tokenized line into a CliAction.
pub fn tokens_to_action(tokens: &[String]) -> Result<CliAction, String> {
    let (name, args) = tokens
        .split_first()
        .ok_or_else(|| "No command provided".to_string())?;

    if name.eq_ignore_ascii_case(QUERY_COMMAND) {
        return parse_query(args);
    }

    let descriptor =
        lookup_wire(name).ok_or_else(|| format!("unknown command '{}'", name))?;
    let args = match descriptor.subcommand {
        Some(sub) => match args.split_first() {
            Some((token, rest)) if token.eq_ignore_ascii_case(sub) => rest,
            _ => return Err(format!("{} expects the {} subcommand", descriptor.wire, sub)),
        },
        None => args,
    };
    let (key, rest) = args
        .split_first()
        .ok_or_else(|| format!("wrong number of arguments for '{}' command", descriptor.wire))?;

    let (path, params) = match descriptor.path {
        PathPosition::Last => match rest.split_last() {
            Some((path, keys)) => (JsonPath::new(path.as_str()), keys),
            None => {
                return Err(format!(
                    "wrong number of arguments for '{}' command",
                    descriptor.wire
                ))
            }
        },
        PathPosition::AfterKey => match rest.split_first() {
            Some((path, params)) => (JsonPath::new(path.as_str()), params),
            // The path may be left out when nothing follows it
            None => (JsonPath::root(), rest),
        },
    };

    let extra_rule = match descriptor.arity {
        Arity::Variadic { rule, .. } => Some(rule),
        Arity::Fixed => None,
    };
    let params = params
        .iter()
        .enumerate()
        .map(|(i, token)| {
            let rule = descriptor.args.get(i).copied().or(extra_rule);
            to_param(rule, token)
        })
        .collect();

    build_with(descriptor, key, &path, params)
        .map(CliAction::Execute)
        .map_err(|e| e.to_string())
}

fn to_param(rule: Option<ArgRule>, token: &str) -> Param {
    match rule {
        Some(ArgRule::Key) => Param::key(token),
        _ => Param::Json(parse_value(token)),
    }
}

fn parse_query(args: &[String]) -> Result<CliAction, String> {
    match args {
        [key, query] => Ok(CliAction::Query {
            key: key.clone(),
            query: parse_json_value(query)?,
        }),
        _ => Err(format!("usage: {} key '<json>'", QUERY_COMMAND)),
    }
}
