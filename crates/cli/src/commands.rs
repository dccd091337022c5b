//! Clap command definition.
//!
//! Global flags select the config, target and output mode. Everything
//! after them is the command itself (`JSON.SET doc . '{"a":1}'`), passed
//! through untouched so the same parser serves shell, REPL and pipe modes.

use clap::{Arg, ArgAction, Command};

/// Build the CLI command.
pub fn build_cli() -> Command {
    Command::new("rejson")
        .about("redis-cli style shell for JSON documents")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("Config file (default: rejson.toml if present)"),
        )
        .arg(
            Arg::new("host")
                .long("host")
                .short('h')
                .value_name("HOST")
                .help("Store host (overrides config; only the default runs in-process)"),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .short('p')
                .value_name("PORT")
                .value_parser(clap::value_parser!(u16))
                .help("Store port (overrides config; only the default runs in-process)"),
        )
        .arg(
            Arg::new("db")
                .long("db")
                .short('n')
                .value_name("INDEX")
                .value_parser(clap::value_parser!(u32))
                .help("Logical database (overrides config; only 0 runs in-process)"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .conflicts_with("raw"),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .help("Raw output mode (no type prefixes, no quotes)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("More log output on stderr (repeat for more)")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("command")
                .value_name("COMMAND")
                .num_args(1..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .help("Command to run, e.g. JSON.GET doc .  (REPL when omitted)"),
        )
        .disable_help_flag(true)
        .arg(
            Arg::new("help")
                .long("help")
                .help("Print help")
                .action(ArgAction::Help),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_after_flags() {
        let m = build_cli()
            .try_get_matches_from(["rejson", "--raw", "-p", "7000", "JSON.ARRPOP", "doc", ".a", "-1"])
            .unwrap();
        assert!(m.get_flag("raw"));
        assert_eq!(m.get_one::<u16>("port"), Some(&7000));
        let cmd: Vec<&String> = m.get_many::<String>("command").unwrap().collect();
        assert_eq!(cmd, vec!["JSON.ARRPOP", "doc", ".a", "-1"]);
    }

    #[test]
    fn test_no_command_is_repl() {
        let m = build_cli().try_get_matches_from(["rejson", "-vv"]).unwrap();
        assert!(m.get_many::<String>("command").is_none());
        assert_eq!(m.get_count("verbose"), 2);
    }

    #[test]
    fn test_json_conflicts_with_raw() {
        assert!(build_cli()
            .try_get_matches_from(["rejson", "--json", "--raw"])
            .is_err());
    }
}
