//! Store commands as they go over the wire

use serde::Serialize;
use std::fmt;

/// A named store command with its ordered string arguments
///
/// The name is always a `JSON.*` command from the catalog, so it is
/// `'static`. Arguments are already encoded: keys and paths verbatim,
/// JSON values as compact JSON text, integers and numbers as numerals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WireCommand {
    /// Command name, e.g. `JSON.SET`
    pub name: &'static str,
    /// Encoded arguments in wire order
    pub args: Vec<String>,
}

impl WireCommand {
    /// Create a command with no arguments.
    pub fn new(name: &'static str) -> Self {
        WireCommand {
            name,
            args: Vec::new(),
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append one argument in place.
    pub fn push_arg(&mut self, arg: impl Into<String>) {
        self.args.push(arg.into());
    }

    /// Argument at `index`, if present.
    pub fn arg_at(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }
}

impl fmt::Display for WireCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
