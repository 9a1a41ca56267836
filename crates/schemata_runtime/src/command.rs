//! REPL command parsing.

use thiserror::Error;

/// A parsed REPL command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Describe one constituent.
    Show(String),
    /// List aliases in dependency order.
    Order,
    /// List what a constituent references.
    Inputs(String),
    /// List what references a constituent.
    Outputs(String),
    /// Show the spawner chain root and everything spawned from it.
    Spawn(String),
    /// Print statistics.
    Stats,
    /// Print integrity issues.
    Issues,
    /// Re-read the schema file.
    Reload,
    /// Print the command list.
    Help,
    /// Leave the REPL.
    Quit,
}

/// Why a line could not be parsed as a command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The first word is not a command.
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    /// The command needs an alias.
    #[error("'{0}' expects an alias")]
    MissingAlias(&'static str),
    /// The command got more words than it takes.
    #[error("'{0}' takes no further arguments")]
    TrailingInput(&'static str),
}

/// Command names, for completion.
pub const COMMAND_NAMES: [&str; 10] = [
    "show", "order", "inputs", "outputs", "spawn", "stats", "issues", "reload", "help", "quit",
];

impl Command {
    /// Parses one input line.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown commands and wrong argument counts.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Unknown(String::new()));
        };
        let argument = words.next();
        let extra = words.next().is_some();

        let with_alias = |name: &'static str, build: fn(String) -> Self| match (argument, extra) {
            (None, _) => Err(CommandError::MissingAlias(name)),
            (Some(_), true) => Err(CommandError::TrailingInput(name)),
            (Some(alias), false) => Ok(build(alias.to_string())),
        };
        let bare = |name: &'static str, command: Self| {
            if argument.is_some() {
                Err(CommandError::TrailingInput(name))
            } else {
                Ok(command)
            }
        };

        match head.to_ascii_lowercase().as_str() {
            "show" | "s" => with_alias("show", Self::Show),
            "inputs" | "in" => with_alias("inputs", Self::Inputs),
            "outputs" | "out" => with_alias("outputs", Self::Outputs),
            "spawn" => with_alias("spawn", Self::Spawn),
            "order" => bare("order", Self::Order),
            "stats" => bare("stats", Self::Stats),
            "issues" => bare("issues", Self::Issues),
            "reload" => bare("reload", Self::Reload),
            "help" | "?" => bare("help", Self::Help),
            "quit" | "exit" | "q" => bare("quit", Self::Quit),
            _ => Err(CommandError::Unknown(head.to_string())),
        }
    }
}

/// Text printed by `help`.
pub const HELP: &str = "\
commands:
  show ALIAS      describe a constituent
  inputs ALIAS    constituents ALIAS references
  outputs ALIAS   constituents referencing ALIAS
  spawn ALIAS     template origin and everything spawned from it
  order           aliases in dependency order
  stats           schema statistics
  issues          duplicate ids and aliases
  reload          re-read the schema file
  help            this text
  quit            leave";
