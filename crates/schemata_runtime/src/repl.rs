//! Interactive schema browser.

use schemata_foundation::{Error, ErrorKind, Result};

use crate::command::{Command, HELP};
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::report::{describe, issues_listing, order_listing, summary_line};
use crate::session::Session;

/// What the REPL does after a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and keep reading.
    Print(String),
    /// Stop reading.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The loaded schema.
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E, session: Session) -> Self {
        let mut repl = Self {
            editor,
            session,
            show_banner: true,
            prompt: "schema> ".to_string(),
        };
        repl.refresh_completions();
        repl
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the editor.
    #[must_use]
    pub const fn editor(&self) -> &E {
        &self.editor
    }

    /// Runs the REPL loop until `quit` or EOF.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            println!("{}", self.banner());
        }

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };
            if line.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&line);

            match self.execute(&line) {
                Ok(Outcome::Print(text)) => println!("{text}"),
                Ok(Outcome::Quit) => break,
                Err(e) => eprintln!("error: {e}"),
            }
        }
        Ok(())
    }

    /// Executes one line and returns what to print.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed commands, unknown aliases, and failed
    /// reloads.
    pub fn execute(&mut self, line: &str) -> Result<Outcome> {
        let command = Command::parse(line)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?;

        let text = match command {
            Command::Quit => return Ok(Outcome::Quit),
            Command::Help => HELP.to_string(),
            Command::Show(alias) => {
                let cst = self.session.resolve(&alias)?;
                describe(self.session.schema(), cst).trim_end().to_string()
            }
            Command::Inputs(alias) => {
                let id = self.session.resolve(&alias)?.id;
                self.listing(self.session.schema().predecessors(id))
            }
            Command::Outputs(alias) => {
                let id = self.session.resolve(&alias)?.id;
                self.listing(self.session.schema().successors(id))
            }
            Command::Spawn(alias) => {
                let id = self.session.resolve(&alias)?.id;
                let schema = self.session.schema();
                let root = schema.spawn_root(id).map_or(id, |cst| cst.id);
                let tree = schema
                    .spawn_tree(root)
                    .into_iter()
                    .filter_map(|id| schema.by_id(id))
                    .collect();
                let mut text = schema
                    .by_id(root)
                    .map(summary_line)
                    .unwrap_or_default();
                let children = self.listing(tree);
                if children != "-" {
                    text.push('\n');
                    text.push_str(&children);
                }
                text
            }
            Command::Order => order_listing(self.session.schema()),
            Command::Stats => self.session.schema().stats().to_string().trim_end().to_string(),
            Command::Issues => issues_listing(self.session.schema()),
            Command::Reload => {
                self.session.reload()?;
                self.refresh_completions();
                format!("reloaded {} constituents", self.session.schema().len())
            }
        };
        Ok(Outcome::Print(text))
    }

    /// Welcome text naming the schema.
    #[must_use]
    pub fn banner(&self) -> String {
        let schema = self.session.schema();
        format!(
            "schemata {}: {} ({} constituents). Type 'help' for commands.",
            env!("CARGO_PKG_VERSION"),
            schema.id,
            schema.len()
        )
    }

    #[allow(clippy::unused_self)]
    fn listing(&self, items: Vec<&schemata_loader::Constituent>) -> String {
        if items.is_empty() {
            return "-".to_string();
        }
        items
            .into_iter()
            .map(summary_line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn refresh_completions(&mut self) {
        let aliases = self
            .session
            .schema()
            .items()
            .map(|cst| cst.alias.to_string())
            .collect();
        self.editor.set_aliases(aliases);
    }
}
