//! Sessions, the REPL, and batch reports over real files.

use std::collections::VecDeque;
use std::path::PathBuf;

use schemata::foundation::{CstType, ErrorKind, ExpressionStatus, Result};
use schemata::loader::{CstData, LoaderConfig};
use schemata::runtime::{
    LineEditor, Outcome, ReadResult, Repl, Session, batch_report, save_schema,
};

use crate::geometry::geometry;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("schemata_it_{}_{name}", std::process::id()))
}

/// Editor that replays fixed lines and then reports end of input.
#[derive(Default)]
struct Script {
    lines: VecDeque<String>,
    history: Vec<String>,
    aliases: Vec<String>,
}

impl Script {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }
}

impl LineEditor for Script {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self
            .lines
            .pop_front()
            .map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }

    fn set_aliases(&mut self, aliases: Vec<String>) {
        self.aliases = aliases;
    }
}

fn text(outcome: Outcome) -> String {
    match outcome {
        Outcome::Print(text) => text,
        Outcome::Quit => panic!("unexpected quit"),
    }
}

// =============================================================================
// Sessions
// =============================================================================

#[test]
fn open_and_reload_from_file() {
    let path = temp_path("session.json");
    save_schema(&geometry(), &path).unwrap();

    let mut session = Session::open(&path, LoaderConfig::default()).unwrap();
    assert_eq!(session.path(), Some(path.as_path()));
    assert_eq!(session.schema().len(), 11);

    let grown = geometry().with_item(CstData::new(12, "D4", CstType::Term).with_definition("D2"));
    save_schema(&grown, &path).unwrap();
    session.reload().unwrap();
    assert_eq!(session.schema().len(), 12);
    assert_eq!(
        session.resolve("D4").unwrap().spawner_alias.as_ref().map(|a| a.as_str()),
        Some("F1")
    );

    let _ = std::fs::remove_file(&path);
}

#[test]
fn failed_reload_keeps_previous_snapshot() {
    let path = temp_path("strict.json");
    save_schema(&geometry(), &path).unwrap();
    let mut session = Session::open(&path, LoaderConfig::strict()).unwrap();

    let broken = geometry().with_item(CstData::new(1, "X2", CstType::Base));
    save_schema(&broken, &path).unwrap();
    let error = session.reload().unwrap_err();
    assert!(matches!(error.kind, ErrorKind::Integrity(_)));
    assert_eq!(session.schema().len(), 11);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn lenient_session_skips_verification() {
    let session = Session::from_data(&geometry(), LoaderConfig::lenient()).unwrap();
    let schema = session.schema();
    assert_eq!(schema.by_alias("D1").unwrap().status, ExpressionStatus::Undefined);
    assert_eq!(schema.by_alias("N1").unwrap().status, ExpressionStatus::Unknown);
    assert!(schema.by_alias("D1").unwrap().analysis.is_none());
    // Inference does not depend on verification.
    assert!(schema.by_alias("D2").unwrap().spawner.is_some());
}

#[test]
fn missing_file_is_an_io_error() {
    let error = Session::open(temp_path("absent.json"), LoaderConfig::default())
        .err()
        .unwrap();
    assert!(matches!(error.kind, ErrorKind::IoError(_)));
}

// =============================================================================
// REPL
// =============================================================================

#[test]
fn repl_browses_the_schema() {
    let session = Session::from_data(&geometry(), LoaderConfig::default()).unwrap();
    let mut repl = Repl::with_editor(Script::new(&[]), session).without_banner();
    assert_eq!(repl.editor().aliases.len(), 11);

    let shown = text(repl.execute("show F1").unwrap());
    assert!(shown.starts_with("F1 (function, derived)"));
    assert!(shown.contains("spawn:       D2, D3"));
    assert!(shown.contains("convention:  complement"));

    let spawned = text(repl.execute("spawn D3").unwrap());
    let heads: Vec<&str> = spawned
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(heads, vec!["F1", "D2", "D3"]);

    let outputs = text(repl.execute("outputs X1").unwrap());
    assert!(outputs.lines().count() >= 3);

    let order = text(repl.execute("order").unwrap());
    assert_eq!(order.split(", ").count(), 11);
}

#[test]
fn repl_run_records_history() {
    let session = Session::from_data(&geometry(), LoaderConfig::default()).unwrap();
    let script = Script::new(&["stats", "show Z9", "issues", "quit", "order"]);
    let mut repl = Repl::with_editor(script, session).without_banner();
    repl.run().unwrap();
    assert_eq!(repl.editor().history, vec!["stats", "show Z9", "issues", "quit"]);
    assert_eq!(repl.editor().lines.len(), 1);
}

// =============================================================================
// Batch report
// =============================================================================

#[test]
fn batch_report_lists_everything_in_order() {
    let session = Session::from_data(&geometry(), LoaderConfig::default()).unwrap();
    let report = batch_report(session.schema());
    let mut lines = report.lines();
    assert_eq!(lines.next(), Some("Incidence geometry (schema 7)"));
    assert_eq!(lines.next(), Some("version v3"));
    assert!(report.contains("constituents: 11"));
    assert!(report.contains("no integrity issues"));

    let x1 = report.find("\nX1 ").unwrap();
    let d1 = report.find("\nD1 ").unwrap();
    assert!(x1 < d1);
}
