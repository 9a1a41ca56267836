//! Schemata CLI entry point.

use schemata_loader::LoaderConfig;
use schemata_runtime::{Repl, Session, batch_report, init_logging, save_snapshot};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    file: Option<PathBuf>,
    output: Option<PathBuf>,
    log: Option<String>,
    batch_mode: bool,
    strict: bool,
    lenient: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();
    let mut args = args.into_iter().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--strict" => config.strict = true,
            "--lenient" => config.lenient = true,
            "-o" | "--output" => {
                let path = args.next().ok_or("--output requires a path")?;
                config.output = Some(PathBuf::from(path));
            }
            "--log" => {
                config.log = Some(args.next().ok_or("--log requires a filter")?);
            }
            flag if flag.starts_with('-') => {
                return Err(format!("unknown option: {flag}").into());
            }
            path => {
                if config.file.is_some() {
                    return Err(format!("unexpected argument: {path}").into());
                }
                config.file = Some(PathBuf::from(path));
            }
        }
    }

    if config.strict && config.lenient {
        return Err("--strict and --lenient cannot be combined".into());
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("schemata {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(config.log.as_deref());

    let Some(file) = &config.file else {
        return Err("no schema file given (see --help)".into());
    };

    let loader_config = if config.strict {
        LoaderConfig::strict()
    } else if config.lenient {
        LoaderConfig::lenient()
    } else {
        LoaderConfig::default()
    };
    let session = Session::open(file, loader_config)?;

    if let Some(output) = &config.output {
        save_snapshot(session.schema(), output)?;
    }

    if config.batch_mode {
        print!("{}", batch_report(session.schema()));
        return Ok(());
    }

    // Nothing to browse when the snapshot was only exported.
    if config.output.is_some() {
        return Ok(());
    }

    Repl::new(session)?.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mSchemata\x1b[0m - Semantic loader for concept schemas

\x1b[1mUSAGE:\x1b[0m
    schemata [OPTIONS] FILE

\x1b[1mARGUMENTS:\x1b[0m
    FILE    Schema file (.json, or .msgpack/.mp for MessagePack)

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    -b, --batch          Print a report and exit (no REPL)
    -o, --output PATH    Write the loaded snapshot to PATH
    --strict             Refuse schemas with duplicate ids or aliases
    --lenient            Skip expression verification
    --log FILTER         Log filter (overridden by RUST_LOG)

\x1b[1mEXAMPLES:\x1b[0m
    schemata schema.json                  Load and browse interactively
    schemata -b schema.json               Print a report and exit
    schemata schema.json -o loaded.json   Export the loaded snapshot
    schemata --log debug -b schema.mp     Report with debug logging

\x1b[1mREPL COMMANDS:\x1b[0m
    show, inputs, outputs, spawn ALIAS
    order, stats, issues, reload, help, quit
    Ctrl+D               Exit REPL"
    );
}
