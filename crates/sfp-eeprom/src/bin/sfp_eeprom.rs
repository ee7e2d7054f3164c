//! Command-line front end for the SFP EEPROM editor.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use sfp_buffers::hex_dump;
use sfp_eeprom::{verify, AddressSpace, EditSession, EditsFile, SessionOutcome};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "sfp-eeprom",
    version,
    about = "Inspect and edit SFP EEPROM images exported as begin-base64 envelopes",
    after_help = "Examples:\n  sfp-eeprom show a2.txt\n  sfp-eeprom set a0.txt --field \"Vendor OUI=001122\" -o a0.new.txt\n  sfp-eeprom layout A2 --json"
)]
struct Cli {
    /// Log decode/encode details to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every field of an envelope.
    Show {
        /// Envelope file, or `-` for stdin.
        input: PathBuf,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Verify the check codes of an envelope.
    Check {
        /// Envelope file, or `-` for stdin.
        input: PathBuf,
    },
    /// Edit fields and re-encode the envelope.
    Set {
        /// Envelope file, or `-` for stdin.
        input: PathBuf,
        /// Field edit as SELECTOR=HEX; the selector is a name or byte offset.
        #[arg(long = "field", short = 'f', value_name = "SELECTOR=HEX")]
        fields: Vec<String>,
        /// TOML file with an [edits] table.
        #[arg(long, value_name = "FILE")]
        edits: Option<PathBuf>,
        /// Write the envelope here instead of stdout.
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Print the static field table of an address space.
    Layout {
        /// A0 or A2.
        space: AddressSpace,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Hex dump of the decoded buffer.
    Dump {
        /// Envelope file, or `-` for stdin.
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose, rust_log.as_deref()))
        .with_writer(io::stderr)
        .init();
}

/// `RUST_LOG` wins when set and valid; otherwise `--verbose` picks DEBUG
/// over WARN.
fn env_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(if verbose { "debug" } else { "warn" }))
}

fn run(command: Command) -> anyhow::Result<ExitCode> {
    match command {
        Command::Show { input, json } => {
            let session = open(&input)?;
            if json {
                println!("{}", serde_json::to_string_pretty(session.fields())?);
            } else {
                println!("address space: {}", session.space());
                for field in session.fields() {
                    println!("{} = {}", field.label(), field.value);
                }
            }
        }
        Command::Check { input } => {
            let session = open(&input)?;
            let reports = verify(session.buffer(), session.space())?;
            let mut ok = true;
            for report in &reports {
                let status = if report.is_valid() { "ok" } else { "MISMATCH" };
                println!(
                    "[{}..{}) @ {}: stored {:02X}, computed {:02X} {status}",
                    report.rule.start,
                    report.rule.end,
                    report.rule.target,
                    report.stored,
                    report.computed
                );
                ok &= report.is_valid();
            }
            if !ok {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Set {
            input,
            fields,
            edits,
            output,
        } => {
            let mut session = open(&input)?;
            let mut plan = match edits {
                Some(path) => EditsFile::load(&path)?,
                None => EditsFile::default(),
            };
            plan.extend_assignments(fields.iter().map(String::as_str))?;
            let staged = plan.apply(&mut session)?;
            debug!(staged, "staged field edits");

            match SessionOutcome::from_commit(session.commit()) {
                SessionOutcome::Success { envelope, changed } => {
                    if !changed {
                        eprintln!("No changes.");
                    }
                    match output {
                        Some(path) => fs::write(&path, envelope)
                            .with_context(|| format!("failed to write {}", path.display()))?,
                        None => print!("{envelope}"),
                    }
                }
                failure => {
                    eprintln!("{}", serde_json::to_string(&failure)?);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Command::Layout { space, json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(space.fields())?);
            } else {
                for field in space.fields() {
                    println!("{}: {} [{}]", field.label(), field.description, field.default_hint);
                }
            }
        }
        Command::Dump { input } => {
            let session = open(&input)?;
            print!("{}", hex_dump(&session.buffer().to_bytes()?, 16));
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn open(input: &Path) -> anyhow::Result<EditSession> {
    let text = read_input(input)?;
    EditSession::open(&text).map_err(|err| {
        let outcome = SessionOutcome::from_open_error(&err);
        let summary = serde_json::to_string(&outcome).unwrap_or_else(|_| err.to_string());
        anyhow::Error::new(err).context(summary)
    })
}

fn read_input(input: &Path) -> anyhow::Result<String> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))
}
