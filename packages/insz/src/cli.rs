//! Command-line interface for the decoder.

use std::io::{self, Write};

use clap::{Parser, Subcommand};
use console::style;

use crate::clock::{Clock, FixedYear};
use crate::error::Result;
use crate::service::DecodeService;
use crate::types::{AlgorithmMode, ChecksumStatus, DecodeOutcome, Decoded, Fatal};

/// Exit code when every input decoded with a valid checksum.
pub const EXIT_VALID: i32 = 0;
/// Exit code when an input was fatal, or on usage and I/O errors.
pub const EXIT_FATAL: i32 = 1;
/// Exit code when inputs were well-formed but not all checksum-valid.
pub const EXIT_UNVERIFIED: i32 = 2;

const DISCLAIMER: &str =
    "Simulation for educational purposes only. This is not an official validation.";

/// INSZ Decoder - Decode Belgian national register numbers (simulation).
#[derive(Parser)]
#[command(name = "insz-decoder")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode one or more numbers given as arguments.
    Decode {
        /// Numbers to decode (e.g., 93.05.18-223.61)
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Century policy: auto, force-1900s or force-2000s
        #[arg(short, long, default_value = "auto")]
        algorithm: AlgorithmMode,

        /// Print one JSON outcome per line instead of a report
        #[arg(long)]
        json: bool,

        /// Year to guess centuries against (default: this year)
        #[arg(long)]
        current_year: Option<i32>,
    },

    /// Decode newline-delimited JSON requests from stdin.
    Batch {
        /// Year to guess centuries against (default: this year)
        #[arg(long)]
        current_year: Option<i32>,
    },
}

/// Run the CLI and return the process exit code.
pub fn run() -> Result<i32> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here, on stdout
            let code = if e.use_stderr() { EXIT_FATAL } else { EXIT_VALID };
            e.print()?;
            return Ok(code);
        }
    };

    match cli.command {
        Commands::Decode {
            inputs,
            algorithm,
            json,
            current_year,
        } => match current_year {
            Some(year) => {
                let service = DecodeService::with_clock(FixedYear(year));
                decode_command(&service, &inputs, algorithm, json)
            }
            None => decode_command(&DecodeService::new(), &inputs, algorithm, json),
        },
        Commands::Batch { current_year } => match current_year {
            Some(year) => batch_command(&DecodeService::with_clock(FixedYear(year))),
            None => batch_command(&DecodeService::new()),
        },
    }
}

/// Execute the decode command.
fn decode_command<C: Clock>(
    service: &DecodeService<C>,
    inputs: &[String],
    algorithm: AlgorithmMode,
    json: bool,
) -> Result<i32> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut worst = Verdict::Valid;

    for input in inputs {
        let outcome = service.decoder().decode(input, algorithm);
        worst = worst.max(Verdict::of(&outcome));

        if json {
            serde_json::to_writer(&mut out, &outcome)?;
            writeln!(out)?;
        } else {
            write_report(&mut out, &outcome)?;
        }
    }

    if !json {
        writeln!(out, "{}", style(DISCLAIMER).dim())?;
    }
    Ok(worst.exit_code())
}

/// Execute the batch command.
fn batch_command<C: Clock>(service: &DecodeService<C>) -> Result<i32> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = service.decode_stream(stdin.lock(), stdout.lock())?;

    let verdict = if summary.fatal > 0 || summary.rejected > 0 {
        Verdict::Fatal
    } else if summary.checksum_invalid > 0 || summary.checksum_missing > 0 {
        Verdict::Unverified
    } else {
        Verdict::Valid
    };
    Ok(verdict.exit_code())
}

/// Overall result of a run, ordered from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verdict {
    Valid,
    Unverified,
    Fatal,
}

impl Verdict {
    pub fn of(outcome: &DecodeOutcome) -> Self {
        match outcome {
            DecodeOutcome::Fatal(_) => Verdict::Fatal,
            DecodeOutcome::Decoded(d) if d.is_valid() => Verdict::Valid,
            DecodeOutcome::Decoded(_) => Verdict::Unverified,
        }
    }

    pub fn exit_code(self) -> i32 {
        match self {
            Verdict::Valid => EXIT_VALID,
            Verdict::Unverified => EXIT_UNVERIFIED,
            Verdict::Fatal => EXIT_FATAL,
        }
    }
}

fn write_report<W: Write>(out: &mut W, outcome: &DecodeOutcome) -> io::Result<()> {
    match outcome {
        DecodeOutcome::Decoded(d) => write_decoded(out, d),
        DecodeOutcome::Fatal(f) => write_fatal(out, f),
    }
}

fn write_decoded<W: Write>(out: &mut W, d: &Decoded) -> io::Result<()> {
    let status = match d.status {
        ChecksumStatus::Valid => style("valid checksum").green(),
        ChecksumStatus::ChecksumInvalid => style("invalid checksum").red(),
        ChecksumStatus::ChecksumMissing => style("no checksum").yellow(),
    };
    writeln!(out, "{} {}", style(&d.input).bold(), status)?;
    writeln!(out, "  Components:  {}", d.components)?;

    let guessed = if d.birth_year.guessed { " (guessed year)" } else { "" };
    writeln!(
        out,
        "  Birth date:  {}{}",
        d.formatted_birth_date(),
        style(guessed).yellow()
    )?;
    writeln!(out, "  Gender:      {} (sequence parity)", d.gender)?;
    writeln!(out, "  Sequence:    {:03} (birth order {})", d.sequence, d.birth_order)?;
    writeln!(
        out,
        "  Checksums:   19xx={:02} 20xx={:02}",
        d.checksums.century_1900, d.checksums.century_2000
    )?;
    writeln!(out, "  Algorithm:   {}", d.algorithm)?;
    if let Some(suggested) = d.suggested_algorithm {
        writeln!(out, "  Suggested:   {}", style(suggested).cyan())?;
    }
    writeln!(out)
}

fn write_fatal<W: Write>(out: &mut W, f: &Fatal) -> io::Result<()> {
    let input = f.input.as_deref().unwrap_or("<not text>");
    writeln!(
        out,
        "{} {}",
        style(input).bold(),
        style(f.error.kind().as_key()).red()
    )?;
    writeln!(out, "  Error:       {}", f.error)?;
    if let Some(components) = f.error.components() {
        writeln!(out, "  Components:  {components}")?;
    }
    writeln!(out)
}
