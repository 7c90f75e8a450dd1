use clap::Parser;
use serde::Serialize;
use std::io::{Read, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use txcheck::{
    Validator, Verdict,
    config::{Config, OutputFormat},
    parse_envelope,
};

/// Check the common fields of ledger transactions given as JSON files
#[derive(Parser, Debug)]
#[command(name = "txcheck", version, about)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Output format, overrides the configuration file
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Transaction JSON files; `-` reads stdin
    #[arg(required = true)]
    inputs: Vec<String>,
}

#[derive(Serialize)]
struct Report<'a> {
    source: &'a str,
    verdict: &'a Verdict,
}

/// The main entry point for the txcheck tool.
///
/// Loads configuration, initializes logging, then validates each input and
/// prints one verdict per input. Exits with status 1 if any input is rejected.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    // Logs go to stderr so stdout only carries verdicts.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    debug!("Loaded config: {:?}", config);

    let format = cli.format.unwrap_or(config.output.format);
    let validator = Validator::new();

    let rejected = check_inputs(&validator, &cli.inputs, format, &mut std::io::stdout().lock())?;
    info!("Checked {} transaction(s), {} rejected", cli.inputs.len(), rejected);

    std::process::exit(exit_code(rejected));
}

/// Validates every input in order, writing one verdict each to `out`.
///
/// Input that cannot be decoded is reported as a rejection. Returns the
/// number of rejected inputs.
fn check_inputs(
    validator: &Validator,
    inputs: &[String],
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<usize> {
    let mut rejected = 0usize;
    for source in inputs {
        let input = read_input(source)?;
        let verdict = match parse_envelope(&input) {
            Ok(envelope) => validator.verdict(&envelope),
            Err(e) => Verdict::Rejected {
                reason: e.to_string(),
            },
        };

        if !verdict.is_accepted() {
            rejected += 1;
        }
        write_verdict(out, format, source, &verdict)?;
    }
    Ok(rejected)
}

fn exit_code(rejected: usize) -> i32 {
    if rejected > 0 { 1 } else { 0 }
}

fn read_input(source: &str) -> anyhow::Result<String> {
    if source == "-" {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        Ok(input)
    } else {
        Ok(std::fs::read_to_string(source)?)
    }
}

fn write_verdict(
    out: &mut impl Write,
    format: OutputFormat,
    source: &str,
    verdict: &Verdict,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => match verdict {
            Verdict::Accepted => writeln!(out, "{}: ok", source)?,
            Verdict::Rejected { reason } => writeln!(out, "{}: {}", source, reason)?,
        },
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string(&Report { source, verdict })?)?;
        }
    }
    Ok(())
}
