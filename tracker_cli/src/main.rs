use clap::{Parser, Subcommand};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracker_core::*;

#[derive(Parser)]
#[command(name = "tracker")]
#[command(about = "Fitness tracker workout summaries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Summary language (en, ru)
    #[arg(long, global = true)]
    locale: Option<MessageLocale>,

    /// Print summaries as JSON objects
    #[arg(long, global = true)]
    json: bool,

    /// Load configuration from this file instead of the default path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize the built-in sample packages (default)
    Demo,

    /// Summarize a single sensor package
    Report {
        /// Workout code (RUN, WLK, SWM)
        code: String,

        /// Sensor values in positional order
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Summarize every package in a JSON Lines file
    Batch {
        /// File with one {"code": ..., "data": [...]} object per line
        file: PathBuf,
    },
}

/// How summaries are written to stdout
struct Output {
    locale: MessageLocale,
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    tracker_core::logging::init(cli.verbose);

    match run(cli) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failed) => {
            eprintln!("{} package(s) failed", failed);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns the number of packages that could not be summarized
fn run(cli: Cli) -> Result<usize> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let output = Output {
        locale: cli.locale.unwrap_or(config.report.locale),
        json: cli.json || config.report.json,
    };

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => cmd_demo(&output),
        Commands::Report { code, values } => {
            cmd_report(&code, &values, &output)?;
            Ok(0)
        }
        Commands::Batch { file } => cmd_batch(&file, &output),
    }
}

fn cmd_demo(output: &Output) -> Result<usize> {
    for package in sample_packages() {
        cmd_report(&package.code, &package.data, output)?;
    }
    Ok(0)
}

fn cmd_report(code: &str, values: &[f64], output: &Output) -> Result<()> {
    let report = read_package(code, values)?.summary()?;
    print_report(&report, output)
}

fn cmd_batch(file: &Path, output: &Output) -> Result<usize> {
    let reader = BufReader::new(std::fs::File::open(file)?);
    let mut failed = 0;

    // Split on raw bytes so one badly encoded line doesn't end the batch
    for (index, line) in reader.split(b'\n').enumerate() {
        let result = String::from_utf8(line?)
            .map_err(Error::from)
            .and_then(|text| summarize_line(&text));

        match result {
            Ok(Some(report)) => print_report(&report, output)?,
            Ok(None) => {}
            Err(e) => {
                tracing::debug!("Skipping line {} of {:?}", index + 1, file);
                eprintln!("line {}: {}", index + 1, e);
                failed += 1;
            }
        }
    }

    Ok(failed)
}

/// Blank lines yield no report
fn summarize_line(line: &str) -> Result<Option<SummaryReport>> {
    if line.trim().is_empty() {
        return Ok(None);
    }
    let package: SensorPackage = serde_json::from_str(line)?;
    package.to_workout()?.summary().map(Some)
}

fn print_report(report: &SummaryReport, output: &Output) -> Result<()> {
    if output.json {
        println!("{}", serde_json::to_string(report)?);
    } else {
        println!("{}", report.render(output.locale));
    }
    Ok(())
}
