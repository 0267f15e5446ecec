mod echo;

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use lexis_core::{
    FetchConfig, HttpSource, LexiconPaths, Lexicons, OutputFormat, Pipeline, RowEvent, read_input_file, write_report,
};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fetch web articles and score them on readability and sentiment
#[derive(Parser, Debug)]
#[command(name = "lexis")]
#[command(author = "Lexis Contributors")]
#[command(version)]
#[command(about = "Score web articles on readability and sentiment", long_about = None)]
struct Args {
    /// Input table: xlsx or CSV with URL_ID and URL columns
    #[arg(value_name = "INPUT", required_unless_present = "completions")]
    input: Option<PathBuf>,

    /// Output report file
    #[arg(short, long, default_value = "Output.xlsx", value_name = "FILE")]
    output: PathBuf,

    /// Output format (xlsx, csv, json); inferred from the output extension when omitted
    #[arg(short, long, value_name = "FORMAT")]
    format: Option<OutputFormat>,

    /// Directory holding the stopword, positive and negative word lists
    #[arg(long, default_value = ".", value_name = "DIR")]
    lexicon_dir: PathBuf,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Enable debug logging and per-row progress
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "lexis_core=debug,warn" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(shell) = args.completions {
        clap_complete::generate(shell, &mut Args::command(), "lexis", &mut io::stdout());
        return Ok(());
    }

    init_tracing(args.verbose);
    let verbose = args.verbose;
    let input = args.input.context("INPUT is required")?;

    if verbose {
        echo::print_banner();
        echo::print_info("Debug logging enabled");
        eprintln!();
    }

    if verbose {
        echo::print_step(
            1,
            4,
            &format!("Loading lexicons from {}", args.lexicon_dir.display().bright_white()),
        );
    }

    let lexicons = Lexicons::load(&LexiconPaths::in_dir(&args.lexicon_dir))
        .with_context(|| format!("Failed to load lexicons from {}", args.lexicon_dir.display()))?;

    if verbose {
        eprintln!(
            "  {} {}  {} {}  {} {}",
            "Positive:".dimmed(),
            lexicons.positive.len().to_string().bright_white(),
            "Negative:".dimmed(),
            lexicons.negative.len().to_string().bright_white(),
            "Stopwords:".dimmed(),
            lexicons.stopwords.len().to_string().bright_white()
        );
        eprintln!();
        echo::print_step(2, 4, &format!("Reading input table {}", input.display().bright_white()));
    }

    let rows = read_input_file(&input).with_context(|| format!("Failed to read input table: {}", input.display()))?;
    let total = rows.len();

    if verbose {
        eprintln!("  {} {}", "Rows:".dimmed(), total.to_string().bright_white());
        eprintln!();
        echo::print_step(3, 4, "Fetching and scoring articles");
    }

    let config = FetchConfig {
        timeout: args.timeout,
        user_agent: args.user_agent.unwrap_or_else(|| FetchConfig::default().user_agent),
    };
    let source = HttpSource::new(config).context("Failed to build HTTP client")?;
    let pipeline = Pipeline::new(source, &lexicons);

    let started = Instant::now();
    let summary = pipeline
        .run_with_progress(rows, |event| {
            if !verbose {
                return;
            }
            match event {
                RowEvent::Started { index, total, row } => echo::print_row_started(index, total, row),
                RowEvent::Scored { row, .. } => echo::print_row_scored(row),
                RowEvent::Skipped { .. } => {}
            }
        })
        .await;

    if verbose {
        echo::print_timing("Elapsed", started.elapsed());
        eprintln!();
    }

    let format = args.format.unwrap_or_else(|| OutputFormat::from_path(&args.output));

    if verbose {
        echo::print_step(4, 4, "Writing report");
        eprintln!("  {} {}", "Format:".dimmed(), format!("{:?}", format).bright_white());
        eprintln!();
    }

    write_report(&summary.report, &args.output, format)
        .with_context(|| format!("Failed to write report: {}", args.output.display()))?;

    if !summary.skipped.is_empty() {
        echo::print_warning(&format!("Skipped {} of {} rows", summary.skipped.len(), total));
    }
    echo::print_success(&format!(
        "Scored {} of {} articles, report written to {}",
        summary.report.len(),
        total,
        args.output.display().bright_white()
    ));

    Ok(())
}
