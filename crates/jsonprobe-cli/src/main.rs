//! jsonprobe command line
//!
//! Runs the conformance comparison, the throughput benchmark, or both, and
//! prints the reports to stdout. Logs go to stderr.

use clap::{Args, Parser, Subcommand, ValueEnum};
use jsonprobe::presets;
use jsonprobe::{
    ComparisonReport, ConformanceConfig, Equality, Error, FixtureCatalogue, ThroughputConfig,
    ThroughputHarness, ThroughputReport, Workload,
};
use std::process::ExitCode;
use tracing::{Level, error, info};

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

#[derive(Parser, Debug)]
#[command(name = "jsonprobe", version, about = "Compare and benchmark JSON serializers")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Table, global = true)]
    format: Format,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare candidates against the reference serializer
    Compare(CompareArgs),
    /// Time every candidate over the merged fixture workload
    Bench(BenchArgs),
    /// Run the comparison, then the benchmark
    All(AllArgs),
}

#[derive(Args, Debug, Default)]
struct CompareArgs {
    /// Only run these candidates (repeatable)
    #[arg(long = "candidate")]
    candidates: Vec<String>,

    /// Compare parsed JSON values instead of bytes
    #[arg(long)]
    semantic: bool,
}

#[derive(Args, Debug)]
struct BenchArgs {
    /// Serializations per candidate
    #[arg(long, default_value_t = ThroughputConfig::DEFAULT_ITERATIONS)]
    iterations: usize,

    /// Only run these candidates (repeatable)
    #[arg(long = "candidate")]
    candidates: Vec<String>,

    /// Leave these fixtures out of the workload (repeatable)
    #[arg(long = "exclude")]
    excluded: Vec<String>,
}

impl Default for BenchArgs {
    fn default() -> Self {
        Self {
            iterations: ThroughputConfig::DEFAULT_ITERATIONS,
            candidates: Vec::new(),
            excluded: Vec::new(),
        }
    }
}

#[derive(Args, Debug)]
struct AllArgs {
    /// Serializations per candidate
    #[arg(long, default_value_t = ThroughputConfig::DEFAULT_ITERATIONS)]
    iterations: usize,

    /// Compare parsed JSON values instead of bytes
    #[arg(long)]
    semantic: bool,

    /// Only run these candidates (repeatable); each label selects from the
    /// comparison set, the benchmark set, or both
    #[arg(long = "candidate")]
    candidates: Vec<String>,

    /// Leave these fixtures out of the benchmark workload (repeatable)
    #[arg(long = "exclude")]
    excluded: Vec<String>,
}

impl Default for AllArgs {
    fn default() -> Self {
        Self {
            iterations: ThroughputConfig::DEFAULT_ITERATIONS,
            semantic: false,
            candidates: Vec::new(),
            excluded: Vec::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
}

fn main() -> ExitCode {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Run failed");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        Level::ERROR
    } else {
        match cli.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> jsonprobe::Result<()> {
    let catalogue = FixtureCatalogue::standard()?;
    for skipped in catalogue.skipped() {
        info!(fixture = %skipped.name, reason = %skipped.reason, "Fixture skipped");
    }

    match &cli.command {
        Some(Command::Compare(args)) => {
            let report = compare(&catalogue, args)?;
            print_comparison(&report, cli.format)
        }
        Some(Command::Bench(args)) => {
            let report = bench(&catalogue, args)?;
            print_throughput(&report, cli.format)
        }
        Some(Command::All(args)) => run_all(&catalogue, args, cli.format),
        None => run_all(&catalogue, &AllArgs::default(), cli.format),
    }
}

/// Reports produced by `all`; a side with no selected candidate is skipped
struct AllReports {
    comparison: Option<ComparisonReport>,
    throughput: Option<ThroughputReport>,
}

fn run_all(catalogue: &FixtureCatalogue, args: &AllArgs, format: Format) -> jsonprobe::Result<()> {
    let reports = all_reports(catalogue, args)?;

    match format {
        Format::Table => {
            if let Some(comparison) = &reports.comparison {
                println!("{comparison}");
            }
            if let Some(throughput) = &reports.throughput {
                println!("{throughput}");
            }
        }
        Format::Json => {
            let mut combined = serde_json::Map::new();
            if let Some(comparison) = &reports.comparison {
                combined.insert("conformance".to_string(), comparison.to_value()?);
            }
            if let Some(throughput) = &reports.throughput {
                combined.insert("throughput".to_string(), throughput.to_value()?);
            }
            println!("{}", serde_json::to_string_pretty(&combined)?);
        }
    }
    Ok(())
}

fn all_reports(catalogue: &FixtureCatalogue, args: &AllArgs) -> jsonprobe::Result<AllReports> {
    let conformance_labels: Vec<String> = presets::conformance_candidates()
        .iter()
        .map(|c| c.label().to_string())
        .collect();
    let throughput_labels: Vec<String> = presets::throughput_candidates()
        .iter()
        .map(|c| c.label().to_string())
        .collect();

    for label in &args.candidates {
        if !conformance_labels.contains(label) && !throughput_labels.contains(label) {
            return Err(Error::invalid_config(format!("unknown candidate: {label}")));
        }
    }
    let select = |known: &[String]| -> Option<Vec<String>> {
        if args.candidates.is_empty() {
            return Some(Vec::new());
        }
        let chosen: Vec<String> = args
            .candidates
            .iter()
            .filter(|label| known.contains(*label))
            .cloned()
            .collect();
        (!chosen.is_empty()).then_some(chosen)
    };

    let comparison = match select(&conformance_labels) {
        Some(candidates) => Some(compare(
            catalogue,
            &CompareArgs {
                candidates,
                semantic: args.semantic,
            },
        )?),
        None => {
            info!("No comparison candidate selected, skipping comparison");
            None
        }
    };
    let throughput = match select(&throughput_labels) {
        Some(candidates) => Some(bench(
            catalogue,
            &BenchArgs {
                iterations: args.iterations,
                candidates,
                excluded: args.excluded.clone(),
            },
        )?),
        None => {
            info!("No benchmark candidate selected, skipping benchmark");
            None
        }
    };

    Ok(AllReports {
        comparison,
        throughput,
    })
}

fn compare(catalogue: &FixtureCatalogue, args: &CompareArgs) -> jsonprobe::Result<ComparisonReport> {
    let equality = if args.semantic {
        Equality::Semantic
    } else {
        Equality::Exact
    };
    let mut harness = presets::conformance_harness().with_config(ConformanceConfig { equality });
    if !args.candidates.is_empty() {
        harness.retain_candidates(args.candidates.as_slice())?;
    }
    harness.run(catalogue)
}

fn bench(catalogue: &FixtureCatalogue, args: &BenchArgs) -> jsonprobe::Result<ThroughputReport> {
    let workload = Workload::from_catalogue_excluding(catalogue, args.excluded.as_slice())?;
    let mut harness = ThroughputHarness::new(ThroughputConfig::with_iterations(args.iterations))
        .with_candidates(presets::throughput_candidates());

    #[cfg(feature = "dhat-heap")]
    {
        harness = harness.with_probe(jsonprobe::DhatProbe);
    }

    if !args.candidates.is_empty() {
        harness.retain_candidates(args.candidates.as_slice())?;
    }
    harness.run(&workload)
}

fn print_comparison(report: &ComparisonReport, format: Format) -> jsonprobe::Result<()> {
    match format {
        Format::Table => println!("{report}"),
        Format::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}

fn print_throughput(report: &ThroughputReport, format: Format) -> jsonprobe::Result<()> {
    match format {
        Format::Table => println!("{report}"),
        Format::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}
