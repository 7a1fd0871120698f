use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use time::PreciseTime;
use tracing::{error, info, warn};

use clique_search::graph::Graph;
use clique_search::logging;
use clique_search::report::{ReportRow, ReportWriter};
use clique_search::search::{CliqueSearch, SearchConfig, DEFAULT_SWAP_BUDGET};

/// Search DIMACS graphs for large cliques and tabulate the results.
#[derive(Debug, Parser)]
#[command(name = "clique-search")]
struct Cli {
    /// DIMACS `.clq` files to search.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Independent restarts per graph.
    #[arg(long, default_value_t = 100)]
    restarts: usize,

    /// Width of the random pick during construction.
    #[arg(long, default_value_t = 1)]
    randomization: usize,

    /// 1-for-1 swaps allowed per restart.
    #[arg(long = "swap-budget", default_value_t = DEFAULT_SWAP_BUDGET)]
    swap_budget: usize,

    /// Seed for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the semicolon-separated report.
    #[arg(long, default_value = "clique_tabu.csv")]
    report: PathBuf,

    /// Also print the vertices of each best clique (1-based).
    #[arg(long)]
    show_clique: bool,
}

fn print_clique(v: &[usize]) {
    let line: Vec<String> = v.iter().map(|n| (n + 1).to_string()).collect();
    println!("{}", line.join(" "));
}

fn search_file(cli: &Cli, file: &Path) -> Result<ReportRow> {
    let graph = Graph::read(file).with_context(|| format!("failed to load {}", file.display()))?;
    info!(
        file = %file.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );

    let config = SearchConfig {
        swap_budget: cli.swap_budget,
        seed: cli.seed,
    };
    let mut search = CliqueSearch::new(&graph, config);

    let start = PreciseTime::now();
    search.run_search(cli.restarts, cli.randomization)?;
    let spent = start.to(PreciseTime::now());
    let seconds = spent.num_milliseconds() as f64 / 1000.0;

    let verified = search.verify_best();
    if !verified {
        warn!(file = %file.display(), "returned subgraph is not a clique");
    }
    let clique = search.best_clique();
    println!(
        "{}, result - {}, time - {:.3}",
        file.display(),
        clique.len(),
        seconds
    );
    if cli.show_clique {
        print_clique(clique);
    }

    Ok(ReportRow {
        file: file.to_path_buf(),
        clique_size: clique.len(),
        seconds,
        verified,
    })
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let out = File::create(&cli.report)
        .with_context(|| format!("failed to create report {}", cli.report.display()))?;
    let mut report = ReportWriter::new(BufWriter::new(out)).context("failed to write report")?;
    for file in &cli.files {
        let row = search_file(&cli, file)?;
        report.record(&row).context("failed to write report")?;
    }
    report.finish().context("failed to flush report")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        eprintln!("failed to initialize logging: {}", err);
        return ExitCode::FAILURE;
    }
    if let Err(err) = try_main() {
        error!(error = %format!("{:#}", err), "command execution failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
