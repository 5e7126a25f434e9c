/// A* とバックトラッキングの試行ログ比較ツール
///
/// 使い方:
///   # Astar_final_final.txt と BackTrack_final_final.txt を読む
///   compare_trials
///
///   compare_trials runs/astar.txt runs/backtrack.txt
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use trial_stats::StatsReport;

const ASTAR_LABEL: &str = "A*";
const BACKTRACK_LABEL: &str = "Back tracking";

#[derive(Parser)]
#[command(about = "Side-by-side statistics of the A* and backtracking trial logs")]
struct Cli {
    /// A* の試行ログ
    #[arg(default_value = "Astar_final_final.txt")]
    astar: PathBuf,

    /// バックトラッキングの試行ログ
    #[arg(default_value = "BackTrack_final_final.txt")]
    backtrack: PathBuf,
}

fn load(path: &Path, label: &str) -> Result<StatsReport> {
    let trials = trial_stats::load_log(path)
        .with_context(|| format!("failed to load {label} log {}", path.display()))?;
    log::info!("{label}: {} trials from {}", trials.len(), path.display());
    trial_stats::analyze(&trials)
        .with_context(|| format!("cannot analyze {label} log {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let astar = load(&cli.astar, ASTAR_LABEL)?;
    let backtrack = load(&cli.backtrack, BACKTRACK_LABEL)?;

    let stdout = std::io::stdout();
    trial_stats::report::write_comparison(
        &mut stdout.lock(),
        &[(ASTAR_LABEL, &astar), (BACKTRACK_LABEL, &backtrack)],
    )
    .context("incomplete comparison report")?;
    Ok(())
}
