/// 試行ログ1本の集計ツール
///
/// 使い方:
///   analyze_trials Astar_final_final.txt
///
///   # gzip圧縮ログや標準入力も読める
///   analyze_trials runs/backtrack.txt.gz
///   cat runs/astar.txt | analyze_trials -
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser)]
#[command(about = "Mean, mode, median, deviation and win/loss counts of one trial log")]
struct Cli {
    /// 1行1試行 `<所要時間> <W|L>` の試行ログ（`-` で標準入力）
    log: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    let trials = trial_stats::load_log(&cli.log)
        .with_context(|| format!("failed to load {}", cli.log.display()))?;
    log::info!("{}: {} trials", cli.log.display(), trials.len());

    let report = trial_stats::analyze(&trials)
        .with_context(|| format!("cannot analyze {}", cli.log.display()))?;

    // 定義済みの行を出力してから、未定義の統計量でエラー終了する
    let stdout = std::io::stdout();
    trial_stats::report::write_single(&mut stdout.lock(), &report)
        .with_context(|| format!("incomplete report for {}", cli.log.display()))?;
    Ok(())
}
