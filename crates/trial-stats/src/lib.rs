//! 試行ログの集計
//!
//! A* / バックトラッキング探索が出力した `<所要時間> <W|L>` 形式のログを読み込み、
//! 平均・最頻値・中央値・標準偏差・勝敗数などの記述統計を計算する。
//!
//! ```no_run
//! let log = trial_stats::load_log("Astar_final_final.txt")?;
//! let report = trial_stats::analyze(&log)?;
//! trial_stats::report::write_single(&mut std::io::stdout(), &report)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod io;
pub mod parse;
pub mod report;
pub mod stats;
pub mod trial;

pub use error::{ReportError, StatsError, TrialLogError};
pub use parse::{load_log, parse_line, parse_log};
pub use stats::{StatsReport, analyze};
pub use trial::{Outcome, Trial, TrialLog};
