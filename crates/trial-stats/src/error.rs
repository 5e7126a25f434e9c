//! 試行ログ読み込み・統計計算のエラー型

use std::num::ParseIntError;
use std::path::PathBuf;

/// 試行ログの読み込み・パースエラー
#[derive(thiserror::Error, Debug)]
pub enum TrialLogError {
    /// ログを開けない
    #[error("cannot open trial log {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 読み込み途中のI/Oエラー
    #[error("read error at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    /// `<所要時間> <結果>` の2トークンに分割できない
    #[error("line {line}: expected 2 tokens, found {found}")]
    TokenCount { line: usize, found: usize },

    /// 所要時間が整数でない
    #[error("line {line}: invalid duration {token:?}: {source}")]
    Duration {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },

    /// 結果ラベルが `W` でも `L` でもない
    #[error("line {line}: unknown outcome {label:?} (expected W or L)")]
    Outcome { line: usize, label: String },
}

/// ログに対して定義されない統計量
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    #[error("trial log is empty")]
    EmptyLog,

    /// 標本分散には2試行以上が必要
    #[error("need at least {needed} trials, found {found}")]
    TooFewTrials { needed: usize, found: usize },

    /// 勝ち0件での負け/勝ち比
    #[error("no wins recorded, loss/win ratio is undefined")]
    NoWins,
}

/// レポート出力時のエラー
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// 試行ログ読み込みの Result 型
pub type TrialLogResult<T> = Result<T, TrialLogError>;
