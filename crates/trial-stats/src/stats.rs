//! 試行ログの記述統計
//!
//! 所要時間は生の単位で保持し、[`RAW_PER_SECOND`] で割った値を秒として報告する。
//! どの関数もログ全体に対する純粋な集約。

use std::collections::BTreeMap;

use crate::error::StatsError;
use crate::trial::{Outcome, TrialLog};

/// 報告単位（秒）あたりの生の単位数
pub const RAW_PER_SECOND: f64 = 1_000_000.0;

/// 最頻値バケットの幅（生の単位）
pub const MODE_BUCKET_WIDTH: i64 = 10_000;

/// 最頻値バケット番号の表示用除数（小数2桁の秒）
const MODE_BUCKET_SCALE: f64 = 100.0;

fn require_trials(log: &TrialLog) -> Result<usize, StatsError> {
    if log.is_empty() { Err(StatsError::EmptyLog) } else { Ok(log.len()) }
}

/// 平均所要時間（秒）
pub fn mean(log: &TrialLog) -> Result<f64, StatsError> {
    let n = require_trials(log)?;
    let sum: i128 = log.durations().map(i128::from).sum();
    Ok(sum as f64 / n as f64 / RAW_PER_SECOND)
}

/// 標本分散（分母 n - 1）、秒² 単位。
///
/// 生の所要時間をそれぞれ [`mean`]（秒）で中心化し、二乗和を 10^12 で割る。
pub fn variance(log: &TrialLog) -> Result<f64, StatsError> {
    let n = require_trials(log)?;
    if n < 2 {
        return Err(StatsError::TooFewTrials { needed: 2, found: n });
    }
    let mean_s = mean(log)?;
    let squares: f64 = log
        .durations()
        .map(|v| {
            let d = v as f64 - mean_s;
            d * d
        })
        .sum();
    Ok(squares / (n - 1) as f64 / (RAW_PER_SECOND * RAW_PER_SECOND))
}

pub fn std_dev(log: &TrialLog) -> Result<f64, StatsError> {
    variance(log).map(f64::sqrt)
}

/// 中央値（秒）。偶数件なら中央2値の平均。
pub fn median(log: &TrialLog) -> Result<f64, StatsError> {
    let n = require_trials(log)?;
    let mut v: Vec<i64> = log.durations().collect();
    v.sort_unstable();
    let mid = n / 2;
    let raw = if n % 2 == 1 {
        v[mid] as f64
    } else {
        (v[mid - 1] as f64 + v[mid] as f64) / 2.0
    };
    Ok(raw / RAW_PER_SECOND)
}

/// 生の所要時間のバケット番号（[`MODE_BUCKET_WIDTH`] での切り捨て除算）
#[inline]
pub fn mode_bucket(duration: i64) -> i64 {
    duration.div_euclid(MODE_BUCKET_WIDTH)
}

/// 最も頻度の高いバケットを `バケット番号 / 100` で返す。
///
/// 同数の場合は小さいバケットを優先する。
pub fn mode(log: &TrialLog) -> Result<f64, StatsError> {
    require_trials(log)?;
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for d in log.durations() {
        *counts.entry(mode_bucket(d)).or_default() += 1;
    }

    let mut best: Option<(i64, usize)> = None;
    for (&bucket, &count) in &counts {
        if best.is_none_or(|(_, c)| count > c) {
            best = Some((bucket, count));
        }
    }
    let (bucket, _) = best.ok_or(StatsError::EmptyLog)?;
    Ok(bucket as f64 / MODE_BUCKET_SCALE)
}

pub fn count(log: &TrialLog, outcome: Outcome) -> usize {
    log.trials().iter().filter(|t| t.outcome == outcome).count()
}

pub fn wins(log: &TrialLog) -> usize {
    count(log, Outcome::Win)
}

pub fn losses(log: &TrialLog) -> usize {
    count(log, Outcome::Loss)
}

/// `outcome` の試行が占める割合（%）
pub fn percentage(log: &TrialLog, outcome: Outcome) -> Result<f64, StatsError> {
    let n = require_trials(log)?;
    Ok(count(log, outcome) as f64 / n as f64 * 100.0)
}

pub fn win_percentage(log: &TrialLog) -> Result<f64, StatsError> {
    percentage(log, Outcome::Win)
}

pub fn loss_percentage(log: &TrialLog) -> Result<f64, StatsError> {
    percentage(log, Outcome::Loss)
}

/// 勝ち1回あたりの負け数。勝ちが0件なら [`StatsError::NoWins`]。
pub fn loss_win_ratio(log: &TrialLog) -> Result<f64, StatsError> {
    ratio(losses(log), wins(log))
}

fn ratio(losses: usize, wins: usize) -> Result<f64, StatsError> {
    if wins == 0 {
        return Err(StatsError::NoWins);
    }
    Ok(losses as f64 / wins as f64)
}

/// 1ログ分の全統計量
///
/// 分散と標準偏差は1試行のログでは定義されないため `Result` のまま保持し、
/// 出力側がその行に到達した時点でエラーにする。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsReport {
    pub trials: usize,
    pub mean: f64,
    pub mode: f64,
    pub median: f64,
    pub std_dev: Result<f64, StatsError>,
    pub variance: Result<f64, StatsError>,
    pub wins: usize,
    pub losses: usize,
    pub win_pct: f64,
    pub loss_pct: f64,
}

impl StatsReport {
    pub fn loss_win_ratio(&self) -> Result<f64, StatsError> {
        ratio(self.losses, self.wins)
    }
}

/// ログの [`StatsReport`] を計算する。空のログのみ失敗する。
pub fn analyze(log: &TrialLog) -> Result<StatsReport, StatsError> {
    let variance = variance(log);
    let report = StatsReport {
        trials: log.len(),
        mean: mean(log)?,
        mode: mode(log)?,
        median: median(log)?,
        std_dev: variance.map(f64::sqrt),
        variance,
        wins: wins(log),
        losses: losses(log),
        win_pct: win_percentage(log)?,
        loss_pct: loss_percentage(log)?,
    };
    log::debug!(
        "analyzed {} trials: mean={} median={} wins={} losses={}",
        report.trials,
        report.mean,
        report.median,
        report.wins,
        report.losses
    );
    Ok(report)
}
