//! テキストレポート出力
//!
//! 統計量ごとにラベル付きで1行ずつ、常に同じ順序で書き出す。行は算出した順に
//! 書き込むため、エラーより前に出力した行はそのまま残る。
//!
//! 小数は `{:?}`（往復可能な最短表記）で出力し、計算値を丸めない。

use std::io::Write;

use crate::error::{ReportError, StatsError};
use crate::stats::StatsReport;

/// 出力順の統計量名（負け/勝ち比は比較レポートのみ）
const ROW_NAMES: [&str; 9] = [
    "Mean",
    "Mode",
    "Median",
    "Standard deviation",
    "Variance",
    "Wins",
    "Losses",
    "Wins %",
    "Losses %",
];

const RATIO_NAME: &str = "Losses / Wins";

type Row = Result<String, StatsError>;

fn row_values(r: &StatsReport) -> [Row; 9] {
    [
        Ok(format!("{:?}", r.mean)),
        Ok(format!("{:?}", r.mode)),
        Ok(format!("{:?}", r.median)),
        r.std_dev.map(|v| format!("{v:?}")),
        r.variance.map(|v| format!("{v:?}")),
        Ok(r.wins.to_string()),
        Ok(r.losses.to_string()),
        Ok(format!("{:?}", r.win_pct)),
        Ok(format!("{:?}", r.loss_pct)),
    ]
}

/// 1ログ分のレポートを書き出す。
///
/// 未定義の統計量（1試行のログの標準偏差など）に到達した時点でエラーを返す。
pub fn write_single<W: Write>(w: &mut W, report: &StatsReport) -> Result<(), ReportError> {
    for (name, value) in ROW_NAMES.iter().zip(row_values(report)) {
        writeln!(w, "{name}: {}", value?)?;
    }
    Ok(())
}

/// 複数ログを並べて書き出す。統計量ごとにラベル付きで1ログ1行、最後に各ログの
/// 負け/勝ち比。
///
/// 勝ちのないログは、それより前のログの比を書き出した後に
/// [`StatsError::NoWins`] で失敗する。
pub fn write_comparison<W: Write>(
    w: &mut W,
    reports: &[(&str, &StatsReport)],
) -> Result<(), ReportError> {
    let values: Vec<[Row; 9]> = reports.iter().map(|(_, r)| row_values(r)).collect();
    for (row, name) in ROW_NAMES.iter().enumerate() {
        for ((label, _), v) in reports.iter().zip(&values) {
            let value = v[row].as_ref().map_err(|e| *e)?;
            writeln!(w, "{name} for {label}: {value}")?;
        }
    }
    for (label, report) in reports {
        let ratio = report.loss_win_ratio()?;
        writeln!(w, "{RATIO_NAME} for {label}: {ratio:?}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::analyze;
    use crate::trial::{Outcome, Trial, TrialLog};

    fn sample(wins: usize, losses: usize) -> StatsReport {
        let n = wins + losses;
        StatsReport {
            trials: n,
            mean: 0.25,
            mode: 0.12,
            median: 0.2,
            std_dev: Ok(0.5),
            variance: Ok(0.25),
            wins,
            losses,
            win_pct: wins as f64 / n as f64 * 100.0,
            loss_pct: losses as f64 / n as f64 * 100.0,
        }
    }

    fn lines_of(out: Vec<u8>) -> Vec<String> {
        String::from_utf8(out).unwrap().lines().map(str::to_owned).collect()
    }

    #[test]
    fn single_report_order_and_labels() {
        let mut out = Vec::new();
        write_single(&mut out, &sample(3, 1)).unwrap();
        assert_eq!(
            lines_of(out),
            vec![
                "Mean: 0.25",
                "Mode: 0.12",
                "Median: 0.2",
                "Standard deviation: 0.5",
                "Variance: 0.25",
                "Wins: 3",
                "Losses: 1",
                "Wins %: 75.0",
                "Losses %: 25.0",
            ]
        );
    }

    #[test]
    fn single_report_prints_values_unrounded() {
        // 偶数件で中央値が生の単位で .5 になるケース
        let log: TrialLog =
            [Trial::new(1_000_001, Outcome::Win), Trial::new(1_000_002, Outcome::Loss)]
                .into_iter()
                .collect();
        let report = analyze(&log).unwrap();
        let mut out = Vec::new();
        write_single(&mut out, &report).unwrap();
        let lines = lines_of(out);

        assert_eq!(lines[0], "Mean: 1.0000015");
        assert_eq!(lines[2], "Median: 1.0000015");

        let printed = |prefix: &str| -> f64 {
            let line = lines.iter().find(|l| l.starts_with(prefix)).expect("row exists");
            line[prefix.len()..].parse().expect("float")
        };
        assert_eq!(printed("Mean: "), report.mean);
        assert_eq!(printed("Median: "), report.median);
        assert_eq!(Ok(printed("Variance: ")), report.variance);
        assert_eq!(Ok(printed("Standard deviation: ")), report.std_dev);
    }

    #[test]
    fn single_trial_report_stops_at_deviation() {
        let log: TrialLog = [Trial::new(2_000_000, Outcome::Win)].into_iter().collect();
        let report = analyze(&log).unwrap();
        let mut out = Vec::new();
        let err = write_single(&mut out, &report).unwrap_err();
        assert!(matches!(
            err,
            ReportError::Stats(StatsError::TooFewTrials { needed: 2, found: 1 })
        ));
        assert_eq!(lines_of(out), vec!["Mean: 2.0", "Mode: 2.0", "Median: 2.0"]);
    }

    #[test]
    fn comparison_interleaves_logs() {
        let a = sample(3, 1);
        let b = sample(1, 1);
        let mut out = Vec::new();
        write_comparison(&mut out, &[("A*", &a), ("Back tracking", &b)]).unwrap();
        let lines = lines_of(out);
        assert_eq!(lines.len(), 2 * ROW_NAMES.len() + 2);
        assert_eq!(lines[0], "Mean for A*: 0.25");
        assert_eq!(lines[1], "Mean for Back tracking: 0.25");
        assert_eq!(lines[10], "Wins for A*: 3");
        assert_eq!(lines[11], "Wins for Back tracking: 1");
        assert_eq!(lines[18], "Losses / Wins for A*: 0.3333333333333333");
        assert_eq!(lines[19], "Losses / Wins for Back tracking: 1.0");
    }

    #[test]
    fn comparison_keeps_lines_written_before_missing_wins() {
        let a = sample(2, 2);
        let b = sample(0, 4);
        let mut out = Vec::new();
        let err = write_comparison(&mut out, &[("A*", &a), ("Back tracking", &b)]).unwrap_err();
        assert!(matches!(err, ReportError::Stats(StatsError::NoWins)));

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Losses % for Back tracking: 100.0"));
        assert!(text.ends_with("Losses / Wins for A*: 1.0\n"));
    }

    #[test]
    fn comparison_stops_at_undefined_deviation() {
        let a = sample(1, 1);
        let mut b = sample(1, 0);
        b.std_dev = Err(StatsError::TooFewTrials { needed: 2, found: 1 });
        b.variance = b.std_dev;
        let mut out = Vec::new();
        let err = write_comparison(&mut out, &[("A*", &a), ("Back tracking", &b)]).unwrap_err();
        assert!(matches!(err, ReportError::Stats(StatsError::TooFewTrials { .. })));
        let lines = lines_of(out);
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[6], "Standard deviation for A*: 0.5");
    }
}
