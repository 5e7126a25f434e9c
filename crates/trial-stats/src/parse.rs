//! 試行ログのパーサ
//!
//! 1行1試行で `<所要時間> <W|L>`。不正な行があればその行番号（1始まり）付きで
//! 読み込み全体を失敗させる。

use std::io::BufRead;
use std::path::Path;

use crate::error::{TrialLogError, TrialLogResult};
use crate::io::open_reader;
use crate::trial::{Outcome, Trial, TrialLog};

/// 1行をパースする。`line_no` はエラー表示にのみ使う。
pub fn parse_line(line: &str, line_no: usize) -> TrialLogResult<Trial> {
    let mut tokens = line.split_whitespace();
    let (Some(duration), Some(label), None) = (tokens.next(), tokens.next(), tokens.next())
    else {
        return Err(TrialLogError::TokenCount {
            line: line_no,
            found: line.split_whitespace().count(),
        });
    };

    let duration = duration.parse::<i64>().map_err(|source| TrialLogError::Duration {
        line: line_no,
        token: duration.to_owned(),
        source,
    })?;
    let outcome = Outcome::from_label(label).ok_or_else(|| TrialLogError::Outcome {
        line: line_no,
        label: label.to_owned(),
    })?;

    Ok(Trial::new(duration, outcome))
}

/// `reader` の全行を順に [`TrialLog`] へパースする。
pub fn parse_log<R: BufRead>(reader: R) -> TrialLogResult<TrialLog> {
    let mut trials = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| TrialLogError::Read {
            line: line_no,
            source,
        })?;
        trials.push(parse_line(&line, line_no)?);
    }
    Ok(TrialLog::from(trials))
}

/// `path` の試行ログを全行読み込む（`-` と `.gz` の扱いは [`open_reader`] を参照）。
///
/// ファイルハンドルは戻る前に解放される。
pub fn load_log<P: AsRef<Path>>(path: P) -> TrialLogResult<TrialLog> {
    let path = path.as_ref();
    let reader = open_reader(path).map_err(|source| TrialLogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let log = parse_log(reader)?;
    log::debug!("loaded {} trials from {}", log.len(), path.display());
    Ok(log)
}
