//! 試行・試行ログの型

use std::fmt;

/// 1回の探索の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    /// ログファイル上のラベル
    pub const fn label(self) -> &'static str {
        match self {
            Outcome::Win => "W",
            Outcome::Loss => "L",
        }
    }

    /// ログのラベルを解釈する。完全一致の `W` / `L` のみ受け付ける。
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "W" => Some(Outcome::Win),
            "L" => Some(Outcome::Loss),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 1試行の記録（生の単位での所要時間と結果）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trial {
    pub duration: i64,
    pub outcome: Outcome,
}

impl Trial {
    pub const fn new(duration: i64, outcome: Outcome) -> Self {
        Self { duration, outcome }
    }
}

/// ログの行形式 `<所要時間> <W|L>` で出力する。
impl fmt::Display for Trial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.duration, self.outcome)
    }
}

/// 1ファイル分の全試行（行順）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrialLog {
    trials: Vec<Trial>,
}

impl TrialLog {
    pub fn len(&self) -> usize {
        self.trials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }

    pub fn trials(&self) -> &[Trial] {
        &self.trials
    }

    /// 行順の生の所要時間
    pub fn durations(&self) -> impl Iterator<Item = i64> + '_ {
        self.trials.iter().map(|t| t.duration)
    }
}

impl From<Vec<Trial>> for TrialLog {
    fn from(trials: Vec<Trial>) -> Self {
        Self { trials }
    }
}

impl FromIterator<Trial> for TrialLog {
    fn from_iter<I: IntoIterator<Item = Trial>>(iter: I) -> Self {
        Self {
            trials: iter.into_iter().collect(),
        }
    }
}
