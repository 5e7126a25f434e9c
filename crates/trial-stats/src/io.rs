//! 試行ログの入力ユーティリティ（stdin / gzip対応）

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

const READER_BUF_CAP: usize = 64 * 1024; // 64 KiB

/// 試行ログの読み込み元
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSource {
    /// `-` 指定時の標準入力
    Stdin,
    Plain(PathBuf),
    /// 拡張子 `.gz`（大文字小文字は区別しない）
    Gzip(PathBuf),
}

impl LogSource {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let p = path.as_ref();
        if p.as_os_str() == "-" {
            return LogSource::Stdin;
        }
        let is_gz = p.extension().and_then(|e| e.to_str()).is_some_and(|e| e.eq_ignore_ascii_case("gz"));
        if is_gz { LogSource::Gzip(p.to_path_buf()) } else { LogSource::Plain(p.to_path_buf()) }
    }

    /// リーダーがファイルハンドルを所有するので、drop した時点でファイルは閉じられる。
    pub fn open(&self) -> io::Result<Box<dyn BufRead>> {
        Ok(match self {
            LogSource::Stdin => Box::new(BufReader::with_capacity(READER_BUF_CAP, io::stdin())),
            LogSource::Plain(p) => Box::new(BufReader::with_capacity(READER_BUF_CAP, File::open(p)?)),
            LogSource::Gzip(p) => {
                let dec = flate2::read::GzDecoder::new(File::open(p)?);
                Box::new(BufReader::with_capacity(READER_BUF_CAP, dec))
            }
        })
    }
}

/// パスから試行ログを開く（`-` は標準入力、`.gz` は展開しながら読む）
pub fn open_reader<P: AsRef<Path>>(path: P) -> io::Result<Box<dyn BufRead>> {
    LogSource::from_path(path).open()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};

    #[test]
    fn source_kind_from_path() {
        assert_eq!(LogSource::from_path("-"), LogSource::Stdin);
        assert_eq!(
            LogSource::from_path("runs/astar.txt"),
            LogSource::Plain(PathBuf::from("runs/astar.txt"))
        );
        assert_eq!(
            LogSource::from_path("runs/astar.TXT.GZ"),
            LogSource::Gzip(PathBuf::from("runs/astar.TXT.GZ"))
        );
        // `-` を含むだけのファイル名は通常ファイル扱い
        assert_eq!(LogSource::from_path("./-"), LogSource::Plain(PathBuf::from("./-")));
    }

    #[test]
    fn reads_plain_and_gzip_files() {
        let dir = tempfile::tempdir().unwrap();

        let plain = dir.path().join("astar.txt");
        std::fs::write(&plain, "10 W\n20 L\n").unwrap();
        let mut s = String::new();
        open_reader(&plain).unwrap().read_to_string(&mut s).unwrap();
        assert_eq!(s, "10 W\n20 L\n");

        let gz = dir.path().join("astar.txt.gz");
        let mut enc = flate2::write::GzEncoder::new(
            File::create(&gz).unwrap(),
            flate2::Compression::default(),
        );
        enc.write_all(b"30 W\n").unwrap();
        enc.finish().unwrap();
        let mut s = String::new();
        open_reader(&gz).unwrap().read_to_string(&mut s).unwrap();
        assert_eq!(s, "30 W\n");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = open_reader(dir.path().join("nope.txt")).err().expect("should fail");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
