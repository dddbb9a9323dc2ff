//! ファイルI/Oプリミティブ
//!
//! FileReference / FileManipulator が共有する低レベル操作。
//! 呼び出しごとに開いて閉じ、ハンドルを保持しない。テキストは UTF-8 固定。

use crate::error::{FileError, FileHandlersError, Result};
use crate::file::mode::OpenMode;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

fn classify(path: &str) -> impl FnOnce(io::Error) -> FileHandlersError + '_ {
    move |error| FileError::from_io(path, &error).into()
}

/// 指定モードでファイルを開く
pub fn open_file(path: &str, mode: OpenMode) -> Result<File> {
    mode.options().open(path).map_err(classify(path))
}

/// エントリが存在するかチェック（単なる不在はエラーにしない）
pub fn entry_exists(path: &str) -> Result<bool> {
    Path::new(path).try_exists().map_err(classify(path))
}

/// カレントディレクトリを基準に絶対パスへ変換
pub fn absolute_path(path: &str) -> Result<PathBuf> {
    std::path::absolute(path).map_err(classify(path))
}

/// ファイル全体を文字列として読み込み
pub fn read_file(path: &str) -> Result<String> {
    let mut file = open_file(path, OpenMode::Read)?;
    let mut content = String::new();
    file.read_to_string(&mut content).map_err(classify(path))?;
    Ok(content)
}

/// 行単位で読み込み、行末の改行を取り除く
///
/// ファイルが存在しない場合は `Ok(None)` を返す。
pub fn read_lines(path: &str) -> Result<Option<Vec<String>>> {
    match read_file(path) {
        Ok(content) => Ok(Some(split_lines(&content))),
        Err(FileHandlersError::File(FileError::NotFound { .. })) => Ok(None),
        Err(e) => Err(e),
    }
}

/// `\r\n`・`\n`・単独の `\r` を行末として分割する
///
/// 末尾の行末記号の後ろに空行は作らない。
pub fn split_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = content;

    while let Some(pos) = rest.find(['\r', '\n']) {
        lines.push(rest[..pos].to_string());
        let terminator_len = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[pos + terminator_len..];
    }

    if !rest.is_empty() {
        lines.push(rest.to_string());
    }
    lines
}

/// 既存の内容を破棄してテキストを書き込み
pub fn write_file(path: &str, content: &str) -> Result<()> {
    let mut file = open_file(path, OpenMode::CreateAndTruncate)?;
    file.write_all(content.as_bytes()).map_err(classify(path))?;
    file.flush().map_err(classify(path))?;
    Ok(())
}

/// ファイルを削除。既に無ければ `Ok(false)`
pub fn remove_file(path: &str) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(classify(path)(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn path_str(path: &Path) -> String {
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_write_and_read_file() {
        let temp_dir = tempdir().unwrap();
        let file_path = path_str(&temp_dir.path().join("test.txt"));
        let content = "Hello, World!\nこんにちは！";

        write_file(&file_path, content).unwrap();
        assert_eq!(read_file(&file_path).unwrap(), content);
    }

    #[test]
    fn test_read_lines_strips_terminators() {
        let temp_dir = tempdir().unwrap();
        let file_path = path_str(&temp_dir.path().join("crlf.txt"));
        fs::write(&file_path, "one\r\ntwo\nthree").unwrap();

        let lines = read_lines(&file_path).unwrap().unwrap();
        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_read_lines_splits_on_lone_carriage_return() {
        let temp_dir = tempdir().unwrap();
        let file_path = path_str(&temp_dir.path().join("cr.txt"));
        fs::write(&file_path, "a\rb\rc\r").unwrap();

        let lines = read_lines(&file_path).unwrap().unwrap();
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_lines_mixed_terminators() {
        assert_eq!(split_lines("a\r\n\r\nb\r\rc\n"), vec!["a", "", "b", "", "c"]);
        assert_eq!(split_lines("\r\n"), vec![""]);
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("tail"), vec!["tail"]);
    }

    #[test]
    fn test_remove_missing_file_is_false() {
        let temp_dir = tempdir().unwrap();
        let file_path = path_str(&temp_dir.path().join("gone.txt"));
        fs::write(&file_path, "x").unwrap();

        assert!(remove_file(&file_path).unwrap());
        assert!(!remove_file(&file_path).unwrap());
    }

    #[test]
    fn test_read_lines_missing_file_is_none() {
        let temp_dir = tempdir().unwrap();
        let file_path = path_str(&temp_dir.path().join("missing.txt"));
        assert!(read_lines(&file_path).unwrap().is_none());
    }

    #[test]
    fn test_read_missing_file_is_not_found() {
        let temp_dir = tempdir().unwrap();
        let file_path = path_str(&temp_dir.path().join("missing.txt"));
        assert!(read_file(&file_path).unwrap_err().is_not_found());
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let temp_dir = tempdir().unwrap();
        let file_path = path_str(&temp_dir.path().join("binary.dat"));
        fs::write(&file_path, b"\xff\xfe\x00").unwrap();

        match read_file(&file_path) {
            Err(FileHandlersError::File(FileError::Io { .. })) => {}
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp_dir = tempdir().unwrap();
        let file_path = path_str(&temp_dir.path().join("no").join("such").join("dir.txt"));
        assert!(write_file(&file_path, "x").is_err());
    }

    #[test]
    fn test_absolute_path_rejects_empty() {
        assert!(absolute_path("").is_err());
        assert!(absolute_path("relative.txt").unwrap().is_absolute());
    }
}
