//! エラーハンドリング
//!
//! filehandlers 全体で使用されるエラー型を定義する。
//! ホストの I/O エラーはリトライせず、そのまま呼び出し元に返す。

use std::io::ErrorKind;
use thiserror::Error;

/// ライブラリ全体のエラー型
#[derive(Error, Debug)]
pub enum FileHandlersError {
    /// ファイル操作エラー
    #[error("File operation failed: {0}")]
    File(#[from] FileError),

    /// JSON デコードエラー
    #[error("JSON decode error: {0}")]
    JsonDecode(#[from] serde_json::Error),
}

impl FileHandlersError {
    /// 権限不足によるエラーかどうか
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, FileHandlersError::File(FileError::PermissionDenied { .. }))
    }

    /// 対象が存在しないことによるエラーかどうか
    pub fn is_not_found(&self) -> bool {
        matches!(self, FileHandlersError::File(FileError::NotFound { .. }))
    }

    /// JSON として解釈できなかったかどうか
    pub fn is_json_decode(&self) -> bool {
        matches!(self, FileHandlersError::JsonDecode(_))
    }
}

/// ファイル操作固有のエラー
///
/// `PermissionDenied` 以外はすべて一般的な I/O エラーとして扱う。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FileError {
    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    #[error("IO error on {path}: {message}")]
    Io { path: String, message: String },
}

impl FileError {
    /// `std::io::Error` を種別ごとに分類して変換
    pub fn from_io(path: impl Into<String>, error: &std::io::Error) -> Self {
        let path = path.into();
        match error.kind() {
            ErrorKind::NotFound => FileError::NotFound { path },
            ErrorKind::PermissionDenied => FileError::PermissionDenied { path },
            ErrorKind::InvalidInput => FileError::InvalidPath { path },
            _ => FileError::Io {
                path,
                message: error.to_string(),
            },
        }
    }
}

/// プロジェクト標準のResult型
pub type Result<T> = std::result::Result<T, FileHandlersError>;
