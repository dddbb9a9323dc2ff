//! オープンモード
//!
//! ホストライブラリのモード文字列ではなく、閉じた列挙型でファイルの開き方を表す。

use std::fmt;
use std::fs::OpenOptions;

/// ファイルのオープンモード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenMode {
    /// 読み込み専用。ファイルが存在しなければ失敗
    Read,
    /// 書き込み専用。ファイルが存在しなければ失敗、内容は切り詰めない
    Write,
    /// 読み書き。ファイルが存在しなければ失敗
    ReadWrite,
    /// 追記。存在しなければ作成し、既存の内容は壊さない
    Append,
    /// 新規作成。既に存在する場合は失敗
    Create,
    /// 作成または切り詰めて書き込み
    CreateAndTruncate,
}

impl OpenMode {
    /// 対応する `OpenOptions` を構築
    pub fn options(self) -> OpenOptions {
        let mut options = OpenOptions::new();
        match self {
            OpenMode::Read => {
                options.read(true);
            }
            OpenMode::Write => {
                options.write(true);
            }
            OpenMode::ReadWrite => {
                options.read(true).write(true);
            }
            OpenMode::Append => {
                options.append(true).create(true);
            }
            OpenMode::Create => {
                options.write(true).create_new(true);
            }
            OpenMode::CreateAndTruncate => {
                options.write(true).create(true).truncate(true);
            }
        }
        options
    }

    /// 開いただけで既存の内容が失われるかどうか
    pub fn is_destructive(self) -> bool {
        matches!(self, OpenMode::CreateAndTruncate)
    }

    fn name(self) -> &'static str {
        match self {
            OpenMode::Read => "read",
            OpenMode::Write => "write",
            OpenMode::ReadWrite => "read-write",
            OpenMode::Append => "append",
            OpenMode::Create => "create",
            OpenMode::CreateAndTruncate => "create-and-truncate",
        }
    }
}

impl fmt::Display for OpenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
