//! ファイル参照
//!
//! ディスク上のパスを識別するだけの値型。呼び出し間でハンドルを保持しない。

use crate::error::Result;
use crate::file::io;
use crate::file::mode::OpenMode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

/// パスで識別されるファイル
///
/// 同じパスを持つ二つの `FileReference` は独立した値であり、
/// 同じファイルを指しているだけ。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileReference {
    path: String,
}

impl FileReference {
    /// パス文字列から作成（正規化や検証は行わない）
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// 構築時に与えられたパスそのもの
    pub fn as_str(&self) -> &str {
        &self.path
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.path)
    }

    /// カレントディレクトリを基準にした絶対パス
    pub fn absolute_path(&self) -> Result<PathBuf> {
        io::absolute_path(&self.path)
    }

    /// ファイルシステム上にエントリが存在するか
    ///
    /// 存在しないだけなら `Ok(false)`。親ディレクトリを辿れない場合はエラー。
    pub fn exists(&self) -> Result<bool> {
        io::entry_exists(&self.path)
    }

    /// ファイルが無ければ空で作成する。既存の内容は変更しない
    ///
    /// 名前は Unix の `touch` コマンドから。
    pub fn touch(&self) -> Result<()> {
        let file = self.open(OpenMode::Append)?;
        drop(file);
        log::debug!("touched {}", self.path);
        Ok(())
    }

    /// 親ディレクトリの絶対パス
    ///
    /// ルートそのものを指している場合はルートを返す。
    pub fn parent_directory(&self) -> Result<PathBuf> {
        let absolute = self.absolute_path()?;
        match absolute.parent() {
            Some(parent) => Ok(parent.to_path_buf()),
            None => Ok(absolute),
        }
    }

    /// 指定モードで開いたハンドルを返す
    pub fn open(&self, mode: OpenMode) -> Result<File> {
        io::open_file(&self.path, mode)
    }
}

impl fmt::Display for FileReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl From<&str> for FileReference {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for FileReference {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl AsRef<Path> for FileReference {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}
