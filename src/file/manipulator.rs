//! ファイル操作
//!
//! 一つのファイルに対する行キャッシュ付きのビューと、内容の書き換え操作。
//!
//! キャッシュは最後の `refresh` 時点の内容のみを反映する。
//! `write_to_file` / `clear_file` / `delete` の後は自動では更新されない。

use crate::error::Result;
use crate::file::io;
use crate::file::mode::OpenMode;
use crate::file::reference::FileReference;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fs::File;

/// キャッシュ更新時の行の扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshMode {
    /// すべての行を保持
    #[default]
    Full,
    /// 改行除去後に空になる行を除外
    Slim,
}

/// 割り当てられたファイルを管理する
#[derive(Debug)]
pub struct FileManipulator {
    reference: FileReference,
    cache: Vec<String>,
}

impl FileManipulator {
    /// 作成と同時にキャッシュを読み込む
    ///
    /// ファイルがまだ存在しない場合はエラーにせず、空のキャッシュで開始する。
    pub fn new(reference: FileReference) -> Result<Self> {
        let mut manipulator = Self {
            reference,
            cache: Vec::new(),
        };
        manipulator.refresh()?;
        Ok(manipulator)
    }

    /// パス文字列などから直接作成
    pub fn open_path(path: impl Into<FileReference>) -> Result<Self> {
        Self::new(path.into())
    }

    pub fn reference(&self) -> &FileReference {
        &self.reference
    }

    /// 管理対象のファイル名
    pub fn file_name(&self) -> &str {
        self.reference.as_str()
    }

    pub fn into_reference(self) -> FileReference {
        self.reference
    }

    /// キャッシュを更新（全行）
    pub fn refresh(&mut self) -> Result<()> {
        self.refresh_with(RefreshMode::Full)
    }

    /// キャッシュを更新（空行を除外）
    pub fn refresh_slim(&mut self) -> Result<()> {
        self.refresh_with(RefreshMode::Slim)
    }

    /// 指定モードでキャッシュを更新
    ///
    /// ファイルが存在しない場合、既存のキャッシュはそのまま残す。
    pub fn refresh_with(&mut self, mode: RefreshMode) -> Result<()> {
        let Some(mut lines) = io::read_lines(self.reference.as_str())? else {
            log::debug!("refresh skipped, {} does not exist", self.reference);
            return Ok(());
        };

        if mode == RefreshMode::Slim {
            lines.retain(|line| !line.is_empty());
        }

        log::trace!("cached {} lines from {}", lines.len(), self.reference);
        self.cache = lines;
        Ok(())
    }

    /// 最後の更新時点でのファイルの行
    pub fn cache(&self) -> &[String] {
        &self.cache
    }

    /// 内容をすべて置き換えて書き込む（追記ではない）
    pub fn write_to_file(&self, content: &str) -> Result<()> {
        io::write_file(self.reference.as_str(), content)?;
        log::debug!("wrote {} bytes to {}", content.len(), self.reference);
        Ok(())
    }

    /// ファイルを空にする
    ///
    /// 以前の内容は復元できない。
    pub fn clear_file(&self) -> Result<()> {
        let file = self.reference.open(OpenMode::CreateAndTruncate)?;
        drop(file);
        log::debug!("cleared {}", self.reference);
        Ok(())
    }

    /// 現在のディスク上の内容を文字列で取得（キャッシュは使わない）
    pub fn file_contents_as_string(&self) -> Result<String> {
        io::read_file(self.reference.as_str())
    }

    /// ファイルが存在すれば削除して `true`、無ければ何もせず `false`
    pub fn delete(&self) -> Result<bool> {
        if !self.reference.exists()? {
            return Ok(false);
        }

        // exists() の後に消えていた場合も不在として扱う
        let removed = io::remove_file(self.reference.as_str())?;
        if removed {
            log::debug!("deleted {}", self.reference);
        }
        Ok(removed)
    }

    /// 内容を JSON オブジェクトとして読み込む
    pub fn load_json(&self) -> Result<Map<String, Value>> {
        self.load_json_as()
    }

    /// 内容を任意の型としてデシリアライズ
    pub fn load_json_as<T: DeserializeOwned>(&self) -> Result<T> {
        let content = self.file_contents_as_string()?;
        Ok(serde_json::from_str(&content)?)
    }

    /// 指定モードで開いたハンドルを返す
    pub fn open(&self, mode: OpenMode) -> Result<File> {
        self.reference.open(mode)
    }
}
