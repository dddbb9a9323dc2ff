//! filehandlers - テキストファイル操作の小さなヘルパー
//!
//! 存在確認、作成、クリア、行キャッシュ、全体読み込み、JSON 読み込み、削除を
//! 二つの値型の背後にまとめる。すべての操作はホストのファイルシステムへの
//! 同期的な直接呼び出し。

pub mod error;
pub mod file;

// 公開API
pub use error::{FileError, FileHandlersError, Result};
pub use file::{FileManipulator, FileReference, OpenMode, RefreshMode};
