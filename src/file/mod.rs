//! ファイル操作モジュール
//!
//! - `FileReference`: パスを識別するだけの値（存在確認と touch）
//! - `FileManipulator`: 行キャッシュと内容の読み書き・削除・JSON 読み込み
//!
//! ロックや複数プロセス間の調停は行わない。

pub mod io;
pub mod manipulator;
pub mod mode;
pub mod reference;

pub use manipulator::{FileManipulator, RefreshMode};
pub use mode::OpenMode;
pub use reference::FileReference;
