//! 画像美学スコアリング・低品質画像整理ツール
//!
//! フォルダ内の画像をローカルのOllamaビジョンモデルで採点し、
//! 生の応答のサイドカー保存・分析レポート出力・低スコア画像の削除を行う。

pub mod cli;
pub mod config;
pub mod curator;
pub mod error;
pub mod ledger;
pub mod parser;
pub mod prompts;
pub mod report;
pub mod runner;
pub mod scanner;
pub mod scorer;

pub use error::{PhotoAesError, Result};
pub use ledger::{Ledger, ScoreRecord};
