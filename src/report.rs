//! 分析レポート出力モジュール
//!
//! 台帳のスナップショットを集計し、タイムスタンプ付きの
//! テキストレポートを対象フォルダへ書き出す。

use crate::error::Result;
use crate::ledger::ScoreRecord;
use chrono::Local;
use std::path::{Path, PathBuf};

/// スコア集計
#[derive(Debug, Clone, Copy)]
pub struct ScoreSummary {
    /// 処理した画像の総数
    pub total: usize,
    /// スコア0の画像数
    pub zero: usize,
    /// スコアが0より大きくしきい値未満の画像数
    pub low: usize,
}

/// スナップショットをしきい値で集計する
pub fn summarize(records: &[ScoreRecord], threshold: f64) -> ScoreSummary {
    ScoreSummary {
        total: records.len(),
        zero: records.iter().filter(|r| r.score == 0.0).count(),
        low: records
            .iter()
            .filter(|r| 0.0 < r.score && r.score < threshold)
            .count(),
    }
}

/// 分析レポートを書き出す
///
/// ファイル名は `analysis_results_<YYYYMMDD_HHMMSS>.txt`。
/// 同一秒内の呼び出しはファイル名が衝突する（ガードしない）。
///
/// # Returns
/// 書き出したレポートファイルのパス
pub fn write_report(
    folder: &Path,
    records: &[ScoreRecord],
    threshold: f64,
) -> Result<PathBuf> {
    let now = Local::now();
    let output_path = folder.join(format!(
        "analysis_results_{}.txt",
        now.format("%Y%m%d_%H%M%S")
    ));

    let zero_score: Vec<&ScoreRecord> = records.iter().filter(|r| r.score == 0.0).collect();
    let low_score: Vec<&ScoreRecord> = records
        .iter()
        .filter(|r| 0.0 < r.score && r.score < threshold)
        .collect();

    let mut report = String::new();
    report.push_str(&format!(
        "分析結果 - 生成日時: {}\n\n",
        now.format("%Y-%m-%d %H:%M:%S")
    ));
    report.push_str(&format!("処理した画像の総数: {}\n", records.len()));
    report.push_str(&format!("スコア0の画像数: {}\n", zero_score.len()));
    report.push_str(&format!(
        "スコアが0より大きく{}未満の画像数: {}\n\n",
        threshold,
        low_score.len()
    ));

    if !zero_score.is_empty() {
        report.push_str("スコア0の画像:\n");
        for r in &zero_score {
            report.push_str(&format!("{} - スコア: 0\n", r.file_name));
        }
        report.push('\n');
    }

    if !low_score.is_empty() {
        report.push_str(&format!("スコアが0より大きく{}未満の画像:\n", threshold));
        for r in &low_score {
            report.push_str(&format!("{} - スコア: {}\n", r.file_name, r.score));
        }
    } else {
        report.push_str(&format!(
            "スコアが0より大きく{}未満の画像はありません。\n",
            threshold
        ));
    }

    std::fs::write(&output_path, report)?;
    Ok(output_path)
}
