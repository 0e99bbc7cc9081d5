//! 低スコア画像整理モジュール
//!
//! しきい値未満の画像をフォルダから物理削除する。
//! サイドカーファイルとレポートは削除しない。

use crate::ledger::ScoreRecord;
use std::path::Path;

/// しきい値未満の画像を削除する
///
/// - 実在しないファイルはスキップし、削除数には数えない
/// - 個別の削除エラーは報告のみで、残りの削除を続行する
/// - 残存スナップショットは元のスナップショットを `score >= threshold` で
///   再フィルタした結果。削除に失敗した記録もしきい値未満なら落ちる
///
/// # Returns
/// (実際に削除したファイル数, 残存スナップショット)
pub fn delete_below(
    folder: &Path,
    records: &[ScoreRecord],
    threshold: f64,
) -> (usize, Vec<ScoreRecord>) {
    let mut deleted_count = 0;

    for record in records.iter().filter(|r| r.score < threshold) {
        let file_path = folder.join(&record.file_name);
        if !file_path.exists() {
            continue;
        }

        match std::fs::remove_file(&file_path) {
            Ok(()) => deleted_count += 1,
            Err(e) => eprintln!("ファイル {} の削除でエラー: {}", record.file_name, e),
        }
    }

    let remaining = records
        .iter()
        .filter(|r| r.score >= threshold)
        .cloned()
        .collect();

    (deleted_count, remaining)
}
