//! バッチ実行モジュール
//!
//! スキャン済みの画像を1枚ずつ順番にスコアリングし、台帳へ記録する。
//! 台帳に登録済みの画像はスキップする（再スコアリングしない）。
//! 各画像の処理後に進捗コールバックを呼ぶ。

use crate::error::Result;
use crate::ledger::{Ledger, ScoreRecord};
use crate::parser::{parse_description, parse_score};
use crate::scanner::ImageInfo;
use crate::scorer::ScoreBackend;

pub async fn run_batch(
    images: &[ImageInfo],
    backend: &dyn ScoreBackend,
    model: &str,
    ledger: &mut Ledger,
    verbose: bool,
    on_progress: impl Fn(usize, usize),
) -> Result<()> {
    let total = images.len();

    for (i, img) in images.iter().enumerate() {
        if ledger.has(&img.file_name) {
            if verbose {
                println!("  {}: スキップ（処理済み）", img.file_name);
            }
        } else {
            let response = backend.score(&img.path, model).await;

            // 生の応答をサイドカーファイルへ保存（再処理時は上書き）
            let sidecar_path = img.path.with_extension("txt");
            std::fs::write(&sidecar_path, &response)?;

            let record = ScoreRecord {
                file_name: img.file_name.clone(),
                score: parse_score(&response),
                description: parse_description(&response),
                raw_result_path: sidecar_path.display().to_string(),
            };

            if verbose {
                println!("  {}: スコア {}", img.file_name, record.score);
            }

            ledger.append(record);
        }

        on_progress(i + 1, total);
    }

    Ok(())
}
