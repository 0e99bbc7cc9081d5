//! スコアリングクライアントモジュール
//!
//! 画像1枚につき1回、外部の推論サービスへ評価を依頼する。
//! バックエンドは1メソッドのトレイトに切り出してあり、
//! テストではスタブ実装に差し替えられる。

mod ollama;

pub use ollama::OllamaScorer;

use async_trait::async_trait;
use std::path::Path;

/// 画像スコアリングのバックエンド
#[async_trait]
pub trait ScoreBackend {
    /// 1枚の画像を評価し、モデルの生の応答テキストをそのまま返す
    ///
    /// 通信・サービスエラーはスコア0のフォールバック応答に変換され、
    /// 呼び出し側へは伝播しない。リトライは行わない。
    async fn score(&self, image_path: &Path, model: &str) -> String;
}

/// エラー時のフォールバック応答
///
/// スコア0とエラー内容を通常の応答と同じXML形式に包むことで、
/// 下流がエラーを特別扱いせずに済む。
pub fn fallback_response(error: &str) -> String {
    format!(
        "<aesthetic_rating><score>0</score><description>処理エラー: {}</description><analysis>画像の処理中にエラーが発生しました: {}</analysis></aesthetic_rating>",
        error, error
    )
}
