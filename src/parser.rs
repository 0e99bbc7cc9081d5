//! モデル応答パーサー
//!
//! モデルの応答テキストから<aesthetic_rating>ブロックのスコアと
//! 説明文を抽出する。
//!
//! スコアの抽出優先順位:
//! 1. <aesthetic_rating>ブロック内の<score>要素（厳密パース）
//! 2. テキスト全体への正規表現フォールバック
//! 3. 0.0（パース不能）
//!
//! モデル出力の形式は保証されないため、パーサーは失敗ではなく
//! デフォルト値への縮退で応答する。スコア0は「明示的な0点」と
//! 「パース不能・エラー」の両方を意味する。

use regex::Regex;

/// `<tag>...</tag>` の中身を取り出す
///
/// # Arguments
/// * `text` - 検索対象のテキスト
/// * `tag` - タグ名（括弧なし）
///
/// # Returns
/// * `Some(&str)` - 前後の空白を除いた中身
/// * `None` - 開始タグか終了タグが見つからない場合
fn extract_tag<'a>(text: &'a str, tag: &str) -> Option<&'a str> {
    let open = format!("<{}>", tag);
    let close = format!("</{}>", tag);

    let start = text.find(&open)? + open.len();
    let end_offset = text[start..].find(&close)?;
    Some(text[start..start + end_offset].trim())
}

/// 応答からスコアを抽出
///
/// # Arguments
/// * `response` - モデルの生の応答テキスト
///
/// # Returns
/// 抽出された評価点。抽出できない場合は0.0
pub fn parse_score(response: &str) -> f64 {
    // 厳密パース: <aesthetic_rating>ブロック内の<score>要素
    if let Some(block) = extract_tag(response, "aesthetic_rating") {
        if let Some(score) = extract_tag(block, "score").and_then(|s| s.parse::<f64>().ok()) {
            return score;
        }
    }

    // フォールバック: テキスト全体からスコアトークンを探す
    lazy_static::lazy_static! {
        static ref SCORE_RE: Regex = Regex::new(r"<score>([\d.]+)</score>").unwrap();
    }
    if let Some(score) = SCORE_RE
        .captures(response)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
    {
        return score;
    }

    0.0
}

/// 応答から説明文を抽出
///
/// # Arguments
/// * `response` - モデルの生の応答テキスト
///
/// # Returns
/// <description>要素の中身。見つからない場合は空文字
pub fn parse_description(response: &str) -> String {
    extract_tag(response, "description").unwrap_or("").to_string()
}
