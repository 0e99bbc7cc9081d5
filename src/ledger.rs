//! 処理台帳モジュール
//!
//! セッション中のスコアリング結果を記録する台帳。
//! 記録は挿入順を保持し、ファイル名の重複を許さない。
//! `rate`の出力と`report`/`clean`の入力を橋渡しするため、
//! JSONファイルへの保存・読み込みにも対応する。

use crate::error::{PhotoAesError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// 1枚の画像のスコアリング結果
///
/// 作成後は変更されない。再スコアリング時は削除して作り直す。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub file_name: String,

    /// 評価点（0〜10）。0は「0点」と「パース不能・エラー」の両方を表す
    pub score: f64,

    #[serde(default)]
    pub description: String,

    /// 生の応答を保存したサイドカーファイルのパス
    #[serde(default)]
    pub raw_result_path: String,
}

/// スコアリング結果の台帳
#[derive(Debug, Default)]
pub struct Ledger {
    /// 記録の列（挿入順 = 処理順）
    records: Vec<ScoreRecord>,
    /// 処理済みファイル名の集合
    seen: HashSet<String>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// 記録の列から台帳を構築する。ファイル名が重複する記録は先勝ちで捨てる
    pub fn from_records(records: Vec<ScoreRecord>) -> Self {
        let mut ledger = Self::new();
        for record in records {
            ledger.append(record);
        }
        ledger
    }

    /// 処理済みかどうか
    pub fn has(&self, file_name: &str) -> bool {
        self.seen.contains(file_name)
    }

    /// ファイル名で記録を引く
    pub fn get(&self, file_name: &str) -> Option<&ScoreRecord> {
        self.records.iter().find(|r| r.file_name == file_name)
    }

    /// 記録を追加し、ファイル名を処理済みにする
    ///
    /// 同名の記録が既にある場合は何もしない（重複禁止の不変条件を守る）
    pub fn append(&mut self, record: ScoreRecord) {
        if self.seen.insert(record.file_name.clone()) {
            self.records.push(record);
        }
    }

    /// 台帳を空にする
    pub fn clear(&mut self) {
        self.records.clear();
        self.seen.clear();
    }

    /// 条件に合う記録を削除する。残る記録の相対順は保持される
    pub fn remove_where<F>(&mut self, predicate: F)
    where
        F: Fn(&ScoreRecord) -> bool,
    {
        let seen = &mut self.seen;
        self.records.retain(|r| {
            if predicate(r) {
                seen.remove(&r.file_name);
                false
            } else {
                true
            }
        });
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// JSONファイルから読み込む
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let records: Vec<ScoreRecord> = serde_json::from_str(&content)
            .map_err(|e| PhotoAesError::InvalidLedger(format!("{}: {}", path.display(), e)))?;
        Ok(Self::from_records(records))
    }

    /// JSONファイルへ保存する
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.records)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(file_name: &str, score: f64) -> ScoreRecord {
        ScoreRecord {
            file_name: file_name.to_string(),
            score,
            description: String::new(),
            raw_result_path: String::new(),
        }
    }

    #[test]
    fn test_append_and_lookup() {
        let mut ledger = Ledger::new();
        ledger.append(record("a.jpg", 8.0));

        assert!(ledger.has("a.jpg"));
        assert!(!ledger.has("b.jpg"));
        assert_eq!(ledger.get("a.jpg").map(|r| r.score), Some(8.0));
        assert!(ledger.get("b.jpg").is_none());
    }

    #[test]
    fn test_append_duplicate_is_ignored() {
        let mut ledger = Ledger::new();
        ledger.append(record("a.jpg", 8.0));
        ledger.append(record("a.jpg", 3.0));

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get("a.jpg").map(|r| r.score), Some(8.0));
    }

    #[test]
    fn test_clear() {
        let mut ledger = Ledger::new();
        ledger.append(record("a.jpg", 8.0));
        ledger.append(record("b.jpg", 3.0));

        ledger.clear();
        assert!(ledger.is_empty());
        assert!(!ledger.has("a.jpg"));
    }

    #[test]
    fn test_remove_where_preserves_order() {
        let mut ledger = Ledger::new();
        ledger.append(record("a.jpg", 8.0));
        ledger.append(record("b.jpg", 3.0));
        ledger.append(record("c.jpg", 9.0));
        ledger.append(record("d.jpg", 1.0));

        ledger.remove_where(|r| r.score < 6.0);

        let names: Vec<&str> = ledger.records().iter().map(|r| r.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "c.jpg"]);
        assert!(!ledger.has("b.jpg"));
        assert!(!ledger.has("d.jpg"));
    }

    #[test]
    fn test_removed_file_can_be_appended_again() {
        let mut ledger = Ledger::new();
        ledger.append(record("a.jpg", 2.0));
        ledger.remove_where(|r| r.score < 6.0);
        ledger.append(record("a.jpg", 7.0));

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get("a.jpg").map(|r| r.score), Some(7.0));
    }

    #[test]
    fn test_from_records_drops_duplicates() {
        let ledger = Ledger::from_records(vec![
            record("a.jpg", 8.0),
            record("b.jpg", 5.0),
            record("a.jpg", 1.0),
        ]);

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.get("a.jpg").map(|r| r.score), Some(8.0));
    }
}
