//! プロンプト生成モジュール
//!
//! 美学評価用の固定プロンプト。応答はXML形式を要求する。

/// 美学評価プロンプト
pub const RATING_PROMPT: &str = r#"この画像の美学的な品質を分析し、1〜10点で評価してください。
以下のXML形式で分析結果を出力してください:
<aesthetic_rating>
    <score>評価点（1〜10の数値）</score>
    <description>画像内容の簡潔な説明</description>
    <analysis>
        構図・色彩・主題などの観点を含む評価理由。
    </analysis>
</aesthetic_rating>
必ずこのXML形式に厳密に従い、全体を300字以内に収めてください。
"#;
