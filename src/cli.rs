use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photo-aes")]
#[command(about = "画像美学スコアリング・低品質画像整理ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// フォルダ内の画像をスコアリングして結果を保存
    Rate {
        /// 画像フォルダのパス
        #[arg(required = true)]
        folder: PathBuf,

        /// モデル名（省略時は設定値）
        #[arg(short, long)]
        model: Option<String>,

        /// スコアしきい値（1.0〜10.0、省略時は設定値）
        #[arg(short, long)]
        threshold: Option<f64>,

        /// 出力JSONファイル（デフォルト: 入力フォルダ/scores.json）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 既存の結果を再利用（スコアリング済みの画像をスキップ）
        #[arg(long)]
        use_cache: bool,
    },

    /// 保存済みの結果から分析レポートを生成
    Report {
        /// スコアJSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// レポート出力先フォルダ（省略時は入力ファイルの親フォルダ）
        #[arg(short, long)]
        folder: Option<PathBuf>,

        /// スコアしきい値（1.0〜10.0、省略時は設定値）
        #[arg(short, long)]
        threshold: Option<f64>,
    },

    /// しきい値未満の低スコア画像を削除
    Clean {
        /// スコアJSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 画像フォルダ（省略時は入力ファイルの親フォルダ）
        #[arg(short, long)]
        folder: Option<PathBuf>,

        /// スコアしきい値（1.0〜10.0、省略時は設定値）
        #[arg(short, long)]
        threshold: Option<f64>,

        /// 確認プロンプトを省略
        #[arg(short, long)]
        yes: bool,
    },

    /// スコアリングからレポート出力まで一括実行
    Run {
        /// 画像フォルダのパス
        #[arg(required = true)]
        folder: PathBuf,

        /// モデル名（省略時は設定値）
        #[arg(short, long)]
        model: Option<String>,

        /// スコアしきい値（1.0〜10.0、省略時は設定値）
        #[arg(short, long)]
        threshold: Option<f64>,

        /// レポート出力後に低スコア画像を削除
        #[arg(long)]
        delete: bool,

        /// 削除時の確認プロンプトを省略
        #[arg(short, long)]
        yes: bool,

        /// 既存の結果を再利用（スコアリング済みの画像をスキップ）
        #[arg(long)]
        use_cache: bool,
    },

    /// 保存済みの結果を全消去
    Clear {
        /// スコアJSONファイル
        #[arg(required = true)]
        input: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// モデル名を設定
        #[arg(long)]
        set_model: Option<String>,

        /// OllamaのベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
