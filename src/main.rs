use clap::Parser;
use photo_aes_rust::{cli, config, curator, error, ledger, report, runner, scanner, scorer};

use cli::{Cli, Commands};
use config::Config;
use error::{PhotoAesError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use ledger::{Ledger, ScoreRecord};
use scorer::{OllamaScorer, ScoreBackend};
use std::path::{Path, PathBuf};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Rate { folder, model, threshold, output, use_cache } => {
            println!("📸 photo-aes - 画像スコアリング\n");

            let model = model.unwrap_or_else(|| config.model.clone());
            let threshold = threshold.unwrap_or(config.default_threshold);
            let output = output.unwrap_or_else(|| folder.join("scores.json"));

            // 1. 画像スキャン
            println!("[1/3] 画像をスキャン中...");
            let images = scanner::scan_folder(&folder)?;
            println!("✔ {}枚の画像を検出\n", images.len());

            if images.is_empty() {
                return Err(PhotoAesError::NoImagesFound(folder.display().to_string()));
            }

            // 2. スコアリング
            let mut ledger = load_ledger_if_cached(use_cache, &output)?;

            println!("[2/3] スコアリング中... (モデル: {})", model);
            let backend = OllamaScorer::new(&config.base_url, config.max_image_size);
            score_with_progress(&images, &backend, &model, &mut ledger, cli.verbose).await?;
            println!("✔ スコアリング完了\n");

            // 3. レポート出力と結果保存
            println!("[3/3] 結果を保存中...");
            print_summary(ledger.records(), threshold);
            let report_path = report::write_report(&folder, ledger.records(), threshold)?;
            println!("✔ レポート出力: {}", report_path.display());

            ledger.save(&output)?;
            println!("✔ 結果を保存: {}", output.display());

            println!("\n✅ 完了");
        }

        Commands::Report { input, folder, threshold } => {
            println!("📄 photo-aes - 分析レポート\n");

            let threshold = threshold.unwrap_or(config.default_threshold);
            let folder = folder.unwrap_or_else(|| parent_folder(&input));
            let ledger = Ledger::load(&input)?;

            print_summary(ledger.records(), threshold);
            let report_path = report::write_report(&folder, ledger.records(), threshold)?;
            println!("\n✔ レポート出力: {}", report_path.display());
        }

        Commands::Clean { input, folder, threshold, yes } => {
            println!("🗑 photo-aes - 低スコア画像の削除\n");

            let threshold = threshold.unwrap_or(config.default_threshold);
            let folder = folder.unwrap_or_else(|| parent_folder(&input));
            let mut ledger = Ledger::load(&input)?;

            if ledger.is_empty() {
                println!("削除対象の結果がありません。先に rate を実行してください");
                return Ok(());
            }

            let targets = ledger.records().iter().filter(|r| r.score < threshold).count();
            if targets == 0 {
                println!("スコア{}未満の画像はありません", threshold);
                return Ok(());
            }

            if !confirm_delete(targets, threshold, yes)? {
                println!("キャンセルしました");
                return Ok(());
            }

            let (deleted_count, remaining) =
                curator::delete_below(&folder, ledger.records(), threshold);
            ledger.remove_where(|r| r.score < threshold);
            ledger.save(&input)?;

            println!("✔ {}枚の低スコア画像を削除しました（残り{}件）", deleted_count, remaining.len());
            println!("✔ 結果を更新: {}", input.display());
        }

        Commands::Run { folder, model, threshold, delete, yes, use_cache } => {
            println!("🚀 photo-aes - 一括処理\n");

            let model = model.unwrap_or_else(|| config.model.clone());
            let threshold = threshold.unwrap_or(config.default_threshold);
            let output = folder.join("scores.json");
            let total_steps = if delete { 4 } else { 3 };

            // 1. Scan
            println!("[1/{}] 画像をスキャン中...", total_steps);
            let images = scanner::scan_folder(&folder)?;
            println!("✔ {}枚の画像を検出\n", images.len());

            if images.is_empty() {
                return Err(PhotoAesError::NoImagesFound(folder.display().to_string()));
            }

            // 2. Score
            let mut ledger = load_ledger_if_cached(use_cache, &output)?;

            println!("[2/{}] スコアリング中... (モデル: {})", total_steps, model);
            let backend = OllamaScorer::new(&config.base_url, config.max_image_size);
            score_with_progress(&images, &backend, &model, &mut ledger, cli.verbose).await?;
            println!("✔ スコアリング完了\n");

            // 3. Report
            println!("[3/{}] レポートを出力中...", total_steps);
            print_summary(ledger.records(), threshold);
            let report_path = report::write_report(&folder, ledger.records(), threshold)?;
            println!("✔ レポート出力: {}", report_path.display());

            // 4. Delete (optional)
            if delete {
                println!("\n[4/{}] 低スコア画像を削除中...", total_steps);
                let targets = ledger.records().iter().filter(|r| r.score < threshold).count();

                if targets == 0 {
                    println!("スコア{}未満の画像はありません", threshold);
                } else if confirm_delete(targets, threshold, yes)? {
                    let (deleted_count, remaining) =
                        curator::delete_below(&folder, ledger.records(), threshold);
                    ledger.remove_where(|r| r.score < threshold);
                    println!("✔ {}枚の低スコア画像を削除しました（残り{}件）", deleted_count, remaining.len());
                } else {
                    println!("削除をキャンセルしました");
                }
            }

            ledger.save(&output)?;
            println!("✔ 結果を保存: {}", output.display());

            println!("\n✅ 完了");
        }

        Commands::Clear { input } => {
            let mut ledger = Ledger::load(&input)?;
            let count = ledger.len();

            ledger.clear();
            ledger.save(&input)?;

            println!("✔ {}件の結果を消去しました: {}", count, input.display());
        }

        Commands::Config { set_model, set_base_url, show } => {
            let mut config = config;

            if let Some(model) = set_model {
                config.set_model(model)?;
                println!("✔ モデルを設定しました");
            }

            if let Some(base_url) = set_base_url {
                config.set_base_url(base_url)?;
                println!("✔ ベースURLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  ベースURL: {}", config.base_url);
                println!("  モデル: {}", config.model);
                println!("  最大画像サイズ: {}px", config.max_image_size);
                println!("  デフォルトしきい値: {}", config.default_threshold);
            }
        }
    }

    Ok(())
}

/// --use-cache指定時に既存のスコアJSONを台帳として読み込む
fn load_ledger_if_cached(use_cache: bool, output: &Path) -> Result<Ledger> {
    if use_cache && output.exists() {
        let ledger = Ledger::load(output)?;
        println!("- 既存の結果を読み込み: {}件", ledger.len());
        Ok(ledger)
    } else {
        Ok(Ledger::new())
    }
}

/// プログレスバー付きでバッチスコアリングを実行する
async fn score_with_progress(
    images: &[scanner::ImageInfo],
    backend: &dyn ScoreBackend,
    model: &str,
    ledger: &mut Ledger,
    verbose: bool,
) -> Result<()> {
    let bar = ProgressBar::new(images.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    runner::run_batch(images, backend, model, ledger, verbose, |done, _total| {
        bar.set_position(done as u64);
    })
    .await?;

    bar.finish_and_clear();
    Ok(())
}

/// 集計値を表示する
fn print_summary(records: &[ScoreRecord], threshold: f64) {
    let summary = report::summarize(records, threshold);
    println!("- 処理した画像の総数: {}", summary.total);
    println!("- スコア0の画像数: {}", summary.zero);
    println!("- スコアが0より大きく{}未満の画像数: {}", threshold, summary.low);
}

/// 削除の確認プロンプト（--yes指定時はスキップ）
fn confirm_delete(targets: usize, threshold: f64, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }

    dialoguer::Confirm::new()
        .with_prompt(format!("スコア{}未満の画像{}枚を削除しますか?", threshold, targets))
        .default(false)
        .interact()
        .map_err(|e| PhotoAesError::Prompt(e.to_string()))
}

fn parent_folder(input: &Path) -> PathBuf {
    input
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf()
}
