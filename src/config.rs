use crate::error::{PhotoAesError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// OllamaサーバーのベースURL
    pub base_url: String,
    /// ビジョンモデル名
    pub model: String,
    /// 送信前に縮小する最大ピクセル幅
    pub max_image_size: u32,
    /// スコアしきい値のデフォルト値（1.0〜10.0）
    pub default_threshold: f64,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PhotoAesError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("photo-aes").join("config.json"))
    }

    pub fn set_model(&mut self, model: String) -> Result<()> {
        self.model = model;
        self.save()
    }

    pub fn set_base_url(&mut self, base_url: String) -> Result<()> {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self.save()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".into(),
            model: "llava-llama3:8b-v1.1-fp16".into(),
            max_image_size: 1024,
            default_threshold: 6.0,
        }
    }
}
