//! Ollama APIクライアント
//!
//! ローカルのOllamaサーバーの /api/chat へ画像付きリクエストを送る。
//! モデルの生成は長くかかるため、リクエストにタイムアウトは設定しない。

use super::{fallback_response, ScoreBackend};
use crate::prompts::RATING_PROMPT;
use async_trait::async_trait;
use base64::Engine as _;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub struct OllamaScorer {
    base_url: String,
    max_image_size: u32,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
    images: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

impl OllamaScorer {
    pub fn new(base_url: &str, max_image_size: u32) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            max_image_size,
            client: Client::new(),
        }
    }

    /// 画像を読み込んでBase64エンコードする
    ///
    /// 長辺がmax_image_sizeを超える画像は縮小してJPEGで再エンコードする。
    /// デコードできない形式はそのままのバイト列を送る。
    fn encode_image(&self, image_path: &Path) -> std::result::Result<String, String> {
        let bytes = std::fs::read(image_path)
            .map_err(|e| format!("画像読み込みエラー: {}", e))?;

        if let Ok(img) = image::load_from_memory(&bytes) {
            if img.width().max(img.height()) > self.max_image_size {
                let thumb = img.thumbnail(self.max_image_size, self.max_image_size);
                let mut cursor = std::io::Cursor::new(Vec::new());
                if thumb
                    .to_rgb8()
                    .write_to(&mut cursor, image::ImageFormat::Jpeg)
                    .is_ok()
                {
                    return Ok(base64::engine::general_purpose::STANDARD.encode(cursor.into_inner()));
                }
            }
        }

        Ok(base64::engine::general_purpose::STANDARD.encode(&bytes))
    }

    async fn call_api(
        &self,
        image_path: &Path,
        model: &str,
    ) -> std::result::Result<String, String> {
        let encoded = self.encode_image(image_path)?;

        let request = ChatRequest {
            model: model.to_string(),
            messages: vec![Message {
                role: "user",
                content: RATING_PROMPT.to_string(),
                images: vec![encoded],
            }],
            stream: false,
        };

        let url = format!("{}/api/chat", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("Ollama接続エラー: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(format!("Ollama APIエラー (status {}): {}", status, body));
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| format!("Ollama応答の読み込みエラー: {}", e))?;

        Ok(chat.message.content)
    }
}

#[async_trait]
impl ScoreBackend for OllamaScorer {
    async fn score(&self, image_path: &Path, model: &str) -> String {
        match self.call_api(image_path, model).await {
            Ok(text) => text,
            Err(e) => {
                eprintln!("画像 {} の処理でエラー: {}", image_path.display(), e);
                fallback_response(&e)
            }
        }
    }
}
