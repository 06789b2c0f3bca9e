//! OpenAI Whisper client for voice input.

use async_trait::async_trait;
use tracing::debug;

use jarvis_common::TransportError;
use jarvis_core::SpeechToText;

const WHISPER_API_URL: &str = "https://api.openai.com/v1/audio/transcriptions";

/// Whisper transcriber configuration.
#[derive(Clone)]
pub struct WhisperTranscriberConfig {
    pub api_key: String,
    pub model: String,
    pub language: Option<String>,
}

impl std::fmt::Debug for WhisperTranscriberConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhisperTranscriberConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("language", &self.language)
            .finish()
    }
}

impl WhisperTranscriberConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "whisper-1".to_string(),
            language: None,
        }
    }

    pub fn with_language(mut self, lang: impl Into<String>) -> Self {
        self.language = Some(lang.into());
        self
    }
}

/// `SpeechToText` backed by the Whisper API.
pub struct WhisperTranscriber {
    config: WhisperTranscriberConfig,
    http: reqwest::Client,
}

impl WhisperTranscriber {
    pub fn new(config: WhisperTranscriberConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .timeout(std::time::Duration::from_secs(300))
                .build()
                .expect("failed to build HTTP client"),
        }
    }
}

#[async_trait]
impl SpeechToText for WhisperTranscriber {
    /// Transcribe audio bytes to text.
    ///
    /// `audio` should be valid audio in a supported container; the
    /// extension of `filename` (e.g. "clip.wav") selects the mime type.
    async fn transcribe(&self, audio: Vec<u8>, filename: &str) -> Result<String, TransportError> {
        debug!(
            model = %self.config.model,
            size = audio.len(),
            "transcription request"
        );

        let mime = match filename.rsplit('.').next() {
            Some("mp3") => "audio/mpeg",
            Some("m4a") => "audio/mp4",
            Some("webm") => "audio/webm",
            Some("ogg") => "audio/ogg",
            _ => "audio/wav",
        };

        let file_part = reqwest::multipart::Part::bytes(audio)
            .file_name(filename.to_string())
            .mime_str(mime)
            .map_err(|e| TransportError::Transcription(e.to_string()))?;

        let mut form = reqwest::multipart::Form::new()
            .part("file", file_part)
            .text("model", self.config.model.clone());

        if let Some(ref lang) = self.config.language {
            form = form.text("language", lang.clone());
        }

        let response = self
            .http
            .post(WHISPER_API_URL)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .multipart(form)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: text.chars().take(200).collect(),
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))?;

        json["text"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| TransportError::Transcription("no 'text' field in response".to_string()))
    }
}
