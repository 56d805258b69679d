use super::dto::{AudioFormat, SynthesisRequest};
use super::error::SynthesisServiceError;
use super::ssml;
use crate::infrastructure::repositories::{
    AudioStorageRepository, TranslationRepository, TtsRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// Presigned download URLs stay valid for one hour
const PRESIGNED_URL_TTL_SECS: u64 = 3600;

/// Input text is always English; translation targets anything else
const SOURCE_LANGUAGE: &str = "en";

#[derive(Debug, Clone)]
pub struct SynthesisResult {
    pub audio_url: String,
    pub voice: String,
    pub format: AudioFormat,
    pub text_length: usize,
    pub translated_text: Option<String>,
    pub target_language: String,
    pub expires_at: DateTime<Utc>,
}

pub struct SynthesisService {
    translation_repo: Arc<dyn TranslationRepository>,
    tts_repo: Arc<dyn TtsRepository>,
    storage_repo: Arc<dyn AudioStorageRepository>,
}

impl SynthesisService {
    pub fn new(
        translation_repo: Arc<dyn TranslationRepository>,
        tts_repo: Arc<dyn TtsRepository>,
        storage_repo: Arc<dyn AudioStorageRepository>,
    ) -> Self {
        Self {
            translation_repo,
            tts_repo,
            storage_repo,
        }
    }
}

#[async_trait]
pub trait SynthesisServiceApi: Send + Sync {
    /// Turn a text request into a stored audio artifact
    ///
    /// This operation:
    /// - Validates the input text is non-empty
    /// - Translates the text when the target language is not English
    /// - Calls the TTS provider with SSML-wrapped text
    /// - Stores the audio and issues a time-limited download URL
    ///
    /// The external calls are dependent and strictly sequential; nothing is
    /// retried and a stored artifact is never cleaned up on later failure.
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesisResult, SynthesisServiceError>;
}

#[async_trait]
impl SynthesisServiceApi for SynthesisService {
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesisResult, SynthesisServiceError> {
        // 1. Validate input
        if request.text.is_empty() {
            return Err(SynthesisServiceError::Invalid(
                "Text cannot be empty".to_string(),
            ));
        }

        // The response reports the length of the original text even when
        // synthesis runs on a translation
        let text_length = request.text.chars().count();

        tracing::info!(
            text_length,
            voice = %request.voice,
            output_format = %request.output_format,
            speed = %request.speed,
            target_language = %request.target_language,
            "Synthesis request"
        );

        // 2. Translate when the target language differs from the source
        let translated_text = if request.target_language != SOURCE_LANGUAGE {
            let translated = self
                .translation_repo
                .translate(&request.text, SOURCE_LANGUAGE, &request.target_language)
                .await
                .map_err(SynthesisServiceError::Dependency)?;

            tracing::info!(
                target_language = %request.target_language,
                translated_length = translated.chars().count(),
                "Text translated"
            );

            Some(translated)
        } else {
            None
        };

        // 3. Wrap the text to synthesize with SSML for speed control
        let speech_text = translated_text.as_deref().unwrap_or(&request.text);
        let ssml_text = ssml::wrap_with_prosody(speech_text, request.speed);

        // 4. Generate a unique artifact key
        let key = format!("{}.{}", Uuid::new_v4(), request.output_format.extension());

        // 5. Synthesize speech
        let audio_data = self
            .tts_repo
            .synthesize(&ssml_text, &request.voice, request.output_format)
            .await
            .map_err(SynthesisServiceError::Dependency)?;

        tracing::info!(
            key = %key,
            audio_size = audio_data.len(),
            "Audio synthesized"
        );

        // 6. Store the artifact, fully buffered
        self.storage_repo
            .put(&key, audio_data, request.output_format.content_type())
            .await
            .map_err(SynthesisServiceError::Dependency)?;

        // 7. Issue a time-limited download URL
        let audio_url = self
            .storage_repo
            .presign(&key, Duration::from_secs(PRESIGNED_URL_TTL_SECS))
            .await
            .map_err(SynthesisServiceError::Dependency)?;

        let expires_at = Utc::now() + chrono::Duration::seconds(PRESIGNED_URL_TTL_SECS as i64);

        tracing::info!(
            key = %key,
            expires_at = %expires_at,
            "Audio artifact stored and presigned"
        );

        Ok(SynthesisResult {
            audio_url,
            voice: request.voice,
            format: request.output_format,
            text_length,
            translated_text,
            target_language: request.target_language,
            expires_at,
        })
    }
}
