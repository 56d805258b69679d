use super::tts_repository::TtsRepository;
use crate::domain::synthesis::dto::AudioFormat;
use async_trait::async_trait;
use aws_sdk_polly::{
    types::{OutputFormat, TextType, VoiceId},
    Client as PollyClient,
};
use std::sync::Arc;

/// AWS Polly implementation of the TTS repository
pub struct PollyTtsRepository {
    polly_client: Arc<PollyClient>,
}

impl PollyTtsRepository {
    pub fn new(polly_client: Arc<PollyClient>) -> Self {
        Self { polly_client }
    }

    fn polly_output_format(format: AudioFormat) -> OutputFormat {
        match format {
            AudioFormat::Mp3 => OutputFormat::Mp3,
            AudioFormat::OggVorbis => OutputFormat::OggVorbis,
            AudioFormat::Pcm => OutputFormat::Pcm,
        }
    }
}

#[async_trait]
impl TtsRepository for PollyTtsRepository {
    async fn synthesize(
        &self,
        ssml: &str,
        voice: &str,
        format: AudioFormat,
    ) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();
        let voice_id = VoiceId::from(voice);
        let output_format = Self::polly_output_format(format);

        tracing::info!(
            voice,
            voice_id = ?voice_id,
            output_format = ?output_format,
            ssml_length = ssml.len(),
            "Calling AWS Polly synthesize_speech"
        );

        // Clone voice_id for error logging since it will be moved
        let voice_id_for_error = voice_id.clone();

        let result = self
            .polly_client
            .synthesize_speech()
            .text(ssml)
            .text_type(TextType::Ssml)
            .output_format(output_format)
            .voice_id(voice_id)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    error_display = %e,
                    voice_id = ?voice_id_for_error,
                    ssml_length = ssml.len(),
                    "AWS Polly synthesize_speech failed"
                );
                format!("AWS Polly error: {:?}", e)
            })?;

        tracing::debug!("AWS Polly synthesize_speech successful, reading audio stream");

        let audio_stream = result.audio_stream.collect().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to collect audio stream from Polly response");
            format!("Failed to read audio stream: {}", e)
        })?;

        let audio_bytes = audio_stream.into_bytes().to_vec();

        let duration = start_time.elapsed();
        tracing::info!(
            provider = "polly",
            latency_ms = duration.as_millis(),
            audio_size_bytes = audio_bytes.len(),
            "TTS synthesis completed"
        );

        Ok(audio_bytes)
    }
}
