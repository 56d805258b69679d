use crate::domain::synthesis::dto::AudioFormat;
use async_trait::async_trait;

/// Repository for TTS synthesis operations.
/// Abstracts the underlying TTS provider (AWS Polly, etc.)
///
/// Implementations are responsible for:
/// - Declaring the input as SSML to the provider
/// - Reading the provider's audio stream fully into memory
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize SSML-annotated text to audio bytes
    ///
    /// # Arguments
    /// * `ssml` - A complete SSML document (already escaped)
    /// * `voice` - Provider voice identifier, passed through unvalidated
    /// * `format` - Output audio container
    ///
    /// # Errors
    /// Returns error if synthesis fails or the provider is unavailable
    async fn synthesize(
        &self,
        ssml: &str,
        voice: &str,
        format: AudioFormat,
    ) -> Result<Vec<u8>, String>;
}
