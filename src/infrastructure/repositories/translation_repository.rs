use async_trait::async_trait;

/// Repository for machine translation.
/// Abstracts the underlying translation provider (AWS Translate, etc.)
#[async_trait]
pub trait TranslationRepository: Send + Sync {
    /// Translate text between two ISO 639-1 language codes
    ///
    /// # Errors
    /// Returns error if translation fails or the provider is unavailable
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, String>;
}
