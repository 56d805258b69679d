use super::translation_repository::TranslationRepository;
use async_trait::async_trait;
use aws_sdk_translate::Client as TranslateClient;
use std::sync::Arc;

/// AWS Translate implementation of the translation repository
pub struct AwsTranslateRepository {
    translate_client: Arc<TranslateClient>,
}

impl AwsTranslateRepository {
    pub fn new(translate_client: Arc<TranslateClient>) -> Self {
        Self { translate_client }
    }
}

#[async_trait]
impl TranslationRepository for AwsTranslateRepository {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, String> {
        tracing::info!(
            source_language,
            target_language,
            text_length = text.len(),
            "Calling AWS Translate translate_text"
        );

        let result = self
            .translate_client
            .translate_text()
            .text(text)
            .source_language_code(source_language)
            .target_language_code(target_language)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    error_display = %e,
                    source_language,
                    target_language,
                    "AWS Translate translate_text failed"
                );
                format!("AWS Translate error: {:?}", e)
            })?;

        let translated = result.translated_text().to_string();

        tracing::debug!(
            translated_length = translated.len(),
            "AWS Translate translate_text successful"
        );

        Ok(translated)
    }
}
