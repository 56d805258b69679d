use axum::{extract::State, Json};
use chrono::SecondsFormat;
use std::sync::Arc;

use crate::{
    domain::synthesis::{
        dto::{SynthesisData, SynthesisRequest, SynthesisResponse},
        SynthesisService, SynthesisServiceApi,
    },
    error::{AppError, AppResult},
    infrastructure::http::AppJson,
};

pub struct SynthesisController {
    synthesis_service: Arc<SynthesisService>,
}

impl SynthesisController {
    pub fn new(synthesis_service: Arc<SynthesisService>) -> Self {
        Self { synthesis_service }
    }

    /// POST /api/synthesize - Convert text to speech and return a download URL
    pub async fn synthesize(
        State(controller): State<Arc<SynthesisController>>,
        AppJson(request): AppJson<SynthesisRequest>,
    ) -> AppResult<Json<SynthesisResponse>> {
        let result = controller
            .synthesis_service
            .synthesize(request)
            .await
            .map_err(AppError::from)?;

        Ok(Json(SynthesisResponse {
            success: true,
            data: SynthesisData {
                audio_url: result.audio_url,
                voice: result.voice,
                format: result.format,
                text_length: result.text_length,
                translated_text: result.translated_text,
                target_language: result.target_language,
                // Single trailing Z designator, no numeric offset
                expires_at: result.expires_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            },
        }))
    }
}
