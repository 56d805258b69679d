use serde::{Deserialize, Serialize};

/// Request for POST /api/synthesize
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisRequest {
    pub text: String,
    #[serde(default = "default_voice")]
    pub voice: String,
    #[serde(default)]
    pub output_format: AudioFormat,
    #[serde(default)]
    pub speed: Speed,
    #[serde(default = "default_target_language")]
    pub target_language: String,
}

fn default_voice() -> String {
    "Joanna".to_string()
}

fn default_target_language() -> String {
    "en".to_string()
}

/// Prosody rate passed to the synthesis engine, verbatim SSML values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Speed {
    XSlow,
    Slow,
    #[default]
    Medium,
    Fast,
    XFast,
}

impl Speed {
    pub fn as_str(&self) -> &'static str {
        match self {
            Speed::XSlow => "x-slow",
            Speed::Slow => "slow",
            Speed::Medium => "medium",
            Speed::Fast => "fast",
            Speed::XFast => "x-fast",
        }
    }
}

impl std::fmt::Display for Speed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Audio container produced by the synthesis engine.
/// The wire name doubles as the artifact file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AudioFormat {
    #[default]
    Mp3,
    OggVorbis,
    Pcm,
}

impl AudioFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
            AudioFormat::OggVorbis => "ogg_vorbis",
            AudioFormat::Pcm => "pcm",
        }
    }

    pub fn extension(&self) -> &'static str {
        self.as_str()
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "audio/mpeg",
            AudioFormat::OggVorbis => "audio/ogg",
            AudioFormat::Pcm => "audio/pcm",
        }
    }
}

impl std::fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Success envelope for POST /api/synthesize
#[derive(Debug, Serialize, Deserialize)]
pub struct SynthesisResponse {
    pub success: bool,
    pub data: SynthesisData,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisData {
    pub audio_url: String,
    pub voice: String,
    pub format: AudioFormat,
    /// Character count of the original input text, not the translated text
    pub text_length: usize,
    /// None (serialized as null) when no translation happened
    pub translated_text: Option<String>,
    pub target_language: String,
    /// ISO-8601 timestamp with a trailing "Z"
    pub expires_at: String,
}
