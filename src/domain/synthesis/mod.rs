pub mod dto;
pub mod error;
pub mod service;
pub mod ssml;
pub mod voice;

pub use dto::{AudioFormat, Speed, SynthesisData, SynthesisRequest, SynthesisResponse};
pub use error::SynthesisServiceError;
pub use service::{SynthesisResult, SynthesisService, SynthesisServiceApi};
