pub mod aws_translate_repository;
pub mod polly_tts_repository;
pub mod s3_storage_repository;
pub mod storage_repository;
pub mod translation_repository;
pub mod tts_repository;

pub use aws_translate_repository::AwsTranslateRepository;
pub use polly_tts_repository::PollyTtsRepository;
pub use s3_storage_repository::S3StorageRepository;
pub use storage_repository::AudioStorageRepository;
pub use translation_repository::TranslationRepository;
pub use tts_repository::TtsRepository;
