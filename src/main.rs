use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voicecast_backend::controllers::synthesis::SynthesisController;
use voicecast_backend::domain::synthesis::voice::VOICE_CATALOG;
use voicecast_backend::domain::synthesis::SynthesisService;
use voicecast_backend::infrastructure::config::{Config, LogFormat};
use voicecast_backend::infrastructure::http::start_http_server;
use voicecast_backend::infrastructure::repositories::{
    AudioStorageRepository, AwsTranslateRepository, PollyTtsRepository, S3StorageRepository,
    TranslationRepository, TtsRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting VoiceCast Backend on {}:{}",
        config.host,
        config.port
    );

    // Check for AWS credentials in environment (for debugging)
    let has_access_key = std::env::var("AWS_ACCESS_KEY_ID").is_ok();
    let has_secret_key = std::env::var("AWS_SECRET_ACCESS_KEY").is_ok();
    tracing::info!(
        has_access_key_id = has_access_key,
        has_secret_access_key = has_secret_key,
        "AWS credentials environment check"
    );

    if !has_access_key || !has_secret_key {
        tracing::warn!("AWS credentials not found in environment variables. Will attempt to use other credential providers (instance metadata, etc.)");
    }

    tracing::info!("Initializing AWS clients with region: {}", config.aws_region);

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.aws_region.clone()))
        .load()
        .await;

    // Log AWS config details (without exposing credentials)
    tracing::info!(
        region = ?aws_config.region(),
        "AWS configuration loaded"
    );

    let translate_client = Arc::new(aws_sdk_translate::Client::new(&aws_config));
    let polly_client = Arc::new(aws_sdk_polly::Client::new(&aws_config));
    let s3_client = Arc::new(aws_sdk_s3::Client::new(&aws_config));
    tracing::info!("AWS Translate, Polly and S3 clients initialized");

    let config = Arc::new(config);

    tracing::info!(
        languages = VOICE_CATALOG.len(),
        "Voice catalog loaded"
    );

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (inject AWS clients)
    tracing::info!("Instantiating repositories...");
    let translation_repo: Arc<dyn TranslationRepository> =
        Arc::new(AwsTranslateRepository::new(translate_client));
    let tts_repo: Arc<dyn TtsRepository> = Arc::new(PollyTtsRepository::new(polly_client));
    let storage_repo: Arc<dyn AudioStorageRepository> = Arc::new(S3StorageRepository::new(
        s3_client,
        config.audio_bucket.clone(),
    ));

    // 2. Instantiate services (inject repositories)
    tracing::info!("Instantiating services...");
    let synthesis_service = Arc::new(SynthesisService::new(
        translation_repo,
        tts_repo,
        storage_repo.clone(),
    ));

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let synthesis_controller = Arc::new(SynthesisController::new(synthesis_service));

    // Start HTTP server with all routes
    start_http_server(config, storage_repo, synthesis_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voicecast_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voicecast_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
