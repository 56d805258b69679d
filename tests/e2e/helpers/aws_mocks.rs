use aws_sdk_polly::operation::synthesize_speech::SynthesizeSpeechOutput;
use aws_sdk_polly::primitives::ByteStream;
use aws_sdk_polly::Client as PollyClient;
use aws_sdk_s3::operation::head_bucket::HeadBucketOutput;
use aws_sdk_s3::operation::put_object::PutObjectOutput;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_translate::operation::translate_text::TranslateTextOutput;
use aws_sdk_translate::Client as TranslateClient;
use aws_smithy_mocks_experimental::{mock, MockResponseInterceptor, RuleMode};

pub const TEST_BUCKET: &str = "test-audio-bucket";

/// Minimal valid MP3 file (silence)
pub fn mock_audio_bytes() -> Vec<u8> {
    vec![
        0xFF, 0xFB, 0x90, 0x00, // MP3 frame header
        0x00, 0x00, 0x00, 0x00, // Some padding
    ]
}

/// Translate client that answers any en→* request with a fixed translation
pub fn mock_translate_client(translated: &'static str) -> TranslateClient {
    let translate_rule = mock!(aws_sdk_translate::Client::translate_text)
        .match_requests(|req| req.source_language_code() == Some("en"))
        .then_output(move || {
            TranslateTextOutput::builder()
                .translated_text(translated)
                .source_language_code("en")
                .target_language_code("fr")
                .build()
                .expect("valid translate output")
        });

    TranslateClient::from_conf(
        aws_sdk_translate::Config::builder()
            .with_test_defaults()
            .region(aws_sdk_translate::config::Region::new("us-east-1"))
            .interceptor(
                MockResponseInterceptor::new()
                    .rule_mode(RuleMode::MatchAny)
                    .with_rule(&translate_rule),
            )
            .build(),
    )
}

/// Polly client that answers every synthesis request with a short MP3
pub fn mock_polly_client() -> PollyClient {
    let synthesize_rule = mock!(aws_sdk_polly::Client::synthesize_speech).then_output(|| {
        SynthesizeSpeechOutput::builder()
            .content_type("audio/mpeg")
            .audio_stream(ByteStream::from(mock_audio_bytes()))
            .build()
    });

    PollyClient::from_conf(
        aws_sdk_polly::Config::builder()
            .with_test_defaults()
            .region(aws_sdk_polly::config::Region::new("us-east-1"))
            .interceptor(
                MockResponseInterceptor::new()
                    .rule_mode(RuleMode::MatchAny)
                    .with_rule(&synthesize_rule),
            )
            .build(),
    )
}

/// S3 client that accepts uploads to the test bucket and reports it healthy.
/// Presigning does not hit the network, so presigned URLs come out real.
pub fn mock_s3_client() -> S3Client {
    let put_rule = mock!(aws_sdk_s3::Client::put_object)
        .match_requests(|req| req.bucket() == Some(TEST_BUCKET))
        .then_output(|| PutObjectOutput::builder().build());
    let head_rule = mock!(aws_sdk_s3::Client::head_bucket)
        .then_output(|| HeadBucketOutput::builder().build());

    S3Client::from_conf(
        aws_sdk_s3::Config::builder()
            .with_test_defaults()
            .region(aws_sdk_s3::config::Region::new("us-east-1"))
            .interceptor(
                MockResponseInterceptor::new()
                    .rule_mode(RuleMode::MatchAny)
                    .allow_passthrough()
                    .with_rule(&put_rule)
                    .with_rule(&head_rule),
            )
            .build(),
    )
}

// Clients below point at a non-existent endpoint so every call fails,
// exercising the provider-error path.

pub fn unreachable_translate_client() -> TranslateClient {
    let config = aws_sdk_translate::Config::builder()
        .behavior_version(aws_sdk_translate::config::BehaviorVersion::latest())
        .region(aws_sdk_translate::config::Region::new("us-east-1"))
        .endpoint_url("http://localhost:9999")
        .build();

    TranslateClient::from_conf(config)
}

pub fn unreachable_polly_client() -> PollyClient {
    let config = aws_sdk_polly::Config::builder()
        .behavior_version(aws_sdk_polly::config::BehaviorVersion::latest())
        .region(aws_sdk_polly::config::Region::new("us-east-1"))
        .endpoint_url("http://localhost:9999")
        .build();

    PollyClient::from_conf(config)
}

pub fn unreachable_s3_client() -> S3Client {
    let config = aws_sdk_s3::Config::builder()
        .behavior_version(aws_sdk_s3::config::BehaviorVersion::latest())
        .region(aws_sdk_s3::config::Region::new("us-east-1"))
        .endpoint_url("http://localhost:9999")
        .build();

    S3Client::from_conf(config)
}
