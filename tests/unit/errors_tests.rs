/*!
 * Tests for error types
 */

use epistula::errors::{AppError, ConfigError, LetterError, ProviderError, TranslationError};

#[test]
fn test_providerError_display_shouldIncludeDetails() {
    let err = ProviderError::ApiError {
        status_code: 500,
        message: "internal".to_string(),
    };
    assert_eq!(err.to_string(), "API responded with error: 500 - internal");
}

#[test]
fn test_translationError_fromProvider_shouldKeepVariant() {
    let err: TranslationError = ProviderError::RateLimitExceeded("slow down".to_string()).into();
    assert!(matches!(
        err,
        TranslationError::Provider(ProviderError::RateLimitExceeded(ref m)) if m == "slow down"
    ));
}

#[test]
fn test_stageMisalignment_display_shouldListCounts() {
    let err = TranslationError::StageMisalignment {
        paragraph_index: 2,
        original: 3,
        direct: 2,
        rhetorical: 2,
    };
    let message = err.to_string();
    assert!(message.contains("Paragraph 2"));
    assert!(message.contains("3 original"));
}

#[test]
fn test_appError_conversions_shouldWrapSources() {
    let app: AppError = LetterError::InvalidTitle("no dot".to_string()).into();
    assert!(matches!(app, AppError::Letter(_)));

    let app: AppError = ConfigError::MissingApiKey("OPENAI_API_KEY".to_string()).into();
    assert!(app.to_string().contains("OPENAI_API_KEY"));

    let app: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
    assert!(matches!(app, AppError::File(_)));

    let app: AppError = anyhow::anyhow!("boom").into();
    assert!(matches!(app, AppError::Unknown(ref m) if m == "boom"));
}
