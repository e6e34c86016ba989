#[cfg(test)]
mod tests {
    use backforge::app::gemini_client::{
        GeminiClient, GenerationError, API_KEY_ENV, DEFAULT_MODEL, MODEL_ENV,
    };

    /// Every `from_env` scenario runs inside this one test because the test
    /// binary's threads share the process environment; splitting these up
    /// would let parallel tests race on the variables.
    #[test]
    fn test_from_env_credential_handling() {
        std::env::remove_var(API_KEY_ENV);
        std::env::remove_var(MODEL_ENV);

        // Missing credential: construction fails before any request exists.
        let err = GeminiClient::from_env().expect_err("missing key must fail");
        assert!(matches!(err, GenerationError::Configuration(_)));
        assert!(err.to_string().contains(API_KEY_ENV));

        // A key that is only whitespace counts as missing.
        std::env::set_var(API_KEY_ENV, "   ");
        let err = GeminiClient::from_env().expect_err("blank key must fail");
        assert!(matches!(err, GenerationError::Configuration(_)));

        // With a credential the client comes up on the default model.
        std::env::set_var(API_KEY_ENV, "test-key");
        let client = GeminiClient::from_env().expect("key present");
        assert_eq!(client.model(), DEFAULT_MODEL);

        // GEMINI_MODEL overrides the default.
        std::env::set_var(MODEL_ENV, "gemini-2.5-pro");
        let client = GeminiClient::from_env().expect("key present");
        assert_eq!(client.model(), "gemini-2.5-pro");

        // A blank override falls back to the default.
        std::env::set_var(MODEL_ENV, "  ");
        let client = GeminiClient::from_env().expect("key present");
        assert_eq!(client.model(), DEFAULT_MODEL);

        std::env::remove_var(API_KEY_ENV);
        std::env::remove_var(MODEL_ENV);
    }

    #[test]
    fn test_explicit_construction_keeps_the_given_model() {
        let client =
            GeminiClient::new("key".to_string(), "custom-model".to_string()).expect("builds");
        assert_eq!(client.model(), "custom-model");
    }

    #[test]
    fn test_error_display_distinguishes_the_failure_modes() {
        let config = GenerationError::Configuration("GEMINI_API_KEY not found".to_string());
        let request = GenerationError::Request("service returned 503".to_string());

        assert_eq!(
            config.to_string(),
            "Gemini client is not configured: GEMINI_API_KEY not found"
        );
        assert_eq!(
            request.to_string(),
            "Code generation failed: service returned 503"
        );
        assert_ne!(config, request);
    }

    #[test]
    fn test_generation_error_is_a_std_error() {
        let err: Box<dyn std::error::Error> =
            Box::new(GenerationError::Request("timed out".to_string()));
        assert!(err.to_string().contains("timed out"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_errors_compare_by_variant_and_message() {
        assert_eq!(
            GenerationError::Request("x".to_string()),
            GenerationError::Request("x".to_string())
        );
        assert_ne!(
            GenerationError::Request("x".to_string()),
            GenerationError::Request("y".to_string())
        );
        assert_ne!(
            GenerationError::Configuration("x".to_string()),
            GenerationError::Request("x".to_string())
        );
    }
}
