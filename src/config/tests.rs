use super::*;
use serial_test::serial;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_paperlens_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("PAPERLENS_PROVIDER");
        env::remove_var("PAPERLENS_MODEL");
        env::remove_var("PAPERLENS_OLLAMA_URL");
        env::remove_var("PAPERLENS_TIMEOUT_SECS");
        env::remove_var("PAPERLENS_OPENAI_API_KEY");
        env::remove_var("PAPERLENS_OUTPUT_DIR");
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.provider, None);
    assert_eq!(config.model, None);
    assert_eq!(config.ollama_url, "http://localhost:11434");
    assert_eq!(config.timeout_secs, 120);
    assert!(config.output_dir.is_none());
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_paperlens_env();

    let config = Config::from_env().expect("should parse with defaults");

    assert_eq!(config.provider, None);
    assert_eq!(config.ollama_url, "http://localhost:11434");
    assert_eq!(config.timeout_secs, 120);
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_paperlens_env();

    let config = with_env_vars(
        &[
            ("PAPERLENS_PROVIDER", "ollama"),
            ("PAPERLENS_MODEL", "llama3"),
            ("PAPERLENS_OLLAMA_URL", "http://box:11434"),
            ("PAPERLENS_TIMEOUT_SECS", "30"),
            ("PAPERLENS_OUTPUT_DIR", "/tmp/rankings"),
        ],
        || Config::from_env().expect("should parse overrides"),
    );

    assert_eq!(config.provider, Some(Provider::Ollama));
    assert_eq!(config.model.as_deref(), Some("llama3"));
    assert_eq!(config.ollama_url, "http://box:11434");
    assert_eq!(config.timeout_secs, 30);
    assert_eq!(config.output_dir, Some(PathBuf::from("/tmp/rankings")));
}

#[test]
#[serial]
fn test_from_env_rejects_unknown_provider() {
    clear_paperlens_env();

    let result = with_env_vars(&[("PAPERLENS_PROVIDER", "cohere")], Config::from_env);
    assert!(matches!(result, Err(ConfigError::UnknownProvider { .. })));
}

#[test]
#[serial]
fn test_from_env_rejects_bad_timeout() {
    clear_paperlens_env();

    let result = with_env_vars(&[("PAPERLENS_TIMEOUT_SECS", "soon")], Config::from_env);
    assert!(matches!(result, Err(ConfigError::TimeoutParseError { .. })));
}

#[test]
fn test_validate_requires_model_for_provider() {
    let config = Config {
        provider: Some(Provider::Ollama),
        model: None,
        ..Config::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::MissingModel)));

    let config = Config {
        provider: Some(Provider::Ollama),
        model: Some("  ".to_string()),
        ..Config::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::MissingModel)));
}

#[test]
fn test_backend_none_without_provider() {
    let config = Config::default();
    assert!(config.backend().expect("valid config").is_none());
}

#[test]
fn test_backend_builds_ollama() {
    let config = Config {
        provider: Some(Provider::Ollama),
        model: Some("llama3".to_string()),
        ..Config::default()
    };

    assert!(config.backend().expect("valid config").is_some());
}

#[test]
fn test_backend_openai_with_explicit_key() {
    let config = Config {
        provider: Some(Provider::OpenAi),
        model: Some("gpt-4o-mini".to_string()),
        openai_api_key: Some("sk-test".to_string()),
        ..Config::default()
    };

    assert!(config.backend().expect("valid config").is_some());
}
