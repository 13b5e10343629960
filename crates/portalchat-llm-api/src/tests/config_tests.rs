use crate::config::{
    detect_backend, get_default_url_for_backend, normalize_api_url, parse_model_spec,
    BackendType, ClientConfig, ClientFactory,
};
use crate::error::ProviderError;

#[test]
fn test_parse_model_full_format() {
    let (model, backend, url) = parse_model_spec("llama3-8b-8192@llama(http://localhost:8080)");

    assert_eq!(model, "llama3-8b-8192");
    assert_eq!(backend, Some(BackendType::Llama));
    assert_eq!(url, Some("http://localhost:8080".to_string()));
}

#[test]
fn test_parse_model_backend_only() {
    let (model, backend, url) = parse_model_spec("gpt-4o-mini@openai");

    assert_eq!(model, "gpt-4o-mini");
    assert_eq!(backend, Some(BackendType::OpenAI));
    assert_eq!(url, None);
}

#[test]
fn test_parse_model_only() {
    let (model, backend, url) = parse_model_spec("llama-3.3-70b-versatile");

    assert_eq!(model, "llama-3.3-70b-versatile");
    assert_eq!(backend, None);
    assert_eq!(url, None);
}

#[test]
fn test_parse_model_case_insensitive_backend() {
    let (_, backend, _) = parse_model_spec("model@GROQ");
    assert_eq!(backend, Some(BackendType::Groq));
}

#[test]
fn test_parse_model_llama_aliases() {
    for input in ["m@llama", "m@llamacpp", "m@llama.cpp", "m@llama-cpp"] {
        let (model, backend, url) = parse_model_spec(input);
        assert_eq!(model, "m");
        assert_eq!(backend, Some(BackendType::Llama), "input: {}", input);
        assert_eq!(url, None);
    }
}

#[test]
fn test_parse_model_unknown_backend() {
    let (model, backend, url) = parse_model_spec("model@unknown");

    assert_eq!(model, "model");
    assert_eq!(backend, None);
    assert_eq!(url, None);
}

#[test]
fn test_parse_model_unclosed_parenthesis_keeps_url() {
    let (_, backend, url) = parse_model_spec("model@llama(http://localhost:8080");

    assert_eq!(backend, Some(BackendType::Llama));
    assert_eq!(url, Some("http://localhost:8080".to_string()));
}

#[test]
fn test_parse_model_edge_cases() {
    assert_eq!(parse_model_spec(""), (String::new(), None, None));
    assert_eq!(parse_model_spec("@"), (String::new(), None, None));
    assert_eq!(parse_model_spec("model@groq()"), ("model".to_string(), Some(BackendType::Groq), None));
}

#[test]
fn test_default_urls() {
    assert_eq!(
        get_default_url_for_backend(&BackendType::Groq),
        Some("https://api.groq.com/openai/v1/chat/completions".to_string())
    );
    assert_eq!(
        get_default_url_for_backend(&BackendType::OpenAI),
        Some("https://api.openai.com/v1/chat/completions".to_string())
    );
    assert_eq!(get_default_url_for_backend(&BackendType::Llama), None);
}

#[test]
fn test_normalize_api_url() {
    assert_eq!(normalize_api_url("http://localhost:8080"), "http://localhost:8080/v1/chat/completions");
    assert_eq!(normalize_api_url("http://localhost:8080/"), "http://localhost:8080/v1/chat/completions");
    assert_eq!(
        normalize_api_url("https://api.groq.com/openai/v1/chat/completions"),
        "https://api.groq.com/openai/v1/chat/completions"
    );
}

#[test]
fn test_detect_backend() {
    assert_eq!(detect_backend("https://api.groq.com/openai/v1"), BackendType::Groq);
    assert_eq!(detect_backend("https://api.openai.com/v1"), BackendType::OpenAI);
    assert_eq!(detect_backend("http://127.0.0.1:8080"), BackendType::Llama);
}

#[test]
fn test_factory_requires_key_for_groq() {
    let config = ClientConfig::new(BackendType::Groq, "llama-3.3-70b-versatile");
    let result = ClientFactory::create_with_lookup(&config, |_| None);

    match result {
        Err(ProviderError::MissingApiKey { backend, env_var }) => {
            assert_eq!(backend, "groq");
            assert_eq!(env_var, "GROQ_API_KEY");
        }
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("expected MissingApiKey"),
    }
}

#[test]
fn test_factory_empty_key_counts_as_missing() {
    let config = ClientConfig::new(BackendType::OpenAI, "gpt-4o-mini").with_api_key("");
    let result = ClientFactory::create_with_lookup(&config, |_| Some(String::new()));
    assert!(matches!(result, Err(ProviderError::MissingApiKey { .. })));
}

#[test]
fn test_factory_reads_key_from_lookup() {
    let config = ClientConfig::new(BackendType::Groq, "llama3-8b-8192");
    let client = ClientFactory::create_with_lookup(&config, |var| {
        (var == "GROQ_API_KEY").then(|| "gsk_test".to_string())
    })
    .ok()
    .expect("client should be created");

    assert_eq!(client.model(), "llama3-8b-8192");
}

#[test]
fn test_factory_llama_needs_url_but_no_key() {
    let config = ClientConfig::new(BackendType::Llama, "local");
    let result = ClientFactory::create_with_lookup(&config, |_| None);
    assert!(matches!(result, Err(ProviderError::MissingApiUrl { backend: "llama" })));

    let config = config.with_api_url("http://localhost:8080");
    assert!(ClientFactory::create_with_lookup(&config, |_| None).is_ok());
}

#[test]
fn test_client_config_for_model_keeps_settings() {
    let base = ClientConfig::new(BackendType::Groq, "a")
        .with_api_key("k")
        .with_temperature(Some(0.2))
        .with_verbose(true);
    let other = base.for_model("b");

    assert_eq!(other.model, "b");
    assert_eq!(other.api_key.as_deref(), Some("k"));
    assert_eq!(other.temperature, Some(0.2));
    assert!(other.verbose);
}
