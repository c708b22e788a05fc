use super::*;

#[test]
fn new_config_targets_production() {
    let config = ClientConfig::new("ABC123");

    assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    assert_eq!(config.timeout(), None);
    assert!(config.validate().is_ok());
}

#[test]
fn empty_or_unprintable_token_is_invalid() {
    for token in ["", "ABC 123", "ABC\n123"] {
        let err = ClientConfig::new(token).validate().unwrap_err();
        assert!(matches!(err, ClientError::InvalidToken), "{token:?}");
        assert_eq!(err.to_string(), "invalid token");
    }
}

#[test]
fn relative_base_url_is_invalid() {
    let err = ClientConfig::new("ABC")
        .with_base_url("api.zenhub.io")
        .validate()
        .unwrap_err();

    assert!(matches!(err, ClientError::InvalidBaseUrl { .. }));
    assert!(err.is_configuration());
}

#[test]
fn endpoint_tolerates_trailing_slash() {
    let with = ClientConfig::new("ABC").with_base_url("http://localhost:8080/zenhub/");
    let without = ClientConfig::new("ABC").with_base_url("http://localhost:8080/zenhub");

    let expected = "http://localhost:8080/zenhub/p1/repositories/1/board";
    assert_eq!(with.endpoint("p1/repositories/1/board").unwrap().as_str(), expected);
    assert_eq!(without.endpoint("/p1/repositories/1/board").unwrap().as_str(), expected);
}

#[test]
fn endpoint_on_unvalidated_base_url_is_a_request_error() {
    let config = ClientConfig::new("ABC").with_base_url("not a url");

    let err = config.endpoint("p1/repositories/1/board").unwrap_err();

    assert!(matches!(
        &err,
        ClientError::Request { url, .. } if url == "not a url/p1/repositories/1/board"
    ));
    assert!(err.to_string().starts_with("failed to create request"));
    assert!(!err.is_configuration());
}

#[test]
fn deserialises_with_defaults() {
    let config: ClientConfig = serde_json::from_str(r#"{ "token": "ABC" }"#).unwrap();
    assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    assert_eq!(config.timeout(), None);

    let config: ClientConfig = serde_json::from_str(
        r#"{ "token": "ABC", "base_url": "https://staging.example", "timeout_secs": 5 }"#,
    )
    .unwrap();
    assert_eq!(config.base_url(), "https://staging.example");
    assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
}

#[test]
fn debug_output_redacts_token() {
    let rendered = format!("{:?}", ClientConfig::new("super-secret"));

    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("<redacted>"));
}
