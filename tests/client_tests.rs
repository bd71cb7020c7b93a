use langfuse_trace::api::{build_url, ClientConfig};
use langfuse_trace::observations::{ListParams, ObservationType};
use langfuse_trace::utils::error::ApiError;
use langfuse_trace::LangfuseClient;
use std::time::Duration;

#[test]
fn test_client_rejects_missing_keys() {
    let result = LangfuseClient::new(ClientConfig::new("pk-lf-1", ""));
    assert!(matches!(result, Err(ApiError::MissingCredentials(_))));
}

#[test]
fn test_client_rejects_bad_base_url() {
    let config = ClientConfig::new("pk-lf-1", "sk-lf-1").with_base_url("cloud.langfuse.com");
    assert!(matches!(
        LangfuseClient::new(config),
        Err(ApiError::InvalidUrl(_))
    ));
}

#[test]
fn test_client_keeps_base_url() {
    let config = ClientConfig::new("pk-lf-1", "sk-lf-1")
        .with_base_url("http://localhost:3000")
        .with_timeout(Duration::from_secs(5));

    let client = LangfuseClient::new(config).unwrap();
    assert_eq!(client.base_url(), "http://localhost:3000");
}

#[test]
fn test_trace_url() {
    let url = build_url("https://cloud.langfuse.com", &["traces", "37ae885d"]).unwrap();
    assert_eq!(
        url.as_str(),
        "https://cloud.langfuse.com/api/public/traces/37ae885d"
    );
}

#[test]
fn test_list_params_query() {
    let params = ListParams {
        page: Some(2),
        observation_type: Some(ObservationType::Generation),
        user_id: Some("user 1".to_string()),
        ..Default::default()
    };

    let mut url = build_url("https://cloud.langfuse.com", &["observations"]).unwrap();
    url.query_pairs_mut().extend_pairs(params.to_query_pairs());

    assert_eq!(
        url.as_str(),
        "https://cloud.langfuse.com/api/public/observations?page=2&userId=user+1&type=GENERATION"
    );
}
