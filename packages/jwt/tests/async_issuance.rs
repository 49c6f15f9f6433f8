//! Async and concurrent issuance through the builder

use hashjwt::{HashedToken, JwtError, JwtResult, IssuedToken};
use std::sync::{Arc, Mutex};

const S1: &str = "eyJhbGciOiJIUzUxMiIsImtpZCI6InNvbWUga2lkIiwidHlwIjoiSldUIn0.eyJhIjoiYiJ9.Kki39GFURveoP2Qgumt14JeAvBrJSnatHkB-sANL_Zo-v9xdUtKEYeaU3rhFr8rP41MILEa9KvmPTfnJ6DYK0g";

fn scenario_builder() -> hashjwt::HashedTokenBuilder {
    HashedToken::builder()
        .with_algorithm("HS512")
        .with_secret("notthegreatestkey")
        .with_key_id("some kid")
        .with_claims_json(r#"{"a":"b"}"#)
}

#[tokio::test]
async fn test_issue_async_matches_sync() {
    let issued = scenario_builder()
        .issue_async()
        .await
        .expect("async issuance should succeed");
    assert_eq!(issued.expose_token(), S1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_issuance_is_deterministic() {
    let handles: Vec<_> = (0..32)
        .map(|_| tokio::spawn(async { scenario_builder().issue_async().await }))
        .collect();

    for handle in handles {
        let issued = handle
            .await
            .expect("task should not panic")
            .expect("issuance should succeed");
        assert_eq!(issued.expose_token(), S1);
    }
}

#[tokio::test]
async fn test_async_error_handler_invoked() {
    let seen = Arc::new(Mutex::new(None));
    let seen_in_handler = Arc::clone(&seen);

    let err = HashedToken::builder()
        .with_secret("xyz")
        .with_secret_encoding("hex")
        .with_claims_json("{}")
        .on_error(move |e: JwtError| {
            *seen_in_handler.lock().expect("Mutex poisoned") = Some(e.to_string());
            e
        })
        .issue_async()
        .await
        .expect_err("bad hex must abort");

    assert!(matches!(err, JwtError::SecretDecode(_)));
    let seen = seen.lock().expect("Mutex poisoned").clone();
    assert!(seen.is_some_and(|msg| msg.starts_with("secret is not valid hex")));
}

#[tokio::test]
async fn test_async_result_handler() {
    let token_len = scenario_builder()
        .on_result(|result: JwtResult<IssuedToken>| {
            result.map(|t| t.expose_token().len()).unwrap_or(0)
        })
        .issue_async()
        .await;
    assert_eq!(token_len, S1.len());
}
