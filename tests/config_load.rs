//! Integration test: verify that `config.example.yaml` parses and resolves
//! into runnable settings.

use std::path::Path;

use jobskills::config::{ConfigError, FileConfig, Settings};
use jobskills::gateway::CorsPolicy;

#[tokio::test]
async fn example_config_parses() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config.example.yaml");
    let file = FileConfig::load(&path).await.expect("example config should parse");
    assert_eq!(file.bind, Some("127.0.0.1:8000".parse().unwrap()));
    assert_eq!(file.cors_origins, vec!["http://localhost:3000"]);

    let settings = Settings::resolve(Some("sk_a,sk_b"), None, file).unwrap();
    assert_eq!(settings.api_keys.len(), 2);
    assert!(matches!(settings.cors, CorsPolicy::Origins(ref o) if o.len() == 1));
}

#[tokio::test]
async fn malformed_file_is_a_parse_error() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("config.yaml");
    tokio::fs::write(&path, "bind: [not, an, address]\n").await.unwrap();

    let err = FileConfig::load(&path).await.unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "got {err}");
}
