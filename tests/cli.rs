use assert_cmd::Command;
use predicates::str::contains;
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".threat-intel").join("config.json")
}

const BINARY_NAME: &str = "threat-intel";

/// A command isolated from the caller's config and environment.
fn cli(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("HOME", home.path())
        .env_remove("THREAT_INTEL_BACKEND_URL");
    cmd
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Usage"))
        .stdout(contains("scan"))
        .stdout(contains("--backend-url"));
}

#[test]
/// set-backend should write the normalized origin under backendBaseUrl.
fn set_backend_writes_config_file() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    cli(&tmp)
        .arg("set-backend")
        .arg("http://intel.example.org:9000/")
        .assert()
        .success()
        .stdout(contains("Backend saved"));

    let text = fs::read_to_string(&config_path).unwrap();
    assert!(text.contains("\"backendBaseUrl\": \"http://intel.example.org:9000\""));
}

#[test]
fn set_backend_rejects_invalid_url() {
    let tmp = temp_home_dir();
    cli(&tmp)
        .arg("set-backend")
        .arg("ftp://intel.example.org")
        .assert()
        .failure()
        .stderr(contains("Invalid backend URL"));

    assert!(!config_file_path(&tmp).exists());
}

#[test]
/// reset-config should delete an existing config file.
fn reset_config_deletes_config_file() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{\"backendBaseUrl\": \"http://localhost:8000\"}").unwrap();

    cli(&tmp)
        .arg("reset-config")
        .assert()
        .success()
        .stdout(contains("Clearing configuration"));

    assert!(!config_path.exists());
}

#[test]
fn scan_rejects_blank_domain() {
    let tmp = temp_home_dir();
    cli(&tmp)
        .args(["scan", "   ", "--backend-url", "http://127.0.0.1:1"])
        .assert()
        .failure()
        .stderr(contains("Please enter a domain name"));
}

#[tokio::test(flavor = "multi_thread")]
async fn scan_prints_stats_and_whois() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/scan"))
        .and(query_param("domain", "example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "domain": "example.com",
            "last_analysis_stats": {"malicious": 5, "suspicious": 2, "harmless": 10, "undetected": 1},
            "whois": "Registrar: Example Registrar, Inc."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tmp = temp_home_dir();
    cli(&tmp)
        .args(["scan", "example.com", "--backend-url", server.uri().as_str()])
        .assert()
        .success()
        .stdout(contains("Malicious: 5"))
        .stdout(contains("Suspicious: 2"))
        .stdout(contains("Harmless: 10"))
        .stdout(contains("Undetected: 1"))
        .stdout(contains("Registrar: Example Registrar, Inc."));
}

#[tokio::test(flavor = "multi_thread")]
async fn scan_uses_backend_from_config_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/scan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"whois": "Not available"})))
        .expect(1)
        .mount(&server)
        .await;

    let tmp = temp_home_dir();
    cli(&tmp)
        .args(["set-backend", server.uri().as_str()])
        .assert()
        .success();

    cli(&tmp)
        .args(["scan", "example.com"])
        .assert()
        .success()
        .stdout(contains("No WHOIS data available"));
}

#[tokio::test(flavor = "multi_thread")]
async fn scan_reports_backend_error_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/scan"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": "Domain not found"})),
        )
        .mount(&server)
        .await;

    let tmp = temp_home_dir();
    cli(&tmp)
        .args(["scan", "nosuch.example", "--backend-url", server.uri().as_str()])
        .assert()
        .failure()
        .stderr(contains("Domain not found"));
}

#[test]
fn scan_reports_unreachable_backend() {
    let tmp = temp_home_dir();
    cli(&tmp)
        .args(["scan", "example.com", "--backend-url", "http://127.0.0.1:1"])
        .assert()
        .failure()
        .stderr(contains("Unable to connect to backend"));
}

#[tokio::test(flavor = "multi_thread")]
async fn status_prints_backend_health() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Threat Intelligence API is running",
            "database_status": "connected"
        })))
        .mount(&server)
        .await;

    let tmp = temp_home_dir();
    cli(&tmp)
        .args(["status", "--backend-url", server.uri().as_str()])
        .assert()
        .success()
        .stdout(contains("Backend reachable"))
        .stdout(contains("Database: connected"));
}
