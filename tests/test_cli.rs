use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46];

#[tokio::test(flavor = "multi_thread")]
async fn encode_prints_a_data_uri_on_stdout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/card.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(JPEG_BYTES))
        .mount(&server)
        .await;
    let url = format!("{}/card.jpg", server.uri());

    Command::cargo_bin("img-fetch")
        .unwrap()
        .args(["encode", &url])
        .assert()
        .success()
        .stdout("data:image/jpeg;base64,/9j/4AAQSkZJRg==\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn store_writes_the_file_and_prints_its_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/card.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(JPEG_BYTES))
        .mount(&server)
        .await;
    let url = format!("{}/card.jpg", server.uri());
    let tmp = tempdir().unwrap();
    let dir = tmp.path().to_str().unwrap().to_string();

    Command::cargo_bin("img-fetch")
        .unwrap()
        .args(["store", &url, "test.jpg", "--directory", &dir])
        .assert()
        .success()
        .stdout(predicate::str::contains("test.jpg"));

    assert_eq!(fs::read(tmp.path().join("test.jpg")).unwrap(), JPEG_BYTES);
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_failure_exits_nonzero_with_the_error_on_stderr() {
    Command::cargo_bin("img-fetch")
        .unwrap()
        .args(["encode", "http://127.0.0.1:1/card.jpg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: failed to fetch"));
}

#[tokio::test(flavor = "multi_thread")]
async fn non_success_status_exits_nonzero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone.jpg"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let url = format!("{}/gone.jpg", server.uri());

    Command::cargo_bin("img-fetch")
        .unwrap()
        .args(["encode", &url])
        .assert()
        .failure()
        .stderr(predicate::str::contains("server returned 500"));
}
