use std::time::Duration;

use boruca_config::storage::StorageConfig;
use boruca_types::Dataset;
use serde_json::json;
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{DataStore, DictionarySource, HttpSource, StoreError, UNKNOWN_DATE, read_cache};

fn word_list() -> serde_json::Value {
    json!({
        "words": [
            {
                "boruca_word": "Ujtö",
                "spanish_translation": "Agua",
                "part_of_speech": "noun",
                "example_sentence_boruca": "...",
                "example_sentence_spanish": "...",
                "comment": ""
            },
            {
                "boruca_word": "Cuá",
                "spanish_translation": "Casa",
                "part_of_speech": "noun",
                "example_sentence_boruca": "...",
                "example_sentence_spanish": "..."
            }
        ]
    })
}

async fn serve(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/diccionario_boruca.json"))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

fn source_for(server: &MockServer) -> HttpSource {
    HttpSource::new(
        format!("{}/diccionario_boruca.json", server.uri()),
        Duration::from_secs(5),
    )
}

#[tokio::test]
async fn test_fetch_parses_word_list() {
    let server = serve(ResponseTemplate::new(200).set_body_json(word_list())).await;

    let dataset = source_for(&server).fetch().await.unwrap();

    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.words[0].boruca_word, "Ujtö");
    assert_eq!(dataset.words[1].comment, None);
}

#[tokio::test]
async fn test_fetch_keeps_incomplete_records() {
    let body = json!({
        "words": [
            { "boruca_word": "Ujtö", "spanish_translation": "Agua", "part_of_speech": null },
            { "boruca_word": "Cuá" }
        ]
    });
    let server = serve(ResponseTemplate::new(200).set_body_json(body)).await;

    let dataset = source_for(&server).fetch().await.unwrap();

    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.words[0].part_of_speech, "");
    assert_eq!(dataset.words[1].spanish_translation, "");
}

#[tokio::test]
async fn test_fetch_reports_http_status() {
    let server = serve(ResponseTemplate::new(404)).await;

    let result = source_for(&server).fetch().await;

    match result {
        Err(StoreError::HttpStatus(status)) => assert_eq!(status.as_u16(), 404),
        other => panic!("expected HttpStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_rejects_wrong_shape() {
    let server = serve(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>")).await;

    let result = source_for(&server).fetch().await;
    assert!(matches!(result, Err(StoreError::Parse(_))));
}

#[tokio::test]
async fn test_fetch_times_out() {
    let server = serve(
        ResponseTemplate::new(200)
            .set_body_json(word_list())
            .set_delay(Duration::from_secs(2)),
    )
    .await;

    let source = HttpSource::new(
        format!("{}/diccionario_boruca.json", server.uri()),
        Duration::from_millis(200),
    );

    assert!(matches!(source.fetch().await, Err(StoreError::Network(_))));
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    let source = HttpSource::new(
        "http://127.0.0.1:1/diccionario_boruca.json".to_string(),
        Duration::from_secs(2),
    );

    assert!(matches!(source.fetch().await, Err(StoreError::Network(_))));
}

#[tokio::test]
async fn test_store_downloads_then_survives_outage() {
    let temp = tempdir().unwrap();
    let storage = StorageConfig::new(temp.path());

    let online = serve(ResponseTemplate::new(200).set_body_json(word_list())).await;
    let first = DataStore::new(source_for(&online), storage.clone()).load().await;
    assert_eq!(first.len(), 2);
    assert_eq!(read_cache(&storage.cache_path()).unwrap(), Some(first.clone()));

    let broken = serve(ResponseTemplate::new(500)).await;
    let store = DataStore::new(source_for(&broken), storage.clone());
    let second = store.load().await;

    assert_eq!(second, first);
    assert_ne!(store.last_download_timestamp(), UNKNOWN_DATE);
}

#[tokio::test]
async fn test_store_bad_payload_keeps_previous_cache() {
    let temp = tempdir().unwrap();
    let storage = StorageConfig::new(temp.path());

    let server = serve(ResponseTemplate::new(200).set_body_string("{\"words\": 5}")).await;
    let data = DataStore::new(source_for(&server), storage.clone()).load().await;

    assert_eq!(data, Dataset::default());
    assert!(!storage.cache_path().exists());
}
