use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use kotoba_core::wire::ProxyFailure;
use kotoba_server::state::AppState;
use kotoba_speech::cache::AudioClip;
use kotoba_speech::error::SpeechError;
use kotoba_speech::options::TtsOptions;
use kotoba_speech::{SpeechService, Synthesizer};
use kotoba_storage::backend::{LocalStorage, MemoryStorage};
use kotoba_storage::library::Library;
use kotoba_translate::error::TranslateError;
use kotoba_translate::RemoteTranslator;

struct EchoTranslator;

#[async_trait]
impl RemoteTranslator for EchoTranslator {
    async fn translate(&self, text: &str, from: &str, to: &str) -> Result<String, TranslateError> {
        Ok(format!("{text}[{from}->{to}]"))
    }
}

struct FixedSynthesizer;

#[async_trait]
impl Synthesizer for FixedSynthesizer {
    async fn synthesize(&self, text: &str, _options: &TtsOptions) -> Result<AudioClip, SpeechError> {
        if text == "失敗" {
            return Err(SpeechError::Proxy(ProxyFailure {
                error: "语音合成失败".into(),
                details: None,
                code: None,
            }));
        }
        Ok(AudioClip {
            bytes: b"mp3".to_vec(),
            mime: "audio/mp3",
        })
    }
}

fn app_with(remote: bool) -> Router {
    let storage: Box<dyn LocalStorage> = Box::new(MemoryStorage::new());
    let library = Library::open(storage).unwrap();
    let (translator, speech) = if remote {
        (
            Some(Arc::new(EchoTranslator) as Arc<dyn RemoteTranslator>),
            SpeechService::new(Some(Arc::new(FixedSynthesizer) as Arc<dyn Synthesizer>)),
        )
    } else {
        (None, SpeechService::new(None))
    };
    kotoba_server::app(AppState::new(library, translator, speech))
}

fn app() -> Router {
    app_with(false)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn add_word(app: &Router, japanese: &str, chinese: &str, rating: u8) -> Value {
    let (status, word) = send(
        app,
        Method::POST,
        "/words",
        Some(json!({ "japanese": japanese, "chinese": chinese, "rating": rating })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    word
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send(&app(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn word_crud_round_trip() {
    let app = app();
    let word = add_word(&app, "ねこ", "猫", 3).await;
    let id = word["id"].as_str().unwrap().to_string();
    assert_eq!(word["category"], "other");
    assert_eq!(word["isPhrase"], false);
    assert!(word["createdAt"].is_string());

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/words/{id}"),
        Some(json!({ "rating": 5, "category": "food" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["rating"], 5);
    assert_eq!(updated["category"], "food");
    assert_eq!(updated["japanese"], "ねこ");

    let (status, _) = send(&app, Method::DELETE, &format!("/words/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, words) = send(&app, Method::GET, "/words", None).await;
    assert_eq!(words, json!([]));
}

#[tokio::test]
async fn unknown_word_is_404() {
    let app = app();
    let (status, body) = send(&app, Method::DELETE, "/words/missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("missing"));

    let (status, _) = send(&app, Method::PUT, "/words/missing", Some(json!({ "rating": 1 }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn out_of_range_rating_is_400() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/words",
        Some(json!({ "japanese": "いぬ", "chinese": "狗", "rating": 9 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("rating"));
}

#[tokio::test]
async fn entry_fills_translation_from_dictionary() {
    let app = app();
    let (status, word) = send(&app, Method::POST, "/words/entry", Some(json!({ "input": " ありがとう " }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(word["japanese"], "ありがとう");
    assert_eq!(word["chinese"], "谢谢");

    let (_, word) = send(&app, Method::POST, "/words/entry", Some(json!({ "input": "ぴよぴよ" }))).await;
    assert_eq!(word["chinese"], "待翻译");

    let (status, _) = send(&app, Method::POST, "/words/entry", Some(json!({ "input": "   " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_words_filters_by_rating_and_search() {
    let app = app();
    add_word(&app, "ねこ", "猫", 5).await;
    add_word(&app, "いぬ", "狗", 2).await;
    add_word(&app, "こねこ", "小猫", 4).await;

    let (_, words) = send(&app, Method::GET, "/words?ratings=4,5&sortBy=rating&order=asc", None).await;
    let japanese: Vec<&str> = words
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["japanese"].as_str().unwrap())
        .collect();
    assert_eq!(japanese, ["こねこ", "ねこ"]);

    let (_, words) = send(&app, Method::GET, "/words?search=%E7%8B%97", None).await;
    assert_eq!(words.as_array().unwrap().len(), 1);
    assert_eq!(words[0]["japanese"], "いぬ");

    let (status, _) = send(&app, Method::GET, "/words?ratings=x", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn category_all_lists_every_category() {
    let app = app();
    add_word(&app, "ねこ", "猫", 5).await;
    let (_, word) = send(
        &app,
        Method::POST,
        "/words",
        Some(json!({ "japanese": "パン", "chinese": "面包", "category": "food" })),
    )
    .await;
    assert_eq!(word["category"], "food");

    let (status, words) = send(&app, Method::GET, "/words?category=all", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(words.as_array().unwrap().len(), 2);

    let (_, words) = send(&app, Method::GET, "/words?category=food", None).await;
    assert_eq!(words.as_array().unwrap().len(), 1);
    assert_eq!(words[0]["japanese"], "パン");

    send(&app, Method::POST, "/links", Some(json!({ "url": "https://example.com" }))).await;
    let (status, links) = send(&app, Method::GET, "/links?category=all", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(links.as_array().unwrap().len(), 1);

    let (status, body) = send(&app, Method::GET, "/words?category=snacks", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("snacks"));
}

#[tokio::test]
async fn malformed_input_gets_json_error_body() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/words")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{bad"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());

    let (status, body) = send(&app, Method::GET, "/words?kind=sideways", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("kind"));
}

#[tokio::test]
async fn batch_delete_skips_unknown_ids() {
    let app = app();
    let a = add_word(&app, "あ", "啊", 0).await;
    add_word(&app, "い", "咦", 0).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/words/batch-delete",
        Some(json!({ "ids": [a["id"], "nope"] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], 1);

    let (_, words) = send(&app, Method::GET, "/words", None).await;
    assert_eq!(words.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn image_archive_and_extract() {
    let app = app();
    let (status, image) = send(
        &app,
        Method::POST,
        "/images",
        Some(json!({ "url": "data:image/png;base64,AAAA", "name": "menu.png" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = image["id"].as_str().unwrap().to_string();
    assert_eq!(image["isArchived"], false);

    let (_, image) = send(&app, Method::POST, &format!("/images/{id}/archive"), None).await;
    assert_eq!(image["isArchived"], true);

    let (_, archived) = send(&app, Method::GET, "/images?archived=archived", None).await;
    assert_eq!(archived.as_array().unwrap().len(), 1);
    let (_, unarchived) = send(&app, Method::GET, "/images?archived=unarchived", None).await;
    assert_eq!(unarchived, json!([]));

    let (status, words) = send(
        &app,
        Method::POST,
        &format!("/images/{id}/extract"),
        Some(json!({ "text": "こんにちは\n\n  はい  \n" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(words.as_array().unwrap().len(), 2);
    assert_eq!(words[0]["chinese"], "你好");
    assert_eq!(words[1]["japanese"], "はい");

    let (_, images) = send(&app, Method::GET, "/images", None).await;
    assert_eq!(images[0]["extractedWords"], json!(["こんにちは", "はい"]));

    let (status, _) = send(&app, Method::POST, "/images/nope/extract", Some(json!({ "text": "x" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn link_defaults_title_to_host_and_toggles() {
    let app = app();
    let (status, link) = send(
        &app,
        Method::POST,
        "/links",
        Some(json!({ "url": " https://www.nhk.or.jp/news/ ", "category": "conversation" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(link["url"], "https://www.nhk.or.jp/news/");
    assert_eq!(link["title"], "www.nhk.or.jp");
    let id = link["id"].as_str().unwrap().to_string();

    let (_, link) = send(&app, Method::POST, &format!("/links/{id}/processed"), None).await;
    assert_eq!(link["isProcessed"], true);

    let (_, links) = send(&app, Method::GET, "/links?processed=unprocessed", None).await;
    assert_eq!(links, json!([]));
    let (_, links) = send(&app, Method::GET, "/links?category=conversation", None).await;
    assert_eq!(links.as_array().unwrap().len(), 1);

    let (status, _) = send(&app, Method::POST, "/links", Some(json!({ "url": "  " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn export_then_import_restores_library() {
    let source = app();
    add_word(&source, "ねこ", "猫", 5).await;
    send(&source, Method::POST, "/links", Some(json!({ "url": "https://example.com" }))).await;

    let request = Request::builder().uri("/export").body(Body::empty()).unwrap();
    let response = source.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let disposition = response.headers()[header::CONTENT_DISPOSITION].to_str().unwrap().to_string();
    assert!(disposition.contains("japanese-vocabulary-backup-"));
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let doc: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(doc["version"], "1.0");
    assert!(doc["exportDate"].is_string());

    let target = app();
    add_word(&target, "いぬ", "狗", 1).await;

    let (status, summary) = send(&target, Method::POST, "/import?mode=merge", Some(doc.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary, json!({ "words": 1, "images": 0, "links": 1 }));
    let (_, stats) = send(&target, Method::GET, "/stats", None).await;
    assert_eq!(stats["words"], 2);
    assert_eq!(stats["links"], 1);

    let (status, _) = send(&target, Method::POST, "/import", Some(doc)).await;
    assert_eq!(status, StatusCode::OK);
    let (_, words) = send(&target, Method::GET, "/words", None).await;
    assert_eq!(words.as_array().unwrap().len(), 1);
    assert_eq!(words[0]["japanese"], "ねこ");
}

#[tokio::test]
async fn import_rejects_bad_documents() {
    let app = app();
    let doc = json!({
        "words": [],
        "images": [],
        "links": [],
        "exportDate": "2024-06-10T06:13:20Z",
        "version": "2.0"
    });
    let (status, body) = send(&app, Method::POST, "/import", Some(doc)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("2.0"));

    let (status, _) = send(&app, Method::POST, "/import", Some(json!({ "words": 1 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn clear_empties_everything() {
    let app = app();
    add_word(&app, "ねこ", "猫", 5).await;
    let (status, _) = send(&app, Method::POST, "/clear", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, stats) = send(&app, Method::GET, "/stats", None).await;
    assert_eq!(stats["words"], 0);
}

#[tokio::test]
async fn translate_uses_dictionary_then_remote() {
    let app = app_with(true);
    let (status, result) = send(
        &app,
        Method::POST,
        "/translate",
        Some(json!({ "text": "ありがとう", "direction": "jp-to-zh" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["chinese"], "谢谢");
    assert_eq!(result["source"], "local");

    let (_, result) = send(
        &app,
        Method::POST,
        "/translate",
        Some(json!({ "text": "ぴよぴよ", "direction": "jp-to-zh" })),
    )
    .await;
    assert_eq!(result["chinese"], "ぴよぴよ[jp->zh]");
    assert_eq!(result["source"], "api");
}

#[tokio::test]
async fn translate_without_proxy_returns_placeholder() {
    let (status, result) = send(
        &app(),
        Method::POST,
        "/translate",
        Some(json!({ "text": "ぴよぴよ", "direction": "jp-to-zh" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["chinese"], "翻译失败");

    let (status, _) = send(&app(), Method::POST, "/translate", Some(json!({ "text": " " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn speech_returns_audio_then_cached() {
    let app = app_with(true);
    let (status, body) = send(&app, Method::POST, "/speech", Some(json!({ "text": "ねこ" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"], "audio");
    assert_eq!(body["audioContent"], "bXAz");
    assert_eq!(body["cached"], false);

    let (_, body) = send(&app, Method::POST, "/speech", Some(json!({ "text": "ねこ" }))).await;
    assert_eq!(body["cached"], true);

    let (_, cleared) = send(&app, Method::DELETE, "/speech/cache", None).await;
    assert_eq!(cleared["cleared"], 1);
}

#[tokio::test]
async fn speech_falls_back_to_host_voice() {
    let app = app_with(true);
    let (status, body) = send(
        &app,
        Method::POST,
        "/speech",
        Some(json!({
            "text": "失敗",
            "voices": [
                { "name": "Samantha", "lang": "en-US" },
                { "name": "Kyoko", "lang": "ja-JP" }
            ]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"], "utterance");
    assert_eq!(body["lang"], "ja-JP");
    assert_eq!(body["voice"], "Kyoko");
}

#[tokio::test]
async fn preload_counts_loaded_words() {
    let app = app_with(true);
    let (status, body) = send(
        &app,
        Method::POST,
        "/speech/preload",
        Some(json!({ "words": ["一", "二", "失敗"] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["loaded"], 2);

    let (_, options) = send(&app, Method::GET, "/speech/voices", None).await;
    assert!(!options["speakers"].as_array().unwrap().is_empty());
}
