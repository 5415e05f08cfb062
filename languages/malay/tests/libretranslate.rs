use kamus_lang_malay::LibreTranslator;
use kamus_translator::{TranslateError, Translator};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn translator(server: &MockServer, api_key: &str) -> LibreTranslator {
    LibreTranslator::new(format!("{}/translate", server.uri()), api_key.to_string())
}

#[tokio::test]
async fn test_translate_posts_libretranslate_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .and(body_json(json!({
            "q": "baik",
            "source": "ms",
            "target": "zh",
            "format": "text",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "translatedText": "好" })))
        .expect(1)
        .mount(&server)
        .await;

    let translation = translator(&server, "")
        .translate("baik", "ms".to_string(), "zh".to_string())
        .await
        .unwrap();

    assert_eq!(translation.text, "好");
    assert_eq!(translation.from, "ms");
    assert_eq!(translation.to, "zh");
    assert_eq!(translation.provider, "libretranslate");
}

#[tokio::test]
async fn test_api_key_is_sent_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({
            "q": "cepat",
            "source": "ms",
            "target": "zh",
            "format": "text",
            "api_key": "secret",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "translatedText": "快" })))
        .expect(1)
        .mount(&server)
        .await;

    let translation = translator(&server, "secret")
        .translate("cepat", "ms".to_string(), "zh".to_string())
        .await
        .unwrap();
    assert_eq!(translation.text, "快");
}

#[tokio::test]
async fn test_status_codes_map_to_errors() {
    let cases = [
        (429, "rate"),
        (403, "auth"),
        (400, "upstream"),
    ];

    for (status, kind) in cases {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(status).set_body_json(json!({ "error": "bad language" })),
            )
            .mount(&server)
            .await;

        let err = translator(&server, "")
            .translate("baik", "ms".to_string(), "xx".to_string())
            .await
            .unwrap_err();

        match (kind, err) {
            ("rate", TranslateError::RateLimitExceeded) => {}
            ("auth", TranslateError::Authentication) => {}
            ("upstream", TranslateError::Upstream(message)) => {
                assert!(message.starts_with("HTTP 400"), "{message}");
                assert!(message.contains("bad language"));
            }
            (kind, other) => panic!("status {status}: expected {kind}, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_unexpected_body_is_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "text": "好" })))
        .mount(&server)
        .await;

    let err = translator(&server, "")
        .translate("baik", "ms".to_string(), "zh".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, TranslateError::Upstream(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let translator = LibreTranslator::new("http://127.0.0.1:9/translate".to_string(), String::new());
    let err = translator
        .translate("baik", "ms".to_string(), "zh".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, TranslateError::Transport(_)));
}
