use kamus_config::Config;

use crate::repl::{self, Command};
use crate::state::AppState;

fn offline_state() -> AppState {
    AppState::new(Config::default(), true).expect("offline backends always build")
}

#[tokio::test]
async fn test_lookup_then_cache_admin() {
    let state = offline_state();

    let text = repl::execute(&state, Command::Lookup("baik".to_string()), false)
        .await
        .unwrap()
        .unwrap();
    assert!(text.starts_with("baik → 好"));

    let stats = repl::execute(&state, Command::Stats, false).await.unwrap().unwrap();
    assert_eq!(stats, "Cache: 1 entries (enabled)");

    let contains = Command::Contains {
        word: "好".to_string(),
        language: None,
    };
    let text = repl::execute(&state, contains, false).await.unwrap().unwrap();
    assert_eq!(text, "'好' is cached for Mandarin");

    let cleared = repl::execute(&state, Command::Clear, false).await.unwrap().unwrap();
    assert_eq!(cleared, "Cleared 1 cached explanations");
    assert_eq!(state.cache.size(), 0);
}

#[tokio::test]
async fn test_explain_renders_json() {
    let state = offline_state();

    let text = repl::execute(&state, Command::Explain("美丽".to_string()), true)
        .await
        .unwrap()
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(json["pronunciation"], "měi lì");
    assert_eq!(json["isAdjective"], true);
}

#[tokio::test]
async fn test_stats_json_shape() {
    let state = offline_state();
    let text = repl::execute(&state, Command::Stats, true).await.unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(json["size"], 0);
    assert_eq!(json["enabled"], true);
    assert!(json["timestampMs"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn test_quit_stops_the_loop() {
    let state = offline_state();
    let input: &[u8] = b"cepat\n\n:sentence tinggi\n:quit\nbesar\n";
    let mut out = Vec::new();

    repl::run(&state, input, &mut out, false).await.unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("cepat → 快"));
    assert!(out.contains("[ms → zh] 高"));
    assert!(!out.contains("besar"));
    assert!(!state.cache.contains_word("大", "Mandarin"));
}

#[test]
fn test_unknown_provider_is_rejected() {
    let mut config = Config::default();
    config.inference.provider = "gpt-9000".to_string();

    let err = AppState::new(config, false).err().expect("provider is unknown");
    assert!(err.to_string().contains("Unknown inference provider 'gpt-9000'"));
}

#[test]
fn test_offline_flag_overrides_providers() {
    let mut config = Config::default();
    config.inference.provider = "gpt-9000".to_string();
    config.translator.provider = "nope".to_string();

    assert!(AppState::new(config, true).is_ok());
}
