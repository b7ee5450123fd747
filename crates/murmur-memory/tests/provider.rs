//! Tests for `ShortMemoryUpdater`. These live as integration tests because
//! `murmur-test-utils` links `murmur-memory` as a library; compiling them as
//! unit tests would create two copies of the crate's traits.

use murmur_memory::model::DialogueTurn;
use murmur_memory::provider::ShortMemoryUpdater;
use murmur_memory::remote::NullRemoteSink;
use murmur_memory::store::{MemoryStore, YamlMemoryStore};
use murmur_llm::LlmClient;
use murmur_test_utils::{FailingLlm, FixedLlm, RecordingLlm, RecordingSink};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use tempfile::{TempDir, tempdir};

fn file_store() -> (TempDir, Arc<YamlMemoryStore>) {
    let temp = tempdir().expect("tempdir");
    let store = Arc::new(YamlMemoryStore::new(temp.path().join(".memory.yaml")));
    (temp, store)
}

fn structured_updater(
    store: Arc<YamlMemoryStore>,
    llm: Option<Arc<dyn LlmClient>>,
) -> ShortMemoryUpdater {
    ShortMemoryUpdater::new("role-a", llm, store, Arc::new(NullRemoteSink), None, true)
        .expect("updater")
}

fn two_turns() -> Vec<DialogueTurn> {
    vec![
        DialogueTurn::user("my name is Alex"),
        DialogueTurn::assistant("nice to meet you, Alex"),
    ]
}

#[tokio::test]
async fn short_transcript_is_a_silent_noop() {
    let (_temp, store) = file_store();
    let llm: Arc<dyn LlmClient> = Arc::new(FixedLlm::new("{\"a\":1}"));
    let mut updater = structured_updater(store.clone(), Some(llm));

    let result = updater
        .save_memory(&[DialogueTurn::user("hi")])
        .await
        .expect("save");

    assert_eq!(result, None);
    assert_eq!(store.get("role-a").expect("get"), None);
}

#[tokio::test]
async fn missing_llm_is_a_noop_without_store_mutation() {
    let (_temp, store) = file_store();
    let mut updater = structured_updater(store.clone(), None);

    let result = updater.save_memory(&two_turns()).await.expect("save");

    assert_eq!(result, None);
    assert_eq!(store.get("role-a").expect("get"), None);
}

#[tokio::test]
async fn valid_json_response_is_adopted_and_persisted() {
    let (_temp, store) = file_store();
    store.put("role-b", "other memory").expect("seed");
    let llm: Arc<dyn LlmClient> = Arc::new(FixedLlm::new("{\"现用名\": \"Alex\"}"));
    let mut updater = structured_updater(store.clone(), Some(llm));

    let result = updater.save_memory(&two_turns()).await.expect("save");

    assert_eq!(result, Some("{\"现用名\": \"Alex\"}".to_string()));
    assert_eq!(
        store.get("role-a").expect("get"),
        Some("{\"现用名\": \"Alex\"}".to_string())
    );
    // Entries for other roles in the shared document stay untouched.
    assert_eq!(
        store.get("role-b").expect("get"),
        Some("other memory".to_string())
    );
}

#[tokio::test]
async fn fenced_json_response_is_unwrapped() {
    let (_temp, store) = file_store();
    let llm: Arc<dyn LlmClient> =
        Arc::new(FixedLlm::new("```json\n{\"topic\": \"tea\"}\n```"));
    let mut updater = structured_updater(store.clone(), Some(llm));

    let result = updater.save_memory(&two_turns()).await.expect("save");

    assert_eq!(result, Some("{\"topic\": \"tea\"}".to_string()));
    assert_eq!(
        store.get("role-a").expect("get"),
        Some("{\"topic\": \"tea\"}".to_string())
    );
}

#[tokio::test]
async fn invalid_json_response_keeps_prior_state() {
    let (_temp, store) = file_store();
    store.put("role-a", "{\"kept\": true}").expect("seed");
    let llm: Arc<dyn LlmClient> = Arc::new(FixedLlm::new("sorry, no JSON today"));
    let mut updater = structured_updater(store.clone(), Some(llm));
    assert_eq!(updater.short_memory(), "{\"kept\": true}");

    let result = updater.save_memory(&two_turns()).await.expect("save");

    // The failed update is discarded; the cycle still reports the cache.
    assert_eq!(result, Some("{\"kept\": true}".to_string()));
    assert_eq!(
        store.get("role-a").expect("get"),
        Some("{\"kept\": true}".to_string())
    );
}

#[tokio::test]
async fn llm_failure_propagates_to_the_caller() {
    let (_temp, store) = file_store();
    let llm: Arc<dyn LlmClient> = Arc::new(FailingLlm::new("backend down"));
    let mut updater = structured_updater(store.clone(), Some(llm));

    let result = updater.save_memory(&two_turns()).await;

    assert!(result.is_err());
    assert_eq!(store.get("role-a").expect("get"), None);
}

#[tokio::test]
async fn content_only_mode_saves_remotely_without_touching_the_cache() {
    let (_temp, store) = file_store();
    let sink = Arc::new(RecordingSink::default());
    let llm: Arc<dyn LlmClient> = Arc::new(FixedLlm::new("Alex prefers green tea."));
    let mut updater = ShortMemoryUpdater::new(
        "role-a",
        Some(llm),
        store.clone(),
        sink.clone(),
        Some("prior summary".to_string()),
        false,
    )
    .expect("updater");

    let result = updater.save_memory(&two_turns()).await.expect("save");

    assert_eq!(result, Some("prior summary".to_string()));
    assert_eq!(updater.short_memory(), "prior summary");
    assert_eq!(
        *sink.saved.lock(),
        vec![(
            "role-a".to_string(),
            "Alex prefers green tea.".to_string()
        )]
    );
    // Nothing lands in the local file store in this mode.
    assert_eq!(store.get("role-a").expect("get"), None);
}

#[tokio::test]
async fn content_only_mode_accepts_any_response_text() {
    let (_temp, store) = file_store();
    let sink = Arc::new(RecordingSink::default());
    let llm: Arc<dyn LlmClient> = Arc::new(FixedLlm::new("not json at all {{{"));
    let mut updater =
        ShortMemoryUpdater::new("role-a", Some(llm), store, sink.clone(), None, false)
            .expect("updater");

    updater.save_memory(&two_turns()).await.expect("save");

    assert_eq!(sink.saved.lock().len(), 1);
    assert_eq!(sink.saved.lock()[0].1, "not json at all {{{");
}

#[tokio::test]
async fn query_memory_ignores_the_query_string() {
    let (_temp, store) = file_store();
    store.put("role-a", "Alex likes tea").expect("seed");
    let updater = structured_updater(store, None);

    assert_eq!(updater.query_memory(""), "Alex likes tea");
    assert_eq!(updater.query_memory("what is the weather"), "Alex likes tea");
    assert_eq!(updater.query_memory("tea"), "Alex likes tea");
}

#[tokio::test]
async fn persisted_memory_survives_a_fresh_updater() {
    let (_temp, store) = file_store();
    let llm: Arc<dyn LlmClient> =
        Arc::new(FixedLlm::new("{\"现用名\": \"张三丰\", \"note\": \"café\"}"));
    let mut updater = structured_updater(store.clone(), Some(llm));
    updater.save_memory(&two_turns()).await.expect("save");
    let expected = updater.short_memory().to_string();

    let fresh = structured_updater(store, None);
    assert_eq!(fresh.short_memory(), expected);
}

#[tokio::test]
async fn prior_memory_is_offered_back_to_the_model() {
    let (_temp, store) = file_store();
    store.put("role-a", "{\"prior\": true}").expect("seed");
    let llm = Arc::new(RecordingLlm::new("{\"prior\": true}"));
    let mut updater = structured_updater(store, Some(llm.clone()));

    let result = updater.save_memory(&two_turns()).await.expect("save");

    // Echoing the prior memory unchanged is a valid no-op update.
    assert_eq!(result, Some("{\"prior\": true}".to_string()));
    let user_prompt = llm.last_user.lock().clone().expect("captured prompt");
    assert!(user_prompt.contains("User: my name is Alex"));
    assert!(user_prompt.contains("History Memory:\n{\"prior\": true}"));
    assert!(user_prompt.contains("Current Time: "));
    let options = llm.last_options.lock().expect("captured options");
    assert_eq!(options.max_tokens, 2000);
    assert_eq!(options.temperature, 0.2);
}

#[tokio::test]
async fn structured_mode_sends_the_structured_prompt() {
    let (_temp, store) = file_store();
    let llm = Arc::new(RecordingLlm::new("{}"));
    let mut updater = structured_updater(store, Some(llm.clone()));

    updater.save_memory(&two_turns()).await.expect("save");

    let system = llm.last_system.lock().clone().expect("captured system");
    assert!(system.contains("Temporal Memory Weaver"));
}

#[tokio::test]
async fn content_only_mode_sends_the_summarizer_prompt() {
    let (_temp, store) = file_store();
    let llm = Arc::new(RecordingLlm::new("summary text"));
    let mut updater = ShortMemoryUpdater::new(
        "role-a",
        Some(llm.clone()),
        store,
        Arc::new(RecordingSink::default()),
        None,
        false,
    )
    .expect("updater");

    updater.save_memory(&two_turns()).await.expect("save");

    let system = llm.last_system.lock().clone().expect("captured system");
    assert!(system.contains("dialogue memory summarizer"));
}

#[tokio::test]
async fn presupplied_memory_skips_the_store_read() {
    let (_temp, store) = file_store();
    store.put("role-a", "on disk").expect("seed");
    let updater = ShortMemoryUpdater::new(
        "role-a",
        None,
        store,
        Arc::new(NullRemoteSink),
        Some("handed over".to_string()),
        true,
    )
    .expect("updater");

    assert_eq!(updater.short_memory(), "handed over");
}

#[tokio::test]
async fn init_memory_rebinds_and_reloads() {
    let (_temp, store) = file_store();
    store.put("role-b", "{\"b\": 1}").expect("seed");
    let mut updater = structured_updater(store, None);
    assert_eq!(updater.short_memory(), "");

    let llm: Arc<dyn LlmClient> = Arc::new(FixedLlm::new("{}"));
    updater
        .init_memory("role-b", Some(llm), None, true)
        .expect("init");

    assert_eq!(updater.role_id(), "role-b");
    assert_eq!(updater.short_memory(), "{\"b\": 1}");
}

#[tokio::test]
async fn suspicious_credential_does_not_abort_the_save() {
    let (_temp, store) = file_store();
    let llm: Arc<dyn LlmClient> =
        Arc::new(FixedLlm::new("{\"ok\": true}").with_api_key(Some("your_api_key".into())));
    let mut updater = structured_updater(store.clone(), Some(llm));

    let result = updater.save_memory(&two_turns()).await.expect("save");

    assert_eq!(result, Some("{\"ok\": true}".to_string()));
    assert_eq!(
        store.get("role-a").expect("get"),
        Some("{\"ok\": true}".to_string())
    );
}
