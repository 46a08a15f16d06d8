use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::json;
use thought_loops::clients::{CloudError, GenerativeService};
use thought_loops::config::Config;
use thought_loops::embeddings::HashEmbedder;
use thought_loops::nlp::{HeuristicAnalyzer, LexiconSentiment};
use thought_loops::suggest::{AiMode, Category, ScriptedRandom, SeededRandom};
use thought_loops::{Entry, LoopRequest, ThoughtLoopService};

struct RecordingService {
    reply: Option<&'static str>,
    prompts: std::sync::Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl RecordingService {
    fn new(reply: Option<&'static str>) -> Arc<Self> {
        Arc::new(Self {
            reply,
            prompts: std::sync::Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl GenerativeService for RecordingService {
    async fn generate(&self, prompt: &str) -> Result<String, CloudError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.reply {
            Some(text) => Ok(text.to_string()),
            None => Err(CloudError::Timeout { timeout_ms: 10 }),
        }
    }

    fn name(&self) -> &str {
        "recording"
    }
}

fn service_with(
    config: Config,
    generator: Option<Arc<dyn GenerativeService>>,
) -> ThoughtLoopService {
    ThoughtLoopService::new(
        Arc::new(config),
        Arc::new(HeuristicAnalyzer::new()),
        Arc::new(LexiconSentiment::new()),
        Arc::new(HashEmbedder::new(Some(8))),
        generator,
    )
}

fn journal() -> Vec<Entry> {
    [
        "This project is a terrible mess and I feel completely overwhelmed.",
        "I hate how much stress the project is causing me.",
        "Another awful day on the project. Alex in Berlin ignored my emails.",
        "I love my little garden. It's become my happy place.",
    ]
    .into_iter()
    .map(Entry::new)
    .collect()
}

#[tokio::test]
async fn recurring_negative_topic_gets_local_prompt() {
    let service = service_with(Config::default(), None);
    let mut request = LoopRequest::new(journal());
    request.mode = AiMode::Category(Category::Reframing);

    let response = service
        .detect_loop_with(&request, &mut SeededRandom::seeded(11))
        .await
        .unwrap();
    let found = response.detected_loop.expect("loop expected");
    assert_eq!(found.topic, "project");
    assert_eq!(found.kind, "reframing_local_prompt");
    assert!(found.suggestion_text.contains("Project"));
}

fn multilingual_journal() -> Vec<Entry> {
    [
        "This project is a terrible mess, déjà vu all over again.",
        "I hate the project. 仕事のことばかり考えている。",
        "Another awful day on the project in Zürich, I keep ab\u{4000}ing about it.",
        "Le café était fermé. 今日は静かな一日だった。",
    ]
    .into_iter()
    .map(Entry::new)
    .collect()
}

#[tokio::test]
async fn accented_and_cjk_entries_are_analyzed() {
    let service = service_with(Config::default(), None);
    let response = service
        .detect_loop_with(
            &LoopRequest::new(multilingual_journal()),
            &mut ScriptedRandom::new(vec![0]),
        )
        .await
        .unwrap();
    let found = response.detected_loop.expect("loop expected");
    assert_eq!(found.topic, "project");

    let quiet = ["仕事のことばかり考えている。", "Zoë ab\u{4000}ed home.", "naïve façades"]
        .into_iter()
        .map(Entry::new)
        .collect();
    let response = service
        .detect_loop_with(&LoopRequest::new(quiet), &mut ScriptedRandom::new(vec![0]))
        .await
        .unwrap();
    assert!(response.detected_loop.is_none());
}

#[tokio::test]
async fn same_seed_same_suggestion() {
    let service = service_with(Config::default(), None);
    let mut request = LoopRequest::new(journal());
    request.mode = AiMode::Category(Category::Reframing);

    let a = service
        .detect_loop_with(&request, &mut SeededRandom::seeded(99))
        .await
        .unwrap();
    let b = service
        .detect_loop_with(&request, &mut SeededRandom::seeded(99))
        .await
        .unwrap();
    assert_eq!(a, b);
}

#[tokio::test]
async fn two_mentions_are_not_a_loop() {
    let service = service_with(Config::default(), None);
    let entries = journal().into_iter().skip(1).take(2).collect();
    let response = service
        .detect_loop_with(&LoopRequest::new(entries), &mut ScriptedRandom::new(vec![0]))
        .await
        .unwrap();
    assert!(response.detected_loop.is_none());
}

#[tokio::test]
async fn positive_recurring_topic_is_not_a_loop() {
    let service = service_with(Config::default(), None);
    let entries = [
        "My garden looks wonderful today.",
        "I love working in the garden.",
        "The garden makes me so happy.",
    ]
    .into_iter()
    .map(Entry::new)
    .collect();
    let response = service
        .detect_loop_with(&LoopRequest::new(entries), &mut ScriptedRandom::new(vec![0]))
        .await
        .unwrap();
    assert!(response.detected_loop.is_none());
}

#[tokio::test]
async fn cloud_success_uses_redacted_prompt() {
    let mut config = Config::default();
    config.runtime.gemini_api_key = Some("test-key".into());
    let remote = RecordingService::new(Some("What is one part of the project you enjoy?"));
    let service = service_with(config, Some(remote.clone()));

    let mut request = LoopRequest::new(journal());
    request.use_cloud = true;
    let response = service
        .detect_loop_with(&request, &mut ScriptedRandom::new(vec![0]))
        .await
        .unwrap();
    let found = response.detected_loop.unwrap();
    assert_eq!(found.kind, "cloud_prompt_gemini");
    assert_eq!(
        found.suggestion_text,
        "What is one part of the project you enjoy?"
    );

    let prompts = remote.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(!prompts[0].contains("Alex"));
    assert!(!prompts[0].contains("Berlin"));
    assert!(prompts[0].contains("[PERSON]"));
}

#[tokio::test]
async fn cloud_failure_falls_back_to_local() {
    let mut config = Config::default();
    config.runtime.gemini_api_key = Some("test-key".into());
    let remote = RecordingService::new(None);
    let service = service_with(config, Some(remote.clone()));

    let mut request = LoopRequest::new(journal());
    request.use_cloud = true;
    request.mode = AiMode::Category(Category::ActionOriented);
    let found = service
        .detect_loop_with(&request, &mut ScriptedRandom::new(vec![0]))
        .await
        .unwrap()
        .detected_loop
        .unwrap();
    assert_eq!(found.kind, "action_oriented_local_prompt");
    assert_eq!(remote.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn cloud_skipped_without_credential() {
    let remote = RecordingService::new(Some("remote text"));
    let service = service_with(Config::default(), Some(remote.clone()));

    let mut request = LoopRequest::new(journal());
    request.use_cloud = true;
    let found = service
        .detect_loop_with(&request, &mut ScriptedRandom::new(vec![1, 0]))
        .await
        .unwrap()
        .detected_loop
        .unwrap();
    assert_eq!(found.kind, "emotional_exploration_local_prompt");
    assert_eq!(remote.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn knowledge_base_when_enabled() {
    let mut config = Config::default();
    config.suggestions.knowledge_base = true;
    let service = service_with(config, None);
    let found = service
        .detect_loop_with(&LoopRequest::new(journal()), &mut ScriptedRandom::new(vec![0]))
        .await
        .unwrap()
        .detected_loop
        .unwrap();
    assert_eq!(found.kind, "generative_prompt");
}

#[tokio::test]
async fn constellation_keeps_order_and_fields() {
    let service = service_with(Config::default(), None);
    let entries: Vec<Entry> = journal()
        .into_iter()
        .enumerate()
        .map(|(i, mut e)| {
            e.id = json!(format!("e{}", i));
            e.date = json!("2024-06-0{}T08:00:00Z".replace("{}", &(i + 1).to_string()));
            e
        })
        .collect();
    let records = service.constellation(&entries).await.unwrap();
    assert_eq!(records.len(), entries.len());
    for (record, entry) in records.iter().zip(&entries) {
        assert_eq!(record.id, entry.id);
        assert_eq!(record.content, entry.content);
        assert_eq!(record.date, entry.date);
        assert_eq!(record.vector.len(), 8);
        assert!((-1.0..=1.0).contains(&record.sentiment));
    }
    assert!(records[0].sentiment < 0.0);
    assert!(records[3].sentiment > 0.0);
}
