//! End-to-end tests for ChatbotService routing.

use std::sync::Arc;

use folio_core::config::MatcherConfig;
use folio_core::constants::{EMPTY_INPUT_REPLY, ERROR_REPLY};
use folio_core::models::MatchSource;
use folio_core::{ChatMessage, ChatRequest, FolioConfig, KnowledgeBase, Role};
use folio_embeddings::TfIdfFallback;
use folio_intent::ChatbotService;
use test_fixtures::{
    knowledge_fixture, knowledge_fixture_path, CountingProvider, FailingProvider,
    FixedEmbeddingProvider,
};

fn tfidf_service(fixture: &str) -> ChatbotService {
    ChatbotService::new(
        knowledge_fixture(fixture),
        Box::new(TfIdfFallback::new(512)),
        MatcherConfig::default(),
    )
    .unwrap()
}

// ═══════════════════════════════════════════════════════════════════════════
// CANONICAL SCENARIOS
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn greeting_keyword_hit() {
    let service = tfidf_service("greeting");
    let reply = service.process_message("hello").await;
    assert_eq!(reply, ChatMessage::assistant("Hey!"));
}

#[tokio::test]
async fn gibberish_falls_back() {
    let service = tfidf_service("greeting");
    let reply = service.process_message("asdkjasdkj").await;
    assert_eq!(reply, ChatMessage::assistant("I don't understand"));
}

#[tokio::test]
async fn empty_and_blank_input_ask_for_a_question() {
    let service = tfidf_service("greeting");
    for input in ["", "   ", "\n\t "] {
        let reply = service.process_message(input).await;
        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(reply.content, EMPTY_INPUT_REPLY);
        assert_eq!(reply.navigate_to, None);
    }
}

#[tokio::test]
async fn navigation_intent_sets_route() {
    let service = tfidf_service("navigation");
    let reply = service.process_message("show me your projects").await;
    assert_eq!(reply.content, "Here are my projects");
    assert_eq!(reply.navigate_to.as_deref(), Some("/projects"));

    let json = serde_json::to_value(&reply).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "role": "assistant",
            "content": "Here are my projects",
            "navigate_to": "/projects"
        })
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// ROUTING DETAILS
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn detailed_outcome_reports_source() {
    let service = tfidf_service("navigation");

    let keyword = service.process_message_detailed("projects").await;
    assert_eq!(keyword.source, MatchSource::Keyword);
    assert_eq!(keyword.intent_tag.as_deref(), Some("nav_projects"));
    assert_eq!(keyword.confidence, None);

    let semantic = service.process_message_detailed("show me your projects").await;
    assert_eq!(semantic.source, MatchSource::Semantic);
    assert!(semantic.confidence.unwrap() > 0.99);

    let fallback = service.process_message_detailed("asdkjasdkj").await;
    assert_eq!(fallback.source, MatchSource::Fallback);
    assert_eq!(fallback.intent_tag, None);

    let empty = service.process_message_detailed(" ").await;
    assert_eq!(empty.source, MatchSource::EmptyInput);
}

#[tokio::test]
async fn related_question_matches_semantically() {
    let service = tfidf_service("portfolio");
    let outcome = service
        .process_message_detailed("what projects have you built")
        .await;
    assert_eq!(outcome.source, MatchSource::Semantic);
    assert_eq!(outcome.intent_tag.as_deref(), Some("projects"));
    assert_eq!(outcome.reply.navigate_to.as_deref(), Some("/projects"));
}

#[tokio::test]
async fn match_at_or_below_threshold_falls_back() {
    let kb = knowledge_fixture("greeting");
    let provider = FixedEmbeddingProvider::new(2)
        .with("hello", vec![1.0, 0.0])
        .with("hi there", vec![1.0, 0.0])
        .with("tell me about yourself", vec![0.3, 1.0]);

    // cos ≈ 0.287: below 0.4.
    let service = ChatbotService::new(kb.clone(), Box::new(provider), MatcherConfig::default()).unwrap();
    let outcome = service.process_message_detailed("tell me about yourself").await;
    assert_eq!(outcome.source, MatchSource::Fallback);
    assert_eq!(outcome.reply.content, "I don't understand");

    // Lower the bar and the same query matches.
    let provider = FixedEmbeddingProvider::new(2)
        .with("hello", vec![1.0, 0.0])
        .with("hi there", vec![1.0, 0.0])
        .with("tell me about yourself", vec![0.3, 1.0]);
    let config = MatcherConfig {
        threshold: 0.2,
        ..Default::default()
    };
    let service = ChatbotService::new(kb, Box::new(provider), config).unwrap();
    let outcome = service.process_message_detailed("tell me about yourself").await;
    assert_eq!(outcome.source, MatchSource::Semantic);
    assert_eq!(outcome.reply.content, "Hey!");
}

#[tokio::test]
async fn duplicate_pattern_resolves_to_first_intent() {
    let service = tfidf_service("duplicate_patterns");
    service.initialize().await.unwrap();
    // "Show Me Your Work" and "show me your work" collapse into one entry.
    assert_eq!(service.pattern_count(), 3);

    let semantic = service.process_message_detailed("show me your work").await;
    assert_eq!(semantic.source, MatchSource::Semantic);
    assert_eq!(semantic.reply.content, "from first");

    let keyword = service.process_message_detailed("your work").await;
    assert_eq!(keyword.source, MatchSource::Keyword);
    assert_eq!(keyword.reply.content, "from first");
}

// ═══════════════════════════════════════════════════════════════════════════
// INITIALIZATION
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn initialize_is_idempotent() {
    let provider = Arc::new(CountingProvider::new(TfIdfFallback::new(64)));
    let service = ChatbotService::new(
        knowledge_fixture("portfolio"),
        Box::new(provider.clone()),
        MatcherConfig::default(),
    )
    .unwrap();

    service.initialize().await.unwrap();
    service.initialize().await.unwrap();
    assert!(service.is_initialized());
    assert_eq!(provider.batch_calls(), 1);
    assert_eq!(provider.texts_embedded(), knowledge_fixture("portfolio").pattern_count());
}

#[tokio::test]
async fn concurrent_initialize_builds_once() {
    let provider = Arc::new(CountingProvider::new(TfIdfFallback::new(64)));
    let service = Arc::new(
        ChatbotService::new(
            knowledge_fixture("portfolio"),
            Box::new(provider.clone()),
            MatcherConfig::default(),
        )
        .unwrap(),
    );

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.initialize().await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(provider.batch_calls(), 1);
}

#[tokio::test]
async fn first_message_initializes_lazily() {
    let service = tfidf_service("greeting");
    assert!(!service.is_initialized());
    assert_eq!(service.pattern_count(), 0);
    service.process_message("hello").await;
    assert!(service.is_initialized());
    assert_eq!(service.pattern_count(), 2);
}

#[tokio::test]
async fn empty_knowledge_base_always_falls_back() {
    let provider = Arc::new(CountingProvider::new(TfIdfFallback::new(64)));
    let kb = KnowledgeBase {
        intents: Vec::new(),
        fallback_responses: vec!["nothing here".to_string()],
    };
    let service = ChatbotService::new(kb, Box::new(provider.clone()), MatcherConfig::default()).unwrap();

    let reply = service.process_message("what projects have you built").await;
    assert_eq!(reply.content, "nothing here");
    assert_eq!(provider.batch_calls(), 0);
}

// ═══════════════════════════════════════════════════════════════════════════
// FAILURE HANDLING
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn initialize_propagates_provider_failure() {
    let service = ChatbotService::new(
        knowledge_fixture("greeting"),
        Box::new(FailingProvider::new(8)),
        MatcherConfig::default(),
    )
    .unwrap();
    let err = service.initialize().await.unwrap_err();
    assert!(err.to_string().contains("scripted failure"));
    assert!(!service.is_initialized());
}

#[tokio::test]
async fn message_errors_become_apology_reply() {
    let service = ChatbotService::new(
        knowledge_fixture("greeting"),
        Box::new(FailingProvider::new(8)),
        MatcherConfig::default(),
    )
    .unwrap();
    let outcome = service.process_message_detailed("what can you do").await;
    assert_eq!(outcome.source, MatchSource::Error);
    assert_eq!(outcome.reply, ChatMessage::assistant(ERROR_REPLY));
}

#[tokio::test]
async fn invalid_knowledge_base_is_rejected() {
    let kb = KnowledgeBase {
        intents: Vec::new(),
        fallback_responses: Vec::new(),
    };
    let result = ChatbotService::new(kb, Box::new(TfIdfFallback::new(8)), MatcherConfig::default());
    assert!(result.is_err());
}

// ═══════════════════════════════════════════════════════════════════════════
// SURFACE
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn respond_uses_last_user_message() {
    let service = tfidf_service("navigation");
    let request = ChatRequest {
        messages: vec![
            ChatMessage::user("hello"),
            ChatMessage::assistant("I don't understand"),
            ChatMessage::user("show me your projects"),
            ChatMessage::assistant("ignored"),
        ],
    };
    let reply = service.respond(&request).await;
    assert_eq!(reply.navigate_to.as_deref(), Some("/projects"));

    let empty = service.respond(&ChatRequest::default()).await;
    assert_eq!(empty.content, EMPTY_INPUT_REPLY);
}

#[test]
fn available_intents_lists_up_to_three_examples() {
    let service = tfidf_service("portfolio");
    let intents = service.available_intents();
    assert_eq!(intents.len(), 5);
    assert_eq!(intents[0].tag, "greeting");
    assert_eq!(intents[0].example_patterns, vec!["hello", "hi there", "hey"]);
    assert_eq!(intents[4].example_patterns, vec!["thanks", "thank you very much"]);
}

#[tokio::test]
async fn seeded_services_reply_identically() {
    let config = MatcherConfig {
        response_seed: Some(99),
        ..Default::default()
    };
    let a = ChatbotService::new(
        knowledge_fixture("portfolio"),
        Box::new(TfIdfFallback::new(64)),
        config.clone(),
    )
    .unwrap();
    let b = ChatbotService::new(
        knowledge_fixture("portfolio"),
        Box::new(TfIdfFallback::new(64)),
        config,
    )
    .unwrap();
    for _ in 0..10 {
        assert_eq!(a.process_message("hey").await, b.process_message("hey").await);
    }
}

#[tokio::test]
async fn from_config_loads_knowledge_and_provider() {
    let mut config = FolioConfig::default();
    config.knowledge.path = knowledge_fixture_path("greeting").display().to_string();
    let service = ChatbotService::from_config(&config).await.unwrap();
    assert_eq!(service.provider_name(), "tfidf-fallback");
    assert_eq!(service.process_message("hello").await.content, "Hey!");
}

#[tokio::test]
async fn from_config_missing_knowledge_file_errors() {
    let mut config = FolioConfig::default();
    config.knowledge.path = "/nonexistent/knowledge.json".to_string();
    assert!(ChatbotService::from_config(&config).await.is_err());
}
