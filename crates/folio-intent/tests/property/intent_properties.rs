use folio_core::config::MatcherConfig;
use folio_core::constants::EMPTY_INPUT_REPLY;
use folio_embeddings::TfIdfFallback;
use folio_intent::keyword::{keyword_match, tokenize};
use folio_intent::{cosine_similarity, ChatbotService};
use proptest::prelude::*;
use test_fixtures::{knowledge_fixture, FixedEmbeddingProvider};

fn vector(len: usize) -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-100.0f32..100.0, len)
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn similarity_is_bounded((a, b) in (1usize..32).prop_flat_map(|n| (vector(n), vector(n)))) {
        let s = cosine_similarity(&a, &b);
        prop_assert!((-1.0..=1.0).contains(&s), "similarity out of range: {}", s);
    }

    #[test]
    fn similarity_is_symmetric((a, b) in (1usize..32).prop_flat_map(|n| (vector(n), vector(n)))) {
        let ab = cosine_similarity(&a, &b);
        let ba = cosine_similarity(&b, &a);
        prop_assert!((ab - ba).abs() < 1e-6);
    }

    #[test]
    fn self_similarity_is_one_or_zero(a in vector(16)) {
        let s = cosine_similarity(&a, &a);
        let zero = a.iter().all(|x| *x == 0.0);
        prop_assert!(if zero { s == 0.0 } else { (s - 1.0).abs() < 1e-5 }, "unexpected norm {} (zero={})", s, zero);
    }

    #[test]
    fn long_inputs_never_keyword_match(words in prop::collection::vec("[a-z]{1,8}", 3..8)) {
        let kb = knowledge_fixture("portfolio");
        let input = words.join(" ");
        prop_assert!(keyword_match(&input, &kb.intents, 2).is_none());
    }

    #[test]
    fn pattern_tokens_keyword_match_some_intent(
        intent_idx in 0usize..5,
        pattern_idx in 0usize..8,
        take in 1usize..=2,
    ) {
        let kb = knowledge_fixture("portfolio");
        let intent = &kb.intents[intent_idx];
        let pattern = &intent.patterns[pattern_idx % intent.patterns.len()];
        let input = tokenize(pattern).into_iter().take(take).collect::<Vec<_>>().join(" ");

        let hit = keyword_match(&input, &kb.intents, 2);
        prop_assert!(hit.is_some(), "{:?} taken from {:?} did not match", input, pattern);
        let winner = kb.intents.iter().position(|i| i.tag == hit.unwrap().tag).unwrap();
        prop_assert!(winner <= intent_idx, "first match must not come after the source intent");
    }

    #[test]
    fn keyword_hits_answer_from_intent_not_fallback(
        intent_idx in 0usize..5,
        pattern_idx in 0usize..8,
    ) {
        let kb = knowledge_fixture("portfolio");
        let intent = &kb.intents[intent_idx];
        let pattern = &intent.patterns[pattern_idx % intent.patterns.len()];
        let input = tokenize(pattern).into_iter().take(2).collect::<Vec<_>>().join(" ");
        let expected = keyword_match(&input, &kb.intents, 2).unwrap().clone();

        let service = ChatbotService::new(kb.clone(), Box::new(TfIdfFallback::new(64)), MatcherConfig::default()).unwrap();
        let reply = runtime().block_on(service.process_message(&input));
        prop_assert!(expected.responses.contains(&reply.content));
        prop_assert!(!kb.fallback_responses.contains(&reply.content));
    }

    #[test]
    fn blank_input_always_asks_for_a_question(ws in "[ \t\n]{0,10}") {
        let service = ChatbotService::new(
            knowledge_fixture("portfolio"),
            Box::new(TfIdfFallback::new(64)),
            MatcherConfig::default(),
        ).unwrap();
        let reply = runtime().block_on(service.process_message(&ws));
        prop_assert_eq!(reply.content, EMPTY_INPUT_REPLY);
    }

    #[test]
    fn no_similarity_means_fallback(words in prop::collection::vec("[a-z]{3,8}", 3..6)) {
        // Every text embeds to the zero vector, so no similarity exceeds 0.4.
        let kb = knowledge_fixture("portfolio");
        let service = ChatbotService::new(
            kb.clone(),
            Box::new(FixedEmbeddingProvider::new(8)),
            MatcherConfig::default(),
        ).unwrap();
        let reply = runtime().block_on(service.process_message(&words.join(" ")));
        prop_assert!(kb.fallback_responses.contains(&reply.content));
        prop_assert_eq!(reply.navigate_to, None);
    }
}
