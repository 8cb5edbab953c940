//! Knowledge base loading and validation.

use std::collections::HashSet;
use std::path::Path;

use folio_core::errors::{FolioResult, KnowledgeError};
use folio_core::KnowledgeBase;
use tracing::debug;

/// Read, parse and validate a knowledge base JSON file.
pub fn load_knowledge(path: &Path) -> FolioResult<KnowledgeBase> {
    let content = std::fs::read_to_string(path).map_err(|_| KnowledgeError::FileNotFound {
        path: path.display().to_string(),
    })?;
    let kb = parse_with_origin(&content, &path.display().to_string())?;
    debug!(
        path = %path.display(),
        intents = kb.intents.len(),
        patterns = kb.pattern_count(),
        "knowledge base loaded"
    );
    Ok(kb)
}

/// Parse and validate a knowledge base from a JSON string.
pub fn parse_knowledge(json: &str) -> FolioResult<KnowledgeBase> {
    parse_with_origin(json, "<string>")
}

fn parse_with_origin(json: &str, origin: &str) -> FolioResult<KnowledgeBase> {
    let kb: KnowledgeBase = serde_json::from_str(json).map_err(|e| KnowledgeError::ParseError {
        path: origin.to_string(),
        message: e.to_string(),
    })?;
    validate_knowledge(&kb)?;
    Ok(kb)
}

/// Check the structural invariants matching relies on.
///
/// Zero intents is allowed; every message then falls back.
pub fn validate_knowledge(kb: &KnowledgeBase) -> Result<(), KnowledgeError> {
    if kb.fallback_responses.is_empty() {
        return Err(KnowledgeError::NoFallbackResponses);
    }

    let mut seen = HashSet::new();
    for intent in &kb.intents {
        if !seen.insert(intent.tag.as_str()) {
            return Err(KnowledgeError::DuplicateTag {
                tag: intent.tag.clone(),
            });
        }
        if intent.patterns.is_empty() {
            return Err(KnowledgeError::EmptyPatterns {
                tag: intent.tag.clone(),
            });
        }
        if intent.patterns.iter().any(|p| p.trim().is_empty()) {
            return Err(KnowledgeError::EmptyPattern {
                tag: intent.tag.clone(),
            });
        }
        if intent.responses.is_empty() {
            return Err(KnowledgeError::EmptyResponses {
                tag: intent.tag.clone(),
            });
        }
    }
    Ok(())
}
