//! Keyword matching for very short inputs.
//!
//! Applies only when the input has between 1 and `max_tokens` whitespace
//! tokens. An intent matches when one of its patterns covers every input
//! token, where a token is covered if it is a substring of some pattern token
//! or contains one. The first matching intent in knowledge-base order wins.

use folio_core::Intent;

/// Lower-case and split on whitespace; empty tokens are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Return the first intent whose patterns cover every input token.
pub fn keyword_match<'a>(input: &str, intents: &'a [Intent], max_tokens: usize) -> Option<&'a Intent> {
    let tokens = tokenize(input);
    if tokens.is_empty() || tokens.len() > max_tokens {
        return None;
    }

    intents.iter().find(|intent| {
        intent
            .patterns
            .iter()
            .any(|pattern| pattern_covers(&tokenize(pattern), &tokens))
    })
}

fn pattern_covers(pattern_tokens: &[String], input_tokens: &[String]) -> bool {
    input_tokens.iter().all(|token| {
        pattern_tokens
            .iter()
            .any(|pt| pt.contains(token.as_str()) || token.contains(pt.as_str()))
    })
}
