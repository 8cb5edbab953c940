use anyhow::Result;
use folio_core::models::ChatOutcome;
use folio_core::FolioConfig;

use super::{ready_service, render_reply};

pub async fn run(config: &FolioConfig, text: &str, json: bool, explain: bool) -> Result<()> {
    let service = ready_service(config).await?;
    let outcome = service.process_message_detailed(text).await;

    match (json, explain) {
        (true, true) => println!("{}", serde_json::to_string_pretty(&outcome)?),
        (true, false) => println!("{}", serde_json::to_string_pretty(&outcome.reply)?),
        (false, explain) => {
            println!("{}", render_reply(&outcome.reply));
            if explain {
                println!("{}", explain_line(&outcome));
            }
        }
    }
    Ok(())
}

fn explain_line(outcome: &ChatOutcome) -> String {
    let source = serde_json::to_value(outcome.source)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default();
    let mut line = format!("[{source}");
    if let Some(tag) = &outcome.intent_tag {
        line.push_str(&format!(" intent={tag}"));
    }
    if let Some(confidence) = outcome.confidence {
        line.push_str(&format!(" confidence={confidence:.3}"));
    }
    line.push(']');
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::models::MatchSource;
    use folio_core::ChatMessage;

    #[test]
    fn explain_line_lists_available_details() {
        let outcome = ChatOutcome::new(ChatMessage::assistant("x"), MatchSource::Semantic)
            .with_intent("projects")
            .with_confidence(0.83931);
        assert_eq!(explain_line(&outcome), "[semantic intent=projects confidence=0.839]");

        let fallback = ChatOutcome::new(ChatMessage::assistant("x"), MatchSource::Fallback);
        assert_eq!(explain_line(&fallback), "[fallback]");
    }
}
