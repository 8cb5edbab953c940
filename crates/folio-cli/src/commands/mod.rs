pub mod ask;
pub mod chat;
pub mod intents;
pub mod validate;

use anyhow::{Context, Result};
use folio_core::{ChatReply, FolioConfig};
use folio_intent::ChatbotService;

/// Build the service and embed every pattern up front.
pub(crate) async fn ready_service(config: &FolioConfig) -> Result<ChatbotService> {
    let service = ChatbotService::from_config(config)
        .await
        .with_context(|| format!("failed to load knowledge base {}", config.knowledge.path))?;
    service
        .initialize()
        .await
        .context("failed to initialize chatbot")?;
    Ok(service)
}

/// Human-readable rendering of a reply.
pub(crate) fn render_reply(reply: &ChatReply) -> String {
    match &reply.navigate_to {
        Some(route) => format!("{}\n→ {route}", reply.content),
        None => reply.content.clone(),
    }
}
