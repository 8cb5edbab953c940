use anyhow::{Context, Result};
use folio_core::models::IntentSummary;
use folio_core::FolioConfig;
use folio_intent::load_knowledge;
use std::path::Path;

pub fn run(config: &FolioConfig, json: bool) -> Result<()> {
    let kb = load_knowledge(Path::new(&config.knowledge.path))
        .with_context(|| format!("failed to load knowledge base {}", config.knowledge.path))?;
    let summaries: Vec<IntentSummary> = kb.intents.iter().map(IntentSummary::from).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        for s in &summaries {
            println!("{:<16} {}", s.tag, s.example_patterns.join(" | "));
        }
    }
    Ok(())
}
