use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use folio_core::{FolioConfig, KnowledgeBase};
use folio_intent::load_knowledge;

pub fn run(config: &FolioConfig, path: Option<&Path>) -> Result<()> {
    let path = path.unwrap_or_else(|| Path::new(&config.knowledge.path));
    let kb = load_knowledge(path).with_context(|| format!("invalid knowledge base {}", path.display()))?;
    println!("{}: {}", path.display(), summary(&kb));
    Ok(())
}

fn summary(kb: &KnowledgeBase) -> String {
    let unique: HashSet<String> = kb
        .intents
        .iter()
        .flat_map(|i| i.patterns.iter().map(|p| p.to_lowercase()))
        .collect();
    format!(
        "ok, {} intents, {} patterns ({} unique), {} fallback responses",
        kb.intents.len(),
        kb.pattern_count(),
        unique.len(),
        kb.fallback_responses.len()
    )
}
