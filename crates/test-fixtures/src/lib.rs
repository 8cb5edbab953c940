//! Test fixture loader and scripted embedding providers for folio.
//!
//! Provides typed deserialization of the knowledge-base fixtures under
//! `knowledge/` and deterministic `IEmbeddingProvider` doubles for tests
//! across crates.

pub mod providers;

pub use providers::{CountingProvider, FailingProvider, FixedEmbeddingProvider};

use std::path::PathBuf;

use folio_core::KnowledgeBase;
use serde::de::DeserializeOwned;

/// Root directory of the fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a knowledge base from `knowledge/<name>.json`.
pub fn knowledge_fixture(name: &str) -> KnowledgeBase {
    load_fixture(&format!("knowledge/{name}.json"))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Get the absolute path of `knowledge/<name>.json`.
pub fn knowledge_fixture_path(name: &str) -> PathBuf {
    fixture_path(&format!("knowledge/{name}.json"))
}
