//! Read-only reference data loaded once at startup.
//!
//! Three flat JSON arrays on disk: `standards.json`, `examples.json`,
//! `glossary.json`. A missing file bootstraps as an empty array written back
//! to disk so subsequent loads are well-formed. There is no mutation API
//! after load; the store is shared via `Arc` in `AppState`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::models::{Example, GlossaryEntry, Standard};

#[derive(Debug)]
pub struct ReferenceStore {
    standards: Vec<Standard>,
    examples: Vec<Example>,
    glossary: Vec<GlossaryEntry>,
}

impl ReferenceStore {
    /// Loads the three lookup tables from `dir`, creating the directory and
    /// empty tables if they are absent. A malformed existing file is a
    /// startup error.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        Ok(Self {
            standards: load_table(&dir.join("standards.json"))?,
            examples: load_table(&dir.join("examples.json"))?,
            glossary: load_table(&dir.join("glossary.json"))?,
        })
    }

    pub fn find_standard(&self, id: &str) -> Option<&Standard> {
        self.standards.iter().find(|s| s.id == id)
    }

    /// First example attached to the given standard, if any.
    pub fn find_example(&self, standard_id: &str) -> Option<&Example> {
        self.examples.iter().find(|e| e.standard_id == standard_id)
    }

    pub fn standards(&self) -> &[Standard] {
        &self.standards
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    pub fn glossary(&self) -> &[GlossaryEntry] {
        &self.glossary
    }
}

fn load_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {}", parent.display()))?;
        }
        fs::write(path, "[]")
            .with_context(|| format!("Failed to bootstrap {}", path.display()))?;
        return Ok(Vec::new());
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}
