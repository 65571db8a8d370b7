// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Vocabulary configuration: synonyms and transliteration tables.
//!
//! A [`Vocabulary`] is read-only data handed to a [`crate::SearchEngine`] at
//! construction. Nothing in here is global, so two engines with different
//! vocabularies can coexist and tests can inject small fixture tables.
//!
//! # Configuration file
//!
//! ```json
//! {
//!   "synonyms": { "некромант": ["necromancer", "маг смерти"] },
//!   "extendDefaults": true
//! }
//! ```
//!
//! With `extendDefaults` (the default) the file's entries are added after the
//! built-in table; with `false` they replace it.

mod defaults;
pub mod synonyms;

pub use synonyms::SynonymTable;

use crate::error::VocabError;
use crate::util::translit::TranslitTable;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// On-disk vocabulary format.
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyConfig {
    #[serde(default)]
    pub synonyms: BTreeMap<String, Vec<String>>,
    #[serde(default = "default_extend")]
    pub extend_defaults: bool,
}

fn default_extend() -> bool {
    true
}

/// Synonym and transliteration tables for one engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    pub synonyms: SynonymTable,
    pub translit: TranslitTable,
}

impl Vocabulary {
    pub fn new(synonyms: SynonymTable, translit: TranslitTable) -> Self {
        Self { synonyms, translit }
    }

    /// The built-in synonym table. Infallible: every default term is non-empty.
    pub fn default_synonyms() -> SynonymTable {
        let mut table = SynonymTable::new();
        for (term, alternates) in defaults::DEFAULT_SYNONYMS {
            if let Err(err) = table.add(term, alternates.iter()) {
                tracing::warn!(term = %term, error = %err, "skipping invalid default synonym");
            }
        }
        table
    }

    /// Build a vocabulary from a parsed configuration.
    pub fn from_config(config: VocabularyConfig) -> Result<Self, VocabError> {
        let mut synonyms = if config.extend_defaults {
            Self::default_synonyms()
        } else {
            SynonymTable::new()
        };
        for (term, alternates) in &config.synonyms {
            synonyms.add(term, alternates)?;
        }
        Ok(Self::new(synonyms, TranslitTable::default()))
    }

    pub fn from_json_str(json: &str) -> Result<Self, VocabError> {
        let config: VocabularyConfig = serde_json::from_str(json)?;
        Self::from_config(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, VocabError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| VocabError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(Self::default_synonyms(), TranslitTable::default())
    }
}
