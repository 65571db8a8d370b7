// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Memoized index, keyed on the caller's notion of "list version".
//!
//! Search runs on every keystroke; the character list changes only when the
//! catalog is refetched. The cache keeps the last index and rebuilds it only
//! when the version changes.

use crate::index::build_index;
use crate::types::{Character, SearchIndex};
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct IndexCache {
    slot: RwLock<Option<(u64, Arc<SearchIndex>)>>,
}

impl IndexCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The index for `version`, building it from `characters` on a miss.
    pub fn get_or_build(&self, version: u64, characters: &[Character]) -> Arc<SearchIndex> {
        if let Some((cached, index)) = self.slot.read().as_ref() {
            if *cached == version {
                return Arc::clone(index);
            }
        }

        let mut slot = self.slot.write();
        // Another thread may have built it while we waited for the lock.
        if let Some((cached, index)) = slot.as_ref() {
            if *cached == version {
                return Arc::clone(index);
            }
        }

        tracing::debug!(version, characters = characters.len(), "rebuilding cached index");
        let index = Arc::new(build_index(characters));
        *slot = Some((version, Arc::clone(&index)));
        index
    }

    /// Version of the cached index, if any.
    pub fn version(&self) -> Option<u64> {
        self.slot.read().as_ref().map(|(version, _)| *version)
    }

    pub fn invalidate(&self) {
        *self.slot.write() = None;
    }
}
