// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Synonym groups with bidirectional lookup.
//!
//! Configuration is written as `term → [alternates]`, but lookups are
//! symmetric: each entry becomes a group `{term} ∪ alternates`, and any member
//! of a group finds every other member. A word may sit in several groups
//! ("врач" is both a "хирург" alternate and a "доктор" alternate); its
//! synonyms are the union of all of them, in group order.

use crate::error::VocabError;
use crate::util::normalize::normalize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymTable {
    groups: Vec<Vec<String>>,
    /// Normalized member → indices into `groups`.
    members: HashMap<String, Vec<usize>>,
}

impl SynonymTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(term, alternates)` entries.
    pub fn from_entries<I, T, A>(entries: I) -> Result<Self, VocabError>
    where
        I: IntoIterator<Item = (T, A)>,
        T: AsRef<str>,
        A: IntoIterator,
        A::Item: AsRef<str>,
    {
        let mut table = Self::new();
        for (term, alternates) in entries {
            table.add(term.as_ref(), alternates)?;
        }
        Ok(table)
    }

    /// Add one entry. Members are normalized; empty alternates are skipped,
    /// but an empty term is a configuration error.
    pub fn add<A>(&mut self, term: &str, alternates: A) -> Result<(), VocabError>
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
    {
        let canonical = normalize(term);
        if canonical.is_empty() {
            return Err(VocabError::EmptyTerm(term.to_string()));
        }

        let mut group = vec![canonical];
        for alternate in alternates {
            let alternate = normalize(alternate.as_ref());
            if !alternate.is_empty() && !group.contains(&alternate) {
                group.push(alternate);
            }
        }

        let group_idx = self.groups.len();
        for member in &group {
            self.members.entry(member.clone()).or_default().push(group_idx);
        }
        self.groups.push(group);
        Ok(())
    }

    /// Every synonym of an already-normalized word, excluding the word itself.
    pub fn synonyms_of<'a>(&'a self, word: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.members
            .get(word)
            .into_iter()
            .flatten()
            .flat_map(move |&idx| self.groups[idx].iter())
            .map(String::as_str)
            .filter(move |member| *member != word)
    }

    /// Number of groups (configured entries).
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
