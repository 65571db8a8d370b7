// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cyrillic ⇄ Latin transliteration.
//!
//! Both directions are lossy heuristics: "щ" → "sch" → "щ" survives a round
//! trip, "ы" → "y" → "ы" does too, but "й" → "y" comes back as "ы". That is
//! fine for search, where the goal is only to land near the intended word.
//!
//! Latin → Cyrillic scans left to right and always tries the longest known
//! sequence first, so "shch" wins over "sh" + "ch" and "sch" over "s" + "ch".

use std::collections::HashMap;

/// Transliteration tables, injected through [`crate::Vocabulary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslitTable {
    ru_to_en: HashMap<char, String>,
    en_to_ru: HashMap<String, String>,
    /// Longest Latin key, in chars.
    max_latin_len: usize,
}

impl TranslitTable {
    /// Build a table from explicit mappings.
    ///
    /// `en_to_ru` may mix single letters and multi-letter sequences; keys are
    /// lower-cased.
    pub fn new<R, E>(ru_to_en: R, en_to_ru: E) -> Self
    where
        R: IntoIterator<Item = (char, String)>,
        E: IntoIterator<Item = (String, String)>,
    {
        let ru_to_en: HashMap<char, String> = ru_to_en.into_iter().collect();
        let en_to_ru: HashMap<String, String> = en_to_ru
            .into_iter()
            .filter(|(k, _)| !k.is_empty())
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();
        let max_latin_len = en_to_ru.keys().map(|k| k.chars().count()).max().unwrap_or(0);

        Self {
            ru_to_en,
            en_to_ru,
            max_latin_len,
        }
    }
}

const RU_TO_EN: &[(char, &str)] = &[
    ('а', "a"),
    ('б', "b"),
    ('в', "v"),
    ('г', "g"),
    ('д', "d"),
    ('е', "e"),
    ('ё', "yo"),
    ('ж', "zh"),
    ('з', "z"),
    ('и', "i"),
    ('й', "y"),
    ('к', "k"),
    ('л', "l"),
    ('м', "m"),
    ('н', "n"),
    ('о', "o"),
    ('п', "p"),
    ('р', "r"),
    ('с', "s"),
    ('т', "t"),
    ('у', "u"),
    ('ф', "f"),
    ('х', "kh"),
    ('ц', "ts"),
    ('ч', "ch"),
    ('ш', "sh"),
    ('щ', "sch"),
    ('ъ', ""),
    ('ы', "y"),
    ('ь', ""),
    ('э', "e"),
    ('ю', "yu"),
    ('я', "ya"),
    // Ukrainian letters that show up in character names
    ('і', "i"),
    ('ї', "yi"),
    ('є', "ye"),
    ('ґ', "g"),
];

const EN_TO_RU: &[(&str, &str)] = &[
    ("shch", "щ"),
    ("sch", "щ"),
    ("zh", "ж"),
    ("ch", "ч"),
    ("sh", "ш"),
    ("kh", "х"),
    ("ts", "ц"),
    ("yu", "ю"),
    ("ju", "ю"),
    ("ya", "я"),
    ("ja", "я"),
    ("yo", "ё"),
    ("jo", "ё"),
    ("a", "а"),
    ("b", "б"),
    ("c", "к"),
    ("d", "д"),
    ("e", "е"),
    ("f", "ф"),
    ("g", "г"),
    ("h", "х"),
    ("i", "и"),
    ("j", "й"),
    ("k", "к"),
    ("l", "л"),
    ("m", "м"),
    ("n", "н"),
    ("o", "о"),
    ("p", "п"),
    ("q", "к"),
    ("r", "р"),
    ("s", "с"),
    ("t", "т"),
    ("u", "у"),
    ("v", "в"),
    ("w", "в"),
    ("x", "кс"),
    ("y", "ы"),
    ("z", "з"),
];

impl Default for TranslitTable {
    fn default() -> Self {
        Self::new(
            RU_TO_EN.iter().map(|(c, s)| (*c, s.to_string())),
            EN_TO_RU.iter().map(|(k, v)| (k.to_string(), v.to_string())),
        )
    }
}

/// Cyrillic → Latin, one character at a time. Unmapped characters pass through.
pub fn translit_ru_to_en(value: &str, table: &TranslitTable) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.to_lowercase().chars() {
        match table.ru_to_en.get(&c) {
            Some(mapped) => out.push_str(mapped),
            None => out.push(c),
        }
    }
    out
}

/// Latin → Cyrillic with longest-match-first sequence replacement.
/// Unmapped characters pass through.
pub fn translit_en_to_ru(value: &str, table: &TranslitTable) -> String {
    let chars: Vec<char> = value.to_lowercase().chars().collect();
    let mut out = String::with_capacity(value.len() * 2);
    let mut key = String::with_capacity(table.max_latin_len * 4);
    let mut i = 0;

    'scan: while i < chars.len() {
        let longest = table.max_latin_len.min(chars.len() - i);
        for len in (1..=longest).rev() {
            key.clear();
            key.extend(&chars[i..i + len]);
            if let Some(mapped) = table.en_to_ru.get(&key) {
                out.push_str(mapped);
                i += len;
                continue 'scan;
            }
        }
        out.push(chars[i]);
        i += 1;
    }

    out
}
