//! Read-only fact store keyed by language.
//!
//! Collections are built once at startup from the built-in tables and the
//! `[facts]` config table, then only read. The process-wide instance lives in
//! a `OnceLock`; readers on any thread share it without locking.


use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::FactError;
use crate::facts;
use crate::language::LanguageCode;

/// Collections below this size are accepted but logged.
const MIN_EXPECTED_FACTS: usize = 10;

static GLOBAL: OnceLock<FactStore> = OnceLock::new();

/// Ordered, non-empty facts for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactCollection {
    language: LanguageCode,
    facts: Vec<String>,
}

impl FactCollection {
    /// Build a collection, rejecting an empty one.
    pub fn new(language: LanguageCode, facts: Vec<String>) -> Result<Self, FactError> {
        if facts.is_empty() {
            return Err(FactError::Config(format!(
                "fact collection for {language} is empty"
            )));
        }
        if facts.len() < MIN_EXPECTED_FACTS {
            warn!(
                "fact collection for {language} has {} facts (expected at least {MIN_EXPECTED_FACTS})",
                facts.len()
            );
        }
        for (i, fact) in facts.iter().enumerate() {
            if fact.trim().is_empty() {
                return Err(FactError::Config(format!(
                    "fact {i} for {language} is blank"
                )));
            }
            if !facts::has_year(fact) {
                warn!("fact {i} for {language} has no 4-digit year");
            }
        }
        Ok(Self { language, facts })
    }

    pub fn language(&self) -> &LanguageCode {
        &self.language
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Always false for a constructed collection.
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.facts.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.facts.iter().map(String::as_str)
    }
}

/// Fact collections keyed by language code.
#[derive(Debug, Clone, Default)]
pub struct FactStore {
    collections: BTreeMap<LanguageCode, FactCollection>,
}

impl FactStore {
    /// Store holding only the built-in tables.
    pub fn builtin() -> Self {
        let mut store = Self::default();
        for (code, table) in facts::BUILTIN {
            // Built-in codes are authored normalized and non-empty.
            if let Some(language) = LanguageCode::parse(code) {
                let facts = table.iter().map(|f| f.to_string()).collect();
                match FactCollection::new(language, facts) {
                    Ok(collection) => store.insert(collection),
                    Err(e) => warn!("skipping built-in table {code}: {e}"),
                }
            }
        }
        store
    }

    /// Built-in tables, then every `[facts]` collection from config.
    /// A configured language replaces the built-in one.
    pub fn from_config(config: &Config) -> Result<Self, FactError> {
        let mut store = Self::builtin();
        let mut seen = BTreeSet::new();
        for (raw, facts) in &config.facts {
            let language = LanguageCode::parse(raw)
                .ok_or_else(|| FactError::Config(format!("invalid language code: {raw:?}")))?;
            if !seen.insert(language.clone()) {
                return Err(FactError::Config(format!(
                    "duplicate language code {raw:?} (normalizes to {language})"
                )));
            }
            if store.collections.contains_key(&language) {
                info!("configured facts replace built-in collection for {language}");
            }
            store.insert(FactCollection::new(language, facts.clone())?);
        }
        info!(
            "fact store loaded: {} language(s), {} fact(s)",
            store.collections.len(),
            store.collections.values().map(FactCollection::len).sum::<usize>()
        );
        Ok(store)
    }

    /// Register a collection, replacing any existing one for its language.
    pub fn insert(&mut self, collection: FactCollection) {
        self.collections
            .insert(collection.language().clone(), collection);
    }

    /// Registered language codes in sorted order.
    pub fn languages(&self) -> Vec<&LanguageCode> {
        self.collections.keys().collect()
    }

    /// Registered collections in language order.
    pub fn collections(&self) -> impl Iterator<Item = &FactCollection> {
        self.collections.values()
    }

    /// Borrow the collection for `lang`.
    pub fn collection(&self, lang: &str) -> Result<&FactCollection, FactError> {
        LanguageCode::parse(lang)
            .and_then(|code| self.collections.get(&code))
            .ok_or_else(|| FactError::UnknownLanguage(lang.to_string()))
    }

    /// Fact at zero-based `index` for `lang`.
    pub fn fact(&self, lang: &str, index: i64) -> Result<&str, FactError> {
        let collection = self.collection(lang)?;
        let out_of_range = || FactError::OutOfRange {
            language: collection.language().to_string(),
            index,
            len: collection.len(),
        };
        let i = usize::try_from(index).map_err(|_| out_of_range())?;
        let fact = collection.get(i).ok_or_else(out_of_range)?;
        debug!("fact {}[{i}]", collection.language());
        Ok(fact)
    }

    /// Uniformly chosen fact for `lang`.
    pub fn random_fact(&self, lang: &str) -> Result<&str, FactError> {
        self.random_fact_with_rng(lang, &mut rand::thread_rng())
    }

    /// Uniformly chosen fact with a specific RNG (useful for testing).
    pub fn random_fact_with_rng<R: Rng>(
        &self,
        lang: &str,
        rng: &mut R,
    ) -> Result<&str, FactError> {
        let collection = self.collection(lang)?;
        let i = rng.gen_range(0..collection.len());
        debug!("random fact {}[{i}]", collection.language());
        Ok(&collection.facts[i])
    }

    /// Number of facts for `lang`.
    pub fn count(&self, lang: &str) -> Result<usize, FactError> {
        Ok(self.collection(lang)?.len())
    }
}

/// Install the process-wide store. Succeeds once.
pub fn init(store: FactStore) -> Result<(), FactError> {
    GLOBAL
        .set(store)
        .map_err(|_| FactError::Config("fact store already initialized".to_string()))
}

/// The process-wide store, falling back to the built-in tables if `init`
/// was never called.
pub fn global() -> &'static FactStore {
    GLOBAL.get_or_init(FactStore::builtin)
}
