//! The accept index: exact map, suggestion corpus and prefix index, built
//! once from the registry plus every harvested name variant.
//!
//! Build never fails. A locale with no name for a code is skipped by the
//! harvester; a name normalizing to the empty key is skipped here. The only
//! diagnosable defect — a registry language owning no exact-map entry — is a
//! data-configuration bug surfaced by [`AcceptIndex::verify`], not a runtime
//! error.

use crate::harvest::{NameOrigin, harvest};
use crate::lang::Lang;
use crate::lang::data::REGISTRY;
use crate::lang::names::{EmbeddedNames, LocaleNameProvider};
use crate::normalize::normalize;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, RwLock};
use thiserror::Error;

/// Longest normalized prefix registered in the prefix index, in chars.
pub const PREFIX_CAP: usize = 10;

/// One autocomplete candidate: the display text as a human typed or reads
/// it, its normalized key, the owning canonical language and the origin of
/// the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub display: String,
    pub key: String,
    pub lang: Lang,
    pub origin: NameOrigin,
}

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("language `{0}` owns no entry in the exact map")]
    UnreachableLanguage(&'static str),
    #[error("accept index has an empty suggestion corpus")]
    EmptyCorpus,
}

/// Read-only lookup structures derived from the registry, the synonym table
/// and the harvested locale names. Safe to share across threads once built.
#[derive(Debug)]
pub struct AcceptIndex {
    /// normalized key → owning language; first registered language wins on
    /// collision, which is why `REGISTRY` order is contractual.
    exact: HashMap<String, Lang>,
    /// Every harvested name, in build order.
    corpus: Vec<Suggestion>,
    /// normalized prefix (1..=PREFIX_CAP chars) → corpus indices.
    prefix: HashMap<String, Vec<usize>>,
}

impl AcceptIndex {
    /// Build the index from the full registry. Infallible: configuration
    /// gaps are recovered by skipping, never by erroring.
    pub fn build<P: LocaleNameProvider + ?Sized>(provider: &P) -> Self {
        let mut exact: HashMap<String, Lang> = HashMap::new();
        let mut corpus: Vec<Suggestion> = Vec::new();
        let mut prefix: HashMap<String, Vec<usize>> = HashMap::new();

        for lang in REGISTRY {
            for name in harvest(lang, provider) {
                let key = normalize(name.text).into_owned();
                if key.is_empty() {
                    continue;
                }

                if !exact.contains_key(&key) {
                    exact.insert(key.clone(), *lang);
                }

                // A colliding name still suggests the language it does not
                // "own", so the corpus gets it unconditionally.
                let idx = corpus.len();
                corpus.push(Suggestion {
                    display: name.text.to_string(),
                    key: key.clone(),
                    lang: *lang,
                    origin: name.origin,
                });

                let mut end = 0;
                for (count, c) in key.chars().enumerate() {
                    if count == PREFIX_CAP {
                        break;
                    }
                    end += c.len_utf8();
                    let bucket = prefix.entry(key[..end].to_string()).or_default();
                    let dup = bucket.iter().any(|&i| {
                        corpus[i].display == corpus[idx].display
                            && corpus[i].lang.code == lang.code
                    });
                    if !dup {
                        bucket.push(idx);
                    }
                }
            }
        }

        Self {
            exact,
            corpus,
            prefix,
        }
    }

    /// Exact-map lookup for an already-normalized key.
    #[inline]
    pub fn lookup(&self, key: &str) -> Option<Lang> {
        self.exact.get(key).copied()
    }

    /// The full suggestion corpus, in build order.
    #[inline]
    pub fn corpus(&self) -> &[Suggestion] {
        &self.corpus
    }

    /// Corpus indices registered under `key` as a prefix, in build order.
    /// Keys longer than [`PREFIX_CAP`] chars have no bucket.
    #[inline]
    pub fn prefix_bucket(&self, key: &str) -> &[usize] {
        self.prefix.get(key).map_or(&[], Vec::as_slice)
    }

    /// Invariant check: every registry language must own at least one
    /// exact-map entry. Meant for tests and startup assertions.
    pub fn verify(&self) -> Result<(), IndexError> {
        if self.corpus.is_empty() {
            return Err(IndexError::EmptyCorpus);
        }
        for lang in REGISTRY {
            if !self.exact.values().any(|owner| owner.code == lang.code) {
                return Err(IndexError::UnreachableLanguage(lang.code));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Process-wide memoized index
// ---------------------------------------------------------------------------

static MEMO: LazyLock<RwLock<Option<Arc<AcceptIndex>>>> = LazyLock::new(|| RwLock::new(None));

/// The process-wide accept index, built on first access from the embedded
/// name tables and memoized. Cheap to call afterwards.
pub fn accept_index() -> Arc<AcceptIndex> {
    if let Some(index) = MEMO
        .read()
        .expect("accept index lock poisoned")
        .as_ref()
    {
        return Arc::clone(index);
    }
    let mut memo = MEMO.write().expect("accept index lock poisoned");
    // Lost the race to another builder: reuse its result.
    if let Some(index) = memo.as_ref() {
        return Arc::clone(index);
    }
    let index = Arc::new(AcceptIndex::build(&EmbeddedNames));
    *memo = Some(Arc::clone(&index));
    index
}

/// Discard the memoized index so the next [`accept_index`] call rebuilds.
/// Test isolation only; rebuilding from identical inputs is behaviorally
/// identical, so racing readers are unaffected.
pub fn reset_accept_index() {
    *MEMO.write().expect("accept index lock poisoned") = None;
}
