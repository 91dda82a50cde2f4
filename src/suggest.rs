//! Ranked autocomplete suggestions.
//!
//! Two phases: a prefix phase over the prefix index, then a bounded fuzzy
//! phase over the rest of the corpus. Prefix matches always outrank fuzzy
//! matches, whatever their distance — a correct partial input must never
//! lose to an unrelated near-miss.

use crate::distance::distance;
use crate::harvest::NameOrigin;
use crate::index::{AcceptIndex, Suggestion};
use crate::normalize::normalize;
use std::collections::HashSet;

/// Fuzzy cutoff: one or two character typos and missed accents, without
/// flooding unrelated matches. A tuning knob, not a law.
pub const FUZZY_MAX_DISTANCE: usize = 2;

/// Ranked suggestions for `text`, truncated to `limit`.
pub fn suggestions(text: &str, index: &AcceptIndex, limit: usize) -> Vec<Suggestion> {
    ranked(text, index, limit, &[])
}

/// Like [`suggestions`], but display names originating from one of
/// `priority_locales` are stably moved to the front of their phase. The
/// prefix-before-fuzzy guarantee still holds.
pub fn suggestions_prioritized(
    text: &str,
    index: &AcceptIndex,
    limit: usize,
    priority_locales: &[&str],
) -> Vec<Suggestion> {
    ranked(text, index, limit, priority_locales)
}

fn ranked(
    text: &str,
    index: &AcceptIndex,
    limit: usize,
    priority_locales: &[&str],
) -> Vec<Suggestion> {
    let key = normalize(text);
    if key.is_empty() || limit == 0 {
        return Vec::new();
    }
    let corpus = index.corpus();

    // Prefix phase: bucket order is build order.
    let mut prefix_hits: Vec<usize> = index.prefix_bucket(&key).to_vec();
    let consumed: HashSet<usize> = prefix_hits.iter().copied().collect();

    // Fuzzy phase over everything the prefix phase did not consume.
    let mut fuzzy_hits: Vec<(usize, usize)> = Vec::new();
    for (i, entry) in corpus.iter().enumerate() {
        if consumed.contains(&i) {
            continue;
        }
        let d = distance(&key, &entry.key);
        if d <= FUZZY_MAX_DISTANCE {
            fuzzy_hits.push((d, i));
        }
    }
    fuzzy_hits.sort_by_key(|&(d, _)| d); // stable: build order breaks ties

    if !priority_locales.is_empty() {
        let boosted = |i: usize| matches_priority(&corpus[i].origin, priority_locales);
        prefix_hits.sort_by_key(|&i| !boosted(i));
        fuzzy_hits.sort_by_key(|&(d, i)| (d, !boosted(i)));
    }

    let ordered = prefix_hits
        .into_iter()
        .chain(fuzzy_hits.into_iter().map(|(_, i)| i));

    // De-duplicate by (owning language, display text), first occurrence wins.
    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    let mut out = Vec::new();
    for i in ordered {
        let entry = &corpus[i];
        if seen.insert((entry.lang.code, entry.display.as_str())) {
            out.push(entry.clone());
            if out.len() == limit {
                break;
            }
        }
    }
    out
}

fn matches_priority(origin: &NameOrigin, priority_locales: &[&str]) -> bool {
    match origin {
        NameOrigin::Locale(tag) => priority_locales.contains(tag),
        NameOrigin::Canonical | NameOrigin::Synonym => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::AcceptIndex;
    use crate::lang::data::{DAN, FRA, LAO};
    use crate::lang::names::EmbeddedNames;

    fn index() -> AcceptIndex {
        AcceptIndex::build(&EmbeddedNames)
    }

    #[test]
    fn blank_input_yields_nothing() {
        let index = index();
        assert!(suggestions("", &index, 10).is_empty());
        assert!(suggestions("   ", &index, 10).is_empty());
        assert!(suggestions("!?.", &index, 10).is_empty());
    }

    #[test]
    fn typo_recovers_through_fuzzy_phase() {
        let index = index();
        let hits = suggestions("frensh", &index, 10);
        assert!(
            hits.iter().any(|s| s.lang == FRA),
            "expected a French suggestion, got {hits:?}"
        );
    }

    #[test]
    fn prefix_outranks_fuzzy_regardless_of_distance() {
        let index = index();
        // "dan" is a prefix of "danish"/"dansk" and within distance 2 of
        // the unrelated key "lao".
        let hits = suggestions("dan", &index, 20);
        let first_danish = hits.iter().position(|s| s.lang == DAN);
        let first_lao = hits.iter().position(|s| s.lang == LAO);
        let (Some(danish), Some(lao)) = (first_danish, first_lao) else {
            panic!("expected both Danish and Lao in {hits:?}");
        };
        assert!(danish < lao);
    }

    #[test]
    fn fuzzy_hits_sorted_by_distance() {
        let index = index();
        let hits = suggestions("frenck", &index, 10);
        let mut last = 0;
        for s in &hits {
            let d = crate::distance::distance("frenck", &s.key);
            assert!(d >= last, "distances out of order in {hits:?}");
            last = d;
        }
    }

    #[test]
    fn deduplicates_by_language_and_display() {
        let index = index();
        let hits = suggestions("fran", &index, 50);
        let mut seen = HashSet::new();
        for s in &hits {
            assert!(
                seen.insert((s.lang.code, s.display.clone())),
                "duplicate suggestion {s:?}"
            );
        }
    }

    #[test]
    fn respects_limit() {
        let index = index();
        assert!(suggestions("a", &index, 3).len() <= 3);
        assert!(suggestions("french", &index, 0).is_empty());
    }

    #[test]
    fn priority_locales_reorder_within_phase_only() {
        let index = index();
        let plain = suggestions("fran", &index, 20);
        let boosted = suggestions_prioritized("fran", &index, 20, &["nl"]);
        // Same candidate set, possibly different order.
        let as_set = |v: &[Suggestion]| -> HashSet<(String, &'static str)> {
            v.iter().map(|s| (s.display.clone(), s.lang.code)).collect()
        };
        assert_eq!(as_set(&plain), as_set(&boosted));
        // Every nl-origin prefix hit precedes every non-boosted prefix hit.
        let nl_pos = boosted
            .iter()
            .position(|s| matches!(s.origin, NameOrigin::Locale("nl")));
        if let Some(nl) = nl_pos {
            assert_eq!(nl, 0, "boosted locale should lead its phase: {boosted:?}");
        }
    }
}
