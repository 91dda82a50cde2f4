//! Exact validation of a typed language name.

use crate::index::AcceptIndex;
use crate::lang::Lang;
use crate::normalize::normalize;

/// Resolve `text` to a canonical language via one exact-map lookup.
///
/// `None` is a valid negative result, not a failure. There is deliberately
/// no fuzzy fallback here: silently accepting a near-miss would let stored
/// values drift, so near-misses only surface through the suggestion engine.
pub fn validate_language(text: &str, index: &AcceptIndex) -> Option<Lang> {
    let key = normalize(text);
    if key.is_empty() {
        return None;
    }
    index.lookup(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::AcceptIndex;
    use crate::lang::data::{FAS, FRA, ZHO};
    use crate::lang::names::EmbeddedNames;

    #[test]
    fn case_and_diacritic_invariant() {
        let index = AcceptIndex::build(&EmbeddedNames);
        for input in ["French", "french", "FRENCH", "français", "  français "] {
            assert_eq!(validate_language(input, &index), Some(FRA), "{input:?}");
        }
    }

    #[test]
    fn native_script_names_validate() {
        let index = AcceptIndex::build(&EmbeddedNames);
        assert_eq!(validate_language("普通话", &index), Some(ZHO));
        assert_eq!(validate_language("فارسی", &index), Some(FAS));
    }

    #[test]
    fn near_misses_do_not_validate() {
        let index = AcceptIndex::build(&EmbeddedNames);
        assert_eq!(validate_language("Frensh", &index), None);
        assert_eq!(validate_language("Klingon", &index), None);
        assert_eq!(validate_language("", &index), None);
        assert_eq!(validate_language("   ", &index), None);
    }
}
