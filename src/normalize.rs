//! Comparison-key normalization.
//!
//! `normalize` maps any user-typed string to the key used for exact lookup
//! and fuzzy ranking. It is deterministic, total and idempotent:
//! `normalize(normalize(s)) == normalize(s)` for every `s`.
//!
//! Pipeline:
//! 1. NFKD compatibility decomposition (ligatures, circled digits → base).
//! 2. Locale-independent lowercasing.
//! 3. Drop combining diacritical marks sitting on a Latin base letter.
//! 4. Drop punctuation/symbols except apostrophes and hyphens (both are
//!    load-bearing in names like "Serbo-Croatian" and "l'anglais"); curly
//!    apostrophes and typographic hyphens fold to their ASCII forms.
//! 5. Collapse whitespace runs to one space, trim the ends.
//!
//! Non-Latin scripts only see steps 1–2: their letters, digits and combining
//! marks (Cyrillic breve, Greek tonos, Devanagari matras, …) pass through
//! untouched.

use icu_normalizer::{DecomposingNormalizer, DecomposingNormalizerBorrowed};
use memchr::memmem;
use std::borrow::Cow;
use std::sync::LazyLock;

static NFKD: LazyLock<DecomposingNormalizerBorrowed<'static>> =
    LazyLock::new(DecomposingNormalizer::new_nfkd);

/// Combining marks in the ranges produced by decomposing accented Latin
/// letters. Only dropped when they follow a Latin base; on any other base
/// they belong to the script and are kept.
#[inline(always)]
fn is_combining_mark(c: char) -> bool {
    matches!(
        c,
        '\u{0300}'..='\u{036F}'
            | '\u{1AB0}'..='\u{1AFF}'
            | '\u{1DC0}'..='\u{1DFF}'
            | '\u{FE20}'..='\u{FE2F}'
    )
}

#[inline(always)]
fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '\u{2018}' | '\u{2019}' | '\u{02BC}')
}

#[inline(always)]
fn is_hyphen(c: char) -> bool {
    matches!(c, '-' | '\u{2010}'..='\u{2015}')
}

/// Punctuation and symbols that never survive into a key. Conservative by
/// construction: anything not listed here and not alphanumeric is kept, so
/// unrecognized scripts are never corrupted.
#[inline(always)]
fn is_stripped_punct(c: char) -> bool {
    (c.is_ascii() && !c.is_ascii_alphanumeric() && !c.is_ascii_whitespace())
        || matches!(c, '\u{00A1}'..='\u{00BF}' | '\u{2000}'..='\u{206F}')
}

/// True when `text` is already in key form, so `normalize` can borrow.
#[inline]
fn is_normalized_ascii(text: &str) -> bool {
    let b = text.as_bytes();
    if b.first().is_some_and(|c| *c == b' ') || b.last().is_some_and(|c| *c == b' ') {
        return false;
    }
    if memmem::find(b, b"  ").is_some() {
        return false;
    }
    b.iter()
        .all(|c| matches!(c, b'a'..=b'z' | b'0'..=b'9' | b' ' | b'\'' | b'-'))
}

/// Normalize arbitrary user input into a comparison key.
///
/// Total and panic-free for any input, including the empty string. Returns
/// `Cow::Borrowed` when the input is already a valid key.
pub fn normalize(text: &str) -> Cow<'_, str> {
    if is_normalized_ascii(text) {
        return Cow::Borrowed(text);
    }

    let decomposed = NFKD.normalize(text);
    let mut out = String::with_capacity(decomposed.len());
    let mut pending_space = false;
    // Whether the last kept character is a Latin base (post-lowercase these
    // are ASCII); decides the fate of a following combining mark.
    let mut prev_latin = false;

    for c in decomposed.chars().flat_map(char::to_lowercase) {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
            prev_latin = false;
            continue;
        }
        let keep = if is_combining_mark(c) {
            if prev_latin {
                continue; // accent on a Latin letter: fold away
            }
            c
        } else if is_apostrophe(c) {
            '\''
        } else if is_hyphen(c) {
            '-'
        } else if c.is_alphanumeric() {
            c
        } else if is_stripped_punct(c) {
            continue;
        } else {
            // Unclassified sign of another script: preserve intact.
            c
        };
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        if !is_combining_mark(keep) {
            prev_latin = keep.is_ascii_alphanumeric();
        }
        out.push(keep);
    }

    if out.is_ascii() {
        return Cow::Owned(out);
    }
    // Removing a base character can join two combining-mark runs out of
    // canonical order; re-normalizing keeps the function idempotent.
    Cow::Owned(NFKD.normalize(&out).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_copy_when_already_a_key() {
        let input = "serbo-croatian";
        let result = normalize(input);
        assert!(matches!(result, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn lowercases_and_strips_accents() {
        assert_eq!(normalize("Français"), "francais");
        assert_eq!(normalize("FRANÇAIS"), "francais");
        assert_eq!(normalize("Türkçe"), "turkce");
    }

    #[test]
    fn composed_and_decomposed_agree() {
        assert_eq!(normalize("fran\u{00E7}ais"), normalize("franc\u{0327}ais"));
        assert_eq!(normalize("café"), normalize("cafe\u{0301}"));
        assert_eq!(normalize("русский"), normalize("русскии\u{0306}"));
    }

    #[test]
    fn folds_compatibility_characters() {
        assert_eq!(normalize("ﬁnnish"), "finnish"); // fi ligature
        assert_eq!(normalize("Ｅｎｇｌｉｓｈ"), "english"); // fullwidth
    }

    #[test]
    fn keeps_apostrophes_and_hyphens_only() {
        assert_eq!(normalize("l'anglais"), "l'anglais");
        assert_eq!(normalize("l\u{2019}anglais"), "l'anglais");
        assert_eq!(normalize("Serbo–Croatian!"), "serbo-croatian");
        assert_eq!(normalize("english?!."), "english");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize("  Mandarin   Chinese \t"), "mandarin chinese");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn preserves_non_latin_scripts() {
        assert_eq!(normalize("普通话"), "普通话");
        assert_eq!(normalize("हिन्दी"), "हिन्दी");
        assert_eq!(normalize("العربية"), "العربية");
        assert_eq!(normalize("ไทย"), "ไทย");
        // Greek keeps its tonos (decomposed form), only case changes.
        assert_eq!(normalize("Ελληνικά"), "ελληνικα\u{0301}");
        // Cyrillic short i keeps its breve.
        assert_eq!(normalize("Русский"), "русскии\u{0306}");
    }

    #[test]
    fn reorders_merged_mark_runs() {
        // Stripping the period joins two combining-mark runs; the result
        // must come back in canonical order (ccc 220 before ccc 230) and
        // stay fixed under a second pass.
        let once = normalize("ы\u{0301}.\u{0323}").into_owned();
        assert_eq!(once, "ы\u{0323}\u{0301}");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn idempotent_on_mixed_input() {
        for s in [
            "  Tiếng Việt ",
            "ｱｲｳ",
            "Œuvre",
            "Кыргызча!!",
            "l’Anglais",
            "한국어",
            "Ελληνικά",
        ] {
            let once = normalize(s).into_owned();
            let twice = normalize(&once).into_owned();
            assert_eq!(once, twice, "not idempotent for {s:?}");
        }
    }
}
