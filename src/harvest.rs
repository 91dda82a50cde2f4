//! Multi-locale name harvesting.
//!
//! For one canonical language, gather every display name the index should
//! accept: the canonical English name, the display name in each configured
//! source locale, and the manual synonyms. A locale with no data for a code
//! is silently skipped. Duplicates (exact string equality) are dropped,
//! keeping the first occurrence so harvest order stays deterministic.

use crate::lang::Lang;
use crate::lang::names::{LocaleNameProvider, SOURCE_LOCALES};
use smallvec::SmallVec;

/// Where a harvested name came from. Carried into the suggestion corpus so
/// callers can prioritize display names from the locales they render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameOrigin {
    /// The registry's authoritative English name.
    Canonical,
    /// A display name from one source locale.
    Locale(&'static str),
    /// A manual synonym (autonym, historical or regional name).
    Synonym,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarvestedName<'p> {
    pub text: &'p str,
    pub origin: NameOrigin,
}

/// Collect all accepted display names for `lang`, in harvest order:
/// canonical name first, then per-locale names in `SOURCE_LOCALES` order,
/// then synonyms.
pub fn harvest<'p, P>(lang: &Lang, provider: &'p P) -> SmallVec<[HarvestedName<'p>; 16]>
where
    P: LocaleNameProvider + ?Sized,
{
    let mut names: SmallVec<[HarvestedName<'p>; 16]> = SmallVec::new();
    let push = |names: &mut SmallVec<[HarvestedName<'p>; 16]>, name: HarvestedName<'p>| {
        if !names.iter().any(|n| n.text == name.text) {
            names.push(name);
        }
    };

    push(
        &mut names,
        HarvestedName {
            text: lang.name,
            origin: NameOrigin::Canonical,
        },
    );
    for &locale in SOURCE_LOCALES {
        if let Some(text) = provider.get(locale, lang.code) {
            push(
                &mut names,
                HarvestedName {
                    text,
                    origin: NameOrigin::Locale(locale),
                },
            );
        }
    }
    for &syn in lang.synonyms() {
        push(
            &mut names,
            HarvestedName {
                text: syn,
                origin: NameOrigin::Synonym,
            },
        );
    }

    names
}
