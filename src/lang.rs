pub mod data;
pub mod names;

/// One canonical language in the closed registry.
///
/// `code` is the stable short identifier persisted by callers, `iso639_3` the
/// ISO family tag it belongs to, and `name` the authoritative English name.
/// Entries are immutable `'static` data, loaded once and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lang {
    pub code: &'static str,
    pub iso639_3: &'static str,
    pub name: &'static str,
}

impl Lang {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }
    #[inline(always)]
    pub const fn iso639_3(&self) -> &'static str {
        self.iso639_3
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Manual synonyms for this language: accepted names that no locale
    /// display-name table yields (native-script autonyms, historical names).
    #[inline]
    pub fn synonyms(&self) -> &'static [&'static str] {
        data::SYNONYM_TABLE.get(self.code).copied().unwrap_or(&[])
    }

    pub fn from_code(code: &str) -> Option<Lang> {
        data::from_code(code)
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}
