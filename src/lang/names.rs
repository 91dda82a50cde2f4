//! Per-locale display-name tables and the provider capability in front of
//! them.
//!
//! A missing (locale, code) pair is "no data for this locale", never an
//! error: the tables below are deliberately partial and the harvester skips
//! absent pairs silently. `pt` and `it` carry only a reduced set on purpose.

use phf::{Map, phf_map};

/// Capability for looking up the display name of a language in one locale.
///
/// Returns an explicit absence instead of raising: implementations must
/// never panic on unknown locales or codes.
pub trait LocaleNameProvider {
    fn get(&self, locale: &str, code: &str) -> Option<&str>;
}

/// The fixed source-locale set harvested when building the accept index.
pub static SOURCE_LOCALES: &[&str] = &["en", "fr", "nl", "de", "es", "pt", "it"];

/// Bundled provider backed by the static tables in this module.
pub struct EmbeddedNames;

impl LocaleNameProvider for EmbeddedNames {
    fn get(&self, locale: &str, code: &str) -> Option<&str> {
        let table = match locale {
            "en" => &EN,
            "fr" => &FR,
            "nl" => &NL,
            "de" => &DE,
            "es" => &ES,
            "pt" => &PT,
            "it" => &IT,
            _ => return None,
        };
        table.get(code).copied()
    }
}

// English variants that differ from the canonical registry names.
static EN: Map<&'static str, &'static str> = phf_map! {
    "zh" => "Mandarin Chinese",
    "el" => "Modern Greek",
    "fil" => "Filipino",
    "pa" => "Punjabi",
    "nl" => "Dutch",
};

static FR: Map<&'static str, &'static str> = phf_map! {
    "en" => "anglais",
    "fr" => "français",
    "es" => "espagnol",
    "de" => "allemand",
    "nl" => "néerlandais",
    "it" => "italien",
    "pt" => "portugais",
    "ru" => "russe",
    "uk" => "ukrainien",
    "pl" => "polonais",
    "cs" => "tchèque",
    "sk" => "slovaque",
    "sl" => "slovène",
    "hr" => "croate",
    "sr" => "serbe",
    "bs" => "bosniaque",
    "bg" => "bulgare",
    "mk" => "macédonien",
    "sq" => "albanais",
    "el" => "grec",
    "ro" => "roumain",
    "hu" => "hongrois",
    "fi" => "finnois",
    "et" => "estonien",
    "lv" => "letton",
    "lt" => "lituanien",
    "sv" => "suédois",
    "da" => "danois",
    "no" => "norvégien",
    "is" => "islandais",
    "ga" => "irlandais",
    "cy" => "gallois",
    "eu" => "basque",
    "ca" => "catalan",
    "gl" => "galicien",
    "tr" => "turc",
    "az" => "azéri",
    "kk" => "kazakh",
    "uz" => "ouzbek",
    "ky" => "kirghize",
    "hy" => "arménien",
    "ka" => "géorgien",
    "ar" => "arabe",
    "he" => "hébreu",
    "fa" => "persan",
    "ur" => "ourdou",
    "hi" => "hindi",
    "bn" => "bengali",
    "pa" => "pendjabi",
    "gu" => "goudjarati",
    "mr" => "marathe",
    "ta" => "tamoul",
    "te" => "télougou",
    "kn" => "kannada",
    "ml" => "malayalam",
    "si" => "cinghalais",
    "ne" => "népalais",
    "th" => "thaï",
    "lo" => "lao",
    "km" => "khmer",
    "my" => "birman",
    "vi" => "vietnamien",
    "id" => "indonésien",
    "ms" => "malais",
    "fil" => "filipino",
    "zh" => "chinois",
    "yue" => "cantonais",
    "ja" => "japonais",
    "ko" => "coréen",
    "mn" => "mongol",
    "sw" => "swahili",
    "am" => "amharique",
    "so" => "somali",
    "ha" => "haoussa",
    "yo" => "yoruba",
    "ig" => "igbo",
    "zu" => "zoulou",
    "xh" => "xhosa",
    "af" => "afrikaans",
    "be" => "biélorusse",
    "lb" => "luxembourgeois",
};

static NL: Map<&'static str, &'static str> = phf_map! {
    "en" => "Engels",
    "fr" => "Frans",
    "es" => "Spaans",
    "de" => "Duits",
    "nl" => "Nederlands",
    "it" => "Italiaans",
    "pt" => "Portugees",
    "ru" => "Russisch",
    "uk" => "Oekraïens",
    "pl" => "Pools",
    "cs" => "Tsjechisch",
    "sk" => "Slowaaks",
    "sl" => "Sloveens",
    "hr" => "Kroatisch",
    "sr" => "Servisch",
    "bs" => "Bosnisch",
    "bg" => "Bulgaars",
    "mk" => "Macedonisch",
    "sq" => "Albanees",
    "el" => "Grieks",
    "ro" => "Roemeens",
    "hu" => "Hongaars",
    "fi" => "Fins",
    "et" => "Estisch",
    "lv" => "Lets",
    "lt" => "Litouws",
    "sv" => "Zweeds",
    "da" => "Deens",
    "no" => "Noors",
    "is" => "IJslands",
    "ga" => "Iers",
    "cy" => "Welsh",
    "eu" => "Baskisch",
    "ca" => "Catalaans",
    "gl" => "Galicisch",
    "tr" => "Turks",
    "az" => "Azerbeidzjaans",
    "kk" => "Kazachs",
    "uz" => "Oezbeeks",
    "ky" => "Kirgizisch",
    "hy" => "Armeens",
    "ka" => "Georgisch",
    "ar" => "Arabisch",
    "he" => "Hebreeuws",
    "fa" => "Perzisch",
    "ur" => "Urdu",
    "hi" => "Hindi",
    "bn" => "Bengaals",
    "pa" => "Punjabi",
    "gu" => "Gujarati",
    "mr" => "Marathi",
    "ta" => "Tamil",
    "te" => "Telugu",
    "kn" => "Kannada",
    "ml" => "Malayalam",
    "si" => "Singalees",
    "ne" => "Nepalees",
    "th" => "Thai",
    "lo" => "Laotiaans",
    "km" => "Khmer",
    "my" => "Birmaans",
    "vi" => "Vietnamees",
    "id" => "Indonesisch",
    "ms" => "Maleis",
    "fil" => "Filipijns",
    "zh" => "Chinees",
    "yue" => "Kantonees",
    "ja" => "Japans",
    "ko" => "Koreaans",
    "mn" => "Mongools",
    "sw" => "Swahili",
    "am" => "Amhaars",
    "so" => "Somalisch",
    "ha" => "Hausa",
    "yo" => "Yoruba",
    "ig" => "Igbo",
    "zu" => "Zoeloe",
    "xh" => "Xhosa",
    "af" => "Afrikaans",
    "be" => "Wit-Russisch",
    "lb" => "Luxemburgs",
};

static DE: Map<&'static str, &'static str> = phf_map! {
    "en" => "Englisch",
    "fr" => "Französisch",
    "es" => "Spanisch",
    "de" => "Deutsch",
    "nl" => "Niederländisch",
    "it" => "Italienisch",
    "pt" => "Portugiesisch",
    "ru" => "Russisch",
    "uk" => "Ukrainisch",
    "pl" => "Polnisch",
    "cs" => "Tschechisch",
    "sk" => "Slowakisch",
    "sl" => "Slowenisch",
    "hr" => "Kroatisch",
    "sr" => "Serbisch",
    "bs" => "Bosnisch",
    "bg" => "Bulgarisch",
    "mk" => "Mazedonisch",
    "sq" => "Albanisch",
    "el" => "Griechisch",
    "ro" => "Rumänisch",
    "hu" => "Ungarisch",
    "fi" => "Finnisch",
    "et" => "Estnisch",
    "lv" => "Lettisch",
    "lt" => "Litauisch",
    "sv" => "Schwedisch",
    "da" => "Dänisch",
    "no" => "Norwegisch",
    "is" => "Isländisch",
    "ga" => "Irisch",
    "cy" => "Walisisch",
    "eu" => "Baskisch",
    "ca" => "Katalanisch",
    "gl" => "Galicisch",
    "tr" => "Türkisch",
    "az" => "Aserbaidschanisch",
    "kk" => "Kasachisch",
    "uz" => "Usbekisch",
    "ky" => "Kirgisisch",
    "hy" => "Armenisch",
    "ka" => "Georgisch",
    "ar" => "Arabisch",
    "he" => "Hebräisch",
    "fa" => "Persisch",
    "ur" => "Urdu",
    "hi" => "Hindi",
    "bn" => "Bengalisch",
    "pa" => "Panjabi",
    "ta" => "Tamil",
    "te" => "Telugu",
    "th" => "Thailändisch",
    "lo" => "Laotisch",
    "km" => "Khmer",
    "my" => "Birmanisch",
    "vi" => "Vietnamesisch",
    "id" => "Indonesisch",
    "ms" => "Malaiisch",
    "zh" => "Chinesisch",
    "yue" => "Kantonesisch",
    "ja" => "Japanisch",
    "ko" => "Koreanisch",
    "mn" => "Mongolisch",
    "sw" => "Suaheli",
    "am" => "Amharisch",
    "so" => "Somali",
    "zu" => "Zulu",
    "xh" => "Xhosa",
    "af" => "Afrikaans",
    "be" => "Belarussisch",
    "lb" => "Luxemburgisch",
};

static ES: Map<&'static str, &'static str> = phf_map! {
    "en" => "inglés",
    "fr" => "francés",
    "es" => "español",
    "de" => "alemán",
    "nl" => "neerlandés",
    "it" => "italiano",
    "pt" => "portugués",
    "ru" => "ruso",
    "uk" => "ucraniano",
    "pl" => "polaco",
    "cs" => "checo",
    "sk" => "eslovaco",
    "sl" => "esloveno",
    "hr" => "croata",
    "sr" => "serbio",
    "bs" => "bosnio",
    "bg" => "búlgaro",
    "mk" => "macedonio",
    "sq" => "albanés",
    "el" => "griego",
    "ro" => "rumano",
    "hu" => "húngaro",
    "fi" => "finés",
    "et" => "estonio",
    "lv" => "letón",
    "lt" => "lituano",
    "sv" => "sueco",
    "da" => "danés",
    "no" => "noruego",
    "is" => "islandés",
    "ga" => "irlandés",
    "cy" => "galés",
    "eu" => "euskera",
    "ca" => "catalán",
    "gl" => "gallego",
    "tr" => "turco",
    "az" => "azerbaiyano",
    "kk" => "kazajo",
    "uz" => "uzbeko",
    "ky" => "kirguís",
    "hy" => "armenio",
    "ka" => "georgiano",
    "ar" => "árabe",
    "he" => "hebreo",
    "fa" => "persa",
    "ur" => "urdu",
    "hi" => "hindi",
    "bn" => "bengalí",
    "pa" => "panyabí",
    "ta" => "tamil",
    "te" => "telugu",
    "si" => "cingalés",
    "ne" => "nepalí",
    "th" => "tailandés",
    "lo" => "lao",
    "km" => "jemer",
    "my" => "birmano",
    "vi" => "vietnamita",
    "id" => "indonesio",
    "ms" => "malayo",
    "fil" => "filipino",
    "zh" => "chino",
    "yue" => "cantonés",
    "ja" => "japonés",
    "ko" => "coreano",
    "mn" => "mongol",
    "sw" => "suajili",
    "am" => "amárico",
    "so" => "somalí",
    "zu" => "zulú",
    "af" => "afrikáans",
    "be" => "bielorruso",
    "lb" => "luxemburgués",
};

static PT: Map<&'static str, &'static str> = phf_map! {
    "en" => "inglês",
    "fr" => "francês",
    "es" => "espanhol",
    "de" => "alemão",
    "nl" => "neerlandês",
    "it" => "italiano",
    "pt" => "português",
    "ru" => "russo",
    "uk" => "ucraniano",
    "pl" => "polonês",
    "cs" => "tcheco",
    "el" => "grego",
    "ro" => "romeno",
    "hu" => "húngaro",
    "tr" => "turco",
    "ar" => "árabe",
    "he" => "hebraico",
    "fa" => "persa",
    "hi" => "híndi",
    "zh" => "chinês",
    "ja" => "japonês",
    "ko" => "coreano",
    "vi" => "vietnamita",
    "th" => "tailandês",
    "id" => "indonésio",
    "sv" => "sueco",
    "da" => "dinamarquês",
    "no" => "norueguês",
    "fi" => "finlandês",
    "ca" => "catalão",
};

static IT: Map<&'static str, &'static str> = phf_map! {
    "en" => "inglese",
    "fr" => "francese",
    "es" => "spagnolo",
    "de" => "tedesco",
    "nl" => "olandese",
    "it" => "italiano",
    "pt" => "portoghese",
    "ru" => "russo",
    "uk" => "ucraino",
    "pl" => "polacco",
    "cs" => "ceco",
    "el" => "greco",
    "ro" => "rumeno",
    "hu" => "ungherese",
    "tr" => "turco",
    "ar" => "arabo",
    "he" => "ebraico",
    "fa" => "persiano",
    "hi" => "hindi",
    "zh" => "cinese",
    "ja" => "giapponese",
    "ko" => "coreano",
    "vi" => "vietnamita",
    "th" => "thailandese",
    "id" => "indonesiano",
    "sv" => "svedese",
    "da" => "danese",
    "no" => "norvegese",
    "fi" => "finlandese",
    "ca" => "catalano",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::data::REGISTRY;

    #[test]
    fn embedded_names_hits_and_misses() {
        let p = EmbeddedNames;
        assert_eq!(p.get("fr", "fr"), Some("français"));
        assert_eq!(p.get("nl", "fr"), Some("Frans"));
        assert_eq!(p.get("it", "zu"), None); // partial table, not an error
        assert_eq!(p.get("xx", "fr"), None); // unknown locale
        assert_eq!(p.get("fr", "tlh"), None); // unknown code
    }

    #[test]
    fn tables_only_reference_registry_codes() {
        let p = EmbeddedNames;
        for locale in SOURCE_LOCALES {
            for lang in REGISTRY {
                // Just exercising every pair: absent is fine, panic is not.
                let _ = p.get(locale, lang.code);
            }
        }
        for table in [&EN, &FR, &NL, &DE, &ES, &PT, &IT] {
            for code in table.keys() {
                assert!(
                    REGISTRY.iter().any(|l| l.code == *code),
                    "table references unknown code `{code}`"
                );
            }
        }
    }
}
