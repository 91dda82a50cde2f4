use crate::lang::Lang;

use paste::paste;
use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – generates everything from a single table
/// ---------------------------------------------------------------------------
macro_rules! define_languages {
    ($(
        $ident:ident, $code:literal, $iso:literal, $name:literal,
        synonyms: [ $($syn:literal),* $(,)? ]
    ),* $(,)?) => {
        // Public `Lang` constants
        $(
            pub const $ident: Lang = Lang { code: $code, iso639_3: $iso, name: $name };
        )*

        /// The closed registry, in declaration order.
        ///
        /// Iteration order decides exact-map collisions (first registered
        /// language wins), so the order of this slice is contractual and must
        /// not be reshuffled.
        pub static REGISTRY: &[Lang] = &[ $($ident),* ];

        // Per-language static synonym modules
        $(
            paste! {
                mod [<$ident:lower _data>] {
                    pub static SYNONYMS: &[&str] = &[ $($syn),* ];
                }
            }
        )*

        // Global synonym lookup table (code -> manual synonyms)
        paste! {
            pub static SYNONYM_TABLE: Map<&'static str, &'static [&'static str]> = phf_map! {
                $(
                    $code => [<$ident:lower _data>]::SYNONYMS
                ),*
            };
        }

        /// Helper: `Lang::from_code`
        pub fn from_code(code: &str) -> Option<Lang> {
            let lower = code.to_ascii_lowercase();
            match lower.as_str() {
                $(
                    $code => Some($ident),
                )*
                _ => None,
            }
        }
    };
}

// ---------------------------------------------------------------------------
//    Language definitions (single source of truth)
//
//    Synonyms hold only names that the locale display-name tables cannot
//    yield: native-script autonyms and historical or regional names
//    ("Farsi", "Flemish"). Locale-derived names live in `lang::names`.
// ---------------------------------------------------------------------------
define_languages! {
    ENG, "en", "eng", "English",
        synonyms: [],
    FRA, "fr", "fra", "French",
        synonyms: [],
    SPA, "es", "spa", "Spanish",
        synonyms: ["Castilian", "castellano"],
    DEU, "de", "deu", "German",
        synonyms: [],
    NLD, "nl", "nld", "Dutch",
        synonyms: ["Flemish", "Vlaams"],
    ITA, "it", "ita", "Italian",
        synonyms: [],
    POR, "pt", "por", "Portuguese",
        synonyms: [],
    RUS, "ru", "rus", "Russian",
        synonyms: ["русский"],
    UKR, "uk", "ukr", "Ukrainian",
        synonyms: ["українська"],
    POL, "pl", "pol", "Polish",
        synonyms: ["polski"],
    CES, "cs", "ces", "Czech",
        synonyms: ["čeština", "Bohemian"],
    SLK, "sk", "slk", "Slovak",
        synonyms: ["slovenčina"],
    SLV, "sl", "slv", "Slovenian",
        synonyms: ["Slovene", "slovenščina"],
    HRV, "hr", "hrv", "Croatian",
        synonyms: ["hrvatski"],
    SRP, "sr", "srp", "Serbian",
        synonyms: ["српски", "srpski"],
    BOS, "bs", "bos", "Bosnian",
        synonyms: ["bosanski"],
    BUL, "bg", "bul", "Bulgarian",
        synonyms: ["български"],
    MKD, "mk", "mkd", "Macedonian",
        synonyms: ["македонски"],
    SQI, "sq", "sqi", "Albanian",
        synonyms: ["shqip"],
    ELL, "el", "ell", "Greek",
        synonyms: ["ελληνικά", "Hellenic"],
    RON, "ro", "ron", "Romanian",
        synonyms: ["română", "Moldovan"],
    HUN, "hu", "hun", "Hungarian",
        synonyms: ["magyar"],
    FIN, "fi", "fin", "Finnish",
        synonyms: ["suomi"],
    EST, "et", "est", "Estonian",
        synonyms: ["eesti"],
    LAV, "lv", "lav", "Latvian",
        synonyms: ["latviešu", "Lettish"],
    LIT, "lt", "lit", "Lithuanian",
        synonyms: ["lietuvių"],
    SWE, "sv", "swe", "Swedish",
        synonyms: ["svenska"],
    DAN, "da", "dan", "Danish",
        synonyms: ["dansk"],
    NOR, "no", "nor", "Norwegian",
        synonyms: ["norsk", "Bokmål", "Nynorsk"],
    ISL, "is", "isl", "Icelandic",
        synonyms: ["íslenska"],
    GLE, "ga", "gle", "Irish",
        synonyms: ["Gaeilge", "Irish Gaelic"],
    CYM, "cy", "cym", "Welsh",
        synonyms: ["Cymraeg"],
    EUS, "eu", "eus", "Basque",
        synonyms: ["euskara"],
    CAT, "ca", "cat", "Catalan",
        synonyms: ["català", "Valencian"],
    GLG, "gl", "glg", "Galician",
        synonyms: ["galego"],
    TUR, "tr", "tur", "Turkish",
        synonyms: ["Türkçe"],
    AZE, "az", "aze", "Azerbaijani",
        synonyms: ["Azeri", "azərbaycan"],
    KAZ, "kk", "kaz", "Kazakh",
        synonyms: ["қазақша"],
    UZB, "uz", "uzb", "Uzbek",
        synonyms: ["oʻzbekcha"],
    KIR, "ky", "kir", "Kyrgyz",
        synonyms: ["Kirghiz", "кыргызча"],
    HYE, "hy", "hye", "Armenian",
        synonyms: ["հայերեն"],
    KAT, "ka", "kat", "Georgian",
        synonyms: ["ქართული"],
    ARA, "ar", "ara", "Arabic",
        synonyms: ["العربية"],
    HEB, "he", "heb", "Hebrew",
        synonyms: ["עברית", "Ivrit"],
    FAS, "fa", "fas", "Persian",
        synonyms: ["Farsi", "فارسی", "Dari"],
    URD, "ur", "urd", "Urdu",
        synonyms: ["اردو"],
    HIN, "hi", "hin", "Hindi",
        synonyms: ["हिन्दी", "Hindustani"],
    BEN, "bn", "ben", "Bengali",
        synonyms: ["Bangla", "বাংলা"],
    PAN, "pa", "pan", "Punjabi",
        synonyms: ["Panjabi", "ਪੰਜਾਬੀ"],
    GUJ, "gu", "guj", "Gujarati",
        synonyms: ["ગુજરાતી"],
    MAR, "mr", "mar", "Marathi",
        synonyms: ["मराठी"],
    TAM, "ta", "tam", "Tamil",
        synonyms: ["தமிழ்"],
    TEL, "te", "tel", "Telugu",
        synonyms: ["తెలుగు"],
    KAN, "kn", "kan", "Kannada",
        synonyms: ["ಕನ್ನಡ"],
    MAL, "ml", "mal", "Malayalam",
        synonyms: ["മലയാളം"],
    SIN, "si", "sin", "Sinhala",
        synonyms: ["Sinhalese", "සිංහල"],
    NEP, "ne", "nep", "Nepali",
        synonyms: ["नेपाली"],
    THA, "th", "tha", "Thai",
        synonyms: ["Siamese", "ไทย"],
    LAO, "lo", "lao", "Lao",
        synonyms: ["Laotian", "ລາວ"],
    KHM, "km", "khm", "Khmer",
        synonyms: ["Cambodian", "ខ្មែរ"],
    MYA, "my", "mya", "Burmese",
        synonyms: ["Myanmar", "မြန်မာ"],
    VIE, "vi", "vie", "Vietnamese",
        synonyms: ["Tiếng Việt"],
    IND, "id", "ind", "Indonesian",
        synonyms: ["Bahasa Indonesia"],
    MSA, "ms", "msa", "Malay",
        synonyms: ["Bahasa Melayu"],
    FIL, "fil", "fil", "Filipino",
        synonyms: ["Tagalog"],
    ZHO, "zh", "zho", "Chinese",
        synonyms: ["Mandarin", "普通话", "中文", "汉语", "國語"],
    YUE, "yue", "yue", "Cantonese",
        synonyms: ["粵語", "广东话"],
    JPN, "ja", "jpn", "Japanese",
        synonyms: ["Nihongo", "日本語"],
    KOR, "ko", "kor", "Korean",
        synonyms: ["한국어", "조선말"],
    MON, "mn", "mon", "Mongolian",
        synonyms: ["монгол"],
    SWA, "sw", "swa", "Swahili",
        synonyms: ["Kiswahili"],
    AMH, "am", "amh", "Amharic",
        synonyms: ["አማርኛ"],
    SOM, "so", "som", "Somali",
        synonyms: ["Soomaali"],
    HAU, "ha", "hau", "Hausa",
        synonyms: [],
    YOR, "yo", "yor", "Yoruba",
        synonyms: ["Yorùbá"],
    IBO, "ig", "ibo", "Igbo",
        synonyms: [],
    ZUL, "zu", "zul", "Zulu",
        synonyms: ["isiZulu"],
    XHO, "xh", "xho", "Xhosa",
        synonyms: ["isiXhosa"],
    AFR, "af", "afr", "Afrikaans",
        synonyms: [],
    BEL, "be", "bel", "Belarusian",
        synonyms: ["Byelorussian", "беларуская"],
    LTZ, "lb", "ltz", "Luxembourgish",
        synonyms: ["Lëtzebuergesch"],
}
