pub mod distance;
pub mod harvest;
pub mod index;
pub mod lang;
pub mod normalize;
pub mod suggest;
pub mod validate;

pub use lang::Lang;
pub use lang::data::{
    AFR, AMH, ARA, AZE, BEL, BEN, BOS, BUL, CAT, CES, CYM, DAN, DEU, ELL, ENG, EST, EUS, FAS, FIL,
    FIN, FRA, GLE, GLG, GUJ, HAU, HEB, HIN, HRV, HUN, HYE, IBO, IND, ISL, ITA, JPN, KAN, KAT, KAZ,
    KHM, KIR, KOR, LAO, LAV, LIT, LTZ, MAL, MAR, MKD, MON, MSA, MYA, NEP, NLD, NOR, PAN, POL, POR,
    REGISTRY, RON, RUS, SIN, SLK, SLV, SOM, SPA, SQI, SRP, SWA, SWE, TAM, TEL, THA, TUR, UKR, URD,
    UZB, VIE, XHO, YOR, YUE, ZHO, ZUL,
};
pub use lang::names::{EmbeddedNames, LocaleNameProvider, SOURCE_LOCALES};

pub use distance::distance;
pub use harvest::{HarvestedName, NameOrigin, harvest};
pub use index::{
    AcceptIndex, IndexError, PREFIX_CAP, Suggestion, accept_index, reset_accept_index,
};
pub use normalize::normalize;
pub use suggest::{FUZZY_MAX_DISTANCE, suggestions, suggestions_prioritized};
pub use validate::validate_language;
