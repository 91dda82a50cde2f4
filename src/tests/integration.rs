#[cfg(test)]
mod integration_tests {

    use crate::index::AcceptIndex;
    use crate::{ARA, EmbeddedNames, FAS, NLD, accept_index, suggestions, validate_language};

    #[test]
    fn dutch_nederlands_and_flemish_agree() {
        let index = accept_index();
        let codes: Vec<_> = ["Dutch", "Nederlands", "Flemish"]
            .iter()
            .map(|s| validate_language(s, &index))
            .collect();
        assert!(codes.iter().all(|c| *c == Some(NLD)), "{codes:?}");
    }

    #[test]
    fn farsi_and_persian_agree_and_differ_from_arabic() {
        let index = accept_index();
        let farsi = validate_language("Farsi", &index);
        let persian = validate_language("Persian", &index);
        assert_eq!(farsi, persian);
        assert_eq!(farsi, Some(FAS));
        assert_eq!(validate_language("Arabic", &index), Some(ARA));
        assert_ne!(farsi, Some(ARA));
    }

    #[test]
    fn unrecognized_input_drives_suggestions() {
        let index = accept_index();
        assert_eq!(validate_language("frensh", &index), None);
        let hits = suggestions("frensh", &index, 10);
        assert!(hits.iter().any(|s| s.lang.code == "fr"), "{hits:?}");
    }

    #[test]
    fn every_language_reachable_through_public_index() {
        let index = accept_index();
        index.verify().expect("registry invariant violated");
        for lang in crate::REGISTRY {
            assert_eq!(
                validate_language(lang.name, &index),
                Some(*lang),
                "canonical name of `{}` must validate to itself",
                lang.code
            );
        }
    }

    #[test]
    fn memoized_and_fresh_indexes_behave_identically() {
        let memoized = accept_index();
        let fresh = AcceptIndex::build(&EmbeddedNames);
        for input in ["français", "Frans", "Farsi", "普通话", "Klingon"] {
            assert_eq!(
                validate_language(input, &memoized),
                validate_language(input, &fresh),
                "{input:?}"
            );
        }
    }
}
