//! Property tests for the conversion passes.

use proptest::prelude::*;

use typomark::dialect::convert;
use typomark::html::{retokenize, to_text, typograph_inline};

// Plain words: no dashes, dots, plus signs, digits or markup characters.
const WORDS: &str = "[a-zA-Zа-яА-Я ]{0,24}";

proptest! {
    #[test]
    fn convert_never_panics(input in ".{0,64}") {
        let _ = convert(&input);
    }

    #[test]
    fn html_passes_never_panic(input in ".{0,64}") {
        let _ = retokenize(&input);
        let _ = typograph_inline(&input);
        let _ = to_text(&input);
    }

    #[test]
    fn passthrough_markup_is_preserved(a in WORDS, b in WORDS) {
        let input = format!("<p>{a}<em>{b}</em></p><ul><li>{b}</li></ul>");
        let converted = convert(&input);
        prop_assert!(converted.is_ok());
        prop_assert_eq!(&converted.html, &input);
        prop_assert_eq!(retokenize(&input).html, input);
    }

    #[test]
    fn skip_zone_text_is_never_typographed(text in "[a-z .+-]{0,32}") {
        let input = format!("<pre>{text}</pre>");
        prop_assert_eq!(&convert(&input).html, &input);
        prop_assert_eq!(&retokenize(&input).html, &input);
    }

    #[test]
    fn partial_output_is_a_prefix_on_error(a in WORDS) {
        let input = format!("<p>{a}</p><p>{a}</q>");
        let converted = convert(&input);
        prop_assert!(converted.error.is_some());
        let expected = format!("<p>{a}</p><p>{a}");
        prop_assert_eq!(converted.html, expected);
    }
}
