//! Query name validation.
//!
//! A query name ends up as a function name in generated code, so it follows
//! source-language identifier rules: a letter or `_` first, then letters,
//! digits or `_`. A letter is any character in a Unicode `L*` category, a
//! digit any character in `Nd`. Letter-like numbers (`Ⅰ`) and other numerics
//! (`²`) are rejected.

use crate::error::{AnnotationError, AnnotationResult};
use unicode_general_category::{GeneralCategory, get_general_category};

fn is_letter(c: char) -> bool {
    c == '_'
        || matches!(
            get_general_category(c),
            GeneralCategory::UppercaseLetter
                | GeneralCategory::LowercaseLetter
                | GeneralCategory::TitlecaseLetter
                | GeneralCategory::ModifierLetter
                | GeneralCategory::OtherLetter
        )
}

fn is_digit(c: char) -> bool {
    matches!(get_general_category(c), GeneralCategory::DecimalNumber)
}

/// Check that `name` is usable as a query name.
pub fn validate_query_name(name: &str) -> AnnotationResult<()> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(AnnotationError::invalid_name(name));
    };
    if !is_letter(first) {
        return Err(AnnotationError::invalid_name(name));
    }
    if chars.any(|c| !(is_letter(c) || is_digit(c))) {
        return Err(AnnotationError::invalid_name(name));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_identifiers() {
        for name in ["get_user", "_private", "ListUsers2", "x", "ñandú_1"] {
            assert!(validate_query_name(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn accepts_non_ascii_decimal_digits() {
        // U+0663 ARABIC-INDIC DIGIT THREE is Nd.
        assert!(validate_query_name("row\u{0663}").is_ok());
    }

    #[test]
    fn rejects_letter_like_numbers() {
        // U+2160 ROMAN NUMERAL ONE is Nl, U+00B2 SUPERSCRIPT TWO is No.
        for name in ["\u{2160}x", "x\u{2160}", "x\u{00B2}", "\u{00B2}"] {
            assert_eq!(
                validate_query_name(name),
                Err(AnnotationError::InvalidName(name.to_string())),
                "{name}"
            );
        }
    }

    #[test]
    fn rejects_combining_marks() {
        // U+0301 COMBINING ACUTE ACCENT is Mn, neither letter nor digit.
        assert!(validate_query_name("e\u{0301}").is_err());
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(
            validate_query_name(""),
            Err(AnnotationError::InvalidName(String::new()))
        );
    }

    #[test]
    fn rejects_bad_leading_char() {
        for name in ["1user", "-user", ":one", "$x"] {
            assert!(
                matches!(validate_query_name(name), Err(AnnotationError::InvalidName(n)) if n == name),
                "{name}"
            );
        }
    }

    #[test]
    fn rejects_bad_interior_char() {
        for name in ["bad-name", "get.user", "get user", "a$"] {
            assert!(
                matches!(validate_query_name(name), Err(AnnotationError::InvalidName(_))),
                "{name}"
            );
        }
    }

    proptest! {
        #[test]
        fn ascii_identifiers_are_valid(name in "[A-Za-z_][A-Za-z0-9_]{0,32}") {
            prop_assert!(validate_query_name(&name).is_ok());
        }

        #[test]
        fn leading_digit_is_invalid(name in "[0-9][A-Za-z0-9_]{0,16}") {
            prop_assert!(validate_query_name(&name).is_err());
        }

        #[test]
        fn interior_punctuation_is_invalid(
            head in "[A-Za-z_][A-Za-z0-9_]{0,8}",
            bad in "[-.:;$@ ]",
            tail in "[A-Za-z0-9_]{0,8}",
        ) {
            let name = format!("{head}{bad}{tail}");
            prop_assert_eq!(validate_query_name(&name), Err(AnnotationError::InvalidName(name.clone())));
        }
    }
}
