use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::error::MessageError;

const NO_ARGS: &[&str] = &[];

#[test]
fn test_simple_substitution() {
    let out = format("The <{0}> with id ''{1}'' does not comply.", &["species", "s1"]).unwrap();
    assert_eq!(out, "The <species> with id 's1' does not comply.");
}

#[test]
fn test_quote_doubling_unescaped() {
    assert_eq!(format("''{0}''", &["k1"]).unwrap(), "'k1'");
    assert_eq!(format("don''t", NO_ARGS).unwrap(), "don't");
}

#[test]
fn test_rate_rule_self_reference_scenario() {
    let template =
        "The <{0}> with {1} ''{2}'' refers to that variable within the math formula ''{3}''.";
    let out = format(template, &["rateRule", "variable", "k1", "k1*2"]).unwrap();
    assert_eq!(
        out,
        "The <rateRule> with variable 'k1' refers to that variable within the math formula 'k1*2'."
    );
}

#[test]
fn test_extra_arguments_ignored() {
    let out = format("no placeholders here", &["a", "b", "c"]).unwrap();
    assert_eq!(out, "no placeholders here");
}

#[test]
fn test_missing_argument_is_hard_error() {
    let err = format("{0} and {3}", &["only-one"]).unwrap_err();
    match err {
        MessageError::MissingArgument { index, supplied } => {
            assert_eq!(index, 3);
            assert_eq!(supplied, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_empty_template() {
    assert_eq!(format("", &["unused"]).unwrap(), "");
}

#[test]
fn test_repeated_and_out_of_order_placeholders() {
    assert_eq!(format("{1}{0}{1}", &["a", "b"]).unwrap(), "bab");
}

#[test]
fn test_stray_braces_are_literal() {
    assert_eq!(format("set {x} to {0}", &["1"]).unwrap(), "set {x} to 1");
    assert_eq!(format("open { brace", NO_ARGS).unwrap(), "open { brace");
    assert_eq!(format("{0 incomplete", &["v"]).unwrap(), "{0 incomplete");
    assert_eq!(format("trailing {", NO_ARGS).unwrap(), "trailing {");
}

#[test]
fn test_multi_digit_index() {
    let args: Vec<String> = (0..=10).map(|i| format!("a{i}")).collect();
    assert_eq!(format("{10}", &args).unwrap(), "a10");
}

#[test]
fn test_argument_values_inserted_verbatim() {
    // Substitution is a single pass; inserted values are never re-scanned.
    assert_eq!(format("{0}", &["{1} ''x''"]).unwrap(), "{1} ''x''");
}

proptest! {
    #[test]
    fn test_plain_text_passes_through(s in "[A-Za-z0-9 .,<>/=-]*") {
        prop_assert_eq!(format(&s, NO_ARGS).unwrap(), s);
    }

    #[test]
    fn test_plain_text_ignores_any_arguments(
        s in "[A-Za-z0-9 .,<>/=-]*",
        args in proptest::collection::vec("[A-Za-z0-9]*", 0..6),
    ) {
        prop_assert_eq!(format(&s, &args).unwrap(), s);
    }

    #[test]
    fn test_formatting_is_idempotent_without_placeholders(s in "[A-Za-z0-9 .,<>/=-]*") {
        let once = format(&s, NO_ARGS).unwrap();
        let twice = format(&once, NO_ARGS).unwrap();
        prop_assert_eq!(once, twice);
    }
}
