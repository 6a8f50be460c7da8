use readalign::align::normalize::{expand_reference, normalize};
use rstest::rstest;

#[rstest]
#[case("Hello", "hello")]
#[case("Don't", "dont")]
#[case("world!!!", "world")]
#[case("...", "")]
#[case("", "")]
fn strips_and_lowercases(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(normalize(input), expected);
}

#[rstest]
#[case("10", "ten")]
#[case("Ten", "ten")]
#[case("0", "zero")]
#[case("20", "twenty")]
#[case("90", "ninety")]
#[case("100", "hundred")]
#[case("1000", "thousand")]
#[case("fifty", "fifty")]
fn unifies_numbers_onto_word_form(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(normalize(input), expected);
}

#[test]
fn digit_and_word_forms_normalize_identically() {
    for (digits, word) in [("10", "ten"), ("3", "three"), ("70", "seventy")] {
        assert_eq!(normalize(digits), normalize(word));
    }
}

#[test]
fn unmapped_digit_strings_pass_through() {
    assert_eq!(normalize("1987"), "1987");
    assert_eq!(normalize("42"), "42");
}

#[rstest]
#[case("Hello,")]
#[case("10")]
#[case("ten")]
#[case("$5")]
#[case("")]
#[case("!!??")]
fn normalize_is_idempotent(#[case] input: &str) {
    let once = normalize(input);
    assert_eq!(normalize(&once), once);
}

#[test]
fn currency_expands_before_alignment() {
    let reference = vec!["$1.50".to_string(), "please".to_string()];
    let expanded = expand_reference(&reference);
    assert_eq!(expanded, vec!["1", "dollar", "50", "cents", "please"]);
}

#[test]
fn currency_whole_dollars_and_zero_cents() {
    assert_eq!(
        expand_reference(&["$5".to_string()]),
        vec!["5", "dollar"]
    );
    assert_eq!(
        expand_reference(&["$2.00".to_string()]),
        vec!["2", "dollar"]
    );
}

#[test]
fn non_currency_tokens_pass_through_expansion() {
    let reference = vec!["send".to_string(), "$ign".to_string()];
    assert_eq!(expand_reference(&reference), vec!["send", "$ign"]);
}
