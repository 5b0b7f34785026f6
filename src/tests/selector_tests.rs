//! Tests for selector shorthand parsing and display.

use crate::selector::Selector;

#[test]
fn star_and_all_parse_to_any() {
    assert_eq!(Selector::from("*"), Selector::Any);
    assert_eq!(Selector::from("all"), Selector::Any);
}

#[test]
fn prefixed_shorthands_parse_to_their_variants() {
    assert_eq!(
        Selector::from("id:login_button"),
        Selector::Id("login_button".to_string())
    );
    assert_eq!(
        Selector::from("#login_button"),
        Selector::Id("login_button".to_string())
    );
    assert_eq!(
        Selector::from("text:Sign in"),
        Selector::Text("Sign in".to_string())
    );
    assert_eq!(
        Selector::from("marked:menu"),
        Selector::Marked("menu".to_string())
    );
    assert_eq!(
        Selector::from("class:android.widget.EditText"),
        Selector::ClassName("android.widget.EditText".to_string())
    );
    assert_eq!(
        Selector::from("ClassName:UIButton"),
        Selector::ClassName("UIButton".to_string())
    );
}

#[test]
fn prefixes_match_regardless_of_case() {
    assert_eq!(
        Selector::from("Id:login_button"),
        Selector::Id("login_button".to_string())
    );
    assert_eq!(
        Selector::from("TEXT:Sign in"),
        Selector::Text("Sign in".to_string())
    );
    assert_eq!(
        Selector::from("Marked:menu"),
        Selector::Marked("menu".to_string())
    );
    assert_eq!(
        Selector::from("CLASS:UIButton"),
        Selector::ClassName("UIButton".to_string())
    );
    assert_eq!(Selector::from("ALL"), Selector::Any);
}

#[test]
fn prefix_values_keep_their_case() {
    assert_eq!(
        Selector::from("ID:LoginButton"),
        Selector::Id("LoginButton".to_string())
    );
    assert_eq!(
        Selector::from("Text:SIGN IN"),
        Selector::Text("SIGN IN".to_string())
    );
}

#[test]
fn bare_strings_parse_to_marks() {
    assert_eq!(
        Selector::from("submit_form"),
        Selector::Marked("submit_form".to_string())
    );
    assert_eq!(
        Selector::from("  padded  "),
        Selector::Marked("padded".to_string())
    );
}

#[test]
fn unknown_prefixes_parse_to_invalid() {
    let selector = Selector::from("xpath://button[1]");
    match selector {
        Selector::Invalid(reason) => assert!(reason.contains("xpath://button[1]")),
        other => panic!("expected Invalid, got {other:?}"),
    }
}

#[test]
fn display_round_trips_through_the_parser() {
    let selectors = [
        Selector::Any,
        Selector::Marked("menu".to_string()),
        Selector::Id("login".to_string()),
        Selector::Text("Sign in".to_string()),
        Selector::ClassName("UIButton".to_string()),
    ];
    for selector in selectors {
        assert_eq!(Selector::from(selector.to_string().as_str()), selector);
    }
}
