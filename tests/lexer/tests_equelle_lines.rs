//! Tokenizing real Equelle lines with the built-in grammar.

use crate::helpers::mode_helpers::*;
use crate::helpers::source_fixtures::*;
use equelle_mode::TokenKind;
use rstest::rstest;

#[rstest]
#[case("x = 1", &["ID", "=", "INT", "EOL"])]
#[case("x = 1.25", &["ID", "=", "FLOAT", "EOL"])]
#[case("flag : Bool = True", &["ID", ":", "BOOL", "=", "TRUE", "EOL"])]
#[case("a != b", &["ID", "NEQ", "ID", "EOL"])]
#[case("a == b", &["ID", "EQ", "ID", "EOL"])]
#[case("vol = |AllCells()|", &["ID", "=", "|", "BUILTIN", "(", ")", "|", "EOL"])]
#[case("-> flux", &["RET", "ID", "EOL"])]
#[case("}", &["}", "EOL"])]
#[case("# only a comment", &["COMMENT", "EOL"])]
#[case("", &[])]
#[case("    ", &["EOL"])]
fn test_line_kinds(#[case] text: &str, #[case] expected: &[&str]) {
    let mode = equelle();
    assert_eq!(kind_names(&mode, text), expected, "line: {text:?}");
}

#[test]
fn test_declaration_kinds() {
    let mode = equelle();
    assert_eq!(
        kind_names(&mode, DECLARATION),
        [
            "ID",
            ":",
            "COLLECTION",
            "OF",
            "SCALAR",
            "ON",
            "BUILTIN",
            "(",
            ")",
            "EOL"
        ]
    );
}

#[test]
fn test_function_header_ends_in_continuation() {
    let mode = equelle();
    let tokens = line_tokens(&mode, FUNCTION_HEADER);
    let last = tokens.last().unwrap();
    assert_eq!(last.kind, TokenKind::LineCont);
    assert!(tokens.iter().all(|t| t.kind != TokenKind::Eol));
    let function = tokens
        .iter()
        .find(|t| t.kind == TokenKind::Function)
        .unwrap();
    assert_eq!(function.column, 18);
}

#[test]
fn test_block_markers_are_structural() {
    let mode = equelle();
    let tokens = line_tokens(&mode, "f(u) = {");
    assert!(tokens.iter().any(|t| t.kind == TokenKind::BlockOpen));
    let tokens = line_tokens(&mode, "}");
    assert_eq!(tokens[0].kind, TokenKind::BlockClose);
}

#[test]
fn test_unmatched_characters_do_not_halt_the_line() {
    let mode = equelle();
    let tokens = line_tokens(&mode, "a ; b $ c");
    let errors: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Error)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(errors, [";", "$"]);
    assert_eq!(tokens.last().unwrap().kind, TokenKind::Eol);
    assert_eq!(
        tokens.iter().filter(|t| t.kind.name() == "ID").count(),
        3
    );
}

#[test]
fn test_non_ascii_error_is_one_character() {
    let mode = equelle();
    let tokens = line_tokens(&mode, "a → b");
    let error = tokens
        .iter()
        .find(|t| t.kind == TokenKind::Error)
        .unwrap();
    assert_eq!(error.text, "→");
    assert_eq!(u32::from(error.range().len()), 3);
}

#[test]
fn test_continuation_mid_line_is_still_reclassified() {
    let mode = equelle();
    // the marker only swallows whitespace and a comment, so tokens may follow
    assert_eq!(
        kind_names(&mode, "a ... b"),
        ["ID", "LINECONT", "ID", "EOL"]
    );
}

#[test]
fn test_tokens_carry_line_number() {
    let mode = equelle();
    let tokens: Vec<_> = mode.tokens(41, "x = y").collect();
    assert!(tokens.iter().all(|t| t.line == 41));
}
