//! Incremental line-by-line state versus a full reparse.

use crate::helpers::mode_helpers::*;
use crate::helpers::source_fixtures::*;
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(DECLARATION)]
#[case(FUNCTION_WITH_BODY)]
#[case(NESTED_BLOCKS)]
#[case(CONTINUED_CALL)]
#[case(HEAT_EQUATION)]
#[case("}\n}\n{")]
#[case(BLANK_LINE_IN_BODY)]
#[case("")]
fn test_incremental_equals_reparse(#[case] source: &str) {
    let mode = equelle();
    let reparsed = mode.reparse(source);
    assert_eq!(thread_lines(&mode, source), reparsed);
    assert_eq!(thread_tokens(&mode, source), reparsed);
}

#[test]
fn test_resume_from_checkpoint() {
    let mode = equelle();
    let lines: Vec<&str> = HEAT_EQUATION.lines().collect();
    let split = lines.len() / 2;

    let mut state = mode.start_state();
    for (line, text) in lines[..split].iter().enumerate() {
        mode.advance_line(&mut state, line as u32, text);
    }
    let checkpoint = state.clone();

    let mut resumed = checkpoint;
    for (line, text) in lines[split..].iter().enumerate() {
        mode.advance_line(&mut resumed, (split + line) as u32, text);
    }

    assert_eq!(resumed, mode.reparse(HEAT_EQUATION));
}

#[test]
fn test_edit_changes_following_indentation() {
    let mode = equelle();
    let original = "f(u) = {\n  x = u\n}\ny = 1";
    let edited = "f(u) = {\n  x = u\n  {\ny = 1";

    let before = mode.indent_lines(original);
    let after = mode.indent_lines(edited);
    assert_eq!(before[..2], after[..2]);
    assert_eq!((before[2], after[2]), (0, 2));
    assert_eq!(before[3], 0);
    assert_eq!(after[3], 4);
}

#[test]
fn test_reparse_ignores_trailing_newline() {
    let mode = equelle();
    assert_eq!(mode.reparse("x = 1\n"), mode.reparse("x = 1"));
}

proptest! {
    #[test]
    fn prop_incremental_equals_reparse(
        lines in prop::collection::vec(
            prop::sample::select(vec![
                "f(u) = {",
                "  x = u",
                "}",
                "g : Function(a, ...",
                "             b) -> Scalar {",
                "    -> 1.0",
                "",
                "# note",
                "a + ...",
                "@",
            ]),
            0..24,
        )
    ) {
        let mode = equelle();
        let source = lines.join("\n");
        let reparsed = mode.reparse(&source);
        prop_assert!(reparsed.is_consistent());
        prop_assert_eq!(&thread_lines(&mode, &source), &reparsed);
        prop_assert_eq!(&thread_tokens(&mode, &source), &reparsed);
        prop_assert_eq!(mode.indent_lines(&source).len(), source.lines().count());
    }
}
