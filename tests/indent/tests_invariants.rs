//! State invariants under arbitrary token streams.

use equelle_mode::{DocumentState, IndentTracker, Token, TokenKind};
use proptest::prelude::*;

fn kind_strategy() -> impl Strategy<Value = TokenKind> {
    prop_oneof![
        Just(TokenKind::BlockOpen),
        Just(TokenKind::BlockClose),
        Just(TokenKind::Function),
        Just(TokenKind::Eol),
        Just(TokenKind::LineCont),
        Just(TokenKind::Error),
        Just(TokenKind::from_name("ID")),
    ]
}

fn token_strategy() -> impl Strategy<Value = (Token, usize)> {
    (kind_strategy(), 0usize..40, 0usize..12).prop_map(|(kind, column, indentation)| {
        let mut token = Token::new(kind, "", 0);
        token.column = column;
        (token, indentation)
    })
}

fn run(tracker: &IndentTracker, tokens: &[(Token, usize)]) -> DocumentState {
    let mut state = DocumentState::new();
    for (token, indentation) in tokens {
        tracker.advance(&mut state, token, *indentation);
    }
    state
}

proptest! {
    #[test]
    fn prop_stack_matches_level(tokens in prop::collection::vec(token_strategy(), 0..64)) {
        let tracker = IndentTracker::default();
        let mut state = DocumentState::new();
        for (token, indentation) in &tokens {
            tracker.advance(&mut state, token, *indentation);
            prop_assert!(state.is_consistent());
            prop_assert_eq!(state.block_indent().len(), state.block_level() + 1);
        }
    }

    #[test]
    fn prop_level_counts_unmatched_opens(tokens in prop::collection::vec(token_strategy(), 0..64)) {
        let tracker = IndentTracker::default();
        let state = run(&tracker, &tokens);

        let mut expected = 0usize;
        for (token, _) in &tokens {
            match token.kind {
                TokenKind::BlockOpen => expected += 1,
                TokenKind::BlockClose => expected = expected.saturating_sub(1),
                _ => {}
            }
        }
        prop_assert_eq!(state.block_level(), expected);
    }

    #[test]
    fn prop_query_is_pure(
        tokens in prop::collection::vec(token_strategy(), 0..32),
        next_line in "[ }a-z]{0,8}",
    ) {
        let tracker = IndentTracker::new(4);
        let state = run(&tracker, &tokens);
        let before = state.clone();
        let first = tracker.query_indent(&state, &next_line);
        let second = tracker.query_indent(&state, &next_line);
        prop_assert_eq!(first, second);
        prop_assert_eq!(state, before);
    }

    #[test]
    fn prop_threading_is_deterministic(tokens in prop::collection::vec(token_strategy(), 0..64)) {
        let tracker = IndentTracker::default();
        let split = tokens.len() / 2;

        let mut incremental = DocumentState::new();
        for (token, indentation) in &tokens[..split] {
            tracker.advance(&mut incremental, token, *indentation);
        }
        let checkpoint = incremental.clone();
        let mut resumed = checkpoint;
        for (token, indentation) in &tokens[split..] {
            tracker.advance(&mut resumed, token, *indentation);
        }

        prop_assert_eq!(resumed, run(&tracker, &tokens));
    }
}
