//! Helpers for driving a mode line by line.

use equelle_mode::{DocumentState, Mode, Token};

/// The default Equelle mode.
pub fn equelle() -> Mode {
    Mode::equelle().expect("built-in Equelle grammar should compile")
}

/// Thread every line of `source` through a fresh state, one line at a time.
pub fn thread_lines(mode: &Mode, source: &str) -> DocumentState {
    let mut state = mode.start_state();
    for (line, text) in source.lines().enumerate() {
        mode.highlight_line(&mut state, line as u32, text);
    }
    state
}

/// Thread every line of `source` token by token through the public tokenizer
/// and tracker entry points.
pub fn thread_tokens(mode: &Mode, source: &str) -> DocumentState {
    let mut state = mode.start_state();
    for (line, text) in source.lines().enumerate() {
        let tokens = mode.tokens(line as u32, text);
        let indentation = tokens.cursor().indentation();
        for token in tokens {
            mode.tracker().advance(&mut state, &token, indentation);
        }
    }
    state
}

/// Token kind names of one line, whitespace dropped.
pub fn kind_names(mode: &Mode, text: &str) -> Vec<String> {
    mode.tokens(0, text)
        .filter(|t| t.kind.name() != "WS")
        .map(|t| t.kind.name().to_string())
        .collect()
}

/// All tokens of one line.
pub fn line_tokens(mode: &Mode, text: &str) -> Vec<Token> {
    mode.tokens(0, text).collect()
}
