//! Rule and style tables for the Equelle language

use crate::error::ModeError;
use crate::lexer::{RuleTable, TokenKind};
use crate::style::StyleTable;

/// Keywords with the kind name each one produces.
///
/// Registered ahead of [`BUILTIN`] so an equal-length builtin match loses the
/// tie to the keyword.
pub const KEYWORDS: &[(&str, &str)] = &[
    ("Collection", "COLLECTION"),
    ("Sequence", "SEQUENCE"),
    ("Array", "ARRAY"),
    ("Of", "OF"),
    ("On", "ON"),
    ("Extend", "EXTEND"),
    ("Subset", "SUBSET"),
    ("Mutable", "MUTABLE"),
    ("Scalar", "SCALAR"),
    ("Vector", "VECTOR"),
    ("Bool", "BOOL"),
    ("String", "STRING_KW"),
    ("Cell", "CELL"),
    ("Face", "FACE"),
    ("Edge", "EDGE"),
    ("Vertex", "VERTEX"),
    ("Stencil", "STENCIL"),
    ("And", "AND"),
    ("Or", "OR"),
    ("Not", "NOT"),
    ("Xor", "XOR"),
    ("True", "TRUE"),
    ("False", "FALSE"),
    ("For", "FOR"),
    ("In", "IN"),
];

/// Multi-character operators
pub const OPERATORS: &[(&str, &str)] = &[
    ("<=", "LEQ"),
    (">=", "GEQ"),
    ("==", "EQ"),
    ("!=", "NEQ"),
    ("->", "RET"),
];

/// Single-character punctuation; each kind is named by its character
pub const PUNCTUATION: &[&str] = &[
    "{", "}", "(", ")", "[", "]", ",", ":", "=", "+", "-", "*", "/", "^", "<", ">", "?", "|", ".",
];

pub const BUILTIN: &str = "BUILTIN";
pub const ID: &str = "ID";
pub const INT: &str = "INT";
pub const FLOAT: &str = "FLOAT";
pub const STRING: &str = "STRING";
pub const COMMENT: &str = "COMMENT";
pub const WHITESPACE: &str = "WS";

/// The Equelle rule table, in registration order.
pub fn rules() -> Result<RuleTable, ModeError> {
    let mut table = RuleTable::new();

    for (text, kind) in KEYWORDS {
        table = table.literal(text, *kind);
    }
    table = table.literal("Function", TokenKind::Function);

    for (text, kind) in OPERATORS {
        table = table.literal(text, *kind);
    }
    table = table.regex(r"\.\.\.[ \t]*(#.*)?", TokenKind::LineCont)?;
    for text in PUNCTUATION {
        table = table.literal(text, *text);
    }

    table
        .regex(r"[A-Z][0-9A-Za-z_]*", BUILTIN)?
        .regex(r"[a-z_][0-9A-Za-z_]*", ID)?
        .regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", FLOAT)?
        .regex(r"[0-9]+", INT)?
        .regex(r#""(\\.|[^"\\])*""#, STRING)?
        .regex(r"#.*", COMMENT)?
        .regex(r"[ \t]+", WHITESPACE)?
        .regex(r"$", TokenKind::Eol)
}

/// Display classes for the Equelle kinds
pub fn styles() -> StyleTable {
    StyleTable::new()
        .with_all(KEYWORDS.iter().map(|(_, kind)| *kind), "keyword")
        .with(TokenKind::Function, "keyword")
        .with_all(OPERATORS.iter().map(|(_, kind)| *kind), "operator")
        .with_all(
            ["=", "+", "-", "*", "/", "^", "<", ">", "?", "|", ".", ":"],
            "operator",
        )
        .with_all(["{", "}", "(", ")", "[", "]"], "bracket")
        .with(BUILTIN, "builtin")
        .with(ID, "variable")
        .with_all([INT, FLOAT], "number")
        .with(STRING, "string")
        .with_all([COMMENT, TokenKind::LINE_CONT], "comment")
        .with(TokenKind::Error, "error")
}
