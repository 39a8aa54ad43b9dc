//! Line tokens
//!
//!     Every line is classified on its own, without looking at its neighbours. A line produces:
//!         - no token when it is blank or only a comment,
//!         - one [Token::Tag] per field of a tag line (`@one @two`),
//!         - exactly one keyword token for `Word: value` lines with a known word,
//!         - one [Token::Text] with the whole line otherwise.
//!
//!     Tokens live for one parse step only; the parser turns them into model elements right away.
//!
//! Keywords
//!
//!     | Word    | Token            |
//!     |---------|------------------|
//!     | `actor` | [Token::Actor]   |
//!     | `goal`  | [Token::Goal]    |
//!     | `goals` | [Token::Goals]   |
//!
//!     Words are matched case-insensitively. Any other word before a colon is an error, which
//!     means blurb text cannot contain a colon.

pub mod error;
pub mod tokenizer;

pub use error::TokenizeError;
pub use tokenizer::{is_valid_tag_name, tokenize};

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Tag name, without the `@`
    Tag(String),
    /// `Actor:` line, carrying the (possibly empty) actor name
    Actor(String),
    /// `Goal:` line, carrying the (possibly empty) goal name
    Goal(String),
    /// `Goals:` line; the value is ignored by the grammar
    Goals(String),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Tag,
    ActorKeyword,
    GoalKeyword,
    GoalsKeyword,
    Text,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Tag(_) => TokenKind::Tag,
            Token::Actor(_) => TokenKind::ActorKeyword,
            Token::Goal(_) => TokenKind::GoalKeyword,
            Token::Goals(_) => TokenKind::GoalsKeyword,
            Token::Text(_) => TokenKind::Text,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Token::Tag(s) | Token::Actor(s) | Token::Goal(s) | Token::Goals(s) | Token::Text(s) => {
                s
            }
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Tag => "tag",
            TokenKind::ActorKeyword => "actor definition",
            TokenKind::GoalKeyword => "goal keyword",
            TokenKind::GoalsKeyword => "goals keyword",
            TokenKind::Text => "text",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Tag(name) => write!(f, "Tag(@{})", name),
            Token::Actor(value) => write!(f, "Actor({})", value),
            Token::Goal(value) => write!(f, "Goal({})", value),
            Token::Goals(value) => write!(f, "Goals({})", value),
            Token::Text(text) => write!(f, "Text({})", text),
        }
    }
}
