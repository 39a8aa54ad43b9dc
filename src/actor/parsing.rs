//! Parsing module for actor files
//!
//!     Parsing takes the indentation tree from the [lexer](crate::actor::lexing), tokenizes each
//!     line with the [tokenizer](crate::actor::token) and builds the [Actor]. See
//!     [parser](parser) for the dispatch rules.
//!
//! Grammar
//!
//!     Over lexed, indentation grouped lines:
//!
//!     ```text
//!     document       := tagLine? actorBlock
//!     actorBlock     := "Actor:" NAME body
//!     body           := blurbLine* goalsSection?
//!     goalsSection   := taggedGoal* goalsListBlock?
//!     taggedGoal     := tagLine "Goal:" NAME
//!     goalsListBlock := tagLine? "Goals:" NAME+      (one NAME per nested line)
//!     tagLine        := ("@" TAGNAME)+
//!     comment        := "#" anything-to-end-of-line
//!     ```
//!
//!     The walk is more lenient than the grammar about order: blurb text and goals may be
//!     interleaved, and tagged goals may follow the goal list.
//!
//! Errors
//!
//!     Parsing stops at the first error. Nothing is corrected and no partial actor is returned.
//!     A document without an `Actor:` line is an error too. See [ParseError].

pub mod error;
pub mod parser;

pub use error::{ParseError, ParseErrorKind};
pub use parser::{ParseContext, Parser, ParserOptions, DEFAULT_MAX_DEPTH};

use crate::actor::ast::Actor;

/// Parse source text with the default options.
pub fn parse_actor(source: &str) -> Result<Actor, ParseError> {
    Parser::new().parse(source)
}
