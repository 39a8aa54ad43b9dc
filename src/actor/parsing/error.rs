//! Parse errors
//!
//! Every error carries the position of the line that caused it and renders as
//! `[Line LLLL:CC] <message>`. The first error aborts the parse; there is no recovery.

use crate::actor::ast::Position;
use crate::actor::token::{TokenKind, TokenizeError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{location} {kind}")]
pub struct ParseError {
    pub location: Position,
    #[source]
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(location: Position, kind: ParseErrorKind) -> Self {
        Self { location, kind }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("{0}")]
    Tokenize(#[source] TokenizeError),

    #[error("Actor keyword must be followed by an actor name")]
    MissingActorName,

    #[error("Only one actor definition is permitted per file (other actor '{name}' : {first})")]
    DuplicateActor { name: String, first: Position },

    #[error("Goal keyword must be followed by a goal name")]
    MissingGoalName,

    #[error("Goal keyword outside of actor context")]
    GoalOutsideActor,

    #[error("Goals keyword outside of actor context")]
    GoalsOutsideActor,

    #[error("Blurb text outside of actor context")]
    TextOutsideActor,

    #[error("Unexpected {0} in goal list")]
    UnexpectedInGoalList(TokenKind),

    #[error("No actor definition found")]
    NoActor,

    #[error("Nesting deeper than {limit} levels")]
    TooDeep { limit: usize },
}
