//! # actor-lang
//!
//! A parser and canonical writer for actor definition files.
//!
//! An actor file describes one named actor: optional tags, free-text blurb lines and a list of
//! goals, each optionally tagged. The format is indentation sensitive:
//!
//! ```text
//! @tag1 @tag2
//! Actor: Valid actor
//!     Description line
//!
//!     Goals:
//!         Goal number 1
//!
//!     @tag3
//!     Goal: Goal number 2
//! ```
//!
//! See the [actor module](actor) for the pipeline overview.

pub mod actor;

pub use actor::ast::{Actor, Goal, Position, Tag};
pub use actor::formats::{to_actor_string, write_actor, WriteError, WriterOptions};
pub use actor::parsing::{parse_actor, ParseError, Parser, ParserOptions};
