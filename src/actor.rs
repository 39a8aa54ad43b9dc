//! Actor files
//!
//!     This module holds the complete pipeline from source text to the document model and back.
//!
//! The Pipeline
//!
//!     Data flows strictly downward, each stage only knowing the output of the previous one:
//!         1. Lexing: raw text is split into lines, blank lines dropped, and the remaining lines
//!            grouped into an indentation tree. See [lexing](lexing).
//!         2. Tokenizing: each line is classified on its own into tag, keyword or text tokens.
//!            See [token](token).
//!         3. Parsing: the tree is walked depth first, tokenizing every node, and the
//!            [`Actor`](ast::Actor) is accumulated. See [parsing](parsing).
//!         4. Writing: an actor is emitted back in its canonical text form.
//!            See [formats](formats).
//!
//!     Each call owns all of its working state, so any number of parses and writes can run side
//!     by side without synchronization.
//!
//! File Layout
//!
//!     The [loader](loader) module wraps the pipeline with file system access, and
//!     [config](config) layers user settings over the embedded defaults for both directions.

pub mod ast;
pub mod config;
pub mod formats;
pub mod lexing;
pub mod loader;
pub mod parsing;
pub mod testing;
pub mod token;
