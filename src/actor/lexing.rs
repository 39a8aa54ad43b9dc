//! Lexer
//!
//!     The lexer turns raw text into an indentation tree of positioned lines. It knows nothing
//!     about what a line means; classifying lines is the job of the [tokenizer](crate::actor::token).
//!
//! The Lexing Pipeline
//!
//!     1. Line collection. See [collect_lines](indentation::collect_lines).
//!        Lines that are empty once trailing whitespace is removed are dropped. Survivors keep
//!        their original 1-based line number, so positions in errors point at the source.
//!
//!     2. Tree building. See [build_tree](indentation::build_tree).
//!        A single forward scan nests lines under the previous, less indented line.
//!
//!     Lexing cannot fail: any text is a well formed sequence of lines. There can be several
//!     top-level lines, e.g. a tag line before the actor definition.
//!
//! Indentation Handling
//!
//!     Indentation is measured, not interpreted: a line's column is the raw count of leading
//!     spaces and tabs. Nothing requires 4 spaces per level, only that siblings line up.

pub mod indentation;
pub mod line_tree;

pub use indentation::{build_tree, collect_lines, RawLine};
pub use line_tree::{LineNode, LineRef, LineTree, NodeId};

/// Lex source text into its indentation tree.
pub fn lex(source: &str) -> LineTree {
    let lines = collect_lines(source);
    let tree = build_tree(lines);
    tracing::debug!(lines = tree.len(), roots = tree.roots().len(), "lexed source");
    tree
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_valid_actor_layout() {
        let source = "
@tag1 @tag2
Actor: Valid actor
    Description line
    Second blurb line

    Goals:
        Goal number 1
        Goal number 2
    \t
    @tag3 @tag4
    Goal: Goal number 3";
        let tree = lex(source);
        let roots: Vec<_> = tree.roots().collect();
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0].position(), crate::actor::ast::Position::new(2, 0));
        assert_eq!(roots[0].content(), "@tag1 @tag2");
        assert!(!roots[0].has_children());

        let actor = roots[1];
        assert_eq!(actor.content(), "Actor: Valid actor");
        let body: Vec<_> = actor
            .children()
            .map(|c| (c.line(), c.column(), c.content()))
            .collect();
        assert_eq!(
            body,
            vec![
                (4, 4, "Description line"),
                (5, 4, "Second blurb line"),
                (7, 4, "Goals:"),
                (11, 4, "@tag3 @tag4"),
                (12, 4, "Goal: Goal number 3"),
            ]
        );

        let goals = actor.children().nth(2).unwrap();
        let items: Vec<_> = goals
            .children()
            .map(|c| (c.line(), c.column(), c.content()))
            .collect();
        assert_eq!(items, vec![(8, 8, "Goal number 1"), (9, 8, "Goal number 2")]);
    }

    #[test]
    fn test_lex_dedent_back_to_top_level() {
        let source = "
Actor: Valid actor
 First blurb
 Second blurb
Trailing line
";
        let tree = lex(source);
        let roots: Vec<_> = tree
            .roots()
            .map(|r| (r.line(), r.column(), r.content(), r.children().len()))
            .collect();
        assert_eq!(
            roots,
            vec![(2, 0, "Actor: Valid actor", 2), (5, 0, "Trailing line", 0)]
        );
    }

    #[test]
    fn test_lex_empty_source() {
        assert!(lex("").is_empty());
        assert!(lex("\n   \n\t\n").is_empty());
    }
}
