//! Recursive descent over the indentation tree
//!
//! The walk visits every node depth first, tokenizes it and dispatches on the token. All state
//! shared between nodes lives in a [ParseContext] passed down by reference:
//!
//!     - `pending_tags`: tags read but not yet attached. The next `Actor:`, `Goal:` or `Goals:`
//!       line drains them, so two keyword lines in a row leave the second untagged.
//!     - `actor`: absent until the `Actor:` line. Goals and blurb require it.
//!
//! Dispatch:
//!
//! | Token   | Effect                                                        | Children  |
//! |---------|---------------------------------------------------------------|-----------|
//! | Tag     | buffered as pending                                           | ignored   |
//! | Actor   | creates the actor, takes pending tags                         | walked    |
//! | Goal    | appends a goal, takes pending tags                            | walked    |
//! | Goals   | one goal per child line, all sharing the pending tags         | consumed  |
//! | Text    | appended to the blurb                                         | walked    |
//! | (none)  | comment or blank, no state change                             | walked    |

use super::error::{ParseError, ParseErrorKind};
use crate::actor::ast::{Actor, Goal, Position, Tag};
use crate::actor::lexing::{lex, LineRef, LineTree};
use crate::actor::token::{tokenize, Token};

pub const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Deepest nesting level accepted, top-level lines being level 1
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// State carried across the walk of one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseContext {
    pending_tags: Vec<Tag>,
    actor: Option<Actor>,
}

impl ParseContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_tags(&self) -> &[Tag] {
        &self.pending_tags
    }

    pub fn actor(&self) -> Option<&Actor> {
        self.actor.as_ref()
    }

    fn take_pending_tags(&mut self) -> Vec<Tag> {
        std::mem::take(&mut self.pending_tags)
    }

    fn actor_mut(&mut self, missing: ParseErrorKind) -> Result<&mut Actor, ParseErrorKind> {
        self.actor.as_mut().ok_or(missing)
    }

    /// Finish the walk, yielding the actor if one was defined.
    pub fn finish(self) -> Result<Actor, ParseError> {
        self.actor
            .ok_or_else(|| ParseError::new(Position::default(), ParseErrorKind::NoActor))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParserOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Lex and parse a whole document.
    pub fn parse(&self, source: &str) -> Result<Actor, ParseError> {
        self.parse_tree(&lex(source))
    }

    /// Parse an already lexed document.
    pub fn parse_tree(&self, tree: &LineTree) -> Result<Actor, ParseError> {
        let mut context = ParseContext::new();
        for line in tree.roots() {
            self.parse_node(line, &mut context, 1)?;
        }
        let actor = context.finish()?;
        tracing::debug!(
            actor = %actor.name,
            tags = actor.tags.len(),
            blurb = actor.blurb.len(),
            goals = actor.goals.len(),
            "parsed actor"
        );
        Ok(actor)
    }

    /// Parse one node and its subtree into `context`. `depth` is the node's nesting level.
    pub fn parse_node(
        &self,
        line: LineRef<'_>,
        context: &mut ParseContext,
        depth: usize,
    ) -> Result<(), ParseError> {
        let position = line.position();
        if depth > self.options.max_depth {
            return Err(ParseError::new(
                position,
                ParseErrorKind::TooDeep {
                    limit: self.options.max_depth,
                },
            ));
        }

        let tokens = tokenize(line.content())
            .map_err(|e| ParseError::new(position, ParseErrorKind::Tokenize(e)))?;
        tracing::trace!(line = line.line(), column = line.column(), tokens = tokens.len(), "visit");

        if tokens.is_empty() {
            return self.parse_children(line, context, depth);
        }

        for token in tokens {
            match token {
                Token::Tag(name) => context.pending_tags.push(Tag::new(name).at(position)),
                Token::Actor(name) => self.parse_actor_definition(line, name, context, depth)?,
                Token::Goal(name) => self.parse_goal(line, name, context, depth)?,
                Token::Goals(_) => self.parse_goal_list(line, context)?,
                Token::Text(text) => self.parse_text(line, text, context, depth)?,
            }
        }
        Ok(())
    }

    fn parse_children(
        &self,
        line: LineRef<'_>,
        context: &mut ParseContext,
        depth: usize,
    ) -> Result<(), ParseError> {
        for child in line.children() {
            self.parse_node(child, context, depth + 1)?;
        }
        Ok(())
    }

    fn parse_actor_definition(
        &self,
        line: LineRef<'_>,
        name: String,
        context: &mut ParseContext,
        depth: usize,
    ) -> Result<(), ParseError> {
        let position = line.position();
        if name.is_empty() {
            return Err(ParseError::new(position, ParseErrorKind::MissingActorName));
        }
        if let Some(existing) = &context.actor {
            return Err(ParseError::new(
                position,
                ParseErrorKind::DuplicateActor {
                    name: existing.name.clone(),
                    first: existing.location,
                },
            ));
        }

        tracing::debug!(%position, actor = %name, "actor definition");
        let mut actor = Actor::new(name).at(position);
        actor.tags = context.take_pending_tags();
        context.actor = Some(actor);

        self.parse_children(line, context, depth)
    }

    fn parse_goal(
        &self,
        line: LineRef<'_>,
        name: String,
        context: &mut ParseContext,
        depth: usize,
    ) -> Result<(), ParseError> {
        let position = line.position();
        let tags = context.take_pending_tags();
        let actor = context
            .actor_mut(ParseErrorKind::GoalOutsideActor)
            .map_err(|kind| ParseError::new(position, kind))?;
        if name.is_empty() {
            return Err(ParseError::new(position, ParseErrorKind::MissingGoalName));
        }

        actor.goals.push(Goal::new(name).with_tags(tags).at(position));

        self.parse_children(line, context, depth)
    }

    /// Every child of a `Goals:` line names one goal. Children are read one level deep only.
    fn parse_goal_list(
        &self,
        line: LineRef<'_>,
        context: &mut ParseContext,
    ) -> Result<(), ParseError> {
        let tags = context.pending_tags.clone();
        let actor = context
            .actor_mut(ParseErrorKind::GoalsOutsideActor)
            .map_err(|kind| ParseError::new(line.position(), kind))?;

        for item in line.children() {
            let position = item.position();
            let tokens = tokenize(item.content())
                .map_err(|e| ParseError::new(position, ParseErrorKind::Tokenize(e)))?;
            for token in tokens {
                match token {
                    Token::Text(name) => actor
                        .goals
                        .push(Goal::new(name).with_tags(tags.iter().cloned()).at(position)),
                    other => {
                        return Err(ParseError::new(
                            position,
                            ParseErrorKind::UnexpectedInGoalList(other.kind()),
                        ))
                    }
                }
            }
        }

        context.pending_tags.clear();
        Ok(())
    }

    fn parse_text(
        &self,
        line: LineRef<'_>,
        text: String,
        context: &mut ParseContext,
        depth: usize,
    ) -> Result<(), ParseError> {
        let actor = context
            .actor_mut(ParseErrorKind::TextOutsideActor)
            .map_err(|kind| ParseError::new(line.position(), kind))?;
        actor.blurb.push(text);

        self.parse_children(line, context, depth)
    }
}
