//! Actor element
//!
//! The actor is the root of a document, declared by the single `Actor: <name>` line. Tags pending
//! before that line become the actor's own tags. Plain text lines anywhere after it are appended to
//! the blurb, and goals are collected in the order they are declared.
//!
//! Serialized shape:
//!
//! ```text
//! { "tags": [...], "name": "...", "blurb": [...], "goals": [...], "location": {...} }
//! ```
//!
//! `blurb` and `goals` are left out when empty.

use super::super::position::Position;
use super::goal::Goal;
use super::tag::Tag;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blurb: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub location: Position,
}

impl Actor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            tags: Vec::new(),
            name: name.into(),
            blurb: Vec::new(),
            goals: Vec::new(),
            location: Position::default(),
        }
    }

    pub fn at(mut self, location: Position) -> Self {
        self.location = location;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(Tag::new(tag));
        self
    }

    pub fn with_blurb(mut self, line: impl Into<String>) -> Self {
        self.blurb.push(line.into());
        self
    }

    pub fn with_goal(mut self, goal: Goal) -> Self {
        self.goals.push(goal);
        self
    }

    pub fn tag_names(&self) -> Vec<&str> {
        self.tags.iter().map(|t| t.name.as_str()).collect()
    }

    /// Goals carrying at least one tag, in document order
    pub fn tagged_goals(&self) -> impl Iterator<Item = &Goal> {
        self.goals.iter().filter(|g| g.is_tagged())
    }

    /// Goals without tags, in document order
    pub fn untagged_goals(&self) -> impl Iterator<Item = &Goal> {
        self.goals.iter().filter(|g| !g.is_tagged())
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Actor('{}', {} blurb line(s), {} goal(s))",
            self.name,
            self.blurb.len(),
            self.goals.len()
        )
    }
}
