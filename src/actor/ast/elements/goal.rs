//! Goal element
//!
//! A goal is a named sub-item of an actor. It is declared either on its own with a
//! `Goal: <name>` line, picking up any pending tags, or as one entry of a `Goals:` block, in
//! which case every entry shares the tags pending before the block.

use super::super::position::Position;
use super::tag::Tag;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub name: String,
    #[serde(default)]
    pub location: Position,
}

impl Goal {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            tags: Vec::new(),
            name: name.into(),
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

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.extend(tags);
        self
    }

    pub fn is_tagged(&self) -> bool {
        !self.tags.is_empty()
    }

    pub fn tag_names(&self) -> Vec<&str> {
        self.tags.iter().map(|t| t.name.as_str()).collect()
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Goal('{}')", self.name)
    }
}
