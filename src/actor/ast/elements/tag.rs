//! Tag element
//!
//! A tag is a short label written as `@name` on a tag line. Tag lines are buffered by the parser
//! and attached to the next actor, goal or `Goals:` block. The name is stored without the `@`.

use super::super::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(default)]
    pub location: Position,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: Position::default(),
        }
    }

    pub fn at(mut self, location: Position) -> Self {
        self.location = location;
        self
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes_marker() {
        assert_eq!(Tag::new("smoke").to_string(), "@smoke");
    }

    #[test]
    fn test_at_sets_location() {
        let tag = Tag::new("smoke").at(Position::new(2, 4));
        assert_eq!(tag.location, Position::new(2, 4));
    }
}
