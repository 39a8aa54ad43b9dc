//! Document model for actor files
//!
//!     A document describes exactly one [Actor](elements::Actor). The actor owns its tags, its
//!     blurb lines and its goals; goals in turn own their tags. Nothing in the model exists on
//!     its own: a tag is always attached to an actor or a goal, and a goal always belongs to an
//!     actor.
//!
//! Locations
//!
//!     Every element records the [Position] of the line that declared it. Lines are 1-based,
//!     columns are the raw indentation width of the line (in characters, not levels). Elements
//!     built programmatically carry the default (0, 0) position.
//!
//! Ordering
//!
//!     Blurb lines and goals keep insertion order. Goal order is document order of creation,
//!     which is not necessarily the order the writer emits them in (tagged goals are always
//!     written first). See [formats](crate::actor::formats).

pub mod elements;
pub mod position;

pub use elements::{Actor, Goal, Tag};
pub use position::Position;
