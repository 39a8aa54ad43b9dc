//! Element types of the document model
//!
//! | Element | Declared by       | Owns                      |
//! |---------|-------------------|---------------------------|
//! | Actor   | `Actor: <name>`   | tags, blurb lines, goals  |
//! | Goal    | `Goal: <name>` or an entry of a `Goals:` block | tags |
//! | Tag     | `@name` field on a tag line | nothing         |

pub mod actor;
pub mod goal;
pub mod tag;

pub use actor::Actor;
pub use goal::Goal;
pub use tag::Tag;
