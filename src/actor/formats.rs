//! Output formats
//!
//!     - [actor_writer]: the canonical actor file form, the inverse of parsing for the inputs the
//!       format guarantees to round-trip.
//!     - [line_writer]: indentation-aware line primitives the actor writer is built on.
//!     - [treeviz]: a debugging view of the lexer's indentation tree.
//!
//!     Structured dumps of the model (JSON, YAML) come straight from serde, the model types
//!     derive `Serialize`.
//!
//! Round Trip
//!
//!     For any actor that parsed successfully, writing it and parsing the result again gives the
//!     same name, tags, blurb, and goals with their tags, tagged goals first. The exception is an
//!     actor whose goals are all untagged, which loses them unless
//!     [WriterOptions::always_emit_goal_list] is set; [ActorWriter::dropped_goals] reports it.
//!     Untagged goal names that cannot sit in a `Goals:` block are written as `Goal:` lines.
//!     Comments are not preserved.

pub mod actor_writer;
pub mod error;
pub mod line_writer;
pub mod treeviz;

pub use actor_writer::{to_actor_string, write_actor, ActorWriter, WriterOptions};
pub use error::WriteError;
pub use line_writer::{LineWriter, DEFAULT_INDENT_WIDTH};
pub use treeviz::to_treeviz_str;
