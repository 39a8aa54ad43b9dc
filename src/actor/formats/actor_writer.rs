//! Canonical actor writer
//!
//! Emits an [Actor] in its canonical text form, in this order:
//!
//!     1. The actor's tags on one line, when there are any.
//!     2. `Actor: <name>`.
//!     3. One level deeper, every blurb line, then a blank line if any blurb was written.
//!     4. Every tagged goal: its tag line followed by `Goal: <name>`.
//!     5. When at least one tagged goal was written and untagged goals exist: a blank line,
//!        `Goals:`, and one level deeper one line per untagged goal.
//!
//! List-unsafe Names
//!
//!     A `Goals:` entry is read back as plain text, so a name that would tokenize as anything
//!     else (a colon making it a keyword line, a leading `@`, leading whitespace) cannot be listed.
//!     When any untagged goal has such a name, all untagged goals are written as bare
//!     `Goal: <name>` lines instead of the `Goals:` block. Goal order is the same either way.
//!
//! Untagged Goals
//!
//!     With the default options, untagged goals are only written when some goal is tagged. An
//!     actor whose goals are all untagged loses them on write. This matches the established
//!     canonical form; set [WriterOptions::always_emit_goal_list] to always write the
//!     `Goals:` block instead.
//!
//!     Writing tagged goals first means the output order can differ from the parsed order. Parsing
//!     the output again yields the same goals, grouped that way.

use super::error::WriteError;
use super::line_writer::{LineWriter, DEFAULT_INDENT_WIDTH};
use crate::actor::ast::{Actor, Goal};
use crate::actor::token::{tokenize, Token};
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterOptions {
    /// Spaces per indentation level
    pub indent_width: usize,
    /// Write the `Goals:` block even when no goal is tagged
    pub always_emit_goal_list: bool,
    /// Comment written as the very first line(s), one `# ` line per line of text
    pub header_comment: Option<String>,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            always_emit_goal_list: false,
            header_comment: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ActorWriter {
    options: WriterOptions,
}

impl ActorWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: WriterOptions) -> Self {
        Self { options }
    }

    pub fn write<W: Write>(&self, actor: &Actor, out: W) -> Result<(), WriteError> {
        let mut writer = LineWriter::with_indent_width(out, self.options.indent_width);

        if let Some(header) = &self.options.header_comment {
            for line in header.lines() {
                writer
                    .write_comment(line)
                    .map_err(WriteError::at("write header comment"))?;
            }
        }

        writer
            .write_tags(&actor.tags)
            .map_err(WriteError::at("write initial tags"))?;
        writer
            .write_keyword("Actor", &actor.name)
            .map_err(WriteError::at("write actor keyword"))?;

        writer.indent();

        for line in &actor.blurb {
            writer
                .write_blurb(line)
                .map_err(WriteError::at("write blurbs"))?;
        }
        if !actor.blurb.is_empty() {
            writer.new_line().map_err(WriteError::at("new line"))?;
        }

        let mut tagged = 0;
        for goal in actor.tagged_goals() {
            writer
                .write_tags(&goal.tags)
                .map_err(WriteError::at("write goal tags"))?;
            writer
                .write_keyword("Goal", &goal.name)
                .map_err(WriteError::at("write goal name"))?;
            tagged += 1;
        }

        let untagged: Vec<&Goal> = actor.untagged_goals().collect();
        if !untagged.is_empty() && (tagged > 0 || self.options.always_emit_goal_list) {
            if tagged > 0 {
                writer.new_line().map_err(WriteError::at("new line"))?;
            }

            if untagged.iter().all(|g| fits_goal_list(&g.name)) {
                writer
                    .write_keyword("Goals", "")
                    .map_err(WriteError::at("write goals keyword"))?;

                writer.indent();

                for goal in untagged {
                    writer
                        .write_blurb(&goal.name)
                        .map_err(WriteError::at("write goal name"))?;
                }
            } else {
                for goal in untagged {
                    writer
                        .write_keyword("Goal", &goal.name)
                        .map_err(WriteError::at("write goal name"))?;
                }
            }
        }

        writer.flush().map_err(WriteError::at("flush output"))?;

        tracing::debug!(
            actor = %actor.name,
            tagged_goals = tagged,
            untagged_goals = actor.goals.len() - tagged,
            "wrote actor"
        );
        Ok(())
    }

    /// Number of goals [write](Self::write) leaves out of the output for `actor`.
    ///
    /// Untagged goals are only written next to a tagged goal unless
    /// [WriterOptions::always_emit_goal_list] is set.
    pub fn dropped_goals(&self, actor: &Actor) -> usize {
        if self.options.always_emit_goal_list || actor.tagged_goals().next().is_some() {
            return 0;
        }
        actor.untagged_goals().count()
    }

    pub fn render(&self, actor: &Actor) -> Result<String, WriteError> {
        let mut buffer = Vec::new();
        self.write(actor, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

/// True when `name` reads back unchanged as an entry of a `Goals:` block.
fn fits_goal_list(name: &str) -> bool {
    matches!(tokenize(name).as_deref(), Ok([Token::Text(text)]) if text == name)
}

/// Write `actor` to `out` with the default options.
pub fn write_actor<W: Write>(actor: &Actor, out: W) -> Result<(), WriteError> {
    ActorWriter::new().write(actor, out)
}

/// Render `actor` in canonical form with the default options.
pub fn to_actor_string(actor: &Actor) -> Result<String, WriteError> {
    ActorWriter::new().render(actor)
}
