//! Indentation-aware line writer
//!
//! Low level primitives used by the [actor writer](super::actor_writer). The indentation is an
//! explicit counter, not derived from any tree structure: callers [indent](LineWriter::indent)
//! and [unindent](LineWriter::unindent) as they go. Each level is `indent_width` spaces.
//!
//! Keyword lines drop trailing spaces, so `Goals` with an empty value is written as `Goals:`.

use crate::actor::ast::Tag;
use std::io::{self, Write};

pub const DEFAULT_INDENT_WIDTH: usize = 4;

pub struct LineWriter<W: Write> {
    out: W,
    indentation: usize,
    indent_width: usize,
}

impl<W: Write> LineWriter<W> {
    pub fn new(out: W) -> Self {
        Self::with_indent_width(out, DEFAULT_INDENT_WIDTH)
    }

    pub fn with_indent_width(out: W, indent_width: usize) -> Self {
        Self {
            out,
            indentation: 0,
            indent_width,
        }
    }

    pub fn indent(&mut self) {
        self.indentation += 1;
    }

    /// Go back one level, never below zero.
    pub fn unindent(&mut self) {
        self.indentation = self.indentation.saturating_sub(1);
    }

    pub fn set_indentation(&mut self, indentation: usize) {
        self.indentation = indentation;
    }

    pub fn indentation(&self) -> usize {
        self.indentation
    }

    fn indent_string(&self) -> String {
        " ".repeat(self.indent_width * self.indentation)
    }

    /// Write an empty line. Blank lines carry no indentation.
    pub fn new_line(&mut self) -> io::Result<()> {
        self.out.write_all(b"\n")
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.out.write_all(line.as_bytes())?;
        self.new_line()
    }

    /// Write `@a @b ...` on one line. Writes nothing for an empty slice.
    pub fn write_tags(&mut self, tags: &[Tag]) -> io::Result<()> {
        if tags.is_empty() {
            return Ok(());
        }
        let joined = tags
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let line = format!("{}{}", self.indent_string(), joined);
        self.write_line(&line)
    }

    pub fn write_keyword(&mut self, keyword: &str, value: &str) -> io::Result<()> {
        let line = format!("{}{}: {}", self.indent_string(), keyword, value);
        self.write_line(line.trim_end_matches(' '))
    }

    pub fn write_blurb(&mut self, value: &str) -> io::Result<()> {
        let line = format!("{}{}", self.indent_string(), value);
        self.write_line(&line)
    }

    pub fn write_comment(&mut self, value: &str) -> io::Result<()> {
        let line = format!("{}# {}", self.indent_string(), value);
        self.write_line(&line)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
