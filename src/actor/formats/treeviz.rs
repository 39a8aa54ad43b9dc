//! Treeviz formatter for the indentation tree
//!
//! One line per lexed line, nesting drawn with box connectors, so what the lexer grouped under
//! what can be checked at a glance:
//!
//! ```text
//! ├─ @ 02:00 @tag1 @tag2
//! └─ ⧉ 03:00 Actor: Valid actor
//!    ├─ ¶ 04:04 Description line
//!    └─ ☰ 06:04 Goals:
//!       └─ ¶ 07:08 Goal number 1
//! ```
//!
//! Icons
//!     Tag line: @
//!     Actor: ⧉
//!     Goal: ◎
//!     Goals: ☰
//!     Text: ¶
//!     Comment: #
//!     Line that fails to tokenize: ✗

use crate::actor::lexing::{LineRef, LineTree};
use crate::actor::token::{tokenize, Token};

const MAX_LABEL_CHARS: usize = 40;

fn shorten(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut short = s.chars().take(max_chars).collect::<String>();
        short.push_str("...");
        short
    } else {
        s.to_string()
    }
}

fn icon_for(content: &str) -> &'static str {
    match tokenize(content) {
        Ok(tokens) => match tokens.first() {
            None => "#",
            Some(Token::Tag(_)) => "@",
            Some(Token::Actor(_)) => "⧉",
            Some(Token::Goal(_)) => "◎",
            Some(Token::Goals(_)) => "☰",
            Some(Token::Text(_)) => "¶",
        },
        Err(_) => "✗",
    }
}

fn format_line(line: LineRef<'_>, prefix: &str, is_last: bool, output: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} {} {:02}:{:02} {}\n",
        prefix,
        connector,
        icon_for(line.content()),
        line.line(),
        line.column(),
        shorten(line.content(), MAX_LABEL_CHARS)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "   " } else { "│  " });
    let count = line.children().len();
    for (index, child) in line.children().enumerate() {
        format_line(child, &child_prefix, index + 1 == count, output);
    }
}

/// Render the whole tree.
pub fn to_treeviz_str(tree: &LineTree) -> String {
    let mut output = String::new();
    let count = tree.roots().len();
    for (index, root) in tree.roots().enumerate() {
        format_line(root, "", index + 1 == count, &mut output);
    }
    output
}
