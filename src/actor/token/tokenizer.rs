//! Line tokenizer
//!
//! Classification runs in a fixed order, first match wins:
//!
//!     1. Strip the comment: everything from the first `#` to the end of the line, then the
//!        surrounding whitespace.
//!     2. Nothing left: no tokens.
//!     3. Starts with `@`: a tag line. Every whitespace separated field must be a valid tag.
//!     4. Looks like `Word: value`: a keyword line. The value is whatever follows the first colon
//!        and one optional whitespace character, and may be empty.
//!     5. Anything else is text.

use super::error::TokenizeError;
use super::Token;
use once_cell::sync::Lazy;
use regex::Regex;

static TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@([A-Za-z][A-Za-z0-9_-]*)$").expect("tag pattern is valid"));

static KEYWORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^:]+):\s?(.*)$").expect("keyword pattern is valid"));

/// Classify a single line.
pub fn tokenize(line: &str) -> Result<Vec<Token>, TokenizeError> {
    let content = strip_comment(line).trim();

    if content.is_empty() {
        return Ok(Vec::new());
    }

    if content.starts_with('@') {
        return tokenize_tags(content);
    }

    if let Some(captures) = KEYWORD_REGEX.captures(content) {
        let word = &captures[1];
        let value = captures.get(2).map_or("", |m| m.as_str()).to_string();
        return keyword_token(word, value).map(|token| vec![token]);
    }

    Ok(vec![Token::Text(content.to_string())])
}

/// True when `name` (without the `@`) is usable as a tag.
pub fn is_valid_tag_name(name: &str) -> bool {
    TAG_REGEX.is_match(&format!("@{}", name))
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(index) => &line[..index],
        None => line,
    }
}

fn tokenize_tags(content: &str) -> Result<Vec<Token>, TokenizeError> {
    content
        .split_whitespace()
        .enumerate()
        .map(|(index, field)| match TAG_REGEX.captures(field) {
            Some(captures) => Ok(Token::Tag(captures[1].to_string())),
            None => Err(TokenizeError::InvalidTag {
                field: field.to_string(),
                ordinal: index + 1,
            }),
        })
        .collect()
}

fn keyword_token(word: &str, value: String) -> Result<Token, TokenizeError> {
    match word.to_lowercase().as_str() {
        "actor" => Ok(Token::Actor(value)),
        "goal" => Ok(Token::Goal(value)),
        "goals" => Ok(Token::Goals(value)),
        _ => Err(TokenizeError::UnknownKeyword(word.to_string())),
    }
}
