use actor_lang::actor::token::{is_valid_tag_name, tokenize, Token, TokenizeError};
use rstest::rstest;

fn tags(names: &[&str]) -> Vec<Token> {
    names.iter().map(|n| Token::Tag(n.to_string())).collect()
}

#[rstest]
#[case::blank("", vec![])]
#[case::whitespace("   \t ", vec![])]
#[case::comment("# a comment", vec![])]
#[case::indented_comment("    # indented", vec![])]
#[case::bare_hash("#", vec![])]
#[case::text("Plain blurb", vec![Token::Text("Plain blurb".into())])]
#[case::text_trimmed("   padded text  ", vec![Token::Text("padded text".into())])]
#[case::text_with_comment("text # trailing", vec![Token::Text("text".into())])]
#[case::actor("Actor: Some actor", vec![Token::Actor("Some actor".into())])]
#[case::actor_no_space("Actor:Tight", vec![Token::Actor("Tight".into())])]
#[case::actor_empty("Actor:", vec![Token::Actor("".into())])]
#[case::actor_lowercase("actor: quiet", vec![Token::Actor("quiet".into())])]
#[case::goal("Goal: Do a thing", vec![Token::Goal("Do a thing".into())])]
#[case::goal_colon_in_value("Goal: Time: noon", vec![Token::Goal("Time: noon".into())])]
#[case::goals("Goals:", vec![Token::Goals("".into())])]
#[case::goals_value_kept("Goals: ignored", vec![Token::Goals("ignored".into())])]
#[case::single_tag("@tag1", tags(&["tag1"]))]
#[case::many_tags("@tag1   @tag-2 @Tag_3", tags(&["tag1", "tag-2", "Tag_3"]))]
#[case::tags_with_comment("@a @b # trailing", tags(&["a", "b"]))]
fn test_tokenize(#[case] line: &str, #[case] expected: Vec<Token>) {
    assert_eq!(tokenize(line).unwrap(), expected);
}

#[rstest]
#[case::lone_at("@tag @ tag", "@", 2)]
#[case::leading_digit("@1", "@1", 1)]
#[case::leading_underscore("@_", "@_", 1)]
#[case::bad_character("@ok @tag*1", "@tag*1", 2)]
#[case::missing_at("@ok plain", "plain", 2)]
fn test_invalid_tag(#[case] line: &str, #[case] field: &str, #[case] ordinal: usize) {
    assert_eq!(
        tokenize(line).unwrap_err(),
        TokenizeError::InvalidTag {
            field: field.to_string(),
            ordinal,
        }
    );
}

#[rstest]
#[case("Role: admin", "Role")]
#[case("Actors: many", "Actors")]
#[case("Due date: today", "Due date")]
fn test_unknown_keyword(#[case] line: &str, #[case] word: &str) {
    assert_eq!(
        tokenize(line).unwrap_err(),
        TokenizeError::UnknownKeyword(word.to_string())
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        tokenize("@tag @ tag").unwrap_err().to_string(),
        "Tag '@' (#2 on the line) is not valid"
    );
    assert_eq!(
        tokenize("Role: x").unwrap_err().to_string(),
        "Unrecognised keyword 'Role'"
    );
}

#[rstest]
#[case("a", true)]
#[case("Tag-with_mixed9", true)]
#[case("", false)]
#[case("9lives", false)]
#[case("-dash", false)]
#[case("has space", false)]
fn test_is_valid_tag_name(#[case] name: &str, #[case] valid: bool) {
    assert_eq!(is_valid_tag_name(name), valid);
}
