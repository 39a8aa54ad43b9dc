//! Property-based tests for the write/parse round trip
//!
//! Generated actors mostly use names without `@`, `:` or `#`. Goal names may also take any form a
//! `Goal:` line can carry, which cannot always sit in a `Goals:` block.

use actor_lang::actor::ast::{Actor, Goal, Tag};
use actor_lang::actor::formats::{to_actor_string, ActorWriter, WriterOptions};
use actor_lang::actor::lexing::lex;
use actor_lang::actor::parsing::parse_actor;
use actor_lang::actor::testing::{semantic_view, written_order_view};
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 .,!?']{0,24}[A-Za-z0-9.!?]".prop_map(|s| s.trim().to_string())
}

fn tag_strategy() -> impl Strategy<Value = Tag> {
    "[A-Za-z][A-Za-z0-9_-]{0,10}".prop_map(Tag::new)
}

/// Anything a `Goal:` line yields: no `#`, no trailing space, may start with spaces or `@` and
/// contain colons.
fn goal_line_name_strategy() -> impl Strategy<Value = String> {
    "[ @]{0,2}[A-Za-z][A-Za-z0-9 :@]{0,16}[A-Za-z0-9]"
}

fn goal_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![3 => name_strategy(), 1 => goal_line_name_strategy()]
}

fn goal_strategy() -> impl Strategy<Value = Goal> {
    (goal_name_strategy(), prop::collection::vec(tag_strategy(), 0..3))
        .prop_map(|(name, tags)| Goal::new(name).with_tags(tags))
}

/// Actors whose goals are either all tagged or all untagged
fn uniform_actor_strategy() -> impl Strategy<Value = Actor> {
    (actor_strategy(), any::<bool>(), tag_strategy()).prop_map(|(mut actor, tagged, tag)| {
        for goal in &mut actor.goals {
            if tagged && goal.tags.is_empty() {
                goal.tags.push(tag.clone());
            } else if !tagged {
                goal.tags.clear();
            }
        }
        actor
    })
}

fn actor_strategy() -> impl Strategy<Value = Actor> {
    (
        name_strategy(),
        prop::collection::vec(tag_strategy(), 0..4),
        prop::collection::vec(name_strategy(), 0..4),
        prop::collection::vec(goal_strategy(), 0..6),
    )
        .prop_map(|(name, tags, blurb, goals)| {
            let mut actor = Actor::new(name);
            actor.tags = tags;
            actor.blurb = blurb;
            actor.goals = goals;
            actor
        })
}

fn writer(indent_width: usize) -> ActorWriter {
    ActorWriter::with_options(WriterOptions {
        indent_width,
        always_emit_goal_list: true,
        ..WriterOptions::default()
    })
}

proptest! {
    #[test]
    fn round_trip_preserves_semantics(actor in actor_strategy(), width in 1usize..6) {
        let output = writer(width).render(&actor).unwrap();
        let reparsed = parse_actor(&output).unwrap();

        prop_assert_eq!(semantic_view(&reparsed), written_order_view(&actor));
    }

    #[test]
    fn write_is_stable_after_one_round_trip(actor in actor_strategy()) {
        let writer = writer(4);
        let once = writer.render(&actor).unwrap();
        let twice = writer.render(&parse_actor(&once).unwrap()).unwrap();

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn default_writer_is_idempotent_for_uniform_goals(actor in uniform_actor_strategy()) {
        let once = to_actor_string(&actor).unwrap();
        let twice = to_actor_string(&parse_actor(&once).unwrap()).unwrap();

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn default_writer_round_trips_when_a_goal_is_tagged(
        mut actor in actor_strategy(),
        tagged in goal_strategy(),
        tag in tag_strategy(),
    ) {
        actor.goals.push(tagged.with_tags([tag]));
        let reparsed = parse_actor(&to_actor_string(&actor).unwrap()).unwrap();

        prop_assert_eq!(semantic_view(&reparsed), written_order_view(&actor));
    }

    #[test]
    fn lexer_keeps_every_non_blank_line(lines in prop::collection::vec("( {0,8})[a-z@#:]{0,6}", 0..40)) {
        let source = lines.join("\n");
        let tree = lex(&source);
        let expected = lines.iter().filter(|l| !l.trim().is_empty()).count();

        prop_assert_eq!(tree.len(), expected);
    }
}
