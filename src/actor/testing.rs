//! Testing helpers
//!
//! Shared factories and comparison helpers for unit and integration tests.
//!
//! Comparing actors field by field is rarely what a test wants: positions differ between a built
//! actor and a parsed one, and goal order changes through the writer. [semantic_view] reduces an
//! actor to what a round trip has to preserve.

use crate::actor::ast::{Actor, Goal};

/// The document used throughout the test suite.
pub const VALID_ACTOR_SOURCE: &str = "\
@tag1 @tag2
Actor: Valid actor
    Description line
    Second blurb line

    Goals:
        Goal number 1
        Goal number 2

    @tag3 @tag4
    Goal: Goal number 3
";

/// An actor with tags, blurb, one tagged and two untagged goals.
pub fn sample_actor() -> Actor {
    Actor::new("Mock actor")
        .with_tag("tag1")
        .with_tag("tag2")
        .with_blurb("Blurb line 1")
        .with_blurb("BLurb line 2")
        .with_goal(Goal::new("Goal 1").with_tag("tag3").with_tag("tag4"))
        .with_goal(Goal::new("Goal 2"))
        .with_goal(Goal::new("Goal 3"))
}

/// Name and tag names of a goal
pub type GoalView = (String, Vec<String>);

/// Actor name, tag names, blurb and goals, ignoring positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticView {
    pub name: String,
    pub tags: Vec<String>,
    pub blurb: Vec<String>,
    pub goals: Vec<GoalView>,
}

pub fn semantic_view(actor: &Actor) -> SemanticView {
    SemanticView {
        name: actor.name.clone(),
        tags: actor.tags.iter().map(|t| t.name.clone()).collect(),
        blurb: actor.blurb.clone(),
        goals: actor.goals.iter().map(goal_view).collect(),
    }
}

/// Same as [semantic_view] with tagged goals first, the order the writer emits them in.
pub fn written_order_view(actor: &Actor) -> SemanticView {
    let mut view = semantic_view(actor);
    view.goals = actor
        .tagged_goals()
        .chain(actor.untagged_goals())
        .map(goal_view)
        .collect();
    view
}

fn goal_view(goal: &Goal) -> GoalView {
    (
        goal.name.clone(),
        goal.tags.iter().map(|t| t.name.clone()).collect(),
    )
}
