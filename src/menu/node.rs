//! The navigation graph's vocabulary: which menu is showing, and what an
//! invoked action tells the run loop to do next.

use crate::core::records::{Building, Course, ExamEvent, Room, Student};

/// One state of the navigation graph.
///
/// Each entity variant carries its own context: `None` renders the
/// discovery menu, `Some(record)` renders the detail menu scoped to that
/// record. Entering an entity from the top level always constructs
/// `Entity(None)`, so prior selections are never restored.
///
/// Exit is deliberately NOT a node — see [`Outcome::Exit`].
#[derive(Debug, Clone, PartialEq)]
pub enum MenuNode {
    TopLevel,
    Student(Option<Student>),
    Course(Option<Course>),
    Building(Option<Building>),
    Room(Option<Room>),
    ExamEvent(Option<ExamEvent>),
}

/// What an invoked menu action tells the run loop.
///
/// `Stay` covers both "you typed something invalid, try again" and "nothing
/// to show"; the action prints its own message first, so the two cases stay
/// distinguishable to the operator while the loop treats them the same way.
/// `Exit` is the unique terminal sentinel: the loop ends exactly when it
/// sees this tag, never on a label comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Show this node next
    Advance(MenuNode),
    /// Re-render the current node unchanged
    Stay,
    /// Terminate the run loop
    Exit,
}
