//! The hierarchical menu engine.
//!
//! This is the navigation core: [`MenuNode`] names the states of the
//! navigation graph, [`MenuOption`] binds a key and label to a one-shot
//! action, and [`Session`] renders nodes, routes input, and runs the loop
//! until [`Outcome::Exit`].

pub mod node;
pub mod option;
pub mod session;

pub use node::{MenuNode, Outcome};
pub use option::{Action, MenuOption, MenuSet};
pub use session::Session;
