//! A single invokable menu entry.
//!
//! A [`MenuOption`] pairs a fixed human-readable label with a one-shot
//! action. Options are collected into an ordered association list
//! ([`MenuSet`]) keyed by a single character; order in the list is render
//! order, so menus always print the way they were declared.

use std::io::{BufRead, Write};

use crate::core::error::Result;
use crate::menu::node::Outcome;
use crate::menu::session::Session;

/// One-shot menu action: runs against the session, returns where to go next
pub type Action<R, W> = Box<dyn FnOnce(&mut Session<R, W>) -> Result<Outcome>>;

/// Ordered association list of key → option; render order is list order
pub type MenuSet<R, W> = Vec<(char, MenuOption<R, W>)>;

pub struct MenuOption<R, W> {
    label: String,
    action: Action<R, W>,
}

impl<R: BufRead + 'static, W: Write + 'static> MenuOption<R, W> {
    pub fn new(
        label: impl Into<String>,
        action: impl FnOnce(&mut Session<R, W>) -> Result<Outcome> + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            action: Box::new(action),
        }
    }

    /// The fixed description shown next to the key; never dynamic data
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Consume the option and run its action
    pub fn invoke(self, session: &mut Session<R, W>) -> Result<Outcome> {
        (self.action)(session)
    }
}
