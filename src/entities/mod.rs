//! Per-entity menus: the query/print glue around the menu engine.
//!
//! Each submodule exposes one `build_menu(selected)` function returning the
//! title and option set for its entity, in either the unselected (discovery)
//! or selected (detail) state. The top-level menu lists one entry per
//! entity; choosing one always starts that entity's menu with a fresh,
//! unselected context.

pub mod building;
pub mod course;
pub mod exam_event;
pub mod room;
pub mod student;

use std::io::{BufRead, Write};

use crate::menu::{MenuNode, MenuOption, MenuSet, Outcome};

/// The unconditional top-level menu: one entry per entity type
pub fn top_level_menu<R: BufRead + 'static, W: Write + 'static>() -> (String, MenuSet<R, W>) {
    (
        "Menu".to_string(),
        vec![
            (
                '1',
                MenuOption::new("Search Student", |_| {
                    Ok(Outcome::Advance(MenuNode::Student(None)))
                }),
            ),
            (
                '2',
                MenuOption::new("Search Course", |_| {
                    Ok(Outcome::Advance(MenuNode::Course(None)))
                }),
            ),
            (
                '3',
                MenuOption::new("Search Building", |_| {
                    Ok(Outcome::Advance(MenuNode::Building(None)))
                }),
            ),
            (
                '4',
                MenuOption::new("Search Room", |_| {
                    Ok(Outcome::Advance(MenuNode::Room(None)))
                }),
            ),
            (
                '5',
                MenuOption::new("Search Exam Event", |_| {
                    Ok(Outcome::Advance(MenuNode::ExamEvent(None)))
                }),
            ),
        ],
    )
}

/// The `[9] Back to main menu` entry shared by every entity menu
fn back_to_main<R: BufRead + 'static, W: Write + 'static>() -> (char, MenuOption<R, W>) {
    (
        '9',
        MenuOption::new("Back to main menu", |_| {
            Ok(Outcome::Advance(MenuNode::TopLevel))
        }),
    )
}
