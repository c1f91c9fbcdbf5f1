//! The interactive session: dispatcher and run loop.
//!
//! A [`Session`] owns the repository, a line-oriented reader, and a writer.
//! [`Session::run`] walks the navigation graph starting at the top-level
//! menu: render the current node's options, read one line, invoke the chosen
//! action, and follow the returned [`Outcome`]. Everything is synchronous
//! and single-threaded; the only blocking points are the reader and the
//! repository.
//!
//! # Dispatcher rules
//! - `[0] Exit` is appended to every option set before rendering, unless the
//!   set already binds `'0'` (the injection is idempotent).
//! - An input that matches no key prints one error line and re-renders the
//!   same options — an explicit loop, not recursion, so a patient operator
//!   cannot grow the stack.
//! - End-of-input on the reader counts as choosing Exit, so scripted
//!   sessions terminate cleanly when their input runs dry.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::core::error::Result;
use crate::core::output::{
    format_invalid_choice, format_match_line, format_menu_line, format_section_header,
};
use crate::core::repository::Repository;
use crate::entities;
use crate::menu::node::{MenuNode, Outcome};
use crate::menu::option::{MenuOption, MenuSet};

pub struct Session<R, W> {
    repo: Box<dyn Repository>,
    input: R,
    out: W,
    today: NaiveDate,
}

impl<R: BufRead + 'static, W: Write + 'static> Session<R, W> {
    /// Create a session over a repository; "today" is the local date
    pub fn new(repo: Box<dyn Repository>, input: R, out: W) -> Self {
        Self::with_today(repo, input, out, chrono::Local::now().date_naive())
    }

    /// Create a session with a fixed "today", for deterministic date queries
    pub fn with_today(repo: Box<dyn Repository>, input: R, out: W, today: NaiveDate) -> Self {
        Self {
            repo,
            input,
            out,
            today,
        }
    }

    pub fn repo(&self) -> &dyn Repository {
        self.repo.as_ref()
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// The session's writer; scripted sessions inspect it after running
    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Walk the navigation graph until Exit.
    ///
    /// `Stay` leaves the current node untouched and re-renders it, which is
    /// how actions signal "nothing to show" or "try again" without building
    /// a new node. The repository is released when the session drops.
    pub fn run(&mut self) -> Result<()> {
        let mut current = MenuNode::TopLevel;
        loop {
            match self.dispatch(&current)? {
                Outcome::Exit => {
                    self.say("\nGoodbye!")?;
                    break;
                }
                Outcome::Advance(next) => current = next,
                Outcome::Stay => {}
            }
        }
        Ok(())
    }

    /// Render one node of the navigation graph and invoke the chosen action
    pub fn dispatch(&mut self, node: &MenuNode) -> Result<Outcome> {
        let (title, options) = match node {
            MenuNode::TopLevel => entities::top_level_menu(),
            MenuNode::Student(selected) => entities::student::build_menu(selected.as_ref()),
            MenuNode::Course(selected) => entities::course::build_menu(selected.as_ref()),
            MenuNode::Building(selected) => entities::building::build_menu(selected.as_ref()),
            MenuNode::Room(selected) => entities::room::build_menu(selected.as_ref()),
            MenuNode::ExamEvent(selected) => entities::exam_event::build_menu(selected.as_ref()),
        };
        self.render_and_dispatch(&title, options)
    }

    /// Print the options, read a key, run the matching action.
    ///
    /// Invalid keys loop back to a fresh render of the same set; the Exit
    /// entry is injected at most once, before the loop.
    pub fn render_and_dispatch(&mut self, title: &str, mut options: MenuSet<R, W>) -> Result<Outcome> {
        if !options.iter().any(|(key, _)| *key == '0') {
            options.push(('0', MenuOption::new("Exit", |_| Ok(Outcome::Exit))));
        }

        loop {
            self.say(&format_section_header(title))?;
            for (key, option) in &options {
                self.say(&format_menu_line(*key, option.label()))?;
            }

            let line = match self.prompt("What's your choice?")? {
                Some(line) => line,
                None => return Ok(Outcome::Exit),
            };

            match options
                .iter()
                .position(|(key, _)| key.to_string() == line)
            {
                Some(position) => {
                    let (_, option) = options.remove(position);
                    return option.invoke(self);
                }
                None => {
                    self.say(&format_invalid_choice())?;
                    continue;
                }
            }
        }
    }

    /// Print a numbered disambiguation list and read a 1-based index.
    ///
    /// Returns `None` when the operator picks an out-of-range or malformed
    /// index (after printing an error line) or when input ends; the caller
    /// leaves its context unset in that case.
    pub fn select_from_matches<T: Clone>(
        &mut self,
        matches: &[T],
        describe: impl Fn(&T) -> String,
    ) -> Result<Option<T>> {
        for (i, record) in matches.iter().enumerate() {
            self.say(&format_match_line(i + 1, &describe(record)))?;
        }

        let line = match self.prompt("Select by number:")? {
            Some(line) => line,
            None => return Ok(None),
        };

        match line.parse::<usize>() {
            Ok(choice) if (1..=matches.len()).contains(&choice) => {
                Ok(Some(matches[choice - 1].clone()))
            }
            _ => {
                self.say(&format_invalid_choice())?;
                Ok(None)
            }
        }
    }

    /// Write one line to the session's output
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    /// Write a prompt and read one trimmed line; `None` on end of input
    pub fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.out, "{message} ")?;
        self.out.flush()?;

        let mut line = String::new();
        let bytes_read = self.input.read_line(&mut line)?;
        if bytes_read == 0 {
            log::debug!("Input stream closed, treating as Exit");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
