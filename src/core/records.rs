//! Record types for the academic dataset.
//!
//! These mirror the tables of the grades schema: students, courses,
//! buildings, rooms, exam events, plus the two link tables (enrollments and
//! assessments) that never get a menu of their own.
//!
//! # Public API
//! - [`Student`], [`Course`], [`Building`], [`Room`], [`ExamEvent`]: the five
//!   entity types the operator can navigate
//! - [`Enrollment`], [`Assessment`]: dataset-internal link rows
//!
//! All types serialize to/from JSON so a whole dataset can live in one file.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub student_id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
}

impl Student {
    /// Full display name, as shown in menus and disambiguation lists
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whole years of age as of `today`
    pub fn age(&self, today: NaiveDate) -> i32 {
        let birth = self.date_of_birth;
        let mut age = today.year() - birth.year();
        if (today.month(), today.day()) < (birth.month(), birth.day()) {
            age -= 1;
        }
        age
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub course_id: u32,
    pub course_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub building_id: u32,
    pub building_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub room_id: u32,
    pub room_name: String,
    pub building_id: u32,
    pub capacity: u32,
    pub has_projector: bool,
    pub has_computers: bool,
    pub is_accessible: bool,
}

impl Room {
    /// Comma-separated equipment list, or `None` when the room is bare
    pub fn equipment(&self) -> Option<String> {
        let mut items = Vec::new();
        if self.has_projector {
            items.push("projector");
        }
        if self.has_computers {
            items.push("computers");
        }
        if items.is_empty() {
            None
        } else {
            Some(items.join(", "))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamEvent {
    pub exam_event_id: u32,
    pub exam_name: String,
    pub course_id: u32,
    pub room_id: u32,
    pub date: NaiveDate,
}

/// Links a student to a course they attend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub student_id: u32,
    pub course_id: u32,
}

/// A single graded result of a student at an exam event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub student_id: u32,
    pub exam_event_id: u32,
    pub grade: f64,
}
