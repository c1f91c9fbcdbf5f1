//! The query interface the menu engine runs against.
//!
//! Every lookup the menus perform goes through [`Repository`]. The engine
//! never touches storage directly, so tests drive the menus with a stub and
//! the binary wires in the JSON-file implementation from
//! [`crate::core::dataset`].
//!
//! # Contract
//! - Lookups that match nothing return an empty `Vec` or `None`, never an
//!   error.
//! - Aggregates over zero rows return `Ok(None)`; callers print a
//!   "no data" line instead of crashing on a missing average.
//! - Errors are reserved for the store itself being broken.

use chrono::NaiveDate;

use crate::core::error::Result;
use crate::core::records::{Building, Course, ExamEvent, Room, Student};

pub trait Repository {
    // === Students ===
    fn students_by_first_name(&self, first_name: &str) -> Result<Vec<Student>>;
    fn list_students(&self) -> Result<Vec<Student>>;
    /// Courses the student is enrolled in
    fn courses_for_student(&self, student_id: u32) -> Result<Vec<Course>>;
    /// Mean grade over all of the student's assessments
    fn average_grade_for_student(&self, student_id: u32) -> Result<Option<f64>>;
    /// `(display name, mean grade)` per student that has at least one grade
    fn average_grade_per_student(&self) -> Result<Vec<(String, f64)>>;

    // === Courses ===
    fn courses_by_name(&self, course_name: &str) -> Result<Vec<Course>>;
    fn list_courses(&self) -> Result<Vec<Course>>;
    fn enrollment_count(&self, course_id: u32) -> Result<usize>;
    /// Mean grade over all assessments of the course's exam events
    fn average_grade_for_course(&self, course_id: u32) -> Result<Option<f64>>;
    /// Earliest exam date on or after `from`
    fn nearest_exam_date(&self, course_id: u32, from: NaiveDate) -> Result<Option<NaiveDate>>;
    /// Building hosting the course's exams, when any exam is scheduled
    fn building_for_course(&self, course_id: u32) -> Result<Option<Building>>;
    /// `(course name, enrolled student count)` per course
    fn enrollment_count_per_course(&self) -> Result<Vec<(String, usize)>>;

    // === Buildings ===
    fn buildings_by_name(&self, building_name: &str) -> Result<Vec<Building>>;
    fn list_buildings(&self) -> Result<Vec<Building>>;

    // === Rooms ===
    fn rooms_by_name(&self, room_name: &str) -> Result<Vec<Room>>;
    fn list_rooms(&self) -> Result<Vec<Room>>;
    fn rooms_in_building(&self, building_id: u32) -> Result<Vec<Room>>;
    /// Next exam event held in the room on or after `from`
    fn next_exam_in_room(&self, room_id: u32, from: NaiveDate) -> Result<Option<ExamEvent>>;

    // === Exam events ===
    fn exam_events_by_name(&self, exam_name: &str) -> Result<Vec<ExamEvent>>;
    fn exam_event_by_id(&self, exam_event_id: u32) -> Result<Option<ExamEvent>>;
    /// All exam events dated on or after `from`, soonest first
    fn upcoming_exam_events(&self, from: NaiveDate) -> Result<Vec<ExamEvent>>;
    fn course_for_exam_event(&self, exam_event_id: u32) -> Result<Option<Course>>;
    fn room_for_exam_event(&self, exam_event_id: u32) -> Result<Option<Room>>;
    /// `(min, max)` grade over the event's assessments
    fn grade_bounds_for_exam_event(&self, exam_event_id: u32) -> Result<Option<(f64, f64)>>;
    fn average_grade_for_exam_event(&self, exam_event_id: u32) -> Result<Option<f64>>;
}
