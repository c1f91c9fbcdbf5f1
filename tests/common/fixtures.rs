//! Test data generation utilities and predefined scenarios
//!
//! Provides canned datasets covering the common navigation scenarios
//! (single match, ambiguous match, empty tables) and a scripted-session
//! runner that feeds a fixed input sequence and returns the rendered output.

#![allow(dead_code)]

use std::io::Cursor;

use chrono::NaiveDate;
use gradebook_navigator::core::{
    Assessment, Building, Course, Dataset, Enrollment, ExamEvent, JsonRepository, Room, Student,
};
use gradebook_navigator::menu::Session;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// The fixed "today" every scripted session runs at
pub fn today() -> NaiveDate {
    date(2026, 8, 27)
}

/// Scenario: one student named Doe, one course, one scheduled exam.
/// Covers the single-match search path and the per-entity detail actions.
pub fn single_student_dataset() -> Dataset {
    Dataset {
        students: vec![Student {
            student_id: 1,
            first_name: "Doe".to_string(),
            last_name: "Jensen".to_string(),
            email: "doe.jensen@example.edu".to_string(),
            date_of_birth: date(2001, 2, 14),
        }],
        courses: vec![Course {
            course_id: 10,
            course_name: "Databases".to_string(),
        }],
        buildings: vec![Building {
            building_id: 20,
            building_name: "Main".to_string(),
        }],
        rooms: vec![Room {
            room_id: 30,
            room_name: "B104".to_string(),
            building_id: 20,
            capacity: 60,
            has_projector: true,
            has_computers: false,
            is_accessible: true,
        }],
        exam_events: vec![ExamEvent {
            exam_event_id: 40,
            exam_name: "Midterm".to_string(),
            course_id: 10,
            room_id: 30,
            date: date(2026, 9, 10),
        }],
        enrollments: vec![Enrollment {
            student_id: 1,
            course_id: 10,
        }],
        assessments: vec![Assessment {
            student_id: 1,
            exam_event_id: 40,
            grade: 15.0,
        }],
    }
}

/// Scenario: three students sharing the first name Ana, for disambiguation
pub fn ambiguous_students_dataset() -> Dataset {
    let mut data = single_student_dataset();
    data.students = vec![
        student(2, "Ana", "Almeida", "ana.almeida@example.edu"),
        student(3, "Ana", "Barros", "ana.barros@example.edu"),
        student(4, "Ana", "Costa", "ana.costa@example.edu"),
    ];
    data.enrollments = vec![Enrollment {
        student_id: 2,
        course_id: 10,
    }];
    data.assessments = vec![Assessment {
        student_id: 2,
        exam_event_id: 40,
        grade: 12.5,
    }];
    data
}

/// Scenario: courses exist but nothing is graded or scheduled
pub fn ungraded_dataset() -> Dataset {
    let mut data = single_student_dataset();
    data.assessments.clear();
    data.exam_events.clear();
    data
}

fn student(id: u32, first: &str, last: &str, email: &str) -> Student {
    Student {
        student_id: id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        date_of_birth: date(2000, 1, 1),
    }
}

/// Run a whole session against the dataset, feeding one input line per
/// script entry, and return everything the session printed. The script does
/// not need a trailing "0": end of input counts as Exit.
pub fn run_script(data: Dataset, script: &[&str]) -> String {
    colored::control::set_override(false);

    let repo = JsonRepository::from_dataset(data).expect("fixture dataset must validate");
    let mut input = script.join("\n");
    input.push('\n');

    let mut session = Session::with_today(
        Box::new(repo),
        Cursor::new(input.into_bytes()),
        Vec::new(),
        today(),
    );
    session.run().expect("scripted session must not error");
    String::from_utf8_lossy(session.writer()).to_string()
}
