//! JSON-file backed implementation of [`Repository`].
//!
//! The whole dataset lives in a single JSON document with one array per
//! table. [`JsonRepository::open`] reads and validates it once; every query
//! afterwards is an in-memory scan. Datasets are small (one faculty's worth
//! of records), so no indexing is attempted.
//!
//! # Load-time validation
//! Referential integrity is checked when the file is opened: every foreign
//! id must resolve. A dangling id is reported as a query-class error right
//! away rather than surfacing as a confusing empty lookup mid-session.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::error::{NavigatorError, Result};
use crate::core::records::{Assessment, Building, Course, Enrollment, ExamEvent, Room, Student};
use crate::core::repository::Repository;

/// One JSON document holding every table of the grades schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub buildings: Vec<Building>,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub exam_events: Vec<ExamEvent>,
    #[serde(default)]
    pub enrollments: Vec<Enrollment>,
    #[serde(default)]
    pub assessments: Vec<Assessment>,
}

impl Dataset {
    /// Verify that every foreign id in the dataset resolves
    pub fn validate(&self) -> Result<()> {
        let student_ids: Vec<u32> = self.students.iter().map(|s| s.student_id).collect();
        let course_ids: Vec<u32> = self.courses.iter().map(|c| c.course_id).collect();
        let building_ids: Vec<u32> = self.buildings.iter().map(|b| b.building_id).collect();
        let room_ids: Vec<u32> = self.rooms.iter().map(|r| r.room_id).collect();
        let event_ids: Vec<u32> = self.exam_events.iter().map(|e| e.exam_event_id).collect();

        for room in &self.rooms {
            if !building_ids.contains(&room.building_id) {
                return Err(NavigatorError::dangling_reference(
                    "room",
                    "building",
                    room.building_id,
                ));
            }
        }
        for event in &self.exam_events {
            if !course_ids.contains(&event.course_id) {
                return Err(NavigatorError::dangling_reference(
                    "exam_event",
                    "course",
                    event.course_id,
                ));
            }
            if !room_ids.contains(&event.room_id) {
                return Err(NavigatorError::dangling_reference(
                    "exam_event",
                    "room",
                    event.room_id,
                ));
            }
        }
        for enrollment in &self.enrollments {
            if !student_ids.contains(&enrollment.student_id) {
                return Err(NavigatorError::dangling_reference(
                    "enrollment",
                    "student",
                    enrollment.student_id,
                ));
            }
            if !course_ids.contains(&enrollment.course_id) {
                return Err(NavigatorError::dangling_reference(
                    "enrollment",
                    "course",
                    enrollment.course_id,
                ));
            }
        }
        for assessment in &self.assessments {
            if !student_ids.contains(&assessment.student_id) {
                return Err(NavigatorError::dangling_reference(
                    "assessment",
                    "student",
                    assessment.student_id,
                ));
            }
            if !event_ids.contains(&assessment.exam_event_id) {
                return Err(NavigatorError::dangling_reference(
                    "assessment",
                    "exam_event",
                    assessment.exam_event_id,
                ));
            }
        }
        Ok(())
    }
}

/// Read-only repository over a dataset loaded from a JSON file
#[derive(Debug)]
pub struct JsonRepository {
    data: Dataset,
    path: PathBuf,
}

impl JsonRepository {
    /// Open, parse and validate a dataset file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Opening dataset file: {}", path.display());

        let content = fs::read_to_string(path).map_err(|e| {
            log::error!("Failed to read dataset '{}': {}", path.display(), e);
            NavigatorError::dataset_unreachable(path, e)
        })?;

        let data: Dataset = serde_json::from_str(&content).map_err(|e| {
            log::error!("Failed to parse dataset '{}': {}", path.display(), e);
            NavigatorError::dataset_malformed(path, e)
        })?;

        data.validate()?;

        log::debug!(
            "Loaded dataset: {} students, {} courses, {} buildings, {} rooms, {} exam events",
            data.students.len(),
            data.courses.len(),
            data.buildings.len(),
            data.rooms.len(),
            data.exam_events.len()
        );

        Ok(Self {
            data,
            path: path.to_path_buf(),
        })
    }

    /// Build a repository directly from an in-memory dataset
    pub fn from_dataset(data: Dataset) -> Result<Self> {
        data.validate()?;
        Ok(Self {
            data,
            path: PathBuf::from("<memory>"),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn grades_for_student(&self, student_id: u32) -> Vec<f64> {
        self.data
            .assessments
            .iter()
            .filter(|a| a.student_id == student_id)
            .map(|a| a.grade)
            .collect()
    }

    fn grades_for_exam_event(&self, exam_event_id: u32) -> Vec<f64> {
        self.data
            .assessments
            .iter()
            .filter(|a| a.exam_event_id == exam_event_id)
            .map(|a| a.grade)
            .collect()
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

impl Repository for JsonRepository {
    fn students_by_first_name(&self, first_name: &str) -> Result<Vec<Student>> {
        Ok(self
            .data
            .students
            .iter()
            .filter(|s| s.first_name.eq_ignore_ascii_case(first_name))
            .cloned()
            .collect())
    }

    fn list_students(&self) -> Result<Vec<Student>> {
        let mut students = self.data.students.clone();
        students.sort_by(|a, b| a.last_name.cmp(&b.last_name));
        Ok(students)
    }

    fn courses_for_student(&self, student_id: u32) -> Result<Vec<Course>> {
        Ok(self
            .data
            .enrollments
            .iter()
            .filter(|e| e.student_id == student_id)
            .filter_map(|e| {
                self.data
                    .courses
                    .iter()
                    .find(|c| c.course_id == e.course_id)
            })
            .cloned()
            .collect())
    }

    fn average_grade_for_student(&self, student_id: u32) -> Result<Option<f64>> {
        Ok(mean(&self.grades_for_student(student_id)))
    }

    fn average_grade_per_student(&self) -> Result<Vec<(String, f64)>> {
        let mut rows = Vec::new();
        for student in &self.data.students {
            if let Some(avg) = mean(&self.grades_for_student(student.student_id)) {
                rows.push((student.display_name(), avg));
            }
        }
        Ok(rows)
    }

    fn courses_by_name(&self, course_name: &str) -> Result<Vec<Course>> {
        Ok(self
            .data
            .courses
            .iter()
            .filter(|c| c.course_name.eq_ignore_ascii_case(course_name))
            .cloned()
            .collect())
    }

    fn list_courses(&self) -> Result<Vec<Course>> {
        let mut courses = self.data.courses.clone();
        courses.sort_by(|a, b| a.course_name.cmp(&b.course_name));
        Ok(courses)
    }

    fn enrollment_count(&self, course_id: u32) -> Result<usize> {
        Ok(self
            .data
            .enrollments
            .iter()
            .filter(|e| e.course_id == course_id)
            .count())
    }

    fn average_grade_for_course(&self, course_id: u32) -> Result<Option<f64>> {
        let grades: Vec<f64> = self
            .data
            .exam_events
            .iter()
            .filter(|e| e.course_id == course_id)
            .flat_map(|e| self.grades_for_exam_event(e.exam_event_id))
            .collect();
        Ok(mean(&grades))
    }

    fn nearest_exam_date(&self, course_id: u32, from: NaiveDate) -> Result<Option<NaiveDate>> {
        Ok(self
            .data
            .exam_events
            .iter()
            .filter(|e| e.course_id == course_id && e.date >= from)
            .map(|e| e.date)
            .min())
    }

    fn building_for_course(&self, course_id: u32) -> Result<Option<Building>> {
        let room_id = match self
            .data
            .exam_events
            .iter()
            .find(|e| e.course_id == course_id)
        {
            Some(event) => event.room_id,
            None => return Ok(None),
        };
        let building_id = match self.data.rooms.iter().find(|r| r.room_id == room_id) {
            Some(room) => room.building_id,
            None => return Ok(None),
        };
        Ok(self
            .data
            .buildings
            .iter()
            .find(|b| b.building_id == building_id)
            .cloned())
    }

    fn enrollment_count_per_course(&self) -> Result<Vec<(String, usize)>> {
        let mut rows = Vec::new();
        for course in &self.data.courses {
            let count = self.enrollment_count(course.course_id)?;
            rows.push((course.course_name.clone(), count));
        }
        Ok(rows)
    }

    fn buildings_by_name(&self, building_name: &str) -> Result<Vec<Building>> {
        Ok(self
            .data
            .buildings
            .iter()
            .filter(|b| b.building_name.eq_ignore_ascii_case(building_name))
            .cloned()
            .collect())
    }

    fn list_buildings(&self) -> Result<Vec<Building>> {
        let mut buildings = self.data.buildings.clone();
        buildings.sort_by(|a, b| a.building_name.cmp(&b.building_name));
        Ok(buildings)
    }

    fn rooms_by_name(&self, room_name: &str) -> Result<Vec<Room>> {
        Ok(self
            .data
            .rooms
            .iter()
            .filter(|r| r.room_name.eq_ignore_ascii_case(room_name))
            .cloned()
            .collect())
    }

    fn list_rooms(&self) -> Result<Vec<Room>> {
        let mut rooms = self.data.rooms.clone();
        rooms.sort_by(|a, b| a.room_name.cmp(&b.room_name));
        Ok(rooms)
    }

    fn rooms_in_building(&self, building_id: u32) -> Result<Vec<Room>> {
        Ok(self
            .data
            .rooms
            .iter()
            .filter(|r| r.building_id == building_id)
            .cloned()
            .collect())
    }

    fn next_exam_in_room(&self, room_id: u32, from: NaiveDate) -> Result<Option<ExamEvent>> {
        Ok(self
            .data
            .exam_events
            .iter()
            .filter(|e| e.room_id == room_id && e.date >= from)
            .min_by_key(|e| e.date)
            .cloned())
    }

    fn exam_events_by_name(&self, exam_name: &str) -> Result<Vec<ExamEvent>> {
        Ok(self
            .data
            .exam_events
            .iter()
            .filter(|e| e.exam_name.eq_ignore_ascii_case(exam_name))
            .cloned()
            .collect())
    }

    fn exam_event_by_id(&self, exam_event_id: u32) -> Result<Option<ExamEvent>> {
        Ok(self
            .data
            .exam_events
            .iter()
            .find(|e| e.exam_event_id == exam_event_id)
            .cloned())
    }

    fn upcoming_exam_events(&self, from: NaiveDate) -> Result<Vec<ExamEvent>> {
        let mut events: Vec<ExamEvent> = self
            .data
            .exam_events
            .iter()
            .filter(|e| e.date >= from)
            .cloned()
            .collect();
        events.sort_by_key(|e| e.date);
        Ok(events)
    }

    fn course_for_exam_event(&self, exam_event_id: u32) -> Result<Option<Course>> {
        let event = match self.exam_event_by_id(exam_event_id)? {
            Some(event) => event,
            None => return Ok(None),
        };
        Ok(self
            .data
            .courses
            .iter()
            .find(|c| c.course_id == event.course_id)
            .cloned())
    }

    fn room_for_exam_event(&self, exam_event_id: u32) -> Result<Option<Room>> {
        let event = match self.exam_event_by_id(exam_event_id)? {
            Some(event) => event,
            None => return Ok(None),
        };
        Ok(self
            .data
            .rooms
            .iter()
            .find(|r| r.room_id == event.room_id)
            .cloned())
    }

    fn grade_bounds_for_exam_event(&self, exam_event_id: u32) -> Result<Option<(f64, f64)>> {
        let grades = self.grades_for_exam_event(exam_event_id);
        if grades.is_empty() {
            return Ok(None);
        }
        let min = grades.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = grades.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        Ok(Some((min, max)))
    }

    fn average_grade_for_exam_event(&self, exam_event_id: u32) -> Result<Option<f64>> {
        Ok(mean(&self.grades_for_exam_event(exam_event_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_dataset() -> Dataset {
        Dataset {
            students: vec![
                Student {
                    student_id: 1,
                    first_name: "Jane".to_string(),
                    last_name: "Doe".to_string(),
                    email: "jane@example.edu".to_string(),
                    date_of_birth: date(2000, 5, 1),
                },
                Student {
                    student_id: 2,
                    first_name: "John".to_string(),
                    last_name: "Ames".to_string(),
                    email: "john@example.edu".to_string(),
                    date_of_birth: date(1999, 8, 20),
                },
            ],
            courses: vec![
                Course {
                    course_id: 10,
                    course_name: "Databases".to_string(),
                },
                Course {
                    course_id: 11,
                    course_name: "Algorithms".to_string(),
                },
            ],
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
            exam_events: vec![
                ExamEvent {
                    exam_event_id: 40,
                    exam_name: "Midterm".to_string(),
                    course_id: 10,
                    room_id: 30,
                    date: date(2026, 9, 10),
                },
                ExamEvent {
                    exam_event_id: 41,
                    exam_name: "Final".to_string(),
                    course_id: 10,
                    room_id: 30,
                    date: date(2026, 12, 15),
                },
            ],
            enrollments: vec![
                Enrollment {
                    student_id: 1,
                    course_id: 10,
                },
                Enrollment {
                    student_id: 2,
                    course_id: 10,
                },
            ],
            assessments: vec![
                Assessment {
                    student_id: 1,
                    exam_event_id: 40,
                    grade: 16.0,
                },
                Assessment {
                    student_id: 2,
                    exam_event_id: 40,
                    grade: 12.0,
                },
            ],
        }
    }

    #[test]
    fn test_students_by_first_name_case_insensitive() {
        let repo = JsonRepository::from_dataset(sample_dataset()).unwrap();
        let found = repo.students_by_first_name("jane").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].last_name, "Doe");
    }

    #[test]
    fn test_students_by_first_name_no_match_is_empty_not_error() {
        let repo = JsonRepository::from_dataset(sample_dataset()).unwrap();
        assert!(repo.students_by_first_name("Nobody").unwrap().is_empty());
    }

    #[test]
    fn test_list_students_sorted_by_last_name() {
        let repo = JsonRepository::from_dataset(sample_dataset()).unwrap();
        let students = repo.list_students().unwrap();
        assert_eq!(students[0].last_name, "Ames");
        assert_eq!(students[1].last_name, "Doe");
    }

    #[test]
    fn test_average_grade_for_student() {
        let repo = JsonRepository::from_dataset(sample_dataset()).unwrap();
        assert_eq!(repo.average_grade_for_student(1).unwrap(), Some(16.0));
    }

    #[test]
    fn test_average_grade_over_zero_rows_is_none() {
        let mut data = sample_dataset();
        data.assessments.clear();
        let repo = JsonRepository::from_dataset(data).unwrap();
        assert_eq!(repo.average_grade_for_student(1).unwrap(), None);
        assert_eq!(repo.average_grade_for_course(10).unwrap(), None);
        assert_eq!(repo.grade_bounds_for_exam_event(40).unwrap(), None);
    }

    #[test]
    fn test_course_aggregates() {
        let repo = JsonRepository::from_dataset(sample_dataset()).unwrap();
        assert_eq!(repo.enrollment_count(10).unwrap(), 2);
        assert_eq!(repo.average_grade_for_course(10).unwrap(), Some(14.0));
        assert_eq!(repo.enrollment_count(11).unwrap(), 0);
    }

    #[test]
    fn test_nearest_exam_date_skips_past_events() {
        let repo = JsonRepository::from_dataset(sample_dataset()).unwrap();
        let from = date(2026, 10, 1);
        assert_eq!(
            repo.nearest_exam_date(10, from).unwrap(),
            Some(date(2026, 12, 15))
        );
        assert_eq!(repo.nearest_exam_date(11, from).unwrap(), None);
    }

    #[test]
    fn test_building_for_course_follows_room_join() {
        let repo = JsonRepository::from_dataset(sample_dataset()).unwrap();
        let building = repo.building_for_course(10).unwrap().unwrap();
        assert_eq!(building.building_name, "Main");
        assert!(repo.building_for_course(11).unwrap().is_none());
    }

    #[test]
    fn test_rooms_in_building() {
        let repo = JsonRepository::from_dataset(sample_dataset()).unwrap();
        let rooms = repo.rooms_in_building(20).unwrap();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].room_name, "B104");
    }

    #[test]
    fn test_next_exam_in_room() {
        let repo = JsonRepository::from_dataset(sample_dataset()).unwrap();
        let next = repo.next_exam_in_room(30, date(2026, 10, 1)).unwrap();
        assert_eq!(next.unwrap().exam_name, "Final");
    }

    #[test]
    fn test_grade_bounds_for_exam_event() {
        let repo = JsonRepository::from_dataset(sample_dataset()).unwrap();
        assert_eq!(
            repo.grade_bounds_for_exam_event(40).unwrap(),
            Some((12.0, 16.0))
        );
    }

    #[test]
    fn test_upcoming_exam_events_sorted() {
        let repo = JsonRepository::from_dataset(sample_dataset()).unwrap();
        let events = repo.upcoming_exam_events(date(2026, 1, 1)).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].exam_name, "Midterm");
        assert_eq!(events[1].exam_name, "Final");
    }

    #[test]
    fn test_validate_rejects_dangling_enrollment() {
        let mut data = sample_dataset();
        data.enrollments.push(Enrollment {
            student_id: 99,
            course_id: 10,
        });
        let err = JsonRepository::from_dataset(data).unwrap_err();
        assert!(err.to_string().contains("enrollment"));
        assert!(err.to_string().contains("99"));
    }

    #[test]
    fn test_validate_rejects_dangling_exam_room() {
        let mut data = sample_dataset();
        data.exam_events[0].room_id = 77;
        let err = JsonRepository::from_dataset(data).unwrap_err();
        assert!(err.to_string().contains("exam_event"));
        assert!(err.to_string().contains("77"));
    }

    #[test]
    fn test_open_missing_file_is_connectivity_error() {
        let err = JsonRepository::open("/no/such/gradebook.json").unwrap_err();
        assert!(matches!(
            err,
            NavigatorError::DatasetUnreachable { .. }
        ));
        assert!(err.is_fatal_at_startup());
    }
}
