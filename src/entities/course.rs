//! Course menus: search and listing, then per-course derived facts.

use std::io::{BufRead, Write};

use crate::core::error::Result;
use crate::core::records::Course;
use crate::menu::{MenuNode, MenuOption, MenuSet, Outcome, Session};

pub fn build_menu<R: BufRead + 'static, W: Write + 'static>(selected: Option<&Course>) -> (String, MenuSet<R, W>) {
    match selected {
        None => (
            "Courses".to_string(),
            vec![
                ('1', MenuOption::new("Search by name", search)),
                ('2', MenuOption::new("List all courses", list_all)),
                (
                    '3',
                    MenuOption::new("Enrollment count per course", enrollment_report),
                ),
                super::back_to_main(),
            ],
        ),
        Some(course) => {
            let title = format!("Course '{}'", course.course_name);
            let for_count = course.clone();
            let for_average = course.clone();
            let for_exam = course.clone();
            let for_building = course.clone();
            (
                title,
                vec![
                    (
                        '1',
                        MenuOption::new("How many students are enrolled", move |session| {
                            enrolled_count(session, &for_count)
                        }),
                    ),
                    (
                        '2',
                        MenuOption::new("Average grade of the students", move |session| {
                            average_grade(session, &for_average)
                        }),
                    ),
                    (
                        '3',
                        MenuOption::new("Date of the nearest exam", move |session| {
                            nearest_exam(session, &for_exam)
                        }),
                    ),
                    (
                        '4',
                        MenuOption::new("Building where the course is taught", move |session| {
                            building(session, &for_building)
                        }),
                    ),
                    super::back_to_main(),
                ],
            )
        }
    }
}

fn search<R: BufRead + 'static, W: Write + 'static>(session: &mut Session<R, W>) -> Result<Outcome> {
    let name = match session.prompt("What course do you want to search:")? {
        Some(name) => name,
        None => return Ok(Outcome::Exit),
    };

    let mut matches = session.repo().courses_by_name(&name)?;
    if matches.is_empty() {
        session.say(&format!("No course found with the name {name}."))?;
        return Ok(Outcome::Stay);
    }
    if matches.len() == 1 {
        return Ok(Outcome::Advance(MenuNode::Course(matches.pop())));
    }

    session.say("Multiple courses found with the same name:")?;
    match session.select_from_matches(&matches, |c| c.course_name.clone())? {
        Some(course) => Ok(Outcome::Advance(MenuNode::Course(Some(course)))),
        None => Ok(Outcome::Stay),
    }
}

fn list_all<R: BufRead + 'static, W: Write + 'static>(session: &mut Session<R, W>) -> Result<Outcome> {
    let courses = session.repo().list_courses()?;
    if courses.is_empty() {
        session.say("No courses recorded.")?;
        return Ok(Outcome::Stay);
    }
    for course in &courses {
        session.say(&format!("- {}", course.course_name))?;
    }
    Ok(Outcome::Stay)
}

fn enrollment_report<R: BufRead + 'static, W: Write + 'static>(session: &mut Session<R, W>) -> Result<Outcome> {
    let rows = session.repo().enrollment_count_per_course()?;
    if rows.is_empty() {
        session.say("No courses recorded.")?;
        return Ok(Outcome::Stay);
    }
    for (name, count) in &rows {
        session.say(&format!("- {name}: {count} enrolled"))?;
    }
    Ok(Outcome::Stay)
}

fn enrolled_count<R: BufRead + 'static, W: Write + 'static>(
    session: &mut Session<R, W>,
    course: &Course,
) -> Result<Outcome> {
    let count = session.repo().enrollment_count(course.course_id)?;
    session.say(&format!(
        "There are {count} students enrolled in the course '{}'.",
        course.course_name
    ))?;
    Ok(Outcome::Stay)
}

fn average_grade<R: BufRead + 'static, W: Write + 'static>(
    session: &mut Session<R, W>,
    course: &Course,
) -> Result<Outcome> {
    match session.repo().average_grade_for_course(course.course_id)? {
        Some(average) => session.say(&format!(
            "The average grade of the students in the course '{}' is {average:.2}.",
            course.course_name
        ))?,
        None => session.say(&format!(
            "No grades recorded for the course '{}'.",
            course.course_name
        ))?,
    }
    Ok(Outcome::Stay)
}

fn nearest_exam<R: BufRead + 'static, W: Write + 'static>(
    session: &mut Session<R, W>,
    course: &Course,
) -> Result<Outcome> {
    let today = session.today();
    match session.repo().nearest_exam_date(course.course_id, today)? {
        Some(date) => session.say(&format!(
            "The date of the nearest exam in the course '{}' is {date}.",
            course.course_name
        ))?,
        None => session.say(&format!(
            "No future exams scheduled for the course '{}'.",
            course.course_name
        ))?,
    }
    Ok(Outcome::Stay)
}

fn building<R: BufRead + 'static, W: Write + 'static>(
    session: &mut Session<R, W>,
    course: &Course,
) -> Result<Outcome> {
    match session.repo().building_for_course(course.course_id)? {
        Some(building) => session.say(&format!(
            "The course '{}' is taught in the building '{}'.",
            course.course_name, building.building_name
        ))?,
        None => session.say(&format!(
            "No exams scheduled yet for the course '{}', building unknown.",
            course.course_name
        ))?,
    }
    Ok(Outcome::Stay)
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestSet = MenuSet<&'static [u8], Vec<u8>>;

    #[test]
    fn test_both_states_offer_the_back_key() {
        let course = Course {
            course_id: 10,
            course_name: "Databases".to_string(),
        };
        let (_, unselected): (String, TestSet) = build_menu(None);
        let (title, selected): (String, TestSet) = build_menu(Some(&course));

        assert!(unselected.iter().any(|(key, _)| *key == '9'));
        assert!(selected.iter().any(|(key, _)| *key == '9'));
        assert!(title.contains("Databases"));
    }

    #[test]
    fn test_unselected_menu_has_no_detail_actions() {
        let (_, options): (String, TestSet) = build_menu(None);
        assert!(!options
            .iter()
            .any(|(_, option)| option.label().contains("nearest exam")));
    }
}
