//! Student menus: search and listing, then per-student details.

use std::io::{BufRead, Write};

use crate::core::error::Result;
use crate::core::records::Student;
use crate::menu::{MenuNode, MenuOption, MenuSet, Outcome, Session};

pub fn build_menu<R: BufRead + 'static, W: Write + 'static>(selected: Option<&Student>) -> (String, MenuSet<R, W>) {
    match selected {
        None => (
            "Students".to_string(),
            vec![
                ('1', MenuOption::new("Search by first name", search)),
                ('2', MenuOption::new("List all students", list_all)),
                (
                    '3',
                    MenuOption::new("Average grade per student", grade_report),
                ),
                super::back_to_main(),
            ],
        ),
        Some(student) => {
            let title = format!("Student '{}'", student.display_name());
            let for_info = student.clone();
            let for_courses = student.clone();
            let for_average = student.clone();
            (
                title,
                vec![
                    (
                        '1',
                        MenuOption::new("Personal information", move |session| {
                            personal_information(session, &for_info)
                        }),
                    ),
                    (
                        '2',
                        MenuOption::new("Enrolled courses", move |session| {
                            enrolled_courses(session, &for_courses)
                        }),
                    ),
                    (
                        '3',
                        MenuOption::new("Average grade", move |session| {
                            average_grade(session, &for_average)
                        }),
                    ),
                    super::back_to_main(),
                ],
            )
        }
    }
}

fn search<R: BufRead + 'static, W: Write + 'static>(session: &mut Session<R, W>) -> Result<Outcome> {
    let name = match session.prompt("What student do you want to search:")? {
        Some(name) => name,
        None => return Ok(Outcome::Exit),
    };

    let mut matches = session.repo().students_by_first_name(&name)?;
    if matches.is_empty() {
        session.say(&format!("No students found with the name {name}."))?;
        return Ok(Outcome::Stay);
    }
    if matches.len() == 1 {
        return Ok(Outcome::Advance(MenuNode::Student(matches.pop())));
    }

    session.say("Multiple students found with the same first name:")?;
    match session.select_from_matches(&matches, |s| {
        format!("{} ({})", s.display_name(), s.email)
    })? {
        Some(student) => Ok(Outcome::Advance(MenuNode::Student(Some(student)))),
        None => Ok(Outcome::Stay),
    }
}

fn list_all<R: BufRead + 'static, W: Write + 'static>(session: &mut Session<R, W>) -> Result<Outcome> {
    let students = session.repo().list_students()?;
    if students.is_empty() {
        session.say("No students recorded.")?;
        return Ok(Outcome::Stay);
    }
    for student in &students {
        session.say(&format!("- {} ({})", student.display_name(), student.email))?;
    }
    Ok(Outcome::Stay)
}

fn grade_report<R: BufRead + 'static, W: Write + 'static>(session: &mut Session<R, W>) -> Result<Outcome> {
    let rows = session.repo().average_grade_per_student()?;
    if rows.is_empty() {
        session.say("No grades recorded yet.")?;
        return Ok(Outcome::Stay);
    }
    for (name, average) in &rows {
        session.say(&format!("- {name}: {average:.2}"))?;
    }
    Ok(Outcome::Stay)
}

fn personal_information<R: BufRead + 'static, W: Write + 'static>(
    session: &mut Session<R, W>,
    student: &Student,
) -> Result<Outcome> {
    let age = student.age(session.today());
    session.say(&format!("Name: {}", student.display_name()))?;
    session.say(&format!("Email: {}", student.email))?;
    session.say(&format!("Age: {age}"))?;
    Ok(Outcome::Stay)
}

fn enrolled_courses<R: BufRead + 'static, W: Write + 'static>(
    session: &mut Session<R, W>,
    student: &Student,
) -> Result<Outcome> {
    let courses = session.repo().courses_for_student(student.student_id)?;
    if courses.is_empty() {
        session.say(&format!(
            "The student '{}' is not enrolled in any courses.",
            student.display_name()
        ))?;
        return Ok(Outcome::Stay);
    }
    session.say(&format!(
        "The student '{}' is enrolled in the following courses:",
        student.display_name()
    ))?;
    for course in &courses {
        session.say(&format!("- {}", course.course_name))?;
    }
    Ok(Outcome::Stay)
}

fn average_grade<R: BufRead + 'static, W: Write + 'static>(
    session: &mut Session<R, W>,
    student: &Student,
) -> Result<Outcome> {
    match session.repo().average_grade_for_student(student.student_id)? {
        Some(average) => session.say(&format!(
            "The average grade of the student '{}' is {average:.2}.",
            student.display_name()
        ))?,
        None => session.say(&format!(
            "No grades recorded for the student '{}'.",
            student.display_name()
        ))?,
    }
    Ok(Outcome::Stay)
}
