//! Exam event menus: search by exam name or event id, upcoming listings,
//! then per-event details and grade aggregates.

use std::io::{BufRead, Write};

use crate::core::error::Result;
use crate::core::output::format_invalid_choice;
use crate::core::records::ExamEvent;
use crate::menu::{MenuNode, MenuOption, MenuSet, Outcome, Session};

pub fn build_menu<R: BufRead + 'static, W: Write + 'static>(selected: Option<&ExamEvent>) -> (String, MenuSet<R, W>) {
    match selected {
        None => (
            "Exam Events".to_string(),
            vec![
                ('1', MenuOption::new("Search by exam name", search_by_name)),
                ('2', MenuOption::new("Search by event id", search_by_id)),
                ('3', MenuOption::new("List upcoming events", list_upcoming)),
                super::back_to_main(),
            ],
        ),
        Some(event) => {
            let title = format!("Exam Event '{}' on {}", event.exam_name, event.date);
            let for_details = event.clone();
            let for_room = event.clone();
            let for_bounds = event.clone();
            let for_average = event.clone();
            (
                title,
                vec![
                    (
                        '1',
                        MenuOption::new("Information (exam, course, date)", move |session| {
                            details(session, &for_details)
                        }),
                    ),
                    (
                        '2',
                        MenuOption::new("Room where the exam is held", move |session| {
                            room(session, &for_room)
                        }),
                    ),
                    (
                        '3',
                        MenuOption::new("Minimum and maximum grade", move |session| {
                            grade_bounds(session, &for_bounds)
                        }),
                    ),
                    (
                        '4',
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

fn describe(event: &ExamEvent) -> String {
    format!("{} ({})", event.exam_name, event.date)
}

fn search_by_name<R: BufRead + 'static, W: Write + 'static>(session: &mut Session<R, W>) -> Result<Outcome> {
    let name = match session.prompt("What exam do you want to search:")? {
        Some(name) => name,
        None => return Ok(Outcome::Exit),
    };

    let mut matches = session.repo().exam_events_by_name(&name)?;
    if matches.is_empty() {
        session.say(&format!("No exam events found with the name {name}."))?;
        return Ok(Outcome::Stay);
    }
    if matches.len() == 1 {
        return Ok(Outcome::Advance(MenuNode::ExamEvent(matches.pop())));
    }

    session.say("Multiple exam events found with the same name:")?;
    match session.select_from_matches(&matches, describe)? {
        Some(event) => Ok(Outcome::Advance(MenuNode::ExamEvent(Some(event)))),
        None => Ok(Outcome::Stay),
    }
}

fn search_by_id<R: BufRead + 'static, W: Write + 'static>(session: &mut Session<R, W>) -> Result<Outcome> {
    let line = match session.prompt("What exam event do you want to search (id):")? {
        Some(line) => line,
        None => return Ok(Outcome::Exit),
    };

    let id: u32 = match line.parse() {
        Ok(id) => id,
        Err(_) => {
            session.say(&format_invalid_choice())?;
            return Ok(Outcome::Stay);
        }
    };

    match session.repo().exam_event_by_id(id)? {
        Some(event) => Ok(Outcome::Advance(MenuNode::ExamEvent(Some(event)))),
        None => {
            session.say(&format!("No exam event found with the id {id}."))?;
            Ok(Outcome::Stay)
        }
    }
}

fn list_upcoming<R: BufRead + 'static, W: Write + 'static>(session: &mut Session<R, W>) -> Result<Outcome> {
    let today = session.today();
    let events = session.repo().upcoming_exam_events(today)?;
    if events.is_empty() {
        session.say("No upcoming exam events.")?;
        return Ok(Outcome::Stay);
    }
    for event in &events {
        session.say(&format!("- {}", describe(event)))?;
    }
    Ok(Outcome::Stay)
}

fn details<R: BufRead + 'static, W: Write + 'static>(
    session: &mut Session<R, W>,
    event: &ExamEvent,
) -> Result<Outcome> {
    let course_name = session
        .repo()
        .course_for_exam_event(event.exam_event_id)?
        .map(|c| c.course_name)
        .unwrap_or_else(|| "unknown".to_string());
    session.say(&format!("Exam Name: {}", event.exam_name))?;
    session.say(&format!("Course Name: {course_name}"))?;
    session.say(&format!("Date: {}", event.date))?;
    Ok(Outcome::Stay)
}

fn room<R: BufRead + 'static, W: Write + 'static>(session: &mut Session<R, W>, event: &ExamEvent) -> Result<Outcome> {
    match session.repo().room_for_exam_event(event.exam_event_id)? {
        Some(room) => session.say(&format!(
            "The exam '{}' is held in the room '{}' (capacity {}).",
            event.exam_name, room.room_name, room.capacity
        ))?,
        None => session.say(&format!(
            "No room recorded for the exam '{}'.",
            event.exam_name
        ))?,
    }
    Ok(Outcome::Stay)
}

fn grade_bounds<R: BufRead + 'static, W: Write + 'static>(
    session: &mut Session<R, W>,
    event: &ExamEvent,
) -> Result<Outcome> {
    match session
        .repo()
        .grade_bounds_for_exam_event(event.exam_event_id)?
    {
        Some((min, max)) => {
            session.say(&format!("Minimum Grade: {min:.2}"))?;
            session.say(&format!("Maximum Grade: {max:.2}"))?;
        }
        None => session.say(&format!(
            "No grades recorded for the exam '{}'.",
            event.exam_name
        ))?,
    }
    Ok(Outcome::Stay)
}

fn average_grade<R: BufRead + 'static, W: Write + 'static>(
    session: &mut Session<R, W>,
    event: &ExamEvent,
) -> Result<Outcome> {
    match session
        .repo()
        .average_grade_for_exam_event(event.exam_event_id)?
    {
        Some(average) => session.say(&format!(
            "The average grade at the exam '{}' is {average:.2}.",
            event.exam_name
        ))?,
        None => session.say(&format!(
            "No grades recorded for the exam '{}'.",
            event.exam_name
        ))?,
    }
    Ok(Outcome::Stay)
}
