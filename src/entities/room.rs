//! Room menus, plus the room listings other entities delegate to.

use std::io::{BufRead, Write};

use crate::core::error::Result;
use crate::core::records::Room;
use crate::menu::{MenuNode, MenuOption, MenuSet, Outcome, Session};

pub fn build_menu<R: BufRead + 'static, W: Write + 'static>(selected: Option<&Room>) -> (String, MenuSet<R, W>) {
    match selected {
        None => (
            "Rooms".to_string(),
            vec![
                ('1', MenuOption::new("Search by name", search)),
                ('2', MenuOption::new("List all rooms", list_all)),
                super::back_to_main(),
            ],
        ),
        Some(room) => {
            let title = format!("Room '{}'", room.room_name);
            let for_capacity = room.clone();
            let for_equipment = room.clone();
            let for_access = room.clone();
            let for_next_exam = room.clone();
            (
                title,
                vec![
                    (
                        '1',
                        MenuOption::new("Capacity", move |session| {
                            capacity(session, &for_capacity)
                        }),
                    ),
                    (
                        '2',
                        MenuOption::new("Equipment (projector, computers)", move |session| {
                            equipment(session, &for_equipment)
                        }),
                    ),
                    (
                        '3',
                        MenuOption::new("Is accessible", move |session| {
                            accessibility(session, &for_access)
                        }),
                    ),
                    (
                        '4',
                        MenuOption::new("Next scheduled exam", move |session| {
                            next_exam(session, &for_next_exam)
                        }),
                    ),
                    super::back_to_main(),
                ],
            )
        }
    }
}

/// Entry point for cross-entity delegation: list a building's rooms.
///
/// The building id arrives as an explicit argument from the caller's own
/// selected context.
pub fn list_rooms_in_building<R: BufRead + 'static, W: Write + 'static>(
    session: &mut Session<R, W>,
    building_id: u32,
    accessible_only: bool,
) -> Result<Outcome> {
    let rooms = session.repo().rooms_in_building(building_id)?;
    let rooms: Vec<Room> = if accessible_only {
        rooms.into_iter().filter(|r| r.is_accessible).collect()
    } else {
        rooms
    };

    if rooms.is_empty() {
        session.say(if accessible_only {
            "No accessible rooms in this building."
        } else {
            "No rooms in this building."
        })?;
        return Ok(Outcome::Stay);
    }
    for room in &rooms {
        session.say(&format!(
            "- {} (capacity {})",
            room.room_name, room.capacity
        ))?;
    }
    Ok(Outcome::Stay)
}

fn search<R: BufRead + 'static, W: Write + 'static>(session: &mut Session<R, W>) -> Result<Outcome> {
    let name = match session.prompt("What room do you want to search:")? {
        Some(name) => name,
        None => return Ok(Outcome::Exit),
    };

    let mut matches = session.repo().rooms_by_name(&name)?;
    if matches.is_empty() {
        session.say(&format!("No room found with the name {name}."))?;
        return Ok(Outcome::Stay);
    }
    if matches.len() == 1 {
        return Ok(Outcome::Advance(MenuNode::Room(matches.pop())));
    }

    session.say("Multiple rooms found with the same name:")?;
    match session.select_from_matches(&matches, |r| {
        format!("{} (capacity {})", r.room_name, r.capacity)
    })? {
        Some(room) => Ok(Outcome::Advance(MenuNode::Room(Some(room)))),
        None => Ok(Outcome::Stay),
    }
}

fn list_all<R: BufRead + 'static, W: Write + 'static>(session: &mut Session<R, W>) -> Result<Outcome> {
    let rooms = session.repo().list_rooms()?;
    if rooms.is_empty() {
        session.say("No rooms recorded.")?;
        return Ok(Outcome::Stay);
    }
    for room in &rooms {
        session.say(&format!(
            "- {} (capacity {})",
            room.room_name, room.capacity
        ))?;
    }
    Ok(Outcome::Stay)
}

fn capacity<R: BufRead + 'static, W: Write + 'static>(session: &mut Session<R, W>, room: &Room) -> Result<Outcome> {
    session.say(&format!(
        "The capacity of the room '{}' is {}.",
        room.room_name, room.capacity
    ))?;
    Ok(Outcome::Stay)
}

fn equipment<R: BufRead + 'static, W: Write + 'static>(session: &mut Session<R, W>, room: &Room) -> Result<Outcome> {
    match room.equipment() {
        Some(items) => session.say(&format!(
            "The room '{}' is equipped with: {items}.",
            room.room_name
        ))?,
        None => session.say(&format!(
            "The room '{}' has no special equipment.",
            room.room_name
        ))?,
    }
    Ok(Outcome::Stay)
}

fn accessibility<R: BufRead + 'static, W: Write + 'static>(
    session: &mut Session<R, W>,
    room: &Room,
) -> Result<Outcome> {
    let verdict = if room.is_accessible {
        "accessible"
    } else {
        "not accessible"
    };
    session.say(&format!("The room '{}' is {verdict}.", room.room_name))?;
    Ok(Outcome::Stay)
}

fn next_exam<R: BufRead + 'static, W: Write + 'static>(session: &mut Session<R, W>, room: &Room) -> Result<Outcome> {
    let today = session.today();
    match session.repo().next_exam_in_room(room.room_id, today)? {
        Some(event) => {
            let course_name = session
                .repo()
                .course_for_exam_event(event.exam_event_id)?
                .map(|c| c.course_name)
                .unwrap_or_else(|| "unknown course".to_string());
            session.say(&format!(
                "The next exam in the room '{}' is '{}' ({course_name}) on {}.",
                room.room_name, event.exam_name, event.date
            ))?;
        }
        None => session.say(&format!(
            "No exams scheduled in the room '{}'.",
            room.room_name
        ))?,
    }
    Ok(Outcome::Stay)
}
