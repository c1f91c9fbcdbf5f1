//! Building menus. Room listings are delegated to the room module with the
//! building id passed explicitly; that is the only place state crosses an
//! entity boundary.

use std::io::{BufRead, Write};

use crate::core::error::Result;
use crate::core::records::Building;
use crate::entities::room;
use crate::menu::{MenuNode, MenuOption, MenuSet, Outcome, Session};

pub fn build_menu<R: BufRead + 'static, W: Write + 'static>(selected: Option<&Building>) -> (String, MenuSet<R, W>) {
    match selected {
        None => (
            "Buildings".to_string(),
            vec![
                ('1', MenuOption::new("Search by name", search)),
                ('2', MenuOption::new("List all buildings", list_all)),
                super::back_to_main(),
            ],
        ),
        Some(building) => {
            let title = format!("Building '{}'", building.building_name);
            let for_rooms = building.clone();
            let for_accessible = building.clone();
            (
                title,
                vec![
                    (
                        '1',
                        MenuOption::new("Rooms in this building", move |session| {
                            room::list_rooms_in_building(
                                session,
                                for_rooms.building_id,
                                false,
                            )
                        }),
                    ),
                    (
                        '2',
                        MenuOption::new("Accessible rooms only", move |session| {
                            room::list_rooms_in_building(
                                session,
                                for_accessible.building_id,
                                true,
                            )
                        }),
                    ),
                    super::back_to_main(),
                ],
            )
        }
    }
}

fn search<R: BufRead + 'static, W: Write + 'static>(session: &mut Session<R, W>) -> Result<Outcome> {
    let name = match session.prompt("What building do you want to search:")? {
        Some(name) => name,
        None => return Ok(Outcome::Exit),
    };

    let mut matches = session.repo().buildings_by_name(&name)?;
    if matches.is_empty() {
        session.say(&format!("No building found with the name {name}."))?;
        return Ok(Outcome::Stay);
    }
    if matches.len() == 1 {
        return Ok(Outcome::Advance(MenuNode::Building(matches.pop())));
    }

    session.say("Multiple buildings found with the same name:")?;
    match session.select_from_matches(&matches, |b| b.building_name.clone())? {
        Some(building) => Ok(Outcome::Advance(MenuNode::Building(Some(building)))),
        None => Ok(Outcome::Stay),
    }
}

fn list_all<R: BufRead + 'static, W: Write + 'static>(session: &mut Session<R, W>) -> Result<Outcome> {
    let buildings = session.repo().list_buildings()?;
    if buildings.is_empty() {
        session.say("No buildings recorded.")?;
        return Ok(Outcome::Stay);
    }
    for building in &buildings {
        session.say(&format!("- {}", building.building_name))?;
    }
    Ok(Outcome::Stay)
}
