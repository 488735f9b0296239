//! The live game state and the state machine that advances it.
//!
//! Each verb validates its preconditions against the current room first and
//! only then mutates. A failed [`State::advance`] leaves the state exactly as
//! it was.

use questline_foundation::{Error, ErrorKind, Result};
use questline_parser::{Command, Verb};
use questline_world::{Item, Room, World};
use tracing::{debug, info};

use crate::help::HELP_TEXT;
use crate::narration::Narration;

/// Everything that changes while a game is played.
#[derive(Clone, Debug)]
pub struct State {
    /// This session's private copy of the world.
    world: World,
    /// Label of the room the player is in. Always a room in `world`.
    current: String,
    /// Items carried by the player, in pickup order.
    inventory: Vec<Item>,
}

impl State {
    /// Starts a session in `start`, taking a private copy of `world`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownStartRoom` if `start` is not a room in `world`.
    pub fn new(world: &World, start: &str) -> Result<Self> {
        if !world.contains(start) {
            return Err(Error::unknown_start_room(start));
        }
        info!(start, rooms = world.len(), "starting session");
        Ok(Self {
            world: world.clone(),
            current: start.to_string(),
            inventory: Vec::new(),
        })
    }

    /// The room the player is in.
    ///
    /// # Panics
    ///
    /// Panics if the current label is missing from the world, which
    /// construction and [`State::advance`] rule out.
    #[must_use]
    pub fn current_room(&self) -> &Room {
        self.world
            .room(&self.current)
            .expect("current room is always part of the world")
    }

    /// Label of the room the player is in.
    #[must_use]
    pub fn current_label(&self) -> &str {
        &self.current
    }

    /// Items the player carries.
    #[must_use]
    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    /// This session's world.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Applies one command.
    ///
    /// QUIT always fails here: ending the game is the driving loop's call.
    ///
    /// # Errors
    ///
    /// Returns a recoverable error describing why the command can't be
    /// carried out. The state is unchanged whenever an error is returned.
    pub fn advance(&mut self, cmd: &Command) -> Result<Narration> {
        let Some(verb) = cmd.verb else {
            return Err(Error::new(ErrorKind::EmptyCommand));
        };

        let narration = match verb {
            Verb::Quit => Err(Error::new(ErrorKind::NotQuittable)),
            Verb::Go => self.go(&cmd.recipient),
            Verb::Exits => Ok(self.exits()),
            Verb::Look => self.look(&cmd.recipient),
            Verb::Debug => self.debug(&cmd.recipient),
            Verb::Help => Ok(Narration::new(HELP_TEXT)),
            Verb::Take => self.take(&cmd.recipient, cmd.instrument.as_deref()),
            Verb::Drop => self.drop_item(&cmd.recipient),
            Verb::Inventory => Ok(self.list_inventory()),
            Verb::Talk | Verb::Use => Err(Error::unknown_verb(verb.as_str())),
        }?;

        debug!(command = %cmd, room = %self.current, "advanced");
        Ok(narration)
    }

    fn go(&mut self, alias: &str) -> Result<Narration> {
        if alias.is_empty() {
            return Err(Error::missing_recipient(Verb::Go.as_str()));
        }
        let (dest, message) = {
            let room = self.current_room();
            let exit = room
                .find_egress_by_alias(alias)
                .ok_or_else(|| Error::no_such_exit(alias))?;
            if !self.world.contains(&exit.dest_label) {
                return Err(Error::unknown_destination(
                    room.label.clone(),
                    alias,
                    exit.dest_label.clone(),
                ));
            }
            (exit.dest_label.clone(), exit.travel_message.clone())
        };

        self.current = dest;
        Ok(Narration::new(message))
    }

    fn exits(&self) -> Narration {
        let table: Vec<String> = self
            .current_room()
            .exits
            .iter()
            .map(|exit| format!("{} -> {}", exit.aliases.join("/"), exit.description))
            .collect();
        Narration::new(table.join("\n"))
    }

    fn look(&self, target: &str) -> Result<Narration> {
        if !target.is_empty() {
            return Err(Error::unsupported_target(target));
        }
        Ok(Narration::new(self.current_room().description.clone()))
    }

    fn debug(&self, target: &str) -> Result<Narration> {
        match target {
            "ROOM" => Ok(Narration::new(self.current_room().to_string())),
            _ => Err(Error::unknown_debug_target(target)),
        }
    }

    fn take(&mut self, alias: &str, instrument: Option<&str>) -> Result<Narration> {
        if alias.is_empty() {
            return Err(Error::missing_recipient(Verb::Take.as_str()));
        }
        if let Some(instrument) = instrument {
            return Err(Error::unsupported_instrument(Verb::Take.as_str(), instrument));
        }
        let label = self
            .current_room()
            .find_item_by_alias(alias)
            .map(|item| item.label.clone())
            .ok_or_else(|| Error::no_such_item(alias))?;

        let item = self
            .world
            .room_mut(&self.current)
            .and_then(|room| room.remove_item(&label))
            .ok_or_else(|| Error::no_such_item(alias))?;
        let narration = Narration::new(format!("You take {}.", item.name));
        self.inventory.push(item);
        Ok(narration)
    }

    fn drop_item(&mut self, alias: &str) -> Result<Narration> {
        if alias.is_empty() {
            return Err(Error::missing_recipient(Verb::Drop.as_str()));
        }
        let index = self
            .inventory
            .iter()
            .position(|item| item.answers_to(alias))
            .ok_or_else(|| Error::not_carrying(alias))?;
        let Some(room) = self.world.room_mut(&self.current) else {
            return Err(Error::internal(format!(
                "current room {:?} is missing",
                self.current
            )));
        };

        let item = self.inventory.remove(index);
        let narration = Narration::new(format!("You drop {}.", item.name));
        room.add_item(item);
        Ok(narration)
    }

    fn list_inventory(&self) -> Narration {
        if self.inventory.is_empty() {
            return Narration::new("You aren't carrying anything.");
        }
        let mut text = String::from("You are carrying:");
        for item in &self.inventory {
            text.push_str("\n  ");
            text.push_str(&item.name);
        }
        Narration::new(text)
    }
}
