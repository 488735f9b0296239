//! Integration tests for Layer 3: Engine
//!
//! Tests for movement, items, and state isolation.

mod isolation;
mod items;

use questline_engine::{Narration, State};
use questline_foundation::Result;
use questline_parser::parse_command;
use questline_world::{Egress, Item, Room, World, build_world};

/// A --EAST--> B, B --WEST--> A, with a lamp in A.
pub fn two_rooms() -> World {
    build_world(vec![
        Room::new("A", "the west room", "A bare room. A passage leads east.")
            .with_exit(
                Egress::new("B", "a narrow passage", "You squeeze east.").with_aliases(["EAST"]),
            )
            .with_item(
                Item::new("LAMP", "a brass lamp", "It still has oil.").with_aliases(["LAMP"]),
            ),
        Room::new("B", "the east room", "Another bare room.").with_exit(
            Egress::new("A", "the passage back", "You squeeze west.").with_aliases(["WEST"]),
        ),
    ])
    .unwrap()
}

/// Parses and applies one line.
pub fn play(state: &mut State, line: &str) -> Result<Narration> {
    state.advance(&parse_command(line)?)
}
