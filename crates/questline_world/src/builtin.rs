//! The compiled-in starter world: a small house the player wakes up in.

use questline_foundation::Result;

use crate::item::Item;
use crate::room::{Egress, Room};
use crate::world::{World, build_world};

/// Label of the room a new game starts in.
pub const START_LABEL: &str = "YOUR_ROOM";

/// Room definitions for the starter house.
#[must_use]
pub fn default_rooms() -> Vec<Room> {
    vec![
        Room::new(
            "YOUR_ROOM",
            "your bedroom",
            "You are standing in your bedroom. Perhaps you are a young person who only now, \
             on your 13th birthday, will receive a name. A pretty window in the corner looks \
             out over the world outside, and a notebook lies open on the desk beneath it. \
             There's a door to your bathroom to the east, and a door to the hall to the south.",
        )
        .with_exit(
            Egress::new(
                "BATHROOM",
                "your bathroom door",
                "You go through the door and enter the bathroom.",
            )
            .with_aliases(["BATHROOM", "TOILET", "DOOR", "EAST"]),
        )
        .with_exit(
            Egress::new(
                "HALLWAY",
                "the door to the hall",
                "You shut the door behind you as you go into the hall.",
            )
            .with_aliases(["HALLWAY", "HALL", "OUT", "SOUTH"]),
        )
        .with_item(
            Item::new(
                "NOTEBOOK",
                "a notebook",
                "Your notebook. The first page is blank where your name should go.",
            )
            .with_aliases(["NOTEBOOK", "BOOK"]),
        ),
        Room::new(
            "BATHROOM",
            "your ensuite bathroom",
            "You are in the bathroom attached to your bedroom. There's a toilet, pristine due \
             to your constant efforts to keep it clean, next to a sink and bathtub. A \
             toothbrush rests on the edge of the sink. The currently closed door to the west \
             leads back to your bedroom.",
        )
        .with_exit(
            Egress::new("YOUR_ROOM", "the door", "You head back into the bedroom.")
                .with_aliases(["BEDROOM", "ROOM", "DOOR", "WEST"]),
        )
        .with_item(
            Item::new("TOOTHBRUSH", "a toothbrush", "Blue bristles, slightly frayed.")
                .with_aliases(["TOOTHBRUSH", "BRUSH"]),
        ),
        Room::new(
            "HALLWAY",
            "the main hallway in your house",
            "This is the main hallway in your house that connects the bedrooms with the living \
             room and kitchen. There's a doorway at the end, but it seems boarded up, and \
             you're pretty sure that's because it represents the limits of the game you're in. \
             I guess you're stuck here. In your home. Housetrapped.\n\
             Anyways, there's also your bedroom door at the north end, and a coat hanging on a \
             hook beside it.",
        )
        .with_exit(
            Egress::new(
                "YOUR_ROOM",
                "the door to your bedroom",
                "You step into your bedroom, closing the door behind you for privacy.",
            )
            .with_aliases(["BEDROOM", "ROOM", "NORTH"]),
        )
        .with_item(
            Item::new("COAT", "a raincoat", "Yellow, and far too big for you.")
                .with_aliases(["COAT", "RAINCOAT"]),
        ),
    ]
}

/// Builds the starter house.
///
/// # Errors
///
/// Only fails if the built-in definitions are themselves malformed.
pub fn default_world() -> Result<World> {
    build_world(default_rooms())
}
