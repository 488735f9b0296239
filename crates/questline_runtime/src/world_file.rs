//! World definitions stored as JSON.
//!
//! ```json
//! {
//!   "start": "CELLAR",
//!   "rooms": [
//!     {
//!       "label": "CELLAR",
//!       "name": "the cellar",
//!       "description": "Damp and dark.",
//!       "exits": [
//!         {
//!           "dest_label": "KITCHEN",
//!           "description": "a ladder",
//!           "travel_message": "You climb up.",
//!           "aliases": ["UP", "LADDER"]
//!         }
//!       ],
//!       "items": []
//!     }
//!   ]
//! }
//! ```
//!
//! `start` is optional and defaults to the first room listed.

use std::fs;
use std::path::Path;

use questline_foundation::{Error, ErrorContext, Result};
use questline_world::{Room, START_LABEL, World, build_world, default_rooms};
use serde::Deserialize;
use tracing::info;

#[derive(Deserialize)]
struct WorldFile {
    #[serde(default)]
    start: Option<String>,
    rooms: Vec<Room>,
}

/// A validated world and the room a game in it starts in.
#[derive(Clone, Debug)]
pub struct LoadedWorld {
    /// The validated world.
    pub world: World,
    /// Label of the starting room. Always a room in `world`.
    pub start: String,
}

/// The built-in house.
///
/// # Errors
///
/// Only fails if the built-in definitions are themselves malformed.
pub fn builtin() -> Result<LoadedWorld> {
    Ok(LoadedWorld {
        world: build_world(default_rooms())?,
        start: START_LABEL.to_string(),
    })
}

/// Decodes and validates a JSON world definition.
///
/// # Errors
///
/// Returns `WorldFormat` if the JSON is malformed or lists no rooms,
/// `UnknownStartRoom` if `start` names no room, or any validation error
/// from [`build_world`].
pub fn parse_world_json(json: &str) -> Result<LoadedWorld> {
    let file: WorldFile =
        serde_json::from_str(json).map_err(|e| Error::world_format(e.to_string()))?;

    let start = match file.start {
        Some(start) => start,
        None => file
            .rooms
            .first()
            .map(|room| room.label.clone())
            .ok_or_else(|| Error::world_format("world has no rooms"))?,
    };

    let world = build_world(file.rooms)?;
    if !world.contains(&start) {
        return Err(Error::unknown_start_room(start));
    }

    Ok(LoadedWorld { world, start })
}

/// Reads, decodes, and validates a JSON world file.
///
/// # Errors
///
/// Returns an `Io` error if the file can't be read, otherwise anything
/// [`parse_world_json`] returns, with the path attached as context.
pub fn load_world_file<P: AsRef<Path>>(path: P) -> Result<LoadedWorld> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|e| {
        Error::io(format!("failed to read world file '{}': {e}", path.display()))
    })?;

    let loaded = parse_world_json(&source).map_err(|e| {
        let context = ErrorContext::new()
            .with_source(path.display().to_string())
            .with_frame("loading world file");
        e.with_context(context)
    })?;

    info!(
        path = %path.display(),
        rooms = loaded.world.len(),
        start = %loaded.start,
        "loaded world file"
    );
    Ok(loaded)
}
