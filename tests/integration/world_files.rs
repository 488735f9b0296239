//! Loading worlds from JSON and playing them.

use std::fs;
use std::path::PathBuf;

use questline::engine::State;
use questline::foundation::ErrorKind;
use questline::parser::parse_command;
use questline::runtime::RuntimeConfig;
use questline::runtime::world_file::{load_world_file, parse_world_json};

const CAVE: &str = r#"{
    "start": "MOUTH",
    "rooms": [
        {
            "label": "MOUTH",
            "name": "the cave mouth",
            "description": "Daylight behind you, darkness ahead.",
            "exits": [
                { "dest_label": "DEEP", "description": "a sloping tunnel", "travel_message": "You edge down the tunnel.", "aliases": ["down", "tunnel"] }
            ],
            "items": [
                { "label": "TORCH", "name": "a torch", "description": "Unlit.", "aliases": ["torch"] }
            ]
        },
        {
            "label": "DEEP",
            "name": "the deep cave",
            "description": "Water drips somewhere.",
            "exits": [
                { "dest_label": "MOUTH", "description": "the way out", "travel_message": "You climb toward the light.", "aliases": ["up", "out"] }
            ]
        }
    ]
}"#;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("questline-{}-{name}", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn play_a_loaded_world() {
    let path = temp_file("cave.json", CAVE);
    let loaded = RuntimeConfig::default().with_world_path(&path).load_world().unwrap();
    fs::remove_file(&path).unwrap();

    let mut state = State::new(&loaded.world, &loaded.start).unwrap();
    state.advance(&parse_command("take torch").unwrap()).unwrap();
    let narration = state.advance(&parse_command("d").unwrap()).unwrap();

    assert_eq!(narration.body(), "You edge down the tunnel.");
    assert_eq!(state.current_label(), "DEEP");
    assert_eq!(state.inventory()[0].label, "TORCH");
}

#[test]
fn invalid_world_file_is_fatal() {
    let json = CAVE.replace("\"DEEP\",\n            \"name\"", "\"MOUTH\",\n            \"name\"");
    let err = parse_world_json(&json).unwrap_err();

    assert_eq!(err.kind, ErrorKind::DuplicateRoomLabel("MOUTH".to_string()));
    assert!(err.is_fatal());
}

#[test]
fn missing_world_file() {
    let err = load_world_file("/no/such/dir/world.json").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
    assert!(err.is_fatal());
}

#[test]
fn bad_start_room() {
    let json = CAVE.replace("\"start\": \"MOUTH\"", "\"start\": \"SUMMIT\"");
    let err = parse_world_json(&json).unwrap_err();
    assert_eq!(err.to_string(), "starting room \"SUMMIT\" does not exist");
}
