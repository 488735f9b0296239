//! World construction and validation tests.

use questline_foundation::ErrorKind;
use questline_world::{Egress, Item, Room, START_LABEL, build_world, default_world};

fn door(dest: &str, aliases: &[&str]) -> Egress {
    Egress::new(dest, "a door", "You go through the door.").with_aliases(aliases.iter().copied())
}

#[test]
fn builtin_house_is_valid() {
    let world = default_world().unwrap();

    assert_eq!(world.len(), 3);
    assert!(world.contains(START_LABEL));
    for room in world.rooms() {
        for exit in &room.exits {
            assert!(world.contains(&exit.dest_label), "{} leads nowhere", room.label);
        }
    }
}

#[test]
fn duplicate_room_labels_rejected() {
    let err = build_world(vec![
        Room::new("HALL", "a hall", "Long."),
        Room::new("HALL", "another hall", "Longer."),
    ])
    .unwrap_err();

    assert_eq!(err.kind, ErrorKind::DuplicateRoomLabel("HALL".to_string()));
    assert_eq!(err.to_string(), "duplicate room label \"HALL\"");
    assert!(err.is_fatal());
}

#[test]
fn duplicate_alias_within_room_rejected() {
    let err = build_world(vec![
        Room::new("A", "a", "A.")
            .with_exit(door("B", &["DOOR", "EAST"]))
            .with_exit(door("C", &["door"])),
        Room::new("B", "b", "B."),
        Room::new("C", "c", "C."),
    ])
    .unwrap_err();

    assert_eq!(
        err.kind,
        ErrorKind::DuplicateEgressAlias {
            room: "A".to_string(),
            alias: "DOOR".to_string(),
        }
    );
}

#[test]
fn alias_may_repeat_across_rooms() {
    let world = build_world(vec![
        Room::new("A", "a", "A.").with_exit(door("B", &["DOOR"])),
        Room::new("B", "b", "B.").with_exit(door("A", &["DOOR"])),
    ])
    .unwrap();

    assert_eq!(world.len(), 2);
}

#[test]
fn exit_to_unknown_room_rejected() {
    let err = build_world(vec![
        Room::new("A", "a", "A.").with_exit(door("ATTIC", &["UP", "LADDER"])),
    ])
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "exit \"UP\" in room \"A\" leads to unknown room \"ATTIC\""
    );
}

#[test]
fn forward_references_allowed() {
    let world = build_world(vec![
        Room::new("A", "a", "A.").with_exit(door("Z", &["ON"])),
        Room::new("Z", "z", "Z."),
    ])
    .unwrap();

    assert!(world.room("A").unwrap().find_egress_by_alias("ON").is_some());
}

#[test]
fn duplicate_item_labels_rejected_across_rooms() {
    let err = build_world(vec![
        Room::new("A", "a", "A.").with_item(Item::new("KEY", "a key", "Brass.")),
        Room::new("B", "b", "B.").with_item(Item::new("KEY", "a key", "Iron.")),
    ])
    .unwrap_err();

    assert_eq!(err.kind, ErrorKind::DuplicateItemLabel("KEY".to_string()));
}

#[test]
fn aliases_normalized_to_upper_case() {
    let world = build_world(vec![
        Room::new("A", "a", "A.")
            .with_exit(door("A", &["Loop", "around"]))
            .with_item(Item::new("PEN", "a pen", "Blue.").with_aliases(["pen", "Biro"])),
    ])
    .unwrap();

    let room = world.room("A").unwrap();
    assert_eq!(room.exits[0].aliases, vec!["LOOP", "AROUND"]);
    assert!(room.find_item_by_alias("BIRO").is_some());
}
