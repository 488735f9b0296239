//! Take, drop, and inventory tests.

use questline_engine::State;
use questline_foundation::ErrorKind;

use crate::{play, two_rooms};

#[test]
fn take_carry_and_drop_elsewhere() {
    let mut state = State::new(&two_rooms(), "A").unwrap();

    assert_eq!(play(&mut state, "take lamp").unwrap().body(), "You take a brass lamp.");
    assert!(state.current_room().items.is_empty());
    assert_eq!(state.inventory().len(), 1);

    play(&mut state, "east").unwrap();
    assert_eq!(play(&mut state, "drop lamp").unwrap().body(), "You drop a brass lamp.");
    assert!(state.inventory().is_empty());
    assert!(state.current_room().find_item_by_alias("LAMP").is_some());
    assert!(state.world().room("A").unwrap().items.is_empty());
}

#[test]
fn inventory_listing() {
    let mut state = State::new(&two_rooms(), "A").unwrap();
    assert_eq!(
        play(&mut state, "inventory").unwrap().body(),
        "You aren't carrying anything."
    );

    play(&mut state, "get lamp").unwrap();
    assert_eq!(
        play(&mut state, "i").unwrap().body(),
        "You are carrying:\n  a brass lamp"
    );
}

#[test]
fn item_errors() {
    let mut state = State::new(&two_rooms(), "A").unwrap();

    let err = play(&mut state, "take sword").unwrap_err();
    assert_eq!(err.to_string(), "there's no \"SWORD\" here");

    let err = play(&mut state, "drop lamp").unwrap_err();
    assert_eq!(err.to_string(), "you aren't carrying \"LAMP\"");

    let err = play(&mut state, "take lamp with tongs").unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::UnsupportedInstrument {
            verb: "TAKE".to_string(),
            instrument: "TONGS".to_string(),
        }
    );
    assert!(state.inventory().is_empty());

    assert_eq!(play(&mut state, "drop").unwrap_err().to_string(), "DROP what?");
    assert_eq!(play(&mut state, "take").unwrap_err().to_string(), "TAKE what?");
}
