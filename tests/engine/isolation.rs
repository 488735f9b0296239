//! State isolation and failure-atomicity tests.

use proptest::prelude::*;
use questline_engine::State;
use questline_world::{START_LABEL, default_world};

use crate::{play, two_rooms};

#[test]
fn states_from_one_world_are_independent() {
    let world = two_rooms();
    let mut first = State::new(&world, "A").unwrap();
    let second = State::new(&world, "A").unwrap();

    play(&mut first, "take lamp").unwrap();
    play(&mut first, "east").unwrap();

    assert_eq!(second.current_label(), "A");
    assert!(second.current_room().find_item_by_alias("LAMP").is_some());
    assert!(world.room("A").unwrap().find_item_by_alias("LAMP").is_some());
}

const LINES: &[&str] = &[
    "go east", "go west", "east", "w", "n", "s", "look", "look at desk", "exits",
    "take notebook", "take toothbrush", "take coat", "take coat with hook",
    "drop notebook", "drop coat", "drop toothbrush", "inventory", "go nowhere",
    "debug room", "debug me", "quit", "talk to cat", "go", "take",
];

proptest! {
    #[test]
    fn two_players_never_interfere(
        script in prop::collection::vec(prop::sample::select(LINES), 0..30),
    ) {
        let world = default_world().unwrap();
        let mut player = State::new(&world, START_LABEL).unwrap();
        let bystander = State::new(&world, START_LABEL).unwrap();
        let before = bystander.clone();

        for line in &script {
            let _ = play(&mut player, line);
        }

        prop_assert_eq!(bystander.current_label(), before.current_label());
        prop_assert_eq!(bystander.world(), before.world());
        prop_assert_eq!(bystander.world(), &world);
    }

    #[test]
    fn failed_commands_change_nothing(
        script in prop::collection::vec(prop::sample::select(LINES), 0..30),
    ) {
        let mut state = State::new(&default_world().unwrap(), START_LABEL).unwrap();

        for line in &script {
            let before = state.clone();
            if play(&mut state, line).is_err() {
                prop_assert_eq!(state.current_label(), before.current_label());
                prop_assert_eq!(state.inventory(), before.inventory());
                prop_assert_eq!(state.world(), before.world());
            }
        }
    }
}
