//! Whole sessions driven from scripted input.

use std::io::Cursor;

use questline::engine::State;
use questline::runtime::{ReaderEditor, Repl, RuntimeConfig};

fn play_script(script: &str) -> (String, String) {
    let loaded = RuntimeConfig::default().load_world().unwrap();
    let state = State::new(&loaded.world, &loaded.start).unwrap();
    let config = RuntimeConfig::default().with_banner(false);

    let mut repl = Repl::with_editor(ReaderEditor::new(Cursor::new(script)), Vec::new(), state)
        .with_config(&config);
    repl.run().unwrap();

    let room = repl.state().current_label().to_string();
    (room, String::from_utf8(repl.into_output()).unwrap())
}

#[test]
fn scripted_walk_through_house() {
    let (room, output) = play_script("look\ngo south\ntake coat\nnorth\ninventory\n");

    assert_eq!(room, "YOUR_ROOM");
    assert!(output.contains("You shut the door behind you as you go into the hall."));
    assert!(output.contains("You take a raincoat."));
    assert!(output.contains("You are carrying:\n  a raincoat"));
}

#[test]
fn errors_do_not_end_session() {
    let (room, output) = play_script("dance\n\nlook at window\ngo bathroom\n");

    assert_eq!(room, "BATHROOM");
    assert!(output.contains("I don't know how to \"DANCE\"\n\n"));
    assert!(output.contains("I can't LOOK at particular things like \"WINDOW\" yet\n\n"));
}

#[test]
fn quit_stops_reading() {
    let (room, output) = play_script("q\ngo east\n");

    assert_eq!(room, "YOUR_ROOM");
    assert_eq!(output, "Goodbye!\n");
}

#[test]
fn end_of_input_ends_quietly() {
    let (room, output) = play_script("");
    assert_eq!(room, "YOUR_ROOM");
    assert!(output.is_empty());
}
