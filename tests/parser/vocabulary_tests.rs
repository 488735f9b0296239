//! Vocabulary tests.

use questline_parser::{Verb, Vocabulary};

#[test]
fn synonyms_share_a_verb() {
    let vocab = Vocabulary::standard();

    for word in ["GO", "MOVE", "WALK"] {
        assert_eq!(vocab.lookup(word).unwrap().verb, Verb::Go);
    }
    for word in ["QUIT", "EXIT", "Q"] {
        assert_eq!(vocab.lookup(word).unwrap().verb, Verb::Quit);
    }
    for word in ["INVENTORY", "INV", "I"] {
        assert_eq!(vocab.lookup(word).unwrap().verb, Verb::Inventory);
    }
}

#[test]
fn directions_imply_recipient() {
    let vocab = Vocabulary::standard();

    let word = vocab.lookup("NE").unwrap();
    assert_eq!(word.verb, Verb::Go);
    assert_eq!(word.implied_recipient, Some("NORTHEAST"));

    let word = vocab.lookup("DOWN").unwrap();
    assert_eq!(word.implied_recipient, Some("DOWN"));
}

#[test]
fn lookup_expects_upper_case() {
    let vocab = Vocabulary::standard();
    assert!(vocab.lookup("go").is_none());
    assert!(vocab.lookup("FROBNICATE").is_none());
}

#[test]
fn custom_vocabulary() {
    let mut vocab = Vocabulary::new();
    vocab.register_verb(Verb::Take, ["GRAB"]);
    vocab.register_instrument_marker("VIA");

    assert_eq!(vocab.lookup("GRAB").unwrap().verb, Verb::Take);
    assert!(vocab.lookup("TAKE").is_none());
    assert!(vocab.is_instrument_marker("VIA"));
    assert!(!vocab.is_instrument_marker("WITH"));
}

#[test]
fn words_are_sorted() {
    let vocab = Vocabulary::standard();
    let words = vocab.words();

    let mut sorted = words.clone();
    sorted.sort_unstable();
    assert_eq!(words, sorted);
    assert!(words.contains(&"EXITS"));
}
