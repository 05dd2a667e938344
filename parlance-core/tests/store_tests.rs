//! Store integration tests: add/remove/lookup partitioning and the
//! pick-then-render path.

use parlance_core::{Intent, Locale, ResponseStore};
use parlance_renderer::ScriptedRandom;

fn en() -> Locale {
    Locale::from("en")
}
fn es() -> Locale {
    Locale::from("es")
}
fn greet() -> Intent {
    Intent::from("greet")
}
fn bye() -> Intent {
    Intent::from("bye")
}

/// The store used across the multi-locale cases:
/// en/greet ×3, en/bye ×2, es/greet ×2, es/bye ×3.
fn populated() -> ResponseStore {
    let mut store = ResponseStore::new();
    store.add(&en(), &greet(), "Hello");
    store.add(&en(), &greet(), "Greetings");
    store.add(&en(), &greet(), "Hi");
    store.add(&en(), &bye(), "Goodbye");
    store.add(&en(), &bye(), "Bye");
    store.add(&es(), &greet(), "Hola");
    store.add(&es(), &greet(), "Holi!");
    store.add(&es(), &bye(), "Hasta luego");
    store.add(&es(), &bye(), "Hasta otra");
    store.add(&es(), &bye(), "Nos vemos!");
    store
}

// ---------------------------------------------------------------------------
// 1. Add
// ---------------------------------------------------------------------------

#[test]
fn add_stores_an_answer() {
    let mut store = ResponseStore::new();
    store.add(&en(), &greet(), "Hello");
    assert_eq!(store.find_all_answers(&en(), &greet()), ["Hello"]);
}

#[test]
fn add_rejects_duplicates() {
    let mut store = ResponseStore::new();
    store.add(&en(), &greet(), "Hello");
    store.add(&en(), &greet(), "Hello");
    assert_eq!(store.find_all_answers(&en(), &greet()).len(), 1);
}

#[test]
fn add_preserves_insertion_order() {
    let store = populated();
    assert_eq!(
        store.find_all_answers(&en(), &greet()),
        ["Hello", "Greetings", "Hi"]
    );
}

#[test]
fn intents_of_one_locale_are_independent() {
    let store = populated();
    assert_eq!(store.find_all_answers(&en(), &greet()).len(), 3);
    assert_eq!(store.find_all_answers(&en(), &bye()).len(), 2);
}

#[test]
fn locales_are_independent() {
    let store = populated();
    assert_eq!(store.find_all_answers(&en(), &greet()).len(), 3);
    assert_eq!(store.find_all_answers(&en(), &bye()).len(), 2);
    assert_eq!(store.find_all_answers(&es(), &greet()).len(), 2);
    assert_eq!(store.find_all_answers(&es(), &bye()).len(), 3);
}

// ---------------------------------------------------------------------------
// 2. Remove
// ---------------------------------------------------------------------------

#[test]
fn remove_touches_only_its_pair() {
    let mut store = populated();
    store.remove(&es(), &greet(), "Holi!");
    assert_eq!(store.find_all_answers(&en(), &greet()).len(), 3);
    assert_eq!(store.find_all_answers(&en(), &bye()).len(), 2);
    assert_eq!(store.find_all_answers(&es(), &greet()), ["Hola"]);
    assert_eq!(store.find_all_answers(&es(), &bye()).len(), 3);
}

#[test]
fn remove_keeps_relative_order() {
    let mut store = populated();
    store.remove(&en(), &greet(), "Greetings");
    assert_eq!(store.find_all_answers(&en(), &greet()), ["Hello", "Hi"]);
}

#[test]
fn remove_of_non_existing_answer_is_a_no_op() {
    let mut store = ResponseStore::new();
    store.add(&en(), &greet(), "Hello");
    store.remove(&en(), &greet(), "Hell");
    assert_eq!(store.find_all_answers(&en(), &greet()).len(), 1);
}

#[test]
fn remove_on_unknown_keys_is_a_no_op() {
    let mut store = ResponseStore::new();
    store.remove(&en(), &greet(), "Hello");
    assert!(store.find_all_answers(&en(), &greet()).is_empty());
}

// ---------------------------------------------------------------------------
// 3. Find all answers
// ---------------------------------------------------------------------------

#[test]
fn unknown_locale_yields_empty() {
    let mut store = ResponseStore::new();
    store.add(&en(), &greet(), "Hello");
    assert!(store.find_all_answers(&es(), &greet()).is_empty());
}

#[test]
fn unknown_intent_yields_empty() {
    let mut store = ResponseStore::new();
    store.add(&en(), &greet(), "Hello");
    assert!(store.find_all_answers(&en(), &bye()).is_empty());
}

// ---------------------------------------------------------------------------
// 4. Run
// ---------------------------------------------------------------------------

#[test]
fn run_returns_the_single_literal_answer() {
    let mut store = ResponseStore::new();
    store.add(&en(), &greet(), "Hello");
    let mut rng = ScriptedRandom::new([0]);
    assert_eq!(
        store.run_with(&en(), &greet(), &mut rng),
        Some("Hello".to_owned())
    );
}

#[test]
fn run_on_empty_pair_returns_none() {
    let store = ResponseStore::new();
    let mut rng = ScriptedRandom::new([]);
    assert_eq!(store.run_with(&en(), &greet(), &mut rng), None);
}

#[test]
fn run_picks_by_template_index_then_renders() {
    let mut store = ResponseStore::new();
    store.add(&en(), &greet(), "Hello");
    store.add(&en(), &greet(), "(Hi|Hey) user");
    // First pick selects the template, second resolves its group.
    let mut rng = ScriptedRandom::new([1, 0]);
    assert_eq!(
        store.run_with(&en(), &greet(), &mut rng),
        Some("Hi user".to_owned())
    );
}

#[test]
fn run_output_stays_within_the_option_set() {
    let mut store = ResponseStore::new();
    store.add(&en(), &greet(), "(Hi|Hello) user");
    for _ in 0..50 {
        let text = store.run(&en(), &greet()).expect("one template stored");
        assert!(
            text == "Hi user" || text == "Hello user",
            "unexpected rendering: {text}"
        );
    }
}

#[test]
fn run_never_mutates_the_stored_template() {
    let mut store = ResponseStore::new();
    store.add(&en(), &greet(), "(Hi|Hello) user");
    let mut rng = ScriptedRandom::new([0, 1]);
    store.run_with(&en(), &greet(), &mut rng);
    assert_eq!(store.find_all_answers(&en(), &greet()), ["(Hi|Hello) user"]);
}
