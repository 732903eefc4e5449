use std::io::Cursor;

use game_catalog::{run_app, App, Game, Store};
use pretty_assertions::assert_eq;

const ADD_DOOM: &str = "1\nDoom\nid Software\n1993\n";
const ADD_QUAKE: &str = "1\nQuake\nid Software\n1996\n";

/// Run a scripted session against a fresh in-memory store. Returns everything
/// printed plus the games left in the store.
fn run_session(script: &str) -> (String, Vec<Game>) {
    let store = Store::open_in_memory().unwrap();
    let mut app = App::new(store, Cursor::new(script.to_string()), Vec::new());

    run_app(&mut app).unwrap();

    let (store, _, output) = app.into_parts();
    let games = store.list_games().unwrap();
    (String::from_utf8(output).unwrap(), games)
}

fn names(games: &[Game]) -> Vec<&str> {
    games.iter().map(|game| game.name.as_str()).collect()
}

#[test]
fn add_then_list() {
    let script = format!("{ADD_DOOM}{ADD_QUAKE}5\n6\n");
    let (output, games) = run_session(&script);

    assert_eq!(names(&games), vec!["Doom", "Quake"]);
    assert_eq!(games[0].publisher, "id Software");
    assert_eq!(games[0].date, "1993");
    assert!(output.contains("Done!"));
    assert!(output.contains("1. Doom\n2. Quake\n"));
}

#[test]
fn add_reprompts_blank_fields() {
    let (output, games) = run_session("1\n\nDoom\n  \nid Software\n\n1993\n6\n");

    assert_eq!(names(&games), vec!["Doom"]);
    assert_eq!(output.matches("Invalid input!").count(), 3);
}

#[test]
fn add_keeps_values_as_typed() {
    let (_, games) = run_session("1\n  Doom \nid Software\n1993\n6\n");

    assert_eq!(games[0].name, "  Doom ");
}

#[test]
fn menus_show_one_cursor() {
    let script = format!("{ADD_DOOM}3\n1\n4\n6\n");
    let (output, _) = run_session(&script);

    assert!(output.contains("5. List games\n6. Exit\n>>"));
    assert!(output.contains("3. Release date\n4. Back\n>>"));
    assert!(!output.contains(">>\n>>"));
}

#[test]
fn list_on_empty_catalog_reports_no_games() {
    let (output, games) = run_session("5\n6\n");

    assert!(games.is_empty());
    assert!(output.contains("You have not added any games yet!"));
}

#[test]
fn edit_changes_only_the_chosen_field() {
    let script = format!("{ADD_DOOM}{ADD_QUAKE}3\n1\n2\nGT Interactive\n4\n6\n");
    let (output, games) = run_session(&script);

    assert_eq!(games[0].name, "Doom");
    assert_eq!(games[0].publisher, "GT Interactive");
    assert_eq!(games[0].date, "1993");
    assert_eq!(games[1].publisher, "id Software");
    assert!(output.contains("Name - Doom\nPublisher - id Software\nRelease date - 1993\n"));
}

#[test]
fn edit_loops_until_back() {
    let script = format!("{ADD_DOOM}3\n1\n1\nDoom II\n3\n1994\n9\n4\n6\n");
    let (output, games) = run_session(&script);

    assert_eq!(games[0].name, "Doom II");
    assert_eq!(games[0].date, "1994");
    assert!(output.contains("Name - Doom II\n"));
    assert!(output.contains("Invalid input!"));
}

#[test]
fn edit_rejects_out_of_range_selection() {
    let script = format!("{ADD_DOOM}3\n2\n0\n1\n4\n6\n");
    let (output, _) = run_session(&script);

    assert_eq!(output.matches("Invalid input!").count(), 2);
}

#[test]
fn delete_removes_only_the_chosen_game() {
    let script = format!("{ADD_DOOM}{ADD_QUAKE}4\n2\n6\n");
    let (output, games) = run_session(&script);

    assert_eq!(names(&games), vec!["Doom"]);
    assert!(output.contains("Game deleted!"));
}

#[test]
fn edit_and_delete_on_empty_catalog() {
    let (output, _) = run_session("3\n4\n6\n");

    assert!(output.contains("No games to edit."));
    assert!(output.contains("No games to delete!"));
}

#[test]
fn find_by_shared_publisher_token() {
    let script = format!("{ADD_DOOM}{ADD_QUAKE}2\nid\n6\n");
    let (output, _) = run_session(&script);

    let results = output.split("Found for your query:").nth(1).unwrap();
    assert!(results.contains("1. Doom\n2. Quake\n"));
}

#[test]
fn find_by_year_returns_one_game() {
    let script = format!("{ADD_DOOM}{ADD_QUAKE}2\n1993\n6\n");
    let (output, _) = run_session(&script);

    let results = output.split("Found for your query:").nth(1).unwrap();
    assert!(results.contains("1. Doom\n"));
    assert!(!results.contains("Quake"));
}

#[test]
fn find_without_matches() {
    let script = format!("{ADD_DOOM}2\nZelda\n6\n");
    let (output, _) = run_session(&script);

    assert!(output.contains("Nothing found for your query!"));
}

#[test]
fn invalid_menu_choice_is_reported() {
    let (output, _) = run_session("9\nabc\n6\n");

    assert_eq!(output.matches("Invalid input!").count(), 2);
}

#[test]
fn end_of_input_ends_the_session() {
    let (_, games) = run_session("");
    assert!(games.is_empty());
}

#[test]
fn end_of_input_mid_flow_discards_partial_game() {
    let (_, games) = run_session("1\nDoom\nid Software\n");
    assert!(games.is_empty());
}
