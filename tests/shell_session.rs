//! End-to-end console session tests

use std::fs;
use std::io::Cursor;

use berry_catalog::catalog::Catalog;
use berry_catalog::shell::Shell;
use berry_catalog::snapshot::{BookStore, JsonFileStore};
use tempfile::TempDir;

/// Drive a full command session over scripted input and collect the
/// console output.
fn run_session(catalog: &mut Catalog, store: &dyn BookStore, script: &str) -> String {
    let mut output = Vec::new();
    let mut shell = Shell::new(Cursor::new(script), &mut output, catalog, store);
    shell.run().expect("session should run to completion");
    drop(shell);
    String::from_utf8(output).expect("console output should be utf-8")
}

fn store_in(dir: &TempDir) -> JsonFileStore {
    JsonFileStore::new(
        dir.path().join("books.json"),
        dir.path().join("books.out.json"),
    )
}

#[test]
fn test_add_check_out_and_return_flow() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let mut catalog = Catalog::new();

    let script = "I\nDune\nFrank\nHerbert\n\
                  N\nAnn\nLee\n\
                  C\nAnn\nLee\nDune\n\
                  P\nAnn\nLee\n\
                  U\nAnn\nLee\nDune\n\
                  P\nAnn\nLee\n\
                  X\n";
    let printed = run_session(&mut catalog, &store, script);

    assert!(printed.contains("Book added to the library."));
    assert!(printed.contains("Patron added to the library."));
    assert!(printed.contains("Dune has been checked out by Ann Lee."));
    assert!(printed.contains("Books checked out by Ann Lee:"));
    assert!(printed.contains("- Dune by Frank Herbert"));
    assert!(printed.contains("Dune has been returned."));
    assert!(printed.contains("Ann Lee has no books checked out."));
    assert!(!catalog.books()[0].checked_out);
}

#[test]
fn test_bad_command_input_is_reported_and_loop_continues() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let mut catalog = Catalog::new();

    let printed = run_session(&mut catalog, &store, "zz\n\nq\nv\nX\n");

    assert!(printed.contains("Commands are a single letter"));
    assert!(printed.contains("Unknown command 'q'"));
    // Lowercase v still lists books afterwards.
    assert!(printed.contains("No books in the library."));
    assert!(printed.contains("Goodbye."));
}

#[test]
fn test_title_search_reports_availability() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let mut catalog = Catalog::new();

    let script = "I\nDune\nFrank\nHerbert\n\
                  B\ndUNE\n\
                  B\nHyperion\n\
                  X\n";
    let printed = run_session(&mut catalog, &store, script);

    assert!(printed.contains("Dune by Frank Herbert"));
    assert!(printed.contains("Book is available."));
    assert!(printed.contains("Book not found."));
}

#[test]
fn test_author_search_finds_books_entered_in_two_parts() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let mut catalog = Catalog::new();

    let script = "I\nDune\nFrank\nHerbert\n\
                  A\nfrank\nherbert\n\
                  A\nUrsula\nLeGuin\n\
                  X\n";
    let printed = run_session(&mut catalog, &store, script);

    assert!(printed.contains("Books by frank herbert:"));
    assert!(printed.contains("- Dune by Frank Herbert"));
    assert!(printed.contains("No books found by Ursula LeGuin."));
}

#[test]
fn test_rules_hold_while_a_book_is_checked_out() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let mut catalog = Catalog::new();

    let script = "I\nDune\nFrank\nHerbert\n\
                  N\nAnn\nLee\n\
                  C\nAnn\nLee\nDune\n\
                  B\nDune\n\
                  C\nAnn\nLee\nDune\n\
                  M\nDune\nFrank\nHerbert\n\
                  D\nAnn\nLee\n\
                  X\n";
    let printed = run_session(&mut catalog, &store, script);

    assert!(printed.contains("Book is checked out."));
    assert!(printed.contains("Business rule violation: Book is already checked out"));
    assert!(printed.contains("Book is checked out and cannot be removed"));
    assert!(printed.contains("Patron has checked-out books and cannot be removed"));
    assert_eq!(catalog.books().len(), 1);
    assert_eq!(catalog.patrons().len(), 1);
}

#[test]
fn test_return_by_wrong_patron_keeps_book_checked_out() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let mut catalog = Catalog::new();

    let script = "I\nDune\nFrank\nHerbert\n\
                  N\nAnn\nLee\n\
                  N\nBob\nSmith\n\
                  C\nAnn\nLee\nDune\n\
                  U\nBob\nSmith\nDune\n\
                  X\n";
    let printed = run_session(&mut catalog, &store, script);

    assert!(printed.contains("Book is not checked out by Bob Smith"));
    assert!(catalog.books()[0].checked_out);
}

#[test]
fn test_sort_by_author_via_prompt() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let mut catalog = Catalog::new();

    let script = "I\nHyperion\nDan\nSimmons\n\
                  I\nDune\nFrank\nHerbert\n\
                  S\nA\n\
                  X\n";
    let printed = run_session(&mut catalog, &store, script);

    assert!(printed.contains("List of Books:"));
    assert_eq!(catalog.books()[0].author, "Dan Simmons");
    assert_eq!(catalog.books()[1].author, "Frank Herbert");
}

#[test]
fn test_invalid_sort_choice_defaults_to_title() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let mut catalog = Catalog::new();

    let script = "I\nHyperion\nDan\nSimmons\n\
                  I\nDune\nFrank\nHerbert\n\
                  S\nZ\n\
                  X\n";
    let printed = run_session(&mut catalog, &store, script);

    assert!(printed.contains("Invalid choice; sorting by title."));
    assert_eq!(catalog.books()[0].title, "Dune");
    assert_eq!(catalog.books()[1].title, "Hyperion");
}

#[test]
fn test_multi_word_titles_flow_through_prompts() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let mut catalog = Catalog::new();

    let script = "I\nThe Left Hand of Darkness\nUrsula\nLeGuin\n\
                  N\nAnn\nLee\n\
                  C\nAnn\nLee\nthe left hand of darkness\n\
                  X\n";
    let printed = run_session(&mut catalog, &store, script);

    assert!(printed.contains("The Left Hand of Darkness has been checked out by Ann Lee."));
}

#[test]
fn test_load_then_save_round_trips_records() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(
        dir.path().join("books.json"),
        r#"[{"Title": "Dune", "Author": "Frank Herbert", "CheckedOut": false}]"#,
    )
    .unwrap();

    let mut catalog = Catalog::new();
    let printed = run_session(&mut catalog, &store, "R\nV\nW\nX\n");

    assert!(printed.contains("Loaded 1 book(s)."));
    assert!(printed.contains("- Dune by Frank Herbert"));
    assert!(printed.contains("Saved 1 book(s)."));

    // The save target is a separate file holding the same records.
    let reloaded = JsonFileStore::new(dir.path().join("books.out.json"), dir.path().join("x"))
        .load()
        .unwrap();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded[0].title, "Dune");
    assert_eq!(reloaded[0].author, "Frank Herbert");
    assert!(!reloaded[0].checked_out);
}

#[test]
fn test_load_command_appends_to_books_already_in_memory() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(
        dir.path().join("books.json"),
        r#"[{"Title": "Hyperion", "Author": "Dan Simmons", "CheckedOut": false}]"#,
    )
    .unwrap();

    let mut catalog = Catalog::new();
    let script = "I\nDune\nFrank\nHerbert\n\
                  R\n\
                  X\n";
    run_session(&mut catalog, &store, script);

    let titles: Vec<_> = catalog.books().iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, ["Dune", "Hyperion"]);
}

#[test]
fn test_malformed_book_file_aborts_load_and_session_continues() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(dir.path().join("books.json"), "{ not json").unwrap();

    let mut catalog = Catalog::new();
    let printed = run_session(&mut catalog, &store, "R\nV\nX\n");

    assert!(printed.contains("Malformed book file"));
    assert!(printed.contains("No books in the library."));
    assert!(catalog.books().is_empty());
}

#[test]
fn test_startup_load_runs_only_when_the_file_exists() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(
        dir.path().join("books.json"),
        r#"[{"Title": "Dune", "Author": "Frank Herbert", "CheckedOut": false}]"#,
    )
    .unwrap();

    let mut catalog = Catalog::new();
    let mut output = Vec::new();
    let mut shell = Shell::new(Cursor::new("X\n"), &mut output, &mut catalog, &store);
    let path = dir.path().join("books.json");
    shell.load_if_present(path.to_str().unwrap()).unwrap();
    shell.run().unwrap();
    drop(shell);

    let printed = String::from_utf8(output).unwrap();
    assert!(printed.contains("Loaded 1 book(s)."));
    assert_eq!(catalog.books().len(), 1);

    // Without a file nothing is loaded and nothing is reported.
    let dir2 = TempDir::new().unwrap();
    let store2 = store_in(&dir2);
    let mut catalog2 = Catalog::new();
    let mut output2 = Vec::new();
    let mut shell2 = Shell::new(Cursor::new("X\n"), &mut output2, &mut catalog2, &store2);
    let missing = dir2.path().join("books.json");
    shell2.load_if_present(missing.to_str().unwrap()).unwrap();
    shell2.run().unwrap();
    drop(shell2);

    let printed2 = String::from_utf8(output2).unwrap();
    assert!(!printed2.contains("Loaded"));
    assert!(catalog2.books().is_empty());
}

#[test]
fn test_end_of_input_ends_the_session() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let mut catalog = Catalog::new();

    // No X command; the script simply runs out.
    let printed = run_session(&mut catalog, &store, "V\n");
    assert!(printed.contains("No books in the library."));
}
