//! End-to-end tests: record file on disk -> graph -> path -> hop labels.

use costar_core::{CostarError, Graph};
use std::fs;
use tempfile::tempdir;

const TWO_MOVIES: &str = "Movie One\nAlice\nBob\n\nMovie Two\nBob\nCarol\n";

#[test]
fn test_two_movie_scenario() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("movies.txt");
    fs::write(&path, TWO_MOVIES).expect("Failed to write record file");

    let graph = Graph::from_path(&path).expect("Failed to build graph");
    let found = graph.shortest_path("Alice", "Carol").expect("Path should exist");
    assert_eq!(found, vec!["Alice", "Bob", "Carol"]);

    let labels: Vec<&str> = graph
        .hops(&found)
        .expect("Path hops should be adjacent")
        .iter()
        .map(|hop| hop.event)
        .collect();
    assert_eq!(labels, vec!["Movie One", "Movie Two"]);
}

#[test]
fn test_bacon_style_dataset() {
    let input = "\
Apollo 13 (1995)
Tom Hanks
Kevin Bacon
Bill Paxton

Big (1988)
Tom Hanks
Elizabeth Perkins

Footloose (1984)
Kevin Bacon
Lori Singer

Titanic (1997)
Bill Paxton
Kate Winslet
Leonardo DiCaprio

The Beach (2000)
Leonardo DiCaprio
Tilda Swinton

Unrelated Short (2001)
Someone Else
";
    let graph = Graph::from_reader(input.as_bytes()).expect("Failed to build graph");

    // Short film with one credited actor contributes nothing
    assert!(!graph.contains("Someone Else"));

    let path = graph
        .shortest_path("Tilda Swinton", "Kevin Bacon")
        .expect("Path should exist");
    assert_eq!(
        path,
        vec!["Tilda Swinton", "Leonardo DiCaprio", "Bill Paxton", "Kevin Bacon"]
    );

    let hops = graph.hops(&path).unwrap();
    assert_eq!(hops[0].event, "The Beach (2000)");
    assert_eq!(hops[1].event, "Titanic (1997)");
    assert_eq!(hops[2].event, "Apollo 13 (1995)");

    assert_eq!(graph.shortest_path("Kevin Bacon", "Kevin Bacon").unwrap().len(), 1);
    assert_eq!(graph.shortest_path("kevin bacon", "Kevin Bacon"), None);
}

#[test]
fn test_later_film_does_not_relabel_edge() {
    let input = "First Film\nAlice\nBob\n\nSecond Film\nBob\nAlice\nCarol\n";
    let graph = Graph::from_reader(input.as_bytes()).unwrap();

    assert_eq!(graph.edge_label("Alice", "Bob"), Some("First Film"));
    assert_eq!(graph.edge_label("Bob", "Alice"), Some("First Film"));
    assert_eq!(graph.edge_label("Carol", "Alice"), Some("Second Film"));
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempdir().expect("Failed to create temp dir");
    let missing = dir.path().join("nope.txt");

    match Graph::from_path(&missing) {
        Err(CostarError::Open { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected open error, got {:?}", other.map(|g| g.entity_count())),
    }
}

#[test]
fn test_invalid_utf8_is_a_read_error() {
    let bytes: &[u8] = b"Movie\nAlice\n\xff\xfe\n";
    let err = Graph::from_reader(bytes).unwrap_err();
    assert!(matches!(err, CostarError::Read(_)));
}
