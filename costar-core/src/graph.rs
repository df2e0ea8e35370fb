//! Co-appearance graph.
//!
//! Entities (actors) become nodes; every event (film) connects each pair of
//! its participants with an undirected edge labeled by the event.
//!
//! # Layout
//!
//! ```text
//! EntityRegistry   name <-> EntityId
//! events           EventId -> label
//! adjacency        EntityId -> [(neighbor, EventId)]   (edge-creation order)
//! pairs            (low, high) -> EventId               (edge existence)
//! ```
//!
//! The first event to connect a pair owns that edge. Later events that
//! connect the same pair leave it untouched, so the label reported for a hop
//! is always the earliest shared event in the input.

use crate::error::{CostarError, Result};
use crate::records::{RecordGroup, RecordReader};
use crate::registry::{EntityId, EntityRegistry};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Index of an interned event label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventId(u32);

impl EventId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Undirected, edge-labeled co-appearance graph.
///
/// Built once, then only read. All query methods take `&self`, so one graph
/// can be shared between threads without locking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    entities: EntityRegistry,
    events: Vec<String>,
    event_index: HashMap<String, EventId>,
    adjacency: Vec<Vec<(EntityId, EventId)>>,
    pairs: HashMap<(EntityId, EntityId), EventId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a stream of record groups.
    ///
    /// Groups without a label or with fewer than two entities are dropped.
    /// The first error produced by the source stops the build and is returned
    /// as is.
    pub fn build<I, E>(records: I) -> std::result::Result<Self, E>
    where
        I: IntoIterator<Item = std::result::Result<RecordGroup, E>>,
    {
        let mut graph = Graph::new();
        let mut dropped = 0usize;

        for record in records {
            let group = record?;
            if !group.is_connectable() {
                debug!(
                    event = %group.event,
                    entities = group.entities.len(),
                    "dropping record group that connects nothing"
                );
                dropped += 1;
                continue;
            }
            graph.connect_group(&group.event, &group.entities);
        }

        info!(
            entities = graph.entity_count(),
            events = graph.event_count(),
            edges = graph.edge_count(),
            dropped,
            "built co-appearance graph"
        );

        Ok(graph)
    }

    /// Build a graph from a line-oriented record stream.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Ok(Self::build(RecordReader::new(reader))?)
    }

    /// Build a graph from a record file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CostarError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "reading record file");
        Self::from_reader(BufReader::new(file))
    }

    /// Connect every pair of `entities` with an edge labeled `event`.
    ///
    /// Pairs that already share an edge keep their existing label. Returns
    /// the number of edges added. A no-op when `event` is empty or fewer than
    /// two entities are given.
    pub fn connect_group<S: AsRef<str>>(&mut self, event: &str, entities: &[S]) -> usize {
        if event.is_empty() || entities.len() < 2 {
            return 0;
        }

        let ids: Vec<EntityId> = entities
            .iter()
            .map(|name| self.ensure_entity(name.as_ref()))
            .collect();
        let event_id = self.intern_event(event);

        let mut added = 0;
        for i in 0..ids.len() - 1 {
            for j in (i + 1)..ids.len() {
                if self.add_edge(ids[i], ids[j], event_id) {
                    added += 1;
                }
            }
        }
        added
    }

    fn ensure_entity(&mut self, name: &str) -> EntityId {
        let id = self.entities.get_or_create(name);
        if id.index() == self.adjacency.len() {
            self.adjacency.push(Vec::new());
        }
        id
    }

    fn intern_event(&mut self, label: &str) -> EventId {
        if let Some(&id) = self.event_index.get(label) {
            return id;
        }
        let id = EventId(self.events.len() as u32);
        self.events.push(label.to_string());
        self.event_index.insert(label.to_string(), id);
        id
    }

    /// Insert the undirected edge a-b unless one already exists.
    fn add_edge(&mut self, a: EntityId, b: EntityId, event: EventId) -> bool {
        if a == b {
            return false;
        }
        let key = pair_key(a, b);
        if self.pairs.contains_key(&key) {
            return false;
        }
        self.pairs.insert(key, event);
        self.adjacency[a.index()].push((b, event));
        self.adjacency[b.index()].push((a, event));
        true
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Number of distinct event labels among the groups that were connected.
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.pairs.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entities.lookup(name).is_some()
    }

    pub(crate) fn entity_id(&self, name: &str) -> Option<EntityId> {
        self.entities.lookup(name)
    }

    /// Ids passed here come from this graph's own adjacency or lookups.
    pub(crate) fn entity_name(&self, id: EntityId) -> &str {
        self.entities.name(id).unwrap_or_default()
    }

    /// Label of the event connecting `a` and `b`, if they share an edge.
    pub fn edge_label(&self, a: &str, b: &str) -> Option<&str> {
        let a = self.entities.lookup(a)?;
        let b = self.entities.lookup(b)?;
        self.label_between(a, b)
    }

    pub(crate) fn label_between(&self, a: EntityId, b: EntityId) -> Option<&str> {
        self.pairs
            .get(&pair_key(a, b))
            .map(|event| self.events[event.index()].as_str())
    }

    /// Neighbors of `name` with the connecting event, in edge-creation order.
    ///
    /// Unknown names have no neighbors.
    pub fn neighbors(&self, name: &str) -> Vec<(&str, &str)> {
        match self.entities.lookup(name) {
            Some(id) => self
                .adjacent(id)
                .iter()
                .map(|&(neighbor, event)| {
                    (
                        self.entity_name(neighbor),
                        self.events[event.index()].as_str(),
                    )
                })
                .collect(),
            None => vec![],
        }
    }

    pub(crate) fn adjacent(&self, id: EntityId) -> &[(EntityId, EventId)] {
        &self.adjacency[id.index()]
    }
}

fn pair_key(a: EntityId, b: EntityId) -> (EntityId, EntityId) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    fn group(event: &str, entities: &[&str]) -> io::Result<RecordGroup> {
        Ok(RecordGroup::new(event, entities.iter().copied()))
    }

    #[test]
    fn test_group_adds_all_pairs() {
        let mut graph = Graph::new();
        let added = graph.connect_group("Heat", &["Pacino", "De Niro", "Kilmer", "Judd"]);

        // C(4, 2)
        assert_eq!(added, 6);
        assert_eq!(graph.edge_count(), 6);
        assert_eq!(graph.entity_count(), 4);
        for (a, b) in [("Pacino", "Judd"), ("De Niro", "Kilmer"), ("Judd", "Kilmer")] {
            assert_eq!(graph.edge_label(a, b), Some("Heat"));
            assert_eq!(graph.edge_label(b, a), Some("Heat"));
        }
    }

    #[test]
    fn test_first_writer_wins() {
        let mut graph = Graph::new();
        graph.connect_group("A", &["x", "y"]);
        let added = graph.connect_group("B", &["x", "y", "z"]);

        // Only x-z and y-z are new
        assert_eq!(added, 2);
        assert_eq!(graph.edge_label("x", "y"), Some("A"));
        assert_eq!(graph.edge_label("y", "x"), Some("A"));
        assert_eq!(graph.edge_label("x", "z"), Some("B"));
    }

    #[test]
    fn test_small_or_unlabeled_groups_are_ignored() {
        let mut graph = Graph::new();
        assert_eq!(graph.connect_group("Solo", &["Alice"]), 0);
        assert_eq!(graph.connect_group("", &["Alice", "Bob"]), 0);
        assert_eq!(graph.connect_group::<&str>("Empty", &[]), 0);

        assert_eq!(graph.entity_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.event_count(), 0);
        assert!(!graph.contains("Alice"));
    }

    #[test]
    fn test_repeated_name_in_group_has_no_self_edge() {
        let mut graph = Graph::new();
        let added = graph.connect_group("Twins", &["Alice", "Bob", "Alice"]);

        assert_eq!(added, 1);
        assert_eq!(graph.edge_label("Alice", "Alice"), None);
        assert_eq!(graph.neighbors("Alice"), vec![("Bob", "Twins")]);
    }

    #[test]
    fn test_neighbors_in_creation_order() {
        let mut graph = Graph::new();
        graph.connect_group("One", &["Alice", "Carol"]);
        graph.connect_group("Two", &["Alice", "Bob"]);
        graph.connect_group("Three", &["Dave", "Alice"]);

        assert_eq!(
            graph.neighbors("Alice"),
            vec![("Carol", "One"), ("Bob", "Two"), ("Dave", "Three")]
        );
        assert!(graph.neighbors("Nobody").is_empty());
    }

    #[test]
    fn test_build_drops_malformed_groups() {
        let records = vec![
            group("Movie One", &["Alice", "Bob"]),
            group("Solo", &["Zed"]),
            group("", &["Yan", "Xi"]),
            group("Movie Two", &["Bob", "Carol"]),
        ];
        let graph = Graph::build(records).unwrap();

        assert_eq!(graph.entity_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.event_count(), 2);
        assert!(!graph.contains("Zed"));
        assert!(!graph.contains("Yan"));
    }

    #[test]
    fn test_build_propagates_source_error_unchanged() {
        #[derive(Debug, PartialEq)]
        struct SourceGone;

        let records: Vec<std::result::Result<RecordGroup, SourceGone>> = vec![
            Ok(RecordGroup::new("Movie One", ["Alice", "Bob"])),
            Err(SourceGone),
            Ok(RecordGroup::new("Movie Two", ["Bob", "Carol"])),
        ];

        assert_eq!(Graph::build(records), Err(SourceGone));
    }

    #[test]
    fn test_from_reader() {
        let input = "Movie One\nAlice\nBob\n\nMovie Two\nBob\nCarol\n";
        let graph = Graph::from_reader(Cursor::new(input)).unwrap();

        assert_eq!(graph.edge_label("Alice", "Bob"), Some("Movie One"));
        assert_eq!(graph.edge_label("Bob", "Carol"), Some("Movie Two"));
        assert_eq!(graph.edge_label("Alice", "Carol"), None);
    }

    #[test]
    fn test_rebuild_is_identical() {
        let input = "F1\na\nb\nc\n\nF2\nc\nd\na\n\nF3\nb\nd\n";
        let first = Graph::from_reader(Cursor::new(input)).unwrap();
        let second = Graph::from_reader(Cursor::new(input)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = Graph::from_path("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, CostarError::Open { .. }));
    }
}
