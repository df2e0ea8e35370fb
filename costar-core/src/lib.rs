//! costar core - co-appearance graphs and shortest connection paths.
//!
//! Entities (actors) are linked by shared events (films). This crate builds an
//! undirected, edge-labeled graph from a line-oriented record stream and
//! answers "how is X connected to Y?" with breadth-first search.
//!
//! # Features
//!
//! - **Streaming build**: record groups are connected as they are read
//! - **First-writer-wins labels**: the first event linking a pair names the edge
//! - **Deterministic BFS**: ties are broken by edge-creation order
//! - **Parallel queries**: independent lookups share one read-only graph
//!
//! # Usage
//!
//! ```
//! use costar_core::Graph;
//! use std::io::Cursor;
//!
//! let input = "Movie One\nAlice\nBob\n\nMovie Two\nBob\nCarol\n";
//! let graph = Graph::from_reader(Cursor::new(input)).unwrap();
//!
//! let path = graph.shortest_path("Alice", "Carol").unwrap();
//! assert_eq!(path, vec!["Alice", "Bob", "Carol"]);
//!
//! let hops = graph.hops(&path).unwrap();
//! assert_eq!(hops[0].event, "Movie One");
//! assert_eq!(hops[1].event, "Movie Two");
//! ```

pub mod error;
pub mod graph;
pub mod path;
pub mod records;
pub mod registry;

pub use error::{CostarError, Result};
pub use graph::{EventId, Graph};
pub use path::Hop;
pub use records::{RecordGroup, RecordReader};
pub use registry::{EntityId, EntityRegistry};
