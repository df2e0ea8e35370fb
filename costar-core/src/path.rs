//! Shortest co-appearance paths.
//!
//! Breadth-first search with parent tracking: O(V + E) per query. The first
//! time the target is discovered is at its minimum hop distance. Neighbors
//! are expanded in edge-creation order, so among several equally short paths
//! the one through the earliest-created edges wins and repeated queries
//! always return the same path.

use crate::graph::Graph;
use crate::registry::EntityId;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::VecDeque;
use tracing::debug;

/// One step of a path: `from` and `to` both appeared in `event`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hop<'g> {
    pub from: &'g str,
    pub event: &'g str,
    pub to: &'g str,
}

impl Graph {
    /// Find a shortest path from `start` to `target`.
    ///
    /// Returns the entity names from `start` to `target` inclusive, or `None`
    /// when either name is unknown or the two are not connected. A path from
    /// an entity to itself is the single-element path.
    pub fn shortest_path(&self, start: &str, target: &str) -> Option<Vec<String>> {
        let Some(start_id) = self.entity_id(start) else {
            debug!(entity = start, "start entity not in graph");
            return None;
        };
        let Some(target_id) = self.entity_id(target) else {
            debug!(entity = target, "target entity not in graph");
            return None;
        };

        self.shortest_path_ids(start_id, target_id).map(|ids| {
            ids.into_iter()
                .map(|id| self.entity_name(id).to_string())
                .collect()
        })
    }

    fn shortest_path_ids(&self, start: EntityId, target: EntityId) -> Option<Vec<EntityId>> {
        if start == target {
            return Some(vec![start]);
        }

        let mut visited = vec![false; self.entity_count()];
        let mut parent: Vec<Option<EntityId>> = vec![None; self.entity_count()];
        let mut queue = VecDeque::new();

        visited[start.index()] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for &(neighbor, _) in self.adjacent(current) {
                if visited[neighbor.index()] {
                    continue;
                }
                visited[neighbor.index()] = true;
                parent[neighbor.index()] = Some(current);

                if neighbor == target {
                    // Walk parents back to start
                    let mut path = vec![target];
                    let mut curr = target;
                    while let Some(p) = parent[curr.index()] {
                        path.push(p);
                        curr = p;
                    }
                    path.reverse();
                    return Some(path);
                }

                queue.push_back(neighbor);
            }
        }

        debug!(
            start = self.entity_name(start),
            target = self.entity_name(target),
            "no path between entities"
        );
        None
    }

    /// Hops along `path`, each with the event that connects its endpoints.
    ///
    /// Returns `None` if some consecutive pair in `path` is not adjacent.
    /// A single-element path has no hops.
    pub fn hops<S: AsRef<str>>(&self, path: &[S]) -> Option<Vec<Hop<'_>>> {
        path.windows(2)
            .map(|pair| {
                let from = self.entity_id(pair[0].as_ref())?;
                let to = self.entity_id(pair[1].as_ref())?;
                let event = self.label_between(from, to)?;
                Some(Hop {
                    from: self.entity_name(from),
                    event,
                    to: self.entity_name(to),
                })
            })
            .collect()
    }

    /// Run one [`shortest_path`](Self::shortest_path) query per start name in
    /// parallel against this graph. Results are in the order of `starts`.
    pub fn shortest_paths_to<S>(&self, starts: &[S], target: &str) -> Vec<Option<Vec<String>>>
    where
        S: AsRef<str> + Sync,
    {
        starts
            .par_iter()
            .map(|start| self.shortest_path(start.as_ref(), target))
            .collect()
    }
}
