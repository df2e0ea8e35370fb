//! Entity registry: interns entity names into dense integer ids.

use std::collections::HashMap;

/// Index of an entity in its [`EntityRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u32);

impl EntityId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Arena of entity names.
///
/// Names are case-sensitive and stored verbatim. Ids are handed out in
/// first-seen order starting at zero and are never reused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityRegistry {
    names: Vec<String>,
    index: HashMap<String, EntityId>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id for `name`, registering it on first sight.
    pub fn get_or_create(&mut self, name: &str) -> EntityId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }

        let id = EntityId(self.names.len() as u32);
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), id);
        id
    }

    pub fn lookup(&self, name: &str) -> Option<EntityId> {
        self.index.get(name).copied()
    }

    /// Name behind `id`, or `None` for an id this registry never handed out.
    pub fn name(&self, id: EntityId) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_create_is_stable() {
        let mut registry = EntityRegistry::new();
        let alice = registry.get_or_create("Alice");
        let bob = registry.get_or_create("Bob");

        assert_ne!(alice, bob);
        assert_eq!(registry.get_or_create("Alice"), alice);
        assert_eq!(registry.len(), 2);
        assert_eq!(alice.index(), 0);
        assert_eq!(bob.index(), 1);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut registry = EntityRegistry::new();
        let lower = registry.get_or_create("kevin bacon");
        let upper = registry.get_or_create("Kevin Bacon");

        assert_ne!(lower, upper);
        assert_eq!(registry.lookup("KEVIN BACON"), None);
    }

    #[test]
    fn test_lookup_and_name() {
        let mut registry = EntityRegistry::new();
        assert!(registry.is_empty());

        let id = registry.get_or_create("Carol");
        assert_eq!(registry.lookup("Carol"), Some(id));
        assert_eq!(registry.lookup("Dave"), None);
        assert_eq!(registry.name(id), Some("Carol"));
    }

    #[test]
    fn test_foreign_id_has_no_name() {
        let mut larger = EntityRegistry::new();
        larger.get_or_create("Alice");
        let bob = larger.get_or_create("Bob");

        let mut smaller = EntityRegistry::new();
        smaller.get_or_create("Carol");

        assert_eq!(smaller.name(bob), None);
    }
}
