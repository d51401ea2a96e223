use std::collections::HashMap;
use std::hash::Hash;

/// A side table attaching transient algorithm state to vertices or edges
/// without touching the entities themselves.  Keyed by handle identity, so
/// two edges with equal labels and endpoints keep separate decorations.
///
/// Decorations live for one algorithm run and are passed around explicitly;
/// nothing in the graph knows they exist.
#[derive(Debug, Clone)]
pub struct Decoration<K, T> {
    map: HashMap<K, T>,
}

impl<K, T> Decoration<K, T>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Decoration {
            map: HashMap::new(),
        }
    }

    /// Attaches `value` to `key`, replacing any previous decoration.
    pub fn set(&mut self, key: K, value: T) -> Option<T> {
        self.map.insert(key, value)
    }

    pub fn get(&self, key: &K) -> Option<&T> {
        self.map.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut T> {
        self.map.get_mut(key)
    }

    pub fn remove(&mut self, key: &K) -> Option<T> {
        self.map.remove(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }
}

impl<K, T> Default for Decoration<K, T>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut decoration = Decoration::new();
        decoration.set("a", 1);
        decoration.set("b", 2);
        assert_eq!(decoration.get(&"a"), Some(&1));
        assert_eq!(decoration.get(&"b"), Some(&2));
        assert_eq!(decoration.get(&"c"), None);
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let mut decoration = Decoration::new();
        assert_eq!(decoration.set("a", 1), None);
        assert_eq!(decoration.set("a", 2), Some(1));
        assert_eq!(decoration.get(&"a"), Some(&2));
    }

    #[test]
    fn test_remove() {
        let mut decoration = Decoration::new();
        decoration.set("a", 1);
        assert_eq!(decoration.remove(&"a"), Some(1));
        assert!(!decoration.contains(&"a"));
    }
}
