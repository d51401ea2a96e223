/// A binary min-heap whose entries can be located and re-keyed after
/// insertion.  `insert` returns a handle that stays valid until the entry is
/// removed, which is what Prim-Jarnik needs for its decrease-key step.
///
/// Entries live in a slab indexed by handle; the heap itself stores slab
/// indices, so sift operations move positions around without invalidating
/// handles.  `replace_key` and `remove_min` are O(log n).
pub struct AdaptableHeap<K, V> {
    heap: Vec<usize>,
    entries: Vec<Option<Entry<K, V>>>,
    free: Vec<usize>,
}

/// Handle to an entry in an [`AdaptableHeap`].  Valid until the entry is
/// removed from the queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeapHandle(usize);

struct Entry<K, V> {
    key: K,
    value: V,
    // Index of this entry in `heap`.  Kept in sync by the sift operations.
    pos: usize,
}

impl<K, V> AdaptableHeap<K, V>
where
    K: Ord,
{
    pub fn new() -> Self {
        AdaptableHeap {
            heap: Vec::new(),
            entries: Vec::new(),
            free: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Inserts a keyed entry and returns a handle for later re-keying.
    pub fn insert(&mut self, key: K, value: V) -> HeapHandle {
        let pos = self.heap.len();
        let entry = Entry { key, value, pos };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.entries[slot] = Some(entry);
                slot
            }
            None => {
                self.entries.push(Some(entry));
                self.entries.len() - 1
            }
        };
        self.heap.push(slot);
        self.sift_up(pos);
        HeapHandle(slot)
    }

    /// Removes and returns the entry with the minimum key, invalidating its
    /// handle.
    pub fn remove_min(&mut self) -> Option<(K, V)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let slot = self.heap.pop().expect("heap is non-empty");
        if !self.heap.is_empty() {
            self.entry_mut(self.heap[0]).pos = 0;
            self.sift_down(0);
        }
        let entry = self.entries[slot].take().expect("heap slots are live");
        self.free.push(slot);
        Some((entry.key, entry.value))
    }

    /// Changes the key of a live entry and restores heap order.
    ///
    /// Panics if the handle's entry was already removed.
    pub fn replace_key(&mut self, handle: HeapHandle, key: K) {
        let entry = self.entries[handle.0]
            .as_mut()
            .expect("stale heap handle");
        entry.key = key;
        let pos = entry.pos;
        self.sift_up(pos);
        self.sift_down(pos);
    }

    /// True if the handle still names a queued entry.
    pub fn contains(&self, handle: HeapHandle) -> bool {
        self.entries
            .get(handle.0)
            .is_some_and(|slot| slot.is_some())
    }

    fn entry(&self, slot: usize) -> &Entry<K, V> {
        self.entries[slot].as_ref().expect("heap slots are live")
    }

    fn entry_mut(&mut self, slot: usize) -> &mut Entry<K, V> {
        self.entries[slot].as_mut().expect("heap slots are live")
    }

    fn key_at(&self, pos: usize) -> &K {
        &self.entry(self.heap[pos]).key
    }

    fn swap_positions(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.entry_mut(self.heap[a]).pos = a;
        self.entry_mut(self.heap[b]).pos = b;
    }

    fn sift_up(&mut self, mut pos: usize) {
        self.entry_mut(self.heap[pos]).pos = pos;
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.key_at(pos) >= self.key_at(parent) {
                break;
            }
            self.swap_positions(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut smallest = pos;
            if left < self.heap.len() && self.key_at(left) < self.key_at(smallest) {
                smallest = left;
            }
            if right < self.heap.len() && self.key_at(right) < self.key_at(smallest) {
                smallest = right;
            }
            if smallest == pos {
                break;
            }
            self.swap_positions(pos, smallest);
            pos = smallest;
        }
    }
}

impl<K, V> Default for AdaptableHeap<K, V>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    #[test]
    fn test_remove_min_yields_ascending_keys() {
        let mut heap = AdaptableHeap::new();
        for key in [5, 1, 4, 2, 3] {
            heap.insert(key, ());
        }
        let mut keys = Vec::new();
        while let Some((key, ())) = heap.remove_min() {
            keys.push(key);
        }
        assert_eq!(keys, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_replace_key_decrease_moves_entry_forward() {
        let mut heap = AdaptableHeap::new();
        heap.insert(10, "a");
        let b = heap.insert(20, "b");
        heap.insert(30, "c");
        heap.replace_key(b, 5);
        assert_eq!(heap.remove_min(), Some((5, "b")));
        assert_eq!(heap.remove_min(), Some((10, "a")));
    }

    #[test]
    fn test_replace_key_increase_moves_entry_back() {
        let mut heap = AdaptableHeap::new();
        let a = heap.insert(1, "a");
        heap.insert(2, "b");
        heap.replace_key(a, 9);
        assert_eq!(heap.remove_min(), Some((2, "b")));
        assert_eq!(heap.remove_min(), Some((9, "a")));
    }

    #[test]
    fn test_handles_survive_unrelated_operations() {
        let mut heap = AdaptableHeap::new();
        let handles: Vec<_> = (0..8).map(|i| heap.insert(i * 10, i)).collect();
        heap.remove_min();
        heap.remove_min();
        // Entry 7 is still queued and re-keyable after sifts and removals.
        assert!(heap.contains(handles[7]));
        heap.replace_key(handles[7], 0);
        assert_eq!(heap.remove_min(), Some((0, 7)));
    }

    #[test]
    fn test_contains_goes_false_after_removal() {
        let mut heap = AdaptableHeap::new();
        let handle = heap.insert(1, ());
        assert!(heap.contains(handle));
        heap.remove_min();
        assert!(!heap.contains(handle));
    }

    #[test]
    #[should_panic(expected = "stale heap handle")]
    fn test_replace_key_on_removed_entry_panics() {
        let mut heap = AdaptableHeap::new();
        let handle = heap.insert(1, ());
        heap.remove_min();
        heap.replace_key(handle, 2);
    }

    #[quickcheck]
    fn prop_removal_order_matches_sorted_input(mut keys: Vec<u32>) -> bool {
        let mut heap = AdaptableHeap::new();
        for &key in &keys {
            heap.insert(key, ());
        }
        keys.sort_unstable();
        let drained: Vec<_> = std::iter::from_fn(|| heap.remove_min().map(|(k, ())| k)).collect();
        drained == keys
    }
}
