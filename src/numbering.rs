/// Allocator for vertex numbers.  Numbers are drawn from `[0, capacity)`;
/// freed numbers are recycled in LIFO order before any new number is issued,
/// which keeps the live set inside a bounded range no matter how much
/// insert/remove churn the graph sees.  That bound is what makes a
/// fixed-size adjacency matrix viable in the first place.
#[derive(Debug, Clone)]
pub(crate) struct Numbering {
    capacity: usize,
    next: usize,
    free: Vec<usize>,
}

impl Numbering {
    pub(crate) fn new(capacity: usize) -> Self {
        Numbering {
            capacity,
            next: 0,
            free: Vec::new(),
        }
    }

    /// Takes the most recently freed number, or the next never-issued one.
    /// Exceeding the capacity is out of contract for the graph, so it is an
    /// assertion here rather than a signalled error.
    pub(crate) fn allocate(&mut self) -> usize {
        if let Some(number) = self.free.pop() {
            return number;
        }
        assert!(
            self.next < self.capacity,
            "vertex capacity ({}) exceeded",
            self.capacity
        );
        let number = self.next;
        self.next += 1;
        number
    }

    /// Returns a number to the allocator.  The caller guarantees `number` is
    /// currently issued and in range.
    pub(crate) fn release(&mut self, number: usize) {
        debug_assert!(number < self.capacity);
        debug_assert!(!self.free.contains(&number));
        self.free.push(number);
    }

    /// Forgets all issued and freed numbers, as if freshly constructed.
    pub(crate) fn reset(&mut self) {
        self.next = 0;
        self.free.clear();
    }
}
