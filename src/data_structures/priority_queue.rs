use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-priority queue over `BinaryHeap` used by Dijkstra and Kruskal.
///
/// Entries with equal priority pop in ascending order of their value, so
/// both algorithms make the same choice on every run.
#[derive(Debug)]
pub struct MinQueue<V, P>
where
    V: Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> MinQueue<V, P>
where
    V: Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        MinQueue {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes `value` with the given priority
    pub fn push(&mut self, value: V, priority: P) {
        self.heap.push(Reverse((priority, value)));
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, value))| (value, priority))
    }

    /// Priority of the entry `pop` would return next
    pub fn peek_priority(&self) -> Option<P> {
        self.heap.peek().map(|Reverse((priority, _))| *priority)
    }
}

impl<V, P> Default for MinQueue<V, P>
where
    V: Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> FromIterator<(V, P)> for MinQueue<V, P>
where
    V: Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    fn from_iter<I: IntoIterator<Item = (V, P)>>(iter: I) -> Self {
        MinQueue {
            heap: iter
                .into_iter()
                .map(|(value, priority)| Reverse((priority, value)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_smallest_priority_first() {
        let mut queue = MinQueue::new();
        queue.push("c", 5u64);
        queue.push("a", 1);
        queue.push("b", 3);

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek_priority(), Some(1));
        assert_eq!(queue.pop(), Some(("a", 1)));
        assert_eq!(queue.pop(), Some(("b", 3)));
        assert_eq!(queue.pop(), Some(("c", 5)));
        assert!(queue.pop().is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn equal_priorities_pop_in_value_order() {
        let mut queue: MinQueue<&str, u64> = [("z", 2), ("m", 2), ("a", 2)].into_iter().collect();
        assert_eq!(queue.pop(), Some(("a", 2)));
        assert_eq!(queue.pop(), Some(("m", 2)));
        assert_eq!(queue.pop(), Some(("z", 2)));
    }
}
