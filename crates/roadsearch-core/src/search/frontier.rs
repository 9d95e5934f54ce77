use std::cmp::Ordering;

use crate::graph::VertexId;

/// Priority-queue entry for the cost-ordered strategies.
///
/// Orders by priority, then by vertex id, so wrapping in `Reverse` inside a
/// `BinaryHeap` pops the cheapest entry and breaks exact ties toward the
/// smaller vertex id.
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub priority: f64,
    pub vertex: VertexId,
}

impl HeapEntry {
    pub fn new(priority: f64, vertex: VertexId) -> Self {
        HeapEntry { priority, vertex }
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;

    #[test]
    fn test_min_heap_order() {
        let mut heap = BinaryHeap::new();
        heap.push(Reverse(HeapEntry::new(3.0, VertexId(1))));
        heap.push(Reverse(HeapEntry::new(1.0, VertexId(2))));
        heap.push(Reverse(HeapEntry::new(2.0, VertexId(3))));

        let order: Vec<f64> = std::iter::from_fn(|| heap.pop().map(|Reverse(e)| e.priority)).collect();
        assert_eq!(order, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_ties_pop_smaller_vertex_first() {
        let mut heap = BinaryHeap::new();
        heap.push(Reverse(HeapEntry::new(5.0, VertexId(9))));
        heap.push(Reverse(HeapEntry::new(5.0, VertexId(4))));
        heap.push(Reverse(HeapEntry::new(5.0, VertexId(7))));

        let Reverse(first) = heap.pop().unwrap();
        assert_eq!(first.vertex, VertexId(4));
    }

    #[test]
    fn test_stale_duplicates_are_kept() {
        let mut heap = BinaryHeap::new();
        heap.push(Reverse(HeapEntry::new(6.0, VertexId(1))));
        heap.push(Reverse(HeapEntry::new(3.0, VertexId(1))));
        assert_eq!(heap.len(), 2);
    }
}
