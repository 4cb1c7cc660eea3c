//! Iterator-based graph traversals (BFS, DFS) for [`Graph`].
//!
//! Traversals walk positions and yield item references. Every traversal keeps
//! a visited set and marks a position when it is discovered, so each reachable
//! item is yielded exactly once and cycles terminate.
//!
//! Neighbors are expanded in row order. Since [`Graph`] pushes new edges to the
//! front of a row, the most recently connected neighbor is discovered first.

use std::collections::VecDeque;

use crate::graph::access::visited::VisitedFlags;
use crate::graph::basic::item_graph::{EdgePolicy, Graph};
use crate::trace::trace_event;

/// An iterator for Breadth-First Search (BFS).
///
/// This iterator yields items in BFS order.
/// It uses an internal `VecDeque` frontier and a visited set.
pub struct Bfs<'a, P: EdgePolicy, T> {
    graph: &'a Graph<P, T>,
    visited: VisitedFlags,
    queue: VecDeque<usize>,
}

impl<'a, P: EdgePolicy, T> Bfs<'a, P, T> {
    /// Creates a new BFS iterator starting from position `start`.
    ///
    /// An out-of-range `start` yields nothing.
    pub fn new(graph: &'a Graph<P, T>, start: usize) -> Self {
        let mut visited = VisitedFlags::new(graph.size());
        let mut queue = VecDeque::new();

        if visited.try_visit(start) {
            queue.push_back(start);
        }

        Self {
            graph,
            visited,
            queue,
        }
    }

    /// Creates a new BFS iterator starting from the item equal to `start`.
    ///
    /// Returns `None` if no such item exists.
    pub fn from_item(graph: &'a Graph<P, T>, start: &T) -> Option<Self>
    where
        T: PartialEq,
    {
        graph.position(start).map(|position| Self::new(graph, position))
    }
}

impl<'a, P: EdgePolicy, T> Iterator for Bfs<'a, P, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in self.graph.neighbor_positions(u) {
            if self.visited.try_visit(v) {
                self.queue.push_back(v);
            }
        }

        self.graph.get(u)
    }
}

/// An iterator for Depth-First Search (DFS).
///
/// This iterator yields items in DFS order.
/// It uses an internal `Vec` (stack) and a visited set.
pub struct Dfs<'a, P: EdgePolicy, T> {
    graph: &'a Graph<P, T>,
    visited: VisitedFlags,
    stack: Vec<usize>,
}

impl<'a, P: EdgePolicy, T> Dfs<'a, P, T> {
    /// Creates a new DFS iterator starting from position `start`.
    pub fn new(graph: &'a Graph<P, T>, start: usize) -> Self {
        let mut visited = VisitedFlags::new(graph.size());
        let mut stack = Vec::new();

        if visited.try_visit(start) {
            stack.push(start);
        }

        Self {
            graph,
            visited,
            stack,
        }
    }

    /// Creates a new DFS iterator starting from the item equal to `start`.
    pub fn from_item(graph: &'a Graph<P, T>, start: &T) -> Option<Self>
    where
        T: PartialEq,
    {
        graph.position(start).map(|position| Self::new(graph, position))
    }
}

impl<'a, P: EdgePolicy, T> Iterator for Dfs<'a, P, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.stack.pop()?;

        for v in self.graph.neighbor_positions(u) {
            if self.visited.try_visit(v) {
                self.stack.push(v);
            }
        }

        self.graph.get(u)
    }
}

/// Visits every item reachable from the graph's first item in breadth-first
/// order, collecting `f(item)` for each.
///
/// An empty graph produces an empty vector.
pub fn traverse_bfs<P, T, R, F>(graph: &Graph<P, T>, f: F) -> Vec<R>
where
    P: EdgePolicy,
    F: FnMut(&T) -> R,
{
    let results: Vec<R> = Bfs::new(graph, 0).map(f).collect();
    trace_event!(visited = results.len(), size = graph.size(), "bfs traversal finished");
    results
}

/// Like [`traverse_bfs`], in depth-first order.
pub fn traverse_dfs<P, T, R, F>(graph: &Graph<P, T>, f: F) -> Vec<R>
where
    P: EdgePolicy,
    F: FnMut(&T) -> R,
{
    let results: Vec<R> = Dfs::new(graph, 0).map(f).collect();
    trace_event!(visited = results.len(), size = graph.size(), "dfs traversal finished");
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::basic::item_graph::{Direction, UnweightedGraph, WeightedGraph};

    fn valued_tree() -> UnweightedGraph<i32> {
        let mut graph = UnweightedGraph::new();
        for item in [10, 3, 15, -8] {
            graph.add(item);
        }
        assert!(graph.connect(&10, &3, Direction::OneWay));
        assert!(graph.connect(&10, &15, Direction::OneWay));
        assert!(graph.connect(&3, &-8, Direction::OneWay));
        graph
    }

    #[test]
    fn bfs_applies_visitor_in_frontier_order() {
        let graph = valued_tree();
        assert_eq!(traverse_bfs(&graph, |x| *x > 0), vec![true, true, true, false]);
        assert_eq!(traverse_bfs(&graph, |x| *x), vec![10, 15, 3, -8]);
    }

    #[test]
    fn bfs_on_empty_graph_is_empty() {
        let graph = UnweightedGraph::<i32>::new();
        assert!(traverse_bfs(&graph, |x| *x).is_empty());
        assert!(traverse_dfs(&graph, |x| *x).is_empty());
    }

    #[test]
    fn bfs_terminates_on_cycles() {
        let mut graph = UnweightedGraph::new();
        for item in 0..3 {
            graph.add(item);
        }
        graph.connect(&0, &1, Direction::TwoWay);
        graph.connect(&1, &2, Direction::OneWay);
        graph.connect(&2, &0, Direction::OneWay);

        assert_eq!(traverse_bfs(&graph, |x| *x), vec![0, 1, 2]);
    }

    #[test]
    fn shared_descendant_is_visited_once() {
        let mut graph = UnweightedGraph::new();
        for item in ['a', 'b', 'c', 'd'] {
            graph.add(item);
        }
        graph.connect(&'a', &'b', Direction::OneWay);
        graph.connect(&'a', &'c', Direction::OneWay);
        graph.connect(&'b', &'d', Direction::OneWay);
        graph.connect(&'c', &'d', Direction::OneWay);

        assert_eq!(traverse_bfs(&graph, |x| *x), vec!['a', 'c', 'b', 'd']);
    }

    #[test]
    fn dfs_follows_the_stack() {
        let graph = valued_tree();
        // Row of 10 is [15, 3]; 3 is pushed last and popped first.
        assert_eq!(traverse_dfs(&graph, |x| *x), vec![10, 3, -8, 15]);
    }

    #[test]
    fn iterators_start_from_any_item() {
        let graph = valued_tree();
        let from_three: Vec<_> = Bfs::from_item(&graph, &3).into_iter().flatten().collect();
        assert_eq!(from_three, vec![&3, &-8]);
        assert!(Dfs::from_item(&graph, &99).is_none());
        assert_eq!(Bfs::new(&graph, 42).count(), 0);
    }

    #[test]
    fn weighted_graphs_traverse_the_same_way() {
        let mut graph = WeightedGraph::new();
        graph.add("root");
        graph.add("leaf");
        graph.connect(&"root", &"leaf", 9, Direction::OneWay);
        assert_eq!(traverse_bfs(&graph, |s| s.len()), vec![4, 4]);
    }
}
