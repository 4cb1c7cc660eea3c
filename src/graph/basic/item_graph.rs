//! A dynamic adjacency-list graph over unique items.
//!
//! Vertices are the items themselves (unique under `PartialEq`); each item's
//! insertion position is its identity, and edges store positions rather than
//! references. Rows are parallel to the item vector:
//! - `items[i]` is the item at position `i`
//! - `adjacency[i]` holds the outgoing edges of `items[i]`
//!
//! New edges are pushed to the *front* of a row, so the most recently
//! connected neighbor is always reported (and traversed) first.
//!
//! Whether edges carry a cost is selected at the type level through
//! [`EdgePolicy`]: [`Unweighted`] rows store bare positions, [`Weighted`] rows
//! store [`WeightedEdge`]s.

use core::fmt;
use core::marker::PhantomData;
use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::trace::trace_event;

/// Selects the edge record stored in adjacency rows.
pub trait EdgePolicy {
    /// The record stored per outgoing edge.
    type Edge: Copy + fmt::Debug + PartialEq;

    /// Position of the edge's destination item.
    fn target(edge: &Self::Edge) -> usize;

    /// Mutable access to the destination position, used when positions shift.
    fn target_mut(edge: &mut Self::Edge) -> &mut usize;
}

/// Edges are bare destination positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unweighted;

/// Edges carry a signed integer cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Weighted;

/// An outgoing edge with a cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeightedEdge {
    /// Cost of traversing the edge.
    pub cost: i64,
    /// Position of the destination item.
    pub target: usize,
}

impl EdgePolicy for Unweighted {
    type Edge = usize;

    #[inline(always)]
    fn target(edge: &usize) -> usize {
        *edge
    }

    #[inline(always)]
    fn target_mut(edge: &mut usize) -> &mut usize {
        edge
    }
}

impl EdgePolicy for Weighted {
    type Edge = WeightedEdge;

    #[inline(always)]
    fn target(edge: &WeightedEdge) -> usize {
        edge.target
    }

    #[inline(always)]
    fn target_mut(edge: &mut WeightedEdge) -> &mut usize {
        &mut edge.target
    }
}

/// Whether `connect` also stores the mirror edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Only `from -> to`.
    OneWay,
    /// Both `from -> to` and `to -> from`.
    TwoWay,
}

/// A graph of unique items with position-addressed adjacency rows.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add` | \(O(n)\) | Duplicate scan, then append |
/// | `connect` | \(O(n)\) | Two endpoint scans, front insertion is \(O(1)\) |
/// | `remove` | \(O(n + m)\) | Patches every row referencing shifted positions |
/// | `neighbors_of` | \(O(n + \text{out-degree})\) | |
/// | `first` / `size` | \(O(1)\) | |
pub struct Graph<P: EdgePolicy, T> {
    items: Vec<T>,
    adjacency: Vec<VecDeque<P::Edge>>,
    _policy: PhantomData<P>,
}

/// A graph whose edges carry no cost.
pub type UnweightedGraph<T> = Graph<Unweighted, T>;

/// A graph whose edges carry an `i64` cost.
pub type WeightedGraph<T> = Graph<Weighted, T>;

impl<P: EdgePolicy, T> Graph<P, T> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            adjacency: Vec::new(),
            _policy: PhantomData,
        }
    }

    /// Creates an empty graph with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            adjacency: Vec::with_capacity(capacity),
            _policy: PhantomData,
        }
    }

    /// Returns the number of items.
    #[inline]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Alias of [`Graph::size`].
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the graph holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at position 0.
    ///
    /// # Errors
    /// Returns [`Error::EmptyGraph`] if the graph holds no items.
    pub fn first(&self) -> Result<&T> {
        self.items.first().ok_or(Error::EmptyGraph)
    }

    /// Mutable access to the item at position 0.
    ///
    /// Mutating an item so that it compares equal to another one breaks
    /// uniqueness; lookups then resolve to the lowest position.
    ///
    /// # Errors
    /// Returns [`Error::EmptyGraph`] if the graph holds no items.
    pub fn first_mut(&mut self) -> Result<&mut T> {
        self.items.first_mut().ok_or(Error::EmptyGraph)
    }

    /// Returns the item at `position`, if any.
    #[inline]
    pub fn get(&self, position: usize) -> Option<&T> {
        self.items.get(position)
    }

    /// Iterates over items in position order.
    pub fn items(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }

    /// Returns the total number of stored edge records.
    ///
    /// A two-way connection counts as two records.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(VecDeque::len).sum()
    }

    /// Raw edge records of the row at `position`, most recent first.
    pub(crate) fn row(&self, position: usize) -> impl Iterator<Item = &P::Edge> + '_ {
        self.adjacency.get(position).into_iter().flatten()
    }

    /// Destination positions of the row at `position`, most recent first.
    pub(crate) fn neighbor_positions(&self, position: usize) -> impl Iterator<Item = usize> + '_ {
        self.row(position).map(P::target)
    }
}

impl<P: EdgePolicy, T: PartialEq> Graph<P, T> {
    /// Returns the position of the first item equal to `item`.
    pub fn position(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|candidate| candidate == item)
    }

    /// Returns `true` if an item equal to `item` is stored.
    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.position(item).is_some()
    }

    /// Appends `item` with an empty edge row unless an equal item exists.
    ///
    /// Returns whether the item was inserted.
    pub fn add(&mut self, item: T) -> bool {
        if self.contains(&item) {
            trace_event!(size = self.items.len(), "rejected duplicate item");
            return false;
        }

        self.items.push(item);
        self.adjacency.push(VecDeque::new());
        true
    }

    /// Removes the item equal to `target` along with its row.
    ///
    /// Every other row is patched: edges into the removed item are dropped
    /// and edges to later positions are shifted down by one, so no stored
    /// position ever dangles.
    ///
    /// Returns `false` (and changes nothing) if no such item exists.
    pub fn remove(&mut self, target: &T) -> bool {
        let Some(removed) = self.position(target) else {
            trace_event!(size = self.items.len(), "remove of missing item");
            return false;
        };

        self.items.remove(removed);
        self.adjacency.remove(removed);

        for row in &mut self.adjacency {
            row.retain(|edge| P::target(edge) != removed);
            for edge in row.iter_mut() {
                let slot = P::target_mut(edge);
                if *slot > removed {
                    *slot -= 1;
                }
            }
        }

        trace_event!(position = removed, remaining = self.items.len(), "removed item");
        true
    }

    /// Returns the items reachable over one outgoing edge of `item`.
    ///
    /// Neighbors come in row order, most recently connected first. A missing
    /// `item` yields an empty vector.
    pub fn neighbors_of(&self, item: &T) -> Vec<&T> {
        let Some(position) = self.position(item) else {
            return Vec::new();
        };

        self.neighbor_positions(position)
            .filter_map(|target| self.items.get(target))
            .collect()
    }

    /// Returns the number of outgoing edges of `item`, or `None` if absent.
    pub fn out_degree(&self, item: &T) -> Option<usize> {
        self.position(item)
            .and_then(|position| self.adjacency.get(position))
            .map(VecDeque::len)
    }

    /// Looks up both endpoints and pushes the edge(s) built by `make_edge`.
    ///
    /// `make_edge` receives the destination position.
    fn link(
        &mut self,
        from: &T,
        to: &T,
        direction: Direction,
        make_edge: impl Fn(usize) -> P::Edge,
    ) -> bool {
        let (from_idx, to_idx) = (self.position(from), self.position(to));
        let (Some(from_idx), Some(to_idx)) = (from_idx, to_idx) else {
            trace_event!(
                from_found = from_idx.is_some(),
                to_found = to_idx.is_some(),
                "connect with missing endpoint"
            );
            return false;
        };

        self.adjacency[from_idx].push_front(make_edge(to_idx));
        if direction == Direction::TwoWay {
            self.adjacency[to_idx].push_front(make_edge(from_idx));
        }
        true
    }
}

impl<T: PartialEq> Graph<Unweighted, T> {
    /// Connects `from` to `to`; with [`Direction::TwoWay`] also `to` to `from`.
    ///
    /// Returns `false` and changes nothing if either endpoint is missing.
    pub fn connect(&mut self, from: &T, to: &T, direction: Direction) -> bool {
        self.link(from, to, direction, |target| target)
    }
}

impl<T: PartialEq> Graph<Weighted, T> {
    /// Connects `from` to `to` with `cost`; with [`Direction::TwoWay`] the
    /// mirror edge carries the same cost.
    ///
    /// Returns `false` and changes nothing if either endpoint is missing.
    pub fn connect(&mut self, from: &T, to: &T, cost: i64, direction: Direction) -> bool {
        self.link(from, to, direction, |target| WeightedEdge { cost, target })
    }

    /// Returns `(cost, neighbor)` pairs of `item` in row order.
    pub fn weighted_neighbors_of(&self, item: &T) -> Vec<(i64, &T)> {
        let Some(position) = self.position(item) else {
            return Vec::new();
        };

        self.row(position)
            .filter_map(|edge| self.items.get(edge.target).map(|neighbor| (edge.cost, neighbor)))
            .collect()
    }
}

impl<P: EdgePolicy, T> Default for Graph<P, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: EdgePolicy, T: Clone> Clone for Graph<P, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            adjacency: self.adjacency.clone(),
            _policy: PhantomData,
        }
    }
}

impl<P: EdgePolicy, T: fmt::Debug> fmt::Debug for Graph<P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("items", &self.items)
            .field("adjacency", &self.adjacency)
            .finish()
    }
}
