//! The beach line: the ordered sequence of parabolic arcs above the sweep line.
//!
//! Arcs live in an arena and are referenced by stable [`ArcId`]s. The sequence is kept in two
//! shapes at once: a doubly linked list for constant time neighbour queries, and a treap
//! (a binary search tree balanced by random heap priorities) for logarithmic search. The
//! tree carries no keys; its in-order traversal is the beach line order, and searches are
//! driven by a comparison closure that evaluates breakpoints at the current sweep position.

use crate::geometry::Point;
use rand::prelude::*;
use rand::rngs::StdRng;
use std::cmp::Ordering;

pub(crate) type ArcId = usize;

const PRIORITY_SEED: u64 = 0x5eed_0f_a2c5;

/// A pending circle event attached to an arc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct CircleRef {
    pub id: usize,
    pub center: Point,
}

#[derive(Clone, Debug)]
pub(crate) struct Arc {
    /// Index of the site whose parabola forms this arc.
    pub site: usize,
    /// Edge traced by the breakpoint between this arc and its predecessor.
    pub left_edge: Option<usize>,
    pub circle: Option<CircleRef>,
    prev: Option<ArcId>,
    next: Option<ArcId>,
    parent: Option<ArcId>,
    left: Option<ArcId>,
    right: Option<ArcId>,
    priority: u32,
}

pub(crate) struct BeachLine {
    arcs: Vec<Arc>,
    free: Vec<ArcId>,
    root: Option<ArcId>,
    len: usize,
    rng: StdRng,
}

impl BeachLine {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arcs: Vec::with_capacity(capacity),
            free: Vec::new(),
            root: None,
            len: 0,
            rng: StdRng::seed_from_u64(PRIORITY_SEED),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn arc(&self, id: ArcId) -> &Arc {
        &self.arcs[id]
    }

    pub fn arc_mut(&mut self, id: ArcId) -> &mut Arc {
        &mut self.arcs[id]
    }

    pub fn prev(&self, id: ArcId) -> Option<ArcId> {
        self.arcs[id].prev
    }

    pub fn next(&self, id: ArcId) -> Option<ArcId> {
        self.arcs[id].next
    }

    /// Starts the beach line with a single arc. Returns `None` if it is not empty.
    pub fn insert_first(&mut self, site: usize) -> Option<ArcId> {
        if !self.is_empty() {
            return None;
        }
        let id = self.alloc(site);
        self.root = Some(id);
        Some(id)
    }

    /// Inserts a new arc directly to the right of `anchor`.
    pub fn insert_after(&mut self, anchor: ArcId, site: usize) -> ArcId {
        let id = self.alloc(site);
        let next = self.arcs[anchor].next;
        self.arcs[id].prev = Some(anchor);
        self.arcs[id].next = next;
        self.arcs[anchor].next = Some(id);
        if let Some(n) = next {
            self.arcs[n].prev = Some(id);
        }

        // The in-order successor slot is either the empty right child of the anchor, or the
        // empty left child of the anchor's current successor.
        if self.arcs[anchor].right.is_none() {
            self.arcs[anchor].right = Some(id);
            self.arcs[id].parent = Some(anchor);
        } else if let Some(n) = next {
            debug_assert!(self.arcs[n].left.is_none());
            self.arcs[n].left = Some(id);
            self.arcs[id].parent = Some(n);
        }
        self.sift_up(id);
        id
    }

    /// Inserts a new arc directly to the left of `anchor`.
    pub fn insert_before(&mut self, anchor: ArcId, site: usize) -> ArcId {
        let id = self.alloc(site);
        let prev = self.arcs[anchor].prev;
        self.arcs[id].next = Some(anchor);
        self.arcs[id].prev = prev;
        self.arcs[anchor].prev = Some(id);
        if let Some(p) = prev {
            self.arcs[p].next = Some(id);
        }

        if self.arcs[anchor].left.is_none() {
            self.arcs[anchor].left = Some(id);
            self.arcs[id].parent = Some(anchor);
        } else if let Some(p) = prev {
            debug_assert!(self.arcs[p].right.is_none());
            self.arcs[p].right = Some(id);
            self.arcs[id].parent = Some(p);
        }
        self.sift_up(id);
        id
    }

    /// Removes an arc. Its id may be handed out again by a later insertion.
    pub fn remove(&mut self, id: ArcId) {
        // Rotate the node down until it is a leaf.
        loop {
            let child = match (self.arcs[id].left, self.arcs[id].right) {
                (None, None) => break,
                (Some(l), None) => l,
                (None, Some(r)) => r,
                (Some(l), Some(r)) => {
                    if self.arcs[l].priority > self.arcs[r].priority { l } else { r }
                }
            };
            self.rotate_up(child);
        }

        match self.arcs[id].parent {
            None => self.root = None,
            Some(p) => {
                if self.arcs[p].left == Some(id) {
                    self.arcs[p].left = None;
                } else {
                    self.arcs[p].right = None;
                }
            }
        }

        let prev = self.arcs[id].prev;
        let next = self.arcs[id].next;
        if let Some(p) = prev {
            self.arcs[p].next = next;
        }
        if let Some(n) = next {
            self.arcs[n].prev = prev;
        }

        let arc = &mut self.arcs[id];
        arc.prev = None;
        arc.next = None;
        arc.parent = None;
        arc.left_edge = None;
        arc.circle = None;
        self.free.push(id);
        self.len -= 1;
    }

    /// Binary search driven by `compare`.
    ///
    /// `compare` reports whether the searched position lies left of (`Less`), right of
    /// (`Greater`) or within (`Equal`) the given arc. Returns the arc where the search stopped
    /// and the last answer of `compare`, which is `Less` or `Greater` only when the search
    /// ran off the tree next to that arc.
    pub fn find<F>(&self, mut compare: F) -> Option<(ArcId, Ordering)>
    where
        F: FnMut(ArcId) -> Ordering,
    {
        let mut node = self.root?;
        loop {
            let ord = compare(node);
            let child = match ord {
                Ordering::Less => self.arcs[node].left,
                Ordering::Greater => self.arcs[node].right,
                Ordering::Equal => None,
            };
            match child {
                Some(c) => node = c,
                None => return Some((node, ord)),
            }
        }
    }

    fn alloc(&mut self, site: usize) -> ArcId {
        let arc = Arc {
            site,
            left_edge: None,
            circle: None,
            prev: None,
            next: None,
            parent: None,
            left: None,
            right: None,
            priority: self.rng.r#gen::<u32>(),
        };
        self.len += 1;
        match self.free.pop() {
            Some(id) => {
                self.arcs[id] = arc;
                id
            }
            None => {
                self.arcs.push(arc);
                self.arcs.len() - 1
            }
        }
    }

    fn sift_up(&mut self, id: ArcId) {
        while let Some(p) = self.arcs[id].parent {
            if self.arcs[p].priority >= self.arcs[id].priority {
                break;
            }
            self.rotate_up(id);
        }
    }

    /// Rotates `x` above its parent, preserving the in-order sequence.
    fn rotate_up(&mut self, x: ArcId) {
        let Some(p) = self.arcs[x].parent else {
            return;
        };
        let grandparent = self.arcs[p].parent;

        if self.arcs[p].left == Some(x) {
            let inner = self.arcs[x].right;
            self.arcs[p].left = inner;
            if let Some(b) = inner {
                self.arcs[b].parent = Some(p);
            }
            self.arcs[x].right = Some(p);
        } else {
            let inner = self.arcs[x].left;
            self.arcs[p].right = inner;
            if let Some(b) = inner {
                self.arcs[b].parent = Some(p);
            }
            self.arcs[x].left = Some(p);
        }
        self.arcs[p].parent = Some(x);
        self.arcs[x].parent = grandparent;

        match grandparent {
            None => self.root = Some(x),
            Some(g) => {
                if self.arcs[g].left == Some(p) {
                    self.arcs[g].left = Some(x);
                } else {
                    self.arcs[g].right = Some(x);
                }
            }
        }
    }
}
