//! Priority queue of sweep events.
//!
//! Events are ordered by sweep coordinate `y`, then `x`. At an identical position a circle
//! event is handled before a site event; remaining ties fall back to the creation sequence
//! of circle events and the insertion index of sites, so that a run is reproducible.
//!
//! Circle events are invalidated lazily: [`EventQueue::cancel`] only clears a flag, and the
//! stale entry is dropped when it reaches the front of the heap.

use crate::beach_line::ArcId;
use crate::geometry::Point;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Clone, Copy, Debug)]
pub(crate) enum EventKind {
    /// A new site enters the beach line.
    Site(usize),
    /// The arc `arc` shrinks to a point; `id` identifies the prediction.
    Circle { arc: ArcId, id: usize },
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Event {
    /// Position of the event on the sweep line. For circle events this is the lowest point
    /// of the circle, not its center.
    pub position: Point,
    pub kind: EventKind,
}

impl Event {
    fn rank(&self) -> (u8, usize) {
        match self.kind {
            EventKind::Circle { id, .. } => (0, id),
            EventKind::Site(index) => (1, index),
        }
    }
}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        self.position
            .y
            .partial_cmp(&other.position.y)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                self.position
                    .x
                    .partial_cmp(&other.position.x)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| self.rank().cmp(&other.rank()))
    }
}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Event {}

#[derive(Default)]
pub(crate) struct EventQueue {
    heap: BinaryHeap<Reverse<Event>>,
    // Validity flag per circle event id.
    live: Vec<bool>,
}

impl EventQueue {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            live: Vec::new(),
        }
    }

    pub fn push_site(&mut self, index: usize, position: Point) {
        self.heap.push(Reverse(Event {
            position,
            kind: EventKind::Site(index),
        }));
    }

    /// Schedules the collapse of `arc` at `position` and returns the id of the prediction.
    pub fn push_circle(&mut self, arc: ArcId, position: Point) -> usize {
        let id = self.live.len();
        self.live.push(true);
        self.heap.push(Reverse(Event {
            position,
            kind: EventKind::Circle { arc, id },
        }));
        id
    }

    /// Invalidates a pending circle event.
    pub fn cancel(&mut self, id: usize) {
        if let Some(flag) = self.live.get_mut(id) {
            *flag = false;
        }
    }

    /// Removes and returns the next valid event.
    pub fn pop(&mut self) -> Option<Event> {
        while let Some(Reverse(event)) = self.heap.pop() {
            if let EventKind::Circle { id, .. } = event.kind {
                if !self.live[id] {
                    continue;
                }
                self.live[id] = false;
            }
            return Some(event);
        }
        None
    }

    /// Number of queued entries, including cancelled circle events not yet discarded.
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
