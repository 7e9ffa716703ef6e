//! Fortune's sweep over a set of distinct sites.
//!
//! The sweep line moves towards increasing `y`. Every arc of the beach line belongs to a
//! site already passed by the sweep, and every breakpoint between two neighbouring arcs
//! traces a Voronoi edge. Edges are produced as [`RawEdge`]s: portions of a bisector whose
//! ends are either a Voronoi vertex or still open. Open ends are resolved by the clipper.

use crate::beach_line::{ArcId, BeachLine, CircleRef};
use crate::event_queue::{EventKind, EventQueue};
use crate::geometry::{self, EPSILON, Point};
use std::cmp::Ordering;

/// A Voronoi edge as produced by the sweep.
///
/// The edge lies on the bisector of `left` and `right` and is oriented along
/// [`geometry::bisector_direction`]`(left, right)`, so `left` is on its left hand side.
/// A `None` end extends to infinity in that direction.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RawEdge {
    pub left: usize,
    pub right: usize,
    pub start: Option<Point>,
    pub end: Option<Point>,
}

impl RawEdge {
    /// Closes the end traced by the breakpoint between the arcs of `left` and `right`.
    fn terminate(&mut self, left: usize, right: usize, vertex: Point) {
        if self.left == left && self.right == right {
            self.end = Some(vertex);
        } else {
            self.start = Some(vertex);
        }
    }
}

pub(crate) struct Sweep<'a> {
    sites: &'a [Point],
    queue: EventQueue,
    beach: BeachLine,
    edges: Vec<RawEdge>,
}

impl<'a> Sweep<'a> {
    /// Prepares a sweep over `participants`, a list of indices into `sites`. The
    /// participating sites must be pairwise distinct.
    pub fn new(sites: &'a [Point], participants: &[usize]) -> Self {
        let mut queue = EventQueue::with_capacity(participants.len() * 2);
        for &index in participants {
            queue.push_site(index, sites[index]);
        }
        Self {
            sites,
            queue,
            beach: BeachLine::with_capacity(participants.len() * 2),
            edges: Vec::with_capacity(participants.len() * 3),
        }
    }

    pub fn run(mut self) -> Vec<RawEdge> {
        while let Some(event) = self.queue.pop() {
            match event.kind {
                EventKind::Site(index) => {
                    tracing::trace!(
                        site = index,
                        x = event.position.x,
                        y = event.position.y,
                        pending = self.queue.len(),
                        "site event"
                    );
                    self.add_site(index);
                }
                EventKind::Circle { arc, id } => {
                    // Arc slots are recycled, so the prediction must still belong to the arc.
                    if self.beach.arc(arc).circle.map(|c| c.id) == Some(id) {
                        self.remove_arc(arc);
                    }
                }
            }
        }
        tracing::trace!(edges = self.edges.len(), arcs = self.beach.len(), "sweep finished");
        self.edges
    }

    fn add_site(&mut self, index: usize) {
        if self.beach.insert_first(index).is_some() {
            return;
        }
        let Some((left, right)) = self.locate(self.sites[index]) else {
            return;
        };
        match (left, right) {
            (Some(l), Some(r)) if l == r => self.split_arc(l, index),
            (Some(l), Some(r)) => self.split_breakpoint(l, r, index),
            (Some(l), None) => {
                // Rightmost arc of a row of sites on the first sweep coordinate.
                let owner = self.beach.arc(l).site;
                let arc = self.beach.insert_after(l, index);
                let edge = self.new_edge(owner, index, None);
                self.beach.arc_mut(arc).left_edge = Some(edge);
            }
            (None, Some(r)) => {
                let owner = self.beach.arc(r).site;
                self.beach.insert_before(r, index);
                let edge = self.new_edge(index, owner, None);
                self.beach.arc_mut(r).left_edge = Some(edge);
            }
            (None, None) => {}
        }
    }

    /// Finds the arcs on either side of `site` when it reaches the sweep line.
    ///
    /// Both sides are the same arc when the site falls strictly inside it. Otherwise the
    /// site lies on the breakpoint between the two (one of them absent at the ends of a
    /// beach line made of vertical rays).
    fn locate(&self, site: Point) -> Option<(Option<ArcId>, Option<ArcId>)> {
        let directrix = site.y;
        let mut dxl = 0.0;
        let mut dxr = 0.0;
        let (arc, ord) = self.beach.find(|arc| {
            dxl = self.left_breakpoint(arc, directrix) - site.x;
            if dxl > EPSILON {
                return Ordering::Less;
            }
            dxr = site.x - self.right_breakpoint(arc, directrix);
            if dxr > EPSILON {
                return Ordering::Greater;
            }
            Ordering::Equal
        })?;

        Some(match ord {
            Ordering::Less => (self.beach.prev(arc), Some(arc)),
            Ordering::Greater => (Some(arc), self.beach.next(arc)),
            Ordering::Equal if dxl > -EPSILON => (self.beach.prev(arc), Some(arc)),
            Ordering::Equal if dxr > -EPSILON => (Some(arc), self.beach.next(arc)),
            Ordering::Equal => (Some(arc), Some(arc)),
        })
    }

    fn left_breakpoint(&self, arc: ArcId, directrix: f64) -> f64 {
        let focus = self.sites[self.beach.arc(arc).site];
        if focus.y == directrix {
            return focus.x;
        }
        match self.beach.prev(arc) {
            Some(prev) => {
                geometry::breakpoint(self.sites[self.beach.arc(prev).site], focus, directrix)
            }
            None => f64::NEG_INFINITY,
        }
    }

    fn right_breakpoint(&self, arc: ArcId, directrix: f64) -> f64 {
        if let Some(next) = self.beach.next(arc) {
            return self.left_breakpoint(next, directrix);
        }
        let focus = self.sites[self.beach.arc(arc).site];
        if focus.y == directrix {
            focus.x
        } else {
            f64::INFINITY
        }
    }

    /// Splits `arc` in two around the new arc of `index`.
    fn split_arc(&mut self, arc: ArcId, index: usize) {
        self.detach_circle(arc);
        let owner = self.beach.arc(arc).site;
        let right_piece = self.beach.insert_after(arc, owner);
        let middle = self.beach.insert_after(arc, index);

        let edge = self.new_edge(owner, index, None);
        self.beach.arc_mut(middle).left_edge = Some(edge);
        self.beach.arc_mut(right_piece).left_edge = Some(edge);

        self.attach_circle(arc);
        self.attach_circle(right_piece);
    }

    /// Inserts the arc of `index` exactly on the breakpoint between `left` and `right`,
    /// which becomes a Voronoi vertex at once.
    fn split_breakpoint(&mut self, left: ArcId, right: ArcId, index: usize) {
        self.detach_circle(left);
        self.detach_circle(right);

        let left_site = self.beach.arc(left).site;
        let right_site = self.beach.arc(right).site;
        let Some(vertex) = geometry::circumcenter(
            self.sites[left_site],
            self.sites[index],
            self.sites[right_site],
        ) else {
            self.split_arc(left, index);
            self.attach_circle(right);
            return;
        };

        if let Some(edge) = self.beach.arc(right).left_edge {
            self.edges[edge].terminate(left_site, right_site, vertex);
        }
        let arc = self.beach.insert_after(left, index);
        let incoming = self.new_edge(left_site, index, Some(vertex));
        let outgoing = self.new_edge(index, right_site, Some(vertex));
        self.beach.arc_mut(arc).left_edge = Some(incoming);
        self.beach.arc_mut(right).left_edge = Some(outgoing);

        self.attach_circle(left);
        self.attach_circle(right);
    }

    /// Handles the collapse of `arc`, along with any neighbour vanishing at the same vertex.
    fn remove_arc(&mut self, arc: ArcId) {
        let Some(circle) = self.beach.arc(arc).circle else {
            return;
        };
        let vertex = circle.center;
        let (Some(mut left), Some(mut right)) = (self.beach.prev(arc), self.beach.next(arc))
        else {
            return;
        };

        let mut chain = vec![arc];
        while self.collapses_at(left, vertex) {
            let Some(prev) = self.beach.prev(left) else {
                break;
            };
            chain.insert(0, left);
            left = prev;
        }
        while self.collapses_at(right, vertex) {
            let Some(next) = self.beach.next(right) else {
                break;
            };
            chain.push(right);
            right = next;
        }
        tracing::trace!(x = vertex.x, y = vertex.y, merged = chain.len(), "circle event");

        let mut run = Vec::with_capacity(chain.len() + 2);
        run.push(left);
        run.extend_from_slice(&chain);
        run.push(right);
        for pair in run.windows(2) {
            let (l, r) = (pair[0], pair[1]);
            if let Some(edge) = self.beach.arc(r).left_edge {
                let (left_site, right_site) = (self.beach.arc(l).site, self.beach.arc(r).site);
                self.edges[edge].terminate(left_site, right_site, vertex);
            }
        }

        for &gone in &chain {
            self.detach_circle(gone);
            self.beach.remove(gone);
        }
        self.detach_circle(left);
        self.detach_circle(right);

        let left_site = self.beach.arc(left).site;
        let right_site = self.beach.arc(right).site;
        let edge = (left_site != right_site).then(|| self.new_edge(left_site, right_site, Some(vertex)));
        self.beach.arc_mut(right).left_edge = edge;

        self.attach_circle(left);
        self.attach_circle(right);
    }

    fn collapses_at(&self, arc: ArcId, vertex: Point) -> bool {
        self.beach
            .arc(arc)
            .circle
            .is_some_and(|c| c.center.approx_eq(&vertex, EPSILON))
    }

    /// Predicts the collapse of `arc` between its current neighbours, if they converge.
    fn attach_circle(&mut self, arc: ArcId) {
        let (Some(prev), Some(next)) = (self.beach.prev(arc), self.beach.next(arc)) else {
            return;
        };
        let left = self.beach.arc(prev).site;
        let middle = self.beach.arc(arc).site;
        let right = self.beach.arc(next).site;
        if left == right {
            return;
        }
        let Some((center, bottom)) =
            geometry::circle_event(self.sites[left], self.sites[middle], self.sites[right])
        else {
            return;
        };
        let id = self.queue.push_circle(arc, Point::new(center.x, bottom));
        self.beach.arc_mut(arc).circle = Some(CircleRef { id, center });
    }

    fn detach_circle(&mut self, arc: ArcId) {
        if let Some(circle) = self.beach.arc_mut(arc).circle.take() {
            self.queue.cancel(circle.id);
        }
    }

    fn new_edge(&mut self, left: usize, right: usize, start: Option<Point>) -> usize {
        self.edges.push(RawEdge {
            left,
            right,
            start,
            end: None,
        });
        self.edges.len() - 1
    }
}
