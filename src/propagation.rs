use std::collections::VecDeque;

use bit_set::BitSet;

use crate::color::{Color, VertexId};
use crate::domain::DomainStore;
use crate::graph::Graph;

/** kind of a binary constraint. Only NotEqual exists for vertex coloring,
but the kind is enumerable so other relations can be added later. */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// the two vertices must hold different colors
    NotEqual,
}

/** a directed binary constraint between two vertices */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraint {
    /// vertex whose domain is revised
    pub v1: VertexId,
    /// vertex providing the support values
    pub v2: VertexId,
    /// constraint kind
    pub kind: ConstraintKind,
}

impl Constraint {
    /// builds a directed not-equal constraint
    pub fn not_equal(v1: VertexId, v2: VertexId) -> Self {
        Self { v1, v2, kind: ConstraintKind::NotEqual }
    }
}

/** FIFO work-list of constraints awaiting (re-)processing.
Membership is tracked in a bitset keyed by the (v1,v2) pair (kind is ignored),
so an already-queued constraint is never enqueued twice and the agenda cannot
grow without bound. */
#[derive(Debug)]
pub struct Agenda {
    queue: VecDeque<Constraint>,
    /// present.contains(v1*n + v2) iff (v1,v2) is queued
    present: BitSet,
    nb_vertices: usize,
}

impl Agenda {

    /// creates an empty agenda for a graph over n vertices
    pub fn new(nb_vertices: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            present: BitSet::with_capacity(nb_vertices * nb_vertices),
            nb_vertices,
        }
    }

    fn key(&self, constraint: &Constraint) -> usize {
        constraint.v1 * self.nb_vertices + constraint.v2
    }

    /// enqueues a constraint unless the same (v1,v2) pair is already queued
    pub fn push(&mut self, constraint: Constraint) {
        let key = self.key(&constraint);
        if !self.present.contains(key) {
            self.present.insert(key);
            self.queue.push_back(constraint);
        }
    }

    /// pops the oldest queued constraint
    pub fn pop(&mut self) -> Option<Constraint> {
        let constraint = self.queue.pop_front()?;
        let key = self.key(&constraint);
        self.present.remove(key);
        Some(constraint)
    }

    /// number of queued constraints
    pub fn len(&self) -> usize { self.queue.len() }

    /// true iff nothing is queued
    pub fn is_empty(&self) -> bool { self.queue.is_empty() }
}

/** revises domain(v1) against domain(v2): removes every candidate c1 with no
support c2 ≠ c1 left in domain(v2). Returns true iff domain(v1) changed.
Under a not-equal constraint this only prunes when domain(v2) is a singleton. */
fn revise(domains: &mut DomainStore, v1: VertexId, v2: VertexId) -> bool {
    let keep: Vec<Color> = domains.candidates(v1).iter().copied()
        .filter(|&c1| domains.candidates(v2).iter().any(|&c2| c2 != c1))
        .collect();
    if keep.len() == domains.candidates(v1).len() {
        false
    } else {
        domains.set(v1, keep);
        true
    }
}

/** runs AC-3 to the arc-consistency fixpoint.
Seeds the agenda with one directed constraint per edge in both directions;
whenever a revision shrinks domain(v1), re-enqueues (v3,v1) for every neighbor
v3 ≠ v2 of v1. Returns the number of candidate values removed. Idempotent: a
second run removes nothing. The caller decides what an empty domain means
(check `domains.any_empty()` afterwards). */
pub fn propagate(inst: &Graph, domains: &mut DomainStore) -> usize {
    let mut agenda = Agenda::new(inst.nb_vertices());
    for &(u, v) in inst.edges() {
        agenda.push(Constraint::not_equal(u, v));
        agenda.push(Constraint::not_equal(v, u));
    }
    let mut nb_removed = 0;
    while let Some(constraint) = agenda.pop() {
        let before = domains.candidates(constraint.v1).len();
        if revise(domains, constraint.v1, constraint.v2) {
            nb_removed += before - domains.candidates(constraint.v1).len();
            for &v3 in inst.neighbors(constraint.v1) {
                if v3 != constraint.v2 {
                    agenda.push(Constraint::not_equal(v3, constraint.v1));
                }
            }
        }
    }
    nb_removed
}


#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::from_adj_list(vec![vec![1, 2], vec![0, 2], vec![0, 1]]).unwrap()
    }

    #[test]
    fn test_agenda_dedupes_by_pair() {
        let mut agenda = Agenda::new(3);
        agenda.push(Constraint::not_equal(0, 1));
        agenda.push(Constraint::not_equal(0, 1));
        agenda.push(Constraint::not_equal(1, 0));
        assert_eq!(agenda.len(), 2);
        assert_eq!(agenda.pop(), Some(Constraint::not_equal(0, 1)));
        // once popped, the pair may be queued again
        agenda.push(Constraint::not_equal(0, 1));
        assert_eq!(agenda.len(), 2);
    }

    #[test]
    fn test_propagate_without_singletons_prunes_nothing() {
        // all domains of size >= 2: not-equal arcs are already consistent
        let inst = triangle();
        let mut domains = DomainStore::new(3, 2);
        assert_eq!(propagate(&inst, &mut domains), 0);
        assert_eq!(domains.candidates(0), &[0, 1]);
    }

    #[test]
    fn test_propagate_from_pinned_vertex() {
        // path 0-1-2, vertex 0 pinned: 1 loses color 0, which in turn costs 2 color 1
        let inst = Graph::from_adj_list(vec![vec![1], vec![0, 2], vec![1]]).unwrap();
        let mut domains = DomainStore::new(3, 2);
        domains.pin(0, 0);
        let nb_removed = propagate(&inst, &mut domains);
        assert_eq!(nb_removed, 2);
        assert_eq!(domains.candidates(1), &[1]);
        assert_eq!(domains.candidates(2), &[0]);
    }

    #[test]
    fn test_propagate_detects_wipeout() {
        // triangle with 2 colors and a pinned vertex: some domain empties
        let inst = triangle();
        let mut domains = DomainStore::new(3, 2);
        domains.pin(0, 1);
        propagate(&inst, &mut domains);
        assert!(domains.any_empty());
    }

    #[test]
    fn test_propagate_is_idempotent() {
        let inst = triangle();
        let mut domains = DomainStore::new(3, 3);
        domains.pin(0, 0);
        propagate(&inst, &mut domains);
        let after_first = domains.snapshot();
        assert_eq!(propagate(&inst, &mut domains), 0);
        assert_eq!(domains.snapshot(), after_first);
    }
}
