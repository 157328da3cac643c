use std::collections::HashMap;

use crate::color::{Color, VertexId};

/** per-vertex candidate color domains.
Every domain starts as the full 0..k enumeration (insertion order preserved,
duplicate-free) and only ever shrinks during a propagation pass; search
strategies that narrow domains grow them back through [`DomainBackup`]. A
domain may legitimately become empty: it signals unsolvability along the
current branch. */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainStore {
    /// nb colors of the problem (k)
    nb_colors: usize,
    /// domains[v]: candidate colors still possible for vertex v
    domains: Vec<Vec<Color>>,
}

impl DomainStore {

    /** creates a store for n vertices, each with the full 0..k domain */
    pub fn new(nb_vertices: usize, nb_colors: usize) -> Self {
        Self {
            nb_colors,
            domains: vec![(0..nb_colors).collect(); nb_vertices],
        }
    }

    /// number of vertices
    pub fn nb_vertices(&self) -> usize { self.domains.len() }

    /// number of colors of the problem
    pub fn nb_colors(&self) -> usize { self.nb_colors }

    /// candidate colors still possible for vertex v
    pub fn candidates(&self, vertex: VertexId) -> &[Color] {
        &self.domains[vertex]
    }

    /// replaces the domain of vertex v
    pub fn set(&mut self, vertex: VertexId, colors: Vec<Color>) {
        self.domains[vertex] = colors;
    }

    /// narrows the domain of vertex v to the singleton {color}
    pub fn pin(&mut self, vertex: VertexId, color: Color) {
        self.domains[vertex] = vec![color];
    }

    /// removes a color from the domain of vertex v. Returns true iff it was present
    pub fn remove(&mut self, vertex: VertexId, color: Color) -> bool {
        let before = self.domains[vertex].len();
        self.domains[vertex].retain(|&c| c != color);
        self.domains[vertex].len() != before
    }

    /// true iff the domain of vertex v is empty
    pub fn is_empty(&self, vertex: VertexId) -> bool {
        self.domains[vertex].is_empty()
    }

    /// true iff at least one vertex has an empty domain (unsolvable)
    pub fn any_empty(&self) -> bool {
        self.domains.iter().any(|d| d.is_empty())
    }

    /// true iff every vertex's domain holds exactly one candidate
    pub fn all_singleton(&self) -> bool {
        self.domains.iter().all(|d| d.len() == 1)
    }

    /// full copy of every domain (diagnostic read, used by external logging)
    pub fn snapshot(&self) -> Vec<Vec<Color>> {
        self.domains.clone()
    }
}

/** backup of the domains touched within one search frame.
Cheaper than copying the whole store: only the vertices saved in the current
frame are kept, and the first save wins so repeated narrowing of the same
vertex still restores the frame-entry state. */
#[derive(Debug, Default)]
pub struct DomainBackup {
    saved: HashMap<VertexId, Vec<Color>>,
}

impl DomainBackup {

    /// creates an empty backup
    pub fn new() -> Self {
        Self { saved: HashMap::new() }
    }

    /// saves the current domain of vertex v, unless already saved in this frame
    pub fn save(&mut self, store: &DomainStore, vertex: VertexId) {
        self.saved.entry(vertex)
            .or_insert_with(|| store.candidates(vertex).to_vec());
    }

    /// puts every saved domain back into the store
    pub fn restore(self, store: &mut DomainStore) {
        for (vertex, domain) in self.saved {
            store.set(vertex, domain);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_full() {
        let store = DomainStore::new(3, 2);
        assert_eq!(store.candidates(0), &[0, 1]);
        assert_eq!(store.candidates(2), &[0, 1]);
        assert!(!store.any_empty());
        assert!(!store.all_singleton());
    }

    #[test]
    fn test_remove_and_empty() {
        let mut store = DomainStore::new(2, 2);
        assert!(store.remove(0, 1));
        assert!(!store.remove(0, 1)); // already gone
        assert_eq!(store.candidates(0), &[0]);
        assert!(store.remove(0, 0));
        assert!(store.is_empty(0));
        assert!(store.any_empty());
    }

    #[test]
    fn test_all_singleton() {
        let mut store = DomainStore::new(2, 2);
        store.pin(0, 1);
        assert!(!store.all_singleton());
        store.pin(1, 0);
        assert!(store.all_singleton());
    }

    #[test]
    fn test_backup_restores_only_touched_vertices() {
        let mut store = DomainStore::new(3, 3);
        let mut backup = DomainBackup::new();
        backup.save(&store, 0);
        store.pin(0, 2);
        store.pin(2, 1); // narrowed but never saved
        backup.restore(&mut store);
        assert_eq!(store.candidates(0), &[0, 1, 2]);
        assert_eq!(store.candidates(2), &[1]);
    }

    #[test]
    fn test_backup_first_save_wins() {
        let mut store = DomainStore::new(1, 3);
        let mut backup = DomainBackup::new();
        backup.save(&store, 0);
        store.remove(0, 1);
        backup.save(&store, 0); // must not overwrite the frame-entry state
        store.pin(0, 2);
        backup.restore(&mut store);
        assert_eq!(store.candidates(0), &[0, 1, 2]);
    }
}
