use crate::color::Color;
use crate::domain::DomainStore;
use crate::graph::Graph;
use crate::search::is_color_valid;
use crate::solution::{CapacityExceeded, SolutionStore};

/** enumerates every proper coloring by backtracking over already-pruned
domains. The domains are read-only here: pruning happened in the one-time
AC-3 pass before the search, never interleaved with it. Arc consistency does
not account for the assignments fixed during the search, so each candidate is
still validated against the already-colored neighbors. */
pub fn search(
    inst: &Graph,
    domains: &DomainStore,
    store: &mut SolutionStore,
) -> Result<(), CapacityExceeded> {
    let mut colors: Vec<Option<Color>> = vec![None; inst.nb_vertices()];
    explore(inst, domains, &mut colors, 0, store)
}

fn explore(
    inst: &Graph,
    domains: &DomainStore,
    colors: &mut Vec<Option<Color>>,
    vertex: usize,
    store: &mut SolutionStore,
) -> Result<(), CapacityExceeded> {
    if vertex == inst.nb_vertices() {
        store.record(colors.iter().map(|c| c.unwrap()).collect())?;
        return Ok(());
    }
    for &color in domains.candidates(vertex) {
        if is_color_valid(inst, colors, vertex, color) {
            colors[vertex] = Some(color);
            explore(inst, domains, colors, vertex + 1, store)?;
            colors[vertex] = None;
        }
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::propagation::propagate;

    fn triangle() -> Graph {
        Graph::from_adj_list(vec![vec![1, 2], vec![0, 2], vec![0, 1]]).unwrap()
    }

    #[test]
    fn test_unpruned_domains_match_plain_backtracking() {
        let inst = triangle();
        let domains = DomainStore::new(3, 3);
        let mut store = SolutionStore::default();
        search(&inst, &domains, &mut store).unwrap();
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn test_pinned_vertex_restricts_the_enumeration() {
        // vertex 0 pinned to color 1: only the solutions where color(0) = 1 remain
        let inst = triangle();
        let mut domains = DomainStore::new(3, 3);
        domains.pin(0, 1);
        propagate(&inst, &mut domains);
        let mut store = SolutionStore::default();
        search(&inst, &domains, &mut store).unwrap();
        let mut found = store.into_colorings();
        found.sort();
        assert_eq!(found, vec![vec![1, 0, 2], vec![1, 2, 0]]);
    }

    #[test]
    fn test_neighbor_check_still_runs_on_pruned_domains() {
        // path 0-1-2 with 2 colors: AC-3 prunes nothing (no singleton), the
        // neighbor check alone must reject improper assignments
        let inst = Graph::from_adj_list(vec![vec![1], vec![0, 2], vec![1]]).unwrap();
        let mut domains = DomainStore::new(3, 2);
        propagate(&inst, &mut domains);
        let mut store = SolutionStore::default();
        search(&inst, &domains, &mut store).unwrap();
        let mut found = store.into_colorings();
        found.sort();
        assert_eq!(found, vec![vec![0, 1, 0], vec![1, 0, 1]]);
    }
}
