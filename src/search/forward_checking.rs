use crate::color::{checker, CheckerResult, Color, Coloring};
use crate::domain::{DomainBackup, DomainStore};
use crate::graph::Graph;
use crate::solution::{CapacityExceeded, SolutionStore};

/** enumerates proper colorings by backtracking with forward checking.
Assigning a color to a vertex eagerly removes it from every neighbor domain;
a branch is abandoned as soon as a neighbor domain empties. Every domain
narrowed within a frame is backed up on first touch and restored on every
exit path, so the store is back to its pre-call state when the search
returns. */
pub fn search(
    inst: &Graph,
    domains: &mut DomainStore,
    store: &mut SolutionStore,
) -> Result<(), CapacityExceeded> {
    explore(inst, domains, 0, store)
}

fn explore(
    inst: &Graph,
    domains: &mut DomainStore,
    vertex: usize,
    store: &mut SolutionStore,
) -> Result<(), CapacityExceeded> {
    // a branch also completes early when propagation alone fixed every vertex
    if vertex == inst.nb_vertices() || domains.all_singleton() {
        let coloring: Coloring = (0..inst.nb_vertices())
            .map(|v| domains.candidates(v)[0])
            .collect();
        // neighbor-local pruning can leave two unassigned adjacent vertices
        // on the same singleton, so the snapshot is validated before recording
        if checker(inst, domains.nb_colors(), &coloring) == CheckerResult::Valid {
            store.record(coloring)?;
        }
        return Ok(());
    }
    let candidates: Vec<Color> = domains.candidates(vertex).to_vec();
    for color in candidates {
        let mut backup = DomainBackup::new();
        let mut wiped_out = false;
        for &neighbor in inst.neighbors(vertex) {
            backup.save(domains, neighbor);
            domains.remove(neighbor, color);
            if domains.is_empty(neighbor) {
                wiped_out = true;
                break; // abandon the color, the backups taken so far still get restored
            }
        }
        let status = if wiped_out {
            Ok(())
        } else {
            backup.save(domains, vertex);
            domains.pin(vertex, color);
            explore(inst, domains, vertex + 1, store)
        };
        backup.restore(domains);
        status?;
    }
    Ok(())
}
