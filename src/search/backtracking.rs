use crate::color::Color;
use crate::graph::Graph;
use crate::search::is_color_valid;
use crate::solution::{CapacityExceeded, SolutionStore};

/** enumerates every proper k-coloring by plain backtracking.
At each vertex, every color 0..k is tried in increasing order; a color is
valid if no already-colored neighbor holds it. */
pub fn search(
    inst: &Graph,
    nb_colors: usize,
    store: &mut SolutionStore,
) -> Result<(), CapacityExceeded> {
    let mut colors: Vec<Option<Color>> = vec![None; inst.nb_vertices()];
    explore(inst, nb_colors, &mut colors, 0, store)
}

fn explore(
    inst: &Graph,
    nb_colors: usize,
    colors: &mut Vec<Option<Color>>,
    vertex: usize,
    store: &mut SolutionStore,
) -> Result<(), CapacityExceeded> {
    if vertex == inst.nb_vertices() { // all vertices colored
        store.record(colors.iter().map(|c| c.unwrap()).collect())?;
        return Ok(());
    }
    for color in 0..nb_colors {
        if is_color_valid(inst, colors, vertex, color) {
            colors[vertex] = Some(color);
            explore(inst, nb_colors, colors, vertex + 1, store)?;
            colors[vertex] = None; // unassign before trying the next color
        }
    }
    Ok(())
}
