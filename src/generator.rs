use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/** draws a random symmetric 0/1 adjacency matrix with an empty diagonal.
Each pair (i,j), i < j, is joined with probability `edge_probability` and the
result mirrored below the diagonal. The seed makes instances reproducible
across runs. The matrix still goes through the graph constructor's validation
like any externally produced adjacency structure. */
pub fn random_adjacency_matrix(
    nb_vertices: usize,
    edge_probability: f64,
    seed: u64,
) -> Vec<Vec<bool>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut matrix = vec![vec![false; nb_vertices]; nb_vertices];
    for i in 0..nb_vertices {
        for j in (i + 1)..nb_vertices {
            let adjacent = rng.gen_bool(edge_probability);
            matrix[i][j] = adjacent;
            matrix[j][i] = adjacent;
        }
    }
    matrix
}
