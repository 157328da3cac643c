use bit_set::BitSet;

use crate::color::{ConfigurationError, VertexId};

/** models an undirected graph over vertices 0..n.
Built once from an external source (generator or DIMACS file), validated at
construction (symmetry, no self-loops), never mutated by the solver. */
#[derive(Debug)]
pub struct Graph {
    /// nb vertices
    n: usize,
    /// nb edges
    m: usize,
    /// edges of the graph (u < v)
    edges: Vec<(VertexId, VertexId)>,
    /// adj_list[i]: list of vertices adjacent to i
    adj_list: Vec<Vec<VertexId>>,
    /// adj_matrix[i]: bitset of the neighbors of i
    adj_matrix: Vec<BitSet>,
}

impl Graph {

    /// number of vertices
    pub fn nb_vertices(&self) -> usize { self.n }

    /// number of edges
    pub fn nb_edges(&self) -> usize { self.m }

    /// list of vertices adjacent to vertex u
    pub fn neighbors(&self, u: VertexId) -> &[VertexId] {
        &self.adj_list[u]
    }

    /// degree of vertex u
    pub fn degree(&self, u: VertexId) -> usize { self.adj_list[u].len() }

    /// edge list (u < v)
    pub fn edges(&self) -> &[(VertexId, VertexId)] {
        &self.edges
    }

    /// returns true iff u and v are adjacent (O(1) through the bitset matrix)
    pub fn are_adjacent(&self, u: VertexId, v: VertexId) -> bool {
        self.adj_matrix[u].contains(v)
    }

    /** constructor from a symmetric 0/1 adjacency matrix.
    fails fast if the matrix is not square, not symmetric, or has a non-empty
    diagonal (the generator is external, so the structure is re-checked here). */
    pub fn from_matrix(matrix: &[Vec<bool>]) -> Result<Self, ConfigurationError> {
        let n = matrix.len();
        for (row, entries) in matrix.iter().enumerate() {
            if entries.len() != n {
                return Err(ConfigurationError::NotSquare {
                    row, width: entries.len(), nb_vertices: n,
                });
            }
        }
        let mut adj_list = vec![Vec::new(); n];
        for i in 0..n {
            if matrix[i][i] {
                return Err(ConfigurationError::SelfLoop { vertex: i });
            }
            for j in 0..n {
                if matrix[i][j] != matrix[j][i] {
                    return Err(ConfigurationError::Asymmetric { u: i, v: j });
                }
                if matrix[i][j] {
                    adj_list[i].push(j);
                }
            }
        }
        Ok(Self::from_checked_adj_list(adj_list))
    }

    /** constructor from an adjacency list (each undirected edge listed in
    both directions). Validates vertex ids, symmetry and absence of self-loops. */
    pub fn from_adj_list(adj_list: Vec<Vec<VertexId>>) -> Result<Self, ConfigurationError> {
        let n = adj_list.len();
        for (u, neighbors) in adj_list.iter().enumerate() {
            for &v in neighbors {
                if v >= n {
                    return Err(ConfigurationError::VertexOutOfRange {
                        vertex: v, nb_vertices: n,
                    });
                }
                if v == u {
                    return Err(ConfigurationError::SelfLoop { vertex: u });
                }
                if !adj_list[v].contains(&u) {
                    return Err(ConfigurationError::Asymmetric { u, v });
                }
            }
        }
        Ok(Self::from_checked_adj_list(adj_list))
    }

    /// builds the graph once the adjacency structure passed validation
    fn from_checked_adj_list(adj_list: Vec<Vec<VertexId>>) -> Self {
        let n = adj_list.len();
        // compute nb edges
        let mut m = 0;
        for e in &adj_list { // at the end: m = ∑ d(v)
            m += e.len();
        }
        m /= 2; // m = (∑ d(v)) / 2
        let edges = Self::build_edges(&adj_list);
        let mut adj_matrix = vec![BitSet::default(); n];
        for (a, row) in adj_matrix.iter_mut().enumerate() {
            for b in &adj_list[a] {
                row.insert(*b);
            }
        }
        Self { n, m, edges, adj_list, adj_matrix }
    }

    /// builds the edge list
    fn build_edges(adj_list: &[Vec<VertexId>]) -> Vec<(VertexId, VertexId)> {
        let mut res = Vec::new();
        for (i, l) in adj_list.iter().enumerate() {
            for j in l {
                if i < *j {
                    res.push((i, *j));
                }
            }
        }
        res
    }

    /// print statistics of the instance
    pub fn display_statistics(&self) {
        println!("\t{} \t vertices", self.nb_vertices());
        println!("\t{} \t edges", self.nb_edges());
        if self.n > 0 {
            let degrees: Vec<usize> = (0..self.nb_vertices()).map(|i| self.degree(i)).collect();
            println!("\t{} \t min degree", degrees.iter().min().unwrap());
            println!("\t{} \t max degree", degrees.iter().max().unwrap());
        }
    }
}
