use std::fmt;

use crate::graph::Graph;

/** Vertex Id */
pub type VertexId = usize;

/** Color Id (colors are represented as digits 0, 1, 2 ...) */
pub type Color = usize;

/** Solution of a coloring CSP: coloring[v] = color assigned to vertex v */
pub type Coloring = Vec<Color>;

/** fatal construction-time errors. Raised before any search runs and never
recovered internally. */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    /// adjacency matrix row has the wrong width
    NotSquare {
        /// offending row
        row: usize,
        /// its width
        width: usize,
        /// expected width (nb vertices)
        nb_vertices: usize,
    },
    /// adjacency relation is not symmetric
    Asymmetric {
        /// first endpoint
        u: VertexId,
        /// second endpoint
        v: VertexId,
    },
    /// a vertex is declared adjacent to itself
    SelfLoop {
        /// offending vertex
        vertex: VertexId,
    },
    /// an adjacency list references a vertex outside 0..n
    VertexOutOfRange {
        /// offending vertex id
        vertex: VertexId,
        /// nb vertices
        nb_vertices: usize,
    },
    /// a pinned color lies outside 0..k
    ColorOutOfRange {
        /// offending color
        color: Color,
        /// nb colors
        nb_colors: usize,
    },
    /// more colors than vertices
    TooManyColors {
        /// requested nb colors
        nb_colors: usize,
        /// nb vertices
        nb_vertices: usize,
    },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NotSquare { row, width, nb_vertices } =>
                write!(f, "adjacency matrix is not square: row {} has width {} (expected {})",
                    row, width, nb_vertices),
            Self::Asymmetric { u, v } =>
                write!(f, "adjacency is not symmetric between vertices {} and {}", u, v),
            Self::SelfLoop { vertex } =>
                write!(f, "vertex {} is adjacent to itself", vertex),
            Self::VertexOutOfRange { vertex, nb_vertices } =>
                write!(f, "vertex {} out of range (nb vertices: {})", vertex, nb_vertices),
            Self::ColorOutOfRange { color, nb_colors } =>
                write!(f, "color {} out of range (nb colors: {})", color, nb_colors),
            Self::TooManyColors { nb_colors, nb_vertices } =>
                write!(f, "the number of colors ({}) must be at most the number of vertices ({})",
                    nb_colors, nb_vertices),
        }
    }
}

impl std::error::Error for ConfigurationError {}

/** result of checking a coloring against an instance */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckerResult {
    /// proper coloring using valid colors
    Valid,
    /// both endpoints of an edge hold the same color
    ConflictingEdge(VertexId, VertexId),
    /// a vertex holds a color outside 0..k
    ColorOutOfRange(VertexId, Color),
    /// the coloring does not cover every vertex
    WrongLength {
        /// nb entries found
        found: usize,
        /// nb vertices expected
        expected: usize,
    },
}

/** checks that a coloring is proper: every vertex holds a color in 0..k and
no edge joins two vertices of the same color. */
pub fn checker(inst: &Graph, nb_colors: usize, coloring: &[Color]) -> CheckerResult {
    if coloring.len() != inst.nb_vertices() {
        return CheckerResult::WrongLength {
            found: coloring.len(),
            expected: inst.nb_vertices(),
        };
    }
    for (vertex, color) in coloring.iter().enumerate() {
        if *color >= nb_colors {
            return CheckerResult::ColorOutOfRange(vertex, *color);
        }
    }
    for &(u, v) in inst.edges() {
        if coloring[u] == coloring[v] {
            return CheckerResult::ConflictingEdge(u, v);
        }
    }
    CheckerResult::Valid
}


#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::from_adj_list(vec![vec![1, 2], vec![0, 2], vec![0, 1]]).unwrap()
    }

    #[test]
    fn test_checker_valid() {
        let inst = triangle();
        assert_eq!(checker(&inst, 3, &[0, 1, 2]), CheckerResult::Valid);
    }

    #[test]
    fn test_checker_conflict() {
        let inst = triangle();
        assert_eq!(checker(&inst, 3, &[0, 0, 2]), CheckerResult::ConflictingEdge(0, 1));
    }

    #[test]
    fn test_checker_color_out_of_range() {
        let inst = triangle();
        assert_eq!(checker(&inst, 2, &[0, 1, 2]), CheckerResult::ColorOutOfRange(2, 2));
    }

    #[test]
    fn test_checker_wrong_length() {
        let inst = triangle();
        assert_eq!(
            checker(&inst, 3, &[0, 1]),
            CheckerResult::WrongLength { found: 2, expected: 3 }
        );
    }
}
