//! Search strategies for the coloring CSP.
//!
//! Each strategy assigns colors to vertices in ascending index order and
//! backtracks on conflict; exhausting the colors of a vertex is normal
//! control flow, never an error. All strategies enumerate every solution
//! (no stop-at-first) and surface [`CapacityExceeded`] when the solution
//! store overflows.
//!
//! [`CapacityExceeded`]: crate::solution::CapacityExceeded

use crate::color::{Color, VertexId};
use crate::graph::Graph;

/// plain backtracking over the full color range
pub mod backtracking;

/// backtracking over AC-3-pruned domains
pub mod ac3_backtracking;

/// backtracking with forward checking of the neighbor domains
pub mod forward_checking;

/// returns true iff no already-colored neighbor of `vertex` holds `color`
pub(crate) fn is_color_valid(
    inst: &Graph,
    colors: &[Option<Color>],
    vertex: VertexId,
    color: Color,
) -> bool {
    inst.neighbors(vertex).iter().all(|&v| colors[v] != Some(color))
}
