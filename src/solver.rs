use std::rc::Rc;

use crate::color::{Color, Coloring, ConfigurationError, VertexId};
use crate::domain::DomainStore;
use crate::graph::Graph;
use crate::propagation::propagate;
use crate::search::{ac3_backtracking, backtracking, forward_checking};
use crate::solution::{CapacityExceeded, SolutionStore, DEFAULT_NB_SOLUTIONS};

/** outcome of the AC-3-seeded strategy.
`Unsolvable` is a normal value, not a fault: it reports that preprocessing
emptied a domain and the search was skipped. */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ac3Outcome {
    /// every solution found by the post-propagation backtracking
    Solutions(Vec<Coloring>),
    /// a domain emptied during preprocessing: no solution exists
    Unsolvable,
}

/** coloring CSP solver over a fixed graph and number of colors.
Owns the domain store shared by AC-3 and forward checking; the three
strategies are interchangeable entry points enumerating every proper
coloring. */
#[derive(Debug)]
pub struct Solver {
    /// problem instance
    inst: Rc<Graph>,
    /// number of colors (k <= n, checked at construction)
    nb_colors: usize,
    /// per-vertex candidate colors
    domains: DomainStore,
    /// solution store capacity per run
    max_solutions: usize,
}

impl Solver {

    /** builds a solver; fails with a configuration error if more colors than
    vertices are requested. */
    pub fn build(inst: Rc<Graph>, nb_colors: usize) -> Result<Self, ConfigurationError> {
        if nb_colors > inst.nb_vertices() {
            return Err(ConfigurationError::TooManyColors {
                nb_colors,
                nb_vertices: inst.nb_vertices(),
            });
        }
        let domains = DomainStore::new(inst.nb_vertices(), nb_colors);
        Ok(Self { inst, nb_colors, domains, max_solutions: DEFAULT_NB_SOLUTIONS })
    }

    /// changes the per-run solution store capacity
    pub fn with_max_solutions(mut self, max_solutions: usize) -> Self {
        self.max_solutions = max_solutions;
        self
    }

    /// the problem instance
    pub fn instance(&self) -> &Graph { &self.inst }

    /// number of colors of the problem
    pub fn nb_colors(&self) -> usize { self.nb_colors }

    /** pre-seeds the domain of a vertex to a single color before the AC-3
    run (the demo's configuration hook; not part of the propagator itself). */
    pub fn pin_domain(&mut self, vertex: VertexId, color: Color) -> Result<(), ConfigurationError> {
        if vertex >= self.inst.nb_vertices() {
            return Err(ConfigurationError::VertexOutOfRange {
                vertex,
                nb_vertices: self.inst.nb_vertices(),
            });
        }
        if color >= self.nb_colors {
            return Err(ConfigurationError::ColorOutOfRange {
                color,
                nb_colors: self.nb_colors,
            });
        }
        self.domains.pin(vertex, color);
        Ok(())
    }

    /** strategy A: plain backtracking over the full color range.
    Ignores the domain store entirely. */
    pub fn solve_backtracking(&self) -> Result<Vec<Coloring>, CapacityExceeded> {
        let mut store = SolutionStore::with_capacity(self.max_solutions);
        backtracking::search(&self.inst, self.nb_colors, &mut store)?;
        Ok(store.into_colorings())
    }

    /** strategy B: one AC-3 pass, then backtracking over the pruned domains.
    Short-circuits to `Unsolvable` without searching when a domain empties. */
    pub fn solve_ac3(&mut self) -> Result<Ac3Outcome, CapacityExceeded> {
        propagate(&self.inst, &mut self.domains);
        if self.domains.any_empty() {
            return Ok(Ac3Outcome::Unsolvable);
        }
        let mut store = SolutionStore::with_capacity(self.max_solutions);
        ac3_backtracking::search(&self.inst, &self.domains, &mut store)?;
        Ok(Ac3Outcome::Solutions(store.into_colorings()))
    }

    /** strategy C: backtracking with forward checking.
    Narrows the shared domain store during the search and restores it before
    returning. */
    pub fn solve_forward_checking(&mut self) -> Result<Vec<Coloring>, CapacityExceeded> {
        let mut store = SolutionStore::with_capacity(self.max_solutions);
        forward_checking::search(&self.inst, &mut self.domains, &mut store)?;
        Ok(store.into_colorings())
    }

    /// copy of every vertex domain (diagnostic read for external logging)
    pub fn domains_snapshot(&self) -> Vec<Vec<Color>> {
        self.domains.snapshot()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::color::{checker, CheckerResult};
    use crate::generator::random_adjacency_matrix;

    fn triangle() -> Rc<Graph> {
        Rc::new(Graph::from_adj_list(vec![vec![1, 2], vec![0, 2], vec![0, 1]]).unwrap())
    }

    fn sorted(mut colorings: Vec<Coloring>) -> Vec<Coloring> {
        colorings.sort();
        colorings
    }

    #[test]
    fn test_build_rejects_more_colors_than_vertices() {
        assert_eq!(
            Solver::build(triangle(), 4).unwrap_err(),
            ConfigurationError::TooManyColors { nb_colors: 4, nb_vertices: 3 }
        );
    }

    #[test]
    fn test_pin_domain_validation() {
        let mut solver = Solver::build(triangle(), 3).unwrap();
        assert_eq!(
            solver.pin_domain(7, 0),
            Err(ConfigurationError::VertexOutOfRange { vertex: 7, nb_vertices: 3 })
        );
        assert_eq!(
            solver.pin_domain(0, 3),
            Err(ConfigurationError::ColorOutOfRange { color: 3, nb_colors: 3 })
        );
        solver.pin_domain(0, 1).unwrap();
        assert_eq!(solver.domains_snapshot()[0], vec![1]);
    }

    #[test]
    fn test_all_strategies_agree_on_the_triangle() {
        let plain = Solver::build(triangle(), 3).unwrap().solve_backtracking().unwrap();
        let ac3 = match Solver::build(triangle(), 3).unwrap().solve_ac3().unwrap() {
            Ac3Outcome::Solutions(s) => s,
            Ac3Outcome::Unsolvable => panic!("the triangle is 3-colorable"),
        };
        let fc = Solver::build(triangle(), 3).unwrap().solve_forward_checking().unwrap();
        assert_eq!(plain.len(), 6);
        assert_eq!(sorted(plain.clone()), sorted(ac3));
        assert_eq!(sorted(plain), sorted(fc));
    }

    #[test]
    fn test_pinned_ac3_detects_unsolvable_triangle_with_2_colors() {
        let mut solver = Solver::build(triangle(), 2).unwrap();
        solver.pin_domain(0, 1).unwrap();
        assert_eq!(solver.solve_ac3().unwrap(), Ac3Outcome::Unsolvable);
        // the other strategies agree: zero solutions
        let plain_solver = Solver::build(triangle(), 2).unwrap();
        assert!(plain_solver.solve_backtracking().unwrap().is_empty());
        let mut fc_solver = Solver::build(triangle(), 2).unwrap();
        assert!(fc_solver.solve_forward_checking().unwrap().is_empty());
    }

    #[test]
    fn test_ac3_runs_are_idempotent() {
        let mut solver = Solver::build(triangle(), 3).unwrap();
        solver.pin_domain(0, 0).unwrap();
        solver.solve_ac3().unwrap();
        let first = solver.domains_snapshot();
        solver.solve_ac3().unwrap();
        assert_eq!(solver.domains_snapshot(), first);
    }

    #[test]
    fn test_all_strategies_agree_on_a_random_instance() {
        let matrix = random_adjacency_matrix(7, 0.5, 42);
        let inst = Rc::new(Graph::from_matrix(&matrix).unwrap());
        let cap = 10_000;
        let plain = Solver::build(inst.clone(), 3).unwrap()
            .with_max_solutions(cap).solve_backtracking().unwrap();
        let ac3 = match Solver::build(inst.clone(), 3).unwrap()
            .with_max_solutions(cap).solve_ac3().unwrap() {
            Ac3Outcome::Solutions(s) => s,
            Ac3Outcome::Unsolvable => Vec::new(),
        };
        let fc = Solver::build(inst.clone(), 3).unwrap()
            .with_max_solutions(cap).solve_forward_checking().unwrap();
        assert_eq!(sorted(plain.clone()), sorted(ac3));
        assert_eq!(sorted(plain.clone()), sorted(fc));
        for coloring in &plain {
            assert_eq!(checker(&inst, 3, coloring), CheckerResult::Valid);
        }
    }
}
