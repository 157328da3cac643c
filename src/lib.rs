//! Constraint-satisfaction solvers for the graph vertex-coloring problem

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// shared types, configuration errors and the solution checker
pub mod color;

/// undirected graph model (validated adjacency structure)
pub mod graph;

/// per-vertex candidate color domains and frame-local backups
pub mod domain;

/// not-equal constraints, agenda and the AC-3 propagator
pub mod propagation;

/// capacity-capped store of found colorings
pub mod solution;

/// backtracking search strategies
pub mod search;

/// solver facade tying graph, domains, propagation and search together
pub mod solver;

/// read DIMACS instances, write solutions
pub mod dimacs;

/// random instance generation
pub mod generator;

/// magic square brute-force backtracker (standalone demo problem)
pub mod magic;
