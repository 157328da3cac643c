//! Demo CLI for the coloring CSP solvers

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]

use std::rc::Rc;
use std::time::Instant;

use clap::{App, load_yaml};
use serde::Serialize;

use csp_color::color::{Color, Coloring};
use csp_color::dimacs;
use csp_color::generator::random_adjacency_matrix;
use csp_color::graph::Graph;
use csp_color::solver::{Ac3Outcome, Solver};

/// the color names of the original demo; colors beyond the table keep their digit
const COLOR_NAMES: [&str; 11] = [
    "RED", "BLUE", "GREEN", "YELLOW", "ORANGE", "PURPLE",
    "BROWN", "GRAY", "TURQUOISE", "MAGENTA", "CYAN",
];

fn color_name(color: Color) -> String {
    match COLOR_NAMES.get(color) {
        Some(name) => (*name).to_string(),
        None => format!("color{}", color),
    }
}

fn display_domains(domains: &[Vec<Color>]) {
    for (vertex, domain) in domains.iter().enumerate() {
        let names: Vec<String> = domain.iter().map(|&c| color_name(c)).collect();
        println!("\tdomain of vertex {}: [{}]", vertex, names.join(", "));
    }
}

#[derive(Serialize)]
struct RunStats {
    strategy: String,
    inst_name: String,
    nb_solutions: usize,
    time_searched: f32,
}

/**
reads or generates an instance, runs the selected strategy, and prints every
solution found (color indices rendered with the original demo's color names).

# Panics
 - if a numeric argument cannot be parsed
*/
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("main_args.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let nb_colors: usize = main_args.value_of("colors").unwrap().parse()
        .expect("unable to parse the number of colors");
    let strategy = main_args.value_of("strategy").unwrap();

    // read or generate the instance
    println!("=========================================================");
    let (inst_name, inst) = match main_args.value_of("instance") {
        Some(filename) => {
            println!("reading instance: {}...", filename);
            (filename.to_string(), Rc::new(dimacs::read_from_file(filename)))
        }
        None => {
            let nb_vertices: usize = main_args.value_of("vertices").unwrap().parse()
                .expect("unable to parse the number of vertices");
            let probability: f64 = main_args.value_of("probability").unwrap().parse()
                .expect("unable to parse the edge probability");
            let seed: u64 = main_args.value_of("seed").unwrap().parse()
                .expect("unable to parse the seed");
            println!("generating a random instance (n={}, p={}, seed={})...",
                nb_vertices, probability, seed);
            let matrix = random_adjacency_matrix(nb_vertices, probability, seed);
            let inst = Graph::from_matrix(&matrix).unwrap_or_else(|why| {
                eprintln!("configuration error: {}", why);
                std::process::exit(1);
            });
            (format!("random-{}-{}", nb_vertices, seed), Rc::new(inst))
        }
    };
    inst.display_statistics();
    println!("{} colors, strategy: {}", nb_colors, strategy);

    // build the solver
    let mut solver = Solver::build(inst, nb_colors).unwrap_or_else(|why| {
        eprintln!("configuration error: {}", why);
        std::process::exit(1);
    });
    if let Some(pin) = main_args.value_of("pin") {
        let mut parts = pin.splitn(2, ':');
        let vertex: usize = parts.next().unwrap().parse()
            .expect("unable to parse the pinned vertex");
        let color: usize = parts.next().expect("expected vertex:color").parse()
            .expect("unable to parse the pinned color");
        println!("pinning the domain of vertex {} to {}", vertex, color_name(color));
        solver.pin_domain(vertex, color).unwrap_or_else(|why| {
            eprintln!("configuration error: {}", why);
            std::process::exit(1);
        });
    }

    // solve it
    let t_start = Instant::now();
    let solutions: Vec<Coloring> = match strategy {
        "backtrack" => solver.solve_backtracking().unwrap_or_else(|why| {
            eprintln!("{}", why);
            std::process::exit(1);
        }),
        "ac3" => {
            println!("domains before AC-3:");
            display_domains(&solver.domains_snapshot());
            let outcome = solver.solve_ac3().unwrap_or_else(|why| {
                eprintln!("{}", why);
                std::process::exit(1);
            });
            println!("domains after AC-3:");
            display_domains(&solver.domains_snapshot());
            match outcome {
                Ac3Outcome::Unsolvable => {
                    println!("at least one domain is empty: the problem has no solution");
                    Vec::new()
                }
                Ac3Outcome::Solutions(found) => found,
            }
        }
        "fc" => solver.solve_forward_checking().unwrap_or_else(|why| {
            eprintln!("{}", why);
            std::process::exit(1);
        }),
        _ => unreachable!(), // clap rejects other values
    };
    let duration = t_start.elapsed().as_secs_f32();

    // display the solutions
    println!("found {} solution(s) in {:.3} seconds", solutions.len(), duration);
    for (no, coloring) in solutions.iter().enumerate() {
        let rendered: Vec<String> = coloring.iter().map(|&c| color_name(c)).collect();
        println!("solution {}: {}", no, rendered.join(" "));
    }

    // export results
    if let (Some(filename), Some(first)) = (main_args.value_of("solution"), solutions.first()) {
        println!("printing the first solution in: {}", filename);
        dimacs::write_solution(filename, first);
    }
    if let Some(filename) = main_args.value_of("perf") {
        println!("printing perfs in: {}", filename);
        let stats = RunStats {
            strategy: strategy.to_string(),
            inst_name,
            nb_solutions: solutions.len(),
            time_searched: duration,
        };
        std::fs::write(filename, serde_json::to_string(&stats).unwrap())
            .unwrap_or_else(|why| panic!("couldn't write {}: {}", filename, why));
    }
}
