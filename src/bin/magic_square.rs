use std::time::Instant;

use clap::{App, load_yaml};
use serde_json::json;

use csp_color::magic::enumerate;

/** enumerates the magic squares of a given order and prints them.

# Panics
 - if a numeric argument cannot be parsed
*/
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("magic_square.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let size: usize = main_args.value_of("size").unwrap().parse()
        .expect("unable to parse the square order");
    let max_squares: usize = main_args.value_of("max").unwrap().parse()
        .expect("unable to parse the maximum number of squares");

    // solve it
    let t_start = Instant::now();
    let squares = enumerate(size, max_squares).unwrap_or_else(|why| {
        eprintln!("{}", why);
        std::process::exit(1);
    });
    let duration = t_start.elapsed().as_secs_f32();
    println!("found {} magic square(s) of order {} in {:.3} seconds",
        squares.len(), size, duration);
    for board in &squares {
        println!("Magic square found!");
        for row in board {
            let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            println!("{}", cells.join(" "));
        }
        println!();
    }

    // export results
    if let Some(filename) = main_args.value_of("perf") {
        let stats = json!({
            "size": size,
            "nb_squares": squares.len(),
            "time_searched": duration,
        });
        std::fs::write(filename, serde_json::to_string(&stats).unwrap())
            .unwrap_or_else(|why| panic!("couldn't write {}: {}", filename, why));
    }
}
