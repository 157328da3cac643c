use std::fs;

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{digit1, line_ending, multispace0, not_line_ending, space1};
use nom::combinator::map_res;
use nom::multi::many0;
use nom::sequence::{delimited, preceded, separated_pair, terminated};
use nom::IResult;

use crate::color::{Color, VertexId};
use crate::graph::Graph;

fn integer(s: &str) -> IResult<&str, usize> {
    map_res(digit1, str::parse)(s)
}

/// a single comment line ("c ...")
fn comment(s: &str) -> IResult<&str, &str> {
    delimited(tag("c"), not_line_ending, line_ending)(s)
}

/// the "p edge n m" (or "p col n m") header
fn header(s: &str) -> IResult<&str, (usize, usize)> {
    preceded(
        terminated(alt((tag("p edge"), tag("p col"))), space1),
        separated_pair(integer, space1, integer),
    )(s)
}

/// an "e u v" edge line (WARNING: indices start at 1 in the DIMACS format)
fn edge(s: &str) -> IResult<&str, (usize, usize)> {
    preceded(
        terminated(tag("e"), space1),
        separated_pair(integer, space1, integer),
    )(s)
}

/** parses a DIMACS coloring instance, returns (n, m, adj_list).
m is the header value; some instance families list each edge once, some in
both directions, so the edge count is only checked against both conventions.

# Panics
 - if the header is missing or the edge count contradicts it
*/
pub fn parse(content: &str) -> (usize, usize, Vec<Vec<VertexId>>) {
    let normalized = content.replace('\r', "");
    let (after_comments, _) = many0(comment)(normalized.as_str())
        .expect("dimacs: malformed comment block");
    let (mut remaining, (n, m)) = terminated(header, multispace0)(after_comments)
        .expect("dimacs: missing 'p edge' header");
    let mut adj_list = vec![Vec::new(); n];
    let mut nb_read = 0;
    while let Ok((rest, (a, b))) = terminated(edge, multispace0)(remaining) {
        remaining = rest;
        adj_list[a - 1].push(b - 1); // back to 0-indexed
        adj_list[b - 1].push(a - 1);
        nb_read += 1;
    }
    assert!(
        nb_read == m || 2 * nb_read == m,
        "dimacs: read {} edges, header announces {}", nb_read, m
    );
    (n, m, adj_list)
}

/** reads a graph from a DIMACS file.

# Panics
 - if the file cannot be read, parsed, or describes an invalid adjacency
*/
pub fn read_from_file(filename: &str) -> Graph {
    let content = fs::read_to_string(filename)
        .unwrap_or_else(|why| panic!("dimacs: unable to read {}: {}", filename, why));
    let (_, _, adj_list) = parse(&content);
    Graph::from_adj_list(adj_list)
        .unwrap_or_else(|why| panic!("dimacs: invalid instance {}: {}", filename, why))
}

/** encodes a coloring as text, one "vertex color" pair per line */
pub fn solution_to_string(coloring: &[Color]) -> String {
    let mut res = String::default();
    for (vertex, color) in coloring.iter().enumerate() {
        res += format!("{} {}\n", vertex, color).as_str();
    }
    res
}

/** writes a coloring into a file. each line contains a vertex and its color. */
pub fn write_solution(filename: &str, coloring: &[Color]) {
    fs::write(filename, solution_to_string(coloring))
        .unwrap_or_else(|_|
            panic!("write_solution: unable to write the solution in {}", filename)
        );
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_triangle() {
        let s = "c a triangle\np edge 3 3\ne 1 2\ne 1 3\ne 2 3\n";
        let (n, m, adj_list) = parse(s);
        assert_eq!(n, 3);
        assert_eq!(m, 3);
        assert_eq!(adj_list, vec![vec![1, 2], vec![0, 2], vec![0, 1]]);
    }

    #[test]
    fn test_parse_col_header_without_trailing_newline() {
        let s = "p col 2 1\ne 1 2";
        let (n, m, adj_list) = parse(s);
        assert_eq!((n, m), (2, 1));
        assert_eq!(adj_list, vec![vec![1], vec![0]]);
    }

    #[test]
    fn test_parse_skips_comment_block() {
        let s = "c first comment\nc second comment\np edge 2 1\ne 1 2\n";
        assert_eq!(parse(s).0, 2);
    }

    #[test]
    fn test_parsed_instance_builds_a_graph() {
        let (_, _, adj_list) = parse("p edge 4 2\ne 1 2\ne 3 4\n");
        let inst = Graph::from_adj_list(adj_list).unwrap();
        assert_eq!(inst.nb_vertices(), 4);
        assert_eq!(inst.nb_edges(), 2);
        assert!(inst.are_adjacent(2, 3));
    }

    #[test]
    fn test_header_parser() {
        let (rest, (n, m)) = header("p edge 10 20\ne 1 2").unwrap();
        assert_eq!((n, m), (10, 20));
        assert_eq!(rest, "\ne 1 2");
    }

    #[test]
    fn test_edge_parser() {
        assert_eq!(edge("e 1 2\n").unwrap().1, (1, 2));
    }

    #[test]
    fn test_solution_to_string() {
        assert_eq!(solution_to_string(&[1, 0, 2]), "0 1\n1 0\n2 2\n");
    }
}
