//! Parsing of the textual matrix input format.
//!
//! The first line holds two integers `m` (species count) and `n` (character
//! count) separated by whitespace; the next `m` lines each contain `n`
//! values in `{0, 1}`. A `1` at row `i`, column `j` becomes a black edge
//! between species `s<i>` and character `c<j>` (1-indexed).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::graph::{Color, RBGraph};
use crate::{log_graph, ReductionError, Result};

/// Reads a red-black graph from the matrix file at `path`.
pub fn read_matrix(path: impl AsRef<Path>) -> Result<RBGraph> {
    let file = File::open(path.as_ref())?;
    let graph = parse_matrix(BufReader::new(file))?;
    info!(
        "Read matrix {} ({})",
        path.as_ref().display(),
        log_graph(&graph)
    );
    Ok(graph)
}

/// Parses a red-black graph from matrix text.
pub fn parse_matrix<R: BufRead>(reader: R) -> Result<RBGraph> {
    let mut lines = reader.lines().enumerate();

    let (header_no, header) = next_content_line(&mut lines)?
        .ok_or_else(|| ReductionError::Parse("empty matrix file".to_string()))?;
    let mut tokens = header.split_whitespace();
    let m = parse_count(tokens.next(), header_no, "species count")?;
    let n = parse_count(tokens.next(), header_no, "character count")?;
    if tokens.next().is_some() {
        return Err(ReductionError::Parse(format!(
            "line {}: trailing tokens after matrix dimensions",
            header_no + 1
        )));
    }

    let mut g = RBGraph::new();
    let species: Vec<_> = (1..=m).map(|i| g.add_species(format!("s{}", i))).collect();
    let characters: Vec<_> = (1..=n).map(|j| g.add_character(format!("c{}", j))).collect();

    for i in 0..m {
        let (line_no, row) = next_content_line(&mut lines)?.ok_or_else(|| {
            ReductionError::Parse(format!("premature end of file: expected {} rows, found {}", m, i))
        })?;
        let values: Vec<&str> = row.split_whitespace().collect();
        if values.len() != n {
            return Err(ReductionError::Parse(format!(
                "line {}: expected {} values, found {}",
                line_no + 1,
                n,
                values.len()
            )));
        }
        for (j, value) in values.iter().enumerate() {
            match *value {
                "0" => {}
                "1" => g.add_edge(species[i], characters[j], Color::Black)?,
                other => {
                    return Err(ReductionError::Parse(format!(
                        "line {}: invalid value '{}' (expected 0 or 1)",
                        line_no + 1,
                        other
                    )))
                }
            }
        }
    }
    Ok(g)
}

fn next_content_line(
    lines: &mut impl Iterator<Item = (usize, std::io::Result<String>)>,
) -> Result<Option<(usize, String)>> {
    for (no, line) in lines {
        let line = line?;
        if !line.trim().is_empty() {
            return Ok(Some((no, line)));
        }
    }
    Ok(None)
}

fn parse_count(token: Option<&str>, line_no: usize, what: &str) -> Result<usize> {
    let token = token.ok_or_else(|| {
        ReductionError::Parse(format!("line {}: missing {}", line_no + 1, what))
    })?;
    token.parse().map_err(|_| {
        ReductionError::Parse(format!(
            "line {}: invalid {} '{}'",
            line_no + 1,
            what,
            token
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_small_matrix() {
        let g = parse_matrix("2 3\n1 0 1\n0 1 0\n".as_bytes()).unwrap();
        assert_eq!(g.num_species(), 2);
        assert_eq!(g.num_characters(), 3);
        assert_eq!(g.num_edges(), 3);

        let s1 = g.find_species("s1").unwrap();
        let c1 = g.find_character("c1").unwrap();
        let c2 = g.find_character("c2").unwrap();
        assert_eq!(g.edge_color(s1, c1), Some(Color::Black));
        assert_eq!(g.edge_color(s1, c2), None);
    }

    #[test]
    fn skips_blank_lines() {
        let g = parse_matrix("\n1 1\n\n1\n".as_bytes()).unwrap();
        assert_eq!(g.num_species(), 1);
        assert_eq!(g.num_edges(), 1);
    }

    #[test]
    fn rejects_missing_rows() {
        let err = parse_matrix("2 2\n1 0\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("premature end of file"));
    }

    #[test]
    fn rejects_short_row() {
        let err = parse_matrix("1 3\n1 0\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("expected 3 values"));
    }

    #[test]
    fn rejects_bad_value() {
        let err = parse_matrix("1 1\n2\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("invalid value"));
    }

    #[test]
    fn rejects_bad_header() {
        let err = parse_matrix("x 1\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("species count"));
    }
}
