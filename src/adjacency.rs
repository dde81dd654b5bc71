//! Line-oriented adjacency-list loading.
//!
//! Each line names a vertex label followed by the labels of its neighbors,
//! whitespace separated. The union of all lines is the graph; a symmetric
//! source lists every edge from both endpoints. Symmetry is expected, not
//! verified here.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Vertex labels with their neighbor labels, in file order.
pub type AdjacencyList = Vec<(u32, Vec<u32>)>;

/// Parses adjacency text. Blank lines are skipped; a non-numeric label is
/// an input error.
pub fn parse_adjacency(input: &str) -> Result<AdjacencyList> {
    let mut adjacency = Vec::new();
    for (line_number, line) in input.lines().enumerate() {
        let mut labels = line.split_whitespace();
        let vertex = match labels.next() {
            Some(token) => parse_label(token, line_number)?,
            None => continue,
        };
        let neighbors = labels
            .map(|token| parse_label(token, line_number))
            .collect::<Result<Vec<u32>>>()?;
        adjacency.push((vertex, neighbors));
    }
    Ok(adjacency)
}

/// Reads and parses an adjacency file.
pub fn load_adjacency<P: AsRef<Path>>(path: P) -> Result<AdjacencyList> {
    let text = fs::read_to_string(&path).map_err(|err| {
        Error::InvalidInput(format!(
            "cannot read {}: {}",
            path.as_ref().display(),
            err
        ))
    })?;
    parse_adjacency(&text)
}

fn parse_label(token: &str, line_number: usize) -> Result<u32> {
    token.parse().map_err(|_| {
        Error::InvalidInput(format!(
            "line {}: bad vertex label '{}'",
            line_number + 1,
            token
        ))
    })
}
