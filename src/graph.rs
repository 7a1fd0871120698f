use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use regex::Regex;

use crate::error::GraphError;

/// Immutable undirected graph over the vertices `0..n`.
///
/// Both adjacency and its complement are materialised once: the local search
/// only ever walks non-neighbours, while construction and verification only
/// ever test adjacency.
#[derive(Clone, Debug)]
pub struct Graph {
    neighbours: Vec<HashSet<usize>>,
    non_neighbours: Vec<Vec<usize>>,
}

/// Incremental ingestion of a graph: one declaration of the vertex count
/// followed by any number of edges, duplicates allowed.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    vertices: Option<usize>,
    neighbours: Vec<HashSet<usize>>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares the vertex count. Must precede every edge.
    pub fn declare(&mut self, vertices: usize) -> Result<&mut Self, GraphError> {
        if let Some(first) = self.vertices {
            return Err(GraphError::DuplicateDeclaration {
                first,
                second: vertices,
            });
        }
        self.vertices = Some(vertices);
        self.neighbours = vec![HashSet::new(); vertices];
        Ok(self)
    }

    /// Adds the undirected edge `(from, to)` (0-based). Self-loops are
    /// accepted and dropped.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<&mut Self, GraphError> {
        let vertices = self.vertices.ok_or(GraphError::MissingDeclaration)?;
        for &vertex in &[from, to] {
            if vertex >= vertices {
                return Err(GraphError::VertexOutOfRange { vertex, vertices });
            }
        }
        if from != to {
            self.neighbours[from].insert(to);
            self.neighbours[to].insert(from);
        }
        Ok(self)
    }

    /// Finalises adjacency and derives the complement of every vertex.
    pub fn build(self) -> Result<Graph, GraphError> {
        let vertices = self.vertices.ok_or(GraphError::MissingDeclaration)?;
        let neighbours = self.neighbours;
        let non_neighbours = (0..vertices)
            .map(|v| {
                (0..vertices)
                    .filter(|&u| u != v && !neighbours[v].contains(&u))
                    .collect()
            })
            .collect();
        Ok(Graph {
            neighbours,
            non_neighbours,
        })
    }
}

fn parse_vertex(raw: &str, line: usize, content: &str) -> Result<usize, GraphError> {
    raw.parse::<usize>().map_err(|_| GraphError::Malformed {
        line,
        content: content.to_owned(),
    })
}

impl Graph {
    /// Builds a graph with `vertices` vertices from 0-based edges.
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut builder = GraphBuilder::new();
        builder.declare(vertices)?;
        for (from, to) in edges {
            builder.add_edge(from, to)?;
        }
        builder.build()
    }

    /// Reads a DIMACS `.clq` file.
    pub fn read<P: AsRef<Path>>(filename: P) -> Result<Self, GraphError> {
        let file = File::open(filename)?;
        Self::parse_dimacs(BufReader::new(file))
    }

    /// Parses DIMACS text: `c` comments, one `p <type> <n> <m>` line, then
    /// `e <u> <v>` lines with 1-based endpoints.
    pub fn parse_dimacs<R: BufRead>(reader: R) -> Result<Self, GraphError> {
        lazy_static! {
            static ref PROBLEM: Regex = Regex::new(r"^p\s+\S+\s+(\d+)\s+(\d+)").unwrap();
            static ref EDGE: Regex = Regex::new(r"^e\s+(\d+)\s+(\d+)").unwrap();
        }

        let mut builder = GraphBuilder::new();
        for (index, text) in reader.lines().enumerate() {
            let text = text?;
            let line = index + 1;
            let content = text.trim();
            if content.is_empty() || content.starts_with('c') {
                continue;
            }
            let at_line = |source: GraphError| GraphError::AtLine {
                line,
                source: Box::new(source),
            };
            if let Some(caps) = PROBLEM.captures(content) {
                let vertices = parse_vertex(&caps[1], line, content)?;
                builder.declare(vertices).map_err(at_line)?;
            } else if let Some(caps) = EDGE.captures(content) {
                let from = parse_vertex(&caps[1], line, content)?;
                let to = parse_vertex(&caps[2], line, content)?;
                if from == 0 || to == 0 {
                    return Err(GraphError::Malformed {
                        line,
                        content: content.to_owned(),
                    });
                }
                builder.add_edge(from - 1, to - 1).map_err(at_line)?;
            } else {
                return Err(GraphError::Malformed {
                    line,
                    content: content.to_owned(),
                });
            }
        }
        builder.build()
    }

    pub fn vertex_count(&self) -> usize {
        self.neighbours.len()
    }

    pub fn edge_count(&self) -> usize {
        self.neighbours.iter().map(HashSet::len).sum::<usize>() / 2
    }

    pub fn degree(&self, node: usize) -> usize {
        self.neighbours(node).len()
    }

    pub fn neighbours(&self, node: usize) -> &HashSet<usize> {
        &self.neighbours[node]
    }

    /// Vertices other than `node` that are not adjacent to it, ascending.
    pub fn non_neighbours(&self, node: usize) -> &[usize] {
        &self.non_neighbours[node]
    }

    pub fn is_adjacent(&self, from: usize, to: usize) -> bool {
        self.neighbours[from].contains(&to)
    }

    /// Checks that `clique` is a set of in-range vertices that are pairwise
    /// adjacent. Never panics.
    pub fn verify(&self, clique: &[usize]) -> bool {
        let n = self.vertex_count();
        let mut seen = HashSet::with_capacity(clique.len());
        if !clique.iter().all(|&v| v < n && seen.insert(v)) {
            return false;
        }
        clique.iter().enumerate().all(|(k, &i)| {
            clique[k + 1..].iter().all(|&j| self.is_adjacent(i, j))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn triangle_with_tail() -> Graph {
        Graph::from_edges(4, vec![(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap()
    }

    #[test]
    fn complement_partitions_every_pair() {
        let graph = triangle_with_tail();
        for i in 0..4 {
            assert!(!graph.non_neighbours(i).contains(&i));
            for j in (0..4).filter(|&j| j != i) {
                let adjacent = graph.is_adjacent(i, j);
                let non_adjacent = graph.non_neighbours(i).contains(&j);
                assert!(adjacent ^ non_adjacent, "pair ({}, {})", i, j);
            }
        }
        assert_eq!(graph.non_neighbours(3), &[0, 1]);
    }

    #[test]
    fn duplicate_edges_and_self_loops_are_harmless() {
        let graph = Graph::from_edges(3, vec![(0, 1), (1, 0), (0, 1), (2, 2)]).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degree(2), 0);
        assert_eq!(graph.non_neighbours(2), &[0, 1]);
    }

    #[test]
    fn edge_before_declaration_fails() {
        let mut builder = GraphBuilder::new();
        assert!(matches!(
            builder.add_edge(0, 1),
            Err(GraphError::MissingDeclaration)
        ));
        assert!(matches!(
            GraphBuilder::new().build(),
            Err(GraphError::MissingDeclaration)
        ));
    }

    #[test]
    fn out_of_range_edge_fails() {
        let err = Graph::from_edges(3, vec![(0, 3)]).unwrap_err();
        assert!(matches!(
            err,
            GraphError::VertexOutOfRange {
                vertex: 3,
                vertices: 3
            }
        ));
    }

    #[test]
    fn second_declaration_fails() {
        let mut builder = GraphBuilder::new();
        builder.declare(3).unwrap();
        assert!(matches!(
            builder.declare(4),
            Err(GraphError::DuplicateDeclaration { first: 3, second: 4 })
        ));
    }

    #[test]
    fn parses_dimacs() {
        let text = "c sample\np edge 4 4\ne 1 2\ne 2 3\n\ne 3 1\ne 3 4\n";
        let graph = Graph::parse_dimacs(text.as_bytes()).unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 4);
        assert!(graph.is_adjacent(2, 3));
        assert!(!graph.is_adjacent(0, 3));
    }

    #[rstest]
    #[case("e 1 2\np edge 2 1\n", 1)]
    #[case("p edge 2 1\ne 1 3\n", 2)]
    #[case("p edge 2 1\ne 0 1\n", 2)]
    #[case("p edge 2 1\nx 1 2\n", 2)]
    fn rejects_bad_dimacs(#[case] text: &str, #[case] line: usize) {
        let err = Graph::parse_dimacs(text.as_bytes()).unwrap_err();
        match err {
            GraphError::AtLine { line: at, .. } | GraphError::Malformed { line: at, .. } => {
                assert_eq!(at, line)
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[rstest]
    #[case(&[], true)]
    #[case(&[3], true)]
    #[case(&[0, 1, 2], true)]
    #[case(&[2, 3], true)]
    #[case(&[0, 3], false)]
    #[case(&[0, 0], false)]
    #[case(&[0, 7], false)]
    fn verifies_cliques(#[case] clique: &[usize], #[case] expected: bool) {
        assert_eq!(triangle_with_tail().verify(clique), expected);
    }
}
