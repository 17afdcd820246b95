//! Vertex-sharing index and adjacency graph construction

use crate::config::ConfigError;
use crate::geometry::{GridGeometry, Point};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Decimal places kept when collapsing floating-point vertices from
/// neighboring hexagons into one logical vertex
const ROUND_PRECISION: i32 = 2;

/// Quantized vertex identity (integer hundredths, exact Eq + Hash)
pub type VertexKey = (i64, i64);

fn quantize(v: f64) -> i64 {
    (v * 10.0_f64.powi(ROUND_PRECISION)).round() as i64
}

/// Key for a geometric point, rounded to [`ROUND_PRECISION`] decimals
pub fn vertex_key(p: Point) -> VertexKey {
    (quantize(p.x), quantize(p.y))
}

/// How many shared vertices make two cells adjacent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdjacencyMode {
    /// Any contact: at least one shared vertex
    General,
    /// Shared edge: at least two shared vertices
    Face,
    /// Single shared corner: exactly one shared vertex
    Corner,
}

impl AdjacencyMode {
    pub const ALL: [AdjacencyMode; 3] =
        [AdjacencyMode::General, AdjacencyMode::Face, AdjacencyMode::Corner];

    /// Mode predicate on the shared-vertex count
    pub fn connects(self, shared: usize) -> bool {
        match self {
            AdjacencyMode::General => shared >= 1,
            AdjacencyMode::Face => shared >= 2,
            AdjacencyMode::Corner => shared == 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AdjacencyMode::General => "general",
            AdjacencyMode::Face => "face",
            AdjacencyMode::Corner => "corner",
        }
    }
}

impl fmt::Display for AdjacencyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdjacencyMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(AdjacencyMode::General),
            "face" => Ok(AdjacencyMode::Face),
            "corner" => Ok(AdjacencyMode::Corner),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

/// Maps every quantized vertex to the cells whose polygon touches it,
/// and every cell to its quantized vertex set. Deterministic for a given
/// grid, independent of iteration order.
#[derive(Clone, Debug)]
pub struct VertexIndex {
    by_vertex: FxHashMap<VertexKey, Vec<usize>>,
    by_cell: Vec<FxHashSet<VertexKey>>,
}

impl VertexIndex {
    pub fn build(geometry: &GridGeometry) -> Self {
        let mut by_vertex: FxHashMap<VertexKey, Vec<usize>> = FxHashMap::default();
        let mut by_cell = vec![FxHashSet::default(); geometry.total_cells()];

        for (cell, polygon) in geometry.polygons() {
            for &p in polygon {
                let key = vertex_key(p);
                if by_cell[cell].insert(key) {
                    by_vertex.entry(key).or_default().push(cell);
                }
            }
        }

        Self { by_vertex, by_cell }
    }

    /// Cells touching a quantized vertex
    pub fn cells_at(&self, key: VertexKey) -> &[usize] {
        self.by_vertex.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Quantized vertex set of a cell
    pub fn vertices_of(&self, cell: usize) -> &FxHashSet<VertexKey> {
        &self.by_cell[cell]
    }

    /// Number of vertices shared by two cells
    pub fn shared_vertices(&self, a: usize, b: usize) -> usize {
        self.by_cell[a].intersection(&self.by_cell[b]).count()
    }

    pub fn total_cells(&self) -> usize {
        self.by_cell.len()
    }
}

/// Undirected adjacency graph over cell indices. Built once per
/// (grid size, mode) pair and immutable afterwards; neighbor lists are
/// sorted ascending with no duplicates.
#[derive(Clone, Debug)]
pub struct AdjacencyGraph {
    mode: AdjacencyMode,
    neighbors: Vec<Vec<usize>>,
}

impl AdjacencyGraph {
    /// Build from a vertex index: unordered pair scan with symmetric
    /// insertion. O(N^2) over at most 108 cells.
    pub fn build(index: &VertexIndex, mode: AdjacencyMode) -> Self {
        let n = index.total_cells();
        let mut neighbors = vec![Vec::new(); n];

        for a in 0..n {
            for b in (a + 1)..n {
                let shared = index.shared_vertices(a, b);
                if shared > 0 && mode.connects(shared) {
                    neighbors[a].push(b);
                    neighbors[b].push(a);
                }
            }
        }

        Self { mode, neighbors }
    }

    pub fn mode(&self) -> AdjacencyMode {
        self.mode
    }

    pub fn total_cells(&self) -> usize {
        self.neighbors.len()
    }

    pub fn neighbors(&self, cell: usize) -> &[usize] {
        &self.neighbors[cell]
    }

    pub fn contains_edge(&self, a: usize, b: usize) -> bool {
        self.neighbors[a].binary_search(&b).is_ok()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum::<usize>() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graphs(n: usize) -> (AdjacencyGraph, AdjacencyGraph, AdjacencyGraph) {
        let geo = GridGeometry::square(n);
        let index = VertexIndex::build(&geo);
        (
            AdjacencyGraph::build(&index, AdjacencyMode::General),
            AdjacencyGraph::build(&index, AdjacencyMode::Face),
            AdjacencyGraph::build(&index, AdjacencyMode::Corner),
        )
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("general".parse::<AdjacencyMode>().unwrap(), AdjacencyMode::General);
        assert_eq!("face".parse::<AdjacencyMode>().unwrap(), AdjacencyMode::Face);
        assert_eq!("corner".parse::<AdjacencyMode>().unwrap(), AdjacencyMode::Corner);
        assert!("diagonal".parse::<AdjacencyMode>().is_err());
    }

    #[test]
    fn test_parts_of_one_hex_share_center_and_one_rim_vertex() {
        let geo = GridGeometry::new(1, 1);
        let index = VertexIndex::build(&geo);
        // Each pair of parts shares the hex center plus one perimeter vertex
        assert_eq!(index.shared_vertices(0, 1), 2);
        assert_eq!(index.shared_vertices(1, 2), 2);
        assert_eq!(index.shared_vertices(2, 0), 2);
    }

    #[test]
    fn test_single_hex_graphs() {
        let (general, face, corner) = graphs(1);
        // All three part pairs are edge-adjacent, none corner-adjacent
        assert_eq!(general.edge_count(), 3);
        assert_eq!(face.edge_count(), 3);
        assert_eq!(corner.edge_count(), 0);
    }

    #[test]
    fn test_symmetry() {
        let (general, face, corner) = graphs(3);
        for g in [&general, &face, &corner] {
            for a in 0..g.total_cells() {
                for &b in g.neighbors(a) {
                    assert!(g.contains_edge(b, a), "edge ({a},{b}) not symmetric");
                }
            }
        }
    }

    #[test]
    fn test_mode_subset_relations() {
        for n in 2..=6 {
            let (general, face, corner) = graphs(n);
            for a in 0..general.total_cells() {
                for &b in face.neighbors(a) {
                    assert!(general.contains_edge(a, b));
                    assert!(!corner.contains_edge(a, b));
                }
                for &b in corner.neighbors(a) {
                    assert!(general.contains_edge(a, b));
                }
            }
            assert_eq!(general.edge_count(), face.edge_count() + corner.edge_count());
        }
    }

    #[test]
    fn test_no_duplicate_edges() {
        let (general, _, _) = graphs(4);
        for a in 0..general.total_cells() {
            let list = general.neighbors(a);
            assert!(list.windows(2).all(|w| w[0] < w[1]), "list not strictly sorted");
            assert!(!list.contains(&a), "self edge at {a}");
        }
    }

    #[test]
    fn test_cross_hex_adjacency_exists() {
        // Adjacent hexes in one row share an edge, so some pair of their
        // parts must be face-adjacent
        let geo = GridGeometry::new(1, 2);
        let index = VertexIndex::build(&geo);
        let face = AdjacencyGraph::build(&index, AdjacencyMode::Face);
        let across: usize = (0..3).map(|a| (3..6).filter(|&b| face.contains_edge(a, b)).count()).sum();
        assert!(across > 0, "no face adjacency between neighboring hexes");
    }

    #[test]
    fn test_deterministic_rebuild() {
        let geo = GridGeometry::square(3);
        let i1 = VertexIndex::build(&geo);
        let i2 = VertexIndex::build(&geo);
        let g1 = AdjacencyGraph::build(&i1, AdjacencyMode::General);
        let g2 = AdjacencyGraph::build(&i2, AdjacencyMode::General);
        for a in 0..g1.total_cells() {
            assert_eq!(g1.neighbors(a), g2.neighbors(a));
        }
    }
}
