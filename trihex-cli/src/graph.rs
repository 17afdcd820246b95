//! Adjacency graph inspection

use anyhow::Result;
use trihex_core::{AdjacencyGraph, AdjacencyMode, GridGeometry, VertexIndex};

pub fn run(grid_size: usize, mode: &str) -> Result<()> {
    let mode: AdjacencyMode = mode.parse()?;
    let geometry = GridGeometry::square(grid_size);
    let index = VertexIndex::build(&geometry);
    let graph = AdjacencyGraph::build(&index, mode);

    let degrees: Vec<usize> = (0..graph.total_cells())
        .map(|c| graph.neighbors(c).len())
        .collect();
    let min = degrees.iter().min().copied().unwrap_or(0);
    let max = degrees.iter().max().copied().unwrap_or(0);
    let avg = degrees.iter().sum::<usize>() as f64 / degrees.len().max(1) as f64;

    let bounds = geometry.bounds();
    println!("grid: {grid_size}x{grid_size} hexes, {} cells", geometry.total_cells());
    println!("surface: {:.1} x {:.1}", bounds.width(), bounds.height());
    println!("mode: {mode}");
    println!("edges: {}", graph.edge_count());
    println!("degree: min {min}, max {max}, avg {avg:.2}");

    for cell in 0..graph.total_cells() {
        println!("{cell:>3}: {:?}", graph.neighbors(cell));
    }
    Ok(())
}
