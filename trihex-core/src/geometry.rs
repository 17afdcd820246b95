//! Hex grid geometry: staggered pointy-top layout, sub-cell polygons

use serde::{Deserialize, Serialize};

/// Hexagon size (center-to-vertex distance)
pub const HEX_SIZE: f64 = 40.0;

/// Sub-cells ("parts") per hexagon
pub const PARTS_PER_HEX: usize = 3;

/// Perimeter vertex angles in degrees, pointy-top, fixed angular order
const VERTEX_ANGLES_DEG: [f64; 6] = [90.0, 30.0, -30.0, -90.0, -150.0, 150.0];

/// Vertex windows partitioning the hexagon into three quadrilaterals.
/// Indices 0-5 are perimeter vertices in angular order, 6 is the center.
/// The windows tile the hexagon: each perimeter vertex appears in exactly
/// two windows, the center in all three.
const PART_WINDOWS: [[usize; 4]; PARTS_PER_HEX] = [[6, 0, 1, 2], [6, 2, 3, 4], [6, 4, 5, 0]];

/// 2D point in grid space
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Hexagon position on the staggered grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HexCoord {
    pub row: usize,
    pub col: usize,
}

impl HexCoord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Center of this hexagon (odd rows shift right by half a hex width)
    pub fn center(&self) -> Point {
        let q = self.col as i64 - (self.row / 2) as i64;
        let x = HEX_SIZE * 3.0_f64.sqrt() * (q as f64 + self.row as f64 / 2.0);
        let y = HEX_SIZE * 1.5 * self.row as f64;
        Point::new(x, y)
    }

    /// The 6 perimeter vertices plus the center, in window index order
    pub fn points(&self) -> [Point; 7] {
        let c = self.center();
        let mut pts = [c; 7];
        for (i, angle) in VERTEX_ANGLES_DEG.iter().enumerate() {
            let rad = angle.to_radians();
            pts[i] = Point::new(c.x + HEX_SIZE * rad.cos(), c.y + HEX_SIZE * rad.sin());
        }
        pts
    }
}

/// Tight bounding box of the grid's perimeter vertices
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    fn include(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.max_x = self.max_x.max(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_y = self.max_y.max(p.y);
    }
}

/// Geometry of a full grid: one 4-point polygon per cell, plus the
/// bounding box used by a drawing surface. Pure function of the grid
/// dimensions; the polygons are only needed to derive vertex sharing.
#[derive(Clone, Debug)]
pub struct GridGeometry {
    rows: usize,
    cols: usize,
    polygons: Vec<[Point; 4]>,
    bounds: Bounds,
}

impl GridGeometry {
    /// Compute geometry for an N x N grid
    pub fn square(n: usize) -> Self {
        Self::new(n, n)
    }

    pub fn new(rows: usize, cols: usize) -> Self {
        let mut polygons = Vec::with_capacity(rows * cols * PARTS_PER_HEX);
        let mut bounds = Bounds {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        };

        for row in 0..rows {
            for col in 0..cols {
                let points = HexCoord::new(row, col).points();
                for &p in &points[..6] {
                    bounds.include(p);
                }
                for window in &PART_WINDOWS {
                    let mut poly = [points[6]; 4];
                    for (i, &v) in window.iter().enumerate() {
                        poly[i] = points[v];
                    }
                    polygons.push(poly);
                }
            }
        }

        Self {
            rows,
            cols,
            polygons,
            bounds,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn total_cells(&self) -> usize {
        self.rows * self.cols * PARTS_PER_HEX
    }

    /// Flat cell index for (row, col, part)
    pub fn index_of(&self, hex: HexCoord, part: usize) -> usize {
        (hex.row * self.cols + hex.col) * PARTS_PER_HEX + part
    }

    /// Inverse of [`index_of`](Self::index_of)
    pub fn coords_of(&self, cell: usize) -> (HexCoord, usize) {
        let hex_index = cell / PARTS_PER_HEX;
        let part = cell % PARTS_PER_HEX;
        let row = hex_index / self.cols;
        let col = hex_index % self.cols;
        (HexCoord::new(row, col), part)
    }

    /// Polygon of a cell, absolute coordinates
    pub fn polygon(&self, cell: usize) -> &[Point; 4] {
        &self.polygons[cell]
    }

    pub fn polygons(&self) -> impl Iterator<Item = (usize, &[Point; 4])> {
        self.polygons.iter().enumerate()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}
