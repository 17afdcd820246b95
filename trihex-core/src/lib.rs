//! TRIHEX Core - Connection game engine on a grid of subdivided hexagons
//!
//! This crate provides the core game logic for TRIHEX:
//! - Grid geometry (staggered pointy-top hexagons, three parts each)
//! - Vertex-sharing index and adjacency graph construction
//! - Board state and the player roster
//! - Connectivity-based win/draw detection with the first-move rule
//! - Game controller and configuration

pub mod adjacency;
pub mod board;
pub mod config;
pub mod game;
pub mod geometry;

// Re-exports for convenient access
pub use adjacency::{AdjacencyGraph, AdjacencyMode, VertexIndex};
pub use board::{Board, MoveError, Player, PlayerId, MAX_PLAYERS, PLAYERS};
pub use config::{ConfigError, GameConfig};
pub use game::{connected_group_size, Game, MoveOutcome, Phase, Status};
pub use geometry::{Bounds, GridGeometry, HexCoord, Point, HEX_SIZE, PARTS_PER_HEX};
