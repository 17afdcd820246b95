//! Game controller and connectivity win/draw detection

use crate::adjacency::{AdjacencyGraph, AdjacencyMode, VertexIndex};
use crate::board::{Board, MoveError, PlayerId, PLAYERS};
use crate::config::{ConfigError, GameConfig};
use crate::geometry::GridGeometry;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

// ============================================================================
// CORE TYPES
// ============================================================================

/// Lifecycle of one game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    NotStarted,
    Active,
    Won(PlayerId),
    Drawn,
}

/// Result of a legal placement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    Continue,
    Win(PlayerId),
    Draw,
}

/// Observable status for the UI collaborator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    NotStarted,
    AwaitingMove(PlayerId),
    Won {
        player: PlayerId,
        length: usize,
        mode: AdjacencyMode,
    },
    Drawn,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Status::NotStarted => write!(f, "pick settings and start a game"),
            Status::AwaitingMove(p) => {
                let player = &PLAYERS[p as usize];
                write!(f, "awaiting move: {} ({})", player.label, player.color)
            }
            Status::Won {
                player,
                length,
                mode,
            } => write!(
                f,
                "{} wins (length {}, {} mode)",
                PLAYERS[player as usize].label,
                length,
                mode
            ),
            Status::Drawn => write!(f, "draw"),
        }
    }
}

// ============================================================================
// WIN DETECTION
// ============================================================================

/// Size of the connected same-mark group containing `start`. Breadth-first
/// over the given graph; the graph can contain cycles, so a visited set is
/// kept. Returns 0 for an unmarked start cell.
pub fn connected_group_size(board: &Board, graph: &AdjacencyGraph, start: usize) -> usize {
    let mark = match board.mark(start) {
        Some(m) => m,
        None => return 0,
    };

    let mut visited = vec![false; board.len()];
    let mut queue = VecDeque::new();
    visited[start] = true;
    queue.push_back(start);
    let mut count = 0;

    while let Some(cell) = queue.pop_front() {
        count += 1;
        for &neighbor in graph.neighbors(cell) {
            if !visited[neighbor] && board.mark(neighbor) == Some(mark) {
                visited[neighbor] = true;
                queue.push_back(neighbor);
            }
        }
    }

    count
}

// ============================================================================
// GAME CONTROLLER
// ============================================================================

/// Owns the configuration, the cached graphs, the board and the turn order.
/// Sole mutator of game state; everything it delegates to is a pure
/// function of its inputs.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    geometry: GridGeometry,
    /// Graph for the configured mode
    graph: AdjacencyGraph,
    /// Face graph, reserved for the first-move check
    face_graph: AdjacencyGraph,
    board: Board,
    current: usize,
    first_move: bool,
    phase: Phase,
}

impl Game {
    /// Fresh controller with the default configuration; no game running
    /// until [`start`](Self::start) is called.
    pub fn new() -> Self {
        Self::with_phase(GameConfig::default(), Phase::NotStarted)
    }

    fn with_phase(config: GameConfig, phase: Phase) -> Self {
        let geometry = GridGeometry::square(config.grid_size);
        let index = VertexIndex::build(&geometry);
        let graph = AdjacencyGraph::build(&index, config.mode);
        let face_graph = if config.mode == AdjacencyMode::Face {
            graph.clone()
        } else {
            AdjacencyGraph::build(&index, AdjacencyMode::Face)
        };
        let board = Board::new(geometry.total_cells());

        Self {
            config,
            geometry,
            graph,
            face_graph,
            board,
            current: 0,
            first_move: true,
            phase,
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_player(&self) -> PlayerId {
        self.current as PlayerId
    }

    pub fn mark_at(&self, cell: usize) -> Option<PlayerId> {
        self.board.mark(cell)
    }

    pub fn remaining_moves(&self) -> usize {
        self.board.remaining()
    }

    pub fn status(&self) -> Status {
        match self.phase {
            Phase::NotStarted => Status::NotStarted,
            Phase::Active => Status::AwaitingMove(self.current_player()),
            Phase::Won(player) => Status::Won {
                player,
                length: self.config.min_win_length,
                mode: self.config.mode,
            },
            Phase::Drawn => Status::Drawn,
        }
    }

    // ========================================================================
    // LIFECYCLE
    // ========================================================================

    /// Validate the configuration and begin a new game. On a validation
    /// failure the running game, if any, is left untouched.
    pub fn start(&mut self, config: GameConfig) -> Result<(), ConfigError> {
        config.validate()?;
        *self = Self::with_phase(config, Phase::Active);
        Ok(())
    }

    /// Back to the default configuration with no game running
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // ========================================================================
    // MOVES
    // ========================================================================

    /// Place the current player's mark, run the detector, advance the turn.
    /// The very first placement of a game is checked against the face graph
    /// regardless of the configured mode; every later one uses the
    /// configured graph.
    pub fn place(&mut self, cell: usize) -> Result<MoveOutcome, MoveError> {
        if self.phase != Phase::Active {
            return Err(MoveError::NotActive);
        }
        if cell >= self.board.len() {
            return Err(MoveError::OutOfRange(cell));
        }

        self.board.set(cell, self.current_player())?;
        let use_face = std::mem::replace(&mut self.first_move, false);

        let graph = if use_face { &self.face_graph } else { &self.graph };
        let group = connected_group_size(&self.board, graph, cell);

        if group >= self.config.min_win_length {
            let winner = self.current_player();
            self.phase = Phase::Won(winner);
            Ok(MoveOutcome::Win(winner))
        } else if self.board.is_full() {
            self.phase = Phase::Drawn;
            Ok(MoveOutcome::Draw)
        } else {
            self.current = (self.current + 1) % self.config.num_players;
            Ok(MoveOutcome::Continue)
        }
    }

    /// Editing-mode clear: unmark a cell without touching turn order, the
    /// first-move flag or the verdict. Never re-runs the detector, so it
    /// cannot revert a terminal phase either.
    pub fn edit_clear(&mut self, cell: usize) -> Result<(), MoveError> {
        if self.phase != Phase::Active {
            return Err(MoveError::NotActive);
        }
        if cell >= self.board.len() {
            return Err(MoveError::OutOfRange(cell));
        }
        self.board.clear(cell)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
