//! Board marks and the player roster

use thiserror::Error;

/// Player identifier (index into the roster)
pub type PlayerId = u8;

/// Roster size ceiling
pub const MAX_PLAYERS: usize = 4;

/// Roster entry: display label and color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    pub label: &'static str,
    pub color: &'static str,
}

impl Player {
    const fn new(label: &'static str, color: &'static str) -> Self {
        Self { label, color }
    }
}

/// Fixed ordered roster; a game uses the first `num_players` entries
pub static PLAYERS: [Player; MAX_PLAYERS] = [
    Player::new("P1", "blue"),
    Player::new("P2", "red"),
    Player::new("P3", "green"),
    Player::new("P4", "purple"),
];

/// Rejected move or edit; non-fatal, state is left unchanged
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("cell {0} is already occupied")]
    Occupied(usize),
    #[error("cell {0} is already empty")]
    Empty(usize),
    #[error("cell index {0} is out of range")]
    OutOfRange(usize),
    #[error("game is not active")]
    NotActive,
}

/// Per-cell marks. Mutated only through `set` / `clear`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    marks: Vec<Option<PlayerId>>,
}

impl Board {
    pub fn new(total_cells: usize) -> Self {
        Self {
            marks: vec![None; total_cells],
        }
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn mark(&self, cell: usize) -> Option<PlayerId> {
        self.marks[cell]
    }

    pub fn marks(&self) -> &[Option<PlayerId>] {
        &self.marks
    }

    /// Mark an unmarked cell
    pub fn set(&mut self, cell: usize, player: PlayerId) -> Result<(), MoveError> {
        if self.marks[cell].is_some() {
            return Err(MoveError::Occupied(cell));
        }
        self.marks[cell] = Some(player);
        Ok(())
    }

    /// Unmark a marked cell
    pub fn clear(&mut self, cell: usize) -> Result<(), MoveError> {
        if self.marks[cell].is_none() {
            return Err(MoveError::Empty(cell));
        }
        self.marks[cell] = None;
        Ok(())
    }

    /// Count of unmarked cells
    pub fn remaining(&self) -> usize {
        self.marks.iter().filter(|m| m.is_none()).count()
    }

    pub fn is_full(&self) -> bool {
        self.remaining() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear() {
        let mut board = Board::new(12);
        assert_eq!(board.remaining(), 12);

        board.set(5, 0).unwrap();
        assert_eq!(board.mark(5), Some(0));
        assert_eq!(board.remaining(), 11);
        assert_eq!(board.set(5, 1), Err(MoveError::Occupied(5)));
        assert_eq!(board.mark(5), Some(0));

        board.clear(5).unwrap();
        assert_eq!(board.mark(5), None);
        assert_eq!(board.clear(5), Err(MoveError::Empty(5)));
        assert_eq!(board.remaining(), 12);
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new(3);
        assert!(!board.is_full());
        for cell in 0..3 {
            board.set(cell, (cell % 2) as PlayerId).unwrap();
        }
        assert!(board.is_full());
        assert_eq!(board.remaining(), 0);
    }

    #[test]
    fn test_roster_labels() {
        assert_eq!(PLAYERS[0].label, "P1");
        assert_eq!(PLAYERS[3].color, "purple");
    }
}
