//! Game configuration and atomic validation

use crate::adjacency::AdjacencyMode;
use crate::board::MAX_PLAYERS;
use crate::geometry::PARTS_PER_HEX;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::Path;
use thiserror::Error;

pub const GRID_SIZE_RANGE: RangeInclusive<usize> = 2..=6;
pub const PLAYER_COUNT_RANGE: RangeInclusive<usize> = 2..=MAX_PLAYERS;
pub const MIN_WIN_LENGTH: usize = 3;

pub const DEFAULT_GRID_SIZE: usize = 3;
pub const DEFAULT_NUM_PLAYERS: usize = 4;
pub const DEFAULT_WIN_LENGTH: usize = 3;

/// Rejected configuration; nothing is applied on failure
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid size {0} is out of range (2-6)")]
    GridSize(usize),
    #[error("player count {0} is out of range (2-4)")]
    PlayerCount(usize),
    #[error("win length {got} is out of range (3-{max})")]
    WinLength { got: usize, max: usize },
    #[error("unknown adjacency mode '{0}' (expected general, face or corner)")]
    UnknownMode(String),
}

/// Settings for one game, validated as a unit before the game starts and
/// immutable until the next start or reset
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid is N x N hexagons
    pub grid_size: usize,
    pub num_players: usize,
    /// Connected group size that wins
    pub min_win_length: usize,
    pub mode: AdjacencyMode,
}

impl GameConfig {
    pub fn total_cells(&self) -> usize {
        self.grid_size * self.grid_size * PARTS_PER_HEX
    }

    /// All-or-nothing validation; the first violation is reported
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !GRID_SIZE_RANGE.contains(&self.grid_size) {
            return Err(ConfigError::GridSize(self.grid_size));
        }
        if !PLAYER_COUNT_RANGE.contains(&self.num_players) {
            return Err(ConfigError::PlayerCount(self.num_players));
        }
        let max = self.total_cells();
        if self.min_win_length < MIN_WIN_LENGTH || self.min_win_length > max {
            return Err(ConfigError::WinLength {
                got: self.min_win_length,
                max,
            });
        }
        Ok(())
    }

    /// Load from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save to a JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            num_players: DEFAULT_NUM_PLAYERS,
            min_win_length: DEFAULT_WIN_LENGTH,
            mode: AdjacencyMode::General,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        GameConfig::default().validate().unwrap();
    }

    #[test]
    fn test_range_checks() {
        let base = GameConfig::default();

        let mut c = base;
        c.grid_size = 7;
        assert_eq!(c.validate(), Err(ConfigError::GridSize(7)));
        c.grid_size = 1;
        assert_eq!(c.validate(), Err(ConfigError::GridSize(1)));

        let mut c = base;
        c.num_players = 5;
        assert_eq!(c.validate(), Err(ConfigError::PlayerCount(5)));
        c.num_players = 1;
        assert_eq!(c.validate(), Err(ConfigError::PlayerCount(1)));

        let mut c = base;
        c.min_win_length = 2;
        assert!(matches!(c.validate(), Err(ConfigError::WinLength { got: 2, .. })));
        c.min_win_length = c.total_cells() + 1;
        assert!(c.validate().is_err());
        c.min_win_length = c.total_cells();
        c.validate().unwrap();
    }

    #[test]
    fn test_total_cells() {
        for n in 2..=6 {
            let c = GameConfig {
                grid_size: n,
                ..GameConfig::default()
            };
            assert_eq!(c.total_cells(), n * n * 3);
        }
    }

    #[test]
    fn test_json_round_trip() {
        let config = GameConfig {
            grid_size: 4,
            num_players: 3,
            min_win_length: 5,
            mode: AdjacencyMode::Corner,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
