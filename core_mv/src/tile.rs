//! Tile model and the character decode table

use crate::config::ConfigError;
use ecolor::Color32;
use std::collections::HashMap;
use thiserror::Error;

/// Opaque handle to a raster the host's image provider knows how to load.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageId(pub u16);

/// Visual content of one maze cell.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Tile {
    /// Fully colored tile. Can represent unexplored, explored and obstacle
    /// cells.
    Solid { color: Color32 },

    /// Colored tile with an image centered on top.
    Bitmap { image: ImageId, background: Color32 },

    /// Robot drawn as a maze character. Superseded by the always-on-top robot
    /// overlay; kept for hosts that still encode the robot into the maze.
    Robot {
        robot_color: Color32,
        background: Color32,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("maze character {0:?} has no decode table entry")]
    UnmappedChar(char),

    #[error("encoded maze has {actual} cells, the grid needs {expected}")]
    WrongLength { expected: usize, actual: usize },
}

/// Host-supplied mapping from maze characters to tiles.
///
/// Every character of the current maze string must have an entry; a miss is
/// fatal to the draw rather than skipped, since skipping would shift the
/// index alignment of every later cell.
#[derive(Clone, Debug, Default)]
pub struct TileDecoder {
    entries: HashMap<char, Tile>,
}

impl TileDecoder {
    pub fn new(entries: HashMap<char, Tile>) -> Self {
        Self { entries }
    }

    pub fn insert(&mut self, c: char, tile: Tile) {
        self.entries.insert(c, tile);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn decode(&self, c: char) -> Result<Tile, DecodeError> {
        self.entries
            .get(&c)
            .copied()
            .ok_or(DecodeError::UnmappedChar(c))
    }

    /// Decodes a full maze string, checking the length against the grid.
    /// Runs once per redraw; tiles are cheap value objects, so nothing is
    /// cached across frames.
    pub fn decode_maze(&self, maze: &str, expected_len: usize) -> Result<Vec<Tile>, DecodeError> {
        let actual = maze.chars().count();
        if actual != expected_len {
            return Err(DecodeError::WrongLength {
                expected: expected_len,
                actual,
            });
        }
        maze.chars().map(|c| self.decode(c)).collect()
    }

    /// The legacy robot-as-a-character mapping. Hosts that use it must supply
    /// exactly one [`Tile::Robot`] entry; anything else is a configuration
    /// error on first access.
    pub fn robot_entry(&self) -> Result<(char, Tile), ConfigError> {
        let mut found = self
            .entries
            .iter()
            .filter(|(_, tile)| matches!(tile, Tile::Robot { .. }));
        match (found.next(), found.next()) {
            (Some((&c, &tile)), None) => Ok((c, tile)),
            (None, _) => Err(ConfigError::MissingRobotTile(0)),
            (Some(_), Some(_)) => {
                let count = self
                    .entries
                    .values()
                    .filter(|tile| matches!(tile, Tile::Robot { .. }))
                    .count();
                Err(ConfigError::MissingRobotTile(count))
            }
        }
    }
}

impl FromIterator<(char, Tile)> for TileDecoder {
    fn from_iter<T: IntoIterator<Item = (char, Tile)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
