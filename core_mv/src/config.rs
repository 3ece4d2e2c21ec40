//! Maze view configuration

use crate::tile::ImageId;
use core::time::Duration;
use ecolor::Color32;
use thiserror::Error;

pub const DEFAULT_ENTITY_SCALE: f32 = 0.7;
pub const DEFAULT_INDICATOR_SCALE: f32 = 0.7;
pub const DEFAULT_TEXT_SCALE: f32 = 0.5;

pub const DEFAULT_BORDER_WIDTH: f32 = 4.0;
pub const DEFAULT_RING_WIDTH: f32 = 10.0;
pub const DEFAULT_RING_SIZE_MULTIPLIER: f32 = 3.0;

pub const DEFAULT_MOVE_ANIMATION_DURATION: Duration = Duration::from_millis(500);
pub const DEFAULT_RING_ANIMATION_DURATION: Duration = Duration::from_millis(1500);

/// Everything the view needs to know up front. Applied at construction;
/// changing the grid shape afterwards means rebuilding the view.
#[derive(Clone, Debug, PartialEq)]
pub struct MazeViewConfig {
    pub row_count: usize,
    pub column_count: usize,

    /// Proportion between a maze cell and the entity inside it (robot circle,
    /// tile image).
    pub entity_scale: f32,
    /// Proportion between the robot circle and the orientation glyph on it.
    pub indicator_scale: f32,
    /// Proportion between a maze cell and the coordinate label text.
    pub coordinate_text_scale: f32,

    pub robot_color: Color32,
    pub coordinate_text_color: Color32,

    /// How many cells the robot indicator's diameter spans.
    pub robot_diameter_cells: usize,

    pub border_width: f32,
    pub border_color: Color32,

    pub ring_width: f32,
    /// How far the pulsing ring grows, as a multiple of the robot radius.
    pub ring_size_multiplier: f32,

    pub orientation_glyph: ImageId,

    pub move_animation_duration: Duration,
    pub ring_animation_duration: Duration,

    pub coordinates_enabled: bool,
}

impl Default for MazeViewConfig {
    fn default() -> Self {
        Self {
            row_count: 1,
            column_count: 1,

            entity_scale: DEFAULT_ENTITY_SCALE,
            indicator_scale: DEFAULT_INDICATOR_SCALE,
            coordinate_text_scale: DEFAULT_TEXT_SCALE,

            robot_color: Color32::BLACK,
            coordinate_text_color: Color32::from_rgb(0, 255, 255),

            robot_diameter_cells: 1,

            border_width: DEFAULT_BORDER_WIDTH,
            border_color: Color32::WHITE,

            ring_width: DEFAULT_RING_WIDTH,
            ring_size_multiplier: DEFAULT_RING_SIZE_MULTIPLIER,

            orientation_glyph: ImageId(0),

            move_animation_duration: DEFAULT_MOVE_ANIMATION_DURATION,
            ring_animation_duration: DEFAULT_RING_ANIMATION_DURATION,

            coordinates_enabled: false,
        }
    }
}

impl MazeViewConfig {
    /// Rejects degenerate configurations before any layout is attempted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.row_count == 0 {
            return Err(ConfigError::Rows(self.row_count));
        }
        if self.column_count == 0 {
            return Err(ConfigError::Cols(self.column_count));
        }
        if self.robot_diameter_cells == 0 {
            return Err(ConfigError::RobotDiameter(self.robot_diameter_cells));
        }
        if !(self.entity_scale > 0.0 && self.entity_scale <= 1.0) {
            return Err(ConfigError::EntityScale(self.entity_scale));
        }
        Ok(())
    }

    /// Length every encoded maze string must have.
    pub fn cell_count(&self) -> usize {
        self.row_count * self.column_count
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("row count must be at least 1, got {0}")]
    Rows(usize),

    #[error("column count must be at least 1, got {0}")]
    Cols(usize),

    #[error("robot diameter must span at least 1 cell, got {0}")]
    RobotDiameter(usize),

    #[error("entity scale must be in (0, 1], got {0}")]
    EntityScale(f32),

    #[error("decode table must contain exactly one robot tile entry, found {0}")]
    MissingRobotTile(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(MazeViewConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_rows() {
        let config = MazeViewConfig {
            row_count: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::Rows(0)));
    }

    #[test]
    fn rejects_zero_columns() {
        let config = MazeViewConfig {
            column_count: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::Cols(0)));
    }

    #[test]
    fn rejects_zero_robot_diameter() {
        let config = MazeViewConfig {
            robot_diameter_cells: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::RobotDiameter(0)));
    }

    #[test]
    fn rejects_out_of_range_entity_scale() {
        for scale in [0.0, -1.0, 1.5] {
            let config = MazeViewConfig {
                entity_scale: scale,
                ..Default::default()
            };
            assert_eq!(config.validate(), Err(ConfigError::EntityScale(scale)));
        }
    }

    #[test]
    fn cell_count_is_rows_times_columns() {
        let config = MazeViewConfig {
            row_count: 10,
            column_count: 15,
            ..Default::default()
        };
        assert_eq!(config.cell_count(), 150);
    }
}
