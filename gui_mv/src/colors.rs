#![allow(dead_code)]

use eframe::egui::Color32;

/// Unexplored maze cells ('U').
pub const UNEXPLORED_COLOR: Color32 = Color32::from_rgb(63, 81, 181);
/// Explored maze cells ('E').
pub const EXPLORED_COLOR: Color32 = Color32::YELLOW;
/// Background behind the digit-six marker.
pub const SOFT_BLACK: Color32 = Color32::from_rgb(26, 26, 26);

/// The robot indicator circle and its pulsing ring.
pub const ROBOT_COLOR: Color32 = Color32::from_rgb(255, 64, 129);
/// Cell border strokes.
pub const BORDER_COLOR: Color32 = Color32::WHITE;
/// Coordinate labels around the grid.
pub const COORDINATE_TEXT_COLOR: Color32 = Color32::from_rgb(0, 188, 212);
