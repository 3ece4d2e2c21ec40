//! Shared logic for the maze grid view widget
//!
//! Everything in this crate is plain state and math (geometry, decoding,
//! animation timing) so it can be unit tested without opening a window.
//! The gui crate owns the painting and pointer plumbing.

pub mod anim;
pub mod config;
pub mod layout;
pub mod snapshot;
pub mod tile;

pub use anim::{Orientation, RobotAnimator, RobotRenderState};
pub use config::{ConfigError, MazeViewConfig};
pub use layout::{CellLayout, CellRect};
pub use snapshot::MazeSnapshot;
pub use tile::{DecodeError, ImageId, Tile, TileDecoder};
