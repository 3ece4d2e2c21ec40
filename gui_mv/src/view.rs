//! The embeddable maze view widget.
//!
//! Owns the full render/animation state bundle; the host pushes maze and
//! robot updates in and gets released-touch grid coordinates back.

use crate::drawing;
use crate::images::SpriteBank;
use core_mv::{
    CellLayout, ConfigError, DecodeError, MazeSnapshot, MazeViewConfig, Orientation, RobotAnimator,
    TileDecoder,
};
use eframe::egui::{Response, Sense, Ui};
use log::warn;
use web_time::Instant;

pub struct MazeView {
    config: MazeViewConfig,
    decoder: TileDecoder,
    maze: String,
    robot_index: usize,
    orientation: Orientation,
    layout: Option<CellLayout>,
    animator: Option<RobotAnimator>,
}

pub struct MazeViewResponse {
    pub response: Response,
    /// Grid coordinates of a released touch inside the grid, y measured
    /// upward from the bottom row. Touches elsewhere are consumed silently.
    pub touched: Option<(usize, usize)>,
    /// Set when the current maze could not be decoded and the draw was
    /// aborted. A decode miss corrupts cell/index alignment, so nothing is
    /// painted instead of skipping cells.
    pub decode_failure: Option<DecodeError>,
}

impl MazeView {
    pub fn new(config: MazeViewConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            decoder: TileDecoder::default(),
            maze: String::new(),
            robot_index: 0,
            orientation: Orientation::default(),
            layout: None,
            animator: None,
        })
    }

    pub fn config(&self) -> &MazeViewConfig {
        &self.config
    }

    /// The decode table must cover every character before a maze that uses
    /// it is set.
    pub fn set_decoder(&mut self, decoder: TileDecoder) {
        self.decoder = decoder;
    }

    pub fn decoder(&self) -> &TileDecoder {
        &self.decoder
    }

    /// Replaces the encoded maze. The new string is validated against the
    /// grid shape and the decode table first, so a failed update leaves the
    /// displayed maze untouched.
    pub fn set_maze(&mut self, maze: impl Into<String>) -> Result<(), DecodeError> {
        let maze = maze.into();
        self.decoder.decode_maze(&maze, self.config.cell_count())?;
        self.maze = maze;
        Ok(())
    }

    pub fn maze(&self) -> &str {
        &self.maze
    }

    /// Moves the robot indicator to a maze index. `index` must be inside the
    /// grid. Before the first layout pass the index is only recorded; the
    /// indicator appears there once the view has a size.
    pub fn set_robot_position(&mut self, index: usize, animated: bool) {
        self.robot_index = index;
        if let (Some(layout), Some(animator)) = (&self.layout, &mut self.animator) {
            let center = layout.indicator_center(index, self.config.robot_diameter_cells);
            animator.set_position(index, center, animated, Instant::now());
        }
    }

    pub fn robot_index(&self) -> usize {
        self.robot_index
    }

    pub fn set_robot_orientation(&mut self, orientation: Orientation, animated: bool) {
        self.orientation = orientation;
        if let Some(animator) = &mut self.animator {
            animator.set_orientation(orientation, animated, Instant::now());
        }
    }

    pub fn robot_orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn snapshot(&self) -> MazeSnapshot {
        MazeSnapshot {
            maze: self.maze.clone(),
            robot_index: self.robot_index,
        }
    }

    /// Restores a snapshot taken before a teardown. The decode table must
    /// already be set again.
    pub fn restore(&mut self, snapshot: MazeSnapshot) -> Result<(), DecodeError> {
        self.set_maze(snapshot.maze)?;
        self.set_robot_position(snapshot.robot_index, false);
        Ok(())
    }

    pub fn show(&mut self, ui: &mut Ui, images: &mut SpriteBank) -> MazeViewResponse {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click());
        let rect = response.rect;
        let now = Instant::now();

        // geometry is recomputed only when the viewport size changes; the
        // ring restarts with it because its radius is cell-size derived, and
        // in-flight tweens snap rather than chase stale pixel coordinates
        let stale = self
            .layout
            .as_ref()
            .map_or(true, |layout| layout.size_changed(rect.width(), rect.height()));
        if stale {
            let layout = CellLayout::compute(&self.config, rect.width(), rect.height());
            let center = layout.indicator_center(self.robot_index, self.config.robot_diameter_cells);
            match &mut self.animator {
                Some(animator) => animator.on_resize(center, now),
                None => {
                    let mut animator =
                        RobotAnimator::new(&self.config, self.robot_index, center, now);
                    animator.set_orientation(self.orientation, false, now);
                    self.animator = Some(animator);
                }
            }
            self.layout = Some(layout);
        }

        let layout = self.layout.as_ref().expect("layout computed above");
        let animator = self.animator.as_mut().expect("animator created above");

        animator.tick(now, layout.robot_radius(&self.config));

        let mut decode_failure = None;
        if !self.maze.is_empty() {
            match self.decoder.decode_maze(&self.maze, self.config.cell_count()) {
                Ok(tiles) => {
                    let ctx = drawing::PaintCtx {
                        config: &self.config,
                        layout,
                        origin: rect.min.to_vec2(),
                        painter: &painter,
                    };
                    drawing::draw_tiles(&ctx, &tiles, images);
                    if self.config.coordinates_enabled {
                        drawing::draw_coordinates(&ctx);
                    }
                    drawing::draw_robot(&ctx, animator.state(), images);
                }
                Err(e) => {
                    warn!("aborting maze draw: {e}");
                    decode_failure = Some(e);
                }
            }
        }

        // only the released click reaches the host; presses and drags are
        // consumed by the allocation itself
        let mut touched = None;
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                touched = layout.grid_at(pos.x - rect.min.x, pos.y - rect.min.y);
            }
        }

        MazeViewResponse {
            response,
            touched,
            decode_failure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;
    use core_mv::Tile;

    fn view() -> MazeView {
        let config = MazeViewConfig {
            row_count: 2,
            column_count: 2,
            ..Default::default()
        };
        let mut view = MazeView::new(config).unwrap();
        view.set_decoder(TileDecoder::from_iter([(
            'U',
            Tile::Solid {
                color: colors::UNEXPLORED_COLOR,
            },
        )]));
        view
    }

    #[test]
    fn rejects_degenerate_configuration() {
        let config = MazeViewConfig {
            row_count: 0,
            ..Default::default()
        };
        assert_eq!(MazeView::new(config).err(), Some(ConfigError::Rows(0)));
    }

    #[test]
    fn rejected_maze_updates_leave_state_untouched() {
        let mut view = view();
        view.set_maze("UUUU").unwrap();

        assert_eq!(
            view.set_maze("UZUU"),
            Err(DecodeError::UnmappedChar('Z'))
        );
        assert_eq!(view.maze(), "UUUU");

        assert_eq!(
            view.set_maze("UUU"),
            Err(DecodeError::WrongLength {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(view.maze(), "UUUU");
    }

    #[test]
    fn snapshot_restores_maze_and_robot() {
        let mut view = view();
        view.set_maze("UUUU").unwrap();
        view.set_robot_position(3, false);

        let snapshot = view.snapshot();

        let mut recreated = self::view();
        recreated.restore(snapshot).unwrap();
        assert_eq!(recreated.maze(), "UUUU");
        assert_eq!(recreated.robot_index(), 3);
    }

    #[test]
    fn orientation_is_tracked_before_the_first_layout() {
        let mut view = view();
        view.set_robot_orientation(Orientation::Right, true);
        assert_eq!(view.robot_orientation(), Orientation::Right);
    }
}
