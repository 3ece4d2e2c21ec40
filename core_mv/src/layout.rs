//! Cell geometry: pixel rectangles for every maze index and the inverse
//! pixel -> grid mapping.
//!
//! Index 0 is the bottom-left cell and the index grows left-to-right, then
//! upward. The same convention holds for the encoded maze string and for the
//! hit-test result, so `index = grid_y * columns + grid_x` everywhere.

use crate::config::MazeViewConfig;
use log::debug;
use nalgebra::Point2;

/// Axis-aligned pixel rectangle of one cell, y growing downward.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CellRect {
    pub min: Point2<f32>,
    pub max: Point2<f32>,
}

impl CellRect {
    pub fn center(&self) -> Point2<f32> {
        Point2::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

/// Cached cell rectangles for one viewport size.
///
/// Recomputed only when the viewport size changes; every redraw reads the
/// same list.
#[derive(Clone, Debug, PartialEq)]
pub struct CellLayout {
    rows: usize,
    cols: usize,
    cell_size: f32,
    padding_h: f32,
    padding_v: f32,
    width: f32,
    height: f32,
    cells: Vec<CellRect>,
}

impl CellLayout {
    /// Lays the grid out inside `width` x `height` pixels. A single square
    /// cell size is chosen so the whole grid fits without distortion, and the
    /// leftover space becomes symmetric padding. When coordinate labels are
    /// enabled one extra cell is reserved on every side for them.
    pub fn compute(config: &MazeViewConfig, width: f32, height: f32) -> Self {
        let rows = config.row_count;
        let cols = config.column_count;

        let (div_c, div_r) = if config.coordinates_enabled {
            (cols + 2, rows + 2)
        } else {
            (cols, rows)
        };
        let cell_size = (width / div_c as f32)
            .min(height / div_r as f32)
            .floor()
            .max(0.0);

        let padding_h = (width - cell_size * cols as f32) / 2.0;
        let padding_v = (height - cell_size * rows as f32) / 2.0;
        debug!("cell size {cell_size}px, padding {padding_h}x{padding_v}");

        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            // row 0 sits at the bottom of the viewport
            let top = padding_v + cell_size * (rows - 1 - row) as f32;
            for col in 0..cols {
                let left = padding_h + cell_size * col as f32;
                cells.push(CellRect {
                    min: Point2::new(left, top),
                    max: Point2::new(left + cell_size, top + cell_size),
                });
            }
        }

        Self {
            rows,
            cols,
            cell_size,
            padding_h,
            padding_v,
            width,
            height,
            cells,
        }
    }

    pub fn size_changed(&self, width: f32, height: f32) -> bool {
        self.width != width || self.height != height
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn cells(&self) -> &[CellRect] {
        &self.cells
    }

    pub fn rect(&self, index: usize) -> CellRect {
        self.cells[index]
    }

    /// Pixel y of the bottom edge of the bottom row.
    pub fn grid_bottom(&self) -> f32 {
        self.padding_v + self.cell_size * self.rows as f32
    }

    pub fn index_of(&self, grid_x: usize, grid_y: usize) -> usize {
        grid_y * self.cols + grid_x
    }

    /// Maps a pointer position back into grid coordinates, with grid y
    /// measured upward from the bottom row. Positions outside the grid
    /// return `None`.
    pub fn grid_at(&self, px: f32, py: f32) -> Option<(usize, usize)> {
        let x = ((px - self.padding_h) / self.cell_size).floor();
        let y = ((self.grid_bottom() - py) / self.cell_size).floor();

        if x < 0.0 || x >= self.cols as f32 || y < 0.0 || y >= self.rows as f32 {
            return None;
        }

        Some((x as usize, y as usize))
    }

    /// Center point of the robot indicator over `index`.
    ///
    /// An even diameter cannot be centered on a single cell, so the center
    /// leans to the cell's bottom-left-adjacent corner point instead of the
    /// geometric center. Odd diameters use the true cell center.
    pub fn indicator_center(&self, index: usize, diameter_cells: usize) -> Point2<f32> {
        let rect = self.cells[index];
        if diameter_cells % 2 == 0 {
            let reach = self.cell_size * (diameter_cells / 2) as f32;
            Point2::new(rect.min.x + reach, rect.max.y - reach)
        } else {
            rect.center()
        }
    }

    /// Radius of the robot indicator circle in pixels.
    pub fn robot_radius(&self, config: &MazeViewConfig) -> f32 {
        (self.cell_size * config.robot_diameter_cells as f32 / 2.0) * config.entity_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(rows: usize, cols: usize) -> MazeViewConfig {
        MazeViewConfig {
            row_count: rows,
            column_count: cols,
            ..Default::default()
        }
    }

    #[test]
    fn square_viewport_has_no_padding() {
        let layout = CellLayout::compute(&config(10, 10), 500.0, 500.0);

        assert_eq!(layout.cell_size(), 50.0);
        assert_eq!(layout.cells().len(), 100);

        // index 0 is the bottom-left cell
        let first = layout.rect(0);
        assert_eq!(first.min, Point2::new(0.0, 450.0));
        assert_eq!(first.max, Point2::new(50.0, 500.0));

        // last index is the top-right cell
        let last = layout.rect(99);
        assert_eq!(last.min, Point2::new(450.0, 0.0));
        assert_eq!(last.max, Point2::new(500.0, 50.0));
    }

    #[test]
    fn leftover_space_becomes_symmetric_padding() {
        let layout = CellLayout::compute(&config(10, 10), 640.0, 480.0);

        assert_eq!(layout.cell_size(), 48.0);
        let first = layout.rect(0);
        assert_eq!(first.min.x, 80.0);
        assert_eq!(first.max.y, 480.0);
        assert_eq!(layout.grid_bottom(), 480.0);
    }

    #[test]
    fn cells_tile_the_grid_without_overlap() {
        let layout = CellLayout::compute(&config(3, 4), 400.0, 300.0);
        assert_eq!(layout.cells().len(), 12);

        for y in 0..3 {
            for x in 0..4 {
                let rect = layout.rect(layout.index_of(x, y));
                assert_eq!(rect.width(), layout.cell_size());
                assert_eq!(rect.height(), layout.cell_size());
                // neighbors share edges exactly
                if x > 0 {
                    let left = layout.rect(layout.index_of(x - 1, y));
                    assert_eq!(left.max.x, rect.min.x);
                    assert_eq!(left.min.y, rect.min.y);
                }
                if y > 0 {
                    let below = layout.rect(layout.index_of(x, y - 1));
                    assert_eq!(rect.max.y, below.min.y);
                }
            }
        }
    }

    #[test]
    fn hit_test_inverts_the_layout() {
        let layout = CellLayout::compute(&config(10, 10), 640.0, 480.0);

        for y in 0..10 {
            for x in 0..10 {
                let center = layout.rect(layout.index_of(x, y)).center();
                assert_eq!(layout.grid_at(center.x, center.y), Some((x, y)));
            }
        }
    }

    #[test]
    fn touches_outside_the_grid_are_rejected() {
        let layout = CellLayout::compute(&config(10, 10), 640.0, 480.0);

        // left of the grid, in the horizontal padding
        assert_eq!(layout.grid_at(79.0, 240.0), None);
        // right of the grid
        assert_eq!(layout.grid_at(561.0, 240.0), None);
        // below the bottom edge
        assert_eq!(layout.grid_at(320.0, 481.0), None);
    }

    #[test]
    fn touched_cell_maps_to_the_expected_maze_index() {
        // 10x10 grid: visual column 1, row 8 (from the bottom) is index 81
        let layout = CellLayout::compute(&config(10, 10), 500.0, 500.0);
        let center = layout.rect(81).center();
        let (x, y) = layout.grid_at(center.x, center.y).unwrap();
        assert_eq!((x, y), (1, 8));
        assert_eq!(layout.index_of(x, y), 81);
    }

    #[test]
    fn coordinate_labels_reserve_a_margin_cell_on_every_side() {
        let with_labels = MazeViewConfig {
            coordinates_enabled: true,
            ..config(10, 10)
        };
        let layout = CellLayout::compute(&with_labels, 600.0, 600.0);

        assert_eq!(layout.cell_size(), 50.0);
        // the margin is at least one cell wide
        assert_eq!(layout.rect(0).min.x, 50.0);
        assert_eq!(layout.grid_bottom(), 550.0);
    }

    #[test]
    fn odd_diameter_indicator_sits_at_the_cell_center() {
        let layout = CellLayout::compute(&config(10, 10), 500.0, 500.0);
        assert_eq!(layout.indicator_center(0, 1), Point2::new(25.0, 475.0));
    }

    #[test]
    fn even_diameter_indicator_leans_to_the_bottom_left() {
        let layout = CellLayout::compute(&config(10, 10), 500.0, 500.0);
        let rect = layout.rect(0);
        assert_eq!(
            layout.indicator_center(0, 2),
            Point2::new(rect.min.x + 50.0, rect.max.y - 50.0)
        );
    }

    #[test]
    fn robot_radius_scales_with_diameter_and_entity_scale() {
        let mut cfg = config(10, 10);
        cfg.robot_diameter_cells = 2;
        cfg.entity_scale = 0.5;
        let layout = CellLayout::compute(&cfg, 500.0, 500.0);
        assert_eq!(layout.robot_radius(&cfg), 25.0);
    }

    #[test]
    fn recompute_only_when_the_viewport_changes() {
        let layout = CellLayout::compute(&config(10, 10), 500.0, 500.0);
        assert!(!layout.size_changed(500.0, 500.0));
        assert!(layout.size_changed(500.0, 400.0));

        let same = CellLayout::compute(&config(10, 10), 500.0, 500.0);
        assert_eq!(layout, same);
    }
}
