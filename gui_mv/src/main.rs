mod colors;
mod drawing;
mod images;
mod view;

use crate::images::SpriteBank;
use crate::view::MazeView;
use core_mv::{MazeSnapshot, MazeViewConfig, Orientation, Tile, TileDecoder};
use eframe::egui;
use eframe::egui::{Align, Visuals};
use log::info;

const MAZE_ROWS: usize = 10;
const MAZE_COLS: usize = 10;

const UNEXPLORED: char = 'U';
const EXPLORED: char = 'E';
const SIX: char = '6';

fn main() -> eframe::Result {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Maze view demo starting up");

    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "Maze View",
        native_options,
        Box::new(|cc| Ok(Box::new(App::new(cc)))),
    )
}

/// The maze every fresh run starts from: all unexplored, a six marker in the
/// bottom-left corner and one explored cell for the robot to start on.
fn starting_maze() -> String {
    let mut maze = vec![UNEXPLORED; MAZE_ROWS * MAZE_COLS];
    maze[0] = SIX;
    maze[81] = EXPLORED;
    maze.into_iter().collect()
}

fn demo_decoder() -> TileDecoder {
    TileDecoder::from_iter([
        (
            UNEXPLORED,
            Tile::Solid {
                color: colors::UNEXPLORED_COLOR,
            },
        ),
        (
            EXPLORED,
            Tile::Solid {
                color: colors::EXPLORED_COLOR,
            },
        ),
        (
            SIX,
            Tile::Bitmap {
                image: images::GLYPH_SIX,
                background: colors::SOFT_BLACK,
            },
        ),
    ])
}

fn demo_config() -> MazeViewConfig {
    MazeViewConfig {
        row_count: MAZE_ROWS,
        column_count: MAZE_COLS,
        robot_color: colors::ROBOT_COLOR,
        border_color: colors::BORDER_COLOR,
        border_width: 2.0,
        coordinate_text_color: colors::COORDINATE_TEXT_COLOR,
        coordinates_enabled: true,
        orientation_glyph: images::GLYPH_POINTER,
        ..Default::default()
    }
}

/// One step counterclockwise, as seen by the viewer.
fn left_of(orientation: Orientation) -> Orientation {
    match orientation {
        Orientation::Front => Orientation::Left,
        Orientation::Back => Orientation::Right,
        Orientation::Left => Orientation::Back,
        Orientation::Right => Orientation::Front,
    }
}

/// One step clockwise, as seen by the viewer.
fn right_of(orientation: Orientation) -> Orientation {
    match orientation {
        Orientation::Front => Orientation::Right,
        Orientation::Back => Orientation::Left,
        Orientation::Left => Orientation::Front,
        Orientation::Right => Orientation::Back,
    }
}

/// Applies a released touch: explores the cell and returns the index the
/// robot should move to, unless the cell carries the six marker.
fn explore_cell(maze_view: &mut MazeView, grid_x: usize, grid_y: usize) -> Option<usize> {
    let index = grid_y * MAZE_COLS + grid_x;
    let mut maze: Vec<char> = maze_view.maze().chars().collect();

    if maze[index] == SIX {
        return None;
    }

    maze[index] = EXPLORED;
    let maze: String = maze.into_iter().collect();
    maze_view
        .set_maze(maze)
        .expect("edited maze still decodes");
    maze_view.set_robot_position(index, true);
    Some(index)
}

pub struct App {
    maze_view: MazeView,
    sprites: SpriteBank,
    last_touched: Option<(usize, usize)>,
}

impl App {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx
            .style_mut(|style| style.visuals = Visuals::dark());

        let mut maze_view = MazeView::new(demo_config()).expect("demo configuration is valid");
        maze_view.set_decoder(demo_decoder());

        // the decode table is back in place, so a persisted maze can be
        // restored verbatim
        let snapshot = cc
            .storage
            .and_then(|storage| eframe::get_value::<MazeSnapshot>(storage, eframe::APP_KEY));
        match snapshot {
            Some(snapshot) => maze_view
                .restore(snapshot)
                .expect("persisted maze decodes with the demo table"),
            None => {
                let maze = starting_maze();
                let robot = maze.find(EXPLORED).expect("starting maze has a robot cell");
                maze_view.set_maze(maze).expect("starting maze decodes");
                maze_view.set_robot_position(robot, false);
            }
        }

        Self {
            maze_view,
            sprites: SpriteBank::new(),
            last_touched: None,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::left_to_right(Align::Center), |ui| {
                    if ui.button("Turn left").clicked() {
                        let next = left_of(self.maze_view.robot_orientation());
                        self.maze_view.set_robot_orientation(next, true);
                    }
                    if ui.button("Turn right").clicked() {
                        let next = right_of(self.maze_view.robot_orientation());
                        self.maze_view.set_robot_orientation(next, true);
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                    ui.label(match self.last_touched {
                        None => String::new(),
                        Some((x, y)) => format!("Clicked coordinate ({x}, {y})"),
                    });
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let maze_response = self.maze_view.show(ui, &mut self.sprites);
            if let Some((x, y)) = maze_response.touched {
                info!("Clicked coordinate ({x}, {y})");
                self.last_touched = Some((x, y));
                explore_cell(&mut self.maze_view, x, y);
            }
        });

        // the pulsing ring never rests, keep the frames coming
        ctx.request_repaint();
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.maze_view.snapshot());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_view() -> MazeView {
        let mut maze_view = MazeView::new(demo_config()).unwrap();
        maze_view.set_decoder(demo_decoder());
        maze_view.set_maze(starting_maze()).unwrap();
        maze_view.set_robot_position(81, false);
        maze_view
    }

    #[test]
    fn starting_maze_has_the_expected_markers() {
        let maze = starting_maze();
        assert_eq!(maze.len(), 100);
        assert_eq!(maze.chars().next(), Some(SIX));
        assert_eq!(maze.chars().nth(81), Some(EXPLORED));
        assert_eq!(maze.chars().filter(|&c| c == UNEXPLORED).count(), 98);
    }

    #[test]
    fn touching_a_cell_explores_it_and_moves_the_robot() {
        let mut maze_view = demo_view();

        // grid (1, 8) is linear index 81 with row 0 at the bottom
        assert_eq!(explore_cell(&mut maze_view, 1, 8), Some(81));
        assert_eq!(maze_view.maze().chars().nth(81), Some(EXPLORED));
        assert_eq!(maze_view.robot_index(), 81);

        assert_eq!(explore_cell(&mut maze_view, 2, 3), Some(32));
        assert_eq!(maze_view.maze().chars().nth(32), Some(EXPLORED));
        assert_eq!(maze_view.robot_index(), 32);
    }

    #[test]
    fn the_six_marker_cell_is_left_alone() {
        let mut maze_view = demo_view();

        assert_eq!(explore_cell(&mut maze_view, 0, 0), None);
        assert_eq!(maze_view.maze().chars().next(), Some(SIX));
        assert_eq!(maze_view.robot_index(), 81);
    }

    #[test]
    fn turn_helpers_cycle_through_all_orientations() {
        let mut orientation = Orientation::Front;
        for _ in 0..4 {
            assert_eq!(right_of(left_of(orientation)), orientation);
            orientation = left_of(orientation);
        }
        assert_eq!(orientation, Orientation::Front);
    }
}
