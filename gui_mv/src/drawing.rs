//! Painting: maze tiles, coordinate labels and the robot overlay.

use crate::images::SpriteBank;
use core_mv::{CellLayout, CellRect, ImageId, MazeViewConfig, RobotRenderState, Tile};
use eframe::egui::emath::Rot2;
use eframe::egui::{
    Align2, Color32, FontId, Mesh, Painter, Pos2, Rect, Rounding, Shape, Stroke, Vec2,
};
use log::error;
use nalgebra::Point2;

pub(crate) struct PaintCtx<'a> {
    pub config: &'a MazeViewConfig,
    pub layout: &'a CellLayout,
    /// Screen offset of the widget's top-left corner; the layout works in
    /// widget-local pixels.
    pub origin: Vec2,
    pub painter: &'a Painter,
}

impl PaintCtx<'_> {
    fn to_screen(&self, p: Point2<f32>) -> Pos2 {
        Pos2::new(p.x, p.y) + self.origin
    }

    fn cell_rect(&self, rect: CellRect) -> Rect {
        Rect::from_min_max(self.to_screen(rect.min), self.to_screen(rect.max))
    }
}

fn uv_full() -> Rect {
    Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0))
}

/// Paints every decoded tile. Cells go index-ascending (bottom row first);
/// within one cell the order is fill, border, image, so borders are never
/// hidden by a neighbor's fill and images sit above both.
pub(crate) fn draw_tiles(ctx: &PaintCtx, tiles: &[Tile], images: &mut SpriteBank) {
    for (index, tile) in tiles.iter().enumerate() {
        let rect = ctx.cell_rect(ctx.layout.rect(index));
        match *tile {
            Tile::Solid { color } => bordered_rect(ctx, rect, color),
            Tile::Bitmap { image, background } => {
                bordered_rect(ctx, rect, background);
                draw_cell_image(ctx, rect, image, images);
            }
            Tile::Robot {
                robot_color,
                background,
            } => {
                // legacy robot-in-the-maze cell; the overlay supersedes this
                bordered_rect(ctx, rect, background);
                ctx.painter.circle_filled(
                    rect.center(),
                    (ctx.layout.cell_size() / 2.0) * ctx.config.entity_scale,
                    robot_color,
                );
            }
        }
    }
}

fn bordered_rect(ctx: &PaintCtx, rect: Rect, fill: Color32) {
    ctx.painter.rect(
        rect,
        Rounding::ZERO,
        fill,
        Stroke::new(ctx.config.border_width, ctx.config.border_color),
    );
}

fn draw_cell_image(ctx: &PaintCtx, cell: Rect, image: ImageId, images: &mut SpriteBank) {
    let size = ctx.layout.cell_size() * ctx.config.entity_scale;
    match images.load_and_scale(ctx.painter.ctx(), image, size.round() as u32) {
        Ok(texture) => {
            let rect = Rect::from_center_size(cell.center(), Vec2::splat(size));
            ctx.painter
                .image(texture.id(), rect, uv_full(), Color32::WHITE);
        }
        Err(e) => error!("tile image {image:?} unavailable: {e}"),
    }
}

/// Column numbers one cell below the bottom row and row numbers one cell left
/// of each row, in the margin the layout reserved for them.
pub(crate) fn draw_coordinates(ctx: &PaintCtx) {
    let cell = ctx.layout.cell_size();
    let font = FontId::proportional(cell * ctx.config.coordinate_text_scale);
    let color = ctx.config.coordinate_text_color;

    for col in 0..ctx.config.column_count {
        let rect = ctx.layout.rect(ctx.layout.index_of(col, 0));
        let center = rect.center();
        let pos = ctx.to_screen(Point2::new(center.x, rect.max.y + cell / 2.0));
        ctx.painter
            .text(pos, Align2::CENTER_CENTER, col.to_string(), font.clone(), color);
    }

    for row in 0..ctx.config.row_count {
        let rect = ctx.layout.rect(ctx.layout.index_of(0, row));
        let center = rect.center();
        let pos = ctx.to_screen(Point2::new(rect.min.x - cell / 2.0, center.y));
        ctx.painter
            .text(pos, Align2::CENTER_CENTER, row.to_string(), font.clone(), color);
    }
}

/// The robot overlay, always painted after every tile: filled circle, then
/// the pulsing ring, then the orientation glyph rotated about the same
/// center.
pub(crate) fn draw_robot(ctx: &PaintCtx, state: &RobotRenderState, images: &mut SpriteBank) {
    let center = ctx.to_screen(state.pos);
    let radius = ctx.layout.robot_radius(ctx.config);
    let color = ctx.config.robot_color;

    ctx.painter.circle_filled(center, radius, color);

    ctx.painter.circle_stroke(
        center,
        state.ring_radius,
        Stroke::new(
            ctx.config.ring_width,
            Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), state.ring_alpha),
        ),
    );

    let glyph_size = 2.0 * radius * ctx.config.indicator_scale;
    match images.load_and_scale(
        ctx.painter.ctx(),
        ctx.config.orientation_glyph,
        glyph_size.round() as u32,
    ) {
        Ok(texture) => {
            let rect = Rect::from_center_size(center, Vec2::splat(glyph_size));
            let mut mesh = Mesh::with_texture(texture.id());
            mesh.add_rect_with_uv(rect, uv_full(), Color32::WHITE);
            mesh.rotate(Rot2::from_angle(state.rotation_degrees.to_radians()), center);
            ctx.painter.add(Shape::mesh(mesh));
        }
        Err(e) => error!("orientation glyph unavailable: {e}"),
    }
}
