use egui::{Color32, Painter, Rect, Vec2, pos2, vec2};
use npuzzle_core::TileId;
use npuzzle_prefs::PlaceholderStyle;
use npuzzle_replay::{Frame, TileAtlas, TileVisual};

const FULL_UV: Rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));

/// Size of the tile number relative to the tile.
const PLACEHOLDER_TEXT_SCALE: f32 = 0.4;

/// Paints one frame of the replay into `area`.
///
/// Frame coordinates are in board units (`0..board_size`) and are scaled to
/// fit `area`.
pub(crate) fn paint_frame(
    painter: &Painter,
    area: Rect,
    board_size: f32,
    frame: &Frame,
    atlas: &TileAtlas<egui::TextureHandle>,
    style: &PlaceholderStyle,
) {
    let scale = area.width().min(area.height()) / board_size;

    match atlas.background() {
        Some(background) => painter.image(background.id(), area, FULL_UV, Color32::WHITE),
        None => painter.rect_filled(area, 0.0, Color32::BLACK),
    };

    for placement in &frame.tiles {
        let cell = placement.rect;
        let rect = Rect::from_min_size(
            area.min + vec2(cell.x, cell.y) * scale,
            Vec2::splat(cell.size * scale),
        );
        match atlas.get(placement.tile) {
            TileVisual::Texture(texture) => {
                painter.image(texture.id(), rect, FULL_UV, Color32::WHITE);
            }
            TileVisual::Placeholder => paint_placeholder(painter, rect, placement.tile, style, scale),
        }
    }
}

fn paint_placeholder(
    painter: &Painter,
    rect: Rect,
    tile: TileId,
    style: &PlaceholderStyle,
    scale: f32,
) {
    painter.rect_filled(rect, 0.0, rgb(style.fill));
    painter.rect_stroke(
        rect,
        0.0,
        egui::Stroke::new(style.outline_width * scale, rgb(style.outline)),
        egui::StrokeKind::Inside,
    );
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        tile.to_string(),
        egui::FontId::proportional(rect.height() * PLACEHOLDER_TEXT_SCALE),
        rgb(style.text),
    );
}

fn rgb([r, g, b]: [u8; 3]) -> Color32 {
    Color32::from_rgb(r, g, b)
}
