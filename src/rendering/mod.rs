use macroquad::prelude::*;
use crate::application::TileMap;
use crate::domain::Material;

pub const PANEL_WIDTH: f32 = 180.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Largest square cell size that fits the map into the area left of the panel
pub fn cell_size(map: &TileMap) -> f32 {
    let (w, h) = map.renderable_region();
    if w == 0 || h == 0 {
        return 0.0;
    }
    let fit_x = panel_x() / w as f32;
    let fit_y = screen_height() / h as f32;
    fit_x.min(fit_y).max(1.0)
}

fn material_color(material: Option<Material>) -> Color {
    match material {
        Some(Material::Ground) => Color::from_rgba(70, 160, 60, 255),
        Some(Material::Water) => Color::from_rgba(30, 90, 190, 255),
        None => Color::from_rgba(15, 15, 15, 255),
    }
}

fn material_label(map: &TileMap, material: Material) -> String {
    format!("{}: {}", material.tile_name(), map.count(material))
}

/// Draw every renderable tile of the map
pub fn draw_tiles(map: &TileMap) {
    let size = cell_size(map);
    let (w, h) = map.renderable_region();
    let draw_lines = size >= 6.0;
    let line_color = Color::from_rgba(20, 20, 20, 255);

    for y in 0..h {
        for x in 0..w {
            let (sx, sy) = (x as f32 * size, y as f32 * size);
            draw_rectangle(sx, sy, size, size, material_color(map.tile(x, y)));
            if draw_lines {
                draw_rectangle_lines(sx, sy, size, size, 1.0, line_color);
            }
        }
    }
}

/// Draw the side panel with map statistics and a status line
pub fn draw_panel(map: &TileMap, status: &str) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    let (w, h) = map.renderable_region();
    let labels = [
        ("Controls:".to_string(), 20.0, 14.0, WHITE),
        ("R: Regenerate".to_string(), 35.0, 12.0, GRAY),
        ("Esc: Stop".to_string(), 48.0, 12.0, GRAY),
        (format!("Tiles: {}x{}", w, h), 80.0, 12.0, GRAY),
        (material_label(map, Material::Ground), 95.0, 12.0, GREEN),
        (material_label(map, Material::Water), 110.0, 12.0, SKYBLUE),
        (format!("Placements: {}", map.placements()), 125.0, 12.0, GRAY),
        ("Status:".to_string(), 160.0, 16.0, WHITE),
        (status.to_string(), 180.0, 14.0, Color::from_rgba(255, 165, 0, 255)),
        (format!("FPS: {}", get_fps()), 210.0, 12.0, GRAY),
    ];

    labels.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px + 8.0, *y, *size, *color);
    });
}
