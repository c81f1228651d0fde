//! Theme constants for the Gomoku GUI

use egui::Color32;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(222, 184, 135);
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 40, 20);
pub const STAR_POINT: Color32 = Color32::from_rgb(50, 35, 20);

// Human plays black, the computer white
pub const HUMAN_STONE: Color32 = Color32::from_rgb(25, 25, 30);
pub const HUMAN_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const COMPUTER_STONE: Color32 = Color32::from_rgb(250, 250, 252);
pub const COMPUTER_STONE_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(20, 20, 20, 80)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

// Panel text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Thinking timer
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 40.0;
pub const STONE_RADIUS_RATIO: f32 = 0.45;
pub const STAR_POINT_RADIUS: f32 = 4.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;

/// Star points for a board of side `size`: corners three in from the edge
/// plus the center, with edge midpoints on boards of 13 and up.
pub fn star_points(size: usize) -> Vec<(u8, u8)> {
    if size < 9 {
        let c = (size / 2) as u8;
        return vec![(c, c)];
    }
    let lo = 3u8;
    let mid = (size / 2) as u8;
    let hi = (size - 4) as u8;
    let coords: &[u8] = if size >= 13 { &[lo, mid, hi] } else { &[lo, hi] };

    let mut points: Vec<(u8, u8)> = coords
        .iter()
        .flat_map(|&x| coords.iter().map(move |&y| (x, y)))
        .collect();
    if size < 13 {
        points.push((mid, mid));
    }
    points
}
