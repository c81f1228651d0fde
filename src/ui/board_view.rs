//! Board rendering for the Gomoku GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::rules::{validate_move, RuleSet};
use crate::{Board, Pos, Side, Stone};

use super::theme::*;

/// What the board view needs to know to draw one frame
pub struct BoardScene<'a> {
    pub board: &'a Board,
    pub rules: RuleSet,
    pub last_move: Option<Pos>,
    pub winning_line: Option<[Pos; 5]>,
    /// Clicks and hover previews are only live on the human's turn
    pub accepting_input: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    /// Side length of the board last drawn
    size: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
            size: crate::BOARD_SIZE,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if it is a legal move
    pub fn show(&mut self, ui: &mut egui::Ui, scene: &BoardScene<'_>) -> Option<Pos> {
        let available_size = ui.available_size();
        self.size = scene.board.size();

        // Fit the board into the available space
        let board_px = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_px - 2.0 * BOARD_MARGIN) / (self.size as f32 - 1.0);

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_px, board_px), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, scene.board);

        if let Some(pos) = scene.last_move {
            self.draw_last_move_marker(&painter, pos);
        }
        if let Some(line) = scene.winning_line {
            self.draw_winning_line(&painter, &line);
        }

        if !scene.accepting_input {
            return None;
        }

        let pointer_pos = response.hover_pos()?;
        let board_pos = self.screen_to_board(pointer_pos)?;
        let is_valid = validate_move(scene.board, board_pos, Side::Human, scene.rules).is_ok();

        let hover_color = if is_valid {
            hover_valid()
        } else {
            hover_invalid()
        };
        self.draw_hover_preview(&painter, board_pos, hover_color);

        (response.clicked() && is_valid).then_some(board_pos)
    }

    /// Draw the grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = (self.size as f32 - 1.0) * self.cell_size;

        for i in 0..self.size {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw star points (hoshi)
    fn draw_star_points(&self, painter: &Painter) {
        for (x, y) in star_points(self.size) {
            let center = self.board_to_screen(Pos::new(x, y));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Draw coordinate labels: column letters, row numbers from the top
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for col in 0..self.size {
            let letter = (b'A' + col as u8) as char;
            let x = self.board_rect.min.x + BOARD_MARGIN + col as f32 * self.cell_size;

            let top = Pos2::new(x, self.board_rect.min.y + 12.0);
            painter.text(top, egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);

            let bottom = Pos2::new(x, self.board_rect.max.y - 12.0);
            painter.text(bottom, egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);
        }

        for row in 0..self.size {
            let label = format!("{}", row + 1);
            let y = self.board_rect.min.y + BOARD_MARGIN + row as f32 * self.cell_size;

            let left = Pos2::new(self.board_rect.min.x + 12.0, y);
            painter.text(left, egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);

            let right = Pos2::new(self.board_rect.max.x - 12.0, y);
            painter.text(right, egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);
        }
    }

    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for pos in board.stones() {
            self.draw_stone(painter, pos, board.get(pos));
        }
    }

    /// Draw a single stone with shadow and highlight
    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match stone {
            Stone::Human => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, HUMAN_STONE);

                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(
                    center + highlight_offset,
                    radius * 0.2,
                    HUMAN_STONE_HIGHLIGHT,
                );
            }
            Stone::Computer => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, COMPUTER_STONE);
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, COMPUTER_STONE_SHADOW),
                );
            }
            Stone::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 5]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
        for pos in line {
            painter.circle_stroke(self.board_to_screen(*pos), radius, stroke);
        }
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, color: Color32) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = ((relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size).floor() as i32;
        let y = ((relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size).floor() as i32;

        let size = self.size as i32;
        if (0..size).contains(&x) && (0..size).contains(&y) {
            Some(Pos::new(x as u8, y as u8))
        } else {
            None
        }
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.x as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.y as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(size: usize) -> BoardView {
        BoardView {
            cell_size: 20.0,
            board_rect: Rect::from_min_size(Pos2::ZERO, Vec2::splat(500.0)),
            size,
        }
    }

    #[test]
    fn test_screen_board_roundtrip() {
        let view = view(19);
        let pos = Pos::new(4, 11);
        let screen = view.board_to_screen(pos);
        assert_eq!(view.screen_to_board(screen), Some(pos));
        // Slightly off the intersection still snaps to it
        assert_eq!(view.screen_to_board(screen + Vec2::new(6.0, -6.0)), Some(pos));
    }

    #[test]
    fn test_outside_board() {
        let view = view(9);
        assert_eq!(view.screen_to_board(Pos2::new(0.0, 0.0)), None);
        let past_edge = view.board_to_screen(Pos::new(8, 8)) + Vec2::new(20.0, 0.0);
        assert_eq!(view.screen_to_board(past_edge), None);
    }
}
