//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardScene, BoardView};
use super::game_state::GameState;
use super::theme::*;
use crate::{Outcome, RuleSet, Side};

/// Main Gomoku application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, state: GameState) -> Self {
        Self {
            state,
            board_view: BoardView::default(),
            show_debug: true,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("Restart (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                    if ui.button("Undo (U)").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let size = self.state.game.board().size();
                    let rules = match self.state.game.rules() {
                        RuleSet::Freestyle => "Freestyle",
                        RuleSet::Renju => "Renju",
                    };
                    ui.label(format!("{size}x{size} - {rules}"));
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_timer_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if self.state.game.outcome().is_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Five in a row against the computer").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let human = self.state.game.to_move() == Side::Human;
            let (name, accent, text) = if human {
                ("YOU", HUMAN_STONE, TEXT_PRIMARY)
            } else {
                ("COMPUTER", COMPUTER_STONE, egui::Color32::from_rgb(30, 30, 35))
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    if human { "X" } else { "O" },
                    egui::FontId::proportional(24.0),
                    text,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));

                    let color = if self.state.is_ai_thinking() {
                        TIMER_WARNING
                    } else if self.state.game.outcome().is_over() {
                        WIN_HIGHLIGHT
                    } else {
                        TIMER_NORMAL
                    };
                    ui.label(RichText::new(self.state.status_text()).size(12.0).color(color));
                });
            });
        });
    }

    /// Render the thinking timer
    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("THINKING").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let color = if secs < 0.5 {
                    TIMER_NORMAL
                } else if secs < 2.0 {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("{secs:.2}s")).size(28.0).strong().color(color));
            } else {
                ui.label(RichText::new("-").size(24.0).color(TEXT_PRIMARY));
            }

            if let Some(result) = &self.state.last_ai_result {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last search: {}ms", result.time_ms))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Restart").clicked() {
                    self.state.reset();
                }
                ui.add_space(4.0);
                if ui.button("Undo").clicked() {
                    self.state.undo();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.game.history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render the last search statistics
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                let Some(result) = &self.state.last_ai_result else {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                    return;
                };

                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(format!("{:?}", result.search_type))
                                .size(11.0)
                                .strong()
                                .color(TIMER_NORMAL),
                        );
                        ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                            ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));
                            ui.label(
                                RichText::new(format!("{} candidates", result.candidates))
                                    .size(10.0)
                                    .color(TEXT_MUTED),
                            );
                        });
                    });
                });

                if let Some(pos) = result.best_move {
                    let col = (b'A' + pos.x) as char;
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("-> {}{}", col, pos.y + 1))
                            .size(12.0)
                            .strong()
                            .color(WIN_HIGHLIGHT),
                    );
                }
            });
    }

    /// Render game over card with a restart button
    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let headline = match self.state.game.outcome() {
            Outcome::HumanWin => "YOU WIN!",
            Outcome::ComputerWin => "COMPUTER WINS",
            Outcome::Draw => "DRAW",
            Outcome::InProgress => return,
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(12.0);
                    if ui.button(RichText::new("New Game").size(14.0).strong()).clicked() {
                        self.state.reset();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let scene = BoardScene {
                board: self.state.game.board(),
                rules: self.state.game.rules(),
                last_move: self.state.game.last_move(),
                winning_line: self.state.game.winning_line(),
                accepting_input: self.state.is_human_turn() && !self.state.is_ai_thinking(),
            };
            let clicked = self.board_view.show(ui, &scene);

            if let Some(pos) = clicked {
                self.state.try_place_stone(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();
        if self.state.is_ai_turn() && !self.state.is_ai_thinking() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
