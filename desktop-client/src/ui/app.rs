use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};
use common::games::tictactoe::{
    ComputerMove, GameMode, GameOver, MIN_MAX_GAMES, Mark, Position, Scoreboard, TicTacToeGame,
};
use common::log;
use eframe::egui;

use crate::config::Config;
use super::board::{BoardView, cell_size_for, render_board};

const WINDOW_SCREEN_FRACTION: f32 = 0.6;
const CONTROLS_HEIGHT: f32 = 120.0;
const MAX_GAMES_LIMIT: u32 = 1000;

type AppConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

pub struct TicTacToeApp {
    game: TicTacToeGame,
    config: Config,
    config_manager: AppConfigManager,
    max_games_input: u32,
    window_sized: bool,
}

impl TicTacToeApp {
    pub fn new(game: TicTacToeGame, config: Config, config_manager: AppConfigManager) -> Self {
        let max_games_input = game.max_games();
        Self {
            game,
            config,
            config_manager,
            max_games_input,
            window_sized: false,
        }
    }

    fn size_window_to_screen(&mut self, ctx: &egui::Context) {
        if self.window_sized {
            return;
        }
        if let Some(monitor) = ctx.input(|i| i.viewport().monitor_size) {
            let side = monitor.y * WINDOW_SCREEN_FRACTION;
            ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(side, side)));
            self.window_sized = true;
        }
    }

    fn handle_cell_click(&mut self, position: Position) {
        let mark = match self.game.mode() {
            GameMode::OnePlayer => Mark::X,
            GameMode::TwoPlayer => self.game.current_mark(),
        };

        match self.game.apply_move(position, mark) {
            Ok(outcome) => {
                if let Some(reply) = outcome.computer_move {
                    log_computer_move(&reply);
                }
                if let Some(game_over) = self.game.game_over() {
                    log_game_over(game_over, self.game.mode());
                }
            }
            Err(e) => log!("Ignored click at ({}, {}): {}", position.row, position.col, e),
        }
    }

    fn reset_game(&mut self) {
        if let Some(opening) = self.game.reset() {
            log_computer_move(&opening);
        }
        log!("New game, {} to move", self.game.current_mark().symbol());
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        if ui.button("Reset").clicked() {
            self.reset_game();
        }

        ui.label(score_text(&displayed_scores(&self.game)));
        ui.label(turn_text(self.game.current_mark()));

        ui.horizontal(|ui| {
            ui.label("Max Games:");
            let response = ui.add(
                egui::DragValue::new(&mut self.max_games_input)
                    .range(MIN_MAX_GAMES..=MAX_GAMES_LIMIT)
                    .speed(0.1),
            );
            if response.changed() {
                self.game.set_max_games(self.max_games_input);
            }
        });
    }

    fn render_game_over_dialog(&mut self, ctx: &egui::Context) {
        let Some(game_over) = self.game.game_over() else {
            return;
        };
        let message = game_over.message(self.game.mode());

        let mut acknowledged = false;
        egui::Window::new("Game Over")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(message).size(20.0).strong());
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        acknowledged = true;
                    }
                });
            });

        if acknowledged {
            self.reset_game();
        }
    }

    fn save_config(&mut self) {
        self.config.max_games = Some(self.game.max_games());
        match self.config_manager.set_config(&self.config) {
            Ok(()) => log!("Config saved"),
            Err(e) => log!("Failed to save config: {}", e),
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.size_window_to_screen(ctx);

        if ctx.input(|i| i.viewport().close_requested()) {
            self.save_config();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size() - egui::vec2(0.0, CONTROLS_HEIGHT);
            let cell_size = cell_size_for(available);

            let view = BoardView {
                board: self.game.board(),
                winning_line: self.game.winning_line(),
                accepts_input: self.game.is_human_turn(),
            };

            let clicked = ui
                .vertical_centered(|ui| render_board(ui, &view, cell_size))
                .inner;
            if let Some(position) = clicked {
                self.handle_cell_click(position);
            }

            ui.separator();
            self.render_controls(ui);
        });

        self.render_game_over_dialog(ctx);
    }
}

pub fn score_text(scores: &Scoreboard) -> String {
    format!(
        "X: {} | O: {} | Ties: {} | Games Played: {}",
        scores.wins_x, scores.wins_o, scores.ties, scores.games_played
    )
}

/// The finished game's tally stays on screen until the Game Over window is
/// dismissed, even when the session has already rolled over.
fn displayed_scores(game: &TicTacToeGame) -> Scoreboard {
    match game.game_over() {
        Some(game_over) => game_over.scores,
        None => *game.scoreboard(),
    }
}

pub fn turn_text(mark: Mark) -> String {
    format!("Current Turn: {}", mark.symbol())
}

fn log_computer_move(reply: &ComputerMove) {
    log!(
        "Computer plays ({}, {}) [{:?}]",
        reply.position.row,
        reply.position.col,
        reply.reason
    );
}

fn log_game_over(game_over: &GameOver, mode: GameMode) {
    log!("{} ({})", game_over.message(mode), score_text(&game_over.scores));
    if game_over.session_rolled_over {
        log!("Session limit reached, scores reset");
    }
}
