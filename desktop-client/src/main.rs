mod args;
mod config;
mod ui;

use clap::Parser;
use common::config::Validate;
use common::games::SessionRng;
use common::games::tictactoe::TicTacToeGame;
use common::{log, logger};
use eframe::egui;

use args::Args;
use config::get_config_manager;
use ui::TicTacToeApp;

const DEFAULT_WINDOW_SIZE: f32 = 520.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("tictactoe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config.clone());
    let stored_config = match config_manager.get_config() {
        Ok(config) => config,
        Err(e) => {
            log!("Failed to load config, using defaults: {}", e);
            Default::default()
        }
    };
    let config = args.apply_to(stored_config);
    config.validate()?;

    let rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "Starting {:?} session, max games {}, seed {}",
        config.mode,
        config.effective_max_games(),
        rng.seed()
    );

    let game = TicTacToeGame::new(config.mode, config.effective_max_games(), rng);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([DEFAULT_WINDOW_SIZE, DEFAULT_WINDOW_SIZE])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(|_cc| Ok(Box::new(TicTacToeApp::new(game, config, config_manager)))),
    )?;

    log!("Window closed");
    Ok(())
}
