use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::{GameMode, MIN_MAX_GAMES};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(default_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub mode: GameMode,
    /// Games per session; the mode's default when absent.
    #[serde(default)]
    pub max_games: Option<u32>,
    /// Seed for the computer's random moves.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Config {
    pub fn effective_max_games(&self) -> u32 {
        self.max_games
            .unwrap_or_else(|| self.mode.default_max_games())
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if let Some(max_games) = self.max_games
            && max_games < MIN_MAX_GAMES
        {
            return Err(format!("max_games must be at least {}", MIN_MAX_GAMES));
        }
        Ok(())
    }
}
