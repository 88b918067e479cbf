use serde::{Deserialize, Serialize};

use crate::games::tictactoe::{Difficulty, FirstPlayerMode, OpponentMode};
use crate::logger::LogSink;
use super::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};

pub const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

/// Config file next to the executable, falling back to the working directory.
pub fn default_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

impl GameConfig {
    pub fn manager(
        path: &str,
    ) -> ConfigManager<FileContentConfigProvider, GameConfig, YamlConfigSerializer> {
        ConfigManager::from_yaml_file(path)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub sink: LogSink,
    pub file: Option<String>,
    pub prefix: Option<String>,
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<(), String> {
        if self.sink == LogSink::File && self.file.as_deref().is_none_or(|f| f.trim().is_empty()) {
            return Err("Log sink 'file' requires a non-empty log file path".to_string());
        }
        Ok(())
    }
}

/// Presets for a game. `opponent` and `difficulty`, when set, answer the
/// matching menu questions up front.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub opponent: Option<OpponentMode>,
    pub difficulty: Option<Difficulty>,
    pub first_player: FirstPlayerMode,
    pub seed: Option<u64>,
    pub log: LogConfig,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.opponent == Some(OpponentMode::Human) && self.difficulty.is_some() {
            return Err("Difficulty only applies when playing against the computer".to_string());
        }
        self.log.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    fn sample_config() -> GameConfig {
        GameConfig {
            opponent: Some(OpponentMode::Computer),
            difficulty: Some(Difficulty::Optimal),
            first_player: FirstPlayerMode::O,
            seed: Some(2023),
            log: LogConfig {
                sink: LogSink::File,
                file: Some("tictactoe.log".to_string()),
                prefix: Some("TicTacToe".to_string()),
            },
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_survives_yaml_string() {
        let config = sample_config();
        let serializer = YamlConfigSerializer::new();

        let text = serializer.serialize(&config).unwrap();
        let parsed: GameConfig = serializer.deserialize(&text).unwrap();

        assert_eq!(config, parsed);
    }

    #[test]
    fn test_manager_saves_and_loads() {
        let config = sample_config();
        let file_path = get_temp_file_path();
        let manager = GameConfig::manager(&file_path);

        manager.set_config(&config).unwrap();
        let fresh = GameConfig::manager(&file_path);
        let loaded = fresh.get_config().unwrap();
        let again = fresh.get_config().unwrap();

        assert_eq!(config, loaded);
        assert_eq!(config, again);
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_missing_file_returns_default_config() {
        let manager = GameConfig::manager("this_file_does_not_exist.yaml");

        assert_eq!(manager.get_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let serializer = YamlConfigSerializer::new();

        let parsed: GameConfig = serializer.deserialize("difficulty: optimal\n").unwrap();

        assert_eq!(parsed.difficulty, Some(Difficulty::Optimal));
        assert_eq!(parsed.first_player, FirstPlayerMode::Random);
        assert_eq!(parsed.log.sink, LogSink::Stderr);
    }

    #[test]
    fn test_unknown_enum_value_cant_be_read() {
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider
            .set_config_content("first_player: z\n")
            .unwrap();

        let manager: ConfigManager<_, GameConfig, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());

        assert!(manager.get_config().is_err());
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_contradictory_config_is_rejected() {
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider
            .set_config_content("opponent: human\ndifficulty: random\n")
            .unwrap();

        let manager: ConfigManager<_, GameConfig, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());
        let result = manager.get_config();

        assert!(result.unwrap_err().contains("Config validation error"));
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_file_sink_without_path_is_invalid() {
        let config = GameConfig {
            log: LogConfig {
                sink: LogSink::File,
                file: None,
                prefix: None,
            },
            ..GameConfig::default()
        };
        let manager = GameConfig::manager(&get_temp_file_path());

        assert!(manager.set_config(&config).is_err());
    }
}
