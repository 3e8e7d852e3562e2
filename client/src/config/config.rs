use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::TicTacToeSettings;
use common::log;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const CONFIG_FILE_NAME: &str = "cow_milk_config.yaml";

pub fn get_config_path() -> PathBuf {
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
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

/// Loads the config, writing the defaults to disk first when no file exists
/// yet so players have something to edit. A failed write is only logged.
pub fn load_or_create_config(path: Option<PathBuf>) -> Result<Config, String> {
    let path = path.unwrap_or_else(get_config_path);
    let manager = get_config_manager(Some(path.clone()));
    let config = manager.get_config()?;

    if !path.exists() {
        match manager.set_config(&config) {
            Ok(()) => log!("Default config written to {}", path.display()),
            Err(e) => log!("Could not write default config to {}: {}", path.display(), e),
        }
    }

    Ok(config)
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub tictactoe: TicTacToeSettings,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.tictactoe.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};
    use common::games::tictactoe::{FirstPlayerMode, Mark};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_cow_milk_client_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_file_layout() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(&file_path);
        provider
            .set_config_content(concat!(
                "tictactoe:\n",
                "  human_mark: Milk\n",
                "  first_player: Computer\n",
                "  thinking_delay_ms: 0\n",
            ))
            .unwrap();

        let manager = get_config_manager(Some(file_path.clone()));
        let config = manager.get_config().unwrap();
        assert_eq!(config.tictactoe.human_mark, Mark::Milk);
        assert_eq!(config.tictactoe.first_player, FirstPlayerMode::Computer);
        assert_eq!(config.tictactoe.thinking_delay_ms, 0);

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_missing_file_gives_default() {
        let manager = get_config_manager(Some(get_temp_file_path()));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let file_path = get_temp_file_path();
        assert!(!file_path.exists());

        let config = load_or_create_config(Some(file_path.clone())).unwrap();
        assert_eq!(config, Config::default());
        assert!(file_path.exists());

        let reloaded = get_config_manager(Some(file_path.clone())).get_config().unwrap();
        assert_eq!(reloaded, Config::default());

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_existing_file_is_left_alone() {
        let file_path = get_temp_file_path();
        let content = "tictactoe:\n  human_mark: Milk\n";
        FileContentConfigProvider::new(&file_path)
            .set_config_content(content)
            .unwrap();

        let config = load_or_create_config(Some(file_path.clone())).unwrap();
        assert_eq!(config.tictactoe.human_mark, Mark::Milk);
        assert_eq!(std::fs::read_to_string(&file_path).unwrap(), content);

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_manager_round_trip() {
        let file_path = get_temp_file_path();
        let config = Config {
            tictactoe: TicTacToeSettings {
                first_player: FirstPlayerMode::Random,
                thinking_delay_ms: 250,
                ..TicTacToeSettings::default()
            },
        };
        let manager = get_config_manager(Some(file_path.clone()));
        assert!(manager.set_config(&config).is_ok());
        assert_eq!(manager.get_config().unwrap(), config);

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(&file_path);
        provider
            .set_config_content("tictactoe:\n  human_mark: Empty\n")
            .unwrap();

        let manager = get_config_manager(Some(file_path.clone()));
        assert!(manager.get_config().is_err());

        let _ = std::fs::remove_file(&file_path);
    }
}
