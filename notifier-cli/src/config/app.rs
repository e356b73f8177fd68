use config::{Config, Environment, File, FileFormat};
use scenarios::Scenario;
use serde::Deserialize;
use validator::Validate;

use crate::error::AppError;

const DEFAULT_CONFIG: &str = include_str!("../../resources/config/default.toml");
const DEFAULT_CONFIG_PREFIX: &str = "APP";
const LIST_SEPARATOR: &str = ",";

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct AppConfig {
    /// Runs every scenario when unset.
    pub scenario: Option<Scenario>,
    #[validate(length(min = 1))]
    pub log_level: String,
    #[validate(length(min = 1))]
    pub subject_state: String,
    #[validate(length(min = 1))]
    pub observer_names: Vec<String>,
    pub mouse_names: Vec<String>,
}

impl AppConfig {
    pub fn new() -> Result<Self, AppError> {
        let config: AppConfig = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(
                Environment::with_prefix(DEFAULT_CONFIG_PREFIX)
                    .try_parsing(true)
                    .list_separator(LIST_SEPARATOR)
                    .with_list_parse_key("observer_names")
                    .with_list_parse_key("mouse_names"),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }
}
