use config::ConfigError;
use log::SetLoggerError;
use notifier::NotifyError;
use scenarios::Scenario;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid configuration values: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("Unable to initialize logger: {0}")]
    Logger(#[from] SetLoggerError),
    #[error("Scenario {scenario} failed: {source}")]
    Scenario {
        scenario: Scenario,
        #[source]
        source: NotifyError,
    },
}
