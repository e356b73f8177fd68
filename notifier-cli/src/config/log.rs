use env_logger::Env;

use crate::error::AppError;

/// Installs the global logger. `RUST_LOG` takes precedence over `default_level`.
pub fn init(default_level: &str) -> Result<(), AppError> {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).try_init()?;
    Ok(())
}
