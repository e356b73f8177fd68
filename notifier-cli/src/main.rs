use log::{debug, info};
use scenarios::{cat_cry, state_broadcast, Scenario, Transcript};
use strum::IntoEnumIterator;

use crate::{config::app::AppConfig, error::AppError};

mod config;
mod error;

fn main() -> anyhow::Result<()> {
    let app_config = AppConfig::new()?;
    crate::config::log::init(&app_config.log_level)?;
    debug!("Running with configuration: {:?}", app_config);

    for scenario in selected_scenarios(&app_config) {
        info!("Running scenario {scenario}");
        let transcript = run_scenario(scenario, &app_config)?;
        println!("== {scenario}");
        for line in transcript.lines() {
            println!("{line}");
        }
    }
    Ok(())
}

fn selected_scenarios(app_config: &AppConfig) -> Vec<Scenario> {
    match app_config.scenario {
        Some(scenario) => vec![scenario],
        None => Scenario::iter().collect(),
    }
}

fn run_scenario(scenario: Scenario, app_config: &AppConfig) -> Result<Transcript, AppError> {
    let transcript = Transcript::new();
    match scenario {
        Scenario::StateBroadcast => state_broadcast::run(
            &app_config.observer_names,
            &app_config.subject_state,
            &transcript,
        ),
        Scenario::CatCry => cat_cry::run(&app_config.mouse_names, &transcript),
    }
    .map_err(|source| AppError::Scenario { scenario, source })?;
    Ok(transcript)
}
