use slot_bandits::config::AppConfig;
use slot_bandits::RunError;

use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), RunError> {
    let config = AppConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut simulation = config.simulation.build()?;
    simulation.run()?;

    let report = simulation.report();
    info!(
        id = %report.run_id,
        total_reward = report.total_reward,
        win_rate = report.win_rate,
        best = report.best_expected_reward,
        "Simulation finished"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
