//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here; the calculation lives in BedtimeEstimator.

use better_rest::adapters::model::{FileSleepModel, FixedSleepModel, LinearSleepModel};
use better_rest::adapters::ui::FormScreen;
use better_rest::ports::{InputPort, SleepModelPort};
use better_rest::shared::config::{AppConfig, ModelChoice};
use better_rest::usecases::BedtimeEstimator;
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    // stderr keeps log lines out of the prompt output; default level stays quiet for the form
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config could not be loaded, using defaults");
        AppConfig::default()
    });

    // --- Model: bundled, file-backed (reloaded per calculation), or fixed stub ---
    let model: Arc<dyn SleepModelPort> = match cfg.model_choice() {
        ModelChoice::Linear => {
            let linear = LinearSleepModel::default();
            info!(coefficients = ?linear.coefficients(), "using bundled linear sleep model");
            Arc::new(linear)
        }
        ModelChoice::File(path) => {
            let file_model = FileSleepModel::new(path);
            info!(path = %file_model.path().display(), "using sleep model file");
            Arc::new(file_model)
        }
        ModelChoice::Fixed(duration) => {
            warn!(
                secs = duration.num_seconds(),
                "using fixed stub model; predictions ignore inputs"
            );
            Arc::new(FixedSleepModel::new(duration))
        }
    };

    let clock = cfg.clock_or_default();
    let estimator = Arc::new(BedtimeEstimator::new(model, clock));
    let initial = cfg.initial_inputs();
    info!(?clock, wake = %initial.wake_time, "form ready");

    better_rest::adapters::ui::init_ui();

    let input_port: Arc<dyn InputPort> = Arc::new(FormScreen::new(estimator, initial));

    // --- Run (form loop until Quit / Esc / Ctrl-C) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
