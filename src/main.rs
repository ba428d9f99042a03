use anyhow::Context;
use privately::config::{self, AppConfig};
use tracing_subscriber::EnvFilter;

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("invalid log filter '{filter}': {err}; falling back to info");
        EnvFilter::new(config::DEFAULT_LOG_FILTER)
    });
    // A subscriber may already be installed by the platform launcher.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn main() -> anyhow::Result<()> {
    config::load_dotenv();

    let app_config = AppConfig::from_env().context("invalid configuration")?;
    init_tracing(&app_config.log_filter);
    tracing::info!(
        start_view = %app_config.start_view,
        reply_delay = ?app_config.reply_delay,
        "starting privately.max"
    );
    config::install(app_config)?;

    dioxus::launch(privately::ui::App);
    Ok(())
}
