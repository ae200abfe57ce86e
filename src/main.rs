use cliff_timer::{app::App, config::AppConfig, error, logging, Result};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}", error::user_friendly_message(&e));
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = AppConfig::load()?;
    if let Some(log_path) = logging::init_or_warn(&config) {
        tracing::info!(log_file = %log_path.display(), "Starting cliff-timer");
    }

    let mut app = App::new(config)?;
    app.init()?;
    app.run().await
}
