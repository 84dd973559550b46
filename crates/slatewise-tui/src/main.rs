// Slatewise entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config, writing the defaults on first run
// 3. Load the slate document (an unreadable document yields an empty browser)
// 4. Build the browse session
// 5. Run the TUI until the user quits

use anyhow::Context;
use tracing::info;

use slatewise_core::browse::BrowseSession;
use slatewise_core::config;
use slatewise_core::data::DatasetLoader;
use slatewise_tui::tui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;
    info!("Slatewise starting up");

    let config = config::load_config().context("failed to load configuration")?;
    let base_dir = std::env::current_dir().context("failed to resolve working directory")?;
    let data_path = config.data_path(&base_dir);
    info!(
        "Config loaded: data={}, {} rows per page, gate={:?}",
        data_path.display(),
        config.table.rows_per_page,
        config.filters.player_gate
    );

    let loader = DatasetLoader::new(data_path);
    let dataset = loader.load();

    let session = BrowseSession::new(
        dataset,
        config.filters.player_gate,
        config.table.rows_per_page,
    );
    let stats = session.stats();
    info!(
        "Dataset ready: {} slates, {} unique players, {} operators",
        stats.total_slates, stats.total_players, stats.operators
    );

    tui::run(session).await?;

    info!("Slatewise shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (not the terminal, which is used by the TUI).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("slatewise.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("slatewise=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
