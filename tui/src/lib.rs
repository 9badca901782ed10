pub mod app;
pub mod app_event_sender;
pub mod input;
pub mod terminal;
pub mod widgets;

use anyhow::Result;
use deck_core::config::Config;

pub use app::{App, Focus};

/// Run the interactive editor until the user quits.
pub async fn run_interactive(config: &Config) -> Result<()> {
    app::run_app(config).await
}
