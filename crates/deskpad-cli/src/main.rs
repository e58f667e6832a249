mod cli;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use deskpad_core::AppConfig;
use deskpad_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("DESKPAD_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "deskpad", &mut std::io::stdout());
        }
        None => {
            let mut config = AppConfig::load();
            if cli.section.is_some() {
                config.start_section = cli.section;
            }
            let mut app = App::new(&config);
            app.run().await?;
        }
    }

    Ok(())
}
