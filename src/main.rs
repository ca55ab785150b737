//! cargodham-deploy - Railway deployment guide for the CargoDham MCP server
//!
//! Usage: cargodham-deploy [--output-dir DIR] [--color WHEN] [--no-browser] [-v...]

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cargodham_deploy::domain::ports::{BrowserLauncher, NoBrowser};
use cargodham_deploy::infrastructure::{ConsolePrompter, SystemBrowser};
use cargodham_deploy::presentation::Cli;
use cargodham_deploy::ui::context::UiContext;
use cargodham_deploy::ui::views::guide::ConsoleGuideView;
use cargodham_deploy::{GuideOptions, GuideUseCase};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let ui = UiContext::new(cli.color);
    let prompter = ConsolePrompter::new(ui.interactive_input(), ui.color);
    let browser: Box<dyn BrowserLauncher> = if cli.no_browser {
        Box::new(NoBrowser)
    } else {
        Box::new(SystemBrowser::new())
    };
    let options = GuideOptions::default().with_output_dir(cli.output_dir.clone());

    let stdout = std::io::stdout();
    let view = ConsoleGuideView::new(stdout.lock(), ui);
    let outcome = GuideUseCase::new(prompter, browser.as_ref(), view).execute(&options)?;

    tracing::debug!(
        summary = %outcome.summary_path.display(),
        browser_opens = outcome.opened_urls.len(),
        "guide finished"
    );
    Ok(())
}

fn init_tracing(cli: &Cli) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.log_filter()));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .init();
}
