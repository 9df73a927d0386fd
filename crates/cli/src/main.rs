//! Marquee binary: load the page document and hand it to the TUI player.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

/// A scroll-animated landing page for the terminal.
#[derive(Debug, Parser)]
#[command(name = "marquee", version, about)]
struct Cli {
    /// Path to a page YAML document. Falls back to $MARQUEE_PAGE, then
    /// the user config directory, then the built-in page.
    #[arg(long, short = 'p', value_name = "FILE")]
    page: Option<PathBuf>,

    /// Skip animation curves and jump straight to end values.
    /// $MARQUEE_REDUCED_MOTION=1 has the same effect.
    #[arg(long)]
    reduced_motion: bool,

    /// Force the workflow animation to loop, overriding the page document.
    #[arg(long = "loop", overrides_with = "no_loop")]
    loop_workflow: bool,

    /// Force the workflow animation to play once, overriding the page
    /// document.
    #[arg(long = "no-loop")]
    no_loop: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut page = marquee_util::load_page(cli.page.as_deref()).context("failed to load page document")?;
    if let Some(workflow) = page.workflow.as_mut() {
        if cli.loop_workflow {
            workflow.loop_enabled = true;
        } else if cli.no_loop {
            workflow.loop_enabled = false;
        }
    }

    let reduced_motion = cli.reduced_motion || marquee_util::reduced_motion_requested();
    debug!(title = %page.title, reduced_motion, "starting page player");
    marquee_tui::run(page, reduced_motion).await
}

/// The TUI owns the terminal, so logs stay quiet unless RUST_LOG opts in.
fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
