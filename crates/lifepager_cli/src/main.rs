//! Terminal presentation shell.
//!
//! # Responsibility
//! - Load the biography document and render pages as plain text.
//! - Translate typed commands into core navigation intents.

mod input;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use input::{parse_command, Command, HELP};
use lifepager_core::{
    current_year, default_log_level, init_logging, parse_document, DirAssetSource, Document,
    DocumentLoad, Intent, Presenter,
};
use log::info;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "lifepager", version, about = "Browse a biography document in the terminal")]
struct Cli {
    /// Directory containing `profile.json`.
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Read this JSON file instead of the asset directory.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Timeline width in terminal columns.
    #[arg(long, default_value_t = 80)]
    width: u16,

    /// Year used as the end of ongoing timelines.
    #[arg(long)]
    year: Option<i32>,

    /// Page index to open first.
    #[arg(long, default_value_t = 0)]
    page: usize,

    /// Print the opening page and exit.
    #[arg(long)]
    once: bool,

    /// trace|debug|info|warn|error
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        let log_dir = log_dir
            .to_str()
            .context("log directory must be valid UTF-8")?;
        init_logging(level, log_dir).map_err(anyhow::Error::msg)?;
    }

    let document = load(&cli)?;
    let year = cli.year.unwrap_or_else(current_year);
    let mut width = f32::from(cli.width);
    let mut presenter = Presenter::new(document);
    presenter.apply(Intent::SwipeTo(cli.page));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render::render_screen(&presenter.render(width, year), &mut out)?;
    if cli.once {
        return Ok(());
    }

    writeln!(out, "{HELP}")?;
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read command")?;
        let command = parse_command(line.as_str(), presenter.current_page());
        match command {
            Some(Command::Intent(intent)) => {
                if !presenter.apply(intent) {
                    writeln!(out, "(nothing to do)")?;
                    continue;
                }
            }
            Some(Command::Resize(columns)) => width = f32::from(columns),
            Some(Command::Help) => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Some(Command::Quit) => break,
            None => {
                writeln!(out, "unknown command; type `h` for help")?;
                continue;
            }
        }
        render::render_screen(&presenter.render(width, year), &mut out)?;
    }
    Ok(())
}

fn load(cli: &Cli) -> Result<Document> {
    if let Some(file) = &cli.file {
        let bytes =
            std::fs::read(file).with_context(|| format!("failed to read {}", file.display()))?;
        return parse_document(&bytes)
            .with_context(|| format!("failed to parse {}", file.display()));
    }

    info!(
        "event=cli_start module=cli assets_dir={}",
        cli.assets.display()
    );
    let load = DocumentLoad::spawn(DirAssetSource::new(cli.assets.clone()));
    Ok(load.wait().unwrap_or_default())
}
