mod app;
mod config;
mod state_file;

use app::AppModel;
use clap::Parser;
use relm4::prelude::*;
use rondel::{IconGlyphResolver, RoundSelector, SelectorConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rondel-demo", version, about = "Circular item selector demo")]
struct Cli {
    /// Path to the config file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the default config file and exit
    #[arg(long)]
    write_config: bool,

    /// Wrap from the last item back to the first
    #[arg(long)]
    looped: bool,

    /// Hide the item labels
    #[arg(long)]
    no_labels: bool,

    /// Start at this item instead of the configured one
    #[arg(short, long)]
    index: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.write_config {
        let path = config::write_default_config()?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    let path = match &cli.config {
        Some(p) => p.clone(),
        None => config::config_path()?,
    };
    let cfg = config::load_or_default(path);

    let mut selector = RoundSelector::new(
        SelectorConfig {
            style: (&cfg.style).into(),
            looped: cfg.selector.looped || cli.looped,
            show_labels: cfg.selector.show_labels && !cli.no_labels,
        },
        Box::new(IconGlyphResolver::new()),
    );

    let items: Vec<_> = cfg.items.iter().map(config::ItemConfig::to_item).collect();
    let _ = selector.set_items(items);

    let start_index = cli.index.unwrap_or(cfg.selector.start_index);
    if let Err(e) = selector.set_current_index(start_index) {
        log::warn!("start index rejected: {e}");
    }

    // a persisted session wins over the configured starting point
    match state_file::load() {
        Ok(Some(saved)) => {
            if let Err(e) = selector.restore_state(saved) {
                log::warn!("persisted view state no longer fits: {e}");
            }
        }
        Ok(None) => {}
        Err(e) => log::warn!("failed to read persisted view state: {e}"),
    }

    let app = RelmApp::new("org.rondel.demo");
    app.run::<AppModel>(selector);
    Ok(())
}
