use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use tick::core::config::{self, CompletedStyle, TickConfig};
use tick::tui;

#[derive(Parser)]
#[command(name = "tick", about = "Keyboard-first checklist editor")]
struct Args {
    /// Items to start with (replaces `initial_items` from the config file)
    items: Vec<String>,

    /// How completed items are drawn
    #[arg(short, long, value_enum)]
    style: Option<CompletedStyle>,

    /// Where to write the debug log
    #[arg(long, default_value = "tick.log")]
    log_file: PathBuf,

    /// Skip ~/.tick/config.toml and use built-in defaults
    #[arg(long)]
    no_config: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // File logger; stdout belongs to the terminal UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = if args.no_config {
        TickConfig::default()
    } else {
        config::load_config().unwrap_or_else(|e| {
            log::warn!("Config error, using defaults: {}", e);
            TickConfig::default()
        })
    };
    let resolved = config::resolve(&file_config, args.style, &args.items);

    log::info!(
        "tick starting up with {} items, style {:?}",
        resolved.initial_items.len(),
        resolved.completed_style
    );

    tui::run(resolved)
}
