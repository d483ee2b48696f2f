mod app;
mod config;
mod input;
mod models;
mod tracker;
mod ui;
mod util;

use anyhow::Result;
use app::App;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use models::catalog::Playthrough;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::panic;
use std::path::PathBuf;
use tracker::{CanTracker, SkinTracker};
use util::progress_store::{JsonFileStore, WriteMode};

#[derive(Parser, Debug)]
#[command(name = "sbtrack", about = "Stellar Blade can and outfit checklist", version)]
struct Cli {
    /// Directory holding can_progress.json, skin_progress.json and full_skin_list.json
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Color theme: default, dracula, gruvbox, nord
    #[arg(short = 't', long)]
    theme: Option<String>,

    /// Print collected counts for cans and every skin context, then exit
    #[arg(long)]
    summary: bool,

    /// Print collected counts as JSON, then exit
    #[arg(long)]
    json: bool,

    /// Print config file path and current values, then exit
    #[arg(long)]
    config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    util::logging::init();

    let mut cfg = config::Config::load();
    if let Some(dir) = cli.dir {
        cfg.storage.data_dir = dir;
    }

    if cli.config {
        return run_print_config(&cfg);
    }
    if cli.summary {
        return run_summary(&cfg);
    }
    if cli.json {
        return run_json(&cfg);
    }

    let theme_name = match cli.theme {
        Some(t) => t,
        None => {
            let saved = util::user_state::UserState::load().theme_name;
            if saved.is_empty() { cfg.ui.theme.clone() } else { saved }
        }
    };
    let initial_theme = ui::theme::ThemeVariant::from_name(&theme_name);

    // Open the can store before touching the terminal so a corrupt file
    // is reported on a normal screen.
    let mut app = App::new(cfg, initial_theme)?;

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let result = run(&mut app);
    restore_terminal()?;
    if let Err(e) = &result {
        log::error!("session ended: {:#}", e);
    }
    result
}

// ── One-shot modes ────────────────────────────────────────────────────

/// (character, playthrough label, "n / total") for every catalog context.
fn skin_summaries(cfg: &config::Config) -> Result<Vec<(String, &'static str, String)>> {
    let store = JsonFileStore::new(cfg.storage.skin_progress_path(), WriteMode::Merge);
    let mut skins = SkinTracker::open(&cfg.storage.skin_catalog_path(), store)?;
    let characters: Vec<String> =
        skins.catalog().characters().iter().map(|c| c.to_string()).collect();

    let mut out = Vec::new();
    for character in characters {
        for pt in Playthrough::ALL {
            skins.on_load_catalog(&character, pt)?;
            if !skins.list().is_empty() {
                out.push((character.clone(), pt.label(), skins.summary()));
            }
        }
    }
    Ok(out)
}

fn open_cans(cfg: &config::Config) -> Result<CanTracker<JsonFileStore>> {
    let store = JsonFileStore::new(cfg.storage.can_progress_path(), WriteMode::Overwrite);
    CanTracker::open(store)
}

fn run_summary(cfg: &config::Config) -> Result<()> {
    let cans = open_cans(cfg)?;
    println!("Cans   {} collected", cans.summary());

    for (character, playthrough, summary) in skin_summaries(cfg)? {
        println!("Skins  {:<6} {:<18} {} collected", character, playthrough, summary);
    }
    Ok(())
}

fn run_json(cfg: &config::Config) -> Result<()> {
    use serde_json::{json, Value};

    let cans = open_cans(cfg)?;
    let list = cans.list();
    let missing: Vec<&str> = (0..list.len())
        .filter(|&i| !list.is_collected(i))
        .filter_map(|i| list.item(i).map(|s| s.as_str()))
        .collect();

    let skins: Vec<Value> = skin_summaries(cfg)?
        .into_iter()
        .map(|(character, playthrough, summary)| json!({
            "character":   character,
            "playthrough": playthrough,
            "collected":   summary,
        }))
        .collect();

    let snapshot = json!({
        "timestamp": chrono::Local::now().to_rfc3339(),
        "cans": {
            "collected": list.collected(),
            "total":     list.len(),
            "missing":   missing,
        },
        "skins": skins,
    });

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn run_print_config(cfg: &config::Config) -> Result<()> {
    let path = config::Config::config_path()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(unknown)".to_string());
    let s = &cfg.storage;
    println!("Config: {}", path);
    println!();
    println!("[storage]");
    println!("  data_dir           = {}", s.data_dir.display());
    println!("  can_progress_file  = {}  → {}", s.can_progress_file, s.can_progress_path().display());
    println!("  skin_progress_file = {}  → {}", s.skin_progress_file, s.skin_progress_path().display());
    println!("  skin_catalog_file  = {}  → {}", s.skin_catalog_file, s.skin_catalog_path().display());
    println!();
    println!("[ui]");
    println!("  theme = {}", cfg.ui.theme);
    println!();
    let log = util::logging::log_path()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(disabled)".to_string());
    println!("Log: {}", log);
    Ok(())
}

// ── TUI ───────────────────────────────────────────────────────────────

fn run(app: &mut App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut term = Terminal::new(backend)?;

    app.run(&mut term)?;

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}
