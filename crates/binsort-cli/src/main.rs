use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use log::{debug, info, warn};

use binsort_core::config::{Config, DisplayConfig};
use binsort_core::{
    demo, render_buckets, render_items, sort_with, BinsortError, Item, ItemList, Result, Scheme,
};

mod args;
use args::{Cli, Commands, ConfigAction, Shell};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose, cli.quiet);

    let base_dir = resolve_base_dir(cli.base_dir);
    debug!("Base directory: {}", base_dir.display());

    let result = match cli.command {
        Some(Commands::Demo { no_buckets }) => handle_demo(&base_dir, no_buckets),
        Some(Commands::Sort { file, no_buckets }) => handle_sort(&base_dir, &file, no_buckets),
        Some(Commands::Categories) => handle_categories(&base_dir),
        Some(Commands::Config { action }) => handle_config(action, &base_dir),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// RUST_LOG wins over the verbosity flags
fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "info"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "binsort", &mut io::stdout());
}

fn resolve_base_dir(cli_base: Option<PathBuf>) -> PathBuf {
    if let Some(base) = cli_base {
        return base;
    }

    if let Ok(base) = std::env::var("BINSORT_BASE") {
        return PathBuf::from(base);
    }

    dirs::home_dir()
        .map(|h| h.join(".binsort"))
        .unwrap_or_else(|| PathBuf::from(".binsort"))
}

fn handle_demo(base_dir: &Path, no_buckets: bool) -> Result<()> {
    // Demo data only makes sense with the candy categories
    let scheme = Scheme::builtin();
    let show_buckets = !no_buckets && demo_show_buckets(base_dir);

    run_sort(demo::mixed_candies(), &scheme, show_buckets)
}

/// The demo only reads display options, so a broken config falls back to defaults
fn demo_show_buckets(base_dir: &Path) -> bool {
    match Config::load(base_dir) {
        Ok(config) => config.display.show_buckets,
        Err(e) => {
            warn!("Ignoring config for demo: {}", e);
            DisplayConfig::default().show_buckets
        }
    }
}

fn handle_sort(base_dir: &Path, file: &Path, no_buckets: bool) -> Result<()> {
    let config = Config::load(base_dir)?;
    let items = ItemList::load(file)?.into_items();
    info!("Loaded {} items from {}", items.len(), file.display());

    let show_buckets = !no_buckets && config.display.show_buckets;
    run_sort(items, &config.scheme, show_buckets)
}

fn run_sort(items: Vec<Item>, scheme: &Scheme, show_buckets: bool) -> Result<()> {
    println!();
    println!("{}", "Mixed items (unordered):".cyan().bold());
    print!("{}", render_items(&items));

    let sorted = sort_with(items, scheme.order(), |buckets, order| {
        if show_buckets {
            println!();
            print!("{}", render_buckets(buckets, order, scheme.labels()));
        }
    })?;

    println!();
    println!("{}", "Sorted items (by category priority):".green().bold());
    if sorted.is_empty() {
        println!("   {}", "(nothing to sort)".dimmed());
    } else {
        print!("{}", render_items(&sorted));
    }
    println!();

    Ok(())
}

fn handle_categories(base_dir: &Path) -> Result<()> {
    let config = Config::load(base_dir)?;

    println!();
    for (index, (category, label)) in config.scheme.entries().enumerate() {
        println!("  {}. {} ({})", index + 1, category.cyan().bold(), label);
    }
    println!();

    Ok(())
}

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(base_dir)?;
            match config.get(&key) {
                Some(value) => {
                    println!("{}", value);
                }
                None => {
                    return Err(BinsortError::ConfigKeyNotFound { key });
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(base_dir)?;
            config.set(&key, &value)?;
            config.save(base_dir)?;
            println!("{} {} = {}", "Set:".green(), key, value);
        }
        ConfigAction::List => {
            let config = Config::load(base_dir)?;
            println!();
            for (key, value) in config.list() {
                println!("{} = {}", key.cyan(), value);
            }
            println!();
        }
        ConfigAction::Path => {
            let path = Config::path(base_dir);
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            let path = Config::init(base_dir)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
    }

    Ok(())
}
