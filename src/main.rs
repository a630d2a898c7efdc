use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use ritmo::cli::args::{Cli, Commands};
use ritmo::cli::commands;
use ritmo::config::{ColorSetting, Config, Paths};
use ritmo::error::RitmoError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), RitmoError> {
    let cli = Cli::parse();
    let paths = Paths::new()?;
    let config = Config::load_from_path(&paths.config_file)?;

    match config.general.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {}
    }

    let format = cli.output.unwrap_or(config.general.default_output);
    let now = chrono::Local::now();
    let today = now.date_naive();
    let week_starts_on = config.stats.week_starts_on.to_weekday();

    let mut store = ritmo::storage::open(&paths, config.storage.backend)?;

    let output = match cli.command {
        Commands::Add(args) => commands::add(
            store.as_mut(),
            &args,
            now.with_timezone(&chrono::Utc),
            format,
        )?,
        Commands::List(args) => commands::list(store.as_ref(), &args, today, format)?,
        Commands::Today => commands::today(store.as_ref(), today, week_starts_on, format)?,
        Commands::Show(args) => {
            commands::show(store.as_ref(), &args.habit, today, week_starts_on, format)?
        }
        Commands::Done(args) => commands::done(store.as_mut(), &args, today, format)?,
        Commands::Undone(args) => commands::undone(store.as_mut(), &args, today, format)?,
        Commands::Edit(args) => commands::edit(store.as_mut(), &args, format)?,
        Commands::Remove(args) => commands::remove(store.as_mut(), &args.habit, format)?,
        Commands::Stats(args) => commands::stats(
            store.as_ref(),
            args.command,
            today,
            week_starts_on,
            config.stats.heatmap_weeks,
            format,
        )?,
        Commands::Achievements => commands::achievements(store.as_ref(), today, format)?,
        Commands::Challenges => {
            commands::challenges(store.as_ref(), today, week_starts_on, format)?
        }
        Commands::Quote => commands::quote(today, format)?,
        Commands::Pick(args) => commands::pick(store.as_mut(), &args, today, format)?,
        Commands::Completions { shell } => commands::completions(&shell)?,
        Commands::Tui => {
            ritmo::tui::run(store.as_mut(), today, week_starts_on)?;
            String::new()
        }
    };

    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
