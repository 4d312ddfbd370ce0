use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> anyhow::Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
        ConfigCommands::Path => {
            println!("{}", Config::path()?.display());
            Ok(())
        }
    }
}

fn show() -> anyhow::Result<()> {
    let path = Config::path()?;
    let config = Config::load_or_default();
    let settings = config.engine_settings();
    let timings = settings.presentation.timings;

    println!("{} {}", "Config:".bold(), path.display().to_string().dimmed());
    println!();
    section("defaults");
    row("theme", &settings.theme);
    row(
        "start_slide",
        &config
            .start_slide()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "first".to_string()),
    );
    section("transition");
    row("fade_out_frames", &timings.fade_out_frames.to_string());
    row("fade_in_frames", &timings.fade_in_frames.to_string());
    section("input");
    row("swipe_threshold", &settings.swipe_threshold.to_string());
    section("chrome");
    row(
        "hint_delay_secs",
        &settings.presentation.hint_delay.as_secs_f32().to_string(),
    );
    section("clock");
    row("speed", &settings.speed.to_string());
    row("max_delta", &settings.max_delta.to_string());
    println!();
    row(
        "seed",
        &settings
            .presentation
            .seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "random".to_string()),
    );
    Ok(())
}

fn set(key: &str, value: &str) -> anyhow::Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    println!(
        "{} {} = {} ({})",
        "Set".green().bold(),
        key,
        value.bold(),
        path.display().to_string().dimmed()
    );
    Ok(())
}

fn section(name: &str) {
    println!("{}", format!("{name}:").cyan());
}

fn row(key: &str, value: &str) {
    println!("  {key}: {value}");
}
