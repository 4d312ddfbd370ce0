use std::io::Write;

use colored::Colorize;
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "scenedeck=error";
    }
    match verbose {
        0 => "scenedeck=warn",
        1 => "scenedeck=debug",
        _ => "scenedeck=trace",
    }
}

pub fn init(verbose: u8, quiet: bool) {
    let env = Env::default().default_filter_or(default_filter(verbose, quiet));
    let mut builder = Builder::from_env(env);
    builder.filter_module("eframe", LevelFilter::Warn);
    builder.filter_module("egui", LevelFilter::Warn);
    builder.filter_module("naga", LevelFilter::Warn);
    builder.filter_module("wgpu", LevelFilter::Warn);

    builder.format(|buf, record| {
        let level = record.level().to_string();
        let level = match record.level() {
            log::Level::Trace => level.cyan(),
            log::Level::Debug => level.blue(),
            log::Level::Info => level.green(),
            log::Level::Warn => level.yellow(),
            log::Level::Error => level.red(),
        };
        let module_path = record.module_path().unwrap_or("<unknown>");
        writeln!(buf, "[{level}][{}] {}", module_path.dimmed(), record.args())
    });

    let _ = builder.try_init();
}
