use colored::Colorize;

use crate::slides;

pub fn run() -> anyhow::Result<()> {
    let registry = slides::registry()?;
    let width = registry.len().to_string().len();

    for (index, entry) in registry.iter().enumerate() {
        let number = format!("{:>width$}", index + 1);
        let kind = if entry.has_scene() {
            "scene".green()
        } else {
            "overlay".yellow()
        };
        let token = crate::engine::location::format_token(index);
        println!(
            "{}  {:<20} {:<8} {}",
            number.bold(),
            entry.title,
            kind,
            token.dimmed()
        );
    }
    Ok(())
}
