use anyhow::Result;
use nusched_core::config::NuSchedConfig;
use owo_colors::OwoColorize;

pub fn run(config: &NuSchedConfig) -> Result<()> {
    let config_path = NuSchedConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:   {}", config_path.display());
    println!("  Output:   {}", config.output_path().display());
    match config.request_file() {
        Some(path) => println!("  Request:  {}", path.display()),
        None => println!("  Request:  {}", "(not set)".dimmed()),
    }

    println!();
    println!("{}", "Settings".bold());
    for line in config.to_toml()?.lines() {
        println!("  {}", line);
    }

    Ok(())
}
