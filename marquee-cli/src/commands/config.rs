use anyhow::Result;
use marquee_core::config::MarqueeConfig;
use marquee_core::marquee::Marquee;
use owo_colors::OwoColorize;

pub fn run(marquee: &Marquee) -> Result<()> {
    let config_path = MarqueeConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Events:  {}", marquee.display_events_path().display());

    println!();
    println!("{}", "Calendar".bold());
    match marquee.backend_url() {
        Some(url) => println!("  Source:      {}", url),
        None => println!("  Source:      local events file"),
    }
    println!("  Week start:  {}", marquee.week_start()?);

    Ok(())
}
