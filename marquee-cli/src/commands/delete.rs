use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::source::EventSource;

pub async fn run(source: &EventSource, id: i64, force: bool) -> Result<()> {
    let event = super::with_spinner(source, "Fetching release", source.event(id)).await?;

    println!("{}", event.render());

    // Confirm unless --force
    if !force {
        println!();
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete \"{}\"?", event.title))
            .default(false)
            .interact()?;

        if !confirmed {
            return Ok(());
        }
    }

    super::with_spinner(source, "Deleting release", source.delete(id)).await?;

    println!("{}", format!("  Deleted: {}", event.title).red());

    Ok(())
}
