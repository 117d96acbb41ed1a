use anyhow::Result;

use crate::render::Render;
use crate::source::EventSource;

pub async fn run(source: &EventSource, id: i64) -> Result<()> {
    let event = super::with_spinner(source, "Fetching release", source.event(id)).await?;

    println!("{}", event.render());

    Ok(())
}
