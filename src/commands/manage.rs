use super::util::event_line;
use super::{CommandContext, CommandResult};
use kalenteri::components::calendar::EventId;
use kalenteri::components::import::{import_events, IcsReader};
use kalenteri::error::Error;
use std::path::Path;

/// Add an event by hand
pub fn add(ctx: &CommandContext, name: &str, start: &str, end: &str) -> CommandResult {
    let event = ctx.lookup_engine()?.add_event(name, start, end)?;
    println!("Added {}", event_line(&event));
    Ok(())
}

/// Import every event of an `.ics` file
pub fn import(ctx: &CommandContext, path: &Path) -> CommandResult {
    let engine = ctx.lookup_engine()?;
    let reader = IcsReader::from_path(path)?;
    let report = import_events(ctx.store.as_ref(), engine.user(), &reader)?;

    println!(
        "Imported {} events from {} ({} skipped)",
        report.imported,
        path.display(),
        report.skipped
    );
    Ok(())
}

/// Delete one event
pub fn delete(ctx: &CommandContext, id: u64) -> CommandResult {
    if !ctx.lookup_engine()?.delete_event(EventId(id))? {
        return Err(Error::Other(format!("No event #{} in your calendar", id)).into());
    }
    println!("Deleted #{}", id);
    Ok(())
}

/// Delete all of the user's events
pub fn clear(ctx: &CommandContext) -> CommandResult {
    let engine = ctx.lookup_engine()?;
    engine.clear_all_events()?;
    println!("Cleared all events for {}", engine.user().email);
    Ok(())
}
