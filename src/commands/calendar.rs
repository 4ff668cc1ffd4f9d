use super::util::{date_arg, event_line, instant_arg, slot_label};
use super::{CommandContext, CommandResult};
use kalenteri::components::calendar::{TimeUnit, ViewKind};

/// Print the agenda of a view window
pub fn show(ctx: &CommandContext, view: Option<ViewKind>, date: Option<&str>) -> CommandResult {
    let view = view.unwrap_or(ctx.config.views.default_view);
    let window = view.window(date_arg(date)?);
    let engine = ctx.engine(window)?;

    println!(
        "{} view from {} for {}",
        view,
        window.anchor(),
        engine.user().email
    );

    let mut empty = true;
    for slot in engine.agenda()? {
        if let Some(event) = &slot.event {
            println!("{}  {}", slot_label(&slot.start), event_line(event));
            empty = false;
        }
    }

    if empty {
        println!("No events");
    }
    Ok(())
}

/// Print every event starting on a date
pub fn day(ctx: &CommandContext, date: Option<&str>) -> CommandResult {
    let date = date_arg(date)?;
    let events = ctx.lookup_engine()?.events_on_date(date)?;

    println!("Events on {}", date);
    if events.is_empty() {
        println!("No events");
    }
    for event in &events {
        println!("{}", event_line(event));
    }
    Ok(())
}

/// Print the events in progress at an instant
pub fn now(ctx: &CommandContext, at: Option<&str>) -> CommandResult {
    let at = instant_arg(at)?;
    let engine = ctx.lookup_engine()?;

    if !engine.is_any_in_progress(&at)? {
        println!("Nothing in progress at {}", slot_label(&at));
        return Ok(());
    }

    println!("In progress at {}", slot_label(&at));
    for event in engine.current_events(&at)? {
        println!("{}", event_line(&event));
    }
    Ok(())
}

/// Print the first event starting in the slot containing an instant
pub fn slot(ctx: &CommandContext, at: Option<&str>, unit: Option<TimeUnit>) -> CommandResult {
    let at = instant_arg(at)?;
    let unit = unit.unwrap_or(ctx.config.views.granularity);

    match ctx.lookup_engine()?.first_event_for_interval(&at, unit)? {
        Some(event) => println!("{}", event_line(&event)),
        None => println!("No event starts in the {:?} slot of {}", unit, slot_label(&at)),
    }
    Ok(())
}
