//! When steps for to-do list BDD scenarios.

use super::world::{TodoListWorld, run_async};
use domicile::todo::domain::{TodoItem, TodoItemStatus};
use rstest_bdd_macros::when;

#[when(r#"an item "{summary}" is created"#)]
fn item_created(world: &mut TodoListWorld, summary: String) -> Result<(), eyre::Report> {
    let result = run_async(world.service()?.create_item(&TodoItem::new(summary)));
    world.last_result = Some(result);
    Ok(())
}

#[when(r#"the item "{summary}" is marked completed"#)]
fn item_marked_completed(world: &mut TodoListWorld, summary: String) -> Result<(), eyre::Report> {
    let uid = world.uid_of(&summary)?;
    let item = TodoItem::new(summary)
        .with_uid(uid.as_str())
        .with_status(TodoItemStatus::Completed);
    let result = run_async(world.service()?.update_item(&item));
    world.last_result = Some(result);
    Ok(())
}

#[when(r#"the item "{summary}" is moved after "{previous}""#)]
fn item_moved_after(
    world: &mut TodoListWorld,
    summary: String,
    previous: String,
) -> Result<(), eyre::Report> {
    let uid = world.uid_of(&summary)?;
    let previous_uid = world.uid_of(&previous)?;
    let result = run_async(world.service()?.move_item(&uid, Some(&previous_uid)));
    world.last_result = Some(result);
    Ok(())
}
