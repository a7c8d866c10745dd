//! Then steps for to-do list BDD scenarios.

use super::world::TodoListWorld;
use domicile::todo::{
    domain::TodoItemStatus,
    ports::TasksApiError,
    services::TodoListError,
};
use rstest_bdd_macros::then;

#[then(r#"the list shows "{expected}""#)]
fn list_shows(world: &TodoListWorld, expected: String) -> Result<(), eyre::Report> {
    let summaries: Vec<String> = world
        .items()?
        .into_iter()
        .map(|item| item.summary)
        .collect();
    let wanted: Vec<&str> = expected.split(", ").collect();
    if summaries != wanted {
        return Err(eyre::eyre!("expected {wanted:?}, found {summaries:?}"));
    }
    Ok(())
}

#[then(r#"the item "{summary}" is completed"#)]
fn item_is_completed(world: &TodoListWorld, summary: String) -> Result<(), eyre::Report> {
    let item = world
        .items()?
        .into_iter()
        .find(|item| item.summary == summary)
        .ok_or_else(|| eyre::eyre!("no item titled '{summary}'"))?;
    if item.status != Some(TodoItemStatus::Completed) {
        return Err(eyre::eyre!("expected completed, found {:?}", item.status));
    }
    Ok(())
}

#[then("the operation fails with a transport error")]
fn operation_fails_with_transport(world: &TodoListWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;
    if !matches!(result, Err(TodoListError::Api(TasksApiError::Transport(_)))) {
        return Err(eyre::eyre!("expected transport error, got {result:?}"));
    }
    Ok(())
}
