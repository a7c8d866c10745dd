//! In-memory integration tests for task-backed to-do lists.

use std::sync::Arc;

use super::helpers::{FixedClock, clock, tasks_api};
use chrono::{NaiveDate, Utc};
use domicile::{
    config::AdapterConfig,
    todo::{
        adapters::memory::InMemoryTasksApi,
        domain::{AgendaBucket, TaskId, TodoItem, TodoItemStatus, TodoListFeature},
        services::{TodoListService, discover_todo_lists},
    },
};
use rstest::rstest;

type Service = TodoListService<InMemoryTasksApi, FixedClock, Utc>;

async fn discover(api: &InMemoryTasksApi, clock: FixedClock) -> Result<Vec<Service>, eyre::Report> {
    let config = AdapterConfig {
        config_entry_id: "entry-1".to_owned(),
        ..AdapterConfig::default()
    };
    Ok(discover_todo_lists(Arc::new(api.clone()), &config, Arc::new(clock), &Utc).await?)
}

async fn personal_list(api: &InMemoryTasksApi, clock: FixedClock) -> Result<Service, eyre::Report> {
    discover(api, clock)
        .await?
        .into_iter()
        .find(|service| service.descriptor().task_list_id.as_str() == "personal")
        .ok_or_else(|| eyre::eyre!("personal list should be discovered"))
}

fn summaries(service: &Service) -> Result<Vec<String>, eyre::Report> {
    let items = service
        .todo_items()?
        .ok_or_else(|| eyre::eyre!("snapshot should exist"))?;
    Ok(items.into_iter().map(|item| item.summary).collect())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn discovered_lists_advertise_identity_and_features(
    tasks_api: InMemoryTasksApi,
    clock: FixedClock,
) -> Result<(), eyre::Report> {
    let services = discover(&tasks_api, clock).await?;

    let names: Vec<&str> = services
        .iter()
        .map(|service| service.descriptor().name.as_str())
        .collect();
    assert_eq!(names, vec!["Personal errands", "Work"]);
    let first = services.first().ok_or_else(|| eyre::eyre!("no lists"))?;
    assert_eq!(first.descriptor().unique_id, "entry-1-personal");
    assert!(first.supported_features().contains(&TodoListFeature::MoveItem));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_edit_cycle_round_trips_through_api(
    tasks_api: InMemoryTasksApi,
    clock: FixedClock,
) -> Result<(), eyre::Report> {
    let service = personal_list(&tasks_api, clock).await?;
    service.refresh().await?;
    assert_eq!(
        summaries(&service)?,
        vec!["Buy milk 2024/03/15", "File taxes", "Gym"]
    );

    let due = NaiveDate::from_ymd_opt(2024, 3, 12).ok_or_else(|| eyre::eyre!("bad date"))?;
    service
        .create_item(&TodoItem::new("Book dentist").with_due(due))
        .await?;
    service
        .move_item(&TaskId::from("gym"), None)
        .await?;
    service
        .update_item(
            &TodoItem::new("File taxes")
                .with_uid("tax")
                .with_status(TodoItemStatus::Completed),
        )
        .await?;
    service.delete_items(&[TaskId::from("milk")]).await?;

    assert_eq!(summaries(&service)?, vec!["Gym", "Book dentist", "File taxes"]);
    let items = service
        .todo_items()?
        .ok_or_else(|| eyre::eyre!("snapshot should exist"))?;
    let taxes = items
        .iter()
        .find(|item| item.summary == "File taxes")
        .ok_or_else(|| eyre::eyre!("taxes should be listed"))?;
    assert_eq!(taxes.status, Some(TodoItemStatus::Completed));
    assert_eq!(taxes.due, None);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn agenda_groups_items_around_clock_date(
    tasks_api: InMemoryTasksApi,
    clock: FixedClock,
) -> Result<(), eyre::Report> {
    let service = personal_list(&tasks_api, clock).await?;
    service.refresh().await?;

    let agenda = service
        .agenda()?
        .ok_or_else(|| eyre::eyre!("snapshot should exist"))?;

    let titles = |bucket: AgendaBucket| -> Vec<String> {
        agenda
            .bucket(bucket)
            .iter()
            .map(|item| item.summary.clone())
            .collect()
    };
    assert_eq!(titles(AgendaBucket::Overdue), vec!["File taxes"]);
    assert_eq!(titles(AgendaBucket::ThisWeek), vec!["Buy milk 2024/03/15"]);
    assert_eq!(titles(AgendaBucket::Unscheduled), vec!["Gym"]);
    Ok(())
}
