//! Given steps for to-do list BDD scenarios.

use std::sync::Arc;

use super::world::{TodoListWorld, run_async};
use chrono::Utc;
use domicile::{
    config::AdapterConfig,
    todo::{adapters::memory::InMemoryTasksApi, domain::RawTask, services::discover_todo_lists},
};
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::given;

#[given(r#"a task list "{title}" with tasks "{first}" and "{second}""#)]
fn task_list_with_tasks(
    world: &mut TodoListWorld,
    title: String,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    let tasks = vec![
        RawTask::new(first.to_lowercase(), first, "00000000000000000000"),
        RawTask::new(second.to_lowercase(), second, "00000000000000000001"),
    ];
    world.api = InMemoryTasksApi::new().with_task_list(format!("{title}-id"), title, tasks);

    let services = run_async(discover_todo_lists(
        Arc::new(world.api.clone()),
        &AdapterConfig::default(),
        Arc::new(DefaultClock),
        &Utc,
    ))
    .wrap_err("discover task lists")?;
    let service = services
        .into_iter()
        .next()
        .ok_or_else(|| eyre::eyre!("expected one discovered list"))?;
    run_async(service.refresh()).wrap_err("initial refresh")?;
    world.service = Some(service);
    Ok(())
}

#[given("the tasks service is unavailable")]
fn tasks_service_unavailable(world: &mut TodoListWorld) {
    world.api.set_unavailable(true);
}
