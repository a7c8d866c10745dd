//! Shared test helpers for in-memory integration tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use domicile::todo::{adapters::memory::InMemoryTasksApi, domain::RawTask};
use mockable::Clock;
use rstest::fixture;

/// Clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Provides a clock frozen on Monday 2024-03-11 at noon UTC.
#[fixture]
pub fn clock() -> FixedClock {
    FixedClock(
        Utc.with_ymd_and_hms(2024, 3, 11, 12, 0, 0)
            .single()
            .unwrap_or_default(),
    )
}

/// Provides an API with a personal list and an empty work list.
#[fixture]
pub fn tasks_api() -> InMemoryTasksApi {
    InMemoryTasksApi::new()
        .with_task_list(
            "personal",
            "personal errands",
            vec![
                RawTask::new("milk", "Buy milk 2024/03/15", "00000000000000000000"),
                RawTask::new("tax", "File taxes", "00000000000000000001")
                    .with_due("2024-03-10T00:00:00.000Z"),
                RawTask::new("forms", "Collect forms", "00000000000000000000")
                    .with_parent("tax"),
                RawTask::new("gym", "Gym", "00000000000000000002").with_status("completed"),
            ],
        )
        .with_task_list("work", "work", Vec::new())
}
