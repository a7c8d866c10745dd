//! In-memory integration tests for the playback queue.

use std::sync::Arc;

use domicile::{
    config::AdapterConfig,
    media_queue::{
        adapters::memory::InMemoryQueueSource, domain::RawQueueResponse,
        services::MediaQueueService,
    },
};
use mockable::DefaultClock;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn decoded_payload_is_formatted_and_cached() -> Result<(), eyre::Report> {
    let source = Arc::new(InMemoryQueueSource::new());
    let payload: RawQueueResponse = serde_json::from_value(json!({
        "queue": [
            {
                "album": {"images": [{"url": "https://img/1"}]},
                "artists": [{"id": "a", "name": "First", "type": "artist"}],
                "href": "https://api/tracks/1",
                "id": "1",
                "name": "Opening",
                "type": "track",
                "duration_ms": 1000
            },
            {"name": "Bare", "artists": []}
        ]
    }))?;
    source.set_response(Some(payload))?;
    let service =
        MediaQueueService::new(Arc::clone(&source), &AdapterConfig::default(), Arc::new(DefaultClock));

    let refreshed = service.refresh().await?;

    assert_eq!(refreshed.len(), 2);
    let opening = refreshed.first().ok_or_else(|| eyre::eyre!("missing item"))?;
    assert_eq!(opening.image.as_deref(), Some("https://img/1"));
    assert_eq!(opening.duration_ms, Some(1000));
    let bare = refreshed.get(1).ok_or_else(|| eyre::eyre!("missing item"))?;
    assert_eq!(bare.media_creators, None);
    assert_eq!(bare.image, None);

    source.set_response(None)?;
    assert_eq!(service.queue(), refreshed);
    assert!(service.refresh().await?.is_empty());
    assert!(service.queue().is_empty());
    Ok(())
}
