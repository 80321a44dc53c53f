//! Query tests against a real PostgreSQL instance
//!
//! Ignored by default; run with a disposable database:
//!
//! ```bash
//! OUTREACH_DATABASE_URL=postgresql://localhost/outreach_test \
//!     cargo test -p outreach-database -- --ignored
//! ```

use outreach_core::{Config, types::Event};
use outreach_database::{Database, EventQueries};

async fn test_database() -> Database {
    let mut config = Config::default();
    if let Ok(url) = std::env::var("OUTREACH_DATABASE_URL") {
        config.database.url = url;
    }

    let database = Database::new(&config)
        .await
        .expect("Failed to connect; is OUTREACH_DATABASE_URL set?");
    database.migrate().await.expect("Migration failed");
    database
}

fn sample_event(title: &str) -> Event {
    Event {
        title: title.to_string(),
        description: "desc".to_string(),
        date: "April 15, 2025".to_string(),
        time: "7:00 PM - 10:00 PM".to_string(),
        location: "Hall A".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
#[ignore = "requires PostgreSQL (set OUTREACH_DATABASE_URL)"]
async fn test_toggle_visible_twice_restores_event() {
    let database = test_database().await;
    let pool = database.pool();

    let created = EventQueries::insert(pool, &sample_event("Toggle involution"))
        .await
        .expect("insert failed");
    assert!(created.visible);

    let toggled = EventQueries::toggle_visible(pool, created.id)
        .await
        .expect("toggle failed")
        .expect("event vanished");
    assert!(!toggled.visible);

    let restored = EventQueries::toggle_visible(pool, created.id)
        .await
        .expect("toggle failed")
        .expect("event vanished");
    assert!(restored.visible);
    assert_eq!(restored.title, created.title);

    EventQueries::delete(pool, created.id)
        .await
        .expect("cleanup failed");
}

#[tokio::test]
#[ignore = "requires PostgreSQL (set OUTREACH_DATABASE_URL)"]
async fn test_update_touches_only_the_addressed_row() {
    let database = test_database().await;
    let pool = database.pool();

    let target = EventQueries::insert(pool, &sample_event("Update target"))
        .await
        .expect("insert failed");
    let bystander = EventQueries::insert(pool, &sample_event("Bystander"))
        .await
        .expect("insert failed");

    let mut changed = sample_event("Update target (renamed)");
    changed.location = "Hall B".to_string();
    let updated = EventQueries::update(pool, target.id, &changed)
        .await
        .expect("update failed")
        .expect("event vanished");
    assert_eq!(updated.title, "Update target (renamed)");
    assert_eq!(updated.location, "Hall B");

    let untouched = EventQueries::find_by_id(pool, bystander.id)
        .await
        .expect("lookup failed")
        .expect("event vanished");
    assert_eq!(untouched.title, "Bystander");
    assert_eq!(untouched.updated_at, bystander.updated_at);

    for id in [target.id, bystander.id] {
        EventQueries::delete(pool, id).await.expect("cleanup failed");
    }
}

#[tokio::test]
#[ignore = "requires PostgreSQL (set OUTREACH_DATABASE_URL)"]
async fn test_update_missing_id_returns_none() {
    let database = test_database().await;
    let pool = database.pool();

    let result = EventQueries::update(
        pool,
        uuid::Uuid::new_v4(),
        &sample_event("Nobody home"),
    )
    .await
    .expect("update failed");
    assert!(result.is_none());
}
