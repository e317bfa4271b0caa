//! Integration tests for file-backed database initialization
//!
//! Covers automatic database creation, reopening an existing database and
//! persistence of created rows across pool restarts.

use fyyur_common::db::{init_database, NewVenue};
use fyyur_common::Repository;
use tempfile::TempDir;

#[tokio::test]
async fn test_database_creation_when_missing() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("nested").join("fyyur.db");

    assert!(!db_path.exists());

    let result = init_database(&db_path).await;
    assert!(result.is_ok(), "Database initialization failed: {:?}", result.err());

    assert!(db_path.exists(), "Database file was not created");
}

#[tokio::test]
async fn test_database_opens_existing() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("fyyur.db");

    let pool1 = init_database(&db_path).await;
    assert!(pool1.is_ok());
    drop(pool1);

    let pool2 = init_database(&db_path).await;
    assert!(pool2.is_ok(), "Failed to open existing database: {:?}", pool2.err());
}

#[tokio::test]
async fn test_rows_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("fyyur.db");

    let pool = init_database(&db_path).await.unwrap();
    let repo = Repository::new(pool.clone());
    let created = repo
        .create_venue(&NewVenue {
            name: "The Hop".to_string(),
            city: "SF".to_string(),
            state: "CA".to_string(),
            address: Some("1 Main St".to_string()),
            genres: vec!["Jazz".to_string()],
            ..Default::default()
        })
        .await
        .unwrap();
    pool.close().await;

    let repo = Repository::new(init_database(&db_path).await.unwrap());
    let loaded = repo
        .find_venue(created.id)
        .await
        .unwrap()
        .expect("venue persisted");

    assert_eq!(loaded.name, "The Hop");
    assert_eq!(loaded.genres, "[Jazz]");
}

#[tokio::test]
async fn test_foreign_keys_enabled_on_every_connection() {
    let dir = TempDir::new().unwrap();
    let pool = init_database(&dir.path().join("fyyur.db")).await.unwrap();

    // Several rounds so more than one pooled connection is exercised
    for _ in 0..5 {
        let enabled: i64 = sqlx::query_scalar("PRAGMA foreign_keys")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(enabled, 1);
    }
}
