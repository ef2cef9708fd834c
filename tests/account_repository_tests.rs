//! Integration tests for the SQLite account repository
mod common;

use crate::common::create_test_repository;

use account_management_api::{
    db,
    error::AppError,
    models::account::AccountFields,
    repository::{AccountRepository, SqliteAccountRepository},
};

fn fields(name: &str, email: &str, phone: Option<&str>) -> AccountFields {
    AccountFields::new(name.to_string(), email.to_string(), phone.map(String::from)).unwrap()
}

#[tokio::test]
async fn test_create_then_get_returns_identical_record() {
    let repo = create_test_repository().await;

    let created = repo
        .create(&fields("John Doe", "john@example.com", Some("123-456-7890")))
        .await
        .unwrap();
    let fetched = repo.get(created.id).await.unwrap();

    assert_eq!(created, fetched);
    assert_eq!(fetched.name, "John Doe");
    assert_eq!(fetched.email, "john@example.com");
    assert_eq!(fetched.phone.as_deref(), Some("123-456-7890"));
    assert_eq!(fetched.created_at, fetched.updated_at);
}

#[tokio::test]
async fn test_create_duplicate_email_conflicts() {
    let repo = create_test_repository().await;
    repo.create(&fields("First", "dup@example.com", None))
        .await
        .unwrap();

    let result = repo.create(&fields("Second", "dup@example.com", None)).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_empty_store() {
    let repo = create_test_repository().await;

    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_orders_by_id() {
    let repo = create_test_repository().await;
    for i in 0..3 {
        repo.create(&fields("User", &format!("user{i}@example.com"), None))
            .await
            .unwrap();
    }

    let ids: Vec<i64> = repo.list().await.unwrap().iter().map(|a| a.id).collect();

    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids.len(), 3);
    assert_eq!(ids, sorted);
}

#[tokio::test]
async fn test_missing_id_is_not_found() {
    let repo = create_test_repository().await;
    let update = fields("Nobody", "nobody@example.com", None);

    assert!(matches!(repo.get(42).await, Err(AppError::NotFound)));
    assert!(matches!(repo.update(42, &update).await, Err(AppError::NotFound)));
    assert!(matches!(repo.delete(42).await, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_update_replaces_all_fields() {
    let repo = create_test_repository().await;
    let created = repo
        .create(&fields("John Doe", "john@example.com", Some("123")))
        .await
        .unwrap();

    let updated = repo
        .update(created.id, &fields("Jane Doe", "jane@example.com", None))
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Jane Doe");
    assert_eq!(updated.email, "jane@example.com");
    assert_eq!(updated.phone, None);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
    assert_eq!(repo.get(created.id).await.unwrap(), updated);
}

#[tokio::test]
async fn test_update_keeping_own_email_succeeds() {
    let repo = create_test_repository().await;
    let created = repo
        .create(&fields("John", "john@example.com", None))
        .await
        .unwrap();

    let updated = repo
        .update(created.id, &fields("Johnny", "john@example.com", None))
        .await
        .unwrap();

    assert_eq!(updated.name, "Johnny");
}

#[tokio::test]
async fn test_update_to_other_records_email_conflicts() {
    let repo = create_test_repository().await;
    repo.create(&fields("A", "a@example.com", None))
        .await
        .unwrap();
    let b = repo
        .create(&fields("B", "b@example.com", None))
        .await
        .unwrap();

    let result = repo.update(b.id, &fields("B", "a@example.com", None)).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(repo.get(b.id).await.unwrap(), b);
}

#[tokio::test]
async fn test_delete_twice() {
    let repo = create_test_repository().await;
    let created = repo
        .create(&fields("John", "john@example.com", None))
        .await
        .unwrap();

    repo.delete(created.id).await.unwrap();

    assert!(matches!(repo.delete(created.id).await, Err(AppError::NotFound)));
    assert!(matches!(repo.get(created.id).await, Err(AppError::NotFound)));
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_deleted_id_is_never_reused() {
    let repo = create_test_repository().await;
    let first = repo
        .create(&fields("First", "first@example.com", None))
        .await
        .unwrap();
    repo.delete(first.id).await.unwrap();

    let second = repo
        .create(&fields("Second", "second@example.com", None))
        .await
        .unwrap();

    assert!(second.id > first.id);
    assert!(repo.list().await.unwrap().iter().all(|a| a.id != first.id));
}

#[tokio::test]
async fn test_deleted_email_can_be_registered_again() {
    let repo = create_test_repository().await;
    let first = repo
        .create(&fields("First", "john@example.com", None))
        .await
        .unwrap();
    repo.delete(first.id).await.unwrap();

    assert!(
        repo.create(&fields("Again", "john@example.com", None))
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_concurrent_duplicate_creates_yield_one_success() {
    // File-backed so the pool really holds several connections
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("accounts.db").display());
    let pool = db::create_pool(&url, 5).await.unwrap();
    db::run_migrations(&pool).await.unwrap();
    let repo = SqliteAccountRepository::new(pool);

    let mut handles = Vec::new();
    for i in 0..8 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            repo.create(&fields(&format!("Racer {i}"), "race@example.com", None))
                .await
        }));
    }

    let mut successes = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successes += 1,
            Err(AppError::Conflict(_)) => conflicts += 1,
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(conflicts, 7);
    assert_eq!(repo.list().await.unwrap().len(), 1);
}
