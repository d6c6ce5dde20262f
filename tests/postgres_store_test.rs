mod common;

use palindrome_messages::store::{MessageStore, PostgresMessageStore, StoreConfig, StoreError};
use testcontainers::clients::Cli;

// Macro to set up test environment
// Note: This keeps _docker and _container alive for the duration of the test
macro_rules! setup_test {
    ($docker:ident, $container:ident, $store:ident) => {
        let $docker = Cli::default();
        let $container = $docker.run(common::create_postgres_container());

        let host_port = $container.get_host_port_ipv4(common::POSTGRES_PORT);
        let connection_string = common::build_connection_string("127.0.0.1", host_port);
        let $store = common::connect_with_retry(&connection_string).await;
        $store.ensure_schema().await.unwrap();
    };
}

#[tokio::test]
async fn test_connect_fails_for_unreachable_server() {
    let config = StoreConfig {
        host: "127.0.0.1".to_string(),
        port: 1,
        ..Default::default()
    };

    let err = PostgresMessageStore::connect(config).await.err().unwrap();
    assert!(matches!(err, StoreError::Connection(_)));
}

#[tokio::test]
async fn test_ensure_schema_is_idempotent() {
    setup_test!(_docker, _container, store);

    store.ensure_schema().await.expect("second schema creation failed");
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_insert_and_get() {
    setup_test!(_docker, _container, store);

    let saved = store.insert("abcba".to_string()).await.unwrap();
    assert!(saved.id > 0);
    assert_eq!(saved.body, "abcba");
    assert!(!saved.is_palindrome);

    let fetched = store.get(saved.id).await.unwrap();
    assert_eq!(fetched, saved);
}

#[tokio::test]
async fn test_list_returns_all_in_id_order() {
    setup_test!(_docker, _container, store);

    let first = store.insert("one".to_string()).await.unwrap();
    let second = store.insert("two".to_string()).await.unwrap();
    let third = store.insert("three".to_string()).await.unwrap();

    let all = store.list().await.unwrap();
    assert_eq!(all, vec![first, second, third]);
}

#[tokio::test]
async fn test_get_missing_is_not_found() {
    setup_test!(_docker, _container, store);

    let err = store.get(12345).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(12345)));

    let err = store.get(-1).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(-1)));
}

#[tokio::test]
async fn test_delete_then_delete_again() {
    setup_test!(_docker, _container, store);

    let saved = store.insert("temporary".to_string()).await.unwrap();

    store.delete(saved.id).await.expect("first delete failed");
    assert!(matches!(store.delete(saved.id).await.unwrap_err(), StoreError::NotFound(_)));
    assert!(matches!(store.get(saved.id).await.unwrap_err(), StoreError::NotFound(_)));
}

#[tokio::test]
async fn test_unicode_body_round_trips() {
    setup_test!(_docker, _container, store);

    let saved = store.insert("日本語 ✓".to_string()).await.unwrap();
    assert_eq!(store.get(saved.id).await.unwrap().body, "日本語 ✓");
}
