mod common;

use std::sync::Arc;
use tempfile::TempDir;
use db_gateway::database::errors::{GatewayError, QueryError};
use db_gateway::database::structs::gateway_cell::GatewayCell;
use db_gateway::database::structs::query_params::QueryParams;
use db_gateway::database::structs::query_value::QueryValue;

#[tokio::test]
async fn test_gateway_connects_on_first_use() {
    let gateway = common::create_memory_gateway();
    assert!(!gateway.is_connected().await, "Gateway should not connect before first use");

    gateway.ping().await.unwrap();

    assert!(gateway.is_connected().await);
    assert_eq!(gateway.generation().await, 1);
}

#[tokio::test]
async fn test_insert_and_select_with_named_params() {
    let gateway = common::create_memory_gateway();
    common::create_users_table(&gateway).await;

    let insert = "INSERT INTO users (name, score, avatar) VALUES (:name, :score, :avatar)";
    let first = gateway
        .execute_query(insert, &QueryParams::new().with("name", "alice").with("score", 9.5).with("avatar", vec![1_u8, 2]))
        .await
        .unwrap();
    assert_eq!(first.rows_affected(), 1);
    assert_eq!(first.last_insert_id(), Some(1));

    gateway
        .execute_query(insert, &QueryParams::new().with(":name", "bob").with(":score", None::<f64>).with(":avatar", None::<Vec<u8>>))
        .await
        .unwrap();

    let result = gateway
        .execute_query("SELECT id, name, score FROM users WHERE name = :name OR id = :id ORDER BY id", &QueryParams::new().with("name", "bob").with("id", 1))
        .await
        .unwrap();

    assert_eq!(result.rows().len(), 2);
    let alice = result.fetch_one().unwrap();
    assert_eq!(alice.columns(), ["id", "name", "score"]);
    assert_eq!(alice.get("name"), Some(&QueryValue::Text(String::from("alice"))));
    assert_eq!(alice.get("score"), Some(&QueryValue::Float(9.5)));
    assert_eq!(result.rows()[1].get("score"), Some(&QueryValue::Null));
    assert_eq!(result.attempts(), 1);
}

#[tokio::test]
async fn test_rows_serialize_as_objects() {
    let gateway = common::create_memory_gateway();
    common::create_users_table(&gateway).await;
    gateway
        .execute_query("INSERT INTO users (name) VALUES (:name)", &QueryParams::new().with("name", "carol"))
        .await
        .unwrap();

    let result = gateway.execute_query("SELECT id, name FROM users", &QueryParams::new()).await.unwrap();
    let json = serde_json::to_string(result.rows()).unwrap();
    assert_eq!(json, r#"[{"id":1,"name":"carol"}]"#);
}

#[tokio::test]
async fn test_backslash_literal_does_not_hide_placeholders() {
    let gateway = common::create_memory_gateway();

    let result = gateway
        .execute_query(r"SELECT 'C:\' AS dir, :name AS n", &QueryParams::new().with("name", "x"))
        .await
        .unwrap();

    let row = result.fetch_one().unwrap();
    assert_eq!(row.get("dir"), Some(&QueryValue::Text(String::from(r"C:\"))));
    assert_eq!(row.get("n"), Some(&QueryValue::Text(String::from("x"))));
}

#[tokio::test]
async fn test_missing_param_is_reported() {
    let gateway = common::create_memory_gateway();

    match gateway.execute_query("SELECT :a, :b", &QueryParams::new().with("a", 1)).await {
        Err(GatewayError::Query { sql, source: QueryError::MissingParameter(name), .. }) => {
            assert_eq!(sql, "SELECT :a, :b");
            assert_eq!(name, "b");
        }
        other => panic!("unexpected: {:?}", other.map(|result| result.rows().len())),
    }
}

#[tokio::test]
async fn test_syntax_error_is_reported_without_retry() {
    let gateway = common::create_memory_gateway();

    let error = gateway.execute_query("SELEKT 1", &QueryParams::new()).await.unwrap_err();

    assert!(matches!(error, GatewayError::Query { source: QueryError::Driver(_), .. }));
    assert_eq!(gateway.generation().await, 1, "Fatal errors must not reconnect");
    assert!(gateway.is_connected().await);
}

#[tokio::test]
async fn test_prepare_and_execute_statement() {
    let gateway = common::create_memory_gateway();
    common::create_users_table(&gateway).await;

    let statement = gateway.prepare("INSERT INTO users (name) VALUES (:name)").await.unwrap();
    for name in ["dave", "erin"] {
        gateway.execute_statement(&statement, &QueryParams::new().with("name", name)).await.unwrap();
    }

    let count = gateway.prepare("SELECT COUNT(*) AS total FROM users").await.unwrap();
    let result = gateway.execute_statement(&count, &QueryParams::new()).await.unwrap();
    assert_eq!(result.fetch_one().and_then(|row| row.get("total")).and_then(QueryValue::as_i64), Some(2));
}

#[tokio::test]
async fn test_prepare_reports_syntax_errors() {
    let gateway = common::create_memory_gateway();
    assert!(gateway.prepare("SELECT FROM WHERE").await.is_err());
}

#[tokio::test]
async fn test_reconnect_invalidates_statements() {
    let dir = TempDir::new().unwrap();
    let gateway = common::create_file_gateway(&dir);
    common::create_users_table(&gateway).await;

    let statement = gateway.prepare("SELECT * FROM users").await.unwrap();
    assert_eq!(gateway.reconnect().await.unwrap(), 2);

    match gateway.execute_statement(&statement, &QueryParams::new()).await {
        Err(GatewayError::Query { source: QueryError::StaleStatement { prepared, current }, .. }) => {
            assert_eq!((prepared, current), (1, 2));
        }
        other => panic!("unexpected: {:?}", other.map(|result| result.rows().len())),
    }

    let fresh = gateway.prepare("SELECT * FROM users").await.unwrap();
    assert!(gateway.execute_statement(&fresh, &QueryParams::new()).await.is_ok());
}

#[tokio::test]
async fn test_close_keeps_gateway_usable() {
    let dir = TempDir::new().unwrap();
    let gateway = common::create_file_gateway(&dir);
    common::create_users_table(&gateway).await;

    gateway.close().await.unwrap();
    assert!(!gateway.is_connected().await);

    let result = gateway.execute_query("SELECT COUNT(*) FROM users", &QueryParams::new()).await.unwrap();
    assert_eq!(result.generation(), 2);
}

#[tokio::test]
async fn test_cell_shares_one_gateway() {
    let cell = GatewayCell::sqlx();
    cell.set_configuration(&common::sqlite_settings(":memory:"), None).unwrap();

    let first = cell.instance().unwrap();
    first
        .execute_query("CREATE TABLE t (v INTEGER)", &QueryParams::new())
        .await
        .unwrap();

    let second = cell.instance().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    // the in-memory table is only visible on the same connection
    let result = second.execute_query("SELECT COUNT(*) AS n FROM t", &QueryParams::new()).await.unwrap();
    assert_eq!(result.fetch_one().and_then(|row| row.get("n")).and_then(QueryValue::as_i64), Some(0));
}

#[tokio::test]
async fn test_concurrent_callers_are_serialized() {
    let gateway = common::create_memory_gateway();
    common::create_users_table(&gateway).await;

    let mut handles = Vec::new();
    for index in 0..8 {
        let gateway = gateway.clone();
        handles.push(tokio::spawn(async move {
            gateway
                .execute_query("INSERT INTO users (name) VALUES (:name)", &QueryParams::new().with("name", format!("user{index}")))
                .await
                .map(|result| result.rows_affected())
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), 1);
    }

    let result = gateway.execute_query("SELECT COUNT(*) AS n FROM users", &QueryParams::new()).await.unwrap();
    assert_eq!(result.fetch_one().and_then(|row| row.get("n")).and_then(QueryValue::as_i64), Some(8));
    assert_eq!(gateway.generation().await, 1);
}
