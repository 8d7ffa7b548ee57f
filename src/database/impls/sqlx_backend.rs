use std::io;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::debug;
use sqlx::any::{AnyConnectOptions, AnyRow};
use sqlx::{Any, Column, ConnectOptions, Connection, Either, Executor, Row};
use sqlx::query::Query;
use sqlx::any::AnyArguments;
use sqlx::AnyConnection;
use crate::config::structs::gateway_settings::GatewaySettings;
use crate::database::errors::{DriverError, DriverErrorKind};
use crate::database::structs::data_source_locator::DataSourceLocator;
use crate::database::structs::query_outcome::QueryOutcome;
use crate::database::structs::query_value::QueryValue;
use crate::database::structs::result_row::ResultRow;
use crate::database::structs::sqlx_backend::{SqlxBackend, SqlxSession};
use crate::database::traits::database_backend::DatabaseBackend;
use crate::database::traits::database_session::DatabaseSession;

impl Default for SqlxBackend {
    fn default() -> Self {
        SqlxBackend::from_settings(&GatewaySettings::default())
    }
}

impl SqlxBackend {
    pub fn new(connect_timeout: Duration, slow_statement_threshold: Duration) -> SqlxBackend {
        SqlxBackend { connect_timeout, slow_statement_threshold }
    }

    pub fn from_settings(settings: &GatewaySettings) -> SqlxBackend {
        SqlxBackend::new(settings.connect_timeout(), settings.slow_statement_threshold())
    }
}

#[async_trait]
impl DatabaseBackend for SqlxBackend {
    async fn connect(&self, locator: &DataSourceLocator) -> Result<Box<dyn DatabaseSession>, DriverError> {
        sqlx::any::install_default_drivers();

        let options = AnyConnectOptions::from_str(&locator.connection_url())?
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Warn, self.slow_statement_threshold);

        let conn = match tokio::time::timeout(self.connect_timeout, options.connect()).await {
            Ok(conn) => conn?,
            Err(_) => {
                return Err(DriverError::new(
                    DriverErrorKind::Io(io::ErrorKind::TimedOut),
                    None,
                    format!("timed out after {}s connecting to {}", self.connect_timeout.as_secs(), locator),
                ));
            }
        };
        debug!("[SQLX] Session opened on {}", locator);

        Ok(Box::new(SqlxSession { conn: Some(conn) }))
    }
}

impl SqlxSession {
    fn conn(&mut self) -> Result<&mut AnyConnection, DriverError> {
        self.conn
            .as_mut()
            .ok_or_else(|| DriverError::new(DriverErrorKind::Closed, None, "session already closed"))
    }
}

#[async_trait]
impl DatabaseSession for SqlxSession {
    async fn prepare(&mut self, sql: &str) -> Result<(), DriverError> {
        let conn = self.conn()?;
        conn.prepare(sql).await?;
        Ok(())
    }

    async fn execute(&mut self, sql: &str, values: &[QueryValue]) -> Result<QueryOutcome, DriverError> {
        let conn = self.conn()?;
        let query = values.iter().fold(sqlx::query::<Any>(sql), bind_value);

        let mut outcome = QueryOutcome::default();
        let mut columns: Option<Arc<[String]>> = None;
        let mut stream = conn.fetch_many(query);
        while let Some(item) = stream.try_next().await? {
            match item {
                Either::Left(result) => {
                    outcome.rows_affected += result.rows_affected();
                    if let Some(id) = result.last_insert_id() {
                        outcome.last_insert_id = Some(id);
                    }
                }
                Either::Right(row) => {
                    let columns = columns.get_or_insert_with(|| column_names(&row)).clone();
                    outcome.rows.push(decode_row(columns, &row));
                }
            }
        }

        Ok(outcome)
    }

    async fn ping(&mut self) -> Result<(), DriverError> {
        self.conn()?.ping().await?;
        Ok(())
    }

    async fn close(&mut self) -> Result<(), DriverError> {
        if let Some(conn) = self.conn.take() {
            conn.close().await?;
        }
        Ok(())
    }
}

fn bind_value<'q>(query: Query<'q, Any, AnyArguments<'q>>, value: &QueryValue) -> Query<'q, Any, AnyArguments<'q>> {
    match value {
        QueryValue::Null => query.bind(None::<String>),
        QueryValue::Bool(value) => query.bind(*value),
        QueryValue::Int(value) => query.bind(*value),
        QueryValue::Float(value) => query.bind(*value),
        QueryValue::Text(value) => query.bind(value.clone()),
        QueryValue::Bytes(value) => query.bind(value.clone()),
    }
}

fn column_names(row: &AnyRow) -> Arc<[String]> {
    row.columns().iter().map(|column| column.name().to_string()).collect()
}

fn decode_row(columns: Arc<[String]>, row: &AnyRow) -> ResultRow {
    let values = (0..columns.len()).map(|index| decode_value(row, index)).collect();
    ResultRow::new(columns, values)
}

// The Any driver exposes no public type tag, so decoding probes the supported types in turn.
fn decode_value(row: &AnyRow, index: usize) -> QueryValue {
    if let Ok(value) = row.try_get::<Option<i64>, _>(index) {
        return value.map_or(QueryValue::Null, QueryValue::Int);
    }
    if let Ok(value) = row.try_get::<Option<f64>, _>(index) {
        return value.map_or(QueryValue::Null, QueryValue::Float);
    }
    if let Ok(value) = row.try_get::<Option<String>, _>(index) {
        return value.map_or(QueryValue::Null, QueryValue::Text);
    }
    if let Ok(value) = row.try_get::<Option<Vec<u8>>, _>(index) {
        return value.map_or(QueryValue::Null, QueryValue::Bytes);
    }
    if let Ok(value) = row.try_get::<Option<bool>, _>(index) {
        return value.map_or(QueryValue::Null, QueryValue::Bool);
    }
    QueryValue::Null
}
