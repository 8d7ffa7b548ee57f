use std::fmt;
use std::sync::Arc;
use log::{debug, error, info, warn};
use tokio::sync::{MappedMutexGuard, Mutex, MutexGuard};
use crate::config::structs::gateway_config::GatewayConfig;
use crate::config::structs::gateway_settings::GatewaySettings;
use crate::database::enums::error_class::ErrorClass;
use crate::database::errors::{DriverError, DriverErrorKind, GatewayError, QueryError};
use crate::database::helpers::{bind_values, classify_driver_error, compile_named};
use crate::database::structs::data_source_locator::DataSourceLocator;
use crate::database::structs::database_gateway::{ConnectionState, DatabaseGateway};
use crate::database::structs::executed_statement::ExecutedStatement;
use crate::database::structs::prepared_statement::PreparedStatement;
use crate::database::structs::query_failure_report::QueryFailureReport;
use crate::database::structs::query_outcome::QueryOutcome;
use crate::database::structs::query_params::QueryParams;
use crate::database::structs::query_value::QueryValue;
use crate::database::structs::retry_policy::RetryPolicy;
use crate::database::structs::sqlx_backend::SqlxBackend;
use crate::database::traits::database_backend::DatabaseBackend;
use crate::database::traits::database_session::DatabaseSession;

/// Borrowed access to the live session. Holding it blocks every other gateway operation.
pub type SessionGuard<'a> = MappedMutexGuard<'a, dyn DatabaseSession>;

impl DatabaseGateway {
    /// Validates `config` and resolves its locator. No connection is opened until first use.
    pub fn new(config: GatewayConfig, backend: Arc<dyn DatabaseBackend>) -> Result<DatabaseGateway, GatewayError> {
        config.validate()?;
        let locator = DataSourceLocator::from_config(&config)?;
        Ok(DatabaseGateway {
            config: Arc::new(config),
            locator,
            backend,
            retry_policy: RetryPolicy::default(),
            state: Mutex::new(ConnectionState::default()),
        })
    }

    /// Gateway on the `sqlx` backend, timeouts and retry policy taken from `settings`.
    pub fn with_settings(config: GatewayConfig, settings: &GatewaySettings) -> Result<DatabaseGateway, GatewayError> {
        let retry_policy = settings.retry_policy()?;
        let backend = Arc::new(SqlxBackend::from_settings(settings));
        Ok(DatabaseGateway::new(config, backend)?.with_retry_policy(retry_policy))
    }

    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> DatabaseGateway {
        self.retry_policy = retry_policy;
        self
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn locator(&self) -> &DataSourceLocator {
        &self.locator
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry_policy
    }

    pub async fn is_connected(&self) -> bool {
        self.state.lock().await.session.is_some()
    }

    /// Number of sessions opened so far; statements remember the one they were prepared on.
    pub async fn generation(&self) -> u64 {
        self.state.lock().await.generation
    }

    /// The live session, opened on first call and reused afterwards.
    pub async fn connection(&self) -> Result<SessionGuard<'_>, GatewayError> {
        let mut state = self.state.lock().await;
        self.ensure_connected(&mut state).await?;
        MutexGuard::try_map(state, |state| state.session.as_deref_mut())
            .map_err(|_| GatewayError::Connection {
                locator: self.locator.dsn(),
                source: empty_slot(),
            })
    }

    pub async fn ping(&self) -> Result<(), GatewayError> {
        let mut session = self.connection().await?;
        session.ping().await.map_err(|source| GatewayError::Connection {
            locator: self.locator.dsn(),
            source,
        })
    }

    /// Drops the current session, if any, and opens a new one. Returns the new generation.
    pub async fn reconnect(&self) -> Result<u64, GatewayError> {
        let mut state = self.state.lock().await;
        Self::discard_session(&mut state).await;
        self.ensure_connected(&mut state).await?;
        Ok(state.generation)
    }

    /// Closes the session. The gateway stays usable; the next operation reconnects.
    pub async fn close(&self) -> Result<(), GatewayError> {
        let mut state = self.state.lock().await;
        if let Some(mut session) = state.session.take() {
            info!("[DbGateway] Closing connection #{} to {}", state.generation, self.locator);
            session.close().await.map_err(|source| GatewayError::Connection {
                locator: self.locator.dsn(),
                source,
            })?;
        }
        Ok(())
    }

    /// Binds `params` to the named placeholders of `sql` and runs it.
    ///
    /// A gone-away failure drops the session, reconnects and runs the same statement again,
    /// up to `retry_policy.max_attempts` tries in total. Every other failure is logged with
    /// the SQL and parameters and returned without retrying.
    #[tracing::instrument(level = "debug", skip(self, params))]
    pub async fn execute_query(&self, sql: &str, params: &QueryParams) -> Result<ExecutedStatement, GatewayError> {
        let compiled = compile_named(self.locator.driver, sql);
        let values = match bind_values(&compiled, params) {
            Ok(values) => values,
            Err(error) => return Err(self.query_failed(sql, params, error)),
        };

        let mut state = self.state.lock().await;
        let mut attempt = 0;
        loop {
            attempt += 1;
            self.ensure_connected(&mut state).await?;
            let generation = state.generation;

            let error = match Self::run(&mut state, &compiled.sql, &values).await {
                Ok(outcome) => return Ok(ExecutedStatement::new(sql, generation, attempt, outcome)),
                Err(error) => error,
            };

            let class = classify_driver_error(&error);
            if class == ErrorClass::GoneAway {
                Self::discard_session(&mut state).await;
                if self.retry_policy.allows_retry_after(attempt) {
                    warn!(
                        "[DbGateway] Connection #{} gone away ({}), reconnecting for attempt {}/{}",
                        generation,
                        error,
                        attempt + 1,
                        self.retry_policy.max_attempts
                    );
                    continue;
                }
                error!("[DbGateway] Connection still gone away after {attempt} attempts, giving up");
            }
            return Err(self.query_failed(sql, params, error));
        }
    }

    /// Prepares `sql` on the current session without running it. Driver errors are
    /// returned as-is, without a failure report.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn prepare(&self, sql: &str) -> Result<PreparedStatement, GatewayError> {
        let compiled = compile_named(self.locator.driver, sql);

        let mut state = self.state.lock().await;
        self.ensure_connected(&mut state).await?;
        let result = match state.session.as_mut() {
            Some(session) => session.prepare(&compiled.sql).await,
            None => Err(empty_slot()),
        };
        if let Err(error) = result {
            return Err(GatewayError::query(sql, QueryParams::new().to_json(), error));
        }

        Ok(PreparedStatement {
            sql: sql.to_string(),
            compiled,
            generation: state.generation,
        })
    }

    /// Runs a statement from [`prepare`](Self::prepare). An empty `params` binds nothing.
    /// No reconnect-and-retry: a statement from an older connection is rejected as stale.
    #[tracing::instrument(level = "debug", skip(self, statement, params))]
    pub async fn execute_statement(&self, statement: &PreparedStatement, params: &QueryParams) -> Result<ExecutedStatement, GatewayError> {
        let values = if params.is_empty() {
            Vec::new()
        } else {
            match bind_values(&statement.compiled, params) {
                Ok(values) => values,
                Err(error) => return Err(self.query_failed(&statement.sql, params, error)),
            }
        };

        let mut state = self.state.lock().await;
        self.ensure_connected(&mut state).await?;
        if state.generation != statement.generation {
            let error = QueryError::StaleStatement {
                prepared: statement.generation,
                current: state.generation,
            };
            return Err(self.query_failed(&statement.sql, params, error));
        }

        let generation = state.generation;
        match Self::run(&mut state, &statement.compiled.sql, &values).await {
            Ok(outcome) => Ok(ExecutedStatement::new(&statement.sql, generation, 1, outcome)),
            Err(error) => {
                let class = classify_driver_error(&error);
                if class == ErrorClass::GoneAway {
                    Self::discard_session(&mut state).await;
                }
                Err(self.query_failed(&statement.sql, params, error))
            }
        }
    }

    async fn run(state: &mut ConnectionState, sql: &str, values: &[QueryValue]) -> Result<QueryOutcome, DriverError> {
        match state.session.as_mut() {
            Some(session) => session.execute(sql, values).await,
            None => Err(empty_slot()),
        }
    }

    async fn ensure_connected(&self, state: &mut ConnectionState) -> Result<(), GatewayError> {
        if state.session.is_none() {
            let session = self.open_session().await?;
            state.session = Some(session);
            state.generation += 1;
            info!("[DbGateway] Connected to {} (connection #{})", self.locator, state.generation);
        }
        Ok(())
    }

    async fn open_session(&self) -> Result<Box<dyn DatabaseSession>, GatewayError> {
        let mut session = match self.backend.connect(&self.locator).await {
            Ok(session) => session,
            Err(error) => return Err(self.connection_failed(error)),
        };

        if let Some(encoding) = self.config.encoding.as_deref() {
            let directive = self.locator.driver.init_command(encoding);
            if let Err(error) = session.execute(&directive, &[]).await {
                let _ = session.close().await;
                return Err(self.connection_failed(error));
            }
        }

        Ok(session)
    }

    async fn discard_session(state: &mut ConnectionState) {
        if let Some(mut session) = state.session.take() {
            if let Err(error) = session.close().await {
                debug!("[DbGateway] Ignoring close failure on connection #{}: {}", state.generation, error);
            }
        }
    }

    fn connection_failed(&self, error: DriverError) -> GatewayError {
        error!("[DbGateway] Cannot connect database {}", self.locator);
        error!("[DbGateway] Class: {:?}", error.kind);
        error!("[DbGateway] Message: {}", error);
        GatewayError::Connection {
            locator: self.locator.dsn(),
            source: error,
        }
    }

    fn query_failed(&self, sql: &str, params: &QueryParams, error: impl Into<QueryError>) -> GatewayError {
        let error = error.into();
        let params = params.to_json();
        QueryFailureReport::new(sql, &params, &error).log();
        GatewayError::query(sql, params, error)
    }
}

fn empty_slot() -> DriverError {
    DriverError::new(DriverErrorKind::Closed, None, "no open connection")
}

impl fmt::Debug for DatabaseGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseGateway")
            .field("locator", &self.locator)
            .field("retry_policy", &self.retry_policy)
            .finish_non_exhaustive()
    }
}
