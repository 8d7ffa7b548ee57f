use std::backtrace::Backtrace;
use std::fmt;
use log::error;
use crate::database::errors::QueryError;
use crate::database::structs::query_failure_report::QueryFailureReport;

impl<'a> QueryFailureReport<'a> {
    /// Captures the stack whatever `RUST_BACKTRACE` says; the trace is part of every report.
    pub fn new(sql: &'a str, params: &'a str, error: &QueryError) -> QueryFailureReport<'a> {
        QueryFailureReport {
            sql,
            params,
            class: error.class_label(),
            message: error.to_string(),
            trace: Backtrace::force_capture(),
        }
    }

    pub fn log(&self) {
        for line in self.to_string().lines() {
            error!("{line}");
        }
    }
}

impl fmt::Display for QueryFailureReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[DbGateway] SQL ERROR")?;
        writeln!(f, "[DbGateway] SQL: {}", self.sql)?;
        writeln!(f, "[DbGateway] Params: {}", self.params)?;
        writeln!(f, "[DbGateway] Class: {}", self.class)?;
        writeln!(f, "[DbGateway] Message: {}", self.message)?;
        write!(f, "[DbGateway] Trace: {}", self.trace)
    }
}
