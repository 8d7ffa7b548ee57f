use crate::database::structs::executed_statement::ExecutedStatement;
use crate::database::structs::query_outcome::QueryOutcome;
use crate::database::structs::result_row::ResultRow;

impl ExecutedStatement {
    pub(crate) fn new(sql: &str, generation: u64, attempts: u32, outcome: QueryOutcome) -> ExecutedStatement {
        ExecutedStatement {
            sql: sql.to_string(),
            generation,
            attempts,
            outcome,
        }
    }

    /// The SQL as the caller wrote it, named placeholders included.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Connection generation the statement finally ran on.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// How many tries it took, the first one included.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.outcome.rows
    }

    pub fn fetch_one(&self) -> Option<&ResultRow> {
        self.outcome.rows.first()
    }

    pub fn into_rows(self) -> Vec<ResultRow> {
        self.outcome.rows
    }

    pub fn rows_affected(&self) -> u64 {
        self.outcome.rows_affected
    }

    pub fn last_insert_id(&self) -> Option<i64> {
        self.outcome.last_insert_id
    }
}
