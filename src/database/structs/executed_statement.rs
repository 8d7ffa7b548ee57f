use crate::database::structs::query_outcome::QueryOutcome;

#[derive(Debug, Clone)]
pub struct ExecutedStatement {
    pub(crate) sql: String,
    pub(crate) generation: u64,
    pub(crate) attempts: u32,
    pub(crate) outcome: QueryOutcome,
}
