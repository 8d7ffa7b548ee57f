use crate::database::structs::result_row::ResultRow;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOutcome {
    pub rows: Vec<ResultRow>,
    pub rows_affected: u64,
    pub last_insert_id: Option<i64>,
}
