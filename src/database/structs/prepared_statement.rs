use crate::database::structs::compiled_sql::CompiledSql;

#[derive(Debug, Clone)]
pub struct PreparedStatement {
    pub(crate) sql: String,
    pub(crate) compiled: CompiledSql,
    pub(crate) generation: u64,
}
