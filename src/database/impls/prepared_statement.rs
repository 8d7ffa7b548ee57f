use crate::database::structs::prepared_statement::PreparedStatement;

impl PreparedStatement {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn placeholders(&self) -> &[String] {
        &self.compiled.placeholders
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
