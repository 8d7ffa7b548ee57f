#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledSql {
    /// SQL with every named placeholder replaced by the driver's positional marker.
    pub sql: String,
    /// Placeholder names in the order their markers appear, repeats included.
    pub placeholders: Vec<String>,
}
