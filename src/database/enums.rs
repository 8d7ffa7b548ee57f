//! Database enumeration types.

/// Supported database driver types (mysql, pgsql, sqlite3).
pub mod database_drivers;

/// Classification of driver failures (gone-away vs fatal).
pub mod error_class;
