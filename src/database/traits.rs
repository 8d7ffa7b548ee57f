//! Seams between the gateway and the database client.

/// Opens sessions for a data-source locator.
pub mod database_backend;

/// One open session with the database server.
pub mod database_session;
