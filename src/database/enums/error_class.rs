use serde::{
    Deserialize,
    Serialize
};

/// Outcome of inspecting a driver failure.
///
/// Only `GoneAway` is recoverable: the server closed its half of the session and a fresh
/// connection is expected to succeed. Everything else is reported to the caller as-is.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    GoneAway,
    Fatal,
}
