use std::collections::BTreeSet;
use std::io;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::enums::error_class::ErrorClass;
use crate::database::errors::{DriverError, DriverErrorKind, QueryError};
use crate::database::structs::compiled_sql::CompiledSql;
use crate::database::structs::query_params::QueryParams;
use crate::database::structs::query_value::QueryValue;

/// Vendor codes meaning the server side of the session is gone.
/// MySQL client 2006 (server has gone away), 2013 (lost connection during query),
/// PostgreSQL 57P01 (admin shutdown).
pub const GONE_AWAY_CODES: &[&str] = &["2006", "2013", "57P01"];

/// Message fragments matched, lowercased, when the driver gives no usable code.
pub const GONE_AWAY_MARKERS: &[&str] = &[
    "server has gone away",
    "lost connection to mysql server",
    "terminating connection due to administrator command",
];

/// Decides whether a failed statement may be retried on a fresh connection.
pub fn classify_driver_error(error: &DriverError) -> ErrorClass {
    match error.kind {
        DriverErrorKind::Io(kind) if is_dropped_socket(kind) => return ErrorClass::GoneAway,
        DriverErrorKind::Closed => return ErrorClass::GoneAway,
        _ => {}
    }

    if error.code.as_deref().is_some_and(|code| GONE_AWAY_CODES.contains(&code)) {
        return ErrorClass::GoneAway;
    }

    let message = error.message.to_lowercase();
    if GONE_AWAY_MARKERS.iter().any(|marker| message.contains(marker)) {
        return ErrorClass::GoneAway;
    }

    ErrorClass::Fatal
}

fn is_dropped_socket(kind: io::ErrorKind) -> bool {
    matches!(
        kind,
        io::ErrorKind::BrokenPipe
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::NotConnected
            | io::ErrorKind::UnexpectedEof
    )
}

/// Rewrites `:name` placeholders into the driver's positional markers.
///
/// Quoted strings, quoted identifiers, `--` and `/* */` comments and `::` casts are
/// copied through untouched, and so are PostgreSQL dollar-quoted bodies (`$$...$$`,
/// `$tag$...$tag$`). Backslash escapes inside quotes are honoured for MySQL only.
pub fn compile_named(engine: DatabaseDrivers, sql: &str) -> CompiledSql {
    let chars: Vec<char> = sql.chars().collect();
    let mut out = String::with_capacity(sql.len());
    let mut placeholders = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '\'' | '"' | '`' => {
                let end = skip_quoted(&chars, i, c, engine);
                out.extend(&chars[i..end]);
                i = end;
            }
            '$' if engine == DatabaseDrivers::pgsql => {
                let end = match dollar_quote_tag(&chars, i) {
                    Some(tag_end) => skip_dollar_quoted(&chars, i, tag_end),
                    None => i + 1,
                };
                out.extend(&chars[i..end]);
                i = end;
            }
            '-' if chars.get(i + 1) == Some(&'-') => {
                let end = chars[i..].iter().position(|&ch| ch == '\n').map_or(chars.len(), |p| i + p);
                out.extend(&chars[i..end]);
                i = end;
            }
            '/' if chars.get(i + 1) == Some(&'*') => {
                let end = find_block_comment_end(&chars, i + 2);
                out.extend(&chars[i..end]);
                i = end;
            }
            ':' if chars.get(i + 1) == Some(&':') => {
                out.push_str("::");
                i += 2;
            }
            ':' if chars.get(i + 1).is_some_and(|&ch| is_ident_start(ch)) => {
                let start = i + 1;
                let mut end = start;
                while end < chars.len() && is_ident_char(chars[end]) {
                    end += 1;
                }
                placeholders.push(chars[start..end].iter().collect::<String>());
                out.push_str(&engine.positional_placeholder(placeholders.len()));
                i = end;
            }
            _ => {
                out.push(c);
                i += 1;
            }
        }
    }

    CompiledSql { sql: out, placeholders }
}

fn skip_quoted(chars: &[char], start: usize, quote: char, engine: DatabaseDrivers) -> usize {
    let backslash_escapes = engine == DatabaseDrivers::mysql && quote != '`';
    let mut i = start + 1;
    while i < chars.len() {
        if backslash_escapes && chars[i] == '\\' {
            i += 2;
            continue;
        }
        if chars[i] == quote {
            // doubled quote is an escaped quote
            if chars.get(i + 1) == Some(&quote) {
                i += 2;
                continue;
            }
            return i + 1;
        }
        i += 1;
    }
    chars.len()
}

/// End (exclusive) of the opening `$tag$` at `start`, if there is one there.
/// `$1` and identifiers such as `a$b` are not dollar quotes.
fn dollar_quote_tag(chars: &[char], start: usize) -> Option<usize> {
    if start > 0 && is_ident_char(chars[start - 1]) {
        return None;
    }
    let mut i = start + 1;
    if chars.get(i).is_some_and(|&c| is_ident_start(c)) {
        while i < chars.len() && is_ident_char(chars[i]) {
            i += 1;
        }
    }
    (chars.get(i) == Some(&'$')).then_some(i + 1)
}

fn skip_dollar_quoted(chars: &[char], start: usize, tag_end: usize) -> usize {
    let tag = &chars[start..tag_end];
    let mut i = tag_end;
    while i + tag.len() <= chars.len() {
        if chars[i..i + tag.len()] == *tag {
            return i + tag.len();
        }
        i += 1;
    }
    chars.len()
}

fn find_block_comment_end(chars: &[char], from: usize) -> usize {
    let mut i = from;
    while i + 1 < chars.len() {
        if chars[i] == '*' && chars[i + 1] == '/' {
            return i + 2;
        }
        i += 1;
    }
    chars.len()
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Resolves every placeholder occurrence to its value, in marker order.
///
/// A placeholder without a value and a value without a placeholder are both errors.
pub fn bind_values(compiled: &CompiledSql, params: &QueryParams) -> Result<Vec<QueryValue>, QueryError> {
    let mut values = Vec::with_capacity(compiled.placeholders.len());
    for name in &compiled.placeholders {
        match params.get(name) {
            Some(value) => values.push(value.clone()),
            None => return Err(QueryError::MissingParameter(name.clone())),
        }
    }

    let used: BTreeSet<&str> = compiled.placeholders.iter().map(String::as_str).collect();
    if let Some(name) = params.names().find(|name| !used.contains(name)) {
        return Err(QueryError::UnusedParameter(name.to_string()));
    }

    Ok(values)
}
