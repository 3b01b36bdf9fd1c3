//! Shared building blocks for dialect rules.

/// Quote identifier with double quotes (ANSI style).
/// Used by: SQLite, PostgreSQL, SQL Server
pub fn quote_double(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Quote identifier with backticks.
/// Used by: MySQL
pub fn quote_backtick(ident: &str) -> String {
    format!("`{}`", ident.replace('`', "``"))
}
