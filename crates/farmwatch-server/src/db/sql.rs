//! SQL statement builders
//!
//! Table and column names always come from `'static` entity metadata, never
//! from request input; values are passed as positional `$n` parameters.

use std::fmt::Write;

/// `SELECT * FROM <table> WHERE id = $1`
pub fn select_by_id(table: &str) -> String {
    format!("SELECT * FROM {table} WHERE id = $1")
}

/// `SELECT EXISTS (SELECT 1 FROM <table> WHERE id = $1)`
pub fn exists(table: &str) -> String {
    format!("SELECT EXISTS (SELECT 1 FROM {table} WHERE id = $1)")
}

/// `SELECT * FROM <table> [WHERE c1 = $1 AND ...] ORDER BY id [LIMIT n]`
pub fn select_where(table: &str, columns: &[&str], limit: Option<u32>) -> String {
    let mut sql = format!("SELECT * FROM {table}");

    if !columns.is_empty() {
        let conditions: Vec<String> = columns
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{column} = ${}", i + 1))
            .collect();
        let _ = write!(sql, " WHERE {}", conditions.join(" AND "));
    }

    sql.push_str(" ORDER BY id");

    if let Some(limit) = limit {
        let _ = write!(sql, " LIMIT {limit}");
    }

    sql
}

/// `INSERT INTO <table> (c1, ...) VALUES ($1, ...) RETURNING *`
pub fn insert(table: &str, columns: &[&str]) -> String {
    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("${i}")).collect();
    format!(
        "INSERT INTO {table} ({}) VALUES ({}) RETURNING *",
        columns.join(", "),
        placeholders.join(", ")
    )
}

/// Partial update.
///
/// Each column takes two parameters: a flag saying whether a new value was
/// supplied, then the value itself. The row id is the last parameter.
pub fn update(table: &str, columns: &[&str]) -> String {
    let mut assignments: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let flag = 2 * i + 1;
            let value = flag + 1;
            format!("{column} = CASE WHEN ${flag} THEN ${value} ELSE {column} END")
        })
        .collect();
    assignments.push("updated_at = NOW()".to_string());

    format!(
        "UPDATE {table} SET {} WHERE id = ${} RETURNING *",
        assignments.join(", "),
        2 * columns.len() + 1
    )
}

/// `DELETE FROM <table> WHERE id = $1`
pub fn delete(table: &str) -> String {
    format!("DELETE FROM {table} WHERE id = $1")
}
