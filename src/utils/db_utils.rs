use sqlx::MySqlPool;

/// ===============================
/// SQL update container
/// ===============================
#[derive(Debug, PartialEq, Eq)]
pub struct SqlUpdate {
    pub sql: String,
    /// Bound in order: SET values first, the id last. `None` binds NULL.
    pub values: Vec<Option<String>>,
}

/// ===============================
/// Build a partial UPDATE statement
/// ===============================
///
/// `fields` are (column, value) pairs; a `None` value sets the column to NULL.
/// Column names are interpolated into the statement, so they must come from a
/// fixed list and never from user input.
/// Returns `None` when there is nothing to set.
pub fn build_update_sql(
    table: &str,
    fields: &[(&'static str, Option<&str>)],
    id_column: &str,
    id_value: &str,
) -> Option<SqlUpdate> {
    if fields.is_empty() {
        return None;
    }

    let set_clause = fields
        .iter()
        .map(|(column, _)| format!("`{}` = ?", column))
        .collect::<Vec<_>>()
        .join(", ");

    let sql = format!(
        "UPDATE `{}` SET {} WHERE `{}` = ?",
        table, set_clause, id_column
    );

    let mut values = Vec::with_capacity(fields.len() + 1);
    values.extend(fields.iter().map(|(_, v)| v.map(str::to_string)));
    values.push(Some(id_value.to_string()));

    Some(SqlUpdate { sql, values })
}

/// ===============================
/// Execute the update
/// ===============================
pub async fn execute_update(pool: &MySqlPool, update: SqlUpdate) -> Result<u64, sqlx::Error> {
    let mut query = sqlx::query(&update.sql);

    for value in update.values {
        query = query.bind(value);
    }

    let result = query.execute(pool).await?;
    Ok(result.rows_affected())
}
