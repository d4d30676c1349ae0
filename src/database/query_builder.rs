use sqlx::query::Query;
use sqlx::sqlite::SqliteArguments;
use sqlx::Sqlite;

use crate::database::models::ProductField;

/// A value bound as a statement parameter, never spliced into SQL text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Text(String),
    Integer(i64),
}

/// SQL text plus its positional parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlStatement {
    pub query: String,
    pub params: Vec<SqlValue>,
}

/// Assembles `UPDATE <table> SET ... WHERE id = ?` from allow-listed columns.
///
/// Column names come only from `ProductField::column`, so client input can
/// reach the statement solely as bound parameters.
pub struct UpdateBuilder {
    table_name: &'static str,
    assignments: Vec<ProductField>,
}

impl UpdateBuilder {
    pub fn new(table_name: &'static str) -> Self {
        Self {
            table_name,
            assignments: Vec::new(),
        }
    }

    pub fn set(mut self, field: ProductField) -> Self {
        // Last write wins for a repeated column
        self.assignments.retain(|existing| existing.column() != field.column());
        self.assignments.push(field);
        self
    }

    pub fn set_all(self, assignments: impl IntoIterator<Item = ProductField>) -> Self {
        assignments.into_iter().fold(self, |builder, field| builder.set(field))
    }

    /// `None` when there is nothing to set.
    pub fn where_id(self, id: i64) -> Option<SqlStatement> {
        if self.assignments.is_empty() {
            return None;
        }

        let sets = self
            .assignments
            .iter()
            .map(|field| format!("{} = ?", field.column()))
            .collect::<Vec<_>>()
            .join(", ");

        let mut params: Vec<SqlValue> =
            self.assignments.iter().map(ProductField::to_value).collect();
        params.push(SqlValue::Integer(id));

        Some(SqlStatement {
            query: format!("UPDATE {} SET {} WHERE id = ?", self.table_name, sets),
            params,
        })
    }
}

pub fn bind_param<'q>(
    q: Query<'q, Sqlite, SqliteArguments<'q>>,
    v: &'q SqlValue,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    match v {
        SqlValue::Text(s) => q.bind(s.as_str()),
        SqlValue::Integer(i) => q.bind(*i),
    }
}
