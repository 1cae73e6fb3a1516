//! Builder Pattern: SQL query builder
//!
//! Run with: cargo run --bin creational_01_query_builder

use std::fmt;

use design_patterns::colors::{heading, Palette};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Direction {
    #[default]
    Asc,
    Desc,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Asc => write!(f, "ASC"),
            Direction::Desc => write!(f, "DESC"),
        }
    }
}

#[derive(Debug, Clone)]
struct QueryBuilder {
    table: String,
    fields: Vec<String>,
    conditions: Vec<String>,
    order_fields: Vec<(String, Direction)>,
    limit: Option<usize>,
}

impl QueryBuilder {
    fn new(table: impl Into<String>) -> Self {
        QueryBuilder {
            table: table.into(),
            fields: Vec::new(),
            conditions: Vec::new(),
            order_fields: Vec::new(),
            limit: None,
        }
    }

    /// An empty field list selects every column.
    fn select<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    fn where_clause(mut self, condition: impl Into<String>) -> Self {
        self.conditions.push(condition.into());
        self
    }

    fn order_by(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.order_fields.push((field.into(), direction));
        self
    }

    fn limit(mut self, count: usize) -> Self {
        self.limit = Some(count);
        self
    }

    fn execute(&self) -> String {
        let fields = if self.fields.is_empty() {
            "*".to_string()
        } else {
            self.fields.join(", ")
        };

        let mut query = format!("SELECT {} FROM {}", fields, self.table);

        if !self.conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&self.conditions.join(" AND "));
        }

        if !self.order_fields.is_empty() {
            let order: Vec<String> = self
                .order_fields
                .iter()
                .map(|(field, direction)| format!("{field} {direction}"))
                .collect();
            query.push_str(" ORDER BY ");
            query.push_str(&order.join(", "));
        }

        if let Some(limit) = self.limit {
            query.push_str(&format!(" LIMIT {limit}"));
        }

        query.push(';');
        query
    }
}

fn main() {
    let users_query = QueryBuilder::new("users")
        .select(["id", "name", "email"])
        .where_clause("age > 18")
        .where_clause("country = 'Cri'")
        .order_by("name", Direction::Asc)
        .limit(10)
        .execute();

    println!("{}", heading("Query:", Palette::Red));
    println!("{users_query}");
}
