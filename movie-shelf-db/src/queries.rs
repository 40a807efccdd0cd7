//! Read queries for the catalog database.
//!
//! Every read maps rows through [`row_to_movie`], whatever the predicate or
//! ordering.

use movie_shelf_catalog::MovieRecord;
use rusqlite::params_from_iter;
use rusqlite::types::Value;

use crate::schema::columns;
use crate::store::{RowView, StorageError, StorageHandle};

const SELECT_MOVIES: &str =
    "SELECT id, title, category, year, url, cover_url, watched, likes FROM movies";

/// Ordering applied to a movie listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MovieOrder {
    /// Oldest first; ties broken by id.
    #[default]
    YearAsc,
    /// Most recently inserted first.
    IdDesc,
    /// Alphabetical, case-insensitive.
    Title,
}

impl MovieOrder {
    fn sql(self) -> &'static str {
        match self {
            MovieOrder::YearAsc => "year ASC, id ASC",
            MovieOrder::IdDesc => "id DESC",
            MovieOrder::Title => "title COLLATE NOCASE ASC, id ASC",
        }
    }
}

/// Predicate and ordering for [`list_movies`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieQuery {
    /// Only movies in this category (exact match).
    pub category: Option<String>,
    /// Only movies released strictly after this year.
    pub after_year: Option<i32>,
    pub order: MovieOrder,
}

impl MovieQuery {
    /// Every movie, oldest first.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn after_year(mut self, year: i32) -> Self {
        self.after_year = Some(year);
        self
    }

    pub fn order_by(mut self, order: MovieOrder) -> Self {
        self.order = order;
        self
    }

    /// SQL text built from fixed fragments, plus the values to bind.
    fn to_sql(&self) -> (String, Vec<Value>) {
        let mut conditions = Vec::new();
        let mut values = Vec::new();

        if let Some(category) = &self.category {
            values.push(Value::Text(category.clone()));
            conditions.push(format!("category = ?{}", values.len()));
        }
        if let Some(year) = self.after_year {
            values.push(Value::Integer(i64::from(year)));
            conditions.push(format!("year > ?{}", values.len()));
        }

        let mut sql = SELECT_MOVIES.to_string();
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        sql.push_str(" ORDER BY ");
        sql.push_str(self.order.sql());

        (sql, values)
    }
}

/// List movies matching `query`. An empty table yields an empty vector.
pub fn list_movies(
    handle: &StorageHandle,
    query: &MovieQuery,
) -> Result<Vec<MovieRecord>, StorageError> {
    let (sql, values) = query.to_sql();
    handle.query(&sql, params_from_iter(values), |cursor| {
        let mut movies = Vec::new();
        while let Some(row) = cursor.next_row()? {
            movies.push(row_to_movie(&row)?);
        }
        Ok(movies)
    })
}

/// Find a movie by id.
pub fn find_movie(handle: &StorageHandle, id: i64) -> Result<Option<MovieRecord>, StorageError> {
    let sql = format!("{SELECT_MOVIES} WHERE id = ?1");
    handle.query(&sql, [id], |cursor| match cursor.next_row()? {
        Some(row) => row_to_movie(&row).map(Some),
        None => Ok(None),
    })
}

/// Number of stored movies.
pub fn count_movies(handle: &StorageHandle) -> Result<u64, StorageError> {
    handle.query("SELECT COUNT(*) AS n FROM movies", [], |cursor| {
        match cursor.next_row()? {
            Some(row) => Ok(row.integer("n")? as u64),
            None => Ok(0),
        }
    })
}

/// Map one `movies` row to a [`MovieRecord`].
pub fn row_to_movie(row: &RowView<'_, '_>) -> Result<MovieRecord, StorageError> {
    Ok(MovieRecord {
        id: row.integer(columns::ID)?,
        title: row.text(columns::TITLE)?,
        category: row.text(columns::CATEGORY)?,
        year: row.get(columns::YEAR)?,
        url: row.optional_text(columns::URL)?,
        cover_url: row.text(columns::COVER_URL)?,
        watched: row.boolean(columns::WATCHED)?,
        likes: row.integer(columns::LIKES)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_orders_by_year() {
        let (sql, values) = MovieQuery::all().to_sql();
        assert!(sql.ends_with("ORDER BY year ASC, id ASC"));
        assert!(!sql.contains("WHERE"));
        assert!(values.is_empty());
    }

    #[test]
    fn filters_are_bound_not_interpolated() {
        let (sql, values) = MovieQuery::all()
            .category("Crime' OR 1=1 --")
            .after_year(1990)
            .order_by(MovieOrder::IdDesc)
            .to_sql();
        assert!(sql.contains("WHERE category = ?1 AND year > ?2"));
        assert!(!sql.contains("OR 1=1"));
        assert!(sql.ends_with("ORDER BY id DESC"));
        assert_eq!(
            values,
            vec![
                Value::Text("Crime' OR 1=1 --".to_string()),
                Value::Integer(1990)
            ]
        );
    }

    #[test]
    fn year_only_filter_uses_first_placeholder() {
        let (sql, values) = MovieQuery::all().after_year(2000).to_sql();
        assert!(sql.contains("WHERE year > ?1"));
        assert_eq!(values, vec![Value::Integer(2000)]);
    }
}
