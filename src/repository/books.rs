//! SQLite-backed book store

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, Pool, Sqlite};

use super::{BookStore, StoreResult};
use crate::models::Book;

/// Row as stored in the `books` table
#[derive(Debug, Clone, FromRow)]
struct BookRow {
    id: i64,
    title: String,
    author: String,
    year: i64,
    #[allow(dead_code)]
    created_at: DateTime<Utc>,
    #[allow(dead_code)]
    updated_at: DateTime<Utc>,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Book {
            id: row.id,
            title: row.title,
            author: row.author,
            year: row.year,
        }
    }
}

#[derive(Clone)]
pub struct SqliteBookStore {
    pool: Pool<Sqlite>,
}

impl SqliteBookStore {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for SqliteBookStore {
    async fn insert(&self, book: &Book) -> StoreResult<i64> {
        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO books (title, author, year, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?4)
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.year)
        .bind(now)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    async fn fetch_by_id(&self, id: i64) -> StoreResult<Option<Book>> {
        let row = sqlx::query_as::<_, BookRow>("SELECT * FROM books WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Book::from))
    }

    async fn fetch_page(&self, offset: i64, limit: i64) -> StoreResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, BookRow>(
            "SELECT * FROM books ORDER BY id LIMIT ?1 OFFSET ?2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn save(&self, book: &Book) -> StoreResult<()> {
        sqlx::query(
            r#"
            UPDATE books SET title = ?1, author = ?2, year = ?3, updated_at = ?4
            WHERE id = ?5
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.year)
        .bind(Utc::now())
        .bind(book.id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> StoreResult<()> {
        sqlx::query("DELETE FROM books WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
