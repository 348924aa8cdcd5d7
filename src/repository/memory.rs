//! In-memory book store

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{BookStore, StoreResult};
use crate::models::Book;

#[derive(Default)]
struct Inner {
    books: BTreeMap<i64, Book>,
    last_id: i64,
}

/// Book store kept in process memory; ids start at 1 and are never reused
#[derive(Default)]
pub struct InMemoryBookStore {
    inner: RwLock<Inner>,
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookStore for InMemoryBookStore {
    async fn insert(&self, book: &Book) -> StoreResult<i64> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let id = inner.last_id;
        inner.books.insert(
            id,
            Book {
                id,
                ..book.clone()
            },
        );
        Ok(id)
    }

    async fn fetch_by_id(&self, id: i64) -> StoreResult<Option<Book>> {
        Ok(self.inner.read().await.books.get(&id).cloned())
    }

    async fn fetch_page(&self, offset: i64, limit: i64) -> StoreResult<Vec<Book>> {
        let inner = self.inner.read().await;
        Ok(inner
            .books
            .values()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn save(&self, book: &Book) -> StoreResult<()> {
        if let Some(stored) = self.inner.write().await.books.get_mut(&book.id) {
            stored.title = book.title.clone();
            stored.author = book.author.clone();
            stored.year = book.year;
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> StoreResult<()> {
        self.inner.write().await.books.remove(&id);
        Ok(())
    }
}
