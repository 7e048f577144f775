//! Book domain methods on Repository

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::Book,
};

pub(crate) fn not_found() -> AppError {
    AppError::NotFound("Book not found".to_string())
}

impl Repository {
    /// List all books in collection order
    pub async fn books_list(&self) -> Vec<Book> {
        self.collection.read().await.books.clone()
    }

    pub async fn books_count(&self) -> usize {
        self.collection.read().await.books.len()
    }

    /// Get book by ID
    pub async fn books_get_by_id(&self, id: i64) -> AppResult<Book> {
        self.collection
            .read()
            .await
            .books
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    /// Books whose author contains `needle`, ignoring case
    pub async fn books_search_by_author(&self, needle: &str) -> Vec<Book> {
        let needle = needle.to_lowercase();
        self.collection
            .read()
            .await
            .books
            .iter()
            .filter(|b| b.author_contains(&needle))
            .cloned()
            .collect()
    }

    /// Append a new book with the next id
    pub async fn books_create(&self, title: String, author: Option<String>) -> Book {
        let mut collection = self.collection.write().await;
        let book = Book::new(collection.next_id, title, author);
        collection.next_id += 1;
        collection.books.push(book.clone());
        book
    }

    /// Apply `change` to the first book with the given id.
    ///
    /// The write lock is held across lookup and change. `change` must leave
    /// the book untouched when it returns an error.
    pub async fn books_update<F>(&self, id: i64, change: F) -> AppResult<Book>
    where
        F: FnOnce(&mut Book) -> AppResult<()>,
    {
        let mut collection = self.collection.write().await;
        let book = collection
            .books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(not_found)?;
        change(book)?;
        Ok(book.clone())
    }

    /// Delete every book with the given id
    pub async fn books_delete(&self, id: i64) -> AppResult<()> {
        let mut collection = self.collection.write().await;
        let before = collection.books.len();
        collection.books.retain(|b| b.id != id);
        if collection.books.len() == before {
            return Err(not_found());
        }
        Ok(())
    }
}
