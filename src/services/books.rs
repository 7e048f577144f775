//! Book collection service

use crate::{
    error::{AppError, AppResult},
    models::{Book, CreateBook, UpdateBook},
    repository::{books::not_found, Repository},
};

/// Parse a path id. Anything that is not an integer matches no book.
pub fn parse_book_id(raw: &str) -> AppResult<i64> {
    raw.trim().parse::<i64>().map_err(|_| not_found())
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Empty authors are stored as absent
fn normalize_author(author: Option<String>) -> Option<String> {
    author.filter(|a| !is_blank(a))
}

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Vec<Book> {
        self.repository.books_list().await
    }

    pub async fn count(&self) -> usize {
        self.repository.books_count().await
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Book> {
        self.repository.books_get_by_id(parse_book_id(id)?).await
    }

    /// Search by author substring. An absent or empty query is rejected.
    pub async fn search_by_author(&self, author: Option<&str>) -> AppResult<Vec<Book>> {
        match author {
            Some(author) if !author.is_empty() => {
                Ok(self.repository.books_search_by_author(author).await)
            }
            _ => Err(AppError::BadRequest("Author query is required".to_string())),
        }
    }

    pub async fn create(&self, data: CreateBook) -> AppResult<Book> {
        let title = data
            .title
            .filter(|t| !is_blank(t))
            .ok_or_else(|| AppError::BadRequest("Title is required".to_string()))?;

        let book = self
            .repository
            .books_create(title, normalize_author(data.author))
            .await;
        tracing::debug!(id = book.id, "Book created");
        Ok(book)
    }

    /// Partial update. Not found takes precedence over an invalid title.
    pub async fn update(&self, id: &str, data: UpdateBook) -> AppResult<Book> {
        let id = parse_book_id(id)?;
        let book = self
            .repository
            .books_update(id, |book| {
                if data.title.as_deref().is_some_and(is_blank) {
                    return Err(AppError::BadRequest("Title cannot be empty".to_string()));
                }
                if let Some(title) = data.title {
                    book.title = title;
                }
                if let Some(author) = data.author {
                    book.author = normalize_author(Some(author));
                }
                Ok(())
            })
            .await?;
        tracing::debug!(id = book.id, "Book updated");
        Ok(book)
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let id = parse_book_id(id)?;
        self.repository.books_delete(id).await?;
        tracing::debug!(id, "Book deleted");
        Ok(())
    }
}
