//! Repository layer holding the in-memory book collection

pub mod books;

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::Book;

/// Books and the next id to hand out, guarded together
#[derive(Debug)]
pub(crate) struct Collection {
    pub(crate) books: Vec<Book>,
    pub(crate) next_id: i64,
}

/// Main repository struct holding the shared collection
#[derive(Clone)]
pub struct Repository {
    collection: Arc<RwLock<Collection>>,
}

impl Repository {
    /// Create a repository over the given books, in order
    pub fn new(books: Vec<Book>) -> Self {
        let next_id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        Self {
            collection: Arc::new(RwLock::new(Collection { books, next_id })),
        }
    }

    /// Create a repository holding the two startup records
    pub fn seeded() -> Self {
        Self::new(vec![
            Book::new(1, "Zero to One", Some("Peter Thiel".to_string())),
            Book::new(2, "The Alchemist", Some("Paulo Coelho".to_string())),
        ])
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::seeded()
    }
}
