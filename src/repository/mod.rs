//! Repository layer over the in-memory book collection

pub mod books;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Book;

/// Main repository struct holding the process-wide book collection.
///
/// Clones share the same collection. All mutations go through the single
/// write lock, which makes each check-then-mutate step atomic.
#[derive(Clone, Default)]
pub struct Repository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl Repository {
    /// Create a new, empty repository
    pub fn new() -> Self {
        Self::default()
    }
}
