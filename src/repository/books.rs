//! Book domain methods on Repository

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::{Book, Detail},
};

pub const BOOK_NOT_FOUND: &str = "Book not found";
pub const DETAIL_NOT_FOUND: &str = "Detail not found";
pub const BOOK_EXISTS: &str = "Book with this id already exists";
pub const DETAIL_EXISTS: &str = "Detail with this id already exists for this book";

impl Repository {
    /// List all books in insertion order
    pub async fn books_list(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    /// Get book by ID
    pub async fn books_get_by_id(&self, id: &str) -> AppResult<Book> {
        self.books
            .read()
            .await
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.to_string()))
    }

    /// Append a new book, rejecting duplicate ids
    pub async fn books_create(&self, book: Book) -> AppResult<Book> {
        let mut books = self.books.write().await;
        if books.iter().any(|b| b.id == book.id) {
            return Err(AppError::Conflict(BOOK_EXISTS.to_string()));
        }

        tracing::info!(book_id = %book.id, details = book.details.len(), "Book created");
        books.push(book.clone());
        Ok(book)
    }

    /// Replace title and details of an existing book, keeping its id and position
    pub async fn books_update(&self, id: &str, title: String, details: Vec<Detail>) -> AppResult<Book> {
        let mut books = self.books.write().await;
        let book = books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.to_string()))?;

        book.title = title;
        book.details = details;
        tracing::info!(book_id = %id, details = book.details.len(), "Book updated");
        Ok(book.clone())
    }

    /// Delete a book together with its details
    pub async fn books_delete(&self, id: &str) -> AppResult<()> {
        let mut books = self.books.write().await;
        let index = books
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.to_string()))?;

        let removed = books.remove(index);
        tracing::info!(book_id = %id, details = removed.details.len(), "Book deleted");
        Ok(())
    }

    /// Append a detail to a book, rejecting ids already used within that book
    pub async fn books_add_detail(&self, book_id: &str, detail: Detail) -> AppResult<Detail> {
        let mut books = self.books.write().await;
        let book = books
            .iter_mut()
            .find(|b| b.id == book_id)
            .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.to_string()))?;

        if book.details.iter().any(|d| d.id == detail.id) {
            return Err(AppError::Conflict(DETAIL_EXISTS.to_string()));
        }

        tracing::info!(book_id = %book_id, detail_id = %detail.id, "Detail added");
        book.details.push(detail.clone());
        Ok(detail)
    }

    /// Remove a detail from a book
    pub async fn books_delete_detail(&self, book_id: &str, detail_id: &str) -> AppResult<()> {
        let mut books = self.books.write().await;
        let book = books
            .iter_mut()
            .find(|b| b.id == book_id)
            .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.to_string()))?;

        let index = book
            .details
            .iter()
            .position(|d| d.id == detail_id)
            .ok_or_else(|| AppError::NotFound(DETAIL_NOT_FOUND.to_string()))?;

        book.details.remove(index);
        tracing::info!(book_id = %book_id, detail_id = %detail_id, "Detail deleted");
        Ok(())
    }
}
