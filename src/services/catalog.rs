//! Book catalog service

use std::collections::HashSet;

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{Book, CreateBook, CreateDetail, Detail, UpdateBook},
    repository::{books::DETAIL_EXISTS, Repository},
};

pub const MISSING_BOOK_FIELDS: &str = "Missing required book details";
pub const MISSING_DETAIL_FIELDS: &str = "Missing required detail fields";

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_books(&self) -> Vec<Book> {
        self.repository.books_list().await
    }

    pub async fn get_book(&self, id: &str) -> AppResult<Book> {
        self.repository.books_get_by_id(id).await
    }

    pub async fn create_book(&self, data: CreateBook) -> AppResult<Book> {
        check(&data, MISSING_BOOK_FIELDS)?;
        let (Some(id), Some(title), Some(details)) = (data.id, data.title, data.details) else {
            return Err(AppError::Validation(MISSING_BOOK_FIELDS.to_string()));
        };

        let book = Book {
            id,
            title,
            details: into_details(details)?,
        };
        self.repository.books_create(book).await
    }

    /// Replace title and details wholesale.
    ///
    /// An unknown book is reported before the body is validated.
    pub async fn update_book(&self, id: &str, data: UpdateBook) -> AppResult<Book> {
        self.repository.books_get_by_id(id).await?;

        check(&data, MISSING_BOOK_FIELDS)?;
        let (Some(title), Some(details)) = (data.title, data.details) else {
            return Err(AppError::Validation(MISSING_BOOK_FIELDS.to_string()));
        };

        let details = into_details(details)?;
        self.repository.books_update(id, title, details).await
    }

    pub async fn delete_book(&self, id: &str) -> AppResult<()> {
        self.repository.books_delete(id).await
    }

    pub async fn add_detail(&self, book_id: &str, data: CreateDetail) -> AppResult<Detail> {
        self.repository.books_get_by_id(book_id).await?;

        let detail = into_detail(data)?;
        self.repository.books_add_detail(book_id, detail).await
    }

    pub async fn delete_detail(&self, book_id: &str, detail_id: &str) -> AppResult<()> {
        self.repository.books_delete_detail(book_id, detail_id).await
    }
}

fn check<T: Validate>(data: &T, message: &str) -> AppResult<()> {
    data.validate().map_err(|e| {
        tracing::debug!("Rejected request body: {}", e);
        AppError::Validation(message.to_string())
    })
}

fn into_detail(data: CreateDetail) -> AppResult<Detail> {
    check(&data, MISSING_DETAIL_FIELDS)?;
    match (data.id, data.author, data.genre, data.publication_year) {
        (Some(id), Some(author), Some(genre), Some(publication_year)) => Ok(Detail {
            id,
            author,
            genre,
            publication_year,
        }),
        _ => Err(AppError::Validation(MISSING_DETAIL_FIELDS.to_string())),
    }
}

/// Validate a full detail sequence; ids must be pairwise distinct
fn into_details(items: Vec<CreateDetail>) -> AppResult<Vec<Detail>> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .map(|item| {
            let detail = into_detail(item)?;
            if !seen.insert(detail.id.clone()) {
                return Err(AppError::Conflict(DETAIL_EXISTS.to_string()));
            }
            Ok(detail)
        })
        .collect()
}
