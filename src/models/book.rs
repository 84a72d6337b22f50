//! Book and detail models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Book record with its nested details, in insertion order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Caller-supplied identifier, unique among books
    pub id: String,
    pub title: String,
    pub details: Vec<Detail>,
}

/// Authorship record owned by a book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Detail {
    /// Caller-supplied identifier, unique within the owning book
    pub id: String,
    pub author: String,
    pub genre: String,
    /// Kept as sent; an explicit `null` year is stored as `null`
    pub publication_year: Option<i64>,
}

/// Create book request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(required, length(min = 1))]
    pub id: Option<String>,
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    /// Initial details, may be empty
    #[validate(required)]
    pub details: Option<Vec<CreateDetail>>,
}

/// Update book request; replaces title and the whole detail sequence
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    #[validate(required)]
    pub details: Option<Vec<CreateDetail>>,
}

/// Create detail request
#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDetail {
    #[validate(required, length(min = 1))]
    pub id: Option<String>,
    #[validate(required, length(min = 1))]
    pub author: Option<String>,
    #[validate(required, length(min = 1))]
    pub genre: Option<String>,
    /// Outer `None` when the key is absent, `Some(None)` for an explicit `null`.
    /// Zero and `null` are valid; only absence is rejected.
    #[validate(required)]
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<i64>)]
    pub publication_year: Option<Option<i64>>,
}
