//! Business logic services

pub mod catalog;

use crate::{config::IdentityConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub identity: IdentityConfig,
}

impl Services {
    /// Create all services over the given repository
    pub fn new(repository: Repository, identity: IdentityConfig) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository),
            identity,
        }
    }
}
