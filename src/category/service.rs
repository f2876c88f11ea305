//! Business rules for categories.

use std::sync::Arc;

use crate::{
    Error,
    category::{Category, CategoryId, CategoryPayload, CategoryRepository},
};

/// Validates category requests and passes them on to a [CategoryRepository].
///
/// The service is the only caller of the repository. Lookups that find
/// nothing are passed back unchanged as `None`/`false`, it is up to the
/// caller to decide what a missing category means.
#[derive(Debug, Clone)]
pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    /// Create a service backed by `repository`.
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    /// Create a category from `payload`.
    ///
    /// # Errors
    /// Returns [Error::EmptyCategoryName] without touching the repository if
    /// the name is empty, or a storage error if the category could not be saved.
    pub fn create(&self, payload: CategoryPayload) -> Result<Category, Error> {
        let category = payload.validate()?;

        self.repository.create(category)
    }

    /// Get the category with `category_id`, if it exists.
    pub fn get(&self, category_id: CategoryId) -> Result<Option<Category>, Error> {
        self.repository.get(category_id)
    }

    /// Get all categories.
    pub fn get_all(&self) -> Result<Vec<Category>, Error> {
        self.repository.get_all()
    }

    /// Replace the category with `category_id` with `payload`.
    ///
    /// Any ID inside `payload` is ignored. Returns `None` if there is no
    /// category with `category_id`.
    ///
    /// # Errors
    /// Returns [Error::EmptyCategoryName] without touching the repository if
    /// the name is empty, or a storage error if the category could not be saved.
    pub fn update(
        &self,
        category_id: CategoryId,
        payload: CategoryPayload,
    ) -> Result<Option<Category>, Error> {
        let category = payload.validate()?;

        self.repository.update(category_id, category)
    }

    /// Delete the category with `category_id`.
    ///
    /// Returns `false` if there is no such category.
    pub fn delete(&self, category_id: CategoryId) -> Result<bool, Error> {
        self.repository.delete(category_id)
    }
}
