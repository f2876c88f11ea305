//! Defines the category repository trait.

use std::fmt::Debug;

use crate::{
    Error,
    category::{Category, CategoryId, NewCategory},
};

/// Creates, retrieves, updates and deletes categories in a backing store.
///
/// A missing category is not an error: lookups return `None` and deletes
/// return `false`. Errors are reserved for failures of the store itself.
///
/// Implementations must serialize their writes so that concurrent creates
/// never hand out the same ID.
pub trait CategoryRepository: Debug + Send + Sync {
    /// Create a new category and add it to the store.
    ///
    /// The returned category carries the newly assigned ID. IDs are never
    /// reused, even after the category holding them is deleted.
    fn create(&self, category: NewCategory) -> Result<Category, Error>;

    /// Get a category by its ID.
    fn get(&self, category_id: CategoryId) -> Result<Option<Category>, Error>;

    /// Get all categories ordered by ID.
    fn get_all(&self) -> Result<Vec<Category>, Error>;

    /// Replace the name and description of the category with `category_id`.
    ///
    /// Returns `None`, without changing anything, if there is no such category.
    fn update(
        &self,
        category_id: CategoryId,
        category: NewCategory,
    ) -> Result<Option<Category>, Error>;

    /// Delete the category with `category_id`.
    ///
    /// Returns `false` if there is no such category.
    fn delete(&self, category_id: CategoryId) -> Result<bool, Error>;
}
