//! Implements an in-memory category repository.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    Error,
    category::{Category, CategoryId, CategoryName, CategoryRepository, NewCategory},
};

/// Stores categories in a vector guarded by a read-write lock.
///
/// Categories are kept in ID order. IDs come from a counter that only ever
/// increases, so deleted IDs are not handed out again.
#[derive(Debug, Default)]
pub struct InMemoryCategoryRepository {
    state: RwLock<State>,
}

#[derive(Debug, Default)]
struct State {
    categories: Vec<Category>,
    last_id: CategoryId,
}

impl InMemoryCategoryRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding `categories`, with IDs assigned from 1 in order.
    pub fn with_categories(categories: impl IntoIterator<Item = NewCategory>) -> Self {
        let mut state = State::default();

        for category in categories {
            state.last_id += 1;
            state.categories.push(category.with_id(state.last_id));
        }

        Self {
            state: RwLock::new(state),
        }
    }

    /// Create a repository holding the categories the server starts with when
    /// no database is configured.
    pub fn with_default_categories() -> Self {
        Self::with_categories([
            NewCategory {
                name: CategoryName::new_unchecked("Electronics"),
                description: Some("Electronic devices".to_owned()),
            },
            NewCategory {
                name: CategoryName::new_unchecked("Mobile"),
                description: Some("Mobile phones and accessories".to_owned()),
            },
        ])
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, State>, Error> {
        self.state.read().map_err(|error| {
            tracing::error!("could not acquire category store lock: {error}");
            Error::DatabaseLockError
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, State>, Error> {
        self.state.write().map_err(|error| {
            tracing::error!("could not acquire category store lock: {error}");
            Error::DatabaseLockError
        })
    }
}

impl State {
    fn position(&self, category_id: CategoryId) -> Option<usize> {
        // Categories are appended with increasing IDs, so the vector stays sorted.
        self.categories
            .binary_search_by_key(&category_id, |category| category.id)
            .ok()
    }
}

impl CategoryRepository for InMemoryCategoryRepository {
    fn create(&self, category: NewCategory) -> Result<Category, Error> {
        let mut state = self.write()?;

        state.last_id += 1;
        let category = category.with_id(state.last_id);
        state.categories.push(category.clone());

        Ok(category)
    }

    fn get(&self, category_id: CategoryId) -> Result<Option<Category>, Error> {
        let state = self.read()?;

        Ok(state
            .position(category_id)
            .map(|index| state.categories[index].clone()))
    }

    fn get_all(&self) -> Result<Vec<Category>, Error> {
        Ok(self.read()?.categories.clone())
    }

    fn update(
        &self,
        category_id: CategoryId,
        category: NewCategory,
    ) -> Result<Option<Category>, Error> {
        let mut state = self.write()?;

        let Some(index) = state.position(category_id) else {
            return Ok(None);
        };

        let updated = category.with_id(category_id);
        state.categories[index] = updated.clone();

        Ok(Some(updated))
    }

    fn delete(&self, category_id: CategoryId) -> Result<bool, Error> {
        let mut state = self.write()?;

        match state.position(category_id) {
            Some(index) => {
                state.categories.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
