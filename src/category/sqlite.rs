//! Implements a SQLite backed category repository.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, OptionalExtension, Row};

use crate::{
    Error,
    category::{Category, CategoryId, CategoryName, CategoryRepository, NewCategory},
    db::initialize,
};

/// Creates, retrieves, updates and deletes categories in a SQLite database.
///
/// All statements run on one connection behind a mutex, so writes are
/// serialized and reads never observe a half-applied write.
#[derive(Debug, Clone)]
pub struct SQLiteCategoryRepository {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteCategoryRepository {
    /// Create a category repository with a SQLite database.
    ///
    /// The category table is created if it does not already exist.
    ///
    /// # Errors
    /// This function will return an error if the table could not be created.
    pub fn new(connection: Connection) -> Result<Self, Error> {
        initialize(&connection)?;

        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }

    /// Open the database at `db_conn`, a file path or `:memory:`.
    ///
    /// # Errors
    /// This function will return an error if the database cannot be opened or
    /// initialized.
    pub fn open(db_conn: &str) -> Result<Self, Error> {
        let connection = Connection::open(db_conn)?;

        Self::new(connection)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|error| {
            tracing::error!("could not acquire database lock: {error}");
            Error::DatabaseLockError
        })
    }
}

impl CategoryRepository for SQLiteCategoryRepository {
    /// Create a category in the database.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn create(&self, category: NewCategory) -> Result<Category, Error> {
        let connection = self.lock()?;
        connection.execute(
            "INSERT INTO category (name, description) VALUES (?1, ?2);",
            (category.name.as_ref(), category.description.as_deref()),
        )?;

        let id = connection.last_insert_rowid();

        Ok(category.with_id(id))
    }

    /// Retrieve the category with `category_id`.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn get(&self, category_id: CategoryId) -> Result<Option<Category>, Error> {
        self.lock()?
            .prepare("SELECT id, name, description FROM category WHERE id = :id;")?
            .query_row(&[(":id", &category_id)], map_row)
            .optional()
            .map_err(|error| error.into())
    }

    /// Retrieve all categories in the database.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn get_all(&self) -> Result<Vec<Category>, Error> {
        self.lock()?
            .prepare("SELECT id, name, description FROM category ORDER BY id ASC;")?
            .query_map([], map_row)?
            .map(|maybe_category| maybe_category.map_err(|error| error.into()))
            .collect()
    }

    fn update(
        &self,
        category_id: CategoryId,
        category: NewCategory,
    ) -> Result<Option<Category>, Error> {
        let rows_affected = self.lock()?.execute(
            "UPDATE category SET name = ?1, description = ?2 WHERE id = ?3;",
            (
                category.name.as_ref(),
                category.description.as_deref(),
                category_id,
            ),
        )?;

        if rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(category.with_id(category_id)))
    }

    fn delete(&self, category_id: CategoryId) -> Result<bool, Error> {
        let rows_affected = self
            .lock()?
            .execute("DELETE FROM category WHERE id = ?1;", [category_id])?;

        Ok(rows_affected > 0)
    }
}

/// Initialize the category table.
///
/// `AUTOINCREMENT` stops SQLite from reusing the IDs of deleted rows.
pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS category (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT
        );",
        (),
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Category, rusqlite::Error> {
    let id = row.get(0)?;
    let raw_name: String = row.get(1)?;
    let name = CategoryName::new_unchecked(&raw_name);
    let description = row.get(2)?;

    Ok(Category {
        id,
        name,
        description,
    })
}
