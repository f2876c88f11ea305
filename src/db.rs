/*! Sets up the application's SQLite database. */

use rusqlite::{Connection, Transaction as SqlTransaction};

use crate::{Error, category::create_category_table};

/// Create the tables for the domain models if they do not exist yet.
///
/// The tables are created inside an exclusive transaction so that two
/// processes opening the same database file do not race.
///
/// # Errors
/// Returns an error if a table cannot be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction =
        SqlTransaction::new_unchecked(connection, rusqlite::TransactionBehavior::Exclusive)?;

    create_category_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
