//! Database initialization for the application's tables.

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::{
    Error,
    category::{create_category_table, seed_default_categories},
    question::create_question_table,
};

/// Create the tables for the domain models and seed the default categories.
///
/// This is safe to call on an existing database: tables are only created if
/// they do not exist and categories are only seeded into an empty table.
///
/// # Errors
/// Returns an error if there is an SQL error. Nothing is written on error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_category_table(&transaction)?;
    create_question_table(&transaction)?;
    seed_default_categories(&transaction)?;

    transaction.commit()?;

    Ok(())
}
