//! Database operations for categories.

use rusqlite::{Connection, Row};

use crate::{Error, category::Category};

/// The categories every new database starts with, in ID order.
const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Retrieve all categories ordered by ID.
pub fn get_all_categories(connection: &Connection) -> Result<Vec<Category>, Error> {
    connection
        .prepare("SELECT id, \"type\" FROM category ORDER BY id ASC;")?
        .query_map([], map_row)?
        .map(|maybe_category| maybe_category.map_err(|error| error.into()))
        .collect()
}

/// Initialize the category table.
pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS category (
            id INTEGER PRIMARY KEY,
            \"type\" TEXT NOT NULL
        );",
        (),
    )?;

    Ok(())
}

/// Insert the default categories if the category table is empty.
///
/// Categories cannot be created through the API, so this is the only way
/// they get into the database.
pub fn seed_default_categories(connection: &Connection) -> Result<(), rusqlite::Error> {
    let count: i64 = connection.query_row("SELECT COUNT(*) FROM category;", [], |row| row.get(0))?;

    if count > 0 {
        return Ok(());
    }

    let mut statement = connection.prepare("INSERT INTO category (\"type\") VALUES (?1);")?;
    for type_ in DEFAULT_CATEGORIES {
        statement.execute((type_,))?;
    }

    Ok(())
}

fn map_row(row: &Row) -> Result<Category, rusqlite::Error> {
    Ok(Category {
        id: row.get(0)?,
        type_: row.get(1)?,
    })
}
