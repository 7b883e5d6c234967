//! Database operations for questions.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    category::CategoryId,
    pagination::PageWindow,
    question::{NewQuestion, Question, QuestionId},
};

/// Create a question and return it with its generated ID.
///
/// # Errors
/// Returns an error if the question or answer is empty, which violates the
/// table's constraints, or if there is some other SQL error.
pub fn create_question(new_question: NewQuestion, connection: &Connection) -> Result<Question, Error> {
    connection.execute(
        "INSERT INTO question (question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4);",
        (
            &new_question.question,
            &new_question.answer,
            new_question.category,
            new_question.difficulty,
        ),
    )?;

    let id = connection.last_insert_rowid();

    Ok(Question {
        id,
        question: new_question.question,
        answer: new_question.answer,
        category: new_question.category,
        difficulty: new_question.difficulty,
    })
}

/// Retrieve a single question by ID.
pub fn get_question(question_id: QuestionId, connection: &Connection) -> Result<Question, Error> {
    connection
        .prepare(
            "SELECT id, question, answer, category, difficulty FROM question WHERE id = :id;",
        )?
        .query_row(&[(":id", &question_id)], map_row)
        .map_err(|error| error.into())
}

/// Retrieve the questions in `window`, ordered by ID.
pub fn get_question_page(window: PageWindow, connection: &Connection) -> Result<Vec<Question>, Error> {
    // SQLite integers are signed, anything past i64::MAX is past the last row anyway.
    let limit = i64::try_from(window.limit).unwrap_or(i64::MAX);
    let offset = i64::try_from(window.offset).unwrap_or(i64::MAX);

    connection
        .prepare(
            "SELECT id, question, answer, category, difficulty FROM question
            ORDER BY id ASC
            LIMIT ?1 OFFSET ?2;",
        )?
        .query_map((limit, offset), map_row)?
        .map(|maybe_question| maybe_question.map_err(|error| error.into()))
        .collect()
}

/// Count all questions.
pub fn count_questions(connection: &Connection) -> Result<u64, Error> {
    let count: i64 = connection.query_row("SELECT COUNT(*) FROM question;", [], |row| row.get(0))?;

    Ok(count as u64)
}

/// Retrieve the questions in `category`, ordered by ID.
pub fn get_questions_by_category(
    category: CategoryId,
    connection: &Connection,
) -> Result<Vec<Question>, Error> {
    connection
        .prepare(
            "SELECT id, question, answer, category, difficulty FROM question
            WHERE category = ?1
            ORDER BY id ASC;",
        )?
        .query_map([category], map_row)?
        .map(|maybe_question| maybe_question.map_err(|error| error.into()))
        .collect()
}

/// Retrieve the questions whose text contains `search_term`, ignoring case.
///
/// `%` and `_` in `search_term` are matched literally. Case folding follows
/// SQLite's `LIKE`, which only folds ASCII letters.
pub fn search_questions(search_term: &str, connection: &Connection) -> Result<Vec<Question>, Error> {
    connection
        .prepare(
            "SELECT id, question, answer, category, difficulty FROM question
            WHERE question LIKE '%' || ?1 || '%' ESCAPE '\\'
            ORDER BY id ASC;",
        )?
        .query_map([escape_like_pattern(search_term)], map_row)?
        .map(|maybe_question| maybe_question.map_err(|error| error.into()))
        .collect()
}

/// Delete a question by ID. Returns [Error::NotFound] if the question doesn't exist.
pub fn delete_question(question_id: QuestionId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM question WHERE id = ?1", [question_id])?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    Ok(())
}

/// Initialize the question table and indexes.
pub fn create_question_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS question (
            id INTEGER PRIMARY KEY,
            question TEXT NOT NULL CHECK (question <> ''),
            answer TEXT NOT NULL CHECK (answer <> ''),
            category INTEGER NOT NULL,
            difficulty INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_question_category ON question(category);",
    )?;

    Ok(())
}

/// Map a row of `id, question, answer, category, difficulty` to a [Question].
pub fn map_row(row: &Row) -> Result<Question, rusqlite::Error> {
    Ok(Question {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
        category: row.get(3)?,
        difficulty: row.get(4)?,
    })
}

fn escape_like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());

    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    escaped
}
