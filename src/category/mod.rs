//! Question categories and the endpoints for browsing them.

mod db;
mod domain;
mod list;
mod questions;

pub use db::{create_category_table, get_all_categories, seed_default_categories};
pub use domain::{Category, CategoryId, CategoryMap, map_categories_by_id};
pub use list::get_categories_endpoint;
pub use questions::get_category_questions_endpoint;
