//! Core category domain types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Database identifier for a category.
pub type CategoryId = i64;

/// A category that trivia questions belong to (e.g., 'Science', 'Sports').
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Category {
    /// The ID of the category.
    pub id: CategoryId,
    /// The category label, serialized as `type`.
    #[serde(rename = "type")]
    pub type_: String,
}

/// Category labels keyed by category ID.
///
/// Serializes to a JSON object such as `{"1": "Science", "2": "Art"}` with the
/// keys in ascending order.
pub type CategoryMap = BTreeMap<CategoryId, String>;

/// Index `categories` by their ID.
pub fn map_categories_by_id(categories: Vec<Category>) -> CategoryMap {
    categories
        .into_iter()
        .map(|category| (category.id, category.type_))
        .collect()
}
