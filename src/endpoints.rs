//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/questions/{question_id}', use [format_endpoint].

/// The route for listing categories.
pub const CATEGORIES: &str = "/categories";
/// The route for listing the questions in a category.
pub const CATEGORY_QUESTIONS: &str = "/categories/{category_id}/questions";
/// The route for listing questions a page at a time and creating questions.
pub const QUESTIONS: &str = "/questions";
/// The route to delete a question.
pub const QUESTION: &str = "/questions/{question_id}";
/// The route for searching question text.
pub const SEARCH_QUESTIONS: &str = "/questions/search";
/// The route for drawing the next quiz question.
pub const QUIZZES: &str = "/quizzes";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace and ends with a
/// right brace. For example, in the endpoint path '/questions/{question_id}',
/// '{question_id}' is the parameter.
///
/// Only the first parameter is replaced. If no parameter is found in
/// `endpoint_path`, the function returns the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map_or(endpoint_path.len(), |end| param_start + end + 1);

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
