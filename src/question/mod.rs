//! Trivia questions and the endpoints for managing them.

mod create;
mod db;
mod delete;
mod domain;
mod list;
mod search;

pub use create::create_question_endpoint;
pub use db::{
    count_questions, create_question, create_question_table, delete_question, get_question,
    get_question_page, get_questions_by_category, map_row as map_question_row, search_questions,
};
pub use delete::delete_question_endpoint;
pub use domain::{NewQuestion, NewQuestionData, Question, QuestionId, QuestionListResponse};
pub use list::get_questions_endpoint;
pub use search::search_questions_endpoint;
