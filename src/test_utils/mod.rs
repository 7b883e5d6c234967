#![allow(missing_docs)]

pub(crate) mod db;
pub(crate) mod http;

pub(crate) use db::{get_test_app_state, insert_test_questions};
pub(crate) use http::parse_json_body;
