#![allow(missing_docs)]

pub(crate) mod http;

pub(crate) use http::{assert_content_type, assert_status_ok, parse_json};
