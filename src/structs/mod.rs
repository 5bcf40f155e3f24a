pub mod api_key;
pub mod api_response;
pub mod cli;
pub mod config;
pub mod http_reply;
pub mod markdown_document;
pub mod notice;
pub mod query;
pub mod search_endpoint;
pub mod search_settings;
