pub mod http_search_client;
pub mod query_dispatcher;
pub mod terminal_frontend;
