pub mod frontend;
pub mod search_client;
