pub mod commands;
pub mod notice_level;
pub mod search_error;
pub mod search_outcome;
