pub mod auth;
pub mod clipboard;
pub mod query;
pub mod storage;
