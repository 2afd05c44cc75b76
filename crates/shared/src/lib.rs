pub mod client;
pub mod fixtures;
pub mod models;
pub mod query;
